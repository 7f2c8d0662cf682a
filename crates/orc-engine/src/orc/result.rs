use serde::Serialize;

use super::formula::FormulaKind;

/// Itemised output of one calculation.
///
/// The breakdown is flattened on the wire so each lettered component sits
/// next to `formula`, `totalORC` and `orcPerHectare`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrcResult {
    pub formula: FormulaKind,
    #[serde(flatten)]
    pub breakdown: OrcBreakdown,
    #[serde(rename = "totalORC")]
    pub total_orc: f64,
    pub orc_per_hectare: f64,
}

impl OrcResult {
    /// Rows in formula order, for reports and the breakdown view.
    pub fn line_items(&self) -> Vec<LineItem> {
        self.breakdown.line_items()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OrcBreakdown {
    Perennial(PerennialBreakdown),
    TreeVineNut(TreeVineNutBreakdown),
    AnnualBroadAcre(AnnualBroadAcreBreakdown),
    AnnualShortRotation(ShortRotationBreakdown),
    NurseryRootStock(NurseryRootStockBreakdown),
}

impl OrcBreakdown {
    pub fn line_items(&self) -> Vec<LineItem> {
        match self {
            Self::Perennial(b) => vec![
                LineItem::add('A', "Value of the crop destroyed", b.value_of_crop),
                LineItem::subtract(
                    'H',
                    "Harvesting and production costs",
                    b.harvesting_costs,
                ),
                LineItem::add(
                    'B',
                    "Crop destruction costs (depreciated)",
                    b.destruction_costs,
                ),
                LineItem::add(
                    'C',
                    "Other costs incurred due to the Response Plan",
                    b.additional_costs,
                ),
                LineItem::add(
                    'D',
                    "Crop replanting costs (depreciated)",
                    b.replanting_costs,
                ),
                LineItem::add('E', "Loss from compulsory fallow", b.fallow_loss),
                LineItem::add('F', "Capital items destroyed", b.capital_items_value),
                LineItem::add('G', "Stored produce destroyed", b.stored_produce_value),
            ],
            Self::TreeVineNut(b) => vec![
                LineItem::add('A', "Value of the crop destroyed", b.value_of_crop),
                LineItem::subtract(
                    'B',
                    "Harvesting and production costs",
                    b.harvesting_costs,
                ),
                LineItem::add(
                    'C',
                    "Direct costs of the Response Plan",
                    b.additional_costs,
                ),
                LineItem::add('D', "Capital items destroyed", b.capital_items_value),
                LineItem::add('E', "Loss from compulsory fallow", b.fallow_loss),
                LineItem::add(
                    'F',
                    "Tree destruction costs (depreciated)",
                    b.destruction_costs,
                ),
                LineItem::add('G', "Replanting costs (depreciated)", b.replanting_costs),
                LineItem::add(
                    'H',
                    "Loss of profit during the non-bearing period (depreciated)",
                    b.immature_loss_total,
                ),
                LineItem::add('I', "Stored produce destroyed", b.stored_produce_value),
            ],
            Self::AnnualBroadAcre(b) => vec![
                LineItem::add('A', "Farm gate value of the crop", b.value_of_crop),
                LineItem::subtract(
                    'B',
                    "Harvesting and production costs",
                    b.harvesting_costs,
                ),
                LineItem::add(
                    'C',
                    "Direct costs of the Response Plan",
                    b.additional_costs,
                ),
                LineItem::add('D', "Capital items destroyed", b.capital_items_value),
                LineItem::add('E', "Loss from fallow land", b.fallow_loss),
                LineItem::subtract(
                    'F',
                    "Profit from alternative enterprise",
                    b.alternative_profit,
                ),
                LineItem::add('G', "Stored produce destroyed", b.stored_produce_value),
            ],
            Self::AnnualShortRotation(b) => vec![
                LineItem::add('A', "Farm gate value of the crop", b.value_of_crop),
                LineItem::subtract(
                    'B',
                    "Harvesting, production, packaging and treatment costs",
                    b.harvesting_costs,
                ),
                LineItem::add(
                    'C',
                    "Direct costs of the Response Plan incl. glasshouse cleaning",
                    b.additional_costs,
                ),
                LineItem::add('D', "Capital items destroyed", b.capital_items_value),
                LineItem::add(
                    'E',
                    "Loss from fallow land or empty glasshouses",
                    b.fallow_loss,
                ),
                LineItem::subtract(
                    'F',
                    "Profit from alternative enterprise",
                    b.alternative_profit,
                ),
                LineItem::add('G', "Stored produce destroyed", b.stored_produce_value),
            ],
            Self::NurseryRootStock(b) => vec![
                LineItem::add('A', "Market value of plants", b.value_of_crop),
                LineItem::add(
                    'B',
                    "Direct costs of the Response Plan",
                    b.additional_costs,
                ),
                LineItem::add('C', "Capital items destroyed", b.capital_items_value),
                LineItem::add('D', "Stocks on hand destroyed", b.stored_produce_value),
            ],
        }
    }
}

/// `ORC = (A - H) + B + C + D + E + F + G`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerennialBreakdown {
    pub value_of_crop: f64,
    pub harvesting_costs: f64,
    pub destruction_costs: f64,
    pub destruction_depreciation_factor: f64,
    pub additional_costs: f64,
    pub replanting_costs: f64,
    pub replanting_depreciation_factor: f64,
    pub fallow_loss: f64,
    pub capital_items_value: f64,
    pub stored_produce_value: f64,
}

/// `ORC = (A - B) + C + D + E + F + G + H + I`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeVineNutBreakdown {
    pub value_of_crop: f64,
    pub harvesting_costs: f64,
    pub additional_costs: f64,
    pub capital_items_value: f64,
    pub fallow_loss: f64,
    pub depreciation_factor: f64,
    pub destruction_costs: f64,
    pub replanting_costs: f64,
    pub immature_loss_total: f64,
    pub non_bearing_period: f64,
    pub stored_produce_value: f64,
}

/// `ORC = (A - B) + C + D + E - F + G`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualBroadAcreBreakdown {
    pub value_of_crop: f64,
    pub harvesting_costs: f64,
    pub additional_costs: f64,
    pub capital_items_value: f64,
    pub fallow_loss: f64,
    pub alternative_profit: f64,
    pub stored_produce_value: f64,
}

/// `ORC = (A - B) + C + D + E - F + G`, with a week threshold on fallow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortRotationBreakdown {
    pub value_of_crop: f64,
    pub harvesting_costs: f64,
    pub additional_costs: f64,
    pub capital_items_value: f64,
    pub fallow_loss: f64,
    pub alternative_profit: f64,
    pub stored_produce_value: f64,
    pub min_fallow_period_weeks: f64,
    pub effective_fallow_period: f64,
}

/// `ORC = A + B + C + D`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NurseryRootStockBreakdown {
    pub value_of_crop: f64,
    pub additional_costs: f64,
    pub capital_items_value: f64,
    pub stored_produce_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEffect {
    Add,
    Subtract,
}

impl LineEffect {
    pub const fn sign(self) -> f64 {
        match self {
            Self::Add => 1.0,
            Self::Subtract => -1.0,
        }
    }
}

/// One lettered component of a formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub letter: char,
    pub label: &'static str,
    pub amount: f64,
    pub effect: LineEffect,
}

impl LineItem {
    fn add(letter: char, label: &'static str, amount: f64) -> Self {
        Self {
            letter,
            label,
            amount,
            effect: LineEffect::Add,
        }
    }

    fn subtract(letter: char, label: &'static str, amount: f64) -> Self {
        Self {
            letter,
            label,
            amount,
            effect: LineEffect::Subtract,
        }
    }

    /// Contribution to the total, negative for subtracted components.
    pub fn signed_amount(&self) -> f64 {
        self.amount * self.effect.sign()
    }
}

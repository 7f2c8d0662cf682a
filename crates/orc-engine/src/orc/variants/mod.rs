mod broad_acre;
mod nursery;
mod perennial;
mod short_rotation;
mod tree_vine_nut;

use super::components::per_hectare;
use super::domain::CropRecord;
use super::formula::FormulaKind;
use super::result::{OrcBreakdown, OrcResult};

pub(crate) fn calculate(formula: FormulaKind, record: &CropRecord) -> OrcResult {
    let breakdown = match formula {
        FormulaKind::Perennial => OrcBreakdown::Perennial(perennial::breakdown(record)),
        FormulaKind::TreeVineNut => OrcBreakdown::TreeVineNut(tree_vine_nut::breakdown(record)),
        FormulaKind::AnnualBroadAcre => {
            OrcBreakdown::AnnualBroadAcre(broad_acre::breakdown(record))
        }
        FormulaKind::AnnualShortRotation => {
            OrcBreakdown::AnnualShortRotation(short_rotation::breakdown(record))
        }
        FormulaKind::NurseryRootStock => {
            OrcBreakdown::NurseryRootStock(nursery::breakdown(record))
        }
    };

    let total_orc = breakdown
        .line_items()
        .iter()
        .map(|item| item.signed_amount())
        .sum::<f64>();

    OrcResult {
        formula,
        breakdown,
        total_orc,
        orc_per_hectare: per_hectare(total_orc, record.crop_area),
    }
}

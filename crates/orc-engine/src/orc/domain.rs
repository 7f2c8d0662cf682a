use serde::{Deserialize, Serialize};

/// Default minimum fallow period for short-rotation crops, in weeks.
pub const DEFAULT_MIN_FALLOW_WEEKS: f64 = 10.0;

/// Top-level crop classification selected on the form.
///
/// Unknown or null wire values are kept as [`CropType::Unrecognized`] instead
/// of failing deserialization, so the dispatcher can fall back to the
/// broad-acre formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum CropType {
    #[default]
    Perennial,
    AnnualBroadAcre,
    TreeVineNut,
    AnnualShortRotation,
    Unrecognized,
}

impl CropType {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Perennial,
            Self::TreeVineNut,
            Self::AnnualBroadAcre,
            Self::AnnualShortRotation,
        ]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Perennial => "perennial",
            Self::AnnualBroadAcre => "annual-broad-acre",
            Self::TreeVineNut => "tree-vine-nut",
            Self::AnnualShortRotation => "annual-short-rotation",
            Self::Unrecognized => "unrecognized",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Perennial => "Perennial",
            Self::AnnualBroadAcre => "Annual Broad Acre",
            Self::TreeVineNut => "Perennial Trees/Vine Crops/Nut Crops",
            Self::AnnualShortRotation => "Annual Short Rotation Crops",
            Self::Unrecognized => "Unrecognized",
        }
    }

    pub fn from_tag(raw: &str) -> Self {
        match normalized(raw).as_str() {
            "perennial" => Self::Perennial,
            "annual-broad-acre" => Self::AnnualBroadAcre,
            "tree-vine-nut" => Self::TreeVineNut,
            "annual-short-rotation" => Self::AnnualShortRotation,
            _ => Self::Unrecognized,
        }
    }
}

impl From<Option<String>> for CropType {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unrecognized, |raw| Self::from_tag(&raw))
    }
}

impl From<CropType> for String {
    fn from(value: CropType) -> Self {
        value.tag().to_string()
    }
}

/// Sub-classifier for perennial crops. Anything other than banana or
/// sugar-cane is [`CropCategory::Other`], which has no perennial formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum CropCategory {
    #[default]
    Banana,
    SugarCane,
    Other,
}

impl CropCategory {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Banana => "banana",
            Self::SugarCane => "sugar-cane",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Banana => "Banana",
            Self::SugarCane => "Sugar Cane",
            Self::Other => "Other",
        }
    }

    pub fn from_tag(raw: &str) -> Self {
        match normalized(raw).as_str() {
            "banana" => Self::Banana,
            "sugar-cane" => Self::SugarCane,
            _ => Self::Other,
        }
    }
}

impl From<Option<String>> for CropCategory {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Other, |raw| Self::from_tag(&raw))
    }
}

impl From<CropCategory> for String {
    fn from(value: CropCategory) -> Self {
        value.tag().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum TreeType {
    #[default]
    FruitTrees,
    VineCrops,
    NutCrops,
    BareRoot,
    Other,
}

impl TreeType {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::FruitTrees => "fruit-trees",
            Self::VineCrops => "vine-crops",
            Self::NutCrops => "nut-crops",
            Self::BareRoot => "bare-root",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FruitTrees => "Fruit Trees",
            Self::VineCrops => "Vine Crops",
            Self::NutCrops => "Nut Crops",
            Self::BareRoot => "Bare Root Stock",
            Self::Other => "Other",
        }
    }

    pub fn from_tag(raw: &str) -> Self {
        match normalized(raw).as_str() {
            "fruit-trees" => Self::FruitTrees,
            "vine-crops" => Self::VineCrops,
            "nut-crops" => Self::NutCrops,
            "bare-root" => Self::BareRoot,
            _ => Self::Other,
        }
    }
}

impl From<Option<String>> for TreeType {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Other, |raw| Self::from_tag(&raw))
    }
}

impl From<TreeType> for String {
    fn from(value: TreeType) -> Self {
        value.tag().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum BareRootType {
    #[default]
    NurseryStock,
    LargePlants,
    NurseryRootStock,
    NurseryLargeRootedPlants,
    Other,
}

impl BareRootType {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::NurseryStock => "nursery-stock",
            Self::LargePlants => "large-plants",
            Self::NurseryRootStock => "nursery-root-stock",
            Self::NurseryLargeRootedPlants => "nursery-large-rooted-plants",
            Self::Other => "other",
        }
    }

    pub fn from_tag(raw: &str) -> Self {
        match normalized(raw).as_str() {
            "nursery-stock" => Self::NurseryStock,
            "large-plants" => Self::LargePlants,
            "nursery-root-stock" => Self::NurseryRootStock,
            "nursery-large-rooted-plants" => Self::NurseryLargeRootedPlants,
            _ => Self::Other,
        }
    }

    /// Nursery production stock is valued at market rather than depreciated.
    pub const fn is_nursery_production(self) -> bool {
        matches!(self, Self::NurseryRootStock | Self::NurseryLargeRootedPlants)
    }
}

impl From<Option<String>> for BareRootType {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Other, |raw| Self::from_tag(&raw))
    }
}

impl From<BareRootType> for String {
    fn from(value: BareRootType) -> Self {
        value.tag().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ShortRotationType {
    #[default]
    Vegetables,
    Strawberries,
    Nursery,
    Other,
}

impl ShortRotationType {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Vegetables => "vegetables",
            Self::Strawberries => "strawberries",
            Self::Nursery => "nursery",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vegetables => "Vegetables",
            Self::Strawberries => "Strawberries",
            Self::Nursery => "Nursery",
            Self::Other => "Other",
        }
    }

    pub fn from_tag(raw: &str) -> Self {
        match normalized(raw).as_str() {
            "vegetables" => Self::Vegetables,
            "strawberries" => Self::Strawberries,
            "nursery" => Self::Nursery,
            _ => Self::Other,
        }
    }
}

impl From<Option<String>> for ShortRotationType {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Other, |raw| Self::from_tag(&raw))
    }
}

impl From<ShortRotationType> for String {
    fn from(value: ShortRotationType) -> Self {
        value.tag().to_string()
    }
}

/// Whether yield is measured by weight (tonnes) or by unit count. Anything
/// other than `count` is read as weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum UnitType {
    #[default]
    Weight,
    Count,
}

impl UnitType {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Count => "count",
        }
    }
}

impl From<Option<String>> for UnitType {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(raw) if normalized(&raw) == "count" => Self::Count,
            _ => Self::Weight,
        }
    }
}

impl From<UnitType> for String {
    fn from(value: UnitType) -> Self {
        value.tag().to_string()
    }
}

fn normalized(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberField {
    Number(Option<f64>),
    Text(String),
}

/// Numeric form field: null, blank or non-numeric text reads as zero and
/// numeric text is parsed.
fn deserialize_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match NumberField::deserialize(deserializer)? {
        NumberField::Number(value) => value.unwrap_or(0.0),
        NumberField::Text(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| !value.is_nan())
            .unwrap_or(0.0),
    })
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// A single compensation scenario as captured by the calculator form.
///
/// Every numeric field carries an explicit default (zero, except
/// `min_fallow_period` which defaults to ten weeks), and the serde default
/// applies per field, so a partially filled record always deserializes.
/// Rates named `*_costs` are per hectare unless documented otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CropRecord {
    pub crop_type: CropType,
    pub crop_category: CropCategory,
    pub tree_type: TreeType,
    pub bare_root_type: BareRootType,
    pub short_rotation_type: ShortRotationType,

    /// Catalog name of the selected crop, e.g. `apple` or `wheat`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_variety: Option<String>,

    /// Hectares destroyed.
    #[serde(deserialize_with = "deserialize_number")]
    pub crop_area: f64,
    /// Tonnes per hectare, or units per hectare for count-based stock.
    #[serde(rename = "yield", deserialize_with = "deserialize_number")]
    pub yield_per_hectare: f64,
    pub unit_type: UnitType,
    /// Units per hectare, used instead of yield when `unit_type` is count.
    #[serde(deserialize_with = "deserialize_number")]
    pub unit_count: f64,

    #[serde(deserialize_with = "deserialize_number")]
    pub price: f64,
    #[serde(deserialize_with = "deserialize_flag")]
    pub has_forward_contract: bool,
    #[serde(deserialize_with = "deserialize_number")]
    pub forward_contract_price: f64,

    #[serde(deserialize_with = "deserialize_number")]
    pub harvesting_costs: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub production_costs: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub destruction_costs: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub replanting_costs: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub packaging_costs: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub treatment_costs: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub glass_house_costs: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub additional_costs: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub biosecurity_operating_costs: f64,
    /// Absolute amount, not scaled by area.
    #[serde(deserialize_with = "deserialize_number")]
    pub biosecurity_capital_costs: f64,

    /// Absolute replacement value, not scaled by area.
    #[serde(deserialize_with = "deserialize_number")]
    pub capital_items_value: f64,
    #[serde(deserialize_with = "deserialize_flag")]
    pub has_stored_produce: bool,
    /// Tonnes of stored produce destroyed.
    #[serde(deserialize_with = "deserialize_number")]
    pub stored_produce_amount: f64,
    /// Price per tonne of stored produce.
    #[serde(deserialize_with = "deserialize_number")]
    pub stored_produce_price: f64,

    /// Years since planting.
    #[serde(deserialize_with = "deserialize_number")]
    pub crop_age: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub rotation_period: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub non_bearing_period: f64,
    /// Years of fallow imposed by the response plan.
    #[serde(deserialize_with = "deserialize_number")]
    pub fallow_period: f64,
    /// Years of fallow the grower would have observed anyway.
    #[serde(deserialize_with = "deserialize_number")]
    pub normal_fallow_period: f64,
    /// Percent per year. Zero means unspecified.
    #[serde(deserialize_with = "deserialize_number")]
    pub discount_rate: f64,
    /// Weeks. Zero means unspecified.
    #[serde(deserialize_with = "deserialize_number")]
    pub min_fallow_period: f64,

    #[serde(deserialize_with = "deserialize_number")]
    pub gross_margin: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub immature_loss: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub alternative_enterprise_profit: f64,
}

impl Default for CropRecord {
    fn default() -> Self {
        Self {
            crop_type: CropType::default(),
            crop_category: CropCategory::default(),
            tree_type: TreeType::default(),
            bare_root_type: BareRootType::default(),
            short_rotation_type: ShortRotationType::default(),
            crop: None,
            region: None,
            crop_variety: None,
            crop_area: 0.0,
            yield_per_hectare: 0.0,
            unit_type: UnitType::default(),
            unit_count: 0.0,
            price: 0.0,
            has_forward_contract: false,
            forward_contract_price: 0.0,
            harvesting_costs: 0.0,
            production_costs: 0.0,
            destruction_costs: 0.0,
            replanting_costs: 0.0,
            packaging_costs: 0.0,
            treatment_costs: 0.0,
            glass_house_costs: 0.0,
            additional_costs: 0.0,
            biosecurity_operating_costs: 0.0,
            biosecurity_capital_costs: 0.0,
            capital_items_value: 0.0,
            has_stored_produce: false,
            stored_produce_amount: 0.0,
            stored_produce_price: 0.0,
            crop_age: 0.0,
            rotation_period: 0.0,
            non_bearing_period: 0.0,
            fallow_period: 0.0,
            normal_fallow_period: 0.0,
            discount_rate: 0.0,
            min_fallow_period: DEFAULT_MIN_FALLOW_WEEKS,
            gross_margin: 0.0,
            immature_loss: 0.0,
            alternative_enterprise_profit: 0.0,
        }
    }
}

impl CropRecord {
    /// Human-readable crop type used in report headers.
    pub fn crop_type_label(&self) -> String {
        match self.crop_type {
            CropType::Perennial => format!("Perennial - {}", self.crop_category.label()),
            other => other.label().to_string(),
        }
    }
}

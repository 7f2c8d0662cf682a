use serde::{Deserialize, Serialize};

use super::domain::{CropCategory, CropRecord, CropType};

/// The five statutory ORC formulas. Exactly one applies to any crop record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormulaKind {
    /// Banana and sugar-cane.
    #[serde(rename = "banana")]
    Perennial,
    TreeVineNut,
    AnnualBroadAcre,
    AnnualShortRotation,
    NurseryRootStock,
}

impl FormulaKind {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Perennial,
            Self::TreeVineNut,
            Self::AnnualBroadAcre,
            Self::AnnualShortRotation,
            Self::NurseryRootStock,
        ]
    }

    /// Select the formula for a record. First match wins; unrecognized crop
    /// types and perennials outside banana and sugar-cane fall back to the
    /// broad-acre formula.
    pub fn classify(record: &CropRecord) -> Self {
        match record.crop_type {
            CropType::TreeVineNut if record.bare_root_type.is_nursery_production() => {
                Self::NurseryRootStock
            }
            // Sugar-cane has no formula of its own yet and shares the banana one.
            CropType::Perennial => match record.crop_category {
                CropCategory::Banana | CropCategory::SugarCane => Self::Perennial,
                CropCategory::Other => Self::AnnualBroadAcre,
            },
            CropType::TreeVineNut => Self::TreeVineNut,
            CropType::AnnualBroadAcre => Self::AnnualBroadAcre,
            CropType::AnnualShortRotation => Self::AnnualShortRotation,
            CropType::Unrecognized => Self::AnnualBroadAcre,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Perennial => "banana",
            Self::TreeVineNut => "tree-vine-nut",
            Self::AnnualBroadAcre => "annual-broad-acre",
            Self::AnnualShortRotation => "annual-short-rotation",
            Self::NurseryRootStock => "nursery-root-stock",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Perennial => "Perennial Crops (Banana / Sugar Cane)",
            Self::TreeVineNut => "Perennial Trees, Vine Crops and Nut Crops",
            Self::AnnualBroadAcre => "Annual Broad Acre Crops",
            Self::AnnualShortRotation => "Annual Short Rotation Crops",
            Self::NurseryRootStock => "Nursery Root Stock and Large Rooted Plants",
        }
    }

    pub const fn expression(self) -> &'static str {
        match self {
            Self::Perennial => "ORC = (A - H) + B + C + D + E + F + G",
            Self::TreeVineNut => "ORC = (A - B) + C + D + E + F + G + H + I",
            Self::AnnualBroadAcre | Self::AnnualShortRotation => {
                "ORC = (A - B) + C + D + E - F + G"
            }
            Self::NurseryRootStock => "ORC = A + B + C + D",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orc::domain::{BareRootType, TreeType};

    fn record(crop_type: CropType) -> CropRecord {
        CropRecord {
            crop_type,
            ..CropRecord::default()
        }
    }

    #[test]
    fn nursery_bare_root_takes_precedence() {
        for bare_root_type in [
            BareRootType::NurseryRootStock,
            BareRootType::NurseryLargeRootedPlants,
        ] {
            let record = CropRecord {
                bare_root_type,
                tree_type: TreeType::BareRoot,
                ..record(CropType::TreeVineNut)
            };
            assert_eq!(FormulaKind::classify(&record), FormulaKind::NurseryRootStock);
        }
    }

    #[test]
    fn other_bare_root_stock_uses_tree_formula() {
        let record = CropRecord {
            bare_root_type: BareRootType::LargePlants,
            tree_type: TreeType::BareRoot,
            ..record(CropType::TreeVineNut)
        };
        assert_eq!(FormulaKind::classify(&record), FormulaKind::TreeVineNut);
    }

    #[test]
    fn nursery_bare_root_is_ignored_outside_tree_crops() {
        let record = CropRecord {
            bare_root_type: BareRootType::NurseryRootStock,
            ..record(CropType::AnnualShortRotation)
        };
        assert_eq!(
            FormulaKind::classify(&record),
            FormulaKind::AnnualShortRotation
        );
    }

    #[test]
    fn sugar_cane_shares_the_banana_formula() {
        let record = CropRecord {
            crop_category: CropCategory::SugarCane,
            ..record(CropType::Perennial)
        };
        assert_eq!(FormulaKind::classify(&record), FormulaKind::Perennial);
        assert_eq!(FormulaKind::Perennial.tag(), "banana");
    }

    #[test]
    fn unrecognized_type_falls_back_to_broad_acre() {
        assert_eq!(
            FormulaKind::classify(&record(CropType::Unrecognized)),
            FormulaKind::AnnualBroadAcre
        );
    }

    #[test]
    fn other_perennial_category_falls_back_to_broad_acre() {
        let record = CropRecord {
            crop_category: CropCategory::Other,
            ..record(CropType::Perennial)
        };
        assert_eq!(
            FormulaKind::classify(&record),
            FormulaKind::AnnualBroadAcre
        );
    }

    #[test]
    fn serialized_tag_matches_tag() {
        for kind in FormulaKind::ordered() {
            let json = serde_json::to_value(kind).expect("formula serializes");
            assert_eq!(json, kind.tag());
        }
    }
}

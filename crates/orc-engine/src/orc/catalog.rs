//! Named crops offered by the calculator and the classification each implies.

use serde::Serialize;

use super::domain::{
    BareRootType, CropCategory, CropRecord, CropType, ShortRotationType, TreeType,
};
use super::formula::FormulaKind;

/// Leaf classification a crop name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CropClass {
    Perennial { category: CropCategory },
    Tree { tree_type: TreeType },
    BareRoot { bare_root_type: BareRootType },
    BroadAcre,
    ShortRotation { short_rotation_type: ShortRotationType },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub class: CropClass,
}

impl CatalogEntry {
    pub const fn crop_type(&self) -> CropType {
        match self.class {
            CropClass::Perennial { .. } => CropType::Perennial,
            CropClass::Tree { .. } | CropClass::BareRoot { .. } => CropType::TreeVineNut,
            CropClass::BroadAcre => CropType::AnnualBroadAcre,
            CropClass::ShortRotation { .. } => CropType::AnnualShortRotation,
        }
    }

    /// Fresh record with defaults and this crop's classification applied.
    pub fn record(&self) -> CropRecord {
        let mut record = CropRecord {
            crop_type: self.crop_type(),
            crop: Some(self.name.to_string()),
            ..CropRecord::default()
        };

        match self.class {
            CropClass::Perennial { category } => record.crop_category = category,
            CropClass::Tree { tree_type } => record.tree_type = tree_type,
            CropClass::BareRoot { bare_root_type } => {
                record.tree_type = TreeType::BareRoot;
                record.bare_root_type = bare_root_type;
            }
            CropClass::BroadAcre => {}
            CropClass::ShortRotation {
                short_rotation_type,
            } => record.short_rotation_type = short_rotation_type,
        }

        record
    }

    pub fn formula(&self) -> FormulaKind {
        FormulaKind::classify(&self.record())
    }
}

const fn perennial(name: &'static str, category: CropCategory) -> CatalogEntry {
    CatalogEntry {
        name,
        class: CropClass::Perennial { category },
    }
}

const fn tree(name: &'static str, tree_type: TreeType) -> CatalogEntry {
    CatalogEntry {
        name,
        class: CropClass::Tree { tree_type },
    }
}

const fn bare_root(name: &'static str, bare_root_type: BareRootType) -> CatalogEntry {
    CatalogEntry {
        name,
        class: CropClass::BareRoot { bare_root_type },
    }
}

const fn broad_acre(name: &'static str) -> CatalogEntry {
    CatalogEntry {
        name,
        class: CropClass::BroadAcre,
    }
}

const fn short_rotation(name: &'static str, short_rotation_type: ShortRotationType) -> CatalogEntry {
    CatalogEntry {
        name,
        class: CropClass::ShortRotation {
            short_rotation_type,
        },
    }
}

const CATALOG: &[CatalogEntry] = &[
    perennial("banana", CropCategory::Banana),
    perennial("sugar-cane", CropCategory::SugarCane),
    tree("apple", TreeType::FruitTrees),
    tree("pear", TreeType::FruitTrees),
    tree("quince", TreeType::FruitTrees),
    tree("peach", TreeType::FruitTrees),
    tree("plum", TreeType::FruitTrees),
    tree("cherry", TreeType::FruitTrees),
    tree("apricot", TreeType::FruitTrees),
    tree("nectarine", TreeType::FruitTrees),
    tree("orange", TreeType::FruitTrees),
    tree("lemon", TreeType::FruitTrees),
    tree("lime", TreeType::FruitTrees),
    tree("mandarin", TreeType::FruitTrees),
    tree("grapefruit", TreeType::FruitTrees),
    tree("mango", TreeType::FruitTrees),
    tree("avocado", TreeType::FruitTrees),
    tree("papaya", TreeType::FruitTrees),
    tree("grapes", TreeType::VineCrops),
    tree("kiwifruit", TreeType::VineCrops),
    tree("passionfruit", TreeType::VineCrops),
    tree("almonds", TreeType::NutCrops),
    tree("walnuts", TreeType::NutCrops),
    tree("pistachios", TreeType::NutCrops),
    tree("macadamias", TreeType::NutCrops),
    tree("hazelnuts", TreeType::NutCrops),
    tree("pecans", TreeType::NutCrops),
    bare_root("nursery-stock", BareRootType::NurseryStock),
    bare_root("large-plants", BareRootType::LargePlants),
    bare_root("nursery-root-stock", BareRootType::NurseryRootStock),
    bare_root(
        "nursery-large-rooted-plants",
        BareRootType::NurseryLargeRootedPlants,
    ),
    broad_acre("wheat"),
    broad_acre("barley"),
    broad_acre("oats"),
    broad_acre("rye"),
    broad_acre("rice"),
    broad_acre("maize"),
    broad_acre("sorghum"),
    broad_acre("millet"),
    broad_acre("soybeans"),
    broad_acre("chickpeas"),
    broad_acre("lentils"),
    broad_acre("field-peas"),
    broad_acre("faba-beans"),
    broad_acre("mung-beans"),
    broad_acre("canola"),
    broad_acre("sunflower"),
    broad_acre("safflower"),
    broad_acre("linseed"),
    broad_acre("cotton"),
    broad_acre("sugar-beet"),
    broad_acre("alfalfa"),
    short_rotation("lettuce", ShortRotationType::Vegetables),
    short_rotation("spinach", ShortRotationType::Vegetables),
    short_rotation("kale", ShortRotationType::Vegetables),
    short_rotation("arugula", ShortRotationType::Vegetables),
    short_rotation("carrots", ShortRotationType::Vegetables),
    short_rotation("radishes", ShortRotationType::Vegetables),
    short_rotation("beets", ShortRotationType::Vegetables),
    short_rotation("turnips", ShortRotationType::Vegetables),
    short_rotation("tomatoes", ShortRotationType::Vegetables),
    short_rotation("cucumbers", ShortRotationType::Vegetables),
    short_rotation("bell-peppers", ShortRotationType::Vegetables),
    short_rotation("eggplants", ShortRotationType::Vegetables),
    short_rotation("onions", ShortRotationType::Vegetables),
    short_rotation("garlic", ShortRotationType::Vegetables),
    short_rotation("leeks", ShortRotationType::Vegetables),
    short_rotation("green-beans", ShortRotationType::Vegetables),
    short_rotation("snap-peas", ShortRotationType::Vegetables),
    short_rotation("zucchini", ShortRotationType::Vegetables),
    short_rotation("pumpkins", ShortRotationType::Vegetables),
    short_rotation("melons", ShortRotationType::Vegetables),
    short_rotation("strawberries", ShortRotationType::Strawberries),
    short_rotation("seedlings", ShortRotationType::Nursery),
    short_rotation("plug-stock", ShortRotationType::Nursery),
    short_rotation("potted-color", ShortRotationType::Nursery),
    short_rotation("trees-shrubs", ShortRotationType::Nursery),
    short_rotation("foliage-plants", ShortRotationType::Nursery),
    short_rotation("mother-stock", ShortRotationType::Nursery),
];

pub fn entries() -> &'static [CatalogEntry] {
    CATALOG
}

/// Case-insensitive lookup by crop name.
pub fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    let needle = name.trim();
    CATALOG
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(needle))
}

impl CropRecord {
    /// Default record for a catalog crop, mirroring the form's reset when a
    /// crop is picked. `None` when the crop is not in the catalog.
    pub fn for_crop(name: &str) -> Option<Self> {
        lookup(name).map(CatalogEntry::record)
    }
}

use crate::orc::domain::{
    BareRootType, CropCategory, CropRecord, CropType, TreeType, UnitType,
};

pub(super) fn banana_record() -> CropRecord {
    CropRecord {
        crop_type: CropType::Perennial,
        crop_category: CropCategory::Banana,
        crop_area: 10.0,
        yield_per_hectare: 30.0,
        price: 600.0,
        harvesting_costs: 2000.0,
        destruction_costs: 1500.0,
        crop_age: 2.0,
        discount_rate: 5.0,
        replanting_costs: 1000.0,
        additional_costs: 500.0,
        gross_margin: 3000.0,
        fallow_period: 1.0,
        normal_fallow_period: 0.0,
        capital_items_value: 5000.0,
        stored_produce_amount: 0.0,
        ..CropRecord::default()
    }
}

pub(super) fn broad_acre_record() -> CropRecord {
    CropRecord {
        crop_type: CropType::AnnualBroadAcre,
        crop_area: 5.0,
        yield_per_hectare: 4.0,
        price: 300.0,
        has_forward_contract: true,
        forward_contract_price: 350.0,
        harvesting_costs: 100.0,
        ..CropRecord::default()
    }
}

pub(super) fn count_short_rotation_record() -> CropRecord {
    CropRecord {
        crop_type: CropType::AnnualShortRotation,
        crop_area: 2.0,
        unit_type: UnitType::Count,
        unit_count: 1000.0,
        price: 0.5,
        fallow_period: 0.1,
        min_fallow_period: 10.0,
        ..CropRecord::default()
    }
}

pub(super) fn nursery_record() -> CropRecord {
    CropRecord {
        crop_type: CropType::TreeVineNut,
        tree_type: TreeType::BareRoot,
        bare_root_type: BareRootType::NurseryRootStock,
        crop_area: 1.0,
        yield_per_hectare: 100.0,
        price: 10.0,
        additional_costs: 200.0,
        destruction_costs: 300.0,
        capital_items_value: 1000.0,
        stored_produce_amount: 5.0,
        stored_produce_price: 20.0,
        ..CropRecord::default()
    }
}

pub(super) fn orchard_record() -> CropRecord {
    CropRecord {
        crop_type: CropType::TreeVineNut,
        tree_type: TreeType::FruitTrees,
        crop_area: 4.0,
        yield_per_hectare: 25.0,
        price: 800.0,
        harvesting_costs: 1500.0,
        production_costs: 500.0,
        additional_costs: 250.0,
        capital_items_value: 12000.0,
        gross_margin: 4000.0,
        fallow_period: 5.0,
        normal_fallow_period: 0.5,
        crop_age: 5.0,
        rotation_period: 20.0,
        destruction_costs: 2000.0,
        replanting_costs: 6000.0,
        non_bearing_period: 3.0,
        stored_produce_amount: 10.0,
        stored_produce_price: 700.0,
        ..CropRecord::default()
    }
}

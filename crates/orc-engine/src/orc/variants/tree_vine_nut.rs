use crate::orc::components::{
    area_scaled, crop_value, excess_fallow_years, fallow_loss, harvesting_and_production,
    rotation_depreciation_factor, stored_produce_value,
};
use crate::orc::domain::CropRecord;
use crate::orc::result::TreeVineNutBreakdown;

pub(super) fn breakdown(record: &CropRecord) -> TreeVineNutBreakdown {
    let area = record.crop_area;
    let factor = rotation_depreciation_factor(record.crop_age, record.rotation_period);

    // Unlike the other variants, tree fallow loss is not capped at three years.
    let fallow_years = excess_fallow_years(record.fallow_period, record.normal_fallow_period);

    let immature_loss = if record.immature_loss != 0.0 {
        record.immature_loss
    } else {
        record.gross_margin
    };

    TreeVineNutBreakdown {
        value_of_crop: crop_value(area, record.yield_per_hectare, record.price),
        harvesting_costs: harvesting_and_production(record),
        additional_costs: area_scaled(record.additional_costs, area),
        capital_items_value: record.capital_items_value,
        fallow_loss: fallow_loss(record.gross_margin, area, fallow_years),
        depreciation_factor: factor,
        destruction_costs: area_scaled(record.destruction_costs, area) * factor,
        replanting_costs: area_scaled(record.replanting_costs, area) * factor,
        immature_loss_total: area_scaled(immature_loss, area) * record.non_bearing_period * factor,
        non_bearing_period: record.non_bearing_period,
        stored_produce_value: stored_produce_value(record),
    }
}

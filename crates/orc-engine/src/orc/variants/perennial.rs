use crate::orc::components::{
    age_depreciation_factor, area_scaled, capped_fallow_years, crop_value, fallow_loss,
    harvesting_and_production, stored_produce_value,
};
use crate::orc::domain::CropRecord;
use crate::orc::result::PerennialBreakdown;

pub(super) fn breakdown(record: &CropRecord) -> PerennialBreakdown {
    let area = record.crop_area;
    let factor = age_depreciation_factor(record.crop_age, record.discount_rate);

    let additional_costs = area_scaled(
        record.additional_costs + record.biosecurity_operating_costs,
        area,
    ) + record.biosecurity_capital_costs;

    PerennialBreakdown {
        value_of_crop: crop_value(area, record.yield_per_hectare, record.price),
        harvesting_costs: harvesting_and_production(record),
        destruction_costs: area_scaled(record.destruction_costs, area) * factor,
        destruction_depreciation_factor: factor,
        additional_costs,
        replanting_costs: area_scaled(record.replanting_costs, area) * factor,
        replanting_depreciation_factor: factor,
        fallow_loss: fallow_loss(
            record.gross_margin,
            area,
            capped_fallow_years(record.fallow_period, record.normal_fallow_period),
        ),
        capital_items_value: record.capital_items_value,
        stored_produce_value: stored_produce_value(record),
    }
}

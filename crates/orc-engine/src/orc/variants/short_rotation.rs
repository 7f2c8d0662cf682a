use crate::orc::components::{
    area_scaled, crop_value, effective_price, fallow_loss, min_fallow_weeks,
    stored_produce_value, threshold_fallow,
};
use crate::orc::domain::{CropRecord, UnitType};
use crate::orc::result::ShortRotationBreakdown;

pub(super) fn breakdown(record: &CropRecord) -> ShortRotationBreakdown {
    let area = record.crop_area;

    // Count-based stock is always valued at market price.
    let value_of_crop = match record.unit_type {
        UnitType::Count => crop_value(area, record.unit_count, record.price),
        UnitType::Weight => crop_value(area, record.yield_per_hectare, effective_price(record)),
    };

    let harvesting_costs = area_scaled(
        record.harvesting_costs
            + record.production_costs
            + record.packaging_costs
            + record.treatment_costs,
        area,
    );

    let fallow = threshold_fallow(record.fallow_period, min_fallow_weeks(record));

    ShortRotationBreakdown {
        value_of_crop,
        harvesting_costs,
        additional_costs: area_scaled(record.additional_costs + record.glass_house_costs, area),
        capital_items_value: record.capital_items_value,
        fallow_loss: fallow_loss(record.gross_margin, area, fallow.effective_years),
        alternative_profit: area_scaled(record.alternative_enterprise_profit, area),
        stored_produce_value: stored_produce_value(record),
        min_fallow_period_weeks: fallow.threshold_weeks,
        effective_fallow_period: fallow.effective_years,
    }
}

use crate::orc::components::{
    area_scaled, capped_fallow_years, crop_value, effective_price, fallow_loss,
    harvesting_and_production, stored_produce_value,
};
use crate::orc::domain::CropRecord;
use crate::orc::result::AnnualBroadAcreBreakdown;

pub(super) fn breakdown(record: &CropRecord) -> AnnualBroadAcreBreakdown {
    let area = record.crop_area;

    AnnualBroadAcreBreakdown {
        value_of_crop: crop_value(area, record.yield_per_hectare, effective_price(record)),
        harvesting_costs: harvesting_and_production(record),
        additional_costs: area_scaled(record.additional_costs, area),
        capital_items_value: record.capital_items_value,
        fallow_loss: fallow_loss(
            record.gross_margin,
            area,
            capped_fallow_years(record.fallow_period, record.normal_fallow_period),
        ),
        alternative_profit: area_scaled(record.alternative_enterprise_profit, area),
        stored_produce_value: stored_produce_value(record),
    }
}

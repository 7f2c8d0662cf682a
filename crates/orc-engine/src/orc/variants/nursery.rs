use crate::orc::components::{area_scaled, crop_value, stored_produce_value};
use crate::orc::domain::CropRecord;
use crate::orc::result::NurseryRootStockBreakdown;

/// Destruction costs are reimbursed in full alongside the other response
/// plan costs; nursery stock is never depreciated.
pub(super) fn breakdown(record: &CropRecord) -> NurseryRootStockBreakdown {
    let area = record.crop_area;

    NurseryRootStockBreakdown {
        value_of_crop: crop_value(area, record.yield_per_hectare, record.price),
        additional_costs: area_scaled(record.additional_costs, area)
            + area_scaled(record.destruction_costs, area),
        capital_items_value: record.capital_items_value,
        stored_produce_value: stored_produce_value(record),
    }
}

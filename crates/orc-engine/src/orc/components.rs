//! Arithmetic shared by the formula variants.
//!
//! Each helper is a pure function of its inputs so the variant calculators
//! read as a straight list of lettered components.

use super::domain::{CropRecord, DEFAULT_MIN_FALLOW_WEEKS};

/// Years of fallow loss compensable in the capped variants.
pub const MAX_COMPENSABLE_FALLOW_YEARS: f64 = 3.0;
/// Percent per year applied when the entered discount rate is zero.
pub const DEFAULT_DISCOUNT_RATE: f64 = 5.0;
/// Floor for rotation-based depreciation before the rotation ends.
pub const MIN_ROTATION_FACTOR: f64 = 0.1;
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Scale a per-hectare rate by the destroyed area.
pub fn area_scaled(rate: f64, area: f64) -> f64 {
    rate * area
}

/// `a * y * p`: value of the crop on the destroyed area.
pub fn crop_value(area: f64, quantity_per_hectare: f64, price: f64) -> f64 {
    area * quantity_per_hectare * price
}

/// Forward contract price when the grower holds one, otherwise market price.
pub fn effective_price(record: &CropRecord) -> f64 {
    if record.has_forward_contract {
        record.forward_contract_price
    } else {
        record.price
    }
}

/// Harvesting plus production costs over the destroyed area.
pub fn harvesting_and_production(record: &CropRecord) -> f64 {
    area_scaled(
        record.harvesting_costs + record.production_costs,
        record.crop_area,
    )
}

/// Fallow years beyond the grower's normal fallow, never negative.
pub fn excess_fallow_years(fallow_period: f64, normal_fallow_period: f64) -> f64 {
    (fallow_period - normal_fallow_period).max(0.0)
}

/// Excess fallow limited to [`MAX_COMPENSABLE_FALLOW_YEARS`].
pub fn capped_fallow_years(fallow_period: f64, normal_fallow_period: f64) -> f64 {
    excess_fallow_years(fallow_period, normal_fallow_period).min(MAX_COMPENSABLE_FALLOW_YEARS)
}

pub fn fallow_loss(gross_margin: f64, area: f64, years: f64) -> f64 {
    gross_margin * area * years
}

pub fn stored_produce_value(record: &CropRecord) -> f64 {
    record.stored_produce_amount * record.stored_produce_price
}

/// Discount rate with zero treated as unspecified.
pub fn discount_rate_or_default(discount_rate: f64) -> f64 {
    if discount_rate == 0.0 {
        DEFAULT_DISCOUNT_RATE
    } else {
        discount_rate
    }
}

/// Age-based depreciation for perennial crops: `1 - age * rate / 100`,
/// clamped to `[0, 1]`.
pub fn age_depreciation_factor(crop_age: f64, discount_rate: f64) -> f64 {
    let rate = discount_rate_or_default(discount_rate) / 100.0;
    (1.0 - crop_age * rate).clamp(0.0, 1.0)
}

/// Straight-line depreciation over the orchard rotation.
///
/// A zero rotation means depreciation does not apply. Once the crop reaches
/// the end of its rotation nothing is reimbursed; before that the factor
/// never drops below [`MIN_ROTATION_FACTOR`].
pub fn rotation_depreciation_factor(crop_age: f64, rotation_period: f64) -> f64 {
    if rotation_period == 0.0 {
        return 1.0;
    }
    if crop_age >= rotation_period {
        return 0.0;
    }
    if crop_age <= 0.0 {
        return 1.0;
    }
    (1.0 - crop_age / rotation_period).clamp(MIN_ROTATION_FACTOR, 1.0)
}

/// Minimum fallow for short-rotation crops, with zero treated as unspecified.
pub fn min_fallow_weeks(record: &CropRecord) -> f64 {
    if record.min_fallow_period == 0.0 {
        DEFAULT_MIN_FALLOW_WEEKS
    } else {
        record.min_fallow_period
    }
}

/// Compensable fallow for short-rotation crops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdFallow {
    pub threshold_weeks: f64,
    pub effective_years: f64,
}

/// Fallow at or below the threshold earns nothing; above it, the excess over
/// the threshold is compensable up to [`MAX_COMPENSABLE_FALLOW_YEARS`].
pub fn threshold_fallow(fallow_period: f64, threshold_weeks: f64) -> ThresholdFallow {
    let threshold_years = threshold_weeks / WEEKS_PER_YEAR;
    let effective_years = if fallow_period > threshold_years {
        (fallow_period - threshold_years).min(MAX_COMPENSABLE_FALLOW_YEARS)
    } else {
        0.0
    };

    ThresholdFallow {
        threshold_weeks,
        effective_years,
    }
}

/// Total divided by area, or zero when there is no area to divide by.
pub fn per_hectare(total: f64, area: f64) -> f64 {
    if area > 0.0 {
        total / area
    } else {
        0.0
    }
}

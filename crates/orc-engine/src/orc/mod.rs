//! Owner Reimbursement Cost (ORC) calculation engine.
//!
//! A [`CropRecord`] is classified into one of five [`FormulaKind`]s and the
//! matching variant produces an itemised [`OrcResult`]. Everything here is a
//! pure function of the input record.

pub mod catalog;
pub mod components;
pub mod domain;
mod formula;
pub mod input;
mod result;
mod variants;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogEntry, CropClass};
pub use domain::{
    BareRootType, CropCategory, CropRecord, CropType, ShortRotationType, TreeType, UnitType,
};
pub use formula::FormulaKind;
pub use input::InputError;
pub use result::{
    AnnualBroadAcreBreakdown, LineEffect, LineItem, NurseryRootStockBreakdown, OrcBreakdown,
    OrcResult, PerennialBreakdown, ShortRotationBreakdown, TreeVineNutBreakdown,
};

use tracing::debug;

/// Classify the record and compute its ORC breakdown.
pub fn calculate_orc(record: &CropRecord) -> OrcResult {
    let formula = FormulaKind::classify(record);
    let result = variants::calculate(formula, record);

    debug!(
        formula = formula.tag(),
        crop_type = record.crop_type.tag(),
        area = record.crop_area,
        total = result.total_orc,
        "orc calculated"
    );

    result
}

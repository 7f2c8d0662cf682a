use std::io::Read;
use std::path::Path;

use super::catalog;
use super::domain::CropRecord;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read crop record: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid crop record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown crop '{0}'")]
    UnknownCrop(String),
}

/// Parse a JSON crop record. Absent fields take their defaults.
pub fn from_reader<R: Read>(reader: R) -> Result<CropRecord, InputError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn from_path<P: AsRef<Path>>(path: P) -> Result<CropRecord, InputError> {
    let file = std::fs::File::open(path)?;
    from_reader(std::io::BufReader::new(file))
}

/// Apply a catalog crop's classification on top of an existing record,
/// keeping its quantities, prices and costs.
pub fn with_crop(record: CropRecord, crop: &str) -> Result<CropRecord, InputError> {
    let entry = catalog::lookup(crop).ok_or_else(|| InputError::UnknownCrop(crop.to_string()))?;
    let selected = entry.record();

    Ok(CropRecord {
        crop_type: selected.crop_type,
        crop_category: selected.crop_category,
        tree_type: selected.tree_type,
        bare_root_type: selected.bare_root_type,
        short_rotation_type: selected.short_rotation_type,
        crop: selected.crop,
        ..record
    })
}

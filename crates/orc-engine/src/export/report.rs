use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;

use crate::orc::{CropRecord, LineEffect, OrcResult};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV report: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV report is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Reference stamped on a rendered report. Added by the caller; the engine
/// output never carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportReference {
    pub number: String,
    pub issued_on: NaiveDate,
}

impl ReportReference {
    pub fn new(number: impl Into<String>, issued_on: NaiveDate) -> Self {
        Self {
            number: number.into(),
            issued_on,
        }
    }

    /// `ORC-<last 6 digits of the epoch millis>-<3 random digits>`.
    pub fn at(now: DateTime<Utc>) -> Self {
        let suffix = rand::thread_rng().gen_range(0..1_000);
        Self::with_suffix(now, suffix)
    }

    fn with_suffix(now: DateTime<Utc>, suffix: u16) -> Self {
        let millis = now.timestamp_millis().rem_euclid(1_000_000);
        Self::new(format!("ORC-{millis:06}-{suffix:03}"), now.date_naive())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Csv,
    Pdf,
}

impl AttachmentKind {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Pdf => "application/pdf",
        }
    }
}

pub fn attachment_file_name(issued_on: NaiveDate, kind: AttachmentKind) -> String {
    format!(
        "NT_ORC_Calculation_{}.{}",
        issued_on.format("%Y-%m-%d"),
        kind.extension()
    )
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    section: &'static str,
    key: &'a str,
    label: &'a str,
    value: String,
    effect: Option<&'static str>,
}

impl<'a> ReportRow<'a> {
    fn detail(section: &'static str, key: &'a str, label: &'a str, value: String) -> Self {
        Self {
            section,
            key,
            label,
            value,
            effect: None,
        }
    }
}

fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Render the calculation as CSV: report metadata, the inputs that drive
/// the selected formula, one row per lettered component, then totals.
pub fn render_csv(
    record: &CropRecord,
    result: &OrcResult,
    reference: &ReportReference,
) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let crop_type = record.crop_type_label();
    let issued_on = reference.issued_on.format("%Y-%m-%d").to_string();
    let items = result.line_items();
    let letters: Vec<String> = items.iter().map(|item| item.letter.to_string()).collect();

    let mut rows = vec![
        ReportRow::detail(
            "report",
            "reference",
            "Reference Number",
            reference.number.clone(),
        ),
        ReportRow::detail("report", "date", "Report Date", issued_on),
        ReportRow::detail("input", "crop_type", "Crop Type", crop_type),
    ];

    if let Some(crop) = &record.crop {
        rows.push(ReportRow::detail("input", "crop", "Crop", crop.clone()));
    }
    if let Some(region) = &record.region {
        rows.push(ReportRow::detail("input", "region", "Region", region.clone()));
    }

    rows.push(ReportRow::detail(
        "input",
        "crop_area",
        "Crop Area (ha)",
        record.crop_area.to_string(),
    ));
    rows.push(ReportRow::detail(
        "formula",
        result.formula.tag(),
        result.formula.label(),
        result.formula.expression().to_string(),
    ));

    for (item, letter) in items.iter().zip(&letters) {
        rows.push(ReportRow {
            section: "component",
            key: letter,
            label: item.label,
            value: money(item.amount),
            effect: Some(match item.effect {
                LineEffect::Add => "add",
                LineEffect::Subtract => "subtract",
            }),
        });
    }

    rows.push(ReportRow::detail(
        "total",
        "total_orc",
        "Total ORC",
        money(result.total_orc),
    ));
    rows.push(ReportRow::detail(
        "total",
        "orc_per_hectare",
        "ORC per Hectare",
        money(result.orc_per_hectare),
    ));

    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

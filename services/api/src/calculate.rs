use chrono::Utc;
use clap::Args;
use orc_engine::error::AppError;
use orc_engine::export::{render_csv, ReportReference};
use orc_engine::orc::{self, catalog, input, CropRecord, LineEffect, OrcResult};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    /// JSON file holding the crop record (camelCase form fields)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Apply a catalog crop's classification on top of the record
    #[arg(long)]
    pub(crate) crop: Option<String>,
    /// Print the CSV report instead of the breakdown
    #[arg(long)]
    pub(crate) csv: bool,
}

pub(crate) fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let CalculateArgs { input, crop, csv } = args;

    let mut record = input::from_path(input)?;
    if let Some(crop) = crop {
        record = input::with_crop(record, &crop)?;
    }

    let result = orc::calculate_orc(&record);

    if csv {
        let reference = ReportReference::at(Utc::now());
        print!("{}", render_csv(&record, &result, &reference)?);
    } else {
        print!("{}", render_breakdown(&record, &result));
    }

    Ok(())
}

pub(crate) fn run_crops() {
    println!("{:<30} {:<28} FORMULA", "CROP", "CROP TYPE");
    for entry in catalog::entries() {
        println!(
            "{:<30} {:<28} {}",
            entry.name,
            entry.crop_type().label(),
            entry.formula().tag()
        );
    }
}

pub(crate) fn render_breakdown(record: &CropRecord, result: &OrcResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Crop type: {}\n", record.crop_type_label()));
    if let Some(crop) = &record.crop {
        out.push_str(&format!("Crop: {crop}\n"));
    }
    out.push_str(&format!(
        "Formula: {}\n{}\n\n",
        result.formula.label(),
        result.formula.expression()
    ));

    for item in result.line_items() {
        let sign = match item.effect {
            LineEffect::Add => '+',
            LineEffect::Subtract => '-',
        };
        out.push_str(&format!(
            "  {} {} {:<62} {:>14.2}\n",
            sign, item.letter, item.label, item.amount
        ));
    }

    out.push_str(&format!("\nTotal ORC:       {:>14.2}\n", result.total_orc));
    out.push_str(&format!("ORC per hectare: {:>14.2}\n", result.orc_per_hectare));
    out
}

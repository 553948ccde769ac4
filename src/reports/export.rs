// ABOUTME: Herd report export to CSV or JSON and CSV animal record import
// ABOUTME: Flattens rows into fixed columns with N/A and INVALID markers, never NaN
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

use crate::formatters::{format_output_pretty, format_records, OutputFormat};
use crate::nutrition::feed_efficiency::format_ratio;
use crate::reports::herd_report::{HerdReport, ReportRow};
use csv::{ReaderBuilder, Trim};
use herdwise_core::constants::report::{STATUS_INVALID, STATUS_OK};
use herdwise_core::errors::{AppError, AppResult};
use herdwise_core::models::AnimalRecord;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Column labels of the CSV export, in order
pub const CSV_HEADER: [&str; 13] = [
    "id",
    "breed",
    "sex",
    "weight_kg",
    "age_months",
    "stage",
    "target_gain_kg",
    "predicted_adg_kg",
    "target_dmi_kg",
    "fcr",
    "daily_feed_cost",
    "currency",
    "status",
];

/// One flat CSV line; invalid rows leave the figures empty
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    breed: &'a str,
    sex: &'a str,
    weight_kg: String,
    age_months: String,
    stage: &'a str,
    target_gain_kg: String,
    predicted_adg_kg: String,
    target_dmi_kg: String,
    fcr: String,
    daily_feed_cost: String,
    currency: &'a str,
    status: String,
}

impl<'a> CsvRow<'a> {
    fn from_row(row: &'a ReportRow, currency: &'a str) -> Self {
        match row {
            ReportRow::Computed(computed) => Self {
                id: &computed.id,
                breed: &computed.breed_name,
                sex: computed.sex.as_str(),
                weight_kg: format!("{:.1}", computed.weight_kg),
                age_months: computed.age_months.to_string(),
                stage: computed.stage.as_str(),
                target_gain_kg: format!("{:.2}", computed.target_daily_gain_kg),
                predicted_adg_kg: format!("{:.3}", computed.predicted_avg_daily_gain_kg),
                target_dmi_kg: format!("{:.2}", computed.target_dry_matter_intake_kg()),
                fcr: format_ratio(computed.feed_conversion_ratio),
                daily_feed_cost: format!("{:.2}", computed.daily_feed_cost),
                currency,
                status: STATUS_OK.to_owned(),
            },
            ReportRow::Invalid(invalid) => Self {
                id: &invalid.id,
                breed: &invalid.breed,
                sex: "",
                weight_kg: String::new(),
                age_months: String::new(),
                stage: "",
                target_gain_kg: String::new(),
                predicted_adg_kg: String::new(),
                target_dmi_kg: String::new(),
                fcr: String::new(),
                daily_feed_cost: String::new(),
                currency,
                status: format!("{STATUS_INVALID}: {}", invalid.error),
            },
        }
    }
}

/// Serialize a report in the requested format
///
/// CSV always starts with [`CSV_HEADER`], even for an empty herd. JSON holds
/// the report date, every row, and the summary.
///
/// # Errors
///
/// Returns `SerializationError` if the report cannot be serialized
pub fn render_report(report: &HerdReport, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Csv => {
            if report.rows.is_empty() {
                return Ok(format!("{}\n", CSV_HEADER.join(",")));
            }
            let currency = report.summary.currency.as_str();
            let lines: Vec<CsvRow<'_>> = report
                .rows
                .iter()
                .map(|row| CsvRow::from_row(row, currency))
                .collect();
            Ok(format_records(&lines, format)?.data)
        }
        OutputFormat::Json => Ok(format_output_pretty(report)?.data),
    }
}

/// Serialize a report into a writer
///
/// # Errors
///
/// Returns `SerializationError` if serialization fails and `StorageError` if
/// the writer fails
pub fn write_report<W: Write>(report: &HerdReport, format: OutputFormat, mut writer: W) -> AppResult<()> {
    let rendered = render_report(report, format)?;
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    debug!(format = %format, bytes = rendered.len(), "Report written");
    Ok(())
}

/// Read animal records from CSV with a header line
///
/// Expected columns: `id,breed,sex,weight_kg,birth_date,stage,target_daily_gain_kg`.
/// Blank cells become missing values and unparseable numbers fail only their
/// own row later, so a messy file still loads.
///
/// # Errors
///
/// Returns `InvalidFormat` with the line number when a line is structurally
/// broken (for example a missing `id` column)
pub fn read_animals_csv<R: Read>(reader: R) -> AppResult<Vec<AnimalRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (row_idx, result) in rdr.deserialize::<AnimalRecord>().enumerate() {
        let record = result.map_err(|e| {
            // +2 for the header line and 1-based numbering
            AppError::invalid_format(format!("CSV line {}: {e}", row_idx + 2))
                .with_row_index(row_idx)
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Read animal records from a CSV file
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be opened and the errors of
/// [`read_animals_csv`] otherwise
pub fn read_animals_from_path(path: &Path) -> AppResult<Vec<AnimalRecord>> {
    let file = File::open(path).map_err(|e| {
        AppError::storage(format!("Cannot open {}: {e}", path.display())).with_source(e)
    })?;
    let records = read_animals_csv(BufReader::new(file))?;
    info!(path = %path.display(), animals = records.len(), "Animal records loaded");
    Ok(records)
}

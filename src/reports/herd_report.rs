// ABOUTME: Herd report generator turning raw animal records into per-animal result rows
// ABOUTME: Resolves breeds, computes requirements and gain, prices feed, marks bad rows invalid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! Herd Report Generator
//!
//! For each [`AnimalRecord`] the generator:
//!
//! 1. Validates weight, birth date, stage, sex and target gain
//! 2. Resolves the breed through the catalog's fallback policy
//! 3. Computes daily requirements
//! 4. Predicts gain on the configured diet and prices the feed
//!
//! Any failure turns that animal's row into [`ReportRow::Invalid`]; the other
//! rows are unaffected. Whether an invalid row fails the whole report is the
//! caller's [`ReportMode`] choice, applied in [`HerdReportGenerator::finalize`].
//!
//! Every number in a computed row is finite.

use crate::config::estimator::EstimatorConfig;
use crate::nutrition::breed_catalog::{BreedCatalog, BreedMatch};
use crate::nutrition::feed_efficiency::herd_feed_conversion_ratio;
use crate::nutrition::performance::{EnergyStatus, PerformancePredictor};
use crate::nutrition::requirements::{calculate_requirements, RequirementEstimate};
use crate::reports::ReportMode;
use chrono::{Datelike, NaiveDate};
use herdwise_core::constants::physiology::DAYS_PER_MONTH;
use herdwise_core::constants::report::BIRTH_DATE_FORMATS;
use herdwise_core::errors::{AppError, AppResult, RowError};
use herdwise_core::models::{AnimalRecord, AnimalSnapshot, PhysiologicalStage, Sex};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;
use tracing::{debug, info, warn};

/// A fully computed report row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedRow {
    /// Position of the animal in the input
    pub index: usize,
    /// Animal identifier
    pub id: String,
    /// Id of the breed used for the calculation
    pub breed_id: String,
    /// Display name of the breed used for the calculation
    pub breed_name: String,
    /// How the breed reference was matched
    pub breed_match: BreedMatch,
    /// Recorded sex
    pub sex: Sex,
    /// Live weight (kg)
    pub weight_kg: f64,
    /// Age in whole months at the report date
    pub age_months: u32,
    /// Physiological stage
    pub stage: PhysiologicalStage,
    /// Target gain used for the requirement (kg / day)
    pub target_daily_gain_kg: f64,
    /// Daily requirements at the target gain
    pub requirements: RequirementEstimate,
    /// Dry matter fed in the prediction (kg / day)
    pub fed_dry_matter_intake_kg: f64,
    /// Predicted average daily gain on the configured diet (kg / day)
    pub predicted_avg_daily_gain_kg: f64,
    /// Fed dry matter per kg of predicted gain; absent at zero gain
    pub feed_conversion_ratio: Option<f64>,
    /// Estimated cost of the ration as fed, per day
    pub daily_feed_cost: f64,
    /// Energy balance after maintenance
    pub energy_status: EnergyStatus,
    /// Predicted gain is zero
    pub degenerate: bool,
}

impl ComputedRow {
    /// Target dry-matter intake from the requirement calculation
    #[must_use]
    pub const fn target_dry_matter_intake_kg(&self) -> f64 {
        self.requirements.dry_matter_intake_kg_per_day
    }
}

/// A row whose animal could not be computed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidRow {
    /// Position of the animal in the input
    pub index: usize,
    /// Animal identifier as supplied
    pub id: String,
    /// Breed reference as supplied
    pub breed: String,
    /// Why the row failed
    pub error: RowError,
}

/// One report row per input animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportRow {
    /// Computed figures
    Computed(ComputedRow),
    /// Row-level error marker
    Invalid(InvalidRow),
}

impl ReportRow {
    /// Position of the animal in the input
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Computed(row) => row.index,
            Self::Invalid(row) => row.index,
        }
    }

    /// Animal identifier
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Computed(row) => &row.id,
            Self::Invalid(row) => &row.id,
        }
    }

    /// Whether the row was computed
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    /// Computed figures, if any
    #[must_use]
    pub const fn computed(&self) -> Option<&ComputedRow> {
        match self {
            Self::Computed(row) => Some(row),
            Self::Invalid(_) => None,
        }
    }

    /// Row error, if any
    #[must_use]
    pub const fn error(&self) -> Option<&RowError> {
        match self {
            Self::Computed(_) => None,
            Self::Invalid(row) => Some(&row.error),
        }
    }
}

/// Herd-level totals over the computed rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HerdReportSummary {
    /// Number of input animals
    pub animals: usize,
    /// Rows computed
    pub valid_rows: usize,
    /// Rows marked invalid
    pub invalid_rows: usize,
    /// Sum of daily feed cost over computed rows
    pub total_daily_feed_cost: f64,
    /// Currency of the cost figures
    pub currency: String,
    /// Mean predicted gain over computed rows; absent when there are none
    pub mean_predicted_gain_kg: Option<f64>,
    /// Total fed dry matter over total predicted gain
    pub herd_feed_conversion_ratio: Option<f64>,
}

impl HerdReportSummary {
    /// Summarize a set of rows
    #[must_use]
    pub fn from_rows(rows: &[ReportRow], currency: &str) -> Self {
        let computed: Vec<&ComputedRow> = rows.iter().filter_map(ReportRow::computed).collect();
        let total_gain: f64 = computed
            .iter()
            .map(|row| row.predicted_avg_daily_gain_kg)
            .sum();

        #[allow(clippy::cast_precision_loss)]
        let mean_predicted_gain_kg =
            (!computed.is_empty()).then(|| total_gain / computed.len() as f64);

        Self {
            animals: rows.len(),
            valid_rows: computed.len(),
            invalid_rows: rows.len() - computed.len(),
            total_daily_feed_cost: computed.iter().map(|row| row.daily_feed_cost).sum(),
            currency: currency.to_owned(),
            mean_predicted_gain_kg,
            herd_feed_conversion_ratio: herd_feed_conversion_ratio(
                computed
                    .iter()
                    .map(|row| (row.fed_dry_matter_intake_kg, row.predicted_avg_daily_gain_kg)),
            ),
        }
    }
}

/// A finished report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HerdReport {
    /// Date ages were computed against
    pub as_of: NaiveDate,
    /// Rows in input order
    pub rows: Vec<ReportRow>,
    /// Totals over the rows
    pub summary: HerdReportSummary,
}

/// Fields of a record that passed validation
struct PreparedAnimal {
    snapshot: AnimalSnapshot,
    sex: Sex,
    age_whole_months: u32,
    target_daily_gain_kg: f64,
}

/// Report generator bound to a catalog, a configuration and a report date
#[derive(Debug, Clone, Copy)]
pub struct HerdReportGenerator<'a> {
    catalog: &'a BreedCatalog,
    config: &'a EstimatorConfig<true>,
    as_of: NaiveDate,
}

impl<'a> HerdReportGenerator<'a> {
    /// Create a generator; ages are computed at `as_of`
    #[must_use]
    pub const fn new(
        catalog: &'a BreedCatalog,
        config: &'a EstimatorConfig<true>,
        as_of: NaiveDate,
    ) -> Self {
        Self {
            catalog,
            config,
            as_of,
        }
    }

    /// Date ages are computed against
    #[must_use]
    pub const fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Compute rows sequentially
    #[must_use]
    pub fn generate(&self, records: &[AnimalRecord]) -> Vec<ReportRow> {
        self.rows(records).collect()
    }

    /// Lazily compute rows in input order
    pub fn rows<'r>(&'r self, records: &'r [AnimalRecord]) -> impl Iterator<Item = ReportRow> + 'r {
        records
            .iter()
            .enumerate()
            .map(move |(index, record)| self.compute_row(index, record))
    }

    /// Compute rows on the rayon pool; output is in input order
    #[must_use]
    pub fn generate_parallel(&self, records: &[AnimalRecord]) -> Vec<ReportRow> {
        let mut rows: Vec<ReportRow> = records
            .par_iter()
            .enumerate()
            .map(|(index, record)| self.compute_row(index, record))
            .collect();
        rows.sort_by_key(ReportRow::index);
        rows
    }

    /// Generate and finalize a report using the configured mode
    ///
    /// Herds at or above the configured threshold are computed in parallel.
    ///
    /// # Errors
    ///
    /// In [`ReportMode::Batch`], returns the first invalid row as an error
    pub fn report(&self, records: &[AnimalRecord]) -> AppResult<HerdReport> {
        let parallel = records.len() >= self.config.report.parallel_threshold;
        self.report_with(records, self.config.report.mode, parallel)
    }

    /// Generate and finalize a report with an explicit mode and strategy
    ///
    /// # Errors
    ///
    /// In [`ReportMode::Batch`], returns the first invalid row as an error
    pub fn report_with(
        &self,
        records: &[AnimalRecord],
        mode: ReportMode,
        parallel: bool,
    ) -> AppResult<HerdReport> {
        let started = Instant::now();
        let rows = if parallel {
            self.generate_parallel(records)
        } else {
            self.generate(records)
        };
        let report = self.finalize(rows, mode)?;

        info!(
            animals = report.summary.animals,
            valid = report.summary.valid_rows,
            invalid = report.summary.invalid_rows,
            parallel,
            mode = %mode,
            elapsed_ms = started.elapsed().as_millis(),
            "Herd report generated"
        );
        Ok(report)
    }

    /// Apply the report mode to computed rows and attach the summary
    ///
    /// # Errors
    ///
    /// In [`ReportMode::Batch`], returns the first invalid row as an error
    /// carrying its row index and animal id.
    pub fn finalize(&self, rows: Vec<ReportRow>, mode: ReportMode) -> AppResult<HerdReport> {
        if mode == ReportMode::Batch {
            if let Some(ReportRow::Invalid(invalid)) = rows.iter().find(|row| !row.is_valid()) {
                return Err(AppError::from(invalid.error.clone())
                    .with_row_index(invalid.index)
                    .with_resource_id(&invalid.id)
                    .with_details(json!({
                        "breed": &invalid.breed,
                        "field": invalid.error.field(),
                        "error": &invalid.error,
                    })));
            }
        }

        let summary = HerdReportSummary::from_rows(&rows, &self.config.report.currency);
        Ok(HerdReport {
            as_of: self.as_of,
            rows,
            summary,
        })
    }

    /// Compute a single row; never fails
    #[must_use]
    pub fn compute_row(&self, index: usize, record: &AnimalRecord) -> ReportRow {
        match self.try_compute_row(index, record) {
            Ok(row) => ReportRow::Computed(row),
            Err(error) => {
                warn!(
                    row = index,
                    animal_id = %record.id,
                    error = %error,
                    "Report row marked invalid"
                );
                ReportRow::Invalid(InvalidRow {
                    index,
                    id: record.id.clone(),
                    breed: record.breed.clone(),
                    error,
                })
            }
        }
    }

    fn try_compute_row(&self, index: usize, record: &AnimalRecord) -> Result<ComputedRow, RowError> {
        let animal = self.prepare(record)?;
        let report_config = &self.config.report;

        let resolved = self
            .catalog
            .resolve(&animal.snapshot.breed_ref, &report_config.breed_fallback)
            .map_err(|_| RowError::breed_not_found(&animal.snapshot.breed_ref))?;

        let requirements = calculate_requirements(
            animal.snapshot.weight_kg,
            animal.target_daily_gain_kg,
            animal.snapshot.age_months,
            animal.snapshot.physiological_stage,
            &self.config.requirements,
        )?;

        let fed_dmi = report_config
            .fixed_dry_matter_intake_kg
            .unwrap_or(requirements.dry_matter_intake_kg_per_day);
        let prediction = PerformancePredictor::new(self.config).predict(
            resolved.record,
            report_config.diet_energy_density_mcal_per_kg,
            fed_dmi,
            animal.snapshot.weight_kg,
        )?;
        let daily_feed_cost =
            fed_dmi / report_config.dry_matter_fraction * report_config.feed_price_per_kg;

        let row = ComputedRow {
            index,
            id: record.id.clone(),
            breed_id: resolved.record.id.clone(),
            breed_name: resolved.record.name.clone(),
            breed_match: resolved.matched_by,
            sex: animal.sex,
            weight_kg: animal.snapshot.weight_kg,
            age_months: animal.age_whole_months,
            stage: animal.snapshot.physiological_stage,
            target_daily_gain_kg: animal.target_daily_gain_kg,
            requirements,
            fed_dry_matter_intake_kg: fed_dmi,
            predicted_avg_daily_gain_kg: prediction.predicted_avg_daily_gain_kg,
            feed_conversion_ratio: prediction.feed_conversion_ratio,
            daily_feed_cost,
            energy_status: prediction.energy_status,
            degenerate: prediction.degenerate,
        };
        ensure_finite(&row)?;

        debug!(row = index, animal_id = %row.id, breed = %row.breed_id, "Report row computed");
        Ok(row)
    }

    /// Validate the raw record fields the calculations need
    fn prepare(&self, record: &AnimalRecord) -> Result<PreparedAnimal, RowError> {
        if record.breed.trim().is_empty() {
            return Err(RowError::missing_field("breed"));
        }

        let weight_kg = record
            .weight_kg
            .ok_or_else(|| RowError::missing_field("weight_kg"))?;
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(RowError::malformed_field(
                "weight_kg",
                weight_kg.to_string(),
                "must be a positive number",
            ));
        }

        let birth_text = record
            .birth_date
            .as_deref()
            .ok_or_else(|| RowError::missing_field("birth_date"))?;
        let birth_date = parse_birth_date(birth_text)?;
        if birth_date > self.as_of {
            return Err(RowError::malformed_field(
                "birth_date",
                birth_text,
                format!("after the report date {}", self.as_of),
            ));
        }

        let stage_text = record
            .stage
            .as_deref()
            .ok_or_else(|| RowError::missing_field("stage"))?;
        let stage: PhysiologicalStage = stage_text
            .parse()
            .map_err(|e: AppError| RowError::malformed_field("stage", stage_text, e.message))?;

        let sex = match record.sex.as_deref() {
            None => Sex::Unknown,
            Some(text) => text
                .parse()
                .map_err(|e: AppError| RowError::malformed_field("sex", text, e.message))?,
        };

        let target_daily_gain_kg = match record.target_daily_gain_kg {
            None => self.config.report.default_target_gain_kg.for_stage(stage),
            Some(gain) if gain.is_finite() && gain >= 0.0 => gain,
            Some(gain) => {
                return Err(RowError::malformed_field(
                    "target_daily_gain_kg",
                    gain.to_string(),
                    "must be a non-negative number",
                ))
            }
        };

        Ok(PreparedAnimal {
            snapshot: AnimalSnapshot {
                weight_kg,
                age_months: fractional_months_between(birth_date, self.as_of),
                breed_ref: record.breed.trim().to_owned(),
                physiological_stage: stage,
            },
            sex,
            age_whole_months: whole_months_between(birth_date, self.as_of),
            target_daily_gain_kg,
        })
    }
}

/// Parse a birth date in any of the accepted formats
fn parse_birth_date(text: &str) -> Result<NaiveDate, RowError> {
    let trimmed = text.trim();
    BIRTH_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            RowError::malformed_field("birth_date", trimmed, "not a valid calendar date")
        })
}

/// Completed calendar months from `birth` to `as_of`
#[must_use]
pub fn whole_months_between(birth: NaiveDate, as_of: NaiveDate) -> u32 {
    let mut months = (i64::from(as_of.year()) - i64::from(birth.year())) * 12
        + i64::from(as_of.month())
        - i64::from(birth.month());
    if as_of.day() < birth.day() {
        months -= 1;
    }
    u32::try_from(months).unwrap_or(0)
}

/// Age in average-length months, for the requirement formulas
#[allow(clippy::cast_precision_loss)]
fn fractional_months_between(birth: NaiveDate, as_of: NaiveDate) -> f64 {
    let days = (as_of - birth).num_days().max(0);
    days as f64 / DAYS_PER_MONTH
}

fn ensure_finite(row: &ComputedRow) -> Result<(), RowError> {
    let checks = [
        ("energy_mcal_per_day", row.requirements.energy_mcal_per_day),
        ("protein_g_per_day", row.requirements.protein_g_per_day),
        (
            "dry_matter_intake_kg",
            row.requirements.dry_matter_intake_kg_per_day,
        ),
        ("fed_dry_matter_intake_kg", row.fed_dry_matter_intake_kg),
        ("predicted_avg_daily_gain_kg", row.predicted_avg_daily_gain_kg),
        ("daily_feed_cost", row.daily_feed_cost),
        (
            "feed_conversion_ratio",
            row.feed_conversion_ratio.unwrap_or(0.0),
        ),
    ];
    checks
        .iter()
        .find(|(_, value)| !value.is_finite())
        .map_or(Ok(()), |(field, _)| Err(RowError::non_finite(*field)))
}

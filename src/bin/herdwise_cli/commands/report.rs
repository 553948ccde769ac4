// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors
// ABOUTME: Herd report command for herdwise-cli
// ABOUTME: Reads animal CSV, applies report overrides, writes CSV or JSON

use crate::helpers::display::display_report_summary;
use crate::{ReportArgs, Result};
use chrono::{Local, NaiveDate};
use herdwise::config::EstimatorConfig;
use herdwise::formatters::OutputFormat;
use herdwise::nutrition::{BreedCatalog, BreedFallbackPolicy};
use herdwise::reports::{read_animals_from_path, write_report, HerdReportGenerator, ReportMode};
use herdwise_core::errors::AppError;
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::info;

/// Generate a report from the arguments
pub fn run(config: EstimatorConfig<true>, args: ReportArgs) -> Result<()> {
    let format: OutputFormat = args.format.parse()?;
    let as_of = match args.as_of.as_deref() {
        Some(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|e| {
            AppError::invalid_format(format!("--as-of '{text}' is not a YYYY-MM-DD date"))
                .with_source(e)
        })?,
        None => Local::now().date_naive(),
    };
    let config = apply_overrides(config, &args)?;

    let animals = read_animals_from_path(&args.input)?;
    let catalog = BreedCatalog::builtin();
    let generator = HerdReportGenerator::new(&catalog, &config, as_of);
    let report = if args.parallel {
        generator.report_with(&animals, config.report.mode, true)?
    } else {
        generator.report(&animals)?
    };

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                AppError::storage(format!("Cannot create {}: {e}", path.display())).with_source(e)
            })?;
            write_report(&report, format, BufWriter::new(file))?;
            info!(path = %path.display(), format = %format, "Report written");
        }
        None => write_report(&report, format, io::stdout().lock())?,
    }

    display_report_summary(&report.summary);
    Ok(())
}

/// Layer the command-line options over the loaded configuration
fn apply_overrides(
    config: EstimatorConfig<true>,
    args: &ReportArgs,
) -> Result<EstimatorConfig<true>> {
    let mut config = config.into_unvalidated();

    if args.strict_breeds {
        config.report.breed_fallback = BreedFallbackPolicy::Strict;
    } else if let Some(policy) = &args.fallback {
        config.report.breed_fallback = policy.parse()?;
    }
    if args.batch {
        config.report.mode = ReportMode::Batch;
    }
    if let Some(price) = args.feed_price {
        config.report.feed_price_per_kg = price;
    }
    if let Some(fixed) = args.fixed_dmi {
        config.report.fixed_dry_matter_intake_kg = Some(fixed);
    }
    if let Some(density) = args.density {
        config.report.diet_energy_density_mcal_per_kg = density;
    }

    Ok(config.validate()?)
}

// ABOUTME: Herdwise CLI - command-line caller for the livestock nutrition estimator
// ABOUTME: Lists breeds, computes requirements and gain, and writes herd reports from CSV
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors
//!
//! Usage:
//! ```bash
//! # List the breed catalog
//! herdwise-cli breeds
//!
//! # Daily requirements of a 300 kg fattening steer gaining 1.2 kg/day
//! herdwise-cli requirements --weight 300 --gain 1.2 --age 8 --stage fattening
//!
//! # Predicted gain on 9 kg DM of a 2.5 Mcal/kg diet
//! herdwise-cli predict --breed angus --density 2.5 --dmi 9 --weight 350
//!
//! # Herd report as CSV on stdout
//! herdwise-cli report --input herd.csv --as-of 2025-06-01
//!
//! # JSON report to a file, aborting on the first bad row
//! herdwise-cli report --input herd.csv --format json --output report.json --batch
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use herdwise::config::EstimatorConfig;
use herdwise::logging::LoggingConfig;
use herdwise_core::errors::AppResult;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "herdwise-cli",
    about = "Livestock nutrition and performance estimator",
    long_about = "Computes daily nutrient requirements, predicts average daily gain, and writes per-animal herd reports with feed conversion and feed cost."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List the breed catalog
    Breeds {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Daily energy, protein and dry-matter requirements of one animal
    Requirements {
        /// Live weight (kg)
        #[arg(long)]
        weight: f64,

        /// Target daily gain (kg/day)
        #[arg(long, default_value = "0")]
        gain: f64,

        /// Age (months)
        #[arg(long)]
        age: f64,

        /// Physiological stage: growing, fattening, lactating, maintenance
        #[arg(long)]
        stage: String,
    },

    /// Predicted average daily gain on a diet
    Predict {
        /// Breed id or name
        #[arg(long)]
        breed: String,

        /// Diet energy density (Mcal/kg DM); defaults to the configured diet
        #[arg(long)]
        density: Option<f64>,

        /// Dry-matter intake (kg/day)
        #[arg(long)]
        dmi: f64,

        /// Current live weight (kg)
        #[arg(long)]
        weight: f64,

        /// Fail on an unknown breed instead of using the fallback
        #[arg(long)]
        strict_breeds: bool,
    },

    /// Per-animal herd report from a CSV of animal records
    Report(ReportArgs),
}

/// Options of the `report` subcommand
#[derive(Args)]
struct ReportArgs {
    /// Animal CSV: id,breed,sex,weight_kg,birth_date,stage,target_daily_gain_kg
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Write the report here instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Output format: csv or json
    #[arg(long, short = 'f', default_value = "csv")]
    format: String,

    /// Date ages are computed at (YYYY-MM-DD); defaults to today
    #[arg(long)]
    as_of: Option<String>,

    /// Mark animals with an unknown breed invalid instead of using the fallback
    #[arg(long)]
    strict_breeds: bool,

    /// Breed fallback policy: strict, first, specific:<breed id>
    #[arg(long, conflicts_with = "strict_breeds")]
    fallback: Option<String>,

    /// Fail the whole report on the first invalid row
    #[arg(long)]
    batch: bool,

    /// Compute rows in parallel regardless of herd size
    #[arg(long)]
    parallel: bool,

    /// Feed price per kg as fed
    #[arg(long)]
    feed_price: Option<f64>,

    /// Feed every animal this much dry matter (kg/day) instead of its requirement
    #[arg(long)]
    fixed_dmi: Option<f64>,

    /// Diet energy density (Mcal/kg DM)
    #[arg(long)]
    density: Option<f64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("warning: logging not initialized: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(command: Command) -> Result<()> {
    let config = EstimatorConfig::<true>::load()?;
    debug!(config = ?config, "Estimator configuration loaded");

    match command {
        Command::Breeds { json } => commands::breeds::list(json),
        Command::Requirements {
            weight,
            gain,
            age,
            stage,
        } => commands::calculate::requirements(&config, weight, gain, age, &stage),
        Command::Predict {
            breed,
            density,
            dmi,
            weight,
            strict_breeds,
        } => commands::calculate::predict(&config, &breed, density, dmi, weight, strict_breeds),
        Command::Report(args) => {
            info!(input = %args.input.display(), "Generating herd report");
            commands::report::run(config, args)
        }
    }
}

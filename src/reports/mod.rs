// ABOUTME: Herd report generation and export
// ABOUTME: Per-animal rows with row-level error markers, summaries, CSV and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! # Reports
//!
//! - [`herd_report`]: one row per animal, in input order, sequential or parallel
//! - [`export`]: CSV and JSON serialization of a finished report, CSV animal input

pub mod export;
pub mod herd_report;

pub use export::{read_animals_csv, read_animals_from_path, render_report, write_report};
pub use herd_report::{
    ComputedRow, HerdReport, HerdReportGenerator, HerdReportSummary, InvalidRow, ReportRow,
};

use herdwise_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a report does with rows that fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Keep every row; failed rows carry an invalid marker
    #[default]
    Streaming,
    /// The first failed row fails the whole report
    Batch,
}

impl ReportMode {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Streaming => "streaming",
            Self::Batch => "batch",
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportMode {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "streaming" | "stream" | "partial" => Ok(Self::Streaming),
            "batch" | "strict" => Ok(Self::Batch),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized report mode '{other}' (expected streaming or batch)"
            ))),
        }
    }
}

// ABOUTME: Main library entry point for the Herdwise livestock nutrition estimator
// ABOUTME: Breed catalog, requirement and gain calculations, herd reports, and export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

#![deny(unsafe_code)]

//! # Herdwise
//!
//! A deterministic nutrition and performance estimator for livestock. Given an
//! animal's breed, weight, age and physiological stage it computes daily
//! energy, protein and dry-matter requirements, predicts average daily gain on
//! a diet, and assembles per-animal herd reports with feed conversion and
//! feed cost.
//!
//! ## Architecture
//!
//! - **Nutrition**: breed catalog, requirement calculator, performance
//!   predictor, feed conversion ratio
//! - **Reports**: per-animal rows with row-level error markers, CSV / JSON export
//! - **Config**: validated, environment-overridable estimator coefficients
//!
//! All calculations are pure and synchronous. The breed catalog is read-only
//! once built, so reports can be computed in parallel.
//!
//! ## Example Usage
//!
//! ```rust
//! use herdwise::config::EstimatorConfig;
//! use herdwise::nutrition::{calculate_requirements, BreedCatalog, PerformancePredictor};
//! use herdwise_core::models::PhysiologicalStage;
//!
//! # fn main() -> herdwise_core::errors::AppResult<()> {
//! let config = EstimatorConfig::<true>::default();
//! let needs = calculate_requirements(
//!     300.0,
//!     1.2,
//!     8.0,
//!     PhysiologicalStage::Fattening,
//!     &config.requirements,
//! )?;
//!
//! let catalog = BreedCatalog::builtin();
//! let angus = catalog.get_by_id("angus").ok_or_else(|| {
//!     herdwise_core::errors::AppError::not_found("Breed 'angus'")
//! })?;
//! let gain = PerformancePredictor::new(&config).predict_daily_gain(
//!     angus,
//!     2.5,
//!     needs.dry_matter_intake_kg_per_day,
//!     300.0,
//! )?;
//! assert!(gain >= 0.0);
//! # Ok(())
//! # }
//! ```

/// Estimator configuration with validation and environment overrides
pub mod config;

/// Output format abstraction (CSV, JSON)
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Breed catalog and nutrition calculations
pub mod nutrition;

/// Herd report generation and export
pub mod reports;

pub use herdwise_core::errors;
pub use herdwise_core::models;

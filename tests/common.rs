// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, default configs, and sample animal records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `herdwise`

use chrono::NaiveDate;
use herdwise::config::EstimatorConfig;
use herdwise_core::models::{AnimalRecord, BreedRecord};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Validated built-in defaults
pub fn default_config() -> EstimatorConfig<true> {
    EstimatorConfig::<true>::default()
}

/// Edit the defaults, then validate
pub fn config_with(edit: impl FnOnce(&mut EstimatorConfig<false>)) -> EstimatorConfig<true> {
    let mut config = EstimatorConfig::<false>::defaults();
    edit(&mut config);
    config.validate().unwrap()
}

/// Breed with a 600 kg mature weight and the given growth factor
pub fn test_breed(factor: f64) -> BreedRecord {
    BreedRecord::new("test-breed", "Test Breed", "cattle", factor, 600.0)
}

/// Report date used across report tests
pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// A complete, valid fattening steer born a year before [`report_date`]
pub fn fattening_steer(id: &str) -> AnimalRecord {
    AnimalRecord::new(id, "angus")
        .with_sex("male")
        .with_weight(350.0)
        .with_birth_date("2024-06-01")
        .with_stage("fattening")
}

/// A small mixed herd: four valid animals in different stages
pub fn sample_herd() -> Vec<AnimalRecord> {
    vec![
        fattening_steer("A1"),
        AnimalRecord::new("A2", "Hereford")
            .with_sex("F")
            .with_weight(220.0)
            .with_birth_date("01/10/2024")
            .with_stage("growing"),
        AnimalRecord::new("A3", "holstein")
            .with_sex("female")
            .with_weight(640.0)
            .with_birth_date("2021-03-15")
            .with_stage("lactating"),
        AnimalRecord::new("A4", "charolais")
            .with_weight(480.0)
            .with_birth_date("2023-11-20")
            .with_stage("fattening")
            .with_target_gain(1.5),
    ]
}

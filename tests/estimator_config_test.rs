// ABOUTME: Integration tests for estimator configuration loading and validation
// ABOUTME: Environment overrides, parse failures, range checks, and error conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use herdwise::config::{ConfigError, EstimatorConfig};
use herdwise::nutrition::BreedFallbackPolicy;
use herdwise::reports::ReportMode;
use herdwise_core::errors::{AppError, ErrorCode};
use serial_test::serial;
use std::env;

mod common;

const OVERRIDE_VARS: [&str; 6] = [
    "HERDWISE_FEED_PRICE_PER_KG",
    "HERDWISE_BREED_FALLBACK",
    "HERDWISE_REPORT_MODE",
    "HERDWISE_FIXED_DMI_KG",
    "HERDWISE_PARALLEL_THRESHOLD",
    "HERDWISE_DMI_MAX_PERCENT",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    common::init_test_logging();
    clear_overrides();
    let loaded = EstimatorConfig::<true>::load().unwrap();
    let defaults = EstimatorConfig::<true>::default();

    assert!((loaded.report.feed_price_per_kg - defaults.report.feed_price_per_kg).abs() < f64::EPSILON);
    assert_eq!(loaded.report.mode, ReportMode::Streaming);
    assert_eq!(loaded.report.breed_fallback, BreedFallbackPolicy::FirstInCatalog);
    assert_eq!(loaded.report.fixed_dry_matter_intake_kg, None);
}

#[test]
#[serial]
fn test_env_overrides_applied() {
    clear_overrides();
    env::set_var("HERDWISE_FEED_PRICE_PER_KG", "0.22");
    env::set_var("HERDWISE_BREED_FALLBACK", "strict");
    env::set_var("HERDWISE_REPORT_MODE", "batch");
    env::set_var("HERDWISE_FIXED_DMI_KG", "10");
    env::set_var("HERDWISE_PARALLEL_THRESHOLD", "64");

    let loaded = EstimatorConfig::<true>::load();
    clear_overrides();
    let loaded = loaded.unwrap();

    assert!((loaded.report.feed_price_per_kg - 0.22).abs() < f64::EPSILON);
    assert_eq!(loaded.report.breed_fallback, BreedFallbackPolicy::Strict);
    assert_eq!(loaded.report.mode, ReportMode::Batch);
    assert_eq!(loaded.report.fixed_dry_matter_intake_kg, Some(10.0));
    assert_eq!(loaded.report.parallel_threshold, 64);
}

#[test]
#[serial]
fn test_fixed_intake_can_be_cleared() {
    clear_overrides();
    env::set_var("HERDWISE_FIXED_DMI_KG", "none");
    let loaded = EstimatorConfig::<true>::load();
    clear_overrides();
    assert_eq!(loaded.unwrap().report.fixed_dry_matter_intake_kg, None);
}

#[test]
#[serial]
fn test_unparseable_override_is_parse_error() {
    clear_overrides();
    env::set_var("HERDWISE_REPORT_MODE", "sometimes");
    let result = EstimatorConfig::<true>::load();
    clear_overrides();

    match result {
        Err(ConfigError::Parse(message)) => assert!(message.contains("HERDWISE_REPORT_MODE")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    clear_overrides();
    env::set_var("HERDWISE_DMI_MAX_PERCENT", "6.0");
    let result = EstimatorConfig::<true>::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_validation_rejects_bad_report_settings() {
    let edits: [fn(&mut EstimatorConfig<false>); 5] = [
        |config| config.report.feed_price_per_kg = -0.01,
        |config| config.report.dry_matter_fraction = 1.5,
        |config| config.report.diet_energy_density_mcal_per_kg = 0.0,
        |config| config.report.fixed_dry_matter_intake_kg = Some(0.0),
        |config| config.report.currency = String::new(),
    ];
    for edit in edits {
        let mut config = EstimatorConfig::<false>::defaults();
        edit(&mut config);
        assert!(config.validate().is_err());
    }
}

#[test]
fn test_round_trip_through_unvalidated() {
    let config = common::config_with(|config| config.performance.max_daily_gain_kg = 1.8);
    let edited = config.into_unvalidated().validate().unwrap();
    assert!((edited.performance.max_daily_gain_kg - 1.8).abs() < f64::EPSILON);
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::ValueOutOfRange("Feed price per kg must be >= 0").into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("Feed price"));
    assert_eq!(error.exit_code(), ErrorCode::ConfigInvalid.exit_code());
}

// ABOUTME: Configuration module for the estimator's coefficients and report settings
// ABOUTME: Re-exports the validated estimator configuration and its sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! Configuration module for Herdwise
//!
//! - **Requirements**: maintenance, growth and intake coefficients
//! - **Performance**: energy-to-gain conversion and the gain plateau
//! - **Report**: diet, feed price, breed fallback and report mode

/// Estimator configuration sections, validation, and environment overrides
pub mod estimator;

pub use estimator::{
    ConfigError, EstimatorConfig, PerformanceConfig, ReportConfig, RequirementsConfig,
    StageValues,
};

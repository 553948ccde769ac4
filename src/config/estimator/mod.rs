// ABOUTME: Estimator configuration for requirement, performance, and report calculations
// ABOUTME: Orchestrates section configs and provides validation, env overrides, and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! Estimator Configuration Module
//!
//! Provides type-safe, validated configuration for the requirement calculator,
//! performance predictor, and herd report formatter.
//!
//! # Module Structure
//!
//! - `requirements` - Maintenance, growth, and intake coefficients
//! - `performance` - Energy-to-gain conversion and the gain plateau
//! - `report` - Diet assumptions, feed pricing, fallback policy, report mode
//!
//! An [`EstimatorConfig<false>`] is freely editable; [`EstimatorConfig::validate`]
//! turns it into an [`EstimatorConfig<true>`], which is what the calculators take.

pub mod error;
pub mod performance;
pub mod report;
pub mod requirements;

pub use error::ConfigError;
pub use performance::PerformanceConfig;
pub use report::ReportConfig;
pub use requirements::{RequirementsConfig, StageValues};

use serde::{Deserialize, Serialize};
use std::env;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static ESTIMATOR_CONFIG: OnceLock<EstimatorConfig<true>> = OnceLock::new();

/// Main estimator configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig<const VALIDATED: bool = false> {
    /// Configuration for the requirement calculator
    pub requirements: RequirementsConfig,
    /// Configuration for the performance predictor
    pub performance: PerformanceConfig,
    /// Configuration for herd report generation
    pub report: ReportConfig,
    #[serde(skip)]
    _phantom: PhantomData<()>,
}

impl EstimatorConfig<false> {
    /// Assemble an unvalidated configuration from its sections
    #[must_use]
    pub const fn new(
        requirements: RequirementsConfig,
        performance: PerformanceConfig,
        report: ReportConfig,
    ) -> Self {
        Self {
            requirements,
            performance,
            report,
            _phantom: PhantomData,
        }
    }

    /// Unvalidated copy of the built-in defaults, ready to be edited
    #[must_use]
    pub fn defaults() -> Self {
        EstimatorConfig::<true>::default().into_unvalidated()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` reported by a section's validation
    pub fn validate(self) -> Result<EstimatorConfig<true>, ConfigError> {
        self.requirements.validate()?;
        self.performance.validate()?;
        self.report.validate()?;

        Ok(EstimatorConfig {
            requirements: self.requirements,
            performance: self.performance,
            report: self.report,
            _phantom: PhantomData,
        })
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
            debug!(env_var = env_var_name, "Applied configuration override");
        }
        Ok(())
    }

    /// Optional numeric override: blank or `none` clears the value
    fn apply_optional_env_var(
        env_var_name: &str,
        target: &mut Option<f64>,
    ) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            let trimmed = val.trim();
            *target = if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(
                    trimmed
                        .parse()
                        .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?,
                )
            };
            debug!(env_var = env_var_name, "Applied configuration override");
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a set variable cannot be parsed
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Requirement calculator overrides
        Self::apply_env_var(
            "HERDWISE_MAINTENANCE_MCAL_PER_KG_MBW",
            &mut self.requirements.maintenance_mcal_per_kg_mbw,
        )?;
        Self::apply_env_var(
            "HERDWISE_REFERENCE_DIET_DENSITY",
            &mut self.requirements.reference_diet_energy_density_mcal_per_kg,
        )?;
        Self::apply_env_var(
            "HERDWISE_DMI_MIN_PERCENT",
            &mut self.requirements.dmi_min_percent_body_weight,
        )?;
        Self::apply_env_var(
            "HERDWISE_DMI_MAX_PERCENT",
            &mut self.requirements.dmi_max_percent_body_weight,
        )?;

        // Performance predictor overrides
        Self::apply_env_var(
            "HERDWISE_GAIN_ENERGY_BASE",
            &mut self.performance.gain_energy_base_mcal_per_kg,
        )?;
        Self::apply_env_var(
            "HERDWISE_MAX_DAILY_GAIN_KG",
            &mut self.performance.max_daily_gain_kg,
        )?;

        // Report overrides
        Self::apply_env_var(
            "HERDWISE_FEED_PRICE_PER_KG",
            &mut self.report.feed_price_per_kg,
        )?;
        Self::apply_env_var("HERDWISE_CURRENCY", &mut self.report.currency)?;
        Self::apply_env_var(
            "HERDWISE_DRY_MATTER_FRACTION",
            &mut self.report.dry_matter_fraction,
        )?;
        Self::apply_env_var(
            "HERDWISE_DIET_ENERGY_DENSITY",
            &mut self.report.diet_energy_density_mcal_per_kg,
        )?;
        Self::apply_optional_env_var(
            "HERDWISE_FIXED_DMI_KG",
            &mut self.report.fixed_dry_matter_intake_kg,
        )?;
        Self::apply_env_var("HERDWISE_BREED_FALLBACK", &mut self.report.breed_fallback)?;
        Self::apply_env_var("HERDWISE_REPORT_MODE", &mut self.report.mode)?;
        Self::apply_env_var(
            "HERDWISE_PARALLEL_THRESHOLD",
            &mut self.report.parallel_threshold,
        )?;

        Ok(self)
    }
}

impl EstimatorConfig<true> {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ESTIMATOR_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load estimator config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        EstimatorConfig::<false>::defaults().apply_env_overrides()?.validate()
    }

    /// Drop the validation marker to edit the configuration
    #[must_use]
    pub fn into_unvalidated(self) -> EstimatorConfig<false> {
        EstimatorConfig::<false>::new(self.requirements, self.performance, self.report)
    }
}

impl Default for EstimatorConfig<true> {
    fn default() -> Self {
        Self {
            requirements: RequirementsConfig::default(),
            performance: PerformanceConfig::default(),
            report: ReportConfig::default(),
            _phantom: PhantomData,
        }
    }
}

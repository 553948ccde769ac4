// ABOUTME: Herd report configuration: diet assumptions, feed pricing, and row handling
// ABOUTME: Replaces fixed "mock diet" constants with explicit, validated settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! Herd Report Configuration
//!
//! The diet fed to every animal in a report, the feed price used for the daily
//! cost column, the breed fallback policy, and whether a bad row aborts the
//! report.

use crate::config::estimator::error::ConfigError;
use crate::config::estimator::requirements::StageValues;
use crate::nutrition::breed_catalog::BreedFallbackPolicy;
use crate::reports::ReportMode;
use herdwise_core::constants::report::DEFAULT_CURRENCY;
use serde::{Deserialize, Serialize};

/// Herd report settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Price of the ration per kg as fed: 0.15
    pub feed_price_per_kg: f64,
    /// Currency label for the cost column
    pub currency: String,
    /// Dry-matter share of the ration as fed (0-1]: 0.88
    pub dry_matter_fraction: f64,
    /// Energy density of the ration (Mcal / kg DM): 2.5
    pub diet_energy_density_mcal_per_kg: f64,
    /// Feed every animal this much dry matter instead of its computed requirement
    pub fixed_dry_matter_intake_kg: Option<f64>,
    /// Target daily gain used when a record has none, by stage (kg / day)
    pub default_target_gain_kg: StageValues,
    /// What to do when an animal's breed is not in the catalog
    pub breed_fallback: BreedFallbackPolicy,
    /// Whether a bad row marks itself invalid or aborts the report
    pub mode: ReportMode,
    /// Herds at least this large are computed in parallel
    pub parallel_threshold: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            feed_price_per_kg: 0.15,
            currency: DEFAULT_CURRENCY.to_owned(),
            dry_matter_fraction: 0.88,
            diet_energy_density_mcal_per_kg: 2.5,
            fixed_dry_matter_intake_kg: None,
            default_target_gain_kg: StageValues {
                growing: 1.0,
                fattening: 1.3,
                lactating: 0.2,
                maintenance: 0.0,
            },
            breed_fallback: BreedFallbackPolicy::FirstInCatalog,
            mode: ReportMode::Streaming,
            parallel_threshold: 256,
        }
    }
}

impl ReportConfig {
    /// Validate report settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` when prices, fractions, densities,
    /// fixed intake, or default gains are outside their valid ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.feed_price_per_kg.is_finite() && self.feed_price_per_kg >= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Feed price per kg must be >= 0",
            ));
        }
        if !(self.dry_matter_fraction.is_finite()
            && self.dry_matter_fraction > 0.0
            && self.dry_matter_fraction <= 1.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Dry matter fraction must be in (0, 1]",
            ));
        }
        if !(self.diet_energy_density_mcal_per_kg.is_finite()
            && self.diet_energy_density_mcal_per_kg > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Diet energy density must be positive",
            ));
        }
        if let Some(fixed) = self.fixed_dry_matter_intake_kg {
            if !(fixed.is_finite() && fixed > 0.0) {
                return Err(ConfigError::ValueOutOfRange(
                    "Fixed dry matter intake must be positive when set",
                ));
            }
        }
        if !self.default_target_gain_kg.all_non_negative() {
            return Err(ConfigError::ValueOutOfRange(
                "Default target gains must be >= 0",
            ));
        }
        if self.currency.trim().is_empty() {
            return Err(ConfigError::ValueOutOfRange("Currency must not be empty"));
        }
        Ok(())
    }
}

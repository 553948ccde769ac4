// ABOUTME: Performance predictor configuration for energy-to-gain conversion
// ABOUTME: Configures gain energy cost, maturity scaling, and the daily gain plateau
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! Performance Predictor Configuration

use crate::config::estimator::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Performance predictor settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Energy cost of one kg of gain for an immature animal (Mcal / kg): 4.0
    pub gain_energy_base_mcal_per_kg: f64,
    /// Extra gain energy cost per unit of maturity (weight / mature weight): 1.0
    pub maturity_coefficient: f64,
    /// Cap on the maturity ratio used in the gain cost: 1.5
    pub max_maturity_ratio: f64,
    /// Asymptotic ceiling of predicted daily gain (kg / day): 2.5
    pub max_daily_gain_kg: f64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            gain_energy_base_mcal_per_kg: 4.0,
            maturity_coefficient: 1.0,
            max_maturity_ratio: 1.5,
            max_daily_gain_kg: 2.5,
        }
    }
}

impl PerformanceConfig {
    /// Validate predictor settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the gain cost, maturity cap, or
    /// gain ceiling is not positive, or the maturity coefficient is negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gain_energy_base_mcal_per_kg.is_finite() && self.gain_energy_base_mcal_per_kg > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Gain energy base must be positive",
            ));
        }
        if !(self.maturity_coefficient.is_finite() && self.maturity_coefficient >= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Maturity coefficient must be >= 0",
            ));
        }
        if !(self.max_maturity_ratio.is_finite() && self.max_maturity_ratio > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Maximum maturity ratio must be positive",
            ));
        }
        if !(self.max_daily_gain_kg.is_finite() && self.max_daily_gain_kg > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Maximum daily gain must be positive",
            ));
        }
        Ok(())
    }
}

// ABOUTME: Average daily gain prediction from diet energy, intake, weight, and breed potential
// ABOUTME: Converts energy surplus to gain with a maturity-scaled cost and a plateau
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! Performance Predictor
//!
//! Predicts average daily gain (ADG) for a diet:
//!
//! 1. Energy intake = diet energy density x dry-matter intake
//! 2. Surplus = intake - maintenance energy (metabolic body weight)
//! 3. Raw gain = surplus x breed growth potential / energy cost per kg of gain,
//!    where the cost rises with the degree of maturity
//! 4. Plateau: `max_gain * (1 - exp(-raw_gain / max_gain))`
//!
//! The plateau never exceeds `max_gain`. Gain rises strictly with breed
//! growth potential while `raw_gain / max_gain` stays below roughly 36; past
//! that point `exp(-x)` is below half an ulp of 1.0 and the result rounds to
//! exactly `max_gain`. Diets within the 4 % body-weight intake band stay far
//! from that point.
//!
//! An energy deficit gives zero gain with [`EnergyStatus::Deficit`] and the
//! `degenerate` flag set; it is not an error.

use crate::config::estimator::{EstimatorConfig, PerformanceConfig, RequirementsConfig};
use crate::nutrition::feed_efficiency::feed_conversion_ratio;
use crate::nutrition::requirements::{calculate_maintenance_energy, check_requirements_config};
use herdwise_core::errors::{AppError, AppResult};
use herdwise_core::models::BreedRecord;
use serde::{Deserialize, Serialize};

/// Sign of the energy balance after maintenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyStatus {
    /// Intake exceeds maintenance
    Surplus,
    /// Intake covers maintenance at best
    Deficit,
}

/// Full prediction for one animal on one diet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformancePrediction {
    /// Predicted average daily gain (kg / day, >= 0)
    pub predicted_avg_daily_gain_kg: f64,
    /// Dry matter per kg of gain; absent when gain is zero
    pub feed_conversion_ratio: Option<f64>,
    /// Energy eaten (Mcal / day)
    pub energy_intake_mcal_per_day: f64,
    /// Energy spent on maintenance (Mcal / day)
    pub maintenance_energy_mcal_per_day: f64,
    /// Intake minus maintenance; negative in a deficit
    pub energy_balance_mcal_per_day: f64,
    /// Surplus or deficit
    pub energy_status: EnergyStatus,
    /// Set exactly when the predicted gain is zero
    pub degenerate: bool,
}

/// Gain predictor bound to a configuration
#[derive(Debug, Clone, Copy)]
pub struct PerformancePredictor<'a> {
    requirements: &'a RequirementsConfig,
    performance: &'a PerformanceConfig,
}

impl<'a> PerformancePredictor<'a> {
    /// Predictor using a validated estimator configuration
    #[must_use]
    pub const fn new(config: &'a EstimatorConfig<true>) -> Self {
        Self {
            requirements: &config.requirements,
            performance: &config.performance,
        }
    }

    /// Predictor from individual config sections
    #[must_use]
    pub const fn from_parts(
        requirements: &'a RequirementsConfig,
        performance: &'a PerformanceConfig,
    ) -> Self {
        Self {
            requirements,
            performance,
        }
    }

    /// Predicted average daily gain (kg / day, >= 0)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if density, intake, or weight is not a positive
    /// finite number, if the breed record fails validation, or if either
    /// configuration section fails validation.
    pub fn predict_daily_gain(
        &self,
        breed: &BreedRecord,
        diet_energy_density_mcal_per_kg: f64,
        dry_matter_intake_kg: f64,
        current_weight_kg: f64,
    ) -> AppResult<f64> {
        self.predict(
            breed,
            diet_energy_density_mcal_per_kg,
            dry_matter_intake_kg,
            current_weight_kg,
        )
        .map(|prediction| prediction.predicted_avg_daily_gain_kg)
    }

    /// Full prediction including energy balance and feed conversion
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::predict_daily_gain`]
    pub fn predict(
        &self,
        breed: &BreedRecord,
        diet_energy_density_mcal_per_kg: f64,
        dry_matter_intake_kg: f64,
        current_weight_kg: f64,
    ) -> AppResult<PerformancePrediction> {
        require_positive("Diet energy density", diet_energy_density_mcal_per_kg)?;
        require_positive("Dry matter intake", dry_matter_intake_kg)?;
        require_positive("Current weight", current_weight_kg)?;
        breed.validate()?;
        check_requirements_config(self.requirements)?;
        self.performance.validate().map_err(|e| {
            AppError::invalid_input(format!("Invalid performance configuration: {e}"))
                .with_source(e)
        })?;

        let energy_intake = diet_energy_density_mcal_per_kg * dry_matter_intake_kg;
        let maintenance = calculate_maintenance_energy(current_weight_kg, self.requirements)?;
        let balance = energy_intake - maintenance;

        let gain = if balance > 0.0 {
            let raw_gain = balance * breed.growth_potential_factor
                / self.energy_per_kg_gain(breed, current_weight_kg);
            self.plateau(raw_gain)
        } else {
            0.0
        };

        if !gain.is_finite() || !energy_intake.is_finite() {
            return Err(AppError::invalid_input(
                "Prediction inputs produce a non-finite result",
            ));
        }

        Ok(PerformancePrediction {
            predicted_avg_daily_gain_kg: gain,
            feed_conversion_ratio: feed_conversion_ratio(dry_matter_intake_kg, gain),
            energy_intake_mcal_per_day: energy_intake,
            maintenance_energy_mcal_per_day: maintenance,
            energy_balance_mcal_per_day: balance,
            energy_status: if balance > 0.0 {
                EnergyStatus::Surplus
            } else {
                EnergyStatus::Deficit
            },
            degenerate: gain <= 0.0,
        })
    }

    /// Energy cost of one kg of gain at the animal's degree of maturity
    fn energy_per_kg_gain(&self, breed: &BreedRecord, weight_kg: f64) -> f64 {
        let maturity = breed
            .maturity_ratio(weight_kg)
            .min(self.performance.max_maturity_ratio);
        self.performance.gain_energy_base_mcal_per_kg
            * self.performance.maturity_coefficient.mul_add(maturity, 1.0)
    }

    /// Diminishing returns towards the configured ceiling
    ///
    /// Non-decreasing in `raw_gain`; saturates to exactly the ceiling in
    /// `f64` once `raw_gain / ceiling` exceeds about 36.
    fn plateau(&self, raw_gain: f64) -> f64 {
        let ceiling = self.performance.max_daily_gain_kg;
        ceiling * -(-raw_gain / ceiling).exp_m1()
    }
}

fn require_positive(label: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{label} must be positive, got {value}"
        )))
    }
}

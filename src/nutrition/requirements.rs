// ABOUTME: Daily energy, protein, and dry-matter intake requirements for one animal
// ABOUTME: Metabolic body weight maintenance plus stage-dependent growth cost, clamped intake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! Requirement Calculator
//!
//! Pure functions from (weight, target gain, age, stage) to a daily
//! [`RequirementEstimate`]. Same inputs always give the same outputs.
//!
//! # Scientific References
//!
//! - Kleiber, M. (1947). Body size and metabolic rate. *Physiological Reviews*, 27(4), 511-541.
//! - NASEM (2016). *Nutrient Requirements of Beef Cattle*, 8th rev. ed. National Academies Press.
//!   <https://doi.org/10.17226/19014>

use crate::config::estimator::RequirementsConfig;
use herdwise_core::constants::physiology::METABOLIC_WEIGHT_EXPONENT;
use herdwise_core::errors::{AppError, AppResult};
use herdwise_core::models::{AnimalSnapshot, PhysiologicalStage};
use serde::{Deserialize, Serialize};

/// Daily nutrient requirements of one animal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequirementEstimate {
    /// Total metabolizable energy (Mcal / day)
    pub energy_mcal_per_day: f64,
    /// Total protein (g / day)
    pub protein_g_per_day: f64,
    /// Dry-matter intake after the body-weight clamp (kg / day)
    pub dry_matter_intake_kg_per_day: f64,

    /// Maintenance share of the energy requirement
    pub maintenance_energy_mcal_per_day: f64,
    /// Growth share of the energy requirement
    pub growth_energy_mcal_per_day: f64,
    /// Whether the clamp changed the intake derived from energy
    pub dry_matter_clamped: bool,
}

/// Body weight raised to the 0.75 power
///
/// # Errors
///
/// Returns `InvalidInput` if the weight is not a positive finite number
pub fn metabolic_body_weight(weight_kg: f64) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weight must be positive, got {weight_kg}"
        )));
    }
    Ok(weight_kg.powf(METABOLIC_WEIGHT_EXPONENT))
}

/// Maintenance energy of an adult animal (Mcal / day), without age adjustment
///
/// The performance predictor charges this cost before converting surplus
/// energy into gain.
///
/// # Errors
///
/// Returns `InvalidInput` if the weight is not a positive finite number or
/// the configuration section fails validation
pub fn calculate_maintenance_energy(weight_kg: f64, config: &RequirementsConfig) -> AppResult<f64> {
    check_requirements_config(config)?;
    Ok(metabolic_body_weight(weight_kg)? * config.maintenance_mcal_per_kg_mbw)
}

/// Compute the daily requirements for one animal
///
/// # Errors
///
/// Returns `InvalidInput` if weight is not positive, if target gain or age
/// is negative or not finite, or if the configuration section fails validation.
pub fn calculate_requirements(
    weight_kg: f64,
    target_daily_gain_kg: f64,
    age_months: f64,
    stage: PhysiologicalStage,
    config: &RequirementsConfig,
) -> AppResult<RequirementEstimate> {
    check_requirements_config(config)?;
    let mbw = metabolic_body_weight(weight_kg)?;
    if !target_daily_gain_kg.is_finite() || target_daily_gain_kg < 0.0 {
        return Err(AppError::invalid_input(format!(
            "Target daily gain must be >= 0, got {target_daily_gain_kg}"
        )));
    }
    if !age_months.is_finite() || age_months < 0.0 {
        return Err(AppError::invalid_input(format!(
            "Age must be >= 0 months, got {age_months}"
        )));
    }

    let age_multiplier = if age_months < config.young_animal_age_months {
        config.young_animal_maintenance_multiplier
    } else {
        1.0
    };
    let maintenance_energy = mbw * config.maintenance_mcal_per_kg_mbw * age_multiplier;
    let growth_energy =
        target_daily_gain_kg * config.growth_energy_mcal_per_kg_gain.for_stage(stage);
    let energy = maintenance_energy + growth_energy;

    let protein = mbw.mul_add(
        config.maintenance_protein_g_per_kg_mbw,
        target_daily_gain_kg * config.growth_protein_g_per_kg_gain.for_stage(stage),
    );

    let unclamped_dmi = energy / config.reference_diet_energy_density_mcal_per_kg;
    let min_dmi = weight_kg * config.dmi_min_percent_body_weight / 100.0;
    let max_dmi = weight_kg * config.dmi_max_percent_body_weight / 100.0;
    let dry_matter_intake = unclamped_dmi.clamp(min_dmi, max_dmi);

    Ok(RequirementEstimate {
        energy_mcal_per_day: energy,
        protein_g_per_day: protein,
        dry_matter_intake_kg_per_day: dry_matter_intake,
        maintenance_energy_mcal_per_day: maintenance_energy,
        growth_energy_mcal_per_day: growth_energy,
        dry_matter_clamped: (dry_matter_intake - unclamped_dmi).abs() > f64::EPSILON,
    })
}

/// Reject a section that skipped `EstimatorConfig::validate`, such as one
/// built field by field from `RequirementsConfig::default()`
pub(crate) fn check_requirements_config(config: &RequirementsConfig) -> AppResult<()> {
    config.validate().map_err(|e| {
        AppError::invalid_input(format!("Invalid requirements configuration: {e}")).with_source(e)
    })
}

/// Requirements for a validated snapshot
///
/// # Errors
///
/// Same conditions as [`calculate_requirements`]
pub fn requirements_for_snapshot(
    snapshot: &AnimalSnapshot,
    target_daily_gain_kg: f64,
    config: &RequirementsConfig,
) -> AppResult<RequirementEstimate> {
    calculate_requirements(
        snapshot.weight_kg,
        target_daily_gain_kg,
        snapshot.age_months,
        snapshot.physiological_stage,
        config,
    )
}

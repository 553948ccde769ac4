// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors
// ABOUTME: Single-animal calculation commands for herdwise-cli
// ABOUTME: Requirement estimate and gain prediction from command-line figures

use crate::helpers::display::{display_prediction, display_requirements};
use crate::Result;
use herdwise::config::EstimatorConfig;
use herdwise::nutrition::{
    calculate_requirements, BreedCatalog, BreedFallbackPolicy, PerformancePredictor,
};
use herdwise_core::models::PhysiologicalStage;

/// Print the daily requirements of one animal
pub fn requirements(
    config: &EstimatorConfig<true>,
    weight: f64,
    gain: f64,
    age: f64,
    stage: &str,
) -> Result<()> {
    let stage: PhysiologicalStage = stage.parse()?;
    let estimate = calculate_requirements(weight, gain, age, stage, &config.requirements)?;
    display_requirements(weight, stage, &estimate);
    Ok(())
}

/// Print the predicted gain of one animal on a diet
pub fn predict(
    config: &EstimatorConfig<true>,
    breed_ref: &str,
    density: Option<f64>,
    dmi: f64,
    weight: f64,
    strict_breeds: bool,
) -> Result<()> {
    let catalog = BreedCatalog::builtin();
    let policy = if strict_breeds {
        BreedFallbackPolicy::Strict
    } else {
        config.report.breed_fallback.clone()
    };
    let resolved = catalog.resolve(breed_ref, &policy)?;
    if resolved.is_fallback() {
        eprintln!(
            "note: breed '{breed_ref}' not found, using {} ({})",
            resolved.record.name, resolved.record.id
        );
    }

    let density = density.unwrap_or(config.report.diet_energy_density_mcal_per_kg);
    let prediction =
        PerformancePredictor::new(config).predict(resolved.record, density, dmi, weight)?;
    display_prediction(resolved.record, &prediction);
    Ok(())
}

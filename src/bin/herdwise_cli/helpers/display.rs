// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors
// ABOUTME: Output formatting helpers for herdwise-cli
// ABOUTME: Provides consistent display functions for breeds, estimates, and report summaries

use herdwise::nutrition::{format_ratio, EnergyStatus, PerformancePrediction, RequirementEstimate};
use herdwise::reports::HerdReportSummary;
use herdwise_core::constants::report::NOT_APPLICABLE;
use herdwise_core::models::{BreedRecord, PhysiologicalStage};

/// Display the breed catalog as an aligned table
pub fn display_breed_table(breeds: &[BreedRecord]) {
    println!(
        "{:<20} {:<24} {:<8} {:>8} {:>12}",
        "ID", "NAME", "SPECIES", "FACTOR", "MATURE (kg)"
    );
    println!("{}", "-".repeat(76));
    for breed in breeds {
        println!(
            "{:<20} {:<24} {:<8} {:>8.2} {:>12.0}",
            breed.id,
            breed.name,
            breed.species,
            breed.growth_potential_factor,
            breed.reference_mature_weight_kg
        );
    }
}

/// Display a requirement estimate
pub fn display_requirements(
    weight: f64,
    stage: PhysiologicalStage,
    estimate: &RequirementEstimate,
) {
    println!("Daily requirements ({weight:.0} kg, {stage})");
    println!("{}", "=".repeat(44));
    println!(
        "   Energy:        {:>8.2} Mcal ME/day",
        estimate.energy_mcal_per_day
    );
    println!(
        "     maintenance: {:>8.2}",
        estimate.maintenance_energy_mcal_per_day
    );
    println!(
        "     growth:      {:>8.2}",
        estimate.growth_energy_mcal_per_day
    );
    println!("   Protein:       {:>8.0} g/day", estimate.protein_g_per_day);
    println!(
        "   Dry matter:    {:>8.2} kg/day{}",
        estimate.dry_matter_intake_kg_per_day,
        if estimate.dry_matter_clamped {
            " (limited by body weight)"
        } else {
            ""
        }
    );
}

/// Display a gain prediction
pub fn display_prediction(breed: &BreedRecord, prediction: &PerformancePrediction) {
    println!("Predicted performance ({})", breed.name);
    println!("{}", "=".repeat(44));
    println!(
        "   Average daily gain: {:>7.3} kg/day",
        prediction.predicted_avg_daily_gain_kg
    );
    println!(
        "   Feed conversion:    {:>7}",
        format_ratio(prediction.feed_conversion_ratio)
    );
    println!(
        "   Energy intake:      {:>7.2} Mcal/day",
        prediction.energy_intake_mcal_per_day
    );
    println!(
        "   Maintenance:        {:>7.2} Mcal/day",
        prediction.maintenance_energy_mcal_per_day
    );
    match prediction.energy_status {
        EnergyStatus::Surplus => println!(
            "   Energy surplus:     {:>7.2} Mcal/day",
            prediction.energy_balance_mcal_per_day
        ),
        EnergyStatus::Deficit => println!(
            "   Energy deficit:     {:>7.2} Mcal/day (no gain expected)",
            -prediction.energy_balance_mcal_per_day
        ),
    }
}

/// Display report totals on stderr so stdout carries only the report
pub fn display_report_summary(summary: &HerdReportSummary) {
    eprintln!(
        "{} animals: {} computed, {} invalid",
        summary.animals, summary.valid_rows, summary.invalid_rows
    );
    eprintln!(
        "Daily feed cost: {:.2} {}",
        summary.total_daily_feed_cost, summary.currency
    );
    eprintln!(
        "Mean predicted gain: {}",
        summary
            .mean_predicted_gain_kg
            .map_or_else(|| NOT_APPLICABLE.to_owned(), |gain| format!("{gain:.3} kg/day"))
    );
    eprintln!(
        "Herd feed conversion: {}",
        format_ratio(summary.herd_feed_conversion_ratio)
    );
}

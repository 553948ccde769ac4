// ABOUTME: Requirement calculator configuration for maintenance, growth, and intake formulas
// ABOUTME: Holds per-stage coefficients and the dry-matter plausibility clamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! Requirement Calculator Configuration
//!
//! Coefficients for the daily energy, protein, and dry-matter intake
//! estimates.
//!
//! # Scientific References
//!
//! - Metabolic body weight: Kleiber, M. (1947). *Physiological Reviews*, 27(4), 511-541.
//! - Maintenance and gain: NASEM (2016). *Nutrient Requirements of Beef Cattle*, 8th rev. ed.
//! - Intake limits: NRC (2001). *Nutrient Requirements of Dairy Cattle*, 7th rev. ed.

use crate::config::estimator::error::ConfigError;
use herdwise_core::constants::physiology::{
    DMI_ABSOLUTE_MAX_PERCENT_BODY_WEIGHT, DMI_ABSOLUTE_MIN_PERCENT_BODY_WEIGHT,
};
use herdwise_core::models::PhysiologicalStage;
use serde::{Deserialize, Serialize};

/// One value per physiological stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageValues {
    /// Value for growing animals
    pub growing: f64,
    /// Value for fattening animals
    pub fattening: f64,
    /// Value for lactating animals
    pub lactating: f64,
    /// Value for animals at maintenance
    pub maintenance: f64,
}

impl StageValues {
    /// Value for the given stage
    #[must_use]
    pub const fn for_stage(&self, stage: PhysiologicalStage) -> f64 {
        match stage {
            PhysiologicalStage::Growing => self.growing,
            PhysiologicalStage::Fattening => self.fattening,
            PhysiologicalStage::Lactating => self.lactating,
            PhysiologicalStage::Maintenance => self.maintenance,
        }
    }

    /// Whether every value is finite and strictly positive
    #[must_use]
    pub fn all_positive(&self) -> bool {
        PhysiologicalStage::ALL.iter().all(|stage| {
            let value = self.for_stage(*stage);
            value.is_finite() && value > 0.0
        })
    }

    /// Whether every value is finite and non-negative
    #[must_use]
    pub fn all_non_negative(&self) -> bool {
        PhysiologicalStage::ALL.iter().all(|stage| {
            let value = self.for_stage(*stage);
            value.is_finite() && value >= 0.0
        })
    }
}

/// Requirement calculator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementsConfig {
    /// Maintenance energy per kg of metabolic body weight (Mcal ME / kg^0.75 / day): 0.11
    pub maintenance_mcal_per_kg_mbw: f64,
    /// Maintenance protein per kg of metabolic body weight (g / kg^0.75 / day): 3.8
    pub maintenance_protein_g_per_kg_mbw: f64,
    /// Energy needed per kg of daily gain, by stage (Mcal / kg)
    pub growth_energy_mcal_per_kg_gain: StageValues,
    /// Protein needed per kg of daily gain, by stage (g / kg)
    pub growth_protein_g_per_kg_gain: StageValues,
    /// Energy density ceiling of the assumed diet used to derive intake (Mcal / kg DM): 2.2
    pub reference_diet_energy_density_mcal_per_kg: f64,
    /// Lower intake clamp as percent of body weight: 2.0
    pub dmi_min_percent_body_weight: f64,
    /// Upper intake clamp as percent of body weight: 3.5
    pub dmi_max_percent_body_weight: f64,
    /// Animals younger than this get the young-animal maintenance multiplier
    pub young_animal_age_months: f64,
    /// Maintenance multiplier for young animals: 1.1
    pub young_animal_maintenance_multiplier: f64,
}

impl Default for RequirementsConfig {
    fn default() -> Self {
        Self {
            maintenance_mcal_per_kg_mbw: 0.11,
            maintenance_protein_g_per_kg_mbw: 3.8,
            growth_energy_mcal_per_kg_gain: StageValues {
                growing: 4.4,
                fattening: 5.5,
                lactating: 5.8,
                maintenance: 4.0,
            },
            growth_protein_g_per_kg_gain: StageValues {
                growing: 320.0,
                fattening: 280.0,
                lactating: 300.0,
                maintenance: 200.0,
            },
            reference_diet_energy_density_mcal_per_kg: 2.2,
            dmi_min_percent_body_weight: 2.0,
            dmi_max_percent_body_weight: 3.5,
            young_animal_age_months: 6.0,
            young_animal_maintenance_multiplier: 1.1,
        }
    }
}

impl RequirementsConfig {
    /// Validate requirement coefficients
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for non-positive coefficients or an
    /// intake clamp outside 1-4 % of body weight, and `ConfigError::InvalidRange`
    /// when stage ordering or clamp bounds are inverted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.maintenance_mcal_per_kg_mbw.is_finite() && self.maintenance_mcal_per_kg_mbw > 0.0)
            || !(self.maintenance_protein_g_per_kg_mbw.is_finite()
                && self.maintenance_protein_g_per_kg_mbw > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Maintenance energy and protein coefficients must be positive",
            ));
        }

        if !self.growth_energy_mcal_per_kg_gain.all_positive()
            || !self.growth_protein_g_per_kg_gain.all_positive()
        {
            return Err(ConfigError::ValueOutOfRange(
                "Growth energy and protein coefficients must be positive for every stage",
            ));
        }

        let energy = &self.growth_energy_mcal_per_kg_gain;
        if energy.fattening < energy.maintenance || energy.lactating < energy.maintenance {
            return Err(ConfigError::InvalidRange(
                "Fattening and lactating growth energy must be >= maintenance",
            ));
        }

        if !(self.reference_diet_energy_density_mcal_per_kg.is_finite()
            && self.reference_diet_energy_density_mcal_per_kg > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Reference diet energy density must be positive",
            ));
        }

        let clamp_range =
            DMI_ABSOLUTE_MIN_PERCENT_BODY_WEIGHT..=DMI_ABSOLUTE_MAX_PERCENT_BODY_WEIGHT;
        if !clamp_range.contains(&self.dmi_min_percent_body_weight)
            || !clamp_range.contains(&self.dmi_max_percent_body_weight)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Dry-matter intake clamp must lie between 1% and 4% of body weight",
            ));
        }
        if self.dmi_min_percent_body_weight >= self.dmi_max_percent_body_weight {
            return Err(ConfigError::InvalidRange(
                "dmi_min_percent_body_weight must be < dmi_max_percent_body_weight",
            ));
        }

        if !(self.young_animal_age_months.is_finite() && self.young_animal_age_months >= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Young animal age threshold must be >= 0 months",
            ));
        }
        if !(1.0..=2.0).contains(&self.young_animal_maintenance_multiplier) {
            return Err(ConfigError::ValueOutOfRange(
                "Young animal maintenance multiplier must be between 1.0 and 2.0",
            ));
        }

        Ok(())
    }
}

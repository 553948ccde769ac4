// ABOUTME: Breed record model with genetic growth potential and mature weight
// ABOUTME: Immutable catalog entry validated once at catalog construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A single breed entry in the breed catalog
///
/// # Examples
///
/// ```rust
/// use herdwise_core::models::BreedRecord;
///
/// let angus = BreedRecord::new("angus", "Aberdeen Angus", "cattle", 1.05, 650.0);
/// assert!(angus.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedRecord {
    /// Stable identifier, unique across the catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Species label (informational)
    pub species: String,
    /// Multiplier (> 0) on how efficiently surplus energy becomes gain
    pub growth_potential_factor: f64,
    /// Typical adult weight, used to compute the degree of maturity
    pub reference_mature_weight_kg: f64,
}

impl BreedRecord {
    /// Create a breed record
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        species: impl Into<String>,
        growth_potential_factor: f64,
        reference_mature_weight_kg: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            species: species.into(),
            growth_potential_factor,
            reference_mature_weight_kg,
        }
    }

    /// Check the record's own invariants
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the id or name is blank, or if the growth factor
    /// or mature weight is not a strictly positive finite number.
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::invalid_input("Breed id must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(
                AppError::invalid_input("Breed name must not be empty").with_resource_id(&self.id)
            );
        }
        if !self.growth_potential_factor.is_finite() || self.growth_potential_factor <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Growth potential factor must be positive, got {}",
                self.growth_potential_factor
            ))
            .with_resource_id(&self.id));
        }
        if !self.reference_mature_weight_kg.is_finite() || self.reference_mature_weight_kg <= 0.0
        {
            return Err(AppError::invalid_input(format!(
                "Reference mature weight must be positive, got {}",
                self.reference_mature_weight_kg
            ))
            .with_resource_id(&self.id));
        }
        Ok(())
    }

    /// Degree of maturity: current weight as a fraction of mature weight
    #[must_use]
    pub fn maturity_ratio(&self, weight_kg: f64) -> f64 {
        weight_kg / self.reference_mature_weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_non_positive_factor() {
        let breed = BreedRecord::new("x", "X", "cattle", 0.0, 500.0);
        assert!(breed.validate().is_err());

        let breed = BreedRecord::new("x", "X", "cattle", f64::NAN, 500.0);
        assert!(breed.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_identity() {
        assert!(BreedRecord::new(" ", "X", "cattle", 1.0, 500.0)
            .validate()
            .is_err());
        assert!(BreedRecord::new("x", "", "cattle", 1.0, 500.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_maturity_ratio() {
        let breed = BreedRecord::new("x", "X", "cattle", 1.0, 600.0);
        assert!((breed.maturity_ratio(300.0) - 0.5).abs() < f64::EPSILON);
    }
}

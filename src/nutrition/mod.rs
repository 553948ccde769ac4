// ABOUTME: Nutrition calculations: breed catalog, requirements, gain prediction, feed efficiency
// ABOUTME: Pure, deterministic, and safe to call concurrently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! # Nutrition
//!
//! Leaf-first:
//! - [`breed_catalog`]: immutable breed registry with typed fallback resolution
//! - [`requirements`]: daily energy, protein, and dry-matter intake
//! - [`performance`]: predicted average daily gain for a diet
//! - [`feed_efficiency`]: feed conversion ratio as an optional value

pub mod breed_catalog;
pub mod feed_efficiency;
pub mod performance;
pub mod requirements;

pub use breed_catalog::{
    BreedCatalog, BreedFallbackPolicy, BreedMatch, CatalogBuilder, ResolvedBreed,
};
pub use feed_efficiency::{feed_conversion_ratio, format_ratio, herd_feed_conversion_ratio};
pub use performance::{EnergyStatus, PerformancePrediction, PerformancePredictor};
pub use requirements::{
    calculate_maintenance_energy, calculate_requirements, metabolic_body_weight,
    requirements_for_snapshot, RequirementEstimate,
};

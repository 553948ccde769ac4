// ABOUTME: Core data models for the Herdwise estimator
// ABOUTME: Re-exports breed records, animal records, snapshots, stages, and sex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! # Data Models
//!
//! - `BreedRecord`: immutable catalog entry
//! - `AnimalRecord`: raw, possibly incomplete animal data from the host application
//! - `AnimalSnapshot`: validated calculator input
//! - `PhysiologicalStage`, `Sex`: enumerations parsed from free text

mod animal;
mod breed;

pub use animal::{AnimalRecord, AnimalSnapshot, PhysiologicalStage, Sex};
pub use breed::BreedRecord;

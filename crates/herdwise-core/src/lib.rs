// ABOUTME: Core types and constants for the Herdwise livestock nutrition estimator
// ABOUTME: Foundation crate with error handling, breed/animal models, and physiology constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

#![deny(unsafe_code)]

//! # Herdwise Core
//!
//! Foundation crate providing shared types and constants for the Herdwise
//! estimator. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and per-row `RowError`
//! - **constants**: Physiology constants and report markers
//! - **models**: `BreedRecord`, `AnimalSnapshot`, `AnimalRecord`, `PhysiologicalStage`, `Sex`

/// Unified error handling system with standard error codes
pub mod errors;

/// Physiology constants and report markers
pub mod constants;

/// Core data models (breeds, animals, stages)
pub mod models;

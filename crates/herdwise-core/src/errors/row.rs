// ABOUTME: Row-level error types for herd report generation
// ABOUTME: Describes why a single animal's row failed without aborting the batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! # Row Error Types
//!
//! Provides structured error types for per-animal report failures:
//! - `RowError` - why one row was marked invalid
//! - Conversion to `AppError` when a caller aborts the whole batch

use super::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Errors specific to a single report row.
///
/// A row error never aborts the batch on its own; the report keeps going and
/// marks the row invalid. Callers running in batch mode convert the first one
/// into an [`AppError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowError {
    /// A required animal field is absent
    MissingField {
        /// Name of the missing field
        field: String,
    },
    /// An animal field is present but cannot be used
    MalformedField {
        /// Name of the malformed field
        field: String,
        /// Raw value as supplied by the caller
        value: String,
        /// Reason the value was rejected
        reason: String,
    },
    /// The animal's breed reference matched nothing and the policy allows no fallback
    BreedNotFound {
        /// Breed id or name as supplied
        breed_ref: String,
    },
    /// The requirement or performance calculation rejected its inputs
    CalculationFailed {
        /// Details from the underlying calculation error
        details: String,
    },
    /// A computed value was NaN or infinite
    NonFiniteResult {
        /// Name of the offending output field
        field: String,
    },
}

impl RowError {
    /// Create a "missing field" error
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a "malformed field" error
    #[must_use]
    pub fn malformed_field(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a "breed not found" error
    #[must_use]
    pub fn breed_not_found(breed_ref: impl Into<String>) -> Self {
        Self::BreedNotFound {
            breed_ref: breed_ref.into(),
        }
    }

    /// Create a "non-finite result" error
    #[must_use]
    pub fn non_finite(field: impl Into<String>) -> Self {
        Self::NonFiniteResult {
            field: field.into(),
        }
    }

    /// Field name associated with this error, if any
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field }
            | Self::MalformedField { field, .. }
            | Self::NonFiniteResult { field } => Some(field),
            Self::BreedNotFound { .. } => Some("breed"),
            Self::CalculationFailed { .. } => None,
        }
    }

    /// Error code used when this row error is escalated
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingField { .. } => ErrorCode::MissingRequiredField,
            Self::MalformedField { .. } => ErrorCode::InvalidFormat,
            Self::BreedNotFound { .. } => ErrorCode::ResourceNotFound,
            Self::CalculationFailed { .. } => ErrorCode::InvalidInput,
            Self::NonFiniteResult { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing {field}"),
            Self::MalformedField {
                field,
                value,
                reason,
            } => write!(f, "invalid {field} '{value}': {reason}"),
            Self::BreedNotFound { breed_ref } => write!(f, "unknown breed '{breed_ref}'"),
            Self::CalculationFailed { details } => write!(f, "calculation failed: {details}"),
            Self::NonFiniteResult { field } => write!(f, "{field} is not a finite number"),
        }
    }
}

impl Error for RowError {}

impl From<AppError> for RowError {
    fn from(error: AppError) -> Self {
        Self::CalculationFailed {
            details: error.message,
        }
    }
}

impl From<RowError> for AppError {
    fn from(error: RowError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}

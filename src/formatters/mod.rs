// ABOUTME: Output format abstraction for serializing report data to multiple formats
// ABOUTME: Supports CSV (default, tabular export) and JSON (full nested rows)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **CSV**: Default format, one flat record per row with a header line
//! - **JSON**: Pretty-printed, keeps nested values and optional fields
//!
//! ## Usage
//!
//! ```rust
//! use herdwise::formatters::{format_records, OutputFormat};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Row { id: &'static str, gain: f64 }
//!
//! let output = format_records(&[Row { id: "A1", gain: 1.2 }], OutputFormat::Csv).unwrap();
//! assert_eq!(output.data, "id,gain\nA1,1.2\n");
//! ```

use herdwise_core::errors::AppError;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Comma-separated values with a header line
    #[default]
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    /// Strict parse: unknown names are an error
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(FormatError {
                message: format!("unknown output format '{other}' (expected csv or json)"),
                format: Self::default(),
            }),
        }
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string())
    }
}

/// Format a sequence of flat records
///
/// CSV writes one line per record under a header derived from the field
/// names; JSON writes a pretty-printed array.
///
/// # Errors
/// Returns `FormatError` if:
/// - a record contains a nested value CSV cannot represent
/// - JSON serialization fails
pub fn format_records<T: Serialize>(
    records: &[T],
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for record in records {
                writer.serialize(record).map_err(|e| FormatError {
                    message: e.to_string(),
                    format,
                })?;
            }
            let bytes = writer.into_inner().map_err(|e| FormatError {
                message: e.to_string(),
                format,
            })?;
            String::from_utf8(bytes).map_err(|e| FormatError {
                message: e.to_string(),
                format,
            })?
        }
        OutputFormat::Json => format_json_pretty(records, format)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Format any serializable value as pretty JSON (for display)
///
/// # Errors
/// Returns `FormatError` if JSON serialization fails
pub fn format_output_pretty<T: Serialize>(data: &T) -> Result<FormattedOutput, FormatError> {
    let format = OutputFormat::Json;
    Ok(FormattedOutput {
        data: format_json_pretty(data, format)?,
        format,
        content_type: format.content_type(),
    })
}

fn format_json_pretty<T: Serialize + ?Sized>(
    data: &T,
    format: OutputFormat,
) -> Result<String, FormatError> {
    serde_json::to_string_pretty(data).map_err(|e| FormatError {
        message: e.to_string(),
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert_eq!("Csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_content_type() {
        assert_eq!(OutputFormat::Csv.content_type(), "text/csv");
        assert_eq!(OutputFormat::Json.content_type(), "application/json");
    }
}

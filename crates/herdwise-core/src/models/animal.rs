// ABOUTME: Animal input models: physiological stage, sex, snapshots, and raw records
// ABOUTME: Raw records come from the host application; snapshots feed the calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Metabolic / production phase of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysiologicalStage {
    /// Young stock building frame
    Growing,
    /// Finishing animals laying down fat and muscle
    Fattening,
    /// Dams producing milk
    Lactating,
    /// Adults holding weight
    Maintenance,
}

impl PhysiologicalStage {
    /// All stages in declaration order
    pub const ALL: [Self; 4] = [
        Self::Growing,
        Self::Fattening,
        Self::Lactating,
        Self::Maintenance,
    ];

    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Growing => "growing",
            Self::Fattening => "fattening",
            Self::Lactating => "lactating",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for PhysiologicalStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhysiologicalStage {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "growing" | "growth" => Ok(Self::Growing),
            "fattening" | "finishing" => Ok(Self::Fattening),
            "lactating" | "lactation" => Ok(Self::Lactating),
            "maintenance" => Ok(Self::Maintenance),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized physiological stage '{other}' (expected growing, fattening, lactating or maintenance)"
            ))),
        }
    }
}

/// Sex of an animal as recorded by the host application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (bull, steer, ram, buck)
    Male,
    /// Female (cow, heifer, ewe, doe)
    Female,
    /// Not recorded
    #[default]
    Unknown,
}

impl Sex {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            "" | "unknown" => Ok(Self::Unknown),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized sex '{other}' (expected male or female)"
            ))),
        }
    }
}

/// Validated calculator input for one animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalSnapshot {
    /// Live weight (> 0)
    pub weight_kg: f64,
    /// Age in months (>= 0)
    pub age_months: f64,
    /// Breed id or name
    pub breed_ref: String,
    /// Current production phase
    pub physiological_stage: PhysiologicalStage,
}

/// Raw animal record as stored by the host application
///
/// Every field except the identifier and breed reference may be missing or
/// malformed; the report formatter turns such problems into a row-level
/// error rather than failing the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    /// Animal identifier (ear tag, registry number)
    pub id: String,
    /// Breed id or name
    #[serde(default)]
    pub breed: String,
    /// Sex as free text
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sex: Option<String>,
    /// Live weight
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight_kg: Option<f64>,
    /// Birth date as free text
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub birth_date: Option<String>,
    /// Physiological stage as free text
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub stage: Option<String>,
    /// Per-animal target gain overriding the stage default
    #[serde(default, deserialize_with = "lenient_number")]
    pub target_daily_gain_kg: Option<f64>,
}

impl AnimalRecord {
    /// Create a record with only identity and breed set
    #[must_use]
    pub fn new(id: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            breed: breed.into(),
            ..Self::default()
        }
    }

    /// Set the sex
    #[must_use]
    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = Some(sex.into());
        self
    }

    /// Set the live weight
    #[must_use]
    pub const fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Set the birth date text
    #[must_use]
    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = Some(birth_date.into());
        self
    }

    /// Set the physiological stage text
    #[must_use]
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    /// Set a per-animal target gain
    #[must_use]
    pub const fn with_target_gain(mut self, target_daily_gain_kg: f64) -> Self {
        self.target_daily_gain_kg = Some(target_daily_gain_kg);
        self
    }
}

/// Blank text fields become `None`
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

/// Numbers stored as text: blank becomes `None`, unparseable becomes NaN so the
/// row fails validation instead of the whole file failing to load
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    let value: Option<NumberOrText> = Option::deserialize(deserializer)?;
    Ok(match value {
        None => None,
        Some(NumberOrText::Number(number)) => Some(number),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => None,
        Some(NumberOrText::Text(text)) => Some(text.trim().parse().unwrap_or(f64::NAN)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_stage_parsing_is_case_insensitive() {
        assert_eq!(
            "Fattening".parse::<PhysiologicalStage>().unwrap(),
            PhysiologicalStage::Fattening
        );
        assert_eq!(
            " LACTATING ".parse::<PhysiologicalStage>().unwrap(),
            PhysiologicalStage::Lactating
        );
    }

    #[test]
    fn test_unknown_stage_is_invalid_input() {
        let error = "hibernating".parse::<PhysiologicalStage>().unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_sex_parsing() {
        assert_eq!("F".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("".parse::<Sex>().unwrap(), Sex::Unknown);
        assert!("x".parse::<Sex>().is_err());
    }

    #[test]
    fn test_record_deserializes_lenient_numbers() {
        let record: AnimalRecord = serde_json::from_str(
            r#"{"id":"A1","breed":"angus","weight_kg":"heavy","birth_date":"","target_daily_gain_kg":1.1}"#,
        )
        .unwrap();
        assert!(record.weight_kg.unwrap().is_nan());
        assert_eq!(record.birth_date, None);
        assert_eq!(record.target_daily_gain_kg, Some(1.1));
    }
}

// ABOUTME: Shared constants for physiology formulas and report output markers
// ABOUTME: Metabolic weight exponent, plausibility limits, date formats, and N/A markers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! Application constants organized by domain

/// Constants used by the nutrition formulas
pub mod physiology {
    /// Exponent applied to body weight to obtain metabolic body weight (kg^0.75)
    ///
    /// Reference: Kleiber, M. (1947). Body size and metabolic rate.
    /// *Physiological Reviews*, 27(4), 511-541.
    pub const METABOLIC_WEIGHT_EXPONENT: f64 = 0.75;

    /// Lowest dry-matter intake, as percent of body weight, any configuration may clamp to
    pub const DMI_ABSOLUTE_MIN_PERCENT_BODY_WEIGHT: f64 = 1.0;

    /// Highest dry-matter intake, as percent of body weight, any configuration may clamp to
    pub const DMI_ABSOLUTE_MAX_PERCENT_BODY_WEIGHT: f64 = 4.0;

    /// Average number of days in a month, used when converting ages
    pub const DAYS_PER_MONTH: f64 = 30.4375;
}

/// Markers and formats used by the report formatter
pub mod report {
    /// Placeholder printed where a value is not applicable (e.g. FCR at zero gain)
    pub const NOT_APPLICABLE: &str = "N/A";

    /// Status label for rows that were computed
    pub const STATUS_OK: &str = "OK";

    /// Status prefix for rows that failed
    pub const STATUS_INVALID: &str = "INVALID";

    /// Birth date formats accepted in animal records, tried in order
    pub const BIRTH_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y"];

    /// Currency label used when none is configured
    pub const DEFAULT_CURRENCY: &str = "EUR";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the estimator service
    pub const HERDWISE: &str = "herdwise";
}

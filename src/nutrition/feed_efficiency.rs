// ABOUTME: Feed conversion ratio as an explicit optional value
// ABOUTME: Zero or non-finite gain yields None, never infinity or NaN
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

use herdwise_core::constants::report::NOT_APPLICABLE;

/// Dry matter consumed per kg of gain
///
/// `None` when the gain is not a positive finite number or the intake is not
/// a non-negative finite number.
#[must_use]
pub fn feed_conversion_ratio(dry_matter_intake_kg: f64, gain_kg: f64) -> Option<f64> {
    if !gain_kg.is_finite() || gain_kg <= 0.0 {
        return None;
    }
    if !dry_matter_intake_kg.is_finite() || dry_matter_intake_kg < 0.0 {
        return None;
    }
    let ratio = dry_matter_intake_kg / gain_kg;
    ratio.is_finite().then_some(ratio)
}

/// Herd-level ratio: total intake over total gain
#[must_use]
pub fn herd_feed_conversion_ratio<I>(pairs: I) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (intake, gain) = pairs
        .into_iter()
        .fold((0.0_f64, 0.0_f64), |(intake, gain), (dmi, adg)| {
            (intake + dmi, gain + adg)
        });
    feed_conversion_ratio(intake, gain)
}

/// Two decimals, or `N/A` when the ratio is absent
#[must_use]
pub fn format_ratio(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| NOT_APPLICABLE.to_owned(), |value| format!("{value:.2}"))
}

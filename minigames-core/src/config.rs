//! Validation and input clamping for mine and field definitions.
use thiserror::Error;

use crate::constants::MAX_ROWS;

/// Non-fatal anomaly found in a definition. Reported, never enforced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigIssue {
    #[error(
        "total outcome chance in '{id}' is {percent:.2}% (over 100%); later outcomes will be unreachable",
        percent = .total * 100.0
    )]
    RateOverflow { id: String, total: f64 },
    #[error("'{id}' has {outcome} chance {value}; expected 0..1")]
    ChanceOutOfRange {
        id: String,
        outcome: &'static str,
        value: f64,
    },
}

/// Clamp a runtime-supplied chance into `[0, +inf)`; non-finite input becomes 0.
#[must_use]
pub fn clamp_chance(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Clamp a runtime-supplied row count into `1..=MAX_ROWS`, flooring fractions;
/// non-finite input becomes 1.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_count(value: f64) -> u32 {
    if !value.is_finite() {
        return 1;
    }
    // `as` saturates at the u32 bounds.
    (value.floor() as u32).clamp(1, MAX_ROWS)
}

/// Report any rate outside `[0, 1]`.
pub(crate) fn check_chance(id: &str, outcome: &'static str, value: f64) -> Option<ConfigIssue> {
    (!(0.0..=1.0).contains(&value)).then(|| ConfigIssue::ChanceOutOfRange {
        id: id.to_string(),
        outcome,
        value,
    })
}

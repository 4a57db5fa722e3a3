//! Priority and quantity suggestions for new replenishment requests.
//!
//! Both derivations are pre-fill hints for the submission form: the
//! submitting user (or the reviewing admin) may override them, and nothing
//! re-validates the chosen values against the stock position afterwards.

use serde::{Deserialize, Serialize};

/// Urgency bucket of a replenishment request.
///
/// Ordered from least to most urgent so severity comparisons read
/// naturally (`Priority::Critical > Priority::High`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    /// Default for ad-hoc requests created without a stock context.
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }
}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Floor applied to every quantity suggestion. Also the pre-fill for
/// requests created without a stock record.
pub const MIN_SUGGESTED_QUANTITY: i64 = 10;

/// Derive a priority from how far stock has fallen against its reorder
/// level.
///
/// Buckets on `quantity / reorder_level`, first match wins:
/// ≤ 0.25 critical, ≤ 0.50 high, ≤ 0.75 medium, above that low. A reorder
/// level of zero or below leaves the ratio unbounded, which lands in the
/// last bucket; the comparisons are done in integer form so the bucket
/// boundaries are exact and no division happens at all.
pub fn suggest_priority(quantity: i64, reorder_level: i64) -> Priority {
    if reorder_level <= 0 {
        return Priority::Low;
    }
    let q = i128::from(quantity);
    let r = i128::from(reorder_level);
    if 4 * q <= r {
        Priority::Critical
    } else if 2 * q <= r {
        Priority::High
    } else if 4 * q <= 3 * r {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Quantity that would restore stock to twice the reorder level, floored
/// at [`MIN_SUGGESTED_QUANTITY`].
pub fn suggest_quantity(quantity: i64, reorder_level: i64) -> i64 {
    reorder_level
        .saturating_mul(2)
        .saturating_sub(quantity)
        .max(MIN_SUGGESTED_QUANTITY)
}

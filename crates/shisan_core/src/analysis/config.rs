//! Goal configuration for the analytics pass.

use serde::{Deserialize, Serialize};

/// Application default target age for goal tracking.
pub const DEFAULT_TARGET_AGE: u8 = 65;

/// Application default target amount.
pub const DEFAULT_TARGET_AMOUNT: f64 = 50_000_000.0;

/// Optional goal inputs for [`analyze`](super::analyze).
///
/// Every field degrades independently: peak metrics need nothing, age
/// metrics need `current_age` (plus `target_age` for the balance-at-age
/// readout), and goal tracking needs `target_amount`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GoalConfig {
    pub current_age: Option<u8>,
    pub target_age: Option<u8>,
    pub target_amount: Option<f64>,
}

impl GoalConfig {
    /// Empty config: peak metrics only
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The application's standard goal: target age 65, target amount
    /// 50,000,000
    #[must_use]
    pub fn standard(current_age: Option<u8>) -> Self {
        Self {
            current_age,
            target_age: Some(DEFAULT_TARGET_AGE),
            target_amount: Some(DEFAULT_TARGET_AMOUNT),
        }
    }
}

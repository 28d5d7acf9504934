//! Summary metric types.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::date_math::days_between;

/// Approximate elapsed time between two days, as whole years plus whole
/// months.
///
/// Buckets are fixed-size (365-day years, 30-day months), matching the
/// granularity of the summary readouts; deliberately not calendar-exact.
/// Both components go negative when `to` precedes `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElapsedSpan {
    pub years: i32,
    pub months: i32,
}

impl ElapsedSpan {
    /// Bucket the exact day count from `from` to `to`.
    #[must_use]
    pub fn between(from: Date, to: Date) -> Self {
        let days = days_between(from, to);
        Self {
            years: days.div_euclid(365),
            months: (days % 365).div_euclid(30),
        }
    }
}

/// Derived analytics for one wealth series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WealthSummary {
    /// Highest total observed across the series. 0.0 when no day is
    /// strictly positive.
    pub peak_total: f64,
    /// Chronologically first day attaining the peak.
    pub peak_day: Option<Date>,
    /// Elapsed time from today to the peak; components are negative when
    /// the peak lies in the reconstructed past.
    pub peak_elapsed: Option<ElapsedSpan>,
    /// Age on the peak day, when a current age was supplied.
    pub age_at_peak: Option<u8>,
    /// Total on the series day nearest the target age's date.
    pub balance_at_target_age: Option<f64>,
    /// First day whose total meets the target amount.
    pub goal_day: Option<Date>,
    /// Elapsed time from today to the goal day.
    pub goal_elapsed: Option<ElapsedSpan>,
    /// Whether the target amount is reached anywhere in the series.
    /// Absent when no target amount was supplied.
    pub goal_achievable: Option<bool>,
}

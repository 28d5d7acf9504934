//! Peak and goal evaluation over a computed series.

use jiff::civil::Date;
use tracing::debug;

use super::config::GoalConfig;
use super::metrics::{ElapsedSpan, WealthSummary};
use crate::date_math::{add_years, days_between};
use crate::model::CalendarSeries;

/// Derive the summary analytics for one wealth series.
///
/// Scans run chronologically and resolve ties to the earliest day: the
/// first day attaining the running maximum is the peak, the first day at
/// the minimum distance to the target-age date supplies the
/// balance-at-age readout, and the first day meeting the target amount is
/// the goal day. Reconstructed past days participate in every scan, with
/// negative elapsed components.
#[must_use]
pub fn analyze(series: &CalendarSeries, today: Date, goals: &GoalConfig) -> WealthSummary {
    debug!(days = series.len(), "analyzing wealth series");

    let mut peak_total = 0.0;
    let mut peak_day = None;
    for snapshot in series.iter() {
        if snapshot.total > peak_total {
            peak_total = snapshot.total;
            peak_day = Some(snapshot.date);
        }
    }

    let peak_elapsed = peak_day.map(|day| ElapsedSpan::between(today, day));
    let age_at_peak = match (goals.current_age, peak_elapsed) {
        (Some(age), Some(span)) => Some((i32::from(age) + span.years).max(0) as u8),
        _ => None,
    };

    let balance_at_target_age = match (goals.current_age, goals.target_age) {
        (Some(current), Some(target)) => {
            let target_day = add_years(today, i32::from(target) - i32::from(current));
            nearest_total(series, target_day)
        }
        _ => None,
    };

    let (goal_day, goal_elapsed, goal_achievable) = match goals.target_amount {
        Some(target) => match series.iter().find(|s| s.total >= target) {
            Some(snapshot) => (
                Some(snapshot.date),
                Some(ElapsedSpan::between(today, snapshot.date)),
                Some(true),
            ),
            None => (None, None, Some(false)),
        },
        None => (None, None, None),
    };

    WealthSummary {
        peak_total,
        peak_day,
        peak_elapsed,
        age_at_peak,
        balance_at_target_age,
        goal_day,
        goal_elapsed,
        goal_achievable,
    }
}

/// Total on the series day nearest to `target`; ties keep the earliest.
fn nearest_total(series: &CalendarSeries, target: Date) -> Option<f64> {
    let mut closest: Option<(i32, f64)> = None;
    for snapshot in series.iter() {
        let distance = days_between(target, snapshot.date).abs();
        if closest.is_none_or(|(best, _)| distance < best) {
            closest = Some((distance, snapshot.total));
        }
    }
    closest.map(|(_, total)| total)
}

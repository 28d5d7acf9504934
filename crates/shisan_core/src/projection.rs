//! Asset projection engine.
//!
//! Builds the day-indexed wealth series for one scenario: every day up to
//! and including today is reconstructed from the transaction ledger, every
//! day after is projected forward from two running scalars (cash and
//! equity).
//!
//! The iteration window starts at the first day of the month
//! [`LOOKBACK_MONTHS`] before today's month and ends, inclusive, at the
//! last day of the month preceding today's month in the horizon year. The
//! horizon is `limit_age - current_age` years when a birth date is
//! configured (at least one), else [`DEFAULT_HORIZON_YEARS`].
//!
//! Projected days apply, in order: the governing budget rules' net cash at
//! each month start, then the contribution sweep into equity, then one
//! day's growth whenever the equity balance and daily rate are positive.
//! That ordering is part of the series' definition; swapping it shifts
//! every projected value by one day of compounding.

use jiff::civil::Date;
use tracing::debug;

use crate::config::ProjectionConfig;
use crate::date_math::{add_days, month_shift};
use crate::growth::daily_rate;
use crate::ledger::{BalanceSheet, snapshot_as_of};
use crate::model::{AssetKind, CalendarSeries, DaySnapshot};

/// Months of reconstructed history included before today.
pub const LOOKBACK_MONTHS: i32 = 6;

/// Projection horizon in years when no age is derivable.
pub const DEFAULT_HORIZON_YEARS: i32 = 2;

/// Build the full day-indexed wealth series for one scenario.
///
/// "Now" is the explicit `today` parameter; the engine never reads a
/// clock, so any moment can be pinned. The caller owns the result and
/// recomputes it after any change to the config.
#[must_use]
pub fn project(config: &ProjectionConfig, today: Date) -> CalendarSeries {
    let (start, end) = window(config, today);

    // Seed the projected path once, from today's reconstruction
    let seed = reconstruct(config, today);
    let mut cash = seed
        .first(AssetKind::Cash)
        .map_or(0.0, |account| account.balance);
    let mut equity = seed
        .first(AssetKind::Equity)
        .map_or(0.0, |account| account.balance);
    let annual = seed
        .first(AssetKind::Equity)
        .and_then(|account| account.annual_return)
        .unwrap_or(0.0);
    let rate = daily_rate(annual);

    let mut series = CalendarSeries::new();
    let mut day = start;
    while day <= end {
        let snapshot = if day <= today {
            let sheet = reconstruct(config, day);
            DaySnapshot {
                date: day,
                total: sheet.total(),
                cash: sheet.kind_total(AssetKind::Cash),
                equity: sheet.kind_total(AssetKind::Equity),
                is_today: day == today,
                is_projected: false,
            }
        } else {
            if day.day() == 1 {
                let mut net = 0.0;
                let mut contribution = 0.0;
                for rule in config.budget_rules.iter().filter(|r| r.applies_on(day)) {
                    net += rule.net_cash();
                    contribution += rule.contribution_on(day);
                }
                cash += net;
                if contribution > 0.0 {
                    cash -= contribution;
                    equity += contribution;
                }
                debug!(date = %day, cash, equity, net, contribution, "projected month start");
            }
            if equity > 0.0 && rate > 0.0 {
                equity *= 1.0 + rate;
            }
            DaySnapshot {
                date: day,
                total: cash + equity,
                cash,
                equity,
                is_today: false,
                is_projected: true,
            }
        };
        series.insert(snapshot);
        day = add_days(day, 1);
    }

    series
}

/// Iteration window for one run: six months of history, then out to the
/// age-derived horizon.
fn window(config: &ProjectionConfig, today: Date) -> (Date, Date) {
    let (start_year, start_month) = month_shift(today.year(), today.month(), -LOOKBACK_MONTHS);
    let start = jiff::civil::date(start_year, start_month, 1);

    let horizon = match config.current_age(today) {
        Some(age) => (i32::from(config.limit_age) - i32::from(age)).max(1),
        None => DEFAULT_HORIZON_YEARS,
    };
    let end = add_days(
        jiff::civil::date(today.year() + horizon as i16, today.month(), 1),
        -1,
    );

    (start, end)
}

/// Balance sheet for one reconstructed day, honoring the anchor bound.
///
/// Days before the anchor date predate the account capture, so there is
/// nothing to replay: they report the base balances unchanged.
fn reconstruct(config: &ProjectionConfig, day: Date) -> BalanceSheet {
    if config.anchor_date.is_some_and(|anchor| day < anchor) {
        BalanceSheet::of(&config.accounts)
    } else {
        snapshot_as_of(&config.accounts, &config.transactions, day)
    }
}

//! Tests for the day-indexed wealth series and window derivation
//!
//! These tests verify that:
//! - The window spans six months of history through the horizon month end
//! - The horizon follows the configured limit age, clamped to one year
//! - Today's reconstruction seeds the projected path with no discontinuity
//! - Month-start budget deltas apply before that day's growth
//! - Budget rules contribute only inside their active windows
//! - The anchor date bounds how far back replay reaches

use crate::config::{BudgetRuleBuilder, ProjectionConfig, ScenarioBuilder};
use crate::date_math::{add_days, days_between};
use crate::model::DateWindow;
use crate::project;
use jiff::civil::{Date, date};

/// Test the default window: six months back through the month preceding
/// today's month, two years out
#[test]
fn test_window_lookback_and_default_horizon() {
    let config = ScenarioBuilder::new()
        .cash_account("普通預金", 100_000.0)
        .build();
    let series = project(&config, date(2025, 4, 10));

    assert_eq!(series.first().unwrap().date, date(2024, 10, 1));
    assert_eq!(series.last().unwrap().date, date(2027, 3, 31));

    let expected_len = days_between(date(2024, 10, 1), date(2027, 3, 31)) + 1;
    assert_eq!(series.len(), expected_len as usize);
}

/// Test that a January today wraps the window across both year boundaries
#[test]
fn test_window_wraps_year_boundaries() {
    let config = ScenarioBuilder::new()
        .cash_account("普通預金", 100_000.0)
        .build();
    let series = project(&config, date(2025, 1, 15));

    assert_eq!(series.first().unwrap().date, date(2024, 7, 1));
    assert_eq!(series.last().unwrap().date, date(2026, 12, 31));
}

/// Test that a birth date extends the horizon out to the limit age
#[test]
fn test_age_derived_horizon() {
    let config = ScenarioBuilder::new()
        .birth_date(2000, 4, 2)
        .cash_account("普通預金", 100_000.0)
        .build();
    // Age 25 at this date, default limit age 100 → 75 years out
    let series = project(&config, date(2025, 4, 10));

    assert_eq!(series.last().unwrap().date, date(2100, 3, 31));
}

/// Test that a limit age at or below the current age still projects a year
#[test]
fn test_horizon_clamps_to_one_year() {
    let config = ScenarioBuilder::new()
        .birth_date(2000, 4, 2)
        .limit_age(20)
        .cash_account("普通預金", 100_000.0)
        .build();
    let series = project(&config, date(2025, 4, 10));

    assert_eq!(series.last().unwrap().date, date(2026, 3, 31));
}

/// Test the day-state flags around today
#[test]
fn test_today_and_projected_flags() {
    let today = date(2025, 4, 10);
    let config = ScenarioBuilder::new()
        .cash_account("普通預金", 100_000.0)
        .build();
    let series = project(&config, today);

    let today_snap = series.get(today).unwrap();
    assert!(today_snap.is_today);
    assert!(!today_snap.is_projected);

    let yesterday = series.get(add_days(today, -1)).unwrap();
    assert!(!yesterday.is_today);
    assert!(!yesterday.is_projected);

    let tomorrow = series.get(add_days(today, 1)).unwrap();
    assert!(!tomorrow.is_today);
    assert!(tomorrow.is_projected);

    assert_eq!(series.today().unwrap().date, today);
}

/// Test that the projected path continues today's reconstruction without a
/// jump, and that the first projected day applies exactly one day of growth
#[test]
fn test_boundary_continuity_at_today() {
    let today = date(2025, 4, 10);
    let annual = 0.05;
    let config = ScenarioBuilder::new()
        .cash_account("普通預金", 1_000_000.0)
        .equity_account("投資信託", 500_000.0, annual)
        .build();
    let series = project(&config, today);

    let today_snap = series.get(today).unwrap();
    assert_eq!(today_snap.total, 1_500_000.0);

    let tomorrow = series.get(add_days(today, 1)).unwrap();
    assert_eq!(tomorrow.cash, today_snap.cash);
    let expected_equity = today_snap.equity * (1.0 + annual / 365.0);
    assert!(
        (tomorrow.equity - expected_equity).abs() < 1e-6,
        "Expected {expected_equity:.6}, got {:.6}",
        tomorrow.equity
    );
}

/// Test that a zero-rate equity balance stays flat across the horizon
#[test]
fn test_zero_rate_equity_stays_flat() {
    let config = ScenarioBuilder::new()
        .cash_account("普通預金", 100_000.0)
        .equity_account("持株会", 500_000.0, 0.0)
        .budget(BudgetRuleBuilder::month(2025, 4).income(300_000.0).expense(250_000.0))
        .build();
    let series = project(&config, date(2025, 4, 10));

    for snapshot in series.iter().filter(|s| s.is_projected) {
        assert_eq!(
            snapshot.equity, 500_000.0,
            "equity moved on {} without a rate or contributions",
            snapshot.date
        );
    }
}

/// Test that month-start budget deltas land before that day's growth
#[test]
fn test_month_start_budget_applies_before_growth() {
    let annual = 0.05;
    let config = ScenarioBuilder::new()
        .cash_account("普通預金", 1_000_000.0)
        .equity_account("投資信託", 500_000.0, annual)
        .budget(
            BudgetRuleBuilder::month(2025, 4)
                .income(300_000.0)
                .expense(200_000.0)
                .contribution("積立投資", 50_000.0),
        )
        .build();
    let series = project(&config, date(2025, 4, 10));

    let apr30 = series.get(date(2025, 4, 30)).unwrap();
    let may1 = series.get(date(2025, 5, 1)).unwrap();

    assert_eq!(may1.cash, apr30.cash + 100_000.0 - 50_000.0);
    let expected_equity = (apr30.equity + 50_000.0) * (1.0 + annual / 365.0);
    assert!(
        (may1.equity - expected_equity).abs() < 1e-6,
        "Expected {expected_equity:.6}, got {:.6}",
        may1.equity
    );
}

/// Test a year of projection against a day-by-day reference walk
#[test]
fn test_golden_twelve_month_scenario() {
    let today = date(2025, 4, 10);
    let probe = date(2026, 4, 10);
    let annual = 0.05;
    let config = ScenarioBuilder::new()
        .cash_account("普通預金", 1_000_000.0)
        .equity_account("投資信託", 500_000.0, annual)
        .budget(
            BudgetRuleBuilder::month(2025, 4)
                .income(300_000.0)
                .expense(200_000.0)
                .contribution("積立投資", 50_000.0),
        )
        .build();
    let series = project(&config, today);

    // Twelve month starts fall in (today, probe]: net +100,000 and a
    // 50,000 sweep each, so cash lands on an exact integer
    let snapshot = series.get(probe).unwrap();
    assert_eq!(snapshot.cash, 1_600_000.0);

    // Walk the same days by hand for the equity side
    let rate = annual / 365.0;
    let mut equity = 500_000.0;
    let mut day = add_days(today, 1);
    while day <= probe {
        if day.day() == 1 {
            equity += 50_000.0;
        }
        equity *= 1.0 + rate;
        day = add_days(day, 1);
    }
    assert!(
        (snapshot.equity - equity).abs() < 1e-6,
        "Expected {equity:.4}, got {:.4}",
        snapshot.equity
    );
    assert!((snapshot.total - (snapshot.cash + snapshot.equity)).abs() < 1e-9);
}

/// Test that a windowed rule only contributes inside its window
#[test]
fn test_interval_rule_applies_only_inside_window() {
    let config = ScenarioBuilder::new()
        .cash_account("普通預金", 1_000_000.0)
        .budget(BudgetRuleBuilder::month(2025, 4).income(200_000.0).expense(100_000.0))
        .budget(
            BudgetRuleBuilder::month(2025, 6)
                .income(50_000.0)
                .starting(2025, 6, 1)
                .ending(2025, 8, 1),
        )
        .build();
    let series = project(&config, date(2025, 4, 10));

    let delta = |day: Date| {
        series.get(day).unwrap().cash - series.get(add_days(day, -1)).unwrap().cash
    };

    assert_eq!(delta(date(2025, 5, 1)), 100_000.0);
    assert_eq!(delta(date(2025, 6, 1)), 150_000.0);
    assert_eq!(delta(date(2025, 7, 1)), 150_000.0);
    // The end bound is exclusive
    assert_eq!(delta(date(2025, 8, 1)), 100_000.0);
}

/// Test that a windowed contribution sub-rule switches off with its window
#[test]
fn test_windowed_contribution_sub_rule() {
    let config = ScenarioBuilder::new()
        .cash_account("普通預金", 1_000_000.0)
        .equity_account("投資信託", 0.0, 0.0)
        .budget(
            BudgetRuleBuilder::month(2025, 4)
                .income(100_000.0)
                .contribution_within(
                    "ボーナス積立",
                    30_000.0,
                    DateWindow::between(date(2025, 5, 1), date(2025, 7, 1)),
                ),
        )
        .build();
    let series = project(&config, date(2025, 4, 10));

    assert_eq!(series.get(date(2025, 5, 1)).unwrap().equity, 30_000.0);
    assert_eq!(series.get(date(2025, 6, 1)).unwrap().equity, 60_000.0);
    // Window closed: no further sweeps
    assert_eq!(series.get(date(2025, 7, 1)).unwrap().equity, 60_000.0);
}

/// Test that projection seeds from the first account of each category while
/// reconstruction totals count every account
#[test]
fn test_first_of_category_seeds_projection() {
    let today = date(2025, 4, 10);
    let config = ScenarioBuilder::new()
        .cash_account("普通預金", 1_000_000.0)
        .cash_account("財布", 5_000.0)
        .equity_account("投資信託", 200_000.0, 0.0)
        .build();
    let series = project(&config, today);

    assert_eq!(series.get(today).unwrap().total, 1_205_000.0);
    assert_eq!(series.get(add_days(today, 1)).unwrap().total, 1_200_000.0);
}

/// Test that days before the anchor date report base balances untouched
#[test]
fn test_anchor_bounds_reconstruction() {
    let config = ScenarioBuilder::new()
        .anchor(2025, 2, 1)
        .cash_account("普通預金", 100_000.0)
        .income_on(2025, 1, 15, 10_000.0, "繰越")
        .build();
    let series = project(&config, date(2025, 4, 10));

    assert_eq!(series.get(date(2025, 1, 20)).unwrap().total, 100_000.0);
    assert_eq!(series.get(date(2025, 2, 1)).unwrap().total, 110_000.0);
}

/// Test that an empty scenario projects an all-zero series
#[test]
fn test_empty_scenario_is_all_zero() {
    let series = project(&ProjectionConfig::new(), date(2025, 4, 10));
    assert!(!series.is_empty());
    assert!(series.iter().all(|s| s.total == 0.0));
}

/// Test month/day awareness of the derived age
#[test]
fn test_current_age_is_month_day_aware() {
    let config = ScenarioBuilder::new().birth_date(2000, 6, 15).build();
    assert_eq!(config.current_age(date(2025, 6, 14)), Some(24));
    assert_eq!(config.current_age(date(2025, 6, 15)), Some(25));
    assert_eq!(ProjectionConfig::new().current_age(date(2025, 6, 15)), None);
}

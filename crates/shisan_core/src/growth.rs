//! Deterministic growth math.
//!
//! One fixed nominal annual rate per equity account, compounded at whatever
//! granularity the caller works in: monthly for retrospective valuation,
//! daily for the forward projection loop. No stochastic paths, no fees, no
//! inflation adjustment.

use jiff::civil::Date;

use crate::date_math::months_between;
use crate::model::{AssetAccount, AssetKind};

/// Compound `principal` over `periods` at `annual_rate` split into
/// `periods_per_year` slices.
///
/// `compound(1000.0, 0.12, 12, 12)` ≈ 1126.83. A zero rate returns the
/// principal for any period count; negative periods discount.
#[inline]
#[must_use]
pub fn compound(principal: f64, annual_rate: f64, periods: i32, periods_per_year: u32) -> f64 {
    principal * (1.0 + annual_rate / f64::from(periods_per_year)).powi(periods)
}

/// Per-day growth multiplier base for the projection loop.
///
/// Plain `annual / 365`, not the geometric equivalent. The projected series
/// is defined in terms of this simple division.
#[inline]
#[must_use]
pub fn daily_rate(annual_rate: f64) -> f64 {
    annual_rate / 365.0
}

/// Value of one account at the month of `target`, valued from `start`.
///
/// Cash accumulates `monthly_contribution` linearly per month. Equity
/// compounds the balance monthly and each month's contribution for its
/// remaining months. A missing or zero rate passes the balance through
/// untouched.
#[must_use]
pub fn value_at_month(
    account: &AssetAccount,
    start: Date,
    target: Date,
    monthly_contribution: f64,
) -> f64 {
    let months = months_between(start, target);
    match account.kind {
        AssetKind::Cash => account.balance + monthly_contribution * f64::from(months),
        AssetKind::Equity => match account.annual_return {
            Some(rate) if rate != 0.0 => {
                let mut value = compound(account.balance, rate, months, 12);
                for i in 0..months {
                    value += compound(monthly_contribution, rate, months - i - 1, 12);
                }
                value
            }
            _ => account.balance,
        },
    }
}

//! Date arithmetic for the projection window.
//!
//! The day loop runs over tens of thousands of civil days, so day counting
//! uses Rata Die numbering for O(1) differences instead of `jiff::Span`
//! normalisation. Month and year helpers reproduce the calendar
//! normalisation the application's window math depends on: month offsets
//! wrap across year boundaries, and a Feb 29 anniversary rolls forward to
//! Mar 1 in a non-leap target year.

use jiff::civil::Date;

/// Fast leap year check.
#[inline]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Days in a month without constructing a `jiff::civil::Date`.
#[inline]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    const DAYS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Convert a civil date to a Rata Die day number (days since 0001-01-01).
///
/// Proleptic Gregorian algorithm from Baum (2017); O(1) with no branches
/// beyond the month adjustment.
#[inline]
fn rata_die(d: Date) -> i32 {
    let y = d.year() as i32;
    let m = d.month() as i32;
    let day = d.day() as i32;

    // Computational calendar: March is month 1, so Feb closes the year
    let a = (14 - m) / 12;
    let y2 = y - a;
    let m2 = m + 12 * a - 3;

    day + (153 * m2 + 2) / 5 + 365 * y2 + y2 / 4 - y2 / 100 + y2 / 400 - 306
}

/// Inverse of [`rata_die`], same proleptic Gregorian algorithm.
#[inline]
fn rd_to_date(rd: i32) -> Date {
    // Day 0 of the computational calendar is March 1, year 0
    let z = rd + 306;
    let h = 100 * z - 25;
    let a = h / 3_652_425;
    let b = a - a / 4;
    let y = (100 * b + h) / 36_525;
    let c = b + z - 365 * y - y / 4;
    let m = (5 * c + 456) / 153;
    let day = c - (153 * m - 457) / 5;

    let (year, month) = if m > 12 { (y + 1, m - 12) } else { (y, m) };

    jiff::civil::date(year as i16, month as i8, day as i8)
}

/// Signed day count `d2 - d1`; positive when `d2 > d1`.
#[inline]
pub fn days_between(d1: Date, d2: Date) -> i32 {
    rata_die(d2) - rata_die(d1)
}

/// Add `n` days to a date without going through `jiff::Span`.
#[inline]
pub fn add_days(d: Date, n: i32) -> Date {
    rd_to_date(rata_die(d) + n)
}

/// Normalise `(year, month + offset)` across year boundaries.
///
/// `month_shift(2026, 1, -6)` is `(2025, 7)`.
#[inline]
pub fn month_shift(year: i16, month: i8, offset: i32) -> (i16, i8) {
    let total = i32::from(year) * 12 + i32::from(month) - 1 + offset;
    ((total.div_euclid(12)) as i16, (total.rem_euclid(12) + 1) as i8)
}

/// First day of the month containing `d`.
#[inline]
pub fn first_of_month(d: Date) -> Date {
    jiff::civil::date(d.year(), d.month(), 1)
}

/// Whole-month difference `(b.year - a.year) * 12 + (b.month - a.month)`.
///
/// Ignores day-of-month on purpose: this is the valuation granularity the
/// monthly compounding path works in, not an exact calendar distance.
#[inline]
pub fn months_between(a: Date, b: Date) -> i32 {
    i32::from(b.year() - a.year()) * 12 + i32::from(b.month() - a.month())
}

/// Add calendar years, keeping month and day.
///
/// A Feb 29 start in a non-leap target year rolls forward to Mar 1.
#[inline]
pub fn add_years(d: Date, years: i32) -> Date {
    let year = (i32::from(d.year()) + years) as i16;
    let month = d.month();
    let day = d.day();
    let max_day = days_in_month(year, month);
    if day > max_day {
        let (ny, nm) = month_shift(year, month, 1);
        jiff::civil::date(ny, nm, day - max_day)
    } else {
        jiff::civil::date(year, month, day)
    }
}

/// Canonical `YYYY-MM-DD` key for one calendar day.
#[must_use]
pub fn day_key(d: Date) -> String {
    d.to_string()
}

/// Parse a canonical `YYYY-MM-DD` key.
///
/// The compute path works in typed dates only; this is the one place a
/// string key is allowed to cross the boundary.
pub fn parse_day_key(s: &str) -> Result<Date, jiff::Error> {
    s.parse()
}

/// True iff `day` is strictly after `today`.
#[inline]
pub fn is_future(day: Date, today: Date) -> bool {
    day > today
}

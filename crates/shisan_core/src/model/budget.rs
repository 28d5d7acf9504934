//! Recurring budget rules
//!
//! A budget rule describes one month-shaped plan: income, expense, and a
//! list of recurring equity contributions. Rules and their contribution
//! sub-rules carry half-open effective windows; at a projected month start
//! the engine sums the deltas of every rule whose window contains that day.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::RuleId;

/// Calendar month key (`2025-04` in the application's storage).
///
/// Identifies which month's plan a rule was written for. The projection
/// engine itself reads only the rule's [`DateWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i16,
    pub month: i8,
}

impl MonthKey {
    #[must_use]
    pub fn new(year: i16, month: i8) -> Self {
        Self { year, month }
    }

    /// Month key of the month containing `date`.
    #[must_use]
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Half-open effective range `[start, end)`; `None` is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    #[serde(default)]
    pub start: Option<Date>,
    #[serde(default)]
    pub end: Option<Date>,
}

impl DateWindow {
    /// Window with no bounds on either side.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Window starting at `start` with no end.
    #[must_use]
    pub fn from(start: Date) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Window covering `[start, end)`.
    #[must_use]
    pub fn between(start: Date, end: Date) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Whether `day` falls inside the window.
    #[must_use]
    #[inline]
    pub fn contains(&self, day: Date) -> bool {
        self.start.is_none_or(|s| day >= s) && self.end.is_none_or(|e| day < e)
    }
}

/// One recurring equity contribution inside a budget rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionRule {
    pub name: String,
    /// Monthly amount moved from cash into equity. Nonnegative.
    pub amount: f64,
    #[serde(default)]
    pub window: DateWindow,
}

/// Recurring monthly plan: income, expense, equity contributions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRule {
    pub rule_id: RuleId,
    /// Which month's plan this rule was entered for.
    pub month: MonthKey,
    pub income: f64,
    pub expense: f64,
    #[serde(default)]
    pub contributions: Vec<ContributionRule>,
    #[serde(default)]
    pub window: DateWindow,
}

impl BudgetRule {
    /// Net monthly cash delta before contributions.
    #[must_use]
    #[inline]
    pub fn net_cash(&self) -> f64 {
        self.income - self.expense
    }

    /// Whether the rule governs the given day.
    #[must_use]
    #[inline]
    pub fn applies_on(&self, day: Date) -> bool {
        self.window.contains(day)
    }

    /// Sum of contribution amounts whose own windows contain `day`.
    #[must_use]
    pub fn contribution_on(&self, day: Date) -> f64 {
        self.contributions
            .iter()
            .filter(|c| c.window.contains(day))
            .map(|c| c.amount)
            .sum()
    }
}

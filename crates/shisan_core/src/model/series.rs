//! Day-indexed output series
//!
//! One [`DaySnapshot`] per calendar day in the projection window, held in a
//! [`CalendarSeries`] ordered by day. Chronological iteration order is part
//! of the contract: the analytics tie-breaks ("first day to attain the
//! maximum") are defined in terms of it.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Computed balances for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub date: Date,
    /// Sum of every account balance on this day.
    pub total: f64,
    /// Sum over cash-category accounts.
    pub cash: f64,
    /// Sum over equity-category accounts.
    pub equity: f64,
    pub is_today: bool,
    /// True for days strictly after "today" (running-scalar projection);
    /// false for reconstructed days.
    pub is_projected: bool,
}

/// Ordered day → snapshot map produced by one projection run
///
/// Serializes as a plain `{ "YYYY-MM-DD": { ... } }` map, the shape the
/// surrounding application stores and renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarSeries {
    days: BTreeMap<Date, DaySnapshot>,
}

impl CalendarSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a snapshot under its own date, replacing any previous entry.
    pub fn insert(&mut self, snapshot: DaySnapshot) {
        self.days.insert(snapshot.date, snapshot);
    }

    #[must_use]
    pub fn get(&self, date: Date) -> Option<&DaySnapshot> {
        self.days.get(&date)
    }

    /// Snapshots in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &DaySnapshot> {
        self.days.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&DaySnapshot> {
        self.days.values().next()
    }

    #[must_use]
    pub fn last(&self) -> Option<&DaySnapshot> {
        self.days.values().next_back()
    }

    /// The snapshot flagged as today, if the window covers it.
    #[must_use]
    pub fn today(&self) -> Option<&DaySnapshot> {
        self.days.values().find(|s| s.is_today)
    }
}

impl<'a> IntoIterator for &'a CalendarSeries {
    type Item = &'a DaySnapshot;
    type IntoIter = std::collections::btree_map::Values<'a, Date, DaySnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.values()
    }
}

//! Weekly aggregation over the workout log.

use chrono::{Duration, NaiveDate};

use super::types::{GoalProgress, WeeklySummary};
use crate::fitness_log::{LogStore, WorkoutRecord};

/// Length of the rolling window, in days.
pub const WEEK_DAYS: i64 = 7;

/// Read-only view computing weekly totals over a log store.
pub struct WeeklyAggregator<'a> {
    store: &'a LogStore,
}

impl<'a> WeeklyAggregator<'a> {
    /// Create an aggregator over a store.
    pub fn new(store: &'a LogStore) -> Self {
        Self { store }
    }

    /// Records dated strictly after `as_of - 7 days`.
    ///
    /// A record dated exactly 7 days before `as_of` is outside the window;
    /// one dated `as_of` is inside.
    pub fn weekly_records(&self, as_of: NaiveDate) -> impl Iterator<Item = &'a WorkoutRecord> {
        let cutoff = as_of - Duration::days(WEEK_DAYS);
        let store: &'a LogStore = self.store;
        store.records().iter().filter(move |r| r.date > cutoff)
    }

    /// Sum of durations in the weekly window.
    ///
    /// Summed as `u64` so that any number of `u32` durations fits.
    pub fn weekly_duration_total(&self, as_of: NaiveDate) -> u64 {
        self.weekly_records(as_of)
            .map(|r| u64::from(r.duration()))
            .sum()
    }

    /// Activity count and minutes in the weekly window.
    pub fn weekly_summary(&self, as_of: NaiveDate) -> WeeklySummary {
        self.weekly_records(as_of)
            .fold(WeeklySummary::default(), |mut summary, record| {
                summary.activities += 1;
                summary.total_minutes += u64::from(record.duration());
                summary
            })
    }

    /// Weekly minutes alongside the stored goal.
    pub fn track_progress(&self, as_of: NaiveDate) -> GoalProgress {
        GoalProgress {
            achieved: self.weekly_duration_total(as_of),
            goal: self.store.goal().minutes(),
        }
    }
}

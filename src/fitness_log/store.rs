//! In-memory workout log.
//!
//! Records are kept in insertion order. Ids come from a counter that only
//! moves forward, so an id freed by a deletion is never handed out again.

use chrono::{Local, NaiveDate};

use super::types::{WorkoutDraft, WorkoutId, WorkoutRecord, WorkoutUpdate};
use crate::goals::WeeklyGoal;

/// Ordered store of workout records plus the weekly goal.
#[derive(Debug, Clone)]
pub struct LogStore {
    records: Vec<WorkoutRecord>,
    next_id: WorkoutId,
    weekly_goal: WeeklyGoal,
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            weekly_goal: WeeklyGoal::default(),
        }
    }

    /// Add a workout dated today.
    pub fn add_record(&mut self, draft: WorkoutDraft) -> &WorkoutRecord {
        self.add_record_on(draft, today())
    }

    /// Add a workout with an explicit date.
    pub fn add_record_on(&mut self, draft: WorkoutDraft, date: NaiveDate) -> &WorkoutRecord {
        let id = self.next_id;
        self.next_id += 1;

        let record = WorkoutRecord::from_draft(id, draft, date);
        tracing::debug!("Added {} workout {} ({})", record.kind, id, record.details.activity_name);

        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Summaries of all records in insertion order.
    pub fn list_records(&self) -> Listing<'_> {
        if self.records.is_empty() {
            Listing::Empty
        } else {
            Listing::Entries(Summaries {
                inner: self.records.iter(),
            })
        }
    }

    /// First record with the given id.
    pub fn find_by_id(&self, id: WorkoutId) -> Option<&WorkoutRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Replace a record's fields, dating it today.
    ///
    /// Returns `None` without touching the store if no record has `id`.
    pub fn update_by_id(&mut self, id: WorkoutId, update: WorkoutUpdate) -> Option<&WorkoutRecord> {
        self.update_by_id_on(id, update, today())
    }

    /// Replace a record's fields with an explicit date.
    ///
    /// The id and the variant are kept; every other field takes the new value.
    pub fn update_by_id_on(
        &mut self,
        id: WorkoutId,
        update: WorkoutUpdate,
        date: NaiveDate,
    ) -> Option<&WorkoutRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        let record = &mut self.records[index];

        record.kind = record.kind.with_detail(update.detail);
        record.details = update.details;
        record.date = date;

        tracing::debug!("Updated workout {}", id);
        Some(record)
    }

    /// Remove the first record with the given id.
    ///
    /// Remaining records keep their ids.
    pub fn delete_by_id(&mut self, id: WorkoutId) -> Option<WorkoutRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        let removed = self.records.remove(index);
        tracing::debug!("Deleted workout {}", id);
        Some(removed)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[WorkoutRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The weekly goal.
    pub fn goal(&self) -> &WeeklyGoal {
        &self.weekly_goal
    }

    pub fn goal_mut(&mut self) -> &mut WeeklyGoal {
        &mut self.weekly_goal
    }
}

/// Result of listing the store.
#[derive(Debug, Clone)]
pub enum Listing<'a> {
    /// The store has no records
    Empty,
    /// One summary per record, in insertion order
    Entries(Summaries<'a>),
}

impl Listing<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }
}

/// Lazy iterator over record summaries.
///
/// Clone it to walk the sequence again from the start.
#[derive(Debug, Clone)]
pub struct Summaries<'a> {
    inner: std::slice::Iter<'a, WorkoutRecord>,
}

impl Iterator for Summaries<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(WorkoutRecord::summary)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Summaries<'_> {}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

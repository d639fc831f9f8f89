//! Unit tests for weekly aggregation.

use chrono::{Duration, NaiveDate};
use fitlog::fitness_log::{LogStore, WorkoutDetails, WorkoutDraft};
use fitlog::goals::WeeklyAggregator;

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 3).unwrap()
}

fn add_days_ago(store: &mut LogStore, days_ago: i64, minutes: u32) {
    let draft = WorkoutDraft::gym(WorkoutDetails::new("Circuit", "Cardio", minutes, 100), "Mat");
    store.add_record_on(draft, as_of() - Duration::days(days_ago));
}

#[test]
fn test_outdoor_plus_gym_same_day() {
    let mut store = LogStore::new();
    store.add_record(WorkoutDraft::outdoor(
        WorkoutDetails::new("Run", "Running", 30, 200),
        "Sunny",
    ));
    store.add_record(WorkoutDraft::gym(
        WorkoutDetails::new("Weights", "Strength", 45, 300),
        "Machines",
    ));

    let today = store.records()[0].date;
    assert_eq!(WeeklyAggregator::new(&store).weekly_duration_total(today), 75);
}

#[test]
fn test_window_excludes_seven_days_back() {
    let mut store = LogStore::new();
    add_days_ago(&mut store, 0, 1);
    add_days_ago(&mut store, 6, 2);
    add_days_ago(&mut store, 7, 4);
    add_days_ago(&mut store, 8, 8);
    add_days_ago(&mut store, 30, 16);

    let aggregator = WeeklyAggregator::new(&store);
    assert_eq!(aggregator.weekly_duration_total(as_of()), 3);

    let ids: Vec<u32> = aggregator.weekly_records(as_of()).map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_window_moves_with_as_of() {
    let mut store = LogStore::new();
    add_days_ago(&mut store, 7, 40);

    let aggregator = WeeklyAggregator::new(&store);
    assert_eq!(aggregator.weekly_duration_total(as_of()), 0);
    assert_eq!(
        aggregator.weekly_duration_total(as_of() - Duration::days(1)),
        40
    );
}

#[test]
fn test_summary_counts_weekly_records() {
    let mut store = LogStore::new();
    add_days_ago(&mut store, 1, 20);
    add_days_ago(&mut store, 2, 25);
    add_days_ago(&mut store, 10, 60);

    let summary = WeeklyAggregator::new(&store).weekly_summary(as_of());
    assert_eq!(summary.activities, 2);
    assert_eq!(summary.total_minutes, 45);
}

#[test]
fn test_totals_past_u32_range() {
    let mut store = LogStore::new();
    add_days_ago(&mut store, 0, u32::MAX);
    add_days_ago(&mut store, 1, u32::MAX);
    add_days_ago(&mut store, 2, 2);

    let aggregator = WeeklyAggregator::new(&store);
    let expected = 2 * u64::from(u32::MAX) + 2;
    assert_eq!(aggregator.weekly_duration_total(as_of()), expected);

    let summary = aggregator.weekly_summary(as_of());
    assert_eq!(summary.activities, 3);
    assert_eq!(summary.total_minutes, expected);
}

//! Unit tests for workout log CRUD.

use chrono::NaiveDate;
use fitlog::fitness_log::{
    Listing, LogStore, WorkoutDetails, WorkoutDraft, WorkoutKind, WorkoutUpdate,
};

fn outdoor(name: &str, minutes: u32, calories: u32) -> WorkoutDraft {
    WorkoutDraft::outdoor(WorkoutDetails::new(name, "Cardio", minutes, calories), "Overcast")
}

fn gym(name: &str, minutes: u32, calories: u32) -> WorkoutDraft {
    WorkoutDraft::gym(WorkoutDetails::new(name, "Strength", minutes, calories), "Kettlebell")
}

#[test]
fn test_n_adds_yield_ids_one_to_n() {
    let mut store = LogStore::new();
    for i in 0..10 {
        if i % 2 == 0 {
            store.add_record(outdoor("Jog", 20, 150));
        } else {
            store.add_record(gym("Press", 30, 180));
        }
    }

    let ids: Vec<u32> = store.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_find_never_assigned_id() {
    let mut store = LogStore::new();
    store.add_record(outdoor("Jog", 20, 150));
    store.add_record(gym("Press", 30, 180));

    assert!(store.find_by_id(3).is_none());
    assert!(store.find_by_id(u32::MAX).is_none());
}

#[test]
fn test_delete_removes_exactly_one() {
    let mut store = LogStore::new();
    store.add_record(outdoor("A", 10, 50));
    store.add_record(outdoor("B", 10, 50));
    store.add_record(gym("C", 10, 50));
    store.add_record(gym("D", 10, 50));

    assert!(store.delete_by_id(3).is_some());
    assert_eq!(store.len(), 3);

    let names: Vec<_> = store
        .records()
        .iter()
        .map(|r| (r.id, r.details.activity_name.as_str()))
        .collect();
    assert_eq!(names, vec![(1, "A"), (2, "B"), (4, "D")]);

    // Second delete of the same id finds nothing
    assert!(store.delete_by_id(3).is_none());
    assert_eq!(store.len(), 3);
}

#[test]
fn test_delete_unknown_id_leaves_store_identical() {
    let mut store = LogStore::new();
    store.add_record(outdoor("A", 10, 50));
    store.add_record(gym("B", 15, 70));
    let before = store.records().to_vec();

    assert!(store.delete_by_id(99).is_none());
    assert_eq!(store.records(), before.as_slice());
}

#[test]
fn test_update_takes_new_fields_and_date() {
    let mut store = LogStore::new();
    let created = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
    let edited = NaiveDate::from_ymd_opt(2024, 2, 12).unwrap();
    store.add_record_on(outdoor("Hike", 90, 500), created);

    let update = WorkoutUpdate {
        details: WorkoutDetails::new("Long hike", "Walking", 120, 650),
        detail: "Snow".to_string(),
    };
    store.update_by_id_on(1, update, edited).unwrap();

    let record = store.find_by_id(1).unwrap();
    assert_eq!(record.id, 1);
    assert_eq!(record.details.activity_name, "Long hike");
    assert_eq!(record.details.category, "Walking");
    assert_eq!(record.details.duration, 120);
    assert_eq!(record.details.calories, 650);
    assert_eq!(record.date, edited);
    assert_eq!(
        record.kind,
        WorkoutKind::Outdoor {
            weather_condition: "Snow".to_string()
        }
    );
}

#[test]
fn test_fresh_id_after_deleting_last_record() {
    let mut store = LogStore::new();
    store.add_record(outdoor("A", 10, 50));
    store.add_record(outdoor("B", 10, 50));
    store.delete_by_id(2);

    let id = store.add_record(gym("C", 10, 50)).id;
    assert_eq!(id, 3);
}

#[test]
fn test_summaries_by_variant() {
    let mut store = LogStore::new();
    store.add_record(outdoor("Ride", 60, 400));
    store.add_record(gym("Row", 20, 160));

    let Listing::Entries(summaries) = store.list_records() else {
        panic!("store should not be empty");
    };
    let lines: Vec<String> = summaries.collect();

    assert!(lines[0].contains("[1] Ride - Cardio - 60 minutes - 400 kcal | Weather: Overcast"));
    assert!(lines[1].contains("[2] Row - Strength - 20 minutes - 160 kcal | Equipment: Kettlebell"));
}

#[test]
fn test_empty_store_signals_empty() {
    let mut store = LogStore::new();
    assert!(matches!(store.list_records(), Listing::Empty));

    store.add_record(outdoor("A", 10, 50));
    store.delete_by_id(1);
    assert!(matches!(store.list_records(), Listing::Empty));
}

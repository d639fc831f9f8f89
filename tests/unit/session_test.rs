//! Unit tests for the console session.

use chrono::NaiveDate;
use fitlog::session::{Session, SessionEnd};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 4).unwrap()
}

#[tokio::test]
async fn test_full_crud_flow() {
    let script = concat!(
        "1\nCycling\nCardio\n60\n450\nDry\n",     // add outdoor -> id 1
        "2\nPull day\nStrength\n40\n280\nCable\n", // add gym -> id 2
        "5\n1\n",                                  // delete 1
        "1\nWalk\nWalking\n20\n90\nWindy\n",       // add outdoor -> id 3
        "3\n",
        "8\n",
    );

    let mut session = Session::new(script.as_bytes(), Vec::new()).with_date(day());
    let end = session.run().await.unwrap();
    assert_eq!(end, SessionEnd::Exit);

    let ids: Vec<u32> = session.store().records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);

    let out = String::from_utf8(session.output().clone()).unwrap();
    assert!(out.contains("Deleted successfully."));
    assert!(out.contains("2024-11-04 | [2] Pull day - Strength - 40 minutes - 280 kcal | Equipment: Cable"));
    assert!(out.contains("2024-11-04 | [3] Walk - Walking - 20 minutes - 90 kcal | Weather: Windy"));
    assert!(out.contains("Category (Cardio, Strength, Yoga, Flexibility, Running, Walking): "));
}

#[tokio::test]
async fn test_update_with_bad_number_leaves_record() {
    let script = "1\nRun\nRunning\n30\n200\nSunny\n4\n1\nSprint\nRunning\nfast\n8\n";

    let mut session = Session::new(script.as_bytes(), Vec::new()).with_date(day());
    session.run().await.unwrap();

    let record = session.store().find_by_id(1).unwrap();
    assert_eq!(record.details.activity_name, "Run");

    let out = String::from_utf8_lossy(session.output());
    assert!(out.contains("Update failed: Invalid number for duration: 'fast'"));
}

#[tokio::test]
async fn test_end_of_input_mid_operation() {
    let script = "1\nRun\nRunning\n";

    let mut session = Session::new(script.as_bytes(), Vec::new()).with_date(day());
    let end = session.run().await.unwrap();

    assert_eq!(end, SessionEnd::InputClosed);
    assert!(session.store().is_empty());
    assert!(String::from_utf8_lossy(session.output()).contains("Error: Input required"));
}

#[tokio::test]
async fn test_non_numeric_goal_counts_as_unset() {
    let script = "7\nlots\n7\n90\n8\n";

    let mut session = Session::new(script.as_bytes(), Vec::new()).with_date(day());
    session.run().await.unwrap();

    assert_eq!(session.store().goal().minutes(), 90);
    let out = String::from_utf8_lossy(session.output());
    assert!(out.contains("You've achieved 0/0 minutes this week."));
    assert!(out.contains("Goal set to 90 minutes."));
}

#[tokio::test]
async fn test_goal_progress_line() {
    let script = "1\nRow\nCardio\n45\n300\nCalm\n7\n180\n8\n";

    let mut session = Session::new(script.as_bytes(), Vec::new()).with_date(day());
    session.run().await.unwrap();

    let out = String::from_utf8_lossy(session.output());
    assert!(out.contains("You've achieved 45/180 minutes this week."));
    assert!(out.contains("Progress: 25% (135 minutes to go)."));
}

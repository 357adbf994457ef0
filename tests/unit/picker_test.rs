//! Unit tests for the daily workout picker.

use chrono::NaiveDate;
use fitlog::storage::kv::KvStore;
use fitlog::storage::repository::AppStore;
use fitlog::workouts::{catalog, daily_workout};

fn open_store() -> AppStore {
    AppStore::new(KvStore::open_in_memory().expect("Should open store"))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("Valid date")
}

#[test]
fn test_pick_comes_from_catalog() {
    let mut store = open_store();

    let workout = daily_workout(&mut store, date(2024, 6, 1)).expect("Should pick");

    assert!(catalog().contains(&workout));
}

#[test]
fn test_pick_is_memoized_within_a_date() {
    let mut store = open_store();
    let d = date(2024, 6, 1);

    let first = daily_workout(&mut store, d).expect("Should pick");
    for _ in 0..20 {
        let again = daily_workout(&mut store, d).expect("Should read cached pick");
        assert_eq!(again, first);
    }
}

#[test]
fn test_dates_do_not_interfere() {
    let mut store = open_store();
    let d1 = date(2024, 6, 1);
    let d2 = date(2024, 6, 2);

    let w1 = daily_workout(&mut store, d1).expect("Should pick for d1");
    let w2 = daily_workout(&mut store, d2).expect("Should pick for d2");

    // Picking for d2 must not change what d1 returns
    assert_eq!(daily_workout(&mut store, d1).expect("Should re-read d1"), w1);
    assert_eq!(daily_workout(&mut store, d2).expect("Should re-read d2"), w2);
}

#[test]
fn test_pick_survives_restart() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = dir.path().join("fitlog.db");
    let d = date(2024, 6, 1);

    let first = {
        let mut store = AppStore::new(KvStore::open(&path).expect("Should open store"));
        daily_workout(&mut store, d).expect("Should pick")
    };

    let mut store = AppStore::new(KvStore::open(&path).expect("Should reopen store"));
    let again = daily_workout(&mut store, d).expect("Should read cached pick");

    assert_eq!(again, first);
}

#[test]
fn test_corrupt_record_is_replaced() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = dir.path().join("fitlog.db");
    let d = date(2024, 6, 1);

    {
        let kv = KvStore::open(&path).expect("Should open store");
        kv.set("@workout_2024-06-01", "not json").expect("Should write");
    }

    let mut store = AppStore::new(KvStore::open(&path).expect("Should reopen store"));
    let workout = daily_workout(&mut store, d).expect("Should re-pick over corrupt record");

    assert!(catalog().contains(&workout));
    // The replacement is now the memoized pick
    assert_eq!(daily_workout(&mut store, d).expect("Should re-read"), workout);
}

#[test]
fn test_stored_record_uses_original_json_format() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = dir.path().join("fitlog.db");
    let d = date(2024, 6, 1);

    {
        let mut store = AppStore::new(KvStore::open(&path).expect("Should open store"));
        daily_workout(&mut store, d).expect("Should pick");
    }

    let kv = KvStore::open(&path).expect("Should reopen store");
    let raw = kv
        .get("@workout_2024-06-01")
        .expect("Should read")
        .expect("Record should exist");

    let value: serde_json::Value = serde_json::from_str(&raw).expect("Should be JSON");
    assert!(value["id"].is_u64());
    assert!(value["name"].is_string());
    assert!(value["description"].is_string());
}

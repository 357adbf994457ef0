//! Unit tests for the key-value store.

use fitlog::storage::kv::KvStore;

#[test]
fn test_get_absent_key_returns_none() {
    let store = KvStore::open_in_memory().expect("Should open store");
    assert_eq!(store.get("@missing").expect("Should read"), None);
}

#[test]
fn test_set_then_get_roundtrip() {
    let store = KvStore::open_in_memory().expect("Should open store");

    store.set("@userName", "Ann").expect("Should write");
    assert_eq!(
        store.get("@userName").expect("Should read"),
        Some("Ann".to_string())
    );
}

#[test]
fn test_set_overwrites_existing_value() {
    let store = KvStore::open_in_memory().expect("Should open store");

    store.set("@userName", "Ann").expect("Should write");
    store.set("@userName", "Ben").expect("Should write");

    assert_eq!(
        store.get("@userName").expect("Should read"),
        Some("Ben".to_string())
    );
}

#[test]
fn test_remove_deletes_key() {
    let store = KvStore::open_in_memory().expect("Should open store");

    store.set("@hasOnboarded", "true").expect("Should write");
    store.remove("@hasOnboarded").expect("Should remove");

    assert_eq!(store.get("@hasOnboarded").expect("Should read"), None);
}

#[test]
fn test_remove_absent_key_is_not_an_error() {
    let store = KvStore::open_in_memory().expect("Should open store");
    store.remove("@neverSet").expect("Should be a no-op");
}

#[test]
fn test_set_many_writes_all_entries() {
    let mut store = KvStore::open_in_memory().expect("Should open store");

    store
        .set_many(&[
            ("@hasOnboarded", "true"),
            ("@userName", "Ann"),
            ("@fitnessGoals", "Lose weight"),
            ("@trainingFrequency", "3"),
        ])
        .expect("Should write batch");

    assert_eq!(
        store.get("@userName").expect("Should read"),
        Some("Ann".to_string())
    );
    assert_eq!(
        store.get("@trainingFrequency").expect("Should read"),
        Some("3".to_string())
    );
}

#[test]
fn test_remove_many_deletes_all_keys() {
    let mut store = KvStore::open_in_memory().expect("Should open store");

    store
        .set_many(&[("@a", "1"), ("@b", "2"), ("@c", "3")])
        .expect("Should write batch");
    store.remove_many(&["@a", "@b", "@c"]).expect("Should remove");

    assert_eq!(store.get("@a").expect("Should read"), None);
    assert_eq!(store.get("@b").expect("Should read"), None);
    assert_eq!(store.get("@c").expect("Should read"), None);
}

#[test]
fn test_values_survive_reopen() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = dir.path().join("fitlog.db");

    {
        let store = KvStore::open(&path).expect("Should open store");
        store.set("@userName", "Ann").expect("Should write");
    }

    let store = KvStore::open(&path).expect("Should reopen store");
    assert_eq!(
        store.get("@userName").expect("Should read"),
        Some("Ann".to_string())
    );
}

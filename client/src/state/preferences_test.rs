use super::*;
use crate::util::storage::MemoryStore;

const KEY: &str = "user_events";

fn id(raw: &str) -> EventId {
    EventId::new(raw).unwrap()
}

// =============================================================
// Preferences
// =============================================================

#[test]
fn flip_adds_then_removes() {
    let mut prefs = Preferences::default();
    let e = id("e1");
    assert!(prefs.flip(ToggleKind::Interest, &e));
    assert!(prefs.contains(ToggleKind::Interest, &e));
    assert!(!prefs.flip(ToggleKind::Interest, &e));
    assert!(!prefs.contains(ToggleKind::Interest, &e));
    assert!(prefs.is_empty());
}

#[test]
fn sets_are_independent() {
    let mut prefs = Preferences::default();
    let e = id("e1");
    prefs.flip(ToggleKind::Attendance, &e);
    prefs.flip(ToggleKind::Interest, &e);
    prefs.flip(ToggleKind::Interest, &e);
    assert!(prefs.contains(ToggleKind::Attendance, &e));
    assert!(!prefs.contains(ToggleKind::Interest, &e));
    assert_eq!(prefs.len(ToggleKind::Attendance), 1);
}

#[test]
fn snapshot_dedupes_stored_duplicates() {
    let snapshot = PreferenceSnapshot {
        interested: vec![id("e1"), id("e1"), id("e2")],
        attending: vec![],
        timestamp: None,
    };
    let prefs = Preferences::from(snapshot);
    assert_eq!(prefs.len(ToggleKind::Interest), 2);
    let ids: Vec<_> = prefs.ids(ToggleKind::Interest).map(EventId::as_str).collect();
    assert_eq!(ids, vec!["e1", "e2"]);
}

// =============================================================
// PreferenceStore
// =============================================================

#[test]
fn load_missing_key_is_empty() {
    let store = PreferenceStore::new(MemoryStore::new(), KEY);
    assert_eq!(store.load(), Preferences::default());
}

#[test]
fn load_malformed_value_is_empty() {
    for raw in ["not json", "[1,2,3]", r#"{"interested":"e1"}"#] {
        let store = PreferenceStore::new(MemoryStore::with_entry(KEY, raw), KEY);
        assert_eq!(store.load(), Preferences::default(), "raw = {raw}");
    }
}

#[test]
fn load_keeps_valid_ids_next_to_bad_entries() {
    let raw = r#"{"interested":["", "e1", 7, null, "  "],"attending":["e2"],"timestamp":1}"#;
    let store = PreferenceStore::new(MemoryStore::with_entry(KEY, raw), KEY);
    let prefs = store.load();
    assert!(prefs.contains(ToggleKind::Interest, &id("e1")));
    assert_eq!(prefs.len(ToggleKind::Interest), 1);
    assert!(prefs.contains(ToggleKind::Attendance, &id("e2")));
}

#[test]
fn load_treats_null_arrays_as_empty() {
    let store = PreferenceStore::new(MemoryStore::with_entry(KEY, r#"{"interested":null,"attending":["e3"]}"#), KEY);
    let prefs = store.load();
    assert_eq!(prefs.len(ToggleKind::Interest), 0);
    assert!(prefs.contains(ToggleKind::Attendance, &id("e3")));
}

#[test]
fn load_tolerates_missing_fields() {
    let store = PreferenceStore::new(MemoryStore::with_entry(KEY, r#"{"attending":["e9"]}"#), KEY);
    let prefs = store.load();
    assert!(prefs.contains(ToggleKind::Attendance, &id("e9")));
    assert_eq!(prefs.len(ToggleKind::Interest), 0);
}

#[test]
fn save_writes_arrays_and_timestamp() {
    let store = PreferenceStore::new(MemoryStore::new(), KEY);
    let mut prefs = Preferences::default();
    prefs.flip(ToggleKind::Interest, &id("e1"));
    prefs.flip(ToggleKind::Attendance, &id("e2"));
    store.save(&prefs, 1_700_000_000_000);

    let raw = store.storage().get(KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "interested": ["e1"], "attending": ["e2"], "timestamp": 1_700_000_000_000_i64 })
    );
    assert_eq!(store.load(), prefs);
}

#[test]
fn toggle_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ToggleKind::Interest).unwrap(), "\"interest\"");
    assert_eq!(ToggleKind::Attendance.as_str(), "attendance");
}

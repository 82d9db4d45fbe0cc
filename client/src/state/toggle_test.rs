use futures::executor::block_on;

use super::*;
use crate::net::sync::{MembershipSync, SyncError, SyncOutcome, push_best_effort};
use crate::net::types::EventSummary;
use crate::util::storage::MemoryStore;

const KEY: &str = "user_events";
const NOW: i64 = 1_750_000_000_000;

fn id(raw: &str) -> EventId {
    EventId::new(raw).unwrap()
}

fn summary(id: &str, interested: u32, attending: u32) -> EventSummary {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": id,
        "interested_count": interested,
        "attendees_count": attending,
    }))
    .unwrap()
}

fn controller() -> ToggleController<MemoryStore> {
    ToggleController::new(PreferenceStore::new(MemoryStore::new(), KEY))
}

fn listed(prefs: &Preferences, events: Vec<EventSummary>) -> EventsState {
    let mut state = EventsState::default();
    state.set_items(events, 1, prefs);
    state
}

struct OfflineSync;

impl MembershipSync for OfflineSync {
    async fn push(&self, _request: &SyncRequest, _token: &str) -> Result<(), SyncError> {
        Err(SyncError::Network("offline".to_owned()))
    }
}

#[test]
fn toggle_from_empty_increments_then_restores() {
    let ctl = controller();
    let mut prefs = ctl.load();
    let mut state = listed(&prefs, vec![summary("e1", 5, 0)]);
    let e = id("e1");

    let first = ctl.toggle(&mut prefs, &mut state, &e, ToggleKind::Interest, NOW);
    assert!(first.active);
    assert_eq!(first.delta, 1);
    assert_eq!(first.rendered, 1);
    assert!(prefs.contains(ToggleKind::Interest, &e));
    assert_eq!(state.items[0].count(ToggleKind::Interest), 6);

    let second = ctl.toggle(&mut prefs, &mut state, &e, ToggleKind::Interest, NOW);
    assert!(!second.active);
    assert_eq!(second.delta, -1);
    assert!(prefs.is_empty());
    assert_eq!(state.items[0].count(ToggleKind::Interest), 5);
    assert!(!state.items[0].interested);
}

#[test]
fn double_toggle_is_identity_for_both_kinds() {
    for kind in ToggleKind::ALL {
        let ctl = controller();
        let mut prefs = ctl.load();
        let mut state = listed(&prefs, vec![summary("e1", 3, 4)]);
        let before = (prefs.clone(), state.clone());
        ctl.toggle(&mut prefs, &mut state, &id("e1"), kind, NOW);
        ctl.toggle(&mut prefs, &mut state, &id("e1"), kind, NOW);
        assert_eq!((prefs, state), before, "kind = {kind:?}");
    }
}

#[test]
fn interest_toggle_leaves_attendance_untouched() {
    let ctl = controller();
    let mut prefs = ctl.load();
    let e = id("e1");
    prefs.flip(ToggleKind::Attendance, &e);
    let mut state = listed(&prefs, vec![summary("e1", 1, 1)]);

    ctl.toggle(&mut prefs, &mut state, &e, ToggleKind::Interest, NOW);

    assert!(prefs.contains(ToggleKind::Attendance, &e));
    assert_eq!(prefs.len(ToggleKind::Attendance), 1);
    assert_eq!(state.items[0].count(ToggleKind::Attendance), 1);
    assert!(state.items[0].attending);
}

#[test]
fn attendance_toggle_leaves_interest_untouched() {
    let ctl = controller();
    let mut prefs = ctl.load();
    let e = id("e1");
    prefs.flip(ToggleKind::Interest, &e);
    let mut state = listed(&prefs, vec![summary("e1", 1, 1)]);

    ctl.toggle(&mut prefs, &mut state, &e, ToggleKind::Attendance, NOW);
    ctl.toggle(&mut prefs, &mut state, &e, ToggleKind::Attendance, NOW);
    ctl.toggle(&mut prefs, &mut state, &e, ToggleKind::Attendance, NOW);

    assert!(prefs.contains(ToggleKind::Interest, &e));
    assert_eq!(state.items[0].count(ToggleKind::Interest), 1);
    assert_eq!(state.items[0].count(ToggleKind::Attendance), 2);
}

#[test]
fn every_toggle_is_persisted() {
    let ctl = controller();
    let mut prefs = ctl.load();
    let mut state = EventsState::default();
    ctl.toggle(&mut prefs, &mut state, &id("e1"), ToggleKind::Attendance, NOW);
    ctl.toggle(&mut prefs, &mut state, &id("e2"), ToggleKind::Interest, NOW + 1);

    let reloaded = ctl.load();
    assert_eq!(reloaded, prefs);
    let raw: serde_json::Value = serde_json::from_str(&ctl.store().storage().get(KEY).unwrap()).unwrap();
    assert_eq!(raw["timestamp"], serde_json::json!(NOW + 1));
}

#[test]
fn toggle_of_unrendered_event_still_updates_sets() {
    let ctl = controller();
    let mut prefs = ctl.load();
    let mut state = EventsState::default();
    let outcome = ctl.toggle(&mut prefs, &mut state, &id("ghost"), ToggleKind::Interest, NOW);
    assert_eq!(outcome.rendered, 0);
    assert!(prefs.contains(ToggleKind::Interest, &id("ghost")));
}

#[test]
fn list_card_and_modal_stay_in_step() {
    let ctl = controller();
    let mut prefs = ctl.load();
    let mut state = listed(&prefs, vec![summary("e1", 5, 2)]);
    state.open_modal(&id("e1"));

    let outcome = ctl.toggle(&mut prefs, &mut state, &id("e1"), ToggleKind::Attendance, NOW);

    assert_eq!(outcome.rendered, 2);
    let modal = state.modal.as_ref().unwrap();
    assert_eq!(modal.count(ToggleKind::Attendance), 3);
    assert_eq!(state.items[0].count(ToggleKind::Attendance), 3);
    assert!(modal.attending && state.items[0].attending);
}

#[test]
fn backend_failure_keeps_optimistic_state() {
    let ctl = controller();
    let mut prefs = ctl.load();
    let mut state = listed(&prefs, vec![summary("e1", 5, 0)]);

    let outcome = ctl.toggle(&mut prefs, &mut state, &id("e1"), ToggleKind::Interest, NOW);
    let sync = block_on(push_best_effort(&OfflineSync, outcome.sync_request(), Some("tok")));

    assert!(matches!(sync, SyncOutcome::Failed(SyncError::Network(_))));
    assert!(prefs.contains(ToggleKind::Interest, &id("e1")));
    assert!(state.items[0].interested);
    assert_eq!(state.items[0].count(ToggleKind::Interest), 6);
    assert!(ctl.load().contains(ToggleKind::Interest, &id("e1")));
}

#[test]
fn sync_request_carries_new_membership() {
    let ctl = controller();
    let mut prefs = ctl.load();
    let mut state = EventsState::default();
    let on = ctl.toggle(&mut prefs, &mut state, &id("e1"), ToggleKind::Attendance, NOW).sync_request();
    let off = ctl.toggle(&mut prefs, &mut state, &id("e1"), ToggleKind::Attendance, NOW).sync_request();
    assert!(on.member);
    assert!(!off.member);
    assert_eq!(off.kind, ToggleKind::Attendance);
    assert_eq!(off.event_id.as_str(), "e1");
}

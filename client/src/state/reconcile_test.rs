use super::*;
use crate::net::types::EventSummary;
use crate::state::events::EventView;
use crate::state::preferences::Preferences;

fn summary(id: &str, interested: u32) -> EventSummary {
    serde_json::from_value(serde_json::json!({ "id": id, "title": id, "interested_count": interested })).unwrap()
}

fn id(raw: &str) -> EventId {
    EventId::new(raw).unwrap()
}

#[test]
fn card_and_open_modal_get_identical_values() {
    let prefs = Preferences::default();
    let mut state = EventsState::default();
    state.set_items(vec![summary("e1", 5), summary("e2", 9)], 1, &prefs);
    state.open_modal(&id("e1"));

    let touched = reconcile(&mut state, &id("e1"), ToggleKind::Interest, true, 1);

    assert_eq!(touched, 2);
    let card = &state.items[0];
    let modal = state.modal.as_ref().unwrap();
    assert_eq!(card, modal);
    assert_eq!(card.count(ToggleKind::Interest), 6);
    assert!(card.interested);
    assert_eq!(state.items[1].count(ToggleKind::Interest), 9);
}

#[test]
fn detail_instance_is_updated() {
    let prefs = Preferences::default();
    let mut state = EventsState { detail: Some(EventView::new(summary("e1", 3), &prefs)), ..EventsState::default() };
    assert_eq!(reconcile(&mut state, &id("e1"), ToggleKind::Attendance, true, 1), 1);
    let detail = state.detail.unwrap();
    assert!(detail.attending);
    assert_eq!(detail.count(ToggleKind::Attendance), 1);
    assert_eq!(detail.count(ToggleKind::Interest), 3);
}

#[test]
fn unrendered_event_is_noop() {
    let mut state = EventsState::default();
    state.set_items(vec![summary("e1", 5)], 1, &Preferences::default());
    let before = state.clone();
    assert_eq!(reconcile(&mut state, &id("other"), ToggleKind::Interest, true, 1), 0);
    assert_eq!(state, before);
}

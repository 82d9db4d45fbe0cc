use super::*;

fn summary(id: &str, interested: u32, attending: u32) -> EventSummary {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": format!("Event {id}"),
        "interested_count": interested,
        "attendees_count": attending,
    }))
    .unwrap()
}

fn id(raw: &str) -> EventId {
    EventId::new(raw).unwrap()
}

// =============================================================
// EventView
// =============================================================

#[test]
fn view_marks_come_from_preferences() {
    let mut prefs = Preferences::default();
    prefs.flip(ToggleKind::Attendance, &id("e1"));
    let view = EventView::new(summary("e1", 2, 4), &prefs);
    assert!(!view.interested);
    assert!(view.attending);
    assert_eq!(view.count(ToggleKind::Attendance), 4);
}

#[test]
fn apply_floors_counter_at_zero() {
    let mut view = EventView::new(summary("e1", 0, 1), &Preferences::default());
    view.apply(ToggleKind::Interest, false, -1);
    assert_eq!(view.count(ToggleKind::Interest), 0);
    view.apply(ToggleKind::Attendance, true, 1);
    assert_eq!(view.count(ToggleKind::Attendance), 2);
    assert!(view.is_active(ToggleKind::Attendance));
}

// =============================================================
// ListQuery
// =============================================================

#[test]
fn default_query_string() {
    assert_eq!(ListQuery::default().to_query_string(), "page=1&per_page=12&sort=date_asc");
}

#[test]
fn query_string_skips_blank_filters_and_encodes_values() {
    let query = ListQuery {
        page: 2,
        per_page: 12,
        sort: SortOrder::PriceDesc,
        filters: EventFilters {
            genre: "dnb".to_owned(),
            location: "Frankfurt am Main".to_owned(),
            date: "  ".to_owned(),
            price_range: String::new(),
        },
    };
    assert_eq!(
        query.to_query_string(),
        "page=2&per_page=12&sort=price_desc&genre=dnb&location=Frankfurt+am+Main"
    );
    assert!(!query.filters.is_empty());
    assert!(EventFilters::default().is_empty());
}

#[test]
fn sort_order_parse_falls_back_to_default() {
    assert_eq!(SortOrder::parse("date_desc"), SortOrder::DateDesc);
    assert_eq!(SortOrder::parse("bogus"), SortOrder::DateAsc);
}

// =============================================================
// EventsState
// =============================================================

#[test]
fn open_modal_copies_listed_event() {
    let mut state = EventsState::default();
    state.set_items(vec![summary("e1", 1, 1), summary("e2", 0, 0)], 1, &Preferences::default());
    state.open_modal(&id("e2"));
    assert_eq!(state.modal.as_ref().map(|v| v.id().as_str()), Some("e2"));
    state.close_modal();
    assert!(state.modal.is_none());

    state.open_modal(&id("missing"));
    assert!(state.modal.is_none());
}

#[test]
fn instances_cover_list_modal_and_detail() {
    let prefs = Preferences::default();
    let mut state = EventsState::default();
    state.set_items(vec![summary("e1", 1, 1), summary("e2", 0, 0)], 1, &prefs);
    state.open_modal(&id("e1"));
    state.detail = Some(EventView::new(summary("e1", 1, 1), &prefs));
    let target = id("e1");
    assert_eq!(state.instances_mut(&target).count(), 3);
}

#[test]
fn set_failed_clears_items() {
    let mut state = EventsState { loading: true, ..EventsState::default() };
    state.set_items(vec![summary("e1", 0, 0)], 1, &Preferences::default());
    state.set_failed("boom");
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("boom"));
}

#[test]
fn pagination_bounds_and_labels() {
    let mut state = EventsState { total_pages: 3, ..EventsState::default() };
    assert!(!state.can_go_back());
    assert!(state.can_go_forward());
    assert_eq!(state.page_label().as_deref(), Some("Seite 1 von 3"));
    state.query.page = 3;
    assert!(state.can_go_back());
    assert!(!state.can_go_forward());
    state.total_pages = 1;
    assert_eq!(state.page_label(), None);
}

#[test]
fn results_label_pluralizes() {
    let mut state = EventsState::default();
    assert_eq!(state.results_label(), "0 Events gefunden");
    state.set_items(vec![summary("e1", 0, 0)], 1, &Preferences::default());
    assert_eq!(state.results_label(), "1 Event gefunden");
}

#[test]
fn instance_looks_up_each_slot() {
    let prefs = Preferences::default();
    let mut state = EventsState::default();
    state.set_items(vec![summary("e1", 1, 0), summary("e2", 0, 0)], 1, &prefs);
    state.open_modal(&id("e2"));
    state.detail = Some(EventView::new(summary("e3", 0, 0), &prefs));

    assert_eq!(state.instance(Slot::List, &id("e2")).map(|v| v.summary.title.as_str()), Some("Event e2"));
    assert!(state.instance(Slot::Modal, &id("e2")).is_some());
    assert!(state.instance(Slot::Modal, &id("e1")).is_none());
    assert!(state.instance(Slot::Detail, &id("e3")).is_some());
    assert!(state.instance(Slot::List, &id("e3")).is_none());
}

#[test]
fn filter_and_sort_changes_restart_at_first_page() {
    let mut state = EventsState { total_pages: 4, ..EventsState::default() };
    assert!(state.go_to_page(3));
    state.set_sort(SortOrder::PriceAsc);
    assert_eq!(state.query.page, 1);

    assert!(state.go_to_page(2));
    state.set_filters(EventFilters { genre: "techno".to_owned(), ..EventFilters::default() });
    assert_eq!(state.query.page, 1);
    assert_eq!(state.query.filters.genre, "techno");
}

#[test]
fn go_to_page_rejects_out_of_range_and_current() {
    let mut state = EventsState { total_pages: 2, ..EventsState::default() };
    assert!(!state.go_to_page(0));
    assert!(!state.go_to_page(1));
    assert!(!state.go_to_page(3));
    assert!(state.go_to_page(2));
    assert!(!state.can_go_forward());
    assert!(state.can_go_back());
}

// =============================================================
// Load ordering
// =============================================================

fn page_of(ids: &[&str]) -> EventList {
    EventList { events: ids.iter().map(|i| summary(i, 0, 0)).collect(), total_pages: 2 }
}

#[test]
fn older_list_response_is_dropped() {
    let prefs = Preferences::default();
    let mut state = EventsState::default();
    let first = state.begin_load();
    state.set_filters(EventFilters { genre: "techno".to_owned(), ..EventFilters::default() });
    let second = state.begin_load();

    assert!(state.finish_load(second, page_of(&["techno-1"]), &prefs));
    assert!(!state.finish_load(first, page_of(&["old-1", "old-2"]), &prefs));

    let ids: Vec<&str> = state.items.iter().map(|v| v.id().as_str()).collect();
    assert_eq!(ids, ["techno-1"]);
    assert!(!state.loading);
}

#[test]
fn stale_response_keeps_loading_until_current_arrives() {
    let prefs = Preferences::default();
    let mut state = EventsState::default();
    let first = state.begin_load();
    let second = state.begin_load();

    assert!(!state.finish_load(first, page_of(&["old-1"]), &prefs));
    assert!(state.loading);
    assert!(state.items.is_empty());

    assert!(!state.fail_load(first, "boom"));
    assert_eq!(state.error, None);

    assert!(state.fail_load(second, "Fehler"));
    assert_eq!(state.error.as_deref(), Some("Fehler"));
    assert!(!state.loading);
}

#[test]
fn detail_response_for_previous_route_is_dropped() {
    let prefs = Preferences::default();
    let mut state = EventsState::default();
    state.begin_detail(id("a"));
    state.begin_detail(id("b"));

    assert!(state.finish_detail(&id("b"), summary("b", 0, 0), &prefs));
    assert!(!state.finish_detail(&id("a"), summary("a", 0, 0), &prefs));
    assert_eq!(state.detail.as_ref().map(|v| v.id().as_str()), Some("b"));
    assert!(!state.wants_detail(&id("a")));

    state.clear_detail();
    assert!(state.detail.is_none());
    assert!(!state.finish_detail(&id("b"), summary("b", 0, 0), &prefs));
}

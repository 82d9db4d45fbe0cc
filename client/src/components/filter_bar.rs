//! Filter, sort and layout controls above the event list.

use leptos::prelude::*;

use crate::state::events::{EventFilters, EventsState, Layout, SortOrder};
use crate::util::format::GENRES;

/// Date filter choices as `(value, label)`.
pub const DATE_OPTIONS: [(&str, &str); 5] = [
    ("today", "Heute"),
    ("tomorrow", "Morgen"),
    ("weekend", "Dieses Wochenende"),
    ("week", "Diese Woche"),
    ("month", "Diesen Monat"),
];

/// Price filter choices as `(value, label)`.
pub const PRICE_OPTIONS: [(&str, &str); 4] =
    [("free", "Kostenlos"), ("0-20", "bis €20"), ("20-50", "€20 - €50"), ("50+", "über €50")];

/// Filter inputs plus sort and layout switches. `on_reload` runs after any
/// change that needs a fresh page from the backend.
#[component]
pub fn FilterBar(on_reload: Callback<()>) -> impl IntoView {
    let events = expect_context::<RwSignal<EventsState>>();
    let draft = RwSignal::new(events.with_untracked(|s| s.query.filters.clone()));

    let apply = move |_| {
        events.update(|s| s.set_filters(draft.get_untracked()));
        on_reload.run(());
    };
    let clear = move |_| {
        draft.set(EventFilters::default());
        events.update(|s| s.set_filters(EventFilters::default()));
        on_reload.run(());
    };
    let on_sort = move |ev: leptos::ev::Event| {
        let sort = SortOrder::parse(&event_target_value(&ev));
        events.update(|s| s.set_sort(sort));
        on_reload.run(());
    };
    let layout = move || events.with(|s| s.layout);
    let set_layout = move |next: Layout| events.update(|s| s.layout = next);

    view! {
        <div class="events-filters">
            <select
                id="genre-filter"
                prop:value=move || draft.with(|f| f.genre.clone())
                on:change=move |ev| draft.update(|f| f.genre = event_target_value(&ev))
            >
                <option value="">"Alle Genres"</option>
                {GENRES.into_iter().map(|(value, label)| view! { <option value=value>{label}</option> }).collect_view()}
            </select>
            <input
                id="location-filter"
                type="text"
                placeholder="Ort"
                prop:value=move || draft.with(|f| f.location.clone())
                on:input=move |ev| draft.update(|f| f.location = event_target_value(&ev))
            />
            <select
                id="date-filter"
                prop:value=move || draft.with(|f| f.date.clone())
                on:change=move |ev| draft.update(|f| f.date = event_target_value(&ev))
            >
                <option value="">"Alle Termine"</option>
                {DATE_OPTIONS.into_iter().map(|(value, label)| view! { <option value=value>{label}</option> }).collect_view()}
            </select>
            <select
                id="price-filter"
                prop:value=move || draft.with(|f| f.price_range.clone())
                on:change=move |ev| draft.update(|f| f.price_range = event_target_value(&ev))
            >
                <option value="">"Alle Preise"</option>
                {PRICE_OPTIONS.into_iter().map(|(value, label)| view! { <option value=value>{label}</option> }).collect_view()}
            </select>
            <button class="btn btn-primary" on:click=apply>"Filtern"</button>
            <button class="btn btn-secondary" on:click=clear>"Zurücksetzen"</button>
        </div>

        <div class="events-toolbar">
            <select
                id="sort-select"
                prop:value=move || events.with(|s| s.query.sort.as_str())
                on:change=on_sort
            >
                {SortOrder::ALL
                    .into_iter()
                    .map(|sort| view! { <option value=sort.as_str()>{sort.label()}</option> })
                    .collect_view()}
            </select>
            <div class="view-toggle">
                <button
                    class="view-btn"
                    class:active=move || layout() == Layout::Grid
                    data-view="grid"
                    on:click=move |_| set_layout(Layout::Grid)
                >
                    "▦"
                </button>
                <button
                    class="view-btn"
                    class:active=move || layout() == Layout::List
                    data-view="list"
                    on:click=move |_| set_layout(Layout::List)
                >
                    "☰"
                </button>
            </div>
        </div>
    }
}

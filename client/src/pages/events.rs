//! Events list page with filters, sorting, paging and the quick-view modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/` and `/events`. Loads one page from `GET /api/events` per
//! query change and marks each card from the local preference sets. Toggles
//! never trigger a reload. A response that arrives after a newer query was
//! issued is dropped.

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::components::event_modal::EventModal;
use crate::components::filter_bar::FilterBar;
use crate::components::pagination::Pagination;
use crate::config::ClientConfig;
use crate::net::types::EventId;
use crate::state::auth::AuthState;
use crate::state::events::{EventsState, ListQuery};
use crate::state::preferences::Preferences;
use crate::util::membership::MembershipHandle;

/// Path of the event creation form, owned by the organizer tooling.
pub const CREATE_EVENT_PATH: &str = "/events/create";

/// Fetch `query` into `events`. Only the newest load in flight may write.
pub(crate) fn load_events(
    api_base: String,
    query: ListQuery,
    events: RwSignal<EventsState>,
    prefs: RwSignal<Preferences>,
) {
    let Some(ticket) = events.try_update(EventsState::begin_load) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_events(&api_base, &query).await {
            Ok(list) => {
                let prefs = prefs.get_untracked();
                events.update(|s| {
                    s.finish_load(ticket, list, &prefs);
                });
            }
            Err(e) => {
                log::error!("error loading events: {e}");
                events.update(|s| {
                    s.fail_load(ticket, "Fehler beim Laden der Events");
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, query, prefs, ticket);
    }
}

/// Events list page.
#[component]
pub fn EventsPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let events = expect_context::<RwSignal<EventsState>>();
    let membership = expect_context::<MembershipHandle>();

    let api_base = config.api_base.clone();
    let reload = Callback::new(move |()| {
        let query = events.with_untracked(|s| s.query.clone());
        load_events(api_base.clone(), query, events, membership.prefs());
    });
    let page_size = config.page_size;
    Effect::new(move || {
        events.update(|s| s.query.per_page = page_size);
        reload.run(());
    });
    on_cleanup(move || events.update(EventsState::close_modal));

    let on_open = Callback::new(move |id: EventId| events.update(|s| s.open_modal(&id)));

    // Card list re-renders when the set of listed events changes, not on
    // every counter update.
    let listing = Memo::new(move |_| {
        events.with(|s| (s.loading, s.error.clone(), s.items.iter().map(|v| v.id().clone()).collect::<Vec<_>>()))
    });
    let container_class = move || format!("events-container {}-view", events.with(|s| s.layout.as_str()));

    view! {
        <div class="events-page">
            <header class="events-header">
                <h1>"Events"</h1>
                <Show when=move || auth.with(|a| a.role().can_create_events())>
                    <a class="btn btn-primary" id="create-event-btn" href=CREATE_EVENT_PATH>"+ Event erstellen"</a>
                </Show>
            </header>

            <FilterBar on_reload=reload/>

            <div class="results-count" id="results-count">{move || events.with(EventsState::results_label)}</div>

            <div class=container_class id="events-container">
                {move || {
                    let (loading, error, ids) = listing.get();
                    if loading {
                        return view! {
                            <div class="loading-state">
                                <div class="spinner"></div>
                                <p>"Events werden geladen..."</p>
                            </div>
                        }
                            .into_any();
                    }
                    if let Some(message) = error {
                        return view! {
                            <div class="error-state">
                                <p>{message}</p>
                                <button class="btn btn-primary" on:click=move |_| reload.run(())>
                                    "Erneut versuchen"
                                </button>
                            </div>
                        }
                            .into_any();
                    }
                    if ids.is_empty() {
                        return view! {
                            <div class="no-results">
                                <h3>"Keine Events gefunden"</h3>
                                <p>"Versuche es mit anderen Filtern."</p>
                            </div>
                        }
                            .into_any();
                    }
                    events
                        .with_untracked(|s| s.items.clone())
                        .into_iter()
                        .map(|view| view! { <EventCard view=view on_open=on_open/> })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <Pagination on_reload=reload/>
            <EventModal/>
        </div>
    }
}

//! "Meine Events" page: events the viewer attends, created or marked.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tabs are derived from the listed events and the local preference sets, so
//! toggling an event off moves it out of its tab immediately. The created tab
//! is shown to organizers, moderators and admins only.

#[cfg(test)]
#[path = "my_events_test.rs"]
mod my_events_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::events::{CREATE_EVENT_PATH, load_events};
use crate::components::event_card::EventCard;
use crate::components::event_modal::EventModal;
use crate::config::ClientConfig;
use crate::net::types::EventId;
use crate::state::auth::AuthState;
use crate::state::events::{EventView, EventsState, ListQuery};
use crate::state::preferences::{Preferences, ToggleKind};
use crate::util::auth::install_unauth_redirect;
use crate::util::membership::MembershipHandle;

/// Events fetched in one request to build the tabs.
pub const MY_EVENTS_FETCH_LIMIT: u32 = 100;

/// Tabs on the page, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MyEventsTab {
    #[default]
    Attending,
    Created,
    Interested,
}

/// Copy for a tab with no events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub text: &'static str,
    pub action_label: &'static str,
    pub action_href: &'static str,
}

impl MyEventsTab {
    pub const ALL: [Self; 3] = [Self::Attending, Self::Created, Self::Interested];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Attending => "attending",
            Self::Created => "created",
            Self::Interested => "interested",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Attending => "Teilnahme",
            Self::Created => "Erstellt",
            Self::Interested => "Interessiert",
        }
    }

    pub fn empty_state(self) -> EmptyState {
        match self {
            Self::Attending => EmptyState {
                title: "Keine Events mit Teilnahme",
                text: "Du hast noch bei keinem Event deine Teilnahme bestätigt.",
                action_label: "Events entdecken",
                action_href: "/events",
            },
            Self::Created => EmptyState {
                title: "Keine Events erstellt",
                text: "Du hast noch keine Events erstellt.",
                action_label: "Erstes Event erstellen",
                action_href: CREATE_EVENT_PATH,
            },
            Self::Interested => EmptyState {
                title: "Keine Interessensbekundungen",
                text: "Du hast noch kein Interesse an Events bekundet.",
                action_label: "Events entdecken",
                action_href: "/events",
            },
        }
    }
}

/// Tabs visible to a viewer; `created` only for roles that publish events.
pub fn visible_tabs(auth: &AuthState) -> Vec<MyEventsTab> {
    MyEventsTab::ALL
        .into_iter()
        .filter(|tab| *tab != MyEventsTab::Created || auth.role().sees_created_tab())
        .collect()
}

/// Whether `view` belongs in `tab` for this viewer.
pub fn belongs_to(tab: MyEventsTab, view: &EventView, prefs: &Preferences, user_id: Option<&str>) -> bool {
    match tab {
        MyEventsTab::Attending => prefs.contains(ToggleKind::Attendance, view.id()),
        MyEventsTab::Interested => prefs.contains(ToggleKind::Interest, view.id()),
        MyEventsTab::Created => user_id.is_some_and(|uid| view.summary.organizer_id.as_deref() == Some(uid)),
    }
}

/// Ids of the listed events in `tab`, in list order.
pub fn tab_ids(tab: MyEventsTab, items: &[EventView], prefs: &Preferences, user_id: Option<&str>) -> Vec<EventId> {
    items.iter().filter(|v| belongs_to(tab, v, prefs, user_id)).map(|v| v.id().clone()).collect()
}

/// Query for the tab catalogue. Kept apart from the list page's query so its
/// filters, sort and page survive a visit here.
pub fn catalogue_query() -> ListQuery {
    ListQuery { per_page: MY_EVENTS_FETCH_LIMIT, ..ListQuery::default() }
}

/// "Meine Events" page. Redirects to `/login` when signed out.
#[component]
pub fn MyEventsPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let events = expect_context::<RwSignal<EventsState>>();
    let membership = expect_context::<MembershipHandle>();
    install_unauth_redirect(auth, use_navigate());

    let active_tab = RwSignal::new(MyEventsTab::default());
    let prefs = membership.prefs();

    let api_base = config.api_base.clone();
    Effect::new(move || load_events(api_base.clone(), catalogue_query(), events, prefs));
    on_cleanup(move || events.update(EventsState::close_modal));

    let on_open = Callback::new(move |id: EventId| events.update(|s| s.open_modal(&id)));

    let ids_for = move |tab: MyEventsTab| {
        let user_id = auth.with(|a| a.user_id().map(str::to_owned));
        events.with(|s| prefs.with(|p| tab_ids(tab, &s.items, p, user_id.as_deref())))
    };
    let shown = Memo::new(move |_| ids_for(active_tab.get()));
    let status = Memo::new(move |_| events.with(|s| (s.loading, s.error.clone())));

    view! {
        <div class="my-events-page">
            <h1>"Meine Events"</h1>

            <nav class="tabs">
                {move || {
                    auth.with(visible_tabs)
                        .into_iter()
                        .map(|tab| {
                            let count = move || ids_for(tab).len();
                            view! {
                                <button
                                    class="tab-btn"
                                    class:active=move || active_tab.get() == tab
                                    data-tab=tab.as_str()
                                    on:click=move |_| active_tab.set(tab)
                                >
                                    {tab.label()}
                                    <span class="tab-count" class:hidden=move || count() == 0>{count}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </nav>

            <div class="tab-pane active" id=move || format!("{}-events", active_tab.get().as_str())>
                {move || {
                    let (loading, error) = status.get();
                    if loading {
                        return view! { <div class="loading-state"><div class="spinner"></div></div> }.into_any();
                    }
                    if let Some(message) = error {
                        return view! { <div class="error-state"><p>{message}</p></div> }.into_any();
                    }
                    let ids = shown.get();
                    if ids.is_empty() {
                        let empty = active_tab.get_untracked().empty_state();
                        return view! {
                            <div class="empty-state">
                                <h3>{empty.title}</h3>
                                <p>{empty.text}</p>
                                <a class="btn btn-primary" href=empty.action_href>{empty.action_label}</a>
                            </div>
                        }
                            .into_any();
                    }
                    events
                        .with_untracked(|s| {
                            s.items.iter().filter(|v| ids.contains(v.id())).cloned().collect::<Vec<_>>()
                        })
                        .into_iter()
                        .map(|view| view! { <EventCard view=view on_open=on_open/> })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <EventModal/>
        </div>
    }
}

//! Interest and attendance toggle buttons for one rendered event.
//!
//! Buttons read their mark and counter from the shared [`EventsState`] slot
//! they belong to, so every copy of an event updates from the same toggle.

#[cfg(test)]
#[path = "membership_buttons_test.rs"]
mod membership_buttons_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::EventId;
use crate::state::auth::AuthState;
use crate::state::events::{EventsState, Slot};
use crate::state::preferences::ToggleKind;
use crate::util::auth::LOGIN_PATH;
use crate::util::membership::MembershipHandle;

/// Button text for `kind`; `verbose` adds a label next to the icon.
pub fn button_label(kind: ToggleKind, active: bool, verbose: bool) -> &'static str {
    match (kind, active, verbose) {
        (ToggleKind::Interest, true, false) => "💖",
        (ToggleKind::Interest, false, false) => "🤍",
        (ToggleKind::Interest, true, true) => "💖 Interesse entfernen",
        (ToggleKind::Interest, false, true) => "🤍 Interesse zeigen",
        (ToggleKind::Attendance, true, false) => "✅",
        (ToggleKind::Attendance, false, false) => "➕",
        (ToggleKind::Attendance, true, true) => "✅ Teilnahme absagen",
        (ToggleKind::Attendance, false, true) => "➕ Teilnehmen",
    }
}

/// Tooltip for `kind` in its current state.
pub fn button_title(kind: ToggleKind, active: bool) -> &'static str {
    match (kind, active) {
        (ToggleKind::Interest, true) => "Interesse entfernen",
        (ToggleKind::Interest, false) => "Interesse zeigen",
        (ToggleKind::Attendance, true) => "Teilnahme stornieren",
        (ToggleKind::Attendance, false) => "Teilnehmen",
    }
}

/// Both toggles for `id` as rendered in `slot`.
///
/// With `require_auth`, a signed-out click navigates to `/login` instead of
/// toggling.
#[component]
pub fn MembershipButtons(
    id: EventId,
    slot: Slot,
    #[prop(optional)] verbose: bool,
    #[prop(optional)] require_auth: bool,
) -> impl IntoView {
    let events = expect_context::<RwSignal<EventsState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let membership = expect_context::<MembershipHandle>();
    let navigate = use_navigate();

    ToggleKind::ALL
        .into_iter()
        .map(|kind| {
            let lookup_id = id.clone();
            let click_id = id.clone();
            let navigate = navigate.clone();
            let state = Memo::new(move |_| {
                events.with(|s| s.instance(slot, &lookup_id).map_or((false, 0), |v| (v.is_active(kind), v.count(kind))))
            });
            let active = move || state.get().0;

            view! {
                <button
                    class="action-btn"
                    class:active=active
                    class:btn-primary=move || verbose && active()
                    class:btn-secondary=move || verbose && !active()
                    data-kind=kind.as_str()
                    title=move || button_title(kind, active())
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        if require_auth && !auth.with_untracked(AuthState::is_authenticated) {
                            navigate(LOGIN_PATH, NavigateOptions::default());
                            return;
                        }
                        membership.toggle(&click_id, kind);
                    }
                >
                    <span class="action-text">{move || button_label(kind, active(), verbose)}</span>
                    <span class="action-count">{move || state.get().1}</span>
                </button>
            }
        })
        .collect_view()
}

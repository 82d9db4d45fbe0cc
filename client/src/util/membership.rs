//! Reactive wiring for interest/attendance toggles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive a [`MembershipHandle`] from context and call
//! [`MembershipHandle::toggle`] from click handlers. The handle runs the
//! synchronous controller against the shared signals, then spawns the
//! best-effort backend sync without awaiting it.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::sync::HttpMembershipSync;
use crate::net::types::EventId;
use crate::state::auth::AuthState;
use crate::state::events::EventsState;
use crate::state::preferences::{PreferenceStore, Preferences, ToggleKind};
use crate::state::toggle::ToggleController;
use crate::util::clock::now_ms;
use crate::util::storage::BrowserStorage;

/// Copyable handle bundling the signals a toggle touches.
#[derive(Clone, Copy)]
pub struct MembershipHandle {
    prefs: RwSignal<Preferences>,
    events: RwSignal<EventsState>,
    auth: RwSignal<AuthState>,
    controller: StoredValue<ToggleController<BrowserStorage>>,
    sync: StoredValue<HttpMembershipSync>,
}

impl MembershipHandle {
    /// Load stored preferences and build the handle for `config`.
    pub fn new(config: &ClientConfig, events: RwSignal<EventsState>, auth: RwSignal<AuthState>) -> Self {
        let controller = ToggleController::new(PreferenceStore::new(BrowserStorage, config.preferences_key.clone()));
        let prefs = RwSignal::new(controller.load());
        Self {
            prefs,
            events,
            auth,
            controller: StoredValue::new(controller),
            sync: StoredValue::new(HttpMembershipSync::new(config.api_base.clone())),
        }
    }

    pub fn prefs(self) -> RwSignal<Preferences> {
        self.prefs
    }

    /// Flip `kind` for `id`, update every rendered copy and fire the sync.
    pub fn toggle(self, id: &EventId, kind: ToggleKind) {
        let now = now_ms();
        let mut prefs = self.prefs.get_untracked();
        let mut outcome = None;
        self.events.update(|events| {
            outcome = Some(self.controller.with_value(|c| c.toggle(&mut prefs, events, id, kind, now)));
        });
        self.prefs.set(prefs);

        let Some(outcome) = outcome else {
            return;
        };
        let token = self.auth.with_untracked(|a| a.token.clone());

        #[cfg(feature = "hydrate")]
        {
            let client = self.sync.get_value();
            let request = outcome.sync_request();
            leptos::task::spawn_local(async move {
                let _ = crate::net::sync::push_best_effort(&client, request, token.as_deref()).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (outcome, token, self.sync);
        }
    }
}

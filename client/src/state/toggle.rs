//! Interest/attendance toggle controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! One controller serves the events list, my-events and detail pages. A
//! toggle is a pure flip of local membership followed, in order, by a storage
//! write, the counter/button reconcile across every rendered copy, and a
//! [`SyncRequest`] the caller hands to the best-effort sync client.
//!
//! CONCURRENCY
//! ===========
//! All of this runs synchronously inside one UI callback. Repeated clicks on
//! the same event each flip local state before any earlier sync resolves, so
//! the last click always wins on screen. Sync responses never write back.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use super::events::EventsState;
use super::preferences::{PreferenceStore, Preferences, ToggleKind};
use super::reconcile::reconcile;
use crate::net::sync::SyncRequest;
use crate::net::types::EventId;
use crate::util::storage::KeyValueStore;

/// Result of one local flip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub event_id: EventId,
    pub kind: ToggleKind,
    /// Membership after the flip.
    pub active: bool,
    /// Counter delta applied to every rendered copy.
    pub delta: i32,
    /// Number of rendered copies updated.
    pub rendered: usize,
}

impl ToggleOutcome {
    /// Backend update carrying the new membership value.
    pub fn sync_request(&self) -> SyncRequest {
        SyncRequest { event_id: self.event_id.clone(), kind: self.kind, member: self.active }
    }
}

/// Applies toggles against a preference store.
#[derive(Debug)]
pub struct ToggleController<S> {
    store: PreferenceStore<S>,
}

impl<S: KeyValueStore> ToggleController<S> {
    pub fn new(store: PreferenceStore<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &PreferenceStore<S> {
        &self.store
    }

    /// Initial sets for a page load.
    pub fn load(&self) -> Preferences {
        self.store.load()
    }

    /// Flip `id` in the `kind` set and propagate the change locally.
    pub fn toggle(
        &self,
        prefs: &mut Preferences,
        events: &mut EventsState,
        id: &EventId,
        kind: ToggleKind,
        now_ms: i64,
    ) -> ToggleOutcome {
        let active = prefs.flip(kind, id);
        self.store.save(prefs, now_ms);

        let delta = if active { 1 } else { -1 };
        let rendered = reconcile(events, id, kind, active, delta);
        if rendered == 0 {
            log::debug!("{} toggled for {id}, which is not on screen", kind.as_str());
        }

        ToggleOutcome { event_id: id.clone(), kind, active, delta, rendered }
    }
}

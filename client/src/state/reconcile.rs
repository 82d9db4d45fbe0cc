//! Propagates one membership change to every rendered copy of an event.

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod reconcile_test;

use super::events::EventsState;
use super::preferences::ToggleKind;
use crate::net::types::EventId;

/// Update every instance of `id` to `active` and shift its `kind` counter by
/// `delta` (floored at zero).
///
/// Returns how many instances were touched; zero means the event is not on
/// screen, which is not an error.
pub fn reconcile(state: &mut EventsState, id: &EventId, kind: ToggleKind, active: bool, delta: i32) -> usize {
    let mut touched = 0;
    for view in state.instances_mut(id) {
        view.apply(kind, active, delta);
        touched += 1;
    }
    touched
}

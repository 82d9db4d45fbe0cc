//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data structs shared through `RwSignal` contexts. The toggle
//! controller and reconciler operate on them directly so the whole
//! interest/attendance flow is testable without a browser.

pub mod auth;
pub mod events;
pub mod preferences;
pub mod reconcile;
pub mod toggle;

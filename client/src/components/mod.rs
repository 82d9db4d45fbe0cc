//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render event cards, the quick-view modal and list controls
//! while reading/writing shared state from Leptos context providers.

pub mod event_card;
pub mod event_modal;
pub mod filter_bar;
pub mod membership_buttons;
pub mod pagination;

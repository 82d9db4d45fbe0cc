//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and redirects and delegates rendering
//! details to `components`.

pub mod event_detail;
pub mod events;
pub mod my_events;

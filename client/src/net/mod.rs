//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles event and profile reads, `sync` mirrors membership toggles,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod sync;
pub mod types;

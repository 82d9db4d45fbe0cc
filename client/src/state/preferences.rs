//! Per-browser interest/attendance sets and their storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The local sets are the source of truth for the current session. They are
//! loaded once per app start, flipped synchronously by the toggle controller,
//! and written back after every flip. Other devices and tabs are never merged
//! in; the next reload simply supersedes whatever this tab holds.
//!
//! ERROR HANDLING
//! ==============
//! A missing or malformed snapshot loads as empty sets. Loading never fails.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::net::types::EventId;
use crate::util::storage::KeyValueStore;

/// Which membership set a toggle acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleKind {
    Interest,
    Attendance,
}

impl ToggleKind {
    pub const ALL: [Self; 2] = [Self::Interest, Self::Attendance];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Interest => "interest",
            Self::Attendance => "attendance",
        }
    }
}

/// The two membership sets for this browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    interested: BTreeSet<EventId>,
    attending: BTreeSet<EventId>,
}

impl Preferences {
    pub fn contains(&self, kind: ToggleKind, id: &EventId) -> bool {
        self.set(kind).contains(id)
    }

    /// Flip membership of `id` in the `kind` set and return the new membership.
    pub fn flip(&mut self, kind: ToggleKind, id: &EventId) -> bool {
        let set = self.set_mut(kind);
        if set.remove(id) {
            false
        } else {
            set.insert(id.clone());
            true
        }
    }

    pub fn ids(&self, kind: ToggleKind) -> impl Iterator<Item = &EventId> {
        self.set(kind).iter()
    }

    pub fn len(&self, kind: ToggleKind) -> usize {
        self.set(kind).len()
    }

    pub fn is_empty(&self) -> bool {
        self.interested.is_empty() && self.attending.is_empty()
    }

    /// Serializable form stamped with `timestamp_ms`.
    pub fn snapshot(&self, timestamp_ms: i64) -> PreferenceSnapshot {
        PreferenceSnapshot {
            interested: self.interested.iter().cloned().collect(),
            attending: self.attending.iter().cloned().collect(),
            timestamp: Some(timestamp_ms),
        }
    }

    fn set(&self, kind: ToggleKind) -> &BTreeSet<EventId> {
        match kind {
            ToggleKind::Interest => &self.interested,
            ToggleKind::Attendance => &self.attending,
        }
    }

    fn set_mut(&mut self, kind: ToggleKind) -> &mut BTreeSet<EventId> {
        match kind {
            ToggleKind::Interest => &mut self.interested,
            ToggleKind::Attendance => &mut self.attending,
        }
    }
}

fn lenient_ids<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<EventId>, D::Error> {
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let total = raw.len();
    let ids: Vec<EventId> = raw
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => EventId::new(s).ok(),
            _ => None,
        })
        .collect();
    if ids.len() < total {
        log::warn!("dropped {} invalid stored event id(s)", total - ids.len());
    }
    Ok(ids)
}

impl From<PreferenceSnapshot> for Preferences {
    fn from(snapshot: PreferenceSnapshot) -> Self {
        Self {
            interested: snapshot.interested.into_iter().collect(),
            attending: snapshot.attending.into_iter().collect(),
        }
    }
}

/// Persisted form: arrays of ids plus the save time.
///
/// Duplicate ids in stored arrays collapse on load. Entries that are not
/// valid ids are dropped one by one; the rest of the array survives.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSnapshot {
    #[serde(default, deserialize_with = "lenient_ids")]
    pub interested: Vec<EventId>,
    #[serde(default, deserialize_with = "lenient_ids")]
    pub attending: Vec<EventId>,
    /// Milliseconds since the Unix epoch; kept for staleness checks.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Loads and saves [`Preferences`] under one storage key.
#[derive(Debug)]
pub struct PreferenceStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the sets; absent or malformed data yields empty sets.
    pub fn load(&self) -> Preferences {
        match self.storage.load_json::<PreferenceSnapshot>(&self.key) {
            Some(snapshot) => snapshot.into(),
            None => {
                if self.storage.get(&self.key).is_some() {
                    log::warn!("discarding malformed preference snapshot under {}", self.key);
                }
                Preferences::default()
            }
        }
    }

    /// Write both sets in a single storage call.
    pub fn save(&self, prefs: &Preferences, timestamp_ms: i64) {
        self.storage.save_json(&self.key, &prefs.snapshot(timestamp_ms));
    }
}

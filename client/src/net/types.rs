//! Wire DTOs for the events backend.
//!
//! DESIGN
//! ======
//! The backend grew several response shapes for the same data (wrapped and
//! bare lists, `attendees_count` vs `attending_count`, `title` vs `name`).
//! A lenient raw document, per-entry list decoding and untagged envelopes
//! absorb those differences here so the rest of the client sees a single
//! `EventSummary`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque backend-assigned event identifier. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventId(String);

/// Rejected event identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventIdError {
    #[error("event id must not be empty")]
    Empty,
}

impl EventId {
    /// Wrap a backend identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EventIdError::Empty`] for an empty or whitespace-only id.
    pub fn new(raw: impl Into<String>) -> Result<Self, EventIdError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(EventIdError::Empty);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EventId {
    type Error = EventIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EventId> for String {
    fn from(value: EventId) -> Self {
        value.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only projection of a backend event used for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEvent")]
pub struct EventSummary {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    /// ISO-8601 start, with or without offset.
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    /// Ticket price in EUR; `None` when unknown.
    pub price: Option<f64>,
    pub organizer_name: Option<String>,
    pub organizer_id: Option<String>,
    pub interested_count: u32,
    pub attendees_count: u32,
    pub views: u32,
    pub artists: Vec<String>,
    pub headliner: Option<String>,
    pub ticket_url: Option<String>,
    pub website: Option<String>,
}

/// Event document as stored by the backend.
///
/// Older documents carry several names for the same field, sometimes more
/// than one at once (`date` next to `start_datetime`), and form-sourced
/// numbers may arrive as strings. Each name is read separately and merged in
/// `From<RawEvent>`.
#[derive(Deserialize)]
struct RawEvent {
    id: EventId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    genre: Option<String>,
    #[serde(default)]
    date_start: Option<String>,
    #[serde(default)]
    start_datetime: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    date_end: Option<String>,
    #[serde(default)]
    end_datetime: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    price: Option<Value>,
    #[serde(default)]
    organizer_name: Option<String>,
    #[serde(default)]
    created_by_name: Option<String>,
    #[serde(default)]
    organizer_id: Option<String>,
    #[serde(default)]
    created_by: Option<String>,
    #[serde(default)]
    interested_count: Option<Value>,
    #[serde(default)]
    attendees_count: Option<Value>,
    #[serde(default)]
    attending_count: Option<Value>,
    #[serde(default)]
    views: Option<Value>,
    #[serde(default)]
    artists: Option<Vec<String>>,
    #[serde(default)]
    headliner: Option<String>,
    #[serde(default)]
    ticket_url: Option<String>,
    #[serde(default)]
    website: Option<String>,
}

/// First present, non-blank value.
fn first_text(candidates: [Option<String>; 3]) -> Option<String> {
    candidates.into_iter().flatten().find(|v| !v.trim().is_empty())
}

/// Number or numeric string; blanks and anything else read as `None`.
fn lenient_number(value: Option<Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_count(value: Option<Value>) -> u32 {
    lenient_number(value).filter(|n| n.is_finite() && *n > 0.0).map_or(0, |n| n.min(f64::from(u32::MAX)) as u32)
}

impl From<RawEvent> for EventSummary {
    fn from(raw: RawEvent) -> Self {
        Self {
            id: raw.id,
            title: first_text([raw.title, raw.name, None]).unwrap_or_default(),
            description: raw.description,
            genre: raw.genre,
            date_start: first_text([raw.date_start, raw.start_datetime, raw.date]),
            date_end: first_text([raw.date_end, raw.end_datetime, None]),
            location: raw.location,
            city: raw.city,
            price: lenient_number(raw.price),
            organizer_name: first_text([raw.organizer_name, raw.created_by_name, None]),
            organizer_id: first_text([raw.organizer_id, raw.created_by, None]),
            interested_count: lenient_count(raw.interested_count),
            attendees_count: lenient_count(raw.attendees_count.or(raw.attending_count)),
            views: lenient_count(raw.views),
            artists: raw.artists.unwrap_or_default(),
            headliner: raw.headliner,
            ticket_url: raw.ticket_url,
            website: raw.website,
        }
    }
}

/// Decode list entries one by one, skipping (and logging) any that do not
/// parse so a single bad document never hides the rest of the page.
pub fn decode_events(raw: Vec<Value>) -> Vec<EventSummary> {
    raw.into_iter()
        .filter_map(|value| match serde_json::from_value::<EventSummary>(value) {
            Ok(event) => Some(event),
            Err(e) => {
                log::warn!("skipping undecodable event: {e}");
                None
            }
        })
        .collect()
}

/// Pagination block some list responses nest under `pagination`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total_pages: u32,
}

/// Wrapped list response from `GET /api/events`.
///
/// Entries stay undecoded until [`EventList::from`] so each one is judged on
/// its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventPage {
    #[serde(default)]
    pub events: Vec<Value>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    /// Backend-side failure message; the list is still usable (empty).
    #[serde(default)]
    pub error: Option<String>,
}

/// Any list body the backend returns.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EventListBody {
    Page(EventPage),
    Bare(Vec<Value>),
}

/// Normalized list result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventList {
    pub events: Vec<EventSummary>,
    pub total_pages: u32,
}

impl From<EventListBody> for EventList {
    fn from(body: EventListBody) -> Self {
        match body {
            EventListBody::Page(page) => {
                let total_pages = page
                    .total_pages
                    .or_else(|| page.pagination.map(|p| p.total_pages))
                    .unwrap_or(1);
                Self { events: decode_events(page.events), total_pages }
            }
            EventListBody::Bare(events) => Self { events: decode_events(events), total_pages: 1 },
        }
    }
}

/// Any detail body the backend returns.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EventDetailBody {
    Wrapped { event: EventSummary },
    Bare(EventSummary),
}

impl From<EventDetailBody> for EventSummary {
    fn from(body: EventDetailBody) -> Self {
        match body {
            EventDetailBody::Wrapped { event } | EventDetailBody::Bare(event) => event,
        }
    }
}

/// Account role as assigned by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Organizer,
    Moderator,
    Admin,
    /// Any role this client does not know about; no extra privileges.
    #[serde(other)]
    Other,
}

impl Role {
    /// Roles allowed to publish events.
    pub fn can_create_events(self) -> bool {
        matches!(self, Self::Organizer | Self::Admin)
    }

    /// Roles that get the "created" tab on the my-events page.
    pub fn sees_created_tab(self) -> bool {
        matches!(self, Self::Organizer | Self::Moderator | Self::Admin)
    }
}

/// Signed-in user as returned by `GET /api/auth/profile`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(default, alias = "id", alias = "user_id")]
    pub uid: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// Envelope for the profile endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProfileResponse {
    pub user: UserProfile,
}

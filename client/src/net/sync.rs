//! Best-effort mirroring of local membership toggles to the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The toggle controller has already flipped, persisted and rendered the new
//! state by the time a request is built here. These calls only tell the
//! backend about it.
//!
//! ERROR HANDLING
//! ==============
//! At most one attempt per toggle. Network errors and non-2xx statuses are
//! logged and dropped: no retry, no rollback, nothing reaches the UI. The
//! next full reload reconciles any divergence with the server.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use std::future::Future;

use crate::net::types::EventId;
use crate::state::preferences::ToggleKind;

/// Explicit-value membership update for one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncRequest {
    pub event_id: EventId,
    pub kind: ToggleKind,
    /// Membership after the local flip.
    pub member: bool,
}

impl SyncRequest {
    /// Bulk endpoint taking the event id in the body.
    pub fn endpoint(&self) -> &'static str {
        match self.kind {
            ToggleKind::Interest => "/api/events/interest",
            ToggleKind::Attendance => "/api/events/attendance",
        }
    }

    /// `{"event_id": .., "interested"|"attending": bool}`.
    pub fn body(&self) -> serde_json::Value {
        let field = match self.kind {
            ToggleKind::Interest => "interested",
            ToggleKind::Attendance => "attending",
        };
        let mut body = serde_json::Map::new();
        body.insert("event_id".to_owned(), serde_json::Value::String(self.event_id.to_string()));
        body.insert(field.to_owned(), serde_json::Value::Bool(self.member));
        serde_json::Value::Object(body)
    }
}

/// Per-event flip endpoint (`/api/events/{id}/interest` or `/attend`).
///
/// These routes flip server-side without an explicit value; the client only
/// uses the bulk routes.
pub fn per_event_endpoint(kind: ToggleKind, id: &EventId) -> String {
    let action = match kind {
        ToggleKind::Interest => "interest",
        ToggleKind::Attendance => "attend",
    };
    format!("/api/events/{id}/{action}")
}

/// Why a sync attempt did not land.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("sync request failed: {0}")]
    Network(String),
    #[error("sync rejected with status {0}")]
    Status(u16),
    #[error("sync not available outside the browser")]
    Unavailable,
}

/// Transport for membership updates.
pub trait MembershipSync {
    /// Send one update authorized by `token`.
    fn push(&self, request: &SyncRequest, token: &str) -> impl Future<Output = Result<(), SyncError>>;
}

/// `gloo-net` transport against the configured API base.
#[derive(Clone, Debug, Default)]
pub struct HttpMembershipSync {
    api_base: String,
}

impl HttpMembershipSync {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }
}

impl MembershipSync for HttpMembershipSync {
    async fn push(&self, request: &SyncRequest, token: &str) -> Result<(), SyncError> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("{}{}", self.api_base, request.endpoint());
            let resp = gloo_net::http::Request::post(&url)
                .header("Authorization", &super::api::bearer(token))
                .json(&request.body())
                .map_err(|e| SyncError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| SyncError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(SyncError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.api_base, request, token);
            Err(SyncError::Unavailable)
        }
    }
}

/// What happened to a best-effort sync. Callers may ignore it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No bearer token; nothing was sent.
    Skipped,
    Delivered,
    Failed(SyncError),
}

/// Send `request` once, logging and swallowing any failure.
pub async fn push_best_effort<C: MembershipSync>(client: &C, request: SyncRequest, token: Option<&str>) -> SyncOutcome {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        log::debug!("skipping {} sync for {}: not signed in", request.kind.as_str(), request.event_id);
        return SyncOutcome::Skipped;
    };
    match client.push(&request, token).await {
        Ok(()) => {
            log::debug!("synced {} = {} for {}", request.kind.as_str(), request.member, request.event_id);
            SyncOutcome::Delivered
        }
        Err(e) => {
            log::warn!("failed to sync {} for {}: {e}", request.kind.as_str(), request.event_id);
            SyncOutcome::Failed(e)
        }
    }
}

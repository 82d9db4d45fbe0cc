//! REST API helpers for reading events from the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable`/`None` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so listing and
//! profile failures degrade to error or empty states without crashing
//! hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{EventId, EventList, EventSummary, UserProfile};
#[cfg(feature = "hydrate")]
use super::types::{EventDetailBody, EventListBody, ProfileResponse};
use crate::state::events::ListQuery;

/// Failure reading from the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn events_endpoint(query: &ListQuery) -> String {
    format!("/api/events?{}", query.to_query_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn event_endpoint(id: &EventId) -> String {
    format!("/api/events/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn view_endpoint(id: &EventId) -> String {
    format!("/api/events/{id}/view")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Fetch one page of events from `GET /api/events`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// is not a recognized list shape.
pub async fn fetch_events(api_base: &str, query: &ListQuery) -> Result<EventList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{api_base}{}", events_endpoint(query));
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: EventListBody = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.into())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, query);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single event from `GET /api/events/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails, the event does not exist, or the
/// body cannot be decoded.
pub async fn fetch_event(api_base: &str, id: &EventId) -> Result<EventSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{api_base}{}", event_endpoint(id));
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: EventDetailBody = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.into())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, id);
        Err(ApiError::Unavailable)
    }
}

/// Record a page view via `POST /api/events/{id}/view`. Failures are logged.
pub async fn record_view(api_base: &str, id: &EventId) {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{api_base}{}", view_endpoint(id));
        if let Err(e) = gloo_net::http::Request::post(&url).send().await {
            log::warn!("error updating views for {id}: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, id);
    }
}

/// Fetch the signed-in user's profile from `GET /api/auth/profile`.
/// Returns `None` if the token is rejected or on the server.
pub async fn fetch_profile(api_base: &str, token: &str) -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{api_base}/api/auth/profile");
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            log::info!("profile request rejected: {}", resp.status());
            return None;
        }
        resp.json::<ProfileResponse>().await.ok().map(|body| body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, token);
        None
    }
}

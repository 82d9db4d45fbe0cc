//! Same-origin forwarding of `/api/*` to the events backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle talks to `/api/...` on the host that served it. This
//! handler relays each request to `BACKEND_URL` with its method, query,
//! body and the headers the backend cares about, then relays the status,
//! content type and body back unchanged.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Request headers relayed upstream.
const FORWARDED_HEADERS: [HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The backend could not be reached or the response was cut off.
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, "upstream unavailable").into_response()
    }
}

/// Shared forwarding client.
#[derive(Clone)]
pub struct ApiProxy {
    http: reqwest::Client,
    backend_url: Arc<str>,
}

impl ApiProxy {
    /// Build a proxy for `backend_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(backend_url: &str) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url: backend_url.trim_end_matches('/').into() })
    }

    pub fn upstream_url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.backend_url)
    }
}

/// Subset of `headers` relayed to the backend.
pub fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            out.insert(name.clone(), value.clone());
        }
    }
    out
}

/// Relay one request to the backend.
///
/// # Errors
///
/// Returns `502 Bad Gateway` if the backend cannot be reached.
pub async fn forward(
    State(proxy): State<ApiProxy>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let target = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    let url = proxy.upstream_url(target);

    let upstream = proxy
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "backend unreachable");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;
    tracing::debug!(%method, %url, status = status.as_u16(), "proxied");

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}

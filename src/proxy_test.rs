use super::*;
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{any, post};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn proxy_router(proxy: ApiProxy) -> Router {
    Router::new().route("/api/{*path}", any(forward)).with_state(proxy)
}

async fn echo(uri: Uri, headers: HeaderMap, body: String) -> (StatusCode, axum::Json<serde_json::Value>) {
    let auth = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()).unwrap_or_default().to_owned();
    let cookie = headers.get("cookie").is_some();
    (
        StatusCode::CREATED,
        axum::Json(serde_json::json!({
            "uri": uri.to_string(),
            "auth": auth,
            "cookie": cookie,
            "body": body,
        })),
    )
}

#[test]
fn upstream_url_joins_backend_and_path() {
    let proxy = ApiProxy::new("http://backend:8000/").unwrap();
    assert_eq!(proxy.upstream_url("/api/events?page=2"), "http://backend:8000/api/events?page=2");
}

#[test]
fn forwarded_headers_keeps_auth_and_content_type_only() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert("cookie", HeaderValue::from_static("session=1"));

    let out = forwarded_headers(&headers);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(AUTHORIZATION).unwrap(), "Bearer abc");
    assert!(out.get("cookie").is_none());
}

#[test]
fn proxy_error_maps_to_bad_gateway() {
    let response = ProxyError::Upstream("refused".to_owned()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn forward_relays_method_query_headers_and_body() {
    let backend = serve(Router::new().route("/api/events/interest", post(echo))).await;
    let host = serve(proxy_router(ApiProxy::new(&backend).unwrap())).await;

    let response = reqwest::Client::new()
        .post(format!("{host}/api/events/interest?source=card"))
        .header(AUTHORIZATION, "Bearer tok")
        .header("cookie", "session=1")
        .json(&serde_json::json!({"event_id": "e1", "interested": true}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["uri"], "/api/events/interest?source=card");
    assert_eq!(body["auth"], "Bearer tok");
    assert_eq!(body["cookie"], false);
    assert_eq!(body["body"], r#"{"event_id":"e1","interested":true}"#);
}

#[tokio::test]
async fn forward_reports_unreachable_backend() {
    let host = serve(proxy_router(ApiProxy::new("http://127.0.0.1:1").unwrap())).await;
    let response = reqwest::get(format!("{host}/api/events")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
}

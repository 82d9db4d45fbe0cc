#![recursion_limit = "256"]

mod config;
mod proxy;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let app = routes::app(&config).expect("failed to build router");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, backend = %config.backend_url, "ravetracker listening");
    axum::serve(listener, app).await.expect("server failed");
}

mod config;
mod remote;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is normal in deployment.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let remote = match remote::http::HttpRemote::new(&config.api_url, config.timeouts) {
        Ok(remote) => remote,
        Err(e) => {
            tracing::error!(error = %e, "remote client init failed");
            std::process::exit(1);
        }
    };
    tracing::info!(api_url = %config.api_url, cookie_secure = config.cookie_secure, "remote API configured");

    let port = config.port;
    let state = state::AppState::new(Arc::new(remote), config);

    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "leptos app init failed");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "job board listening");
    axum::serve(listener, app).await.expect("server failed");
}

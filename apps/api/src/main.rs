mod assessment;
mod auth;
mod config;
mod errors;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting assessment API v{}", env!("CARGO_PKG_VERSION"));

    // Sessions are in-memory only and vanish on restart
    let state = AppState::new(config.clone());
    info!(
        "Scorer backend: {}, interview prompts: {}",
        state.response_scorer.backend(),
        config.interview_questions.len()
    );

    spawn_session_sweeper(state.clone(), config.session_ttl_secs);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically evicts sessions past their TTL. Sessions created implicitly by a
/// submission are never ended explicitly, so this is what bounds the store.
fn spawn_session_sweeper(state: AppState, ttl_secs: u64) {
    // Capped at a year so the cutoff arithmetic cannot overflow.
    let max_age = chrono::Duration::seconds(ttl_secs.min(365 * 24 * 60 * 60) as i64);
    let period = Duration::from_secs(ttl_secs.clamp(60, 3600));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            state.sessions.sweep_expired(max_age).await;
        }
    });
}

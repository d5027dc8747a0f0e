mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::http::{header, Method};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::rubric::{default_rubric, RoleLevel};
use crate::config::Config;
use crate::llm_client::{ChatBackend, GroqClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_name, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting GridMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Built-in rubric is static data; a malformed edit to it should stop the
    // process here, never surface mid-request.
    let rubric = default_rubric();
    rubric
        .validate()
        .map_err(|e| anyhow::anyhow!("built-in rubric is invalid: {e}"))?;
    info!(
        "Rubric loaded: {}/{}/{} competencies (senior/lead/principal)",
        rubric.skill_count(RoleLevel::Senior),
        rubric.skill_count(RoleLevel::Lead),
        rubric.skill_count(RoleLevel::Principal)
    );

    // Construct the LLM client handle once; every request handler borrows it
    // from state.
    let llm: Option<Arc<dyn ChatBackend>> = match &config.groq_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(GroqClient::new(
                key.clone(),
                Duration::from_secs(config.llm_timeout_secs),
            )))
        }
        None => {
            warn!("GROQ_API_KEY not set — analyze requests will fail until configured");
            None
        }
    };

    // Build app state
    let state = AppState {
        llm,
        rubric: Arc::new(rubric),
    };

    // The front-end is served from a different origin; preflight must pass.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

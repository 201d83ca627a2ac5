mod config;
mod document;
mod enhancement;
mod errors;
mod form;
mod llm_client;
mod models;
mod notifications;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::document::PdfCompiler;
use crate::enhancement::{EnhancementService, LlmEnhancer, SimulatedEnhancer};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume enhancer v{}", env!("CARGO_PKG_VERSION"));

    let enhancer = build_enhancer(&config)?;

    // LaTeX export (Tex Live / MiKTeX pdflatex on PATH by default)
    let compiler = PdfCompiler::new(&config.pdflatex_bin, &config.latex_temp_dir);
    info!(
        "PDF export via `{}` in {}",
        config.pdflatex_bin,
        config.latex_temp_dir.display()
    );

    let sessions = SessionStore::new();
    if config.session_ttl.is_zero() {
        info!("Session eviction disabled");
    } else {
        let every = config.session_ttl.min(MAX_SWEEP_INTERVAL);
        sessions.spawn_sweeper(config.session_ttl, every);
        info!("Evicting sessions idle for {}s", config.session_ttl.as_secs());
    }

    let state = AppState {
        sessions,
        enhancer,
        compiler,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// LLM-backed enhancer when an API key is configured, simulator otherwise.
fn build_enhancer(config: &Config) -> Result<Arc<dyn EnhancementService>> {
    match &config.groq_api_key {
        Some(key) => {
            let llm = match &config.groq_api_url {
                Some(url) => LlmClient::with_url(key.clone(), url.clone())?,
                None => LlmClient::new(key.clone())?,
            };
            info!("LLM enhancer initialized (model: {})", llm_client::MODEL);
            Ok(Arc::new(LlmEnhancer::new(llm)))
        }
        None => {
            info!(
                "GROQ_API_KEY not set; using simulated enhancer ({}ms / {}ms)",
                config.enhance_delay.as_millis(),
                config.re_enhance_delay.as_millis()
            );
            Ok(Arc::new(SimulatedEnhancer::new(
                config.enhance_delay,
                config.re_enhance_delay,
            )))
        }
    }
}

/// Permissive when no origins are configured, otherwise an exact allow-list.
fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }
    let origins = origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin: {o}"))
        })
        .collect::<Result<Vec<_>>>()?;
    info!("CORS restricted to {} origins", origins.len());
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

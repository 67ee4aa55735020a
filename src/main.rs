//! Application entry point for the `safecity-hotspots` backend service.
//!
//! This binary orchestrates the full startup sequence for the crime hotspot
//! dashboard API, including:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing
//! - Generating the synthetic seed dataset and clustering it into hotspots
//! - Mounting all API routes via the `routes` gateway
//! - Binding the Axum HTTP server and serving requests
//!
//! # Environment Variables
//! - `SAFECITY_PORT` (optional) – HTTP port (default: 8080)
//! - `SAFECITY_SEED_EVENTS` (optional) – startup generation trial count (default: 500)
//! - `SAFECITY_DEFAULT_PATROLS` (optional) – fallback patrol count (default: 3)
//! - `SAFECITY_LOG_LEVEL` (optional) – log verbosity (default: `debug`)
//! - `SAFECITY_SPAN_EVENTS` (optional) – span event mode for tracing
//!
//! The seed dataset and its hotspots are computed exactly once here and
//! shared read-only with every request handler; see `snapshot`.
use std::{env, io::IsTerminal, net::SocketAddr, sync::Arc};

use axum::Router;
use dotenvy::dotenv;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use anyhow::Result;

mod config;
mod generator;
mod hotspots;
mod models;
mod patrol;
mod registry;
mod risk;
mod routes;
mod snapshot;

pub use config::Config;

// These are not used here but they are imported to be used by routes/*.rs and
// the pipeline modules, that way refactoring is easier since those modules do
// not need knowledge of models.rs, only of their parent module (main.rs)
pub use models::{
    CrimeEvent, Hotspot, LiveCrime, PatrolAssignment, PoliceStation, RiskPrediction, Severity,
};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    init_tracing();
    dotenv().ok();

    let cfg = config::load_from_env()?;
    cfg.log_config();

    // One-shot startup computation: seed events, then cluster them. The
    // result is immutable for the process lifetime.
    let area_registry = registry::AreaRegistry::bundled();
    let mut rng = rand::thread_rng();
    let snap = snapshot::Snapshot::build(area_registry, cfg.seed_events, &mut rng);

    tracing::info!("Seeded {} synthetic crime events", snap.events.len());
    tracing::info!("Detected {} hotspots", snap.hotspots.len());

    // Build app from routes gateway
    let app: Router = routes::router(Arc::new(snap), cfg.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ---

/// Initialize the global tracing subscriber for structured logging.
///
/// This function configures the [`tracing_subscriber`] with:
/// - Log target, file, and line number output enabled
/// - Color output controlled by TTY detection and `FORCE_COLOR` env var:
///   - `FORCE_COLOR=1|true|yes`: force colors on
///   - `FORCE_COLOR=0|false|no`: force colors off
///   - unset or other values: auto-detect TTY
/// - Span event emission mode controlled by the `SAFECITY_SPAN_EVENTS` env var:
///   - `"full"`       : emit ENTER, EXIT, and CLOSE events with timing
///   - `"enter_exit"` : emit ENTER and EXIT only
///   - unset or other values: emit CLOSE events only (default)
/// - Log level controlled by the `SAFECITY_LOG_LEVEL` env var
///
/// This should be called once at application startup before any logging
/// or tracing macros are invoked. It installs the subscriber globally
/// for the lifetime of the process.
fn init_tracing() {
    // ---
    let span_events = match env::var("SAFECITY_SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    // Determine if we should use colors
    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stdout().is_terminal(),
    };

    // Use RUST_LOG if available, otherwise fall back to SAFECITY_LOG_LEVEL
    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match env::var("SAFECITY_LOG_LEVEL").ok().as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ => "debug",
        };
        EnvFilter::new(level)
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}

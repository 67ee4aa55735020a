//! Live alert refresh endpoint.
//!
//! `GET /api/update` returns a fresh snapshot of just-reported incidents for
//! the frontend's polling loop. Each call is an independent random draw; the
//! alerts have no relation to the seed dataset or to previous snapshots.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Local;
use serde::Serialize;
use tracing::info;

use crate::snapshot::Snapshot;
use crate::{generator, Config, LiveCrime};

// ---

pub fn router() -> Router<(Arc<Snapshot>, Config)> {
    // ---
    Router::new().route("/api/update", get(handler))
}

#[derive(Debug, Serialize)]
struct UpdateResponse {
    new_crimes: Vec<LiveCrime>,
    /// Server wall-clock time of the snapshot, "HH:MM:SS".
    timestamp: String,
}

async fn handler(
    State((snapshot, _config)): State<(Arc<Snapshot>, Config)>,
) -> Json<UpdateResponse> {
    // ---
    info!("GET /api/update");

    let mut rng = rand::thread_rng();
    let new_crimes = generator::live_feed(&snapshot.registry, &mut rng);

    Json(UpdateResponse {
        new_crimes,
        timestamp: Local::now().format("%H:%M:%S").to_string(),
    })
}

//! Aggregate dashboard endpoint.
//!
//! `GET /api/data` returns everything the map frontend draws in one payload:
//! the startup hotspots, per-area risk predictions for the current hour,
//! patrol assignments, a fresh live alert snapshot, the static station
//! locations, and summary counters.

use std::sync::Arc;

use axum::{
    extract::Query, extract::State, routing::get, Json, Router,
};
use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::registry::{police_stations, PREDICTION_AREAS};
use crate::snapshot::Snapshot;
use crate::{
    generator, patrol, risk, Config, Hotspot, LiveCrime, PatrolAssignment, PoliceStation,
    RiskPrediction, Severity,
};

// ---

/// Shown on the dashboard as "prediction accuracy". A fixed demo figure;
/// nothing in the service measures it.
const PLACEHOLDER_ACCURACY: u32 = 87;

pub fn router() -> Router<(Arc<Snapshot>, Config)> {
    // ---
    Router::new().route("/api/data", get(handler))
}

/// Query parameters for the dashboard payload.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Number of patrol units to assign (default from config).
    patrols: Option<usize>,
}

#[derive(Debug, Serialize)]
struct DashboardStats {
    total_crimes: usize,
    high_risk_zones: usize,
    live_alerts: usize,
    prediction_accuracy: u32,
}

#[derive(Debug, Serialize)]
struct DashboardResponse {
    hotspots: Vec<Hotspot>,
    predictions: Vec<RiskPrediction>,
    patrols: Vec<PatrolAssignment>,
    live_crimes: Vec<LiveCrime>,
    police_stations: Vec<PoliceStation>,
    stats: DashboardStats,
}

async fn handler(
    Query(params): Query<DashboardQuery>,
    State((snapshot, config)): State<(Arc<Snapshot>, Config)>,
) -> Json<DashboardResponse> {
    // ---
    info!("GET /api/data");

    let mut rng = rand::thread_rng();
    let current_hour = Local::now().hour();

    // Predictions are recomputed per request for the fixed area list
    let predictions: Vec<RiskPrediction> = PREDICTION_AREAS
        .iter()
        .map(|area| risk::predict_risk(area, current_hour, &mut rng))
        .collect();

    // Patrols rank the startup hotspots; the count is request-tunable
    let num_patrols = params.patrols.unwrap_or(config.default_patrols as usize);
    let patrols = patrol::assign_patrols(&snapshot.hotspots, num_patrols);

    // One live snapshot per request, counted once for the stats block
    let live_crimes = generator::live_feed(&snapshot.registry, &mut rng);

    let stats = DashboardStats {
        total_crimes: snapshot.events.len(),
        high_risk_zones: snapshot
            .hotspots
            .iter()
            .filter(|h| h.severity == Severity::High)
            .count(),
        live_alerts: live_crimes.len(),
        prediction_accuracy: PLACEHOLDER_ACCURACY,
    };

    debug!(
        "GET /api/data - {} hotspots, {} patrols, {} live alerts",
        snapshot.hotspots.len(),
        patrols.len(),
        stats.live_alerts
    );

    Json(DashboardResponse {
        hotspots: snapshot.hotspots.clone(),
        predictions,
        patrols,
        live_crimes,
        police_stations: police_stations(),
        stats,
    })
}

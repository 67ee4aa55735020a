use std::sync::Arc;

use axum::Router;

use crate::snapshot::Snapshot;
use crate::Config;

mod dashboard;
mod health;
mod live;

// ---

pub fn router(snapshot: Arc<Snapshot>, config: Config) -> Router {
    // ---
    Router::new()
        .merge(dashboard::router())
        .merge(live::router())
        .merge(health::router())
        .with_state((snapshot, config))
}

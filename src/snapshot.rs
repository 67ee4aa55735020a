//! Startup snapshot of the synthetic dataset.
//!
//! Built once in `main.rs` before the server starts: seed events are
//! generated and clustered into hotspots, and the result is shared read-only
//! (behind an `Arc`) with every request handler. Nothing mutates a snapshot
//! after construction, so concurrent reads need no locking.

use rand::Rng;

use crate::models::{CrimeEvent, Hotspot};
use crate::registry::AreaRegistry;
use crate::{generator, hotspots};

// ---

/// Immutable startup state shared by all handlers.
#[derive(Debug)]
pub struct Snapshot {
    pub registry: AreaRegistry,
    pub events: Vec<CrimeEvent>,
    pub hotspots: Vec<Hotspot>,
}

impl Snapshot {
    /// Generate `seed_events` trials and cluster the accepted events.
    pub fn build(registry: AreaRegistry, seed_events: u32, rng: &mut impl Rng) -> Self {
        // ---
        let events = generator::generate(seed_events, &registry, rng);
        let hotspots = hotspots::detect_hotspots(&events);

        Snapshot {
            registry,
            events,
            hotspots,
        }
    }
}

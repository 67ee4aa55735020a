//! Patrol assignment over ranked hotspots.

use crate::models::{Hotspot, PatrolAssignment, PatrolStatus};

// ---

/// Assign the busiest hotspots to patrol units, one hotspot per unit.
///
/// Hotspots are ranked by descending `crime_count` with a stable sort, so
/// ties keep their input order. At most `min(num_patrols, hotspots.len())`
/// assignments are returned, with 1-based sequential ids, all Active.
pub fn assign_patrols(hotspots: &[Hotspot], num_patrols: usize) -> Vec<PatrolAssignment> {
    // ---
    let mut ranked: Vec<&Hotspot> = hotspots.iter().collect();
    ranked.sort_by(|a, b| b.crime_count.cmp(&a.crime_count));

    ranked
        .into_iter()
        .take(num_patrols)
        .enumerate()
        .map(|(i, hotspot)| PatrolAssignment {
            id: i as u32 + 1,
            hotspots: vec![hotspot.clone()],
            status: PatrolStatus::Active,
        })
        .collect()
}

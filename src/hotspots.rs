//! Hotspot detection over the seed dataset.
//!
//! Clusters event coordinates with DBSCAN and summarizes each dense cluster
//! as a [`Hotspot`]. Points the clustering marks as noise are dropped. The
//! order of returned hotspots is not part of the contract; grouping goes
//! through a `BTreeMap` keyed by cluster label, which keeps it stable within
//! a run but label values are an artifact of the clustering routine.

use std::collections::BTreeMap;

use dbscan::Classification;

use crate::models::{CrimeEvent, Hotspot, Severity};

// ---

/// DBSCAN neighborhood radius, in degrees.
const CLUSTER_EPS: f64 = 0.01;

/// Minimum neighborhood size for a point to be core.
const CLUSTER_MIN_POINTS: usize = 3;

/// Display radius contributed by each member event, in degrees.
const RADIUS_PER_EVENT: f64 = 0.002;

/// Cluster the event coordinates into hotspots.
///
/// Empty input yields empty output. Every hotspot's `crime_count` equals the
/// number of events in its cluster, and severity is High only above 10
/// members.
pub fn detect_hotspots(events: &[CrimeEvent]) -> Vec<Hotspot> {
    // ---
    if events.is_empty() {
        return Vec::new();
    }

    let coords: Vec<Vec<f64>> = events
        .iter()
        .map(|e| vec![e.latitude, e.longitude])
        .collect();

    let labels = dbscan::cluster(CLUSTER_EPS, CLUSTER_MIN_POINTS, &coords);

    // Group member indices per cluster label, skipping noise
    let mut clusters: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (idx, label) in labels.iter().enumerate() {
        match label {
            Classification::Core(id) | Classification::Edge(id) => {
                clusters.entry(*id).or_default().push(idx);
            }
            Classification::Noise => {}
        }
    }

    let hotspots: Vec<Hotspot> = clusters
        .into_values()
        .map(|members| {
            let count = members.len();
            let (lat_sum, lon_sum) = members
                .iter()
                .fold((0.0, 0.0), |(lat, lon), &i| {
                    (lat + coords[i][0], lon + coords[i][1])
                });

            Hotspot {
                lat: lat_sum / count as f64,
                lon: lon_sum / count as f64,
                radius: RADIUS_PER_EVENT * count as f64,
                crime_count: count,
                severity: Severity::for_cluster_size(count),
            }
        })
        .collect();

    tracing::debug!(
        "Detected {} hotspots from {} events",
        hotspots.len(),
        events.len()
    );
    hotspots
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::models::CrimeType;

    fn event_at(id: u32, latitude: f64, longitude: f64) -> CrimeEvent {
        // ---
        CrimeEvent {
            id,
            date: chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time: "21:15".to_string(),
            crime_type: CrimeType::Theft,
            latitude,
            longitude,
            area: "Dadar".to_string(),
            severity: Severity::Medium,
        }
    }

    #[test]
    fn test_empty_input_yields_no_hotspots() {
        // ---
        assert!(detect_hotspots(&[]).is_empty());
    }

    #[test]
    fn test_minimal_dense_cluster() {
        // ---
        // Three mutually-near points exactly meet the min_points threshold
        let events = vec![
            event_at(0, 19.000, 72.800),
            event_at(1, 19.001, 72.801),
            event_at(2, 19.002, 72.802),
        ];

        let hotspots = detect_hotspots(&events);
        assert_eq!(hotspots.len(), 1);

        let spot = &hotspots[0];
        assert_eq!(spot.crime_count, 3);
        assert_eq!(spot.severity, Severity::Medium);

        // Center is the coordinate-wise mean of the members
        assert!((spot.lat - 19.001).abs() < 1e-9);
        assert!((spot.lon - 72.801).abs() < 1e-9);

        // Display radius scales with membership
        assert!((spot.radius - 0.006).abs() < 1e-12);
    }

    #[test]
    fn test_sparse_points_are_noise() {
        // ---
        // Two near points cannot form a core point with min_points = 3
        let events = vec![event_at(0, 19.000, 72.800), event_at(1, 19.001, 72.801)];
        assert!(detect_hotspots(&events).is_empty());

        // Isolated points far apart are also noise
        let events = vec![
            event_at(0, 19.0, 72.8),
            event_at(1, 19.5, 73.3),
            event_at(2, 18.5, 72.3),
        ];
        assert!(detect_hotspots(&events).is_empty());
    }

    #[test]
    fn test_large_cluster_is_high_severity() {
        // ---
        // Twelve tightly packed points: one cluster, above the High threshold
        let events: Vec<CrimeEvent> = (0..12)
            .map(|i| event_at(i, 19.0 + f64::from(i) * 1e-4, 72.8))
            .collect();

        let hotspots = detect_hotspots(&events);
        assert_eq!(hotspots.len(), 1);
        assert_eq!(hotspots[0].crime_count, 12);
        assert_eq!(hotspots[0].severity, Severity::High);
        assert!((hotspots[0].radius - 0.024).abs() < 1e-12);
    }

    #[test]
    fn test_distant_clusters_stay_separate() {
        // ---
        let mut events: Vec<CrimeEvent> = (0..4)
            .map(|i| event_at(i, 19.0 + f64::from(i) * 1e-3, 72.8))
            .collect();
        events.extend((0..5).map(|i| event_at(100 + i, 19.5 + f64::from(i) * 1e-3, 73.3)));

        let mut hotspots = detect_hotspots(&events);
        hotspots.sort_by(|a, b| a.crime_count.cmp(&b.crime_count));

        assert_eq!(hotspots.len(), 2);
        assert_eq!(hotspots[0].crime_count, 4);
        assert_eq!(hotspots[1].crime_count, 5);

        // Membership counts partition the input: nothing double-counted
        let total: usize = hotspots.iter().map(|h| h.crime_count).sum();
        assert_eq!(total, events.len());
    }
}

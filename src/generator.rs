//! Synthetic crime event source.
//!
//! There is no real ingestion pipeline behind this service; both the startup
//! seed dataset and the "live" alert feed are fabricated here. Acceptance of
//! a seed trial is probabilistic (area base rate scaled by night and weekend
//! multipliers), so `generate(count)` returns *at most* `count` events and
//! the exact length varies run to run. All randomness comes from the caller's
//! `Rng` so tests can pass a seeded generator.

use chrono::{Datelike, Duration, Local, Weekday};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{is_night_hour, CrimeEvent, CrimeType, LiveCrime, Severity};
use crate::registry::AreaRegistry;

// ---

/// Days of history the seed dataset spans.
const HISTORY_DAYS: i64 = 90;

/// Coordinate jitter around the area center for seed events, in degrees.
const SEED_JITTER: f64 = 0.01;

/// Tighter jitter for live alerts, in degrees.
const LIVE_JITTER: f64 = 0.005;

/// Global damping applied to every acceptance probability.
const ACCEPT_DAMPING: f64 = 0.5;

const NIGHT_MULTIPLIER: f64 = 1.8;
const WEEKEND_MULTIPLIER: f64 = 1.5;

/// Upper bound on live alerts returned per feed snapshot.
const LIVE_FEED_MAX: u32 = 10;

fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

// ---

/// Generate the seed dataset of up to `count` events.
///
/// Each trial picks a uniform random area and a random timestamp within the
/// last [`HISTORY_DAYS`] days, then emits an event with probability
/// `crime_rate × night × weekend × 0.5`. Event ids are trial indices, so the
/// output is ordered by trial and ids are unique but not contiguous.
pub fn generate(count: u32, registry: &AreaRegistry, rng: &mut impl Rng) -> Vec<CrimeEvent> {
    // ---
    let mut events = Vec::new();
    let start_date = Local::now().date_naive() - Duration::days(HISTORY_DAYS);

    for id in 0..count {
        let Some(area) = registry.areas().choose(rng) else {
            break;
        };

        let date = start_date + Duration::days(rng.gen_range(0..=HISTORY_DAYS));
        let hour = rng.gen_range(0..24u32);
        let minute = rng.gen_range(0..60u32);

        let night = if is_night_hour(hour) {
            NIGHT_MULTIPLIER
        } else {
            1.0
        };
        let weekend = if is_weekend(date.weekday()) {
            WEEKEND_MULTIPLIER
        } else {
            1.0
        };

        if rng.gen::<f64>() >= area.crime_rate * night * weekend * ACCEPT_DAMPING {
            continue;
        }

        events.push(CrimeEvent {
            id,
            date,
            time: format!("{hour:02}:{minute:02}"),
            crime_type: CrimeType::ALL[rng.gen_range(0..CrimeType::ALL.len())],
            latitude: area.latitude + rng.gen_range(-SEED_JITTER..=SEED_JITTER),
            longitude: area.longitude + rng.gen_range(-SEED_JITTER..=SEED_JITTER),
            area: area.name.to_string(),
            severity: Severity::ALL[rng.gen_range(0..Severity::ALL.len())],
        });
    }

    tracing::debug!("Generated {} events from {} trials", events.len(), count);
    events
}

/// Snapshot of the live alert feed: 0–10 just-reported incidents.
///
/// Stateless and independently randomized per call; alerts are unrelated to
/// the seed dataset and to previous snapshots.
pub fn live_feed(registry: &AreaRegistry, rng: &mut impl Rng) -> Vec<LiveCrime> {
    // ---
    let stamp = Local::now().format("%H:%M").to_string();
    let count = rng.gen_range(0..=LIVE_FEED_MAX);

    let mut alerts = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let Some(area) = registry.areas().choose(rng) else {
            break;
        };

        alerts.push(LiveCrime {
            id: rng.gen_range(1000..=9999),
            timestamp: stamp.clone(),
            crime_type: CrimeType::ALL[rng.gen_range(0..CrimeType::ALL.len())],
            lat: area.latitude + rng.gen_range(-LIVE_JITTER..=LIVE_JITTER),
            lon: area.longitude + rng.gen_range(-LIVE_JITTER..=LIVE_JITTER),
            area: area.name.to_string(),
            status: "Just Reported".to_string(),
        });
    }

    alerts
}

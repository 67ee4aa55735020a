//! Data models for the crime hotspot pipeline.

use chrono::NaiveDate;
use serde::Serialize;

// ---

/// Categories a synthetic crime report can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CrimeType {
    Theft,
    Assault,
    Burglary,
    Robbery,
    Vandalism,
}

impl CrimeType {
    /// All categories, for uniform random draws.
    pub const ALL: [CrimeType; 5] = [
        CrimeType::Theft,
        CrimeType::Assault,
        CrimeType::Burglary,
        CrimeType::Robbery,
        CrimeType::Vandalism,
    ];
}

/// Severity attached to individual events and to hotspots.
///
/// Hotspots only ever carry `Medium` or `High`; `Low` appears on
/// individual events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    // ---
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// Severity of a hotspot with `count` member events.
    pub fn for_cluster_size(count: usize) -> Severity {
        if count > 10 {
            Severity::High
        } else {
            Severity::Medium
        }
    }
}

/// Risk band for an area/hour prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Band for a clamped (unrounded) risk score.
    pub fn for_score(score: f64) -> RiskLevel {
        if score > 0.7 {
            RiskLevel::High
        } else if score > 0.4 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Hours treated as "night" for both generation and risk scoring.
pub fn is_night_hour(hour: u32) -> bool {
    (20..=23).contains(&hour) || hour <= 4
}

// ---

/// One synthetic crime report from the seed generator.
#[derive(Debug, Clone, Serialize)]
pub struct CrimeEvent {
    // ---
    pub id: u32,
    pub date: NaiveDate,
    /// Wall-clock time of the report, "HH:MM".
    pub time: String,
    pub crime_type: CrimeType,
    pub latitude: f64,
    pub longitude: f64,
    pub area: String,
    pub severity: Severity,
}

/// A dense cluster of events with a display radius scaled by size.
#[derive(Debug, Clone, Serialize)]
pub struct Hotspot {
    // ---
    pub lat: f64,
    pub lon: f64,
    /// Map-display radius in degrees, `0.002 × crime_count`.
    pub radius: f64,
    pub crime_count: usize,
    pub severity: Severity,
}

/// Risk estimate for one area at one hour.
#[derive(Debug, Clone, Serialize)]
pub struct RiskPrediction {
    // ---
    pub area: String,
    pub risk_score: f64,
    pub level: RiskLevel,
}

/// Lifecycle of a patrol unit. Assignments are always created active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PatrolStatus {
    Active,
}

/// One patrol unit covering a single ranked hotspot.
#[derive(Debug, Clone, Serialize)]
pub struct PatrolAssignment {
    // ---
    pub id: u32,
    pub hotspots: Vec<Hotspot>,
    pub status: PatrolStatus,
}

/// A just-reported incident from the live feed snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct LiveCrime {
    // ---
    pub id: u32,
    /// Report time, "HH:MM".
    pub timestamp: String,
    pub crime_type: CrimeType,
    pub lat: f64,
    pub lon: f64,
    pub area: String,
    pub status: String,
}

/// Static police station reference data.
#[derive(Debug, Clone, Serialize)]
pub struct PoliceStation {
    // ---
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

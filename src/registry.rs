//! Static geographic reference data for the service.
//!
//! Holds the bundled table of monitored areas (center coordinates plus a base
//! crime rate), the fixed list of areas the dashboard predicts for, and the
//! police station locations. The registry is built once in `main.rs` and
//! passed by reference wherever area data is needed; nothing here is mutated
//! after startup.

use crate::PoliceStation;

// ---

/// One monitored area: display name, center coordinates, and the base
/// probability weight used by the event generator.
#[derive(Debug, Clone)]
pub struct Area {
    // ---
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// Base acceptance weight in [0, 1].
    pub crime_rate: f64,
}

/// Fallback entry returned for names not in the table.
///
/// Lookup is a total function: callers never see an error for an unknown
/// area, they see this neutral entry instead.
pub const DEFAULT_AREA: Area = Area {
    name: "Unknown",
    latitude: 19.0760,
    longitude: 72.8777,
    crime_rate: 0.5,
};

/// Areas the dashboard requests risk predictions for on every call.
pub const PREDICTION_AREAS: [&str; 4] = ["Dadar", "Andheri", "Bandra", "Kurla"];

/// Lookup table over the monitored areas.
#[derive(Debug, Clone)]
pub struct AreaRegistry {
    areas: Vec<Area>,
}

impl AreaRegistry {
    /// Registry with the bundled Mumbai area table.
    pub fn bundled() -> Self {
        // ---
        AreaRegistry {
            areas: vec![
                Area {
                    name: "Dadar",
                    latitude: 19.0176,
                    longitude: 72.8422,
                    crime_rate: 0.8,
                },
                Area {
                    name: "Andheri",
                    latitude: 19.1136,
                    longitude: 72.8697,
                    crime_rate: 0.9,
                },
                Area {
                    name: "Bandra",
                    latitude: 19.0544,
                    longitude: 72.8404,
                    crime_rate: 0.6,
                },
                Area {
                    name: "Colaba",
                    latitude: 18.9066,
                    longitude: 72.8146,
                    crime_rate: 0.7,
                },
                Area {
                    name: "Borivali",
                    latitude: 19.2307,
                    longitude: 72.8567,
                    crime_rate: 0.5,
                },
                Area {
                    name: "Kurla",
                    latitude: 19.0728,
                    longitude: 72.8826,
                    crime_rate: 0.85,
                },
                Area {
                    name: "Vashi",
                    latitude: 19.0820,
                    longitude: 73.0100,
                    crime_rate: 0.4,
                },
            ],
        }
    }

    /// All registered areas.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Area by name, falling back to [`DEFAULT_AREA`] for unknown names.
    pub fn lookup(&self, name: &str) -> &Area {
        // ---
        self.areas
            .iter()
            .find(|a| a.name == name)
            .unwrap_or(&DEFAULT_AREA)
    }
}

/// Fixed police station locations shown on the dashboard map.
pub fn police_stations() -> Vec<PoliceStation> {
    // ---
    vec![
        PoliceStation {
            name: "Colaba PS",
            lat: 18.9066,
            lon: 72.8146,
        },
        PoliceStation {
            name: "Dadar PS",
            lat: 19.0176,
            lon: 72.8422,
        },
        PoliceStation {
            name: "Andheri PS",
            lat: 19.1136,
            lon: 72.8697,
        },
        PoliceStation {
            name: "Bandra PS",
            lat: 19.0544,
            lon: 72.8404,
        },
        PoliceStation {
            name: "Vashi PS",
            lat: 19.0820,
            lon: 73.0100,
        },
    ]
}

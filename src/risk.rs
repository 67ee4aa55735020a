//! Heuristic per-area risk scoring.
//!
//! There is no model behind these numbers: each area carries a hand-tuned
//! base score and a night boost, a uniform perturbation is added, and the
//! result is clamped to [0, 1]. Unknown areas score with [`DEFAULT_RISK`]
//! rather than erroring.

use rand::Rng;

use crate::models::{is_night_hour, RiskLevel, RiskPrediction};

// ---

/// Hand-tuned scoring parameters for one area.
#[derive(Debug, Clone, Copy)]
pub struct RiskParams {
    pub base: f64,
    /// Added to `base` during the night window.
    pub night_boost: f64,
}

/// Parameters used for any area not in [`RISK_TABLE`].
pub const DEFAULT_RISK: RiskParams = RiskParams {
    base: 0.5,
    night_boost: 0.2,
};

const RISK_TABLE: [(&str, RiskParams); 4] = [
    (
        "Dadar",
        RiskParams {
            base: 0.7,
            night_boost: 0.3,
        },
    ),
    (
        "Andheri",
        RiskParams {
            base: 0.8,
            night_boost: 0.4,
        },
    ),
    (
        "Kurla",
        RiskParams {
            base: 0.75,
            night_boost: 0.35,
        },
    ),
    (
        "Bandra",
        RiskParams {
            base: 0.6,
            night_boost: 0.25,
        },
    ),
];

/// Half-width of the uniform perturbation added to every score.
const RISK_JITTER: f64 = 0.1;

// ---

/// Score `area_name` at `hour`.
///
/// The level is derived from the clamped score before rounding, so a score
/// reported as 0.70 can still carry level High. `risk_score` is always in
/// [0, 1] and rounded to 2 decimals.
pub fn predict_risk(area_name: &str, hour: u32, rng: &mut impl Rng) -> RiskPrediction {
    // ---
    let params = RISK_TABLE
        .iter()
        .find(|(name, _)| *name == area_name)
        .map(|(_, params)| *params)
        .unwrap_or(DEFAULT_RISK);

    let mut risk = params.base;
    if is_night_hour(hour) {
        risk += params.night_boost;
    }
    risk += rng.gen_range(-RISK_JITTER..=RISK_JITTER);

    let clamped = risk.clamp(0.0, 1.0);

    RiskPrediction {
        area: area_name.to_string(),
        risk_score: (clamped * 100.0).round() / 100.0,
        level: RiskLevel::for_score(clamped),
    }
}

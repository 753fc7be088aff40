//! Horizontal Layout Risk
//!
//! Additive score for inlet/outlet arrangements that let inflow reach the
//! outlet without sweeping the bulk volume. Risk weights add, credits
//! subtract, and the total is clamped to [0, 100].

use crate::options::{LayoutWeights, Options};
use crate::scenario::{InletOrientation, OutletOrientation, Scenario};

use super::status::Status;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Inlet and outlet closer than this fraction of depth count as stacked
pub const PROXIMITY_FRACTION: f64 = 0.15;
/// Inlet and outlet both above this fraction of depth count as high
pub const HIGH_ELEVATION_FRACTION: f64 = 0.60;

/// Which layout conditions held for a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutFlags {
    pub vertical_proximity: bool,
    pub high_elevation: bool,
    pub inlet_orientation: InletOrientation,
    pub opposite_outlet: bool,
    pub multiple_inlets: bool,
}

impl LayoutFlags {
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let depth = scenario.tank.depth_m;
        let inlet_z = scenario.inlet.elevation_m;
        let outlet_z = scenario.outlet.elevation_m;

        Self {
            vertical_proximity: (inlet_z - outlet_z).abs() < PROXIMITY_FRACTION * depth,
            high_elevation: inlet_z > HIGH_ELEVATION_FRACTION * depth
                && outlet_z > HIGH_ELEVATION_FRACTION * depth,
            inlet_orientation: scenario.inlet.orientation,
            opposite_outlet: scenario.outlet.orientation == OutletOrientation::Opposite,
            multiple_inlets: scenario.inlet.count >= 2,
        }
    }
}

/// Layout score and status
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalAssessment {
    /// Clamped score in [0, 100]
    pub score: f64,
    pub status: Status,
    pub flags: LayoutFlags,
}

/// Unclamped weighted sum of the layout terms that apply.
pub fn raw_layout_score(flags: &LayoutFlags, weights: &LayoutWeights) -> f64 {
    let mut score = 0.0;

    if flags.vertical_proximity {
        score += weights.vertical_proximity;
    }
    if flags.high_elevation {
        score += weights.high_elevation;
    }

    score += match flags.inlet_orientation {
        InletOrientation::Radial => weights.radial_inlet,
        InletOrientation::Tangential => -weights.tangential_credit,
        InletOrientation::Upward => weights.upward_inlet,
        InletOrientation::Downward => -weights.downward_credit,
        InletOrientation::Unknown => 0.0,
    };

    if flags.opposite_outlet {
        score -= weights.opposite_outlet_credit;
    }
    if flags.multiple_inlets {
        score -= weights.multiple_inlet_credit;
    }

    score
}

/// Clamp to [0, 100]; NaN maps to 0.
pub fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        return SCORE_MIN;
    }
    raw.clamp(SCORE_MIN, SCORE_MAX)
}

pub fn status_for_score(score: f64, options: &Options) -> Status {
    if score >= options.layout_fail {
        Status::Fail
    } else if score >= options.layout_warn {
        Status::Warn
    } else {
        Status::Pass
    }
}

/// Score the inlet/outlet layout of a scenario
pub fn evaluate_horizontal(scenario: &Scenario) -> HorizontalAssessment {
    let options = &scenario.options;
    let flags = LayoutFlags::from_scenario(scenario);
    let raw = raw_layout_score(&flags, &options.weights);
    let score = clamp_score(raw);
    let status = status_for_score(score, options);

    tracing::debug!(raw, score, %status, "horizontal assessment");

    HorizontalAssessment { score, status, flags }
}

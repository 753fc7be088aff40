//! Richardson Number
//!
//! Bulk Richardson number of the inflow jet, Ri = g·β·ΔT·L / V².
//! High values mean buoyancy dominates the jet momentum and the inflow is
//! likely to stratify instead of mixing.

use crate::options::LengthScalePolicy;
use crate::utils::hydraulics::{buoyancy_coefficient, GRAVITY};

/// Floor applied to every length scale (m)
pub const MIN_LENGTH_SCALE_M: f64 = 0.05;
/// Upper clamp for the depth-quarter policy (m)
pub const MAX_DEPTH_QUARTER_M: f64 = 2.0;
/// Below this jet velocity (m/s) the inflow carries no usable momentum
pub const MIN_MOMENTUM_VELOCITY: f64 = 1e-4;
/// Temperature differences (K) below this are treated as isothermal
pub const ISOTHERMAL_DELTA_T: f64 = 0.01;

/// Inputs to the Richardson calculation
#[derive(Debug, Clone, Copy)]
pub struct RichardsonInput {
    pub policy: LengthScalePolicy,
    pub nozzle_diameter_m: f64,
    pub tank_diameter_m: f64,
    pub depth_m: f64,
    pub velocity_mps: f64,
    /// Worst-case |T_inflow − T_tank| (K)
    pub delta_t: f64,
    /// Temperature passed to the expansion coefficient (°C)
    pub reference_temp_c: f64,
}

/// Richardson number with its debug terms
#[derive(Debug, Clone, PartialEq)]
pub struct RichardsonResult {
    pub value: f64,
    pub numerator: f64,
    pub denominator: f64,
    pub length_scale_m: f64,
    pub beta: f64,
    /// Set when a non-finite value had to be replaced by 0
    pub advisory: Option<String>,
}

/// Characteristic length (m) selected by `policy`, floored at 5 cm.
pub fn length_scale(
    policy: LengthScalePolicy,
    nozzle_diameter_m: f64,
    tank_diameter_m: f64,
    depth_m: f64,
) -> f64 {
    let raw = match policy {
        LengthScalePolicy::Nozzle => nozzle_diameter_m,
        LengthScalePolicy::DepthQuarter => {
            (0.25 * depth_m).clamp(MIN_LENGTH_SCALE_M, MAX_DEPTH_QUARTER_M)
        }
        LengthScalePolicy::TankHalf => tank_diameter_m.min(depth_m) / 2.0,
    };
    raw.max(MIN_LENGTH_SCALE_M)
}

/// Worst-case temperature contrast between the inflow range and the tank.
pub fn worst_delta_t(inflow_min_c: f64, inflow_max_c: f64, tank_c: f64) -> f64 {
    (inflow_max_c - tank_c).abs().max((inflow_min_c - tank_c).abs())
}

/// Compute the Richardson number.
///
/// Priority order:
/// 1. negligible velocity → +∞
/// 2. isothermal inflow → 0
/// 3. g·β·ΔT·L / V², with non-finite results recovered to 0
pub fn richardson_number(input: &RichardsonInput) -> RichardsonResult {
    let length_scale_m = length_scale(
        input.policy,
        input.nozzle_diameter_m,
        input.tank_diameter_m,
        input.depth_m,
    );
    let beta = buoyancy_coefficient(input.reference_temp_c);
    let mut numerator = GRAVITY * beta * input.delta_t * length_scale_m;
    let mut denominator = input.velocity_mps.powi(2);

    let mut advisory = None;
    let value = if input.velocity_mps <= MIN_MOMENTUM_VELOCITY {
        f64::INFINITY
    } else if input.delta_t.abs() < ISOTHERMAL_DELTA_T {
        0.0
    } else {
        let ri = numerator / denominator;
        if ri.is_finite() {
            ri
        } else {
            tracing::warn!(numerator, denominator, "non-finite Richardson number reset to 0");
            advisory = Some(format!(
                "Richardson number was not finite (numerator {}, denominator {}); reported as 0",
                numerator, denominator
            ));
            if !numerator.is_finite() {
                numerator = 0.0;
            }
            if !denominator.is_finite() {
                denominator = 0.0;
            }
            0.0
        }
    };

    RichardsonResult {
        value,
        numerator,
        denominator,
        length_scale_m,
        beta,
        advisory,
    }
}

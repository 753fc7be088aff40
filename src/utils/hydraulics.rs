//! Hydraulic Helpers
//!
//! Closed-form relations for nozzle flow and tank geometry. All helpers
//! return 0 instead of dividing by a zero or negative denominator.

use std::f64::consts::PI;

/// Gravitational acceleration (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Thermal expansion coefficient of water (1/K).
///
/// Fixed approximation; a temperature-dependent model would replace
/// [`buoyancy_coefficient`] without changing its signature.
pub const WATER_BETA: f64 = 2.1e-4;

/// Nozzle cross-section (m²) from its diameter in millimetres.
pub fn nozzle_area(diameter_mm: f64) -> f64 {
    let d_m = diameter_mm / 1000.0;
    PI * (d_m / 2.0).powi(2)
}

/// Geometric volume (m³) of a vertical cylinder.
pub fn tank_volume_cyl(diameter_m: f64, depth_m: f64) -> f64 {
    PI / 4.0 * diameter_m.powi(2) * depth_m
}

/// Mean jet velocity (m/s) per nozzle.
///
/// Total flow (L/s) is split evenly across `count` nozzles of area `area_m2`.
pub fn inlet_velocity(flow_lps: f64, area_m2: f64, count: u32) -> f64 {
    if area_m2 <= 0.0 || count == 0 {
        return 0.0;
    }
    let q_per_inlet = flow_lps / 1000.0 / count as f64;
    q_per_inlet / area_m2
}

/// Volumetric expansion coefficient β (1/K).
///
/// Currently independent of temperature.
pub fn buoyancy_coefficient(_temp_c: f64) -> f64 {
    WATER_BETA
}

/// Inlet Froude number V / √(g·L).
pub fn froude_inlet(velocity_mps: f64, nozzle_diameter_m: f64) -> f64 {
    if nozzle_diameter_m <= 0.0 {
        return 0.0;
    }
    velocity_mps / (GRAVITY * nozzle_diameter_m).sqrt()
}

/// Fraction of the tank volume replaced by one fill event.
pub fn turnover_ratio(fill_volume_m3: f64, tank_volume_m3: f64) -> f64 {
    if tank_volume_m3 <= 0.0 {
        return 0.0;
    }
    fill_volume_m3 / tank_volume_m3
}

/// Nozzle diameter (m) that carries `q_per_inlet_m3s` at `target_velocity_mps`.
///
/// Inverse of the orifice area relation: d = √(4q / (π·V)).
pub fn diameter_for_velocity(q_per_inlet_m3s: f64, target_velocity_mps: f64) -> f64 {
    if target_velocity_mps <= 0.0 || q_per_inlet_m3s <= 0.0 {
        return 0.0;
    }
    (4.0 * q_per_inlet_m3s / (PI * target_velocity_mps)).sqrt()
}

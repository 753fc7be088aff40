//! Utility modules for the mixing assessment
//!
//! Contains the physical helpers shared by every assessment stage:
//! - Hydraulics: nozzle area, jet velocity, Froude number, turnover ratio

pub mod hydraulics;

// Re-export commonly used helpers
pub use hydraulics::{
    nozzle_area, tank_volume_cyl, inlet_velocity, buoyancy_coefficient,
    froude_inlet, turnover_ratio, diameter_for_velocity, GRAVITY, WATER_BETA,
};

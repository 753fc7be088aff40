//! Scenario definition and reference layouts
//!
//! A `Scenario` is the single input unit of the engine: one tank, its inlet
//! and outlet arrangement, the operating regime and the water temperatures,
//! together with the evaluation options.

use serde::{Deserialize, Serialize};

use crate::options::Options;

/// Tank geometry. Only vertical cylinders are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TankShape {
    #[default]
    Cylindrical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InletOrientation {
    /// Jet aimed at the tank centre
    Radial,
    /// Jet aimed along the wall, inducing swirl
    Tangential,
    Upward,
    Downward,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutletOrientation {
    /// Outlet on the far side of the tank from the inlet
    Opposite,
    Radial,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tank {
    pub shape: TankShape,

    /// Internal diameter (m)
    pub diameter_m: f64,

    /// Water depth at the evaluated level (m)
    pub depth_m: f64,

    /// Operating storage (m³), 0 when not specified
    pub operating_volume_m3: f64,

    /// Reserve / unusable storage (m³), 0 when not specified
    pub reserve_volume_m3: f64,
}

impl Default for Tank {
    fn default() -> Self {
        Self {
            shape: TankShape::Cylindrical,
            diameter_m: 10.0,
            depth_m: 5.0,
            operating_volume_m3: 300.0,
            reserve_volume_m3: 60.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inlet {
    /// Number of identical inlet nozzles sharing the flow
    pub count: u32,

    /// Nozzle centreline height above the floor (m)
    pub elevation_m: f64,

    /// Nozzle internal diameter (mm)
    pub nozzle_diameter_mm: f64,

    pub orientation: InletOrientation,

    /// Inclination from horizontal (degrees). Carried but not evaluated.
    pub inclination_deg: f64,
}

impl Default for Inlet {
    fn default() -> Self {
        Self {
            count: 1,
            elevation_m: 1.2,
            nozzle_diameter_mm: 150.0,
            orientation: InletOrientation::Tangential,
            inclination_deg: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Outlet {
    /// Outlet centreline height above the floor (m)
    pub elevation_m: f64,
    pub orientation: OutletOrientation,
}

impl Default for Outlet {
    fn default() -> Self {
        Self {
            elevation_m: 0.3,
            orientation: OutletOrientation::Opposite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Operation {
    /// Inflow rate during a fill event (L/s)
    pub inflow_lps: f64,

    /// Volume delivered by one fill event (m³)
    pub fill_volume_m3: f64,

    /// Fill events per day. Carried but not evaluated.
    pub fills_per_day: f64,
}

impl Default for Operation {
    fn default() -> Self {
        Self {
            inflow_lps: 20.0,
            fill_volume_m3: 90.0,
            fills_per_day: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Water {
    /// Coldest expected inflow temperature (°C)
    pub inflow_temp_min_c: f64,

    /// Warmest expected inflow temperature (°C)
    pub inflow_temp_max_c: f64,

    /// Bulk tank temperature before the fill (°C)
    pub tank_temp_c: f64,
}

impl Default for Water {
    fn default() -> Self {
        Self {
            inflow_temp_min_c: 10.0,
            inflow_temp_max_c: 14.0,
            tank_temp_c: 12.0,
        }
    }
}

/// Complete evaluation input.
///
/// Treated as immutable by the engine; evaluating never modifies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    pub tank: Tank,
    pub inlet: Inlet,

    #[serde(default)]
    pub outlet: Outlet,

    #[serde(default)]
    pub operation: Operation,

    #[serde(default)]
    pub water: Water,

    #[serde(default)]
    pub options: Options,
}

impl Scenario {
    /// Default example: 10 m × 5 m tank fed by one 150 mm nozzle at 20 L/s.
    pub fn default_example() -> Self {
        Self {
            id: "example".to_string(),
            name: "Example reservoir".to_string(),
            tank: Tank::default(),
            inlet: Inlet::default(),
            outlet: Outlet::default(),
            operation: Operation::default(),
            water: Water::default(),
            options: Options::default(),
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::default_example()
    }
}

// ============================================================================
// Reference Layouts
// ============================================================================

/// Inlet and outlet stacked close together high in the tank.
/// Typical short-circuiting arrangement.
pub fn high_stacked_layout() -> Scenario {
    Scenario {
        id: "high_stacked".to_string(),
        name: "High stacked inlet/outlet".to_string(),
        inlet: Inlet {
            elevation_m: 4.0,
            orientation: InletOrientation::Radial,
            ..Inlet::default()
        },
        outlet: Outlet {
            elevation_m: 3.6,
            orientation: OutletOrientation::Radial,
        },
        ..Scenario::default_example()
    }
}

/// Warm inflow into a cold tank through an oversized, high nozzle.
/// Buoyant jet that stays in the upper layer.
pub fn warm_inflow_layout() -> Scenario {
    Scenario {
        id: "warm_inflow".to_string(),
        name: "Warm inflow, high wide nozzle".to_string(),
        inlet: Inlet {
            elevation_m: 3.0,
            nozzle_diameter_mm: 400.0,
            ..Inlet::default()
        },
        water: Water {
            inflow_temp_min_c: 16.0,
            inflow_temp_max_c: 22.0,
            tank_temp_c: 10.0,
        },
        ..Scenario::default_example()
    }
}

/// All reference layouts, default example first.
pub fn reference_layouts() -> Vec<Scenario> {
    vec![
        Scenario::default_example(),
        high_stacked_layout(),
        warm_inflow_layout(),
    ]
}

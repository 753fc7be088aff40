//! Tank Mixing Assessment
//!
//! Screens the inlet/outlet layout and fill regime of a cylindrical water
//! storage tank for mixing problems using closed-form hydraulic and buoyancy
//! heuristics. No simulation is involved; every evaluation is a pure function
//! of its `Scenario`.
//!
//! Module structure:
//! - `scenario`: Input records and reference layouts
//! - `options`: Thresholds, layout weights and presets
//! - `utils/`: Hydraulic helper formulas
//! - `assessment/`: Richardson number, vertical rules, layout score, verdict, advice
//! - `evaluator`: Pipeline coordinator
//! - `interchange`: JSON import/export

pub mod error;
pub mod scenario;
pub mod options;
pub mod utils;
pub mod assessment;
pub mod evaluator;
pub mod interchange;

// Re-export commonly used types
pub use error::{ConfigError, InterchangeError};
pub use scenario::{Scenario, Tank, Inlet, Outlet, Operation, Water, InletOrientation, OutletOrientation, TankShape};
pub use options::{Options, Conservatism, LengthScalePolicy, LayoutWeights};
pub use assessment::{Evaluation, Metrics, Recommendation, Status, DominantRisk, JetPenetration};
pub use evaluator::{evaluate, evaluate_all};
pub use interchange::{
    scenario_to_json, scenario_from_json, scenarios_from_json, evaluation_to_json, load_scenario,
};

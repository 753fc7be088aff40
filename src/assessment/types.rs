//! Output records of a mixing evaluation

use serde::{Deserialize, Deserializer, Serialize};

use super::status::Status;

/// How far the inflow jet is expected to reach into a stratified tank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JetPenetration {
    /// No stable stratification expected; the jet can reach the full depth
    #[default]
    Full,
    /// Low inlet in a stratified tank; mixing confined to the bottom layer
    Bottom,
    Partial,
    /// High inlet in a stratified tank; the lower volume is never reached
    UpperLayerOnly,
}

/// Single named cause behind a non-passing verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominantRisk {
    Buoyancy,
    ShortCircuit,
    InsufficientMomentum,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Momentum,
    Stratification,
    Buoyancy,
    Turnover,
    Layout,
    ShortCircuit,
    Geometry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Actionable design suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,                        // "reduce_nozzle_diameter", "lower_inlet", ...
    pub category: RecommendationCategory,
    pub message: String,
    pub priority: Priority,
}

impl Recommendation {
    pub fn new(
        id: &str,
        category: RecommendationCategory,
        priority: Priority,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.to_string(),
            category,
            message: message.into(),
            priority,
        }
    }
}

/// Intermediate and final numbers behind an evaluation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    pub nozzle_area_m2: f64,
    pub inlet_velocity_mps: f64,
    pub target_velocity_mps: f64,
    pub froude_number: f64,

    /// Richardson number; +∞ when the jet carries no momentum
    #[serde(deserialize_with = "infinity_from_null")]
    pub richardson_number: f64,
    pub richardson_numerator: f64,
    pub richardson_denominator: f64,
    pub richardson_length_scale_m: f64,
    pub richardson_beta: f64,

    pub turnover_ratio: f64,
    pub jet_penetration: JetPenetration,
    pub horizontal_risk_score: f64,

    pub geometric_volume_m3: f64,
    /// Operating + reserve storage when specified, otherwise geometric
    pub effective_volume_m3: f64,

    /// |T_inflow_max − T_tank|
    pub delta_t_max: f64,
    /// |T_inflow_min − T_tank|
    pub delta_t_min: f64,
    /// Worst case of the two, used by the buoyancy checks
    pub delta_t_used: f64,
}

/// Complete evaluation of one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub scenario_id: String,
    pub vertical_status: Status,
    pub horizontal_status: Status,
    pub overall_status: Status,
    pub dominant_risk: DominantRisk,
    pub metrics: Metrics,
    pub recommendations: Vec<Recommendation>,
    /// Advisory notes about inconsistent input or recovered numerics
    pub validity: Vec<String>,
}

impl Evaluation {
    pub fn has_recommendation(&self, id: &str) -> bool {
        self.recommendations.iter().any(|r| r.id == id)
    }
}

/// serde_json writes non-finite floats as `null`; read `null` back as +∞.
fn infinity_from_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

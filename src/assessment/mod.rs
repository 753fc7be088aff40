//! Mixing Assessment Engine
//!
//! Judges whether a tank's inlet/outlet layout and fill regime will mix the
//! stored volume, using closed-form hydraulic and buoyancy heuristics.
//!
//! ## Architecture
//! - `status.rs` - PASS/WARN/FAIL severity and the escalation fold
//! - `richardson.rs` - Richardson number with length-scale policies
//! - `vertical.rs` - Momentum, penetration, buoyancy and turnover rules
//! - `horizontal.rs` - Weighted layout risk score
//! - `aggregate.rs` - Overall verdict and dominant risk
//! - `advice.rs` - Design recommendations
//! - `types.rs` - Output records

pub mod status;
pub mod richardson;
pub mod vertical;
pub mod horizontal;
pub mod aggregate;
pub mod advice;
pub mod types;

// Re-export public API
pub use status::{Status, escalate, Escalation, Finding, Rule};
pub use richardson::{richardson_number, length_scale, worst_delta_t, RichardsonInput, RichardsonResult};
pub use vertical::{evaluate_vertical, VerticalAssessment, VerticalContext};
pub use horizontal::{evaluate_horizontal, HorizontalAssessment, LayoutFlags};
pub use aggregate::{overall_status, dominant_risk, RiskInputs};
pub use advice::{generate_recommendations, AdviceInputs};
pub use types::{
    Evaluation,
    Metrics,
    Recommendation,
    RecommendationCategory,
    Priority,
    DominantRisk,
    JetPenetration,
};

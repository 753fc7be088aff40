//! Vertical Mixing Assessment
//!
//! Decides whether the inflow jet can overturn the full water column.
//! Rules run in a fixed order and can only raise the severity:
//!
//! 1. Momentum: jet velocity against the target velocity
//! 2. Penetration: a high inlet in a stably stratified tank forces FAIL
//! 3. Richardson thresholds (skipped once penetration has failed)
//! 4. Turnover: low replacement per fill, only when nothing else fired
//!
//! Ordering matters for the recommendation text: when stratification and
//! the Richardson threshold both fire, the stratification message comes first.

use super::status::{escalate, Escalation, Finding, Rule, Status};
use super::types::{JetPenetration, Priority, Recommendation, RecommendationCategory};

/// Minimum |ΔT| (K) for a stable stratification to be plausible
pub const STRATIFICATION_DELTA_T: f64 = 2.0;

/// Everything the vertical rules look at
#[derive(Debug, Clone, Copy)]
pub struct VerticalContext {
    pub velocity_mps: f64,
    pub target_velocity_mps: f64,
    pub delta_t: f64,
    pub richardson: f64,
    pub ri_warn: f64,
    pub ri_fail: f64,
    pub turnover_ratio: f64,
    pub turnover_warn: f64,
    pub inlet_elevation_m: f64,
    pub depth_m: f64,
}

impl VerticalContext {
    /// ΔT large enough and buoyancy dominant
    pub fn stratification_likely(&self) -> bool {
        self.delta_t >= STRATIFICATION_DELTA_T && self.richardson > self.ri_warn
    }

    /// Expected jet reach, derived from inlet height when stratification is likely.
    pub fn penetration(&self) -> JetPenetration {
        if !self.stratification_likely() {
            return JetPenetration::Full;
        }
        if self.inlet_elevation_m > 0.5 * self.depth_m {
            JetPenetration::UpperLayerOnly
        } else if self.inlet_elevation_m > 0.25 * self.depth_m {
            JetPenetration::Partial
        } else {
            JetPenetration::Bottom
        }
    }
}

/// Result of the vertical rule chain
#[derive(Debug, Clone)]
pub struct VerticalAssessment {
    pub status: Status,
    pub penetration: JetPenetration,
    pub recommendations: Vec<Recommendation>,
}

type VerticalRule = Rule<VerticalContext, Recommendation>;

const VERTICAL_RULES: [VerticalRule; 4] = [
    momentum_rule,
    penetration_rule,
    richardson_rule,
    turnover_rule,
];

/// Run the vertical rule chain
pub fn evaluate_vertical(ctx: &VerticalContext) -> VerticalAssessment {
    let Escalation { status, outputs } = escalate(ctx, &VERTICAL_RULES);
    let penetration = ctx.penetration();

    tracing::debug!(%status, ?penetration, fired = outputs.len(), "vertical assessment");

    VerticalAssessment {
        status,
        penetration,
        recommendations: outputs,
    }
}

fn momentum_rule(
    ctx: &VerticalContext,
    _acc: &Escalation<Recommendation>,
) -> Option<Finding<Recommendation>> {
    let v = ctx.velocity_mps;
    let target = ctx.target_velocity_mps;

    if v < 0.5 * target {
        Some(Finding::new(
            Status::Fail,
            Recommendation::new(
                "insufficient_momentum",
                RecommendationCategory::Momentum,
                Priority::High,
                format!(
                    "Inlet velocity {:.2} m/s is below half the target of {:.2} m/s; \
                     the jet cannot drive mixing through the tank",
                    v, target
                ),
            ),
        ))
    } else if v < target {
        Some(Finding::new(
            Status::Warn,
            Recommendation::new(
                "low_momentum",
                RecommendationCategory::Momentum,
                Priority::Medium,
                format!(
                    "Inlet velocity {:.2} m/s is below the target of {:.2} m/s; \
                     mixing may be incomplete",
                    v, target
                ),
            ),
        ))
    } else {
        None
    }
}

fn penetration_rule(
    ctx: &VerticalContext,
    _acc: &Escalation<Recommendation>,
) -> Option<Finding<Recommendation>> {
    (ctx.penetration() == JetPenetration::UpperLayerOnly).then(|| {
        Finding::new(
            Status::Fail,
            Recommendation::new(
                "stratification",
                RecommendationCategory::Stratification,
                Priority::High,
                format!(
                    "Stable stratification likely (ΔT {:.1} K, Ri {:.2}); an inlet above \
                     mid-depth will only mix the upper layer",
                    ctx.delta_t, ctx.richardson
                ),
            ),
        )
    })
}

fn richardson_rule(
    ctx: &VerticalContext,
    acc: &Escalation<Recommendation>,
) -> Option<Finding<Recommendation>> {
    if acc.status == Status::Fail && ctx.penetration() == JetPenetration::UpperLayerOnly {
        return None;
    }

    let ri = ctx.richardson;
    if ri > ctx.ri_fail {
        Some(Finding::new(
            Status::Fail,
            Recommendation::new(
                "buoyancy_dominated",
                RecommendationCategory::Buoyancy,
                Priority::High,
                format!(
                    "Richardson number {:.2} exceeds the fail threshold {:.2}; \
                     buoyancy dominates the inflow jet",
                    ri, ctx.ri_fail
                ),
            ),
        ))
    } else if ri > ctx.ri_warn {
        Some(Finding::new(
            Status::Warn,
            Recommendation::new(
                "buoyancy_significant",
                RecommendationCategory::Buoyancy,
                Priority::Medium,
                format!(
                    "Richardson number {:.2} exceeds the warning threshold {:.2}; \
                     buoyancy may limit jet penetration",
                    ri, ctx.ri_warn
                ),
            ),
        ))
    } else {
        None
    }
}

fn turnover_rule(
    ctx: &VerticalContext,
    acc: &Escalation<Recommendation>,
) -> Option<Finding<Recommendation>> {
    (ctx.turnover_ratio < ctx.turnover_warn && acc.status.is_pass()).then(|| {
        Finding::new(
            Status::Warn,
            Recommendation::new(
                "low_turnover",
                RecommendationCategory::Turnover,
                Priority::Low,
                format!(
                    "Each fill replaces {:.0}% of the tank volume, below the {:.0}% warning level",
                    ctx.turnover_ratio * 100.0,
                    ctx.turnover_warn * 100.0
                ),
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> VerticalContext {
        VerticalContext {
            velocity_mps: 1.0,
            target_velocity_mps: 0.8,
            delta_t: 1.0,
            richardson: 0.1,
            ri_warn: 1.0,
            ri_fail: 10.0,
            turnover_ratio: 0.3,
            turnover_warn: 0.2,
            inlet_elevation_m: 0.5,
            depth_m: 5.0,
        }
    }

    fn ids(assessment: &VerticalAssessment) -> Vec<&str> {
        assessment.recommendations.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_all_clear_passes() {
        let result = evaluate_vertical(&ctx());
        assert_eq!(result.status, Status::Pass);
        assert_eq!(result.penetration, JetPenetration::Full);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_momentum_thresholds() {
        let warn = evaluate_vertical(&VerticalContext { velocity_mps: 0.5, ..ctx() });
        assert_eq!(warn.status, Status::Warn);
        assert_eq!(ids(&warn), vec!["low_momentum"]);

        let fail = evaluate_vertical(&VerticalContext { velocity_mps: 0.39, ..ctx() });
        assert_eq!(fail.status, Status::Fail);
        assert_eq!(ids(&fail), vec!["insufficient_momentum"]);
    }

    #[test]
    fn test_penetration_classes() {
        let stratified = VerticalContext { delta_t: 5.0, richardson: 2.0, ..ctx() };
        assert_eq!(
            VerticalContext { inlet_elevation_m: 1.0, ..stratified }.penetration(),
            JetPenetration::Bottom
        );
        assert_eq!(
            VerticalContext { inlet_elevation_m: 2.0, ..stratified }.penetration(),
            JetPenetration::Partial
        );
        assert_eq!(
            VerticalContext { inlet_elevation_m: 3.0, ..stratified }.penetration(),
            JetPenetration::UpperLayerOnly
        );

        // Ri above warn but ΔT below 2 K is not stratified
        let weak = VerticalContext { delta_t: 1.9, richardson: 2.0, inlet_elevation_m: 3.0, ..ctx() };
        assert_eq!(weak.penetration(), JetPenetration::Full);
    }

    #[test]
    fn test_upper_layer_escalates_from_warn_and_skips_richardson() {
        let c = VerticalContext {
            velocity_mps: 0.6,
            delta_t: 5.0,
            richardson: 20.0,
            inlet_elevation_m: 3.0,
            ..ctx()
        };
        let result = evaluate_vertical(&c);
        assert_eq!(result.status, Status::Fail);
        assert_eq!(ids(&result), vec!["low_momentum", "stratification"]);
    }

    #[test]
    fn test_richardson_runs_after_momentum_fail() {
        let c = VerticalContext { velocity_mps: 0.1, richardson: 20.0, ..ctx() };
        let result = evaluate_vertical(&c);
        assert_eq!(result.status, Status::Fail);
        assert_eq!(ids(&result), vec!["insufficient_momentum", "buoyancy_dominated"]);
    }

    #[test]
    fn test_richardson_warn_does_not_downgrade_fail() {
        let c = VerticalContext { velocity_mps: 0.1, richardson: 2.0, ..ctx() };
        let result = evaluate_vertical(&c);
        assert_eq!(result.status, Status::Fail);
        assert_eq!(ids(&result), vec!["insufficient_momentum", "buoyancy_significant"]);
    }

    #[test]
    fn test_partial_penetration_warns_through_richardson() {
        let c = VerticalContext {
            delta_t: 5.0,
            richardson: 2.0,
            inlet_elevation_m: 2.0,
            ..ctx()
        };
        let result = evaluate_vertical(&c);
        assert_eq!(result.status, Status::Warn);
        assert_eq!(result.penetration, JetPenetration::Partial);
        assert_eq!(ids(&result), vec!["buoyancy_significant"]);
    }

    #[test]
    fn test_turnover_only_when_passing() {
        let low = VerticalContext { turnover_ratio: 0.1, ..ctx() };
        let result = evaluate_vertical(&low);
        assert_eq!(result.status, Status::Warn);
        assert_eq!(ids(&result), vec!["low_turnover"]);

        let already_warn = VerticalContext { turnover_ratio: 0.1, velocity_mps: 0.6, ..ctx() };
        let result = evaluate_vertical(&already_warn);
        assert_eq!(result.status, Status::Warn);
        assert_eq!(ids(&result), vec!["low_momentum"]);
    }

    #[test]
    fn test_infinite_richardson_fails() {
        let c = VerticalContext { velocity_mps: 0.0, richardson: f64::INFINITY, ..ctx() };
        let result = evaluate_vertical(&c);
        assert_eq!(result.status, Status::Fail);
        assert_eq!(result.penetration, JetPenetration::Full);
    }
}

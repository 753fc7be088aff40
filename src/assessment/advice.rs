//! Recommendation Generation
//!
//! Design suggestions derived directly from the scenario and the computed
//! metrics. These rules are independent of the vertical rule chain and may
//! fire even when no status escalation produced text.

use crate::scenario::{InletOrientation, Scenario};
use crate::utils::hydraulics::diameter_for_velocity;

use super::horizontal::{LayoutFlags, PROXIMITY_FRACTION, HIGH_ELEVATION_FRACTION};
use super::status::Status;
use super::types::{Priority, Recommendation, RecommendationCategory};

/// Inlet height (fraction of depth) above which lowering is suggested
pub const LOW_INLET_FRACTION: f64 = 0.25;

/// Values the recommendation rules need beyond the scenario itself
#[derive(Debug, Clone, Copy)]
pub struct AdviceInputs {
    pub velocity_mps: f64,
    pub target_velocity_mps: f64,
    pub vertical: Status,
    pub horizontal: Status,
    pub flags: LayoutFlags,
}

/// Generate recommendations in a stable order:
/// geometry, nozzle sizing, inlet height, layout.
pub fn generate_recommendations(scenario: &Scenario, inputs: &AdviceInputs) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    recs.extend(geometry_recommendations(scenario));
    recs.extend(nozzle_recommendation(scenario, inputs));
    recs.extend(inlet_height_recommendation(scenario, inputs));
    recs.extend(layout_recommendations(scenario, inputs));

    recs
}

fn geometry_recommendations(scenario: &Scenario) -> Vec<Recommendation> {
    let depth = scenario.tank.depth_m;
    let mut recs = Vec::new();

    if scenario.inlet.elevation_m > depth {
        recs.push(Recommendation::new(
            "inlet_above_water",
            RecommendationCategory::Geometry,
            Priority::High,
            format!(
                "Inlet elevation {:.2} m is above the water depth {:.2} m; the inlet discharges \
                 into air at this level",
                scenario.inlet.elevation_m, depth
            ),
        ));
    }
    if scenario.outlet.elevation_m > depth {
        recs.push(Recommendation::new(
            "outlet_above_water",
            RecommendationCategory::Geometry,
            Priority::High,
            format!(
                "Outlet elevation {:.2} m is above the water depth {:.2} m; the outlet cannot draw \
                 water at this level",
                scenario.outlet.elevation_m, depth
            ),
        ));
    }

    recs
}

/// Size the nozzle for exactly the target velocity.
fn nozzle_recommendation(scenario: &Scenario, inputs: &AdviceInputs) -> Option<Recommendation> {
    let target = inputs.target_velocity_mps;
    if inputs.velocity_mps >= target {
        return None;
    }

    let count = scenario.inlet.count.max(1);
    let q_per_inlet = scenario.operation.inflow_lps / 1000.0 / count as f64;

    if q_per_inlet <= 0.0 {
        return Some(Recommendation::new(
            "increase_inflow",
            RecommendationCategory::Momentum,
            Priority::High,
            "No inflow is specified; the inlet cannot provide mixing momentum",
        ));
    }

    let target_d_mm = diameter_for_velocity(q_per_inlet, target) * 1000.0;
    let priority = if inputs.velocity_mps < 0.5 * target {
        Priority::High
    } else {
        Priority::Medium
    };

    Some(Recommendation::new(
        "reduce_nozzle_diameter",
        RecommendationCategory::Momentum,
        priority,
        format!(
            "Reduce the nozzle diameter from {:.0} mm to about {:.0} mm to reach the target \
             velocity of {:.2} m/s ({:.1} L/s per inlet)",
            scenario.inlet.nozzle_diameter_mm,
            target_d_mm,
            target,
            q_per_inlet * 1000.0
        ),
    ))
}

fn inlet_height_recommendation(scenario: &Scenario, inputs: &AdviceInputs) -> Option<Recommendation> {
    let limit = LOW_INLET_FRACTION * scenario.tank.depth_m;
    if scenario.inlet.elevation_m <= limit || inputs.vertical.is_pass() {
        return None;
    }

    Some(Recommendation::new(
        "lower_inlet",
        RecommendationCategory::Stratification,
        Priority::Medium,
        format!(
            "Lower the inlet from {:.2} m to {:.2} m or less (25% of depth) so the jet starts \
             below the layer it needs to mix",
            scenario.inlet.elevation_m, limit
        ),
    ))
}

fn layout_recommendations(scenario: &Scenario, inputs: &AdviceInputs) -> Vec<Recommendation> {
    let flags = &inputs.flags;
    let depth = scenario.tank.depth_m;
    let mut recs = Vec::new();

    if flags.vertical_proximity {
        let priority = if inputs.horizontal == Status::Fail {
            Priority::High
        } else {
            Priority::Medium
        };
        recs.push(Recommendation::new(
            "short_circuit",
            RecommendationCategory::ShortCircuit,
            priority,
            format!(
                "Inlet and outlet are within {:.2} m of each other vertically; short-circuiting \
                 is likely. Separate them by at least {:.2} m",
                (scenario.inlet.elevation_m - scenario.outlet.elevation_m).abs(),
                PROXIMITY_FRACTION * depth
            ),
        ));
    }

    if flags.high_elevation {
        recs.push(Recommendation::new(
            "lower_inlet_outlet",
            RecommendationCategory::Layout,
            Priority::Medium,
            format!(
                "Inlet and outlet both sit above {:.2} m (60% of depth); the lower volume \
                 is bypassed",
                HIGH_ELEVATION_FRACTION * depth
            ),
        ));
    }

    match flags.inlet_orientation {
        InletOrientation::Radial => recs.push(Recommendation::new(
            "tangential_inlet",
            RecommendationCategory::Layout,
            Priority::Low,
            "A radial inlet jet crosses the tank directly; a tangential inlet sets up \
             circulation along the wall",
        )),
        InletOrientation::Upward => recs.push(Recommendation::new(
            "avoid_upward_inlet",
            RecommendationCategory::Layout,
            Priority::Low,
            "An upward inlet jet carries inflow to the surface layer; consider a horizontal \
             tangential or downward inlet",
        )),
        _ => {}
    }

    if !inputs.horizontal.is_pass() {
        if !flags.opposite_outlet {
            recs.push(Recommendation::new(
                "opposite_outlet",
                RecommendationCategory::Layout,
                Priority::Low,
                "Place the outlet on the opposite side of the tank from the inlet",
            ));
        }
        if !flags.multiple_inlets {
            recs.push(Recommendation::new(
                "multiple_inlets",
                RecommendationCategory::Layout,
                Priority::Low,
                "Splitting the inflow across two or more inlets distributes mixing energy",
            ));
        }
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{high_stacked_layout, Scenario};
    use approx::assert_relative_eq;

    fn inputs_for(scenario: &Scenario, velocity: f64, vertical: Status, horizontal: Status) -> AdviceInputs {
        AdviceInputs {
            velocity_mps: velocity,
            target_velocity_mps: 0.8,
            vertical,
            horizontal,
            flags: LayoutFlags::from_scenario(scenario),
        }
    }

    fn ids(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_nothing_for_good_design() {
        let s = Scenario::default_example();
        let recs = generate_recommendations(&s, &inputs_for(&s, 1.13, Status::Pass, Status::Pass));
        assert!(recs.is_empty());
    }

    #[test]
    fn test_nozzle_size_targets_velocity() {
        let mut s = Scenario::default_example();
        s.inlet.nozzle_diameter_mm = 300.0;
        let recs = generate_recommendations(&s, &inputs_for(&s, 0.28, Status::Fail, Status::Pass));
        let rec = &recs[0];
        assert_eq!(rec.id, "reduce_nozzle_diameter");
        assert_eq!(rec.priority, Priority::High);

        // √(4 · 0.02 / (π · 0.8)) = 0.1784 m
        let d = diameter_for_velocity(0.02, 0.8);
        assert_relative_eq!(d, 0.17841, epsilon = 1e-4);
        assert!(rec.message.contains("178 mm"));
    }

    #[test]
    fn test_zero_inlets_treated_as_one() {
        let mut s = Scenario::default_example();
        s.inlet.count = 0;
        let recs = generate_recommendations(&s, &inputs_for(&s, 0.0, Status::Fail, Status::Pass));
        assert!(recs[0].message.contains("20.0 L/s per inlet"));
    }

    #[test]
    fn test_no_flow() {
        let mut s = Scenario::default_example();
        s.operation.inflow_lps = 0.0;
        let recs = generate_recommendations(&s, &inputs_for(&s, 0.0, Status::Fail, Status::Pass));
        assert_eq!(ids(&recs), vec!["increase_inflow"]);
    }

    #[test]
    fn test_lower_inlet_needs_vertical_problem() {
        let mut s = Scenario::default_example();
        s.inlet.elevation_m = 2.0;

        let passing = generate_recommendations(&s, &inputs_for(&s, 1.13, Status::Pass, Status::Pass));
        assert!(!ids(&passing).contains(&"lower_inlet"));

        let warning = generate_recommendations(&s, &inputs_for(&s, 1.13, Status::Warn, Status::Pass));
        assert_eq!(ids(&warning), vec!["lower_inlet"]);
    }

    #[test]
    fn test_layout_mirrors_scorer() {
        let s = high_stacked_layout();
        let recs = generate_recommendations(&s, &inputs_for(&s, 1.13, Status::Warn, Status::Fail));
        assert_eq!(
            ids(&recs),
            vec![
                "lower_inlet",
                "short_circuit",
                "lower_inlet_outlet",
                "tangential_inlet",
                "opposite_outlet",
                "multiple_inlets",
            ]
        );
        assert_eq!(recs[1].priority, Priority::High);
    }

    #[test]
    fn test_elevation_above_depth() {
        let mut s = Scenario::default_example();
        s.inlet.elevation_m = 6.0;
        s.outlet.elevation_m = 5.5;
        let recs = generate_recommendations(&s, &inputs_for(&s, 1.13, Status::Pass, Status::Pass));
        assert_eq!(&ids(&recs)[..2], &["inlet_above_water", "outlet_above_water"]);
        assert!(recs[..2].iter().all(|r| r.priority == Priority::High));
    }
}

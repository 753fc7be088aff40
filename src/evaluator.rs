//! Scenario Evaluator - main coordinator for the mixing assessment
//!
//! Runs the full pipeline for one scenario:
//! helpers → Richardson number → vertical rules → layout score →
//! overall verdict → recommendations.
//!
//! Evaluation is a pure function of the scenario. It never fails: numeric
//! anomalies and inconsistent input end up as advisory strings in
//! `Evaluation::validity`.

use crate::assessment::{
    dominant_risk, evaluate_horizontal, evaluate_vertical, generate_recommendations,
    overall_status, richardson_number, worst_delta_t, AdviceInputs, Evaluation, Metrics,
    RichardsonInput, RiskInputs, VerticalContext,
};
use crate::scenario::Scenario;
use crate::utils::hydraulics::{
    froude_inlet, inlet_velocity, nozzle_area, tank_volume_cyl, turnover_ratio,
};

/// Geometric and effective storage volumes plus any advisories about them
struct VolumeCheck {
    geometric_m3: f64,
    effective_m3: f64,
    advisories: Vec<String>,
}

fn check_volumes(scenario: &Scenario) -> VolumeCheck {
    let tank = &scenario.tank;
    let geometric_m3 = tank_volume_cyl(tank.diameter_m, tank.depth_m);
    let specified = tank.operating_volume_m3 + tank.reserve_volume_m3;
    let mut advisories = Vec::new();

    if specified > geometric_m3 {
        advisories.push(format!(
            "Operating ({:.1} m³) plus reserve ({:.1} m³) storage exceeds the geometric volume \
             of {:.1} m³",
            tank.operating_volume_m3, tank.reserve_volume_m3, geometric_m3
        ));
    }
    if tank.operating_volume_m3 <= 0.0 {
        advisories.push("Operating storage volume is not specified".to_string());
    }
    if tank.reserve_volume_m3 <= 0.0 {
        advisories.push("Reserve storage volume is not specified".to_string());
    }

    let effective_m3 = if specified > 0.0 { specified } else { geometric_m3 };

    VolumeCheck {
        geometric_m3,
        effective_m3,
        advisories,
    }
}

/// Evaluate one scenario
pub fn evaluate(scenario: &Scenario) -> Evaluation {
    let _span = tracing::debug_span!("evaluate", scenario = %scenario.id).entered();

    let options = &scenario.options;
    let mut validity: Vec<String> = options.validate().iter().map(|e| e.to_string()).collect();

    // Volumes
    let volumes = check_volumes(scenario);
    validity.extend(volumes.advisories);

    if scenario.inlet.count == 0 {
        validity.push("Inlet count is 0; no inlet velocity can be computed".to_string());
    }

    // Hydraulics
    let nozzle_d_m = scenario.inlet.nozzle_diameter_mm / 1000.0;
    let area = nozzle_area(scenario.inlet.nozzle_diameter_mm);
    let velocity = inlet_velocity(scenario.operation.inflow_lps, area, scenario.inlet.count);
    let froude = froude_inlet(velocity, nozzle_d_m);
    let turnover = turnover_ratio(scenario.operation.fill_volume_m3, volumes.effective_m3);
    let target = options.target_velocity();

    // Buoyancy
    let water = &scenario.water;
    let mut delta_t_max = (water.inflow_temp_max_c - water.tank_temp_c).abs();
    let mut delta_t_min = (water.inflow_temp_min_c - water.tank_temp_c).abs();
    let mut delta_t = worst_delta_t(water.inflow_temp_min_c, water.inflow_temp_max_c, water.tank_temp_c);
    if !(delta_t_max.is_finite() && delta_t_min.is_finite() && delta_t.is_finite()) {
        validity.push(format!(
            "Temperature difference was not finite (tank {} °C, inflow {} to {} °C); \
             ΔT reported as 0",
            water.tank_temp_c, water.inflow_temp_min_c, water.inflow_temp_max_c
        ));
        delta_t_max = 0.0;
        delta_t_min = 0.0;
        delta_t = 0.0;
    }

    let ri = richardson_number(&RichardsonInput {
        policy: options.length_scale_policy,
        nozzle_diameter_m: nozzle_d_m,
        tank_diameter_m: scenario.tank.diameter_m,
        depth_m: scenario.tank.depth_m,
        velocity_mps: velocity,
        delta_t,
        reference_temp_c: water.tank_temp_c,
    });
    if let Some(advisory) = &ri.advisory {
        validity.push(advisory.clone());
    }

    tracing::debug!(velocity, target, froude, turnover, delta_t, ri = ri.value, "hydraulics");

    // Vertical axis
    let vertical = evaluate_vertical(&VerticalContext {
        velocity_mps: velocity,
        target_velocity_mps: target,
        delta_t,
        richardson: ri.value,
        ri_warn: options.ri_warn,
        ri_fail: options.ri_fail,
        turnover_ratio: turnover,
        turnover_warn: options.turnover_warn,
        inlet_elevation_m: scenario.inlet.elevation_m,
        depth_m: scenario.tank.depth_m,
    });

    // Horizontal axis
    let horizontal = evaluate_horizontal(scenario);

    // Verdict
    let overall = overall_status(vertical.status, horizontal.status);
    let risk = dominant_risk(&RiskInputs {
        vertical: vertical.status,
        horizontal: horizontal.status,
        velocity_mps: velocity,
        target_velocity_mps: target,
        richardson: ri.value,
        ri_warn: options.ri_warn,
    });

    let mut recommendations = vertical.recommendations;
    recommendations.extend(generate_recommendations(
        scenario,
        &AdviceInputs {
            velocity_mps: velocity,
            target_velocity_mps: target,
            vertical: vertical.status,
            horizontal: horizontal.status,
            flags: horizontal.flags,
        },
    ));

    for note in &validity {
        tracing::warn!(scenario = %scenario.id, "{}", note);
    }

    Evaluation {
        scenario_id: scenario.id.clone(),
        vertical_status: vertical.status,
        horizontal_status: horizontal.status,
        overall_status: overall,
        dominant_risk: risk,
        metrics: Metrics {
            nozzle_area_m2: area,
            inlet_velocity_mps: velocity,
            target_velocity_mps: target,
            froude_number: froude,
            richardson_number: ri.value,
            richardson_numerator: ri.numerator,
            richardson_denominator: ri.denominator,
            richardson_length_scale_m: ri.length_scale_m,
            richardson_beta: ri.beta,
            turnover_ratio: turnover,
            jet_penetration: vertical.penetration,
            horizontal_risk_score: horizontal.score,
            geometric_volume_m3: volumes.geometric_m3,
            effective_volume_m3: volumes.effective_m3,
            delta_t_max,
            delta_t_min,
            delta_t_used: delta_t,
        },
        recommendations,
        validity,
    }
}

/// Evaluate several scenarios in order
pub fn evaluate_all(scenarios: &[Scenario]) -> Vec<Evaluation> {
    scenarios.iter().map(evaluate).collect()
}

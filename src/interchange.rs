//! JSON interchange for scenarios and evaluations
//!
//! Import performs a minimal structural check (the value must be an object
//! carrying `tank` and `inlet` sections) before typed deserialization, so
//! unrelated JSON is rejected with a specific message.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::assessment::Evaluation;
use crate::error::InterchangeError;
use crate::scenario::Scenario;

const REQUIRED_SECTIONS: [&str; 2] = ["tank", "inlet"];

/// Format a scenario as pretty-printed JSON
pub fn scenario_to_json(scenario: &Scenario) -> Result<String> {
    serde_json::to_string_pretty(scenario).context("Failed to serialize scenario")
}

/// Format an evaluation as pretty-printed JSON.
///
/// Infinite Richardson numbers are written as `null`.
pub fn evaluation_to_json(evaluation: &Evaluation) -> Result<String> {
    serde_json::to_string_pretty(evaluation).context("Failed to serialize evaluation")
}

fn scenario_from_value(value: Value) -> Result<Scenario, InterchangeError> {
    let object = value.as_object().ok_or(InterchangeError::NotAnObject)?;
    for section in REQUIRED_SECTIONS {
        if !object.contains_key(section) {
            return Err(InterchangeError::MissingSection(section));
        }
    }
    Ok(serde_json::from_value(value)?)
}

/// Parse one scenario
pub fn scenario_from_json(text: &str) -> Result<Scenario, InterchangeError> {
    let value: Value = serde_json::from_str(text)?;
    scenario_from_value(value)
}

/// Parse a JSON array of scenarios, reporting the index of the first bad one
pub fn scenarios_from_json(text: &str) -> Result<Vec<Scenario>, InterchangeError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(items) = value else {
        return Err(InterchangeError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            scenario_from_value(item).map_err(|e| InterchangeError::AtIndex {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Load a scenario from a JSON file
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file: {:?}", path))?;

    scenario_from_json(&contents)
        .with_context(|| format!("Failed to import scenario from {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;

    #[test]
    fn test_scenario_round_trip() {
        let scenario = crate::scenario::high_stacked_layout();
        let json = scenario_to_json(&scenario).unwrap();
        assert!(json.contains("\"orientation\": \"radial\""));
        assert_eq!(scenario_from_json(&json).unwrap(), scenario);
    }

    #[test]
    fn test_missing_sections_rejected() {
        let err = scenario_from_json(r#"{"tank": {"diameter_m": 8.0}}"#).unwrap_err();
        assert!(matches!(err, InterchangeError::MissingSection("inlet")));

        let err = scenario_from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, InterchangeError::NotAnObject));

        let err = scenario_from_json("{not json").unwrap_err();
        assert!(matches!(err, InterchangeError::Json(_)));
    }

    #[test]
    fn test_minimal_scenario_gets_defaults() {
        let scenario = scenario_from_json(r#"{"tank": {"depth_m": 6.0}, "inlet": {"count": 2}}"#)
            .unwrap();
        assert_eq!(scenario.tank.depth_m, 6.0);
        assert_eq!(scenario.tank.diameter_m, 10.0);
        assert_eq!(scenario.inlet.count, 2);
        assert_eq!(scenario.id, "");
        assert_eq!(scenario.options.ri_warn, 1.0);
    }

    #[test]
    fn test_list_reports_failing_index() {
        let text = r#"[{"tank": {}, "inlet": {}}, {"tank": {}}]"#;
        let err = scenarios_from_json(text).unwrap_err();
        assert!(matches!(err, InterchangeError::AtIndex { index: 1, .. }));
        assert!(err.to_string().contains("inlet"));

        assert!(matches!(
            scenarios_from_json(r#"{"tank": {}, "inlet": {}}"#),
            Err(InterchangeError::NotAnArray)
        ));
    }

    #[test]
    fn test_infinite_richardson_serializes_as_null() {
        let mut scenario = Scenario::default_example();
        scenario.operation.inflow_lps = 0.0;
        let json = evaluation_to_json(&evaluate(&scenario)).unwrap();
        assert!(json.contains("\"richardson_number\": null"));
    }

    #[test]
    fn test_evaluation_round_trip_keeps_infinite_richardson() {
        let mut scenario = Scenario::default_example();
        scenario.operation.inflow_lps = 0.0;
        let evaluation = evaluate(&scenario);
        let json = evaluation_to_json(&evaluation).unwrap();

        let parsed: Evaluation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.metrics.richardson_number, f64::INFINITY);
        assert_eq!(parsed, evaluation);
    }
}

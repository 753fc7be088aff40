//! Overall verdict and dominant risk

use super::status::Status;
use super::types::DominantRisk;

/// Worse of the two axis statuses
pub fn overall_status(vertical: Status, horizontal: Status) -> Status {
    vertical.worse(horizontal)
}

/// Inputs to the dominant-risk classification
#[derive(Debug, Clone, Copy)]
pub struct RiskInputs {
    pub vertical: Status,
    pub horizontal: Status,
    pub velocity_mps: f64,
    pub target_velocity_mps: f64,
    pub richardson: f64,
    pub ri_warn: f64,
}

/// Name the single risk that drives a non-passing verdict.
///
/// Vertical problems take precedence over layout problems; within the
/// vertical axis a momentum shortfall wins over buoyancy.
pub fn dominant_risk(inputs: &RiskInputs) -> DominantRisk {
    if overall_status(inputs.vertical, inputs.horizontal).is_pass() {
        return DominantRisk::None;
    }

    if !inputs.vertical.is_pass() {
        if inputs.velocity_mps < 0.5 * inputs.target_velocity_mps {
            DominantRisk::InsufficientMomentum
        } else if inputs.richardson > inputs.ri_warn {
            DominantRisk::Buoyancy
        } else {
            DominantRisk::InsufficientMomentum
        }
    } else {
        DominantRisk::ShortCircuit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Status; 3] = [Status::Pass, Status::Warn, Status::Fail];

    #[test]
    fn test_overall_truth_table() {
        for v in ALL {
            for h in ALL {
                let overall = overall_status(v, h);
                assert_eq!(overall == Status::Fail, v == Status::Fail || h == Status::Fail);
                assert_eq!(overall == Status::Pass, v == Status::Pass && h == Status::Pass);
            }
        }
    }

    fn inputs() -> RiskInputs {
        RiskInputs {
            vertical: Status::Pass,
            horizontal: Status::Pass,
            velocity_mps: 1.0,
            target_velocity_mps: 0.8,
            richardson: 0.1,
            ri_warn: 1.0,
        }
    }

    #[test]
    fn test_none_when_passing() {
        assert_eq!(dominant_risk(&inputs()), DominantRisk::None);
    }

    #[test]
    fn test_short_circuit_when_only_layout_fails() {
        let i = RiskInputs { horizontal: Status::Warn, ..inputs() };
        assert_eq!(dominant_risk(&i), DominantRisk::ShortCircuit);
    }

    #[test]
    fn test_vertical_classification() {
        let slow = RiskInputs { vertical: Status::Fail, velocity_mps: 0.3, richardson: 5.0, ..inputs() };
        assert_eq!(dominant_risk(&slow), DominantRisk::InsufficientMomentum);

        let buoyant = RiskInputs { vertical: Status::Warn, richardson: 5.0, horizontal: Status::Fail, ..inputs() };
        assert_eq!(dominant_risk(&buoyant), DominantRisk::Buoyancy);

        let fallback = RiskInputs { vertical: Status::Warn, velocity_mps: 0.6, ..inputs() };
        assert_eq!(dominant_risk(&fallback), DominantRisk::InsufficientMomentum);
    }
}

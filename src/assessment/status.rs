//! Severity Status
//!
//! Three-level severity shared by both assessment axes, and the fold that
//! applies an ordered rule table without ever lowering the status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Assessment severity, ordered PASS < WARN < FAIL
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Pass,
    Warn,
    Fail,
}

impl Status {
    pub fn display_text(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Warn => "WARN",
            Status::Fail => "FAIL",
        }
    }

    /// Return the worse of two statuses
    pub fn worse(self, other: Self) -> Self {
        self.max(other)
    }

    pub fn is_pass(&self) -> bool {
        *self == Status::Pass
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Outcome of a single rule: the severity it demands and what it produced.
#[derive(Debug, Clone)]
pub struct Finding<T> {
    pub status: Status,
    pub output: T,
}

impl<T> Finding<T> {
    pub fn new(status: Status, output: T) -> Self {
        Self { status, output }
    }
}

/// Status plus every output collected so far while folding a rule table.
#[derive(Debug, Clone)]
pub struct Escalation<T> {
    pub status: Status,
    pub outputs: Vec<T>,
}

impl<T> Default for Escalation<T> {
    fn default() -> Self {
        Self {
            status: Status::Pass,
            outputs: Vec::new(),
        }
    }
}

/// A rule sees the context and the escalation so far, and may fire.
pub type Rule<C, T> = fn(&C, &Escalation<T>) -> Option<Finding<T>>;

/// Apply `rules` in order, keeping the maximum severity seen.
///
/// A rule can only raise the status; outputs accumulate in rule order.
pub fn escalate<C, T>(ctx: &C, rules: &[Rule<C, T>]) -> Escalation<T> {
    rules.iter().fold(Escalation::default(), |mut acc, rule| {
        if let Some(finding) = rule(ctx, &acc) {
            acc.status = acc.status.worse(finding.status);
            acc.outputs.push(finding.output);
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Status::Pass < Status::Warn);
        assert!(Status::Warn < Status::Fail);
        assert_eq!(Status::Warn.worse(Status::Pass), Status::Warn);
        assert_eq!(Status::Warn.worse(Status::Fail), Status::Fail);
    }

    fn raise_fail(_: &(), _: &Escalation<&'static str>) -> Option<Finding<&'static str>> {
        Some(Finding::new(Status::Fail, "fail"))
    }

    fn try_lower(_: &(), _: &Escalation<&'static str>) -> Option<Finding<&'static str>> {
        Some(Finding::new(Status::Pass, "pass"))
    }

    fn warn_if_clean(_: &(), acc: &Escalation<&'static str>) -> Option<Finding<&'static str>> {
        acc.status.is_pass().then(|| Finding::new(Status::Warn, "warn"))
    }

    #[test]
    fn test_escalation_never_lowers() {
        let rules: [Rule<(), &'static str>; 3] = [raise_fail, try_lower, warn_if_clean];
        let result = escalate(&(), &rules);
        assert_eq!(result.status, Status::Fail);
        assert_eq!(result.outputs, vec!["fail", "pass"]);
    }

    #[test]
    fn test_empty_table_passes() {
        let result = escalate::<(), &'static str>(&(), &[]);
        assert_eq!(result.status, Status::Pass);
        assert!(result.outputs.is_empty());
    }

    #[test]
    fn test_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Status::Warn).unwrap(), "\"WARN\"");
    }
}

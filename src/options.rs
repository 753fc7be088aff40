//! Evaluation options
//!
//! Thresholds, layout weights and presets that drive the risk assessment.
//! Every field has a default so partial JSON configuration files load cleanly.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

use crate::error::ConfigError;

/// Named conservatism preset, mapped to a default target inlet velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conservatism {
    Low,
    #[default]
    Normal,
    High,
}

impl Conservatism {
    /// Default target inlet velocity (m/s) for this preset
    pub fn target_velocity_mps(&self) -> f64 {
        match self {
            Conservatism::Low => 0.6,
            Conservatism::Normal => 0.8,
            Conservatism::High => 1.0,
        }
    }
}

/// Characteristic length used in the Richardson number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthScalePolicy {
    /// Nozzle diameter
    Nozzle,
    /// Quarter of the water depth, clamped to [0.05, 2.0] m
    #[default]
    DepthQuarter,
    /// Half of the smaller of diameter and depth
    TankHalf,
}

/// Additive risk weights and subtractive credits for the layout score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutWeights {
    /// Added when inlet and outlet sit within 15% of depth of each other
    pub vertical_proximity: f64,
    /// Added when both inlet and outlet sit above 60% of depth
    pub high_elevation: f64,
    pub radial_inlet: f64,
    pub tangential_credit: f64,
    pub upward_inlet: f64,
    pub downward_credit: f64,
    pub opposite_outlet_credit: f64,
    /// Subtracted when two or more inlets share the flow
    pub multiple_inlet_credit: f64,
}

impl Default for LayoutWeights {
    fn default() -> Self {
        Self {
            vertical_proximity: 35.0,
            high_elevation: 20.0,
            radial_inlet: 10.0,
            tangential_credit: 15.0,
            upward_inlet: 10.0,
            downward_credit: 5.0,
            opposite_outlet_credit: 15.0,
            multiple_inlet_credit: 10.0,
        }
    }
}

impl LayoutWeights {
    fn named_values(&self) -> [(&'static str, f64); 8] {
        [
            ("vertical_proximity", self.vertical_proximity),
            ("high_elevation", self.high_elevation),
            ("radial_inlet", self.radial_inlet),
            ("tangential_credit", self.tangential_credit),
            ("upward_inlet", self.upward_inlet),
            ("downward_credit", self.downward_credit),
            ("opposite_outlet_credit", self.opposite_outlet_credit),
            ("multiple_inlet_credit", self.multiple_inlet_credit),
        ]
    }
}

/// Evaluation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Desired mixed fraction of the tank. Carried but not evaluated.
    pub target_mixed_fraction: f64,

    pub conservatism: Conservatism,

    pub length_scale_policy: LengthScalePolicy,

    /// Explicit target velocity (m/s); overrides the preset when > 0
    pub target_velocity_mps: Option<f64>,

    pub ri_warn: f64,
    pub ri_fail: f64,

    /// Turnover ratio below which mixing energy per fill is considered low
    pub turnover_warn: f64,

    pub layout_warn: f64,
    pub layout_fail: f64,

    pub weights: LayoutWeights,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            target_mixed_fraction: 0.95,
            conservatism: Conservatism::Normal,
            length_scale_policy: LengthScalePolicy::DepthQuarter,
            target_velocity_mps: None,
            ri_warn: 1.0,
            ri_fail: 10.0,
            turnover_warn: 0.2,
            layout_warn: 30.0,
            layout_fail: 60.0,
            weights: LayoutWeights::default(),
        }
    }
}

impl Options {
    /// Default options with the given conservatism preset
    pub fn for_conservatism(conservatism: Conservatism) -> Self {
        Self {
            conservatism,
            ..Self::default()
        }
    }

    /// Load options from a JSON file, filling missing fields with defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file: {:?}", path))?;

        let options: Options = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse options JSON")?;

        if let Some(err) = options.validate().into_iter().next() {
            anyhow::bail!("Invalid options in {:?}: {}", path, err);
        }

        Ok(options)
    }

    /// Target inlet velocity in effect: the explicit override when positive,
    /// otherwise the conservatism preset.
    pub fn target_velocity(&self) -> f64 {
        match self.target_velocity_mps {
            Some(v) if v > 0.0 => v,
            _ => self.conservatism.target_velocity_mps(),
        }
    }

    /// Check thresholds and weights for consistency.
    ///
    /// Returns every problem found; an empty list means the options are sound.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(v) = self.target_velocity_mps {
            if !v.is_finite() {
                errors.push(ConfigError::NonFinite("target_velocity_mps"));
            } else if v <= 0.0 {
                errors.push(ConfigError::NonPositiveTargetVelocity(v));
            }
        }

        let thresholds = [
            ("richardson", self.ri_warn, self.ri_fail),
            ("layout score", self.layout_warn, self.layout_fail),
        ];
        for (name, warn, fail) in thresholds {
            if !warn.is_finite() || !fail.is_finite() {
                errors.push(ConfigError::NonFinite(name));
            } else if warn >= fail {
                errors.push(ConfigError::InvertedThresholds { name, warn, fail });
            }
        }

        if !self.turnover_warn.is_finite() {
            errors.push(ConfigError::NonFinite("turnover_warn"));
        }

        for (name, value) in self.weights.named_values() {
            if !value.is_finite() {
                errors.push(ConfigError::NonFinite(name));
            }
        }

        errors
    }
}

//! Error types
//!
//! The evaluation itself never fails. These errors cover the edges of the
//! crate: configuration validation and scenario interchange.

use thiserror::Error;

/// Problems found in an [`Options`](crate::options::Options) value.
///
/// The evaluator downgrades these to validity strings; loaders reject them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} warn threshold ({warn}) must be below its fail threshold ({fail})")]
    InvertedThresholds {
        name: &'static str,
        warn: f64,
        fail: f64,
    },

    #[error("target velocity must be positive, got {0} m/s")]
    NonPositiveTargetVelocity(f64),

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}

/// Rejections from scenario import.
#[derive(Debug, Error)]
pub enum InterchangeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object for a scenario")]
    NotAnObject,

    #[error("expected a JSON array of scenarios")]
    NotAnArray,

    #[error("scenario is missing the '{0}' section")]
    MissingSection(&'static str),

    #[error("scenario #{index}: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<InterchangeError>,
    },
}

//! Error types for quaternion interpolation

use serde::{Deserialize, Serialize};

pub type InterpResult<T> = Result<T, InterpError>;

/// Which input quaternion an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// A standalone quaternion passed to `normalize`.
    Value,
    Start,
    End,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Value => f.write_str("quaternion"),
            Endpoint::Start => f.write_str("start quaternion"),
            Endpoint::End => f.write_str("end quaternion"),
        }
    }
}

/// Failures surfaced by the interpolator. Neither kind is recoverable by retrying.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InterpError {
    /// Zero or non-finite norm before normalization.
    #[error("Degenerate input: {endpoint} has norm {norm}")]
    DegenerateInput { endpoint: Endpoint, norm: f64 },

    /// The blended sample collapsed to (near-)zero magnitude; the endpoints are antipodal.
    #[error("Degenerate interpolation at sample {index} (t = {t}): blended norm {norm}")]
    DegenerateInterpolation { index: usize, t: f64, norm: f64 },
}

impl InterpError {
    /// Attach an endpoint to a `DegenerateInput` raised by a bare `normalize` call.
    pub(crate) fn at_endpoint(self, endpoint: Endpoint) -> Self {
        match self {
            Self::DegenerateInput { norm, .. } => Self::DegenerateInput { endpoint, norm },
            other => other,
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::DegenerateInput { .. } => "input",
            Self::DegenerateInterpolation { .. } => "interpolation",
        }
    }
}

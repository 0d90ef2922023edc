//! Core configuration for quaterp-core.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SAMPLES: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(n) => n,
    None => unreachable!(),
};

/// Sample count and numeric guards for one interpolator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Samples produced per strategy when the caller does not pass a count.
    pub samples: NonZeroUsize,

    pub tolerances: Tolerances,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// SLERP uses the true spherical factors only while `sin(theta0)` exceeds this.
    pub slerp_fallback: f64,

    /// Blended samples with a norm below this are reported as degenerate.
    pub degenerate_norm: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            slerp_fallback: 1e-6,
            degenerate_norm: 1e-9,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            tolerances: Tolerances::default(),
        }
    }
}

//! LERP and SLERP sampling between two quaternions.
//!
//! Both strategies share a single [`Endpoints`] preparation so the
//! shortest-path decision is made once and applied to both sequences.

pub mod functions;

use std::num::NonZeroUsize;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::config::{Config, Tolerances};
use crate::error::InterpResult;
use crate::quat::Quat;

pub use functions::{
    angular_steps, lerp_sequence, prepare_endpoints, sample_params, slerp_sequence,
};

/// Blend-factor policy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// `(1 - t, t)`
    Lerp,
    /// `(sin((1 - t) θ) / sin θ, sin(t θ) / sin θ)`, linear when `sin θ ≈ 0`.
    Slerp,
}

impl Strategy {
    #[inline]
    pub fn factors(self, t: f64, theta0: f64, sin_theta0: f64, tol: &Tolerances) -> (f64, f64) {
        match self {
            Strategy::Slerp if sin_theta0 > tol.slerp_fallback => (
                ((1.0 - t) * theta0).sin() / sin_theta0,
                (t * theta0).sin() / sin_theta0,
            ),
            Strategy::Lerp | Strategy::Slerp => (1.0 - t, t),
        }
    }
}

/// Normalized, sign-corrected endpoints and the arc between them.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Endpoints {
    pub start: Quat,
    /// Negated relative to the caller's input when `flipped` is set.
    pub end: Quat,
    /// Always `>= 0`.
    pub dot: f64,
    pub theta0: f64,
    pub sin_theta0: f64,
    pub flipped: bool,
}

/// Paired LERP/SLERP sequences; `lerp[i]` and `slerp[i]` share `params[i]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Samples {
    pub endpoints: Endpoints,
    pub params: Vec<f64>,
    pub lerp: Vec<Quat>,
    pub slerp: Vec<Quat>,
}

impl Samples {
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Always false; a request produces at least one sample.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, strategy: Strategy) -> &[Quat] {
        match strategy {
            Strategy::Lerp => &self.lerp,
            Strategy::Slerp => &self.slerp,
        }
    }

    /// `(t, lerp, slerp)` per index.
    pub fn iter(&self) -> impl Iterator<Item = (f64, Quat, Quat)> + '_ {
        self.params
            .iter()
            .zip(self.lerp.iter().zip(self.slerp.iter()))
            .map(|(&t, (&l, &s))| (t, l, s))
    }
}

/// Stateless interpolator carrying its sample count and tolerances.
#[derive(Clone, Debug, Default)]
pub struct Interpolator {
    config: Config,
}

impl Interpolator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn prepare_endpoints(&self, q1: Quat, q2: Quat) -> InterpResult<Endpoints> {
        prepare_endpoints(q1, q2)
    }

    pub fn lerp_sequence(&self, ep: &Endpoints, n: NonZeroUsize) -> InterpResult<Vec<Quat>> {
        lerp_sequence(ep.start, ep.end, n, &self.config.tolerances)
    }

    pub fn slerp_sequence(&self, ep: &Endpoints, n: NonZeroUsize) -> InterpResult<Vec<Quat>> {
        slerp_sequence(
            ep.start,
            ep.end,
            ep.theta0,
            ep.sin_theta0,
            n,
            &self.config.tolerances,
        )
    }

    /// Sample both strategies with `n` points each.
    pub fn interpolate(&self, q1: Quat, q2: Quat, n: NonZeroUsize) -> InterpResult<Samples> {
        let endpoints = self.prepare_endpoints(q1, q2)?;
        trace!(
            "interpolate: n={} theta0={} flipped={}",
            n,
            endpoints.theta0,
            endpoints.flipped
        );
        let lerp = self.lerp_sequence(&endpoints, n)?;
        let slerp = self.slerp_sequence(&endpoints, n)?;
        Ok(Samples {
            endpoints,
            params: sample_params(n).collect(),
            lerp,
            slerp,
        })
    }

    /// [`Interpolator::interpolate`] with the configured sample count.
    pub fn sample(&self, q1: Quat, q2: Quat) -> InterpResult<Samples> {
        self.interpolate(q1, q2, self.config.samples)
    }
}

/// Interpolate with default tolerances.
pub fn interpolate(q1: Quat, q2: Quat, n: NonZeroUsize) -> InterpResult<Samples> {
    Interpolator::default().interpolate(q1, q2, n)
}

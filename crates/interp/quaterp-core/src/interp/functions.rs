//! Interpolation helpers:
//! - sample_params (evenly spaced t in [0, 1])
//! - prepare_endpoints (normalize + shortest-arc sign correction)
//! - lerp_sequence / slerp_sequence (one sampling loop, two blend policies)
//! - angular_steps (arc length between consecutive samples)

use std::num::NonZeroUsize;

use log::debug;

use super::{Endpoints, Strategy};
use crate::config::Tolerances;
use crate::error::{Endpoint, InterpError, InterpResult};
use crate::quat::Quat;

/// Parameters `t_i = i / (n - 1)`; a single sample sits at `t = 0`.
pub fn sample_params(n: NonZeroUsize) -> impl ExactSizeIterator<Item = f64> {
    let n = n.get();
    let denom = if n > 1 { (n - 1) as f64 } else { 1.0 };
    (0..n).map(move |i| i as f64 / denom)
}

/// Normalize both endpoints and flip `q2` onto the same hemisphere as `q1`.
///
/// `q` and `-q` encode the same rotation; choosing the representative with a
/// non-negative dot product keeps both strategies on the shorter arc.
pub fn prepare_endpoints(q1: Quat, q2: Quat) -> InterpResult<Endpoints> {
    let start = q1
        .normalize()
        .map_err(|e| e.at_endpoint(Endpoint::Start))?;
    let mut end = q2.normalize().map_err(|e| e.at_endpoint(Endpoint::End))?;

    let mut dot = start.dot(end);
    let flipped = dot < 0.0;
    if flipped {
        end = -end;
        dot = -dot;
        debug!("shortest-path correction: negated end quaternion (dot was {})", -dot);
    }

    // Rounding can push |dot| slightly past 1.
    let theta0 = dot.clamp(-1.0, 1.0).acos();
    Ok(Endpoints {
        start,
        end,
        dot,
        theta0,
        sin_theta0: theta0.sin(),
        flipped,
    })
}

/// Combine `f1 * start + f2 * end` and renormalize.
#[inline]
fn blend(
    start: Quat,
    end: Quat,
    (f1, f2): (f64, f64),
    index: usize,
    t: f64,
    tol: &Tolerances,
) -> InterpResult<Quat> {
    let raw = f1 * start + f2 * end;
    let norm = raw.norm();
    // Negated comparison so a NaN norm is rejected too.
    if !(norm >= tol.degenerate_norm) {
        return Err(InterpError::DegenerateInterpolation { index, t, norm });
    }
    raw.normalize()
}

fn sample_sequence(
    strategy: Strategy,
    start: Quat,
    end: Quat,
    theta0: f64,
    sin_theta0: f64,
    n: NonZeroUsize,
    tol: &Tolerances,
) -> InterpResult<Vec<Quat>> {
    sample_params(n)
        .enumerate()
        .map(|(index, t)| {
            let factors = strategy.factors(t, theta0, sin_theta0, tol);
            blend(start, end, factors, index, t, tol)
        })
        .collect()
}

/// Componentwise affine blend followed by renormalization (not constant angular speed).
pub fn lerp_sequence(
    start: Quat,
    end: Quat,
    n: NonZeroUsize,
    tol: &Tolerances,
) -> InterpResult<Vec<Quat>> {
    sample_sequence(Strategy::Lerp, start, end, 0.0, 0.0, n, tol)
}

/// Great-circle interpolation at constant angular speed.
///
/// Falls back to the linear blend when `sin_theta0` is within
/// `tol.slerp_fallback` of zero; that is also the `theta0 -> 0` limit of the
/// spherical factors.
pub fn slerp_sequence(
    start: Quat,
    end: Quat,
    theta0: f64,
    sin_theta0: f64,
    n: NonZeroUsize,
    tol: &Tolerances,
) -> InterpResult<Vec<Quat>> {
    if sin_theta0 <= tol.slerp_fallback {
        debug!(
            "slerp: sin(theta0) = {:e} below {:e}, using linear blend factors",
            sin_theta0, tol.slerp_fallback
        );
    }
    sample_sequence(Strategy::Slerp, start, end, theta0, sin_theta0, n, tol)
}

/// Arc length between consecutive samples; one shorter than the input.
pub fn angular_steps(seq: &[Quat]) -> Vec<f64> {
    seq.windows(2).map(|w| w[0].angle_to(w[1])).collect()
}

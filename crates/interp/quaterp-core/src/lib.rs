//! quaterp-core: LERP vs SLERP sampling between two quaternions.
//!
//! Quaternions are scalar-first `(w, x, y, z)`. Inputs are normalized and
//! sign-corrected onto the shorter arc before either strategy runs, and both
//! sequences come back paired by sample index.

pub mod config;
pub mod error;
pub mod interp;
pub mod quat;

// Re-exports for consumers (presentation adapters)
pub use config::{Config, Tolerances, DEFAULT_SAMPLES};
pub use error::{Endpoint, InterpError, InterpResult};
pub use interp::{
    angular_steps, interpolate, lerp_sequence, prepare_endpoints, sample_params,
    slerp_sequence, Endpoints, Interpolator, Samples, Strategy,
};
pub use quat::{ComponentOrder, Quat};

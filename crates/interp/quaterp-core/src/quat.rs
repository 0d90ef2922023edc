//! Quaternion value type.
//!
//! Components are stored scalar-first `(w, x, y, z)`. Arrays coming from
//! outside may use either order; see [`ComponentOrder`].

use std::ops::{Add, Mul, Neg};

use serde::{Deserialize, Serialize};

use crate::error::{Endpoint, InterpError, InterpResult};

/// Layout of a `[f64; 4]` quaternion array.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentOrder {
    /// `[w, x, y, z]`
    #[default]
    #[serde(rename = "wxyz")]
    ScalarFirst,
    /// `[x, y, z, w]`
    #[serde(rename = "xyzw")]
    ScalarLast,
}

/// Immutable quaternion `(w, x, y, z)`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Quat = Quat {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    pub fn from_array(a: [f64; 4], order: ComponentOrder) -> Self {
        match order {
            ComponentOrder::ScalarFirst => Self::new(a[0], a[1], a[2], a[3]),
            ComponentOrder::ScalarLast => Self::new(a[3], a[0], a[1], a[2]),
        }
    }

    pub fn to_array(self, order: ComponentOrder) -> [f64; 4] {
        match order {
            ComponentOrder::ScalarFirst => [self.w, self.x, self.y, self.z],
            ComponentOrder::ScalarLast => [self.x, self.y, self.z, self.w],
        }
    }

    /// Standard 4-component inner product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn norm_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    fn max_abs(self) -> f64 {
        self.w.abs().max(self.x.abs()).max(self.y.abs()).max(self.z.abs())
    }

    /// Returns `self / ‖self‖`.
    ///
    /// Fails with [`InterpError::DegenerateInput`] when the norm is zero or
    /// any component is not finite. Components are pre-scaled by their
    /// largest magnitude so very large or very small inputs do not overflow
    /// or underflow the squared norm.
    pub fn normalize(self) -> InterpResult<Self> {
        let scale = self.max_abs();
        if !self.is_finite() || scale == 0.0 {
            return Err(InterpError::DegenerateInput {
                endpoint: Endpoint::Value,
                norm: if self.is_finite() { 0.0 } else { self.norm() },
            });
        }
        // The reciprocal of a subnormal scale overflows to infinity.
        let scaled = Quat::new(
            self.w / scale,
            self.x / scale,
            self.y / scale,
            self.z / scale,
        );
        Ok(scaled * scaled.norm().recip())
    }

    /// Great-circle distance to `other` on the unit 3-sphere, in radians.
    /// Both operands are expected to be unit length.
    pub fn angle_to(self, other: Self) -> f64 {
        self.dot(other).clamp(-1.0, 1.0).acos()
    }

    /// Rotate a 3D vector by this (unit) quaternion.
    pub fn rotate_vector(self, v: [f64; 3]) -> [f64; 3] {
        let u = [self.x, self.y, self.z];
        let s = self.w;
        let uv = u[0] * v[0] + u[1] * v[1] + u[2] * v[2];
        let uu = u[0] * u[0] + u[1] * u[1] + u[2] * u[2];
        let cross = [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ];
        let k = s * s - uu;
        [
            2.0 * uv * u[0] + k * v[0] + 2.0 * s * cross[0],
            2.0 * uv * u[1] + k * v[1] + 2.0 * s * cross[1],
            2.0 * uv * u[2] + k * v[2] + 2.0 * s * cross[2],
        ]
    }
}

impl Add for Quat {
    type Output = Quat;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Quat::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

impl Mul<f64> for Quat {
    type Output = Quat;

    #[inline]
    fn mul(self, k: f64) -> Self::Output {
        Quat::new(self.w * k, self.x * k, self.y * k, self.z * k)
    }
}

impl Mul<Quat> for f64 {
    type Output = Quat;

    #[inline]
    fn mul(self, q: Quat) -> Self::Output {
        q * self
    }
}

impl Neg for Quat {
    type Output = Quat;

    #[inline]
    fn neg(self) -> Self::Output {
        Quat::new(-self.w, -self.x, -self.y, -self.z)
    }
}

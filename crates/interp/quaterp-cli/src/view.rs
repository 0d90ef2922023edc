//! Camera placement and direction vectors for plotting the sampled paths.

use log::warn;
use quaterp_core::{Endpoints, Quat};
use serde::Serialize;

/// Reference direction rotated by every sample.
pub const REFERENCE_DIRECTION: [f64; 3] = [1.0, 0.0, 0.0];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Default,
    BirdsEye,
    Aligned,
}

/// Elevation and azimuth in degrees, matplotlib `view_init` convention.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Camera {
    pub elev: f64,
    pub azim: f64,
}

/// Unit vector obtained by rotating [`REFERENCE_DIRECTION`] with `q`.
pub fn direction(q: Quat) -> [f64; 3] {
    q.rotate_vector(REFERENCE_DIRECTION)
}

/// `a * conj(b)`; `b` must be unit length.
fn relative_rotation(a: Quat, b: Quat) -> Quat {
    let (aw, av) = (a.w, [a.x, a.y, a.z]);
    let (bw, bv) = (b.w, [-b.x, -b.y, -b.z]);
    let cross = [
        av[1] * bv[2] - av[2] * bv[1],
        av[2] * bv[0] - av[0] * bv[2],
        av[0] * bv[1] - av[1] * bv[0],
    ];
    Quat::new(
        aw * bw - (av[0] * bv[0] + av[1] * bv[1] + av[2] * bv[2]),
        aw * bv[0] + bw * av[0] + cross[0],
        aw * bv[1] + bw * av[1] + cross[1],
        aw * bv[2] + bw * av[2] + cross[2],
    )
}

/// Unit axis of the rotation taking `from` to `to`, or `None` when they coincide.
pub fn relative_axis(from: Quat, to: Quat) -> Option<[f64; 3]> {
    let mut rel = relative_rotation(to, from);
    // Canonical form has a non-negative scalar, so the axis points along a positive angle.
    if rel.w < 0.0 {
        rel = -rel;
    }
    let len = (rel.x * rel.x + rel.y * rel.y + rel.z * rel.z).sqrt();
    if len < 1e-12 {
        return None;
    }
    Some([rel.x / len, rel.y / len, rel.z / len])
}

pub fn camera(mode: ViewMode, endpoints: &Endpoints) -> Option<Camera> {
    match mode {
        ViewMode::Default => None,
        ViewMode::BirdsEye => Some(Camera {
            elev: 90.0,
            azim: 0.0,
        }),
        ViewMode::Aligned => match relative_axis(endpoints.start, endpoints.end) {
            Some(axis) => Some(Camera {
                elev: axis[2].clamp(-1.0, 1.0).asin().to_degrees(),
                azim: axis[1].atan2(axis[0]).to_degrees(),
            }),
            None => {
                warn!("aligned view requested but q1 and q2 are the same rotation; using default view");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use quaterp_core::prepare_endpoints;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn identity_keeps_reference_direction() {
        assert_eq!(direction(Quat::IDENTITY), REFERENCE_DIRECTION);
    }

    #[test]
    fn half_turn_about_z_reverses_x() {
        let d = direction(Quat::new(0.0, 0.0, 0.0, 1.0));
        assert_relative_eq!(d[0], -1.0, epsilon = 1e-15);
        assert_relative_eq!(d[1], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn relative_rotation_is_full_product_with_conjugate() {
        let a = Quat::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2, 0.0);
        assert_relative_eq!(relative_rotation(a, a).w, 1.0, epsilon = 1e-15);
        let r = relative_rotation(Quat::new(0.0, 0.0, 0.0, 1.0), Quat::IDENTITY);
        assert_eq!(r, Quat::new(0.0, 0.0, 0.0, 1.0));
        let r = relative_rotation(Quat::IDENTITY, a);
        assert_relative_eq!(r.w, FRAC_1_SQRT_2, epsilon = 1e-15);
        assert_relative_eq!(r.y, -FRAC_1_SQRT_2, epsilon = 1e-15);
    }

    #[test]
    fn relative_axis_between_rotations_about_same_axis() {
        let a = Quat::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2, 0.0);
        let axis = relative_axis(Quat::IDENTITY, a).unwrap();
        assert_relative_eq!(axis[1], 1.0, epsilon = 1e-12);

        // Negated target is the same rotation, same axis.
        let axis = relative_axis(Quat::IDENTITY, -a).unwrap();
        assert_relative_eq!(axis[1], 1.0, epsilon = 1e-12);

        assert!(relative_axis(a, a).is_none());
        assert!(relative_axis(a, -a).is_none());
    }

    #[test]
    fn birds_eye_camera() {
        let ep = prepare_endpoints(Quat::IDENTITY, Quat::new(0.0, 1.0, 0.0, 0.0)).unwrap();
        assert_eq!(camera(ViewMode::Default, &ep), None);
        assert_eq!(
            camera(ViewMode::BirdsEye, &ep),
            Some(Camera {
                elev: 90.0,
                azim: 0.0
            })
        );
    }

    #[test]
    fn aligned_camera_looks_along_rotation_axis() {
        // Rotation about +Z: camera straight overhead.
        let ep = prepare_endpoints(Quat::IDENTITY, Quat::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2))
            .unwrap();
        let cam = camera(ViewMode::Aligned, &ep).unwrap();
        assert_relative_eq!(cam.elev, 90.0, epsilon = 1e-9);

        // Rotation about the X+Y diagonal: level camera at 45 degrees azimuth.
        let ep = prepare_endpoints(Quat::IDENTITY, Quat::new(0.0, 0.7071, 0.7071, 0.0)).unwrap();
        let cam = camera(ViewMode::Aligned, &ep).unwrap();
        assert_relative_eq!(cam.elev, 0.0, epsilon = 1e-9);
        assert_relative_eq!(cam.azim, 45.0, epsilon = 1e-9);

        let same = prepare_endpoints(Quat::IDENTITY, Quat::IDENTITY).unwrap();
        assert_eq!(camera(ViewMode::Aligned, &same), None);
    }
}

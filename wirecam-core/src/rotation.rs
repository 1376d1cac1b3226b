/// Axis rotations and accumulated Euler-angle orientation
use nalgebra::{Point3, Rotation3, Vector3};
use std::f64::consts::TAU;

/// Orientation as signed angles (radians) about the X, Y and Z axes.
///
/// Axis rotations do not commute, so the order of application is fixed
/// throughout the crate: X (pitch), then Y (yaw), then Z (roll).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl Rotation {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn zero() -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
        }
    }

    /// Accumulate a delta, keeping each angle wrapped into `[0, 2π)`.
    ///
    /// Deltas themselves are unconstrained; only the stored state wraps.
    pub fn rotate_by(&mut self, delta: Rotation) {
        self.pitch = wrap_angle(self.pitch + delta.pitch);
        self.yaw = wrap_angle(self.yaw + delta.yaw);
        self.roll = wrap_angle(self.roll + delta.roll);
    }

    pub fn negated(&self) -> Rotation {
        Rotation::new(-self.pitch, -self.yaw, -self.roll)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::zero()
    }
}

fn wrap_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// Rotate a point about the X axis, counter-clockwise viewed from +X:
/// `y' = y·cos a - z·sin a`, `z' = y·sin a + z·cos a`.
pub fn rotate_x(p: Point3<f64>, angle: f64) -> Point3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angle) * p
}

/// Rotate a point about the Y axis:
/// `x' = x·cos a + z·sin a`, `z' = -x·sin a + z·cos a`.
pub fn rotate_y(p: Point3<f64>, angle: f64) -> Point3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle) * p
}

/// Rotate a point about the Z axis:
/// `x' = x·cos a - y·sin a`, `y' = x·sin a + y·cos a`.
pub fn rotate_z(p: Point3<f64>, angle: f64) -> Point3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), angle) * p
}

/// Apply a full orientation to a point, X then Y then Z.
///
/// Each stage consumes the previous stage's output as a value; no
/// partially-updated coordinates are ever read back.
pub fn rotate(p: Point3<f64>, rotation: &Rotation) -> Point3<f64> {
    rotation_matrix(rotation) * p
}

/// The composed rotation operator for an orientation.
///
/// `Rz · Ry · Rx`, so applying the result to a point rotates about X
/// first and Z last.
pub fn rotation_matrix(rotation: &Rotation) -> Rotation3<f64> {
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), rotation.pitch);
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), rotation.yaw);
    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), rotation.roll);

    rz * ry * rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOL: f64 = 1e-9;

    fn close(a: Point3<f64>, b: Point3<f64>) -> bool {
        (a - b).norm() < TOL
    }

    #[test]
    fn test_quarter_turns() {
        let p = Point3::new(1.0, 0.0, 0.0);
        assert!(close(rotate_z(p, FRAC_PI_2), Point3::new(0.0, 1.0, 0.0)));
        assert!(close(rotate_y(p, FRAC_PI_2), Point3::new(0.0, 0.0, -1.0)));

        let q = Point3::new(0.0, 1.0, 0.0);
        assert!(close(rotate_x(q, FRAC_PI_2), Point3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_rotation_preserves_norm() {
        let p = Point3::new(3.0, -4.0, 12.0);
        let n = p.coords.norm();
        for angle in [0.1, 1.0, -2.5, 7.0] {
            assert!((rotate_x(p, angle).coords.norm() - n).abs() < TOL);
            assert!((rotate_y(p, angle).coords.norm() - n).abs() < TOL);
            assert!((rotate_z(p, angle).coords.norm() - n).abs() < TOL);
        }
    }

    #[test]
    fn test_input_left_unmodified() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let _ = rotate(p, &Rotation::new(0.4, 0.8, 1.2));
        assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_composite_inverts_in_reverse_order() {
        let p = Point3::new(2.0, -1.0, 5.0);
        let r = Rotation::new(0.3, -0.7, 1.9);

        let forward = rotate(p, &r);
        // True inverse: negated angles in reverse axis order, Z then Y then X.
        let back = rotate_x(rotate_y(rotate_z(forward, -r.roll), -r.yaw), -r.pitch);

        assert!(close(back, p));
    }

    #[test]
    fn test_composite_matches_staged_axis_rotations() {
        let p = Point3::new(1.5, 2.5, -0.5);
        let r = Rotation::new(0.2, 0.4, 0.6);

        let staged = rotate_z(rotate_y(rotate_x(p, r.pitch), r.yaw), r.roll);
        assert!(close(rotate(p, &r), staged));
    }

    #[test]
    fn test_accumulated_state_wraps() {
        let mut r = Rotation::zero();
        r.rotate_by(Rotation::new(3.0 * PI, -PI / 2.0, 5.0 * TAU));

        assert!((r.pitch - PI).abs() < TOL);
        assert!((r.yaw - 3.0 * PI / 2.0).abs() < TOL);
        assert!(r.roll.abs() < TOL);
        assert!(r.pitch >= 0.0 && r.pitch < TAU);
    }

    #[test]
    fn test_identity_matrix() {
        let m = rotation_matrix(&Rotation::zero());
        assert!((m.matrix() - Rotation3::identity().matrix()).norm() < TOL);
    }
}

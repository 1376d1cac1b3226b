/// Camera state and the canonical world-to-camera transform
use nalgebra::{Point3, Rotation3, Vector3};

use crate::rotation::{self, Rotation};

/// A free-flying camera: world-space position plus accumulated orientation.
///
/// Mutated once per frame from input deltas; everything it produces is
/// recomputed from this state, never cached across frames.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f64>,
    pub orientation: Rotation,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: Point3::origin(),
            orientation: Rotation::zero(),
        }
    }

    pub fn at(position: Point3<f64>) -> Self {
        Self {
            position,
            orientation: Rotation::zero(),
        }
    }

    /// Translate the camera in world space.
    pub fn move_by(&mut self, delta: Vector3<f64>) {
        self.position += delta;
    }

    /// Accumulate an orientation delta, wrapped mod 2π per axis.
    pub fn rotate_by(&mut self, delta: Rotation) {
        self.orientation.rotate_by(delta);
    }

    /// The composed view-space rotation: the negated orientation angles
    /// applied in the fixed X, then Y, then Z order.
    ///
    /// Computed once per frame by the render pass so per-vertex work is a
    /// single matrix application.
    pub fn view_rotation(&self) -> Rotation3<f64> {
        rotation::rotation_matrix(&self.orientation.negated())
    }

    /// Transform a world-space point into camera-local space.
    ///
    /// Canonical semantics: subtract the camera position first, then
    /// rotate by the negated angles (X, then Y, then Z). The camera looks
    /// from its position along axes fixed to the world.
    pub fn world_to_camera(&self, p: Point3<f64>) -> Point3<f64> {
        Point3::from(self.view_rotation() * (p - self.position))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

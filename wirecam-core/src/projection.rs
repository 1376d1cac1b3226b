/// Central (pinhole) projection from camera space to screen pixels
use nalgebra::Point3;
use thiserror::Error;

/// Depths closer to the focal plane than this are treated as degenerate.
const DEPTH_EPSILON: f64 = 1e-9;

/// One projected vertex in screen pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// The point sits on the focal plane; the perspective divide would
    /// produce ±∞/NaN, so the caller is expected to skip the edge.
    #[error("point at depth {depth} lies on the focal plane")]
    DegenerateProjection { depth: f64 },
}

/// Perspective projector for a fixed screen.
///
/// `screen_x = x / (z + z_offset) * focal_length`, likewise for Y, then
/// translated by half the screen size so the origin lands at the center.
#[derive(Debug, Clone)]
pub struct Projector {
    pub focal_length: f64,
    /// Near-plane shift added to depth before the divide; keeps points
    /// close to the camera from blowing up the divide.
    pub z_offset: f64,
    /// Negate Y before centering, for screens where Y grows downward.
    pub invert_y: bool,
    pub width: f64,
    pub height: f64,
}

impl Projector {
    pub fn new(width: f64, height: f64, focal_length: f64) -> Self {
        Self {
            focal_length,
            z_offset: 0.0,
            invert_y: false,
            width,
            height,
        }
    }

    pub fn with_z_offset(mut self, z_offset: f64) -> Self {
        self.z_offset = z_offset;
        self
    }

    pub fn with_inverted_y(mut self) -> Self {
        self.invert_y = true;
        self
    }

    /// Project a camera-space point onto the screen.
    pub fn project(&self, p: &Point3<f64>) -> Result<ScreenPoint, ProjectionError> {
        let depth = p.z + self.z_offset;
        if depth.abs() < DEPTH_EPSILON {
            return Err(ProjectionError::DegenerateProjection { depth });
        }

        let x = (p.x / depth) * self.focal_length;
        let mut y = (p.y / depth) * self.focal_length;
        if self.invert_y {
            y = -y;
        }

        Ok(ScreenPoint {
            x: x + self.width / 2.0,
            y: y + self.height / 2.0,
        })
    }
}

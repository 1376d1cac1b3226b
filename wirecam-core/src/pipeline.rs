/// Per-frame render pass: model transform, camera transform, projection
use nalgebra::{Point3, Vector3};

use crate::camera::Camera;
use crate::mesh::WireMesh;
use crate::projection::Projector;
use crate::rotation::{self, Rotation};

/// The drawable output of one edge, in screen pixel coordinates.
///
/// Ephemeral: produced per frame and handed straight to whatever draws
/// lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// World placement and accumulated spin of a mesh.
///
/// Spinning demos accumulate `rotation` here and leave the mesh's stored
/// vertices alone; rotating the stored vertices in place every frame
/// accumulates floating-point drift.
#[derive(Debug, Clone)]
pub struct ModelTransform {
    pub position: Vector3<f64>,
    pub rotation: Rotation,
}

impl ModelTransform {
    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: Rotation::zero(),
        }
    }

    pub fn at(position: Vector3<f64>) -> Self {
        Self {
            position,
            rotation: Rotation::zero(),
        }
    }

    /// Accumulate a spin delta, wrapped mod 2π per axis.
    pub fn spin_by(&mut self, delta: Rotation) {
        self.rotation.rotate_by(delta);
    }
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Skip faces pointing away from the camera. Off by default: the
    /// compatible behavior is to draw every edge unconditionally.
    pub backface_cull: bool,
}

/// Transform and project every edge of a mesh into screen segments.
///
/// Edges whose endpoints land on the focal plane are skipped rather than
/// emitted as ±∞ coordinates; the output may therefore hold fewer
/// segments than the mesh has edges.
///
/// With `backface_cull` set and a mesh that carries quad faces, the pass
/// walks face boundaries instead of the edge list and drops every face
/// whose view-space normal points away from the camera.
pub fn render(
    mesh: &WireMesh,
    model: &ModelTransform,
    camera: &Camera,
    projector: &Projector,
    options: &RenderOptions,
) -> Vec<ScreenSegment> {
    // Both operators are fixed for the frame; build them once.
    let spin = rotation::rotation_matrix(&model.rotation);
    let view = camera.view_rotation();

    let view_space: Vec<Point3<f64>> = mesh
        .vertices()
        .iter()
        .map(|&v| {
            let world = spin * v + model.position;
            Point3::from(view * (world - camera.position))
        })
        .collect();

    if options.backface_cull && !mesh.faces().is_empty() {
        let mut segments = Vec::new();
        for face in mesh.faces() {
            if face_turned_away(face, &view_space) {
                continue;
            }
            for k in 0..4 {
                let (i, j) = (face[k], face[(k + 1) % 4]);
                if let Some(segment) = project_edge(&view_space[i], &view_space[j], projector) {
                    segments.push(segment);
                }
            }
        }
        segments
    } else {
        mesh.edges()
            .iter()
            .filter_map(|&[i, j]| project_edge(&view_space[i], &view_space[j], projector))
            .collect()
    }
}

/// A face is turned away when its outward normal and the view ray toward
/// it point the same way. The camera sits at the view-space origin, so
/// the ray is just the first corner's position.
fn face_turned_away(face: &[usize; 4], view_space: &[Point3<f64>]) -> bool {
    let v0 = view_space[face[0]];
    let normal = (view_space[face[1]] - v0).cross(&(view_space[face[2]] - v0));
    normal.dot(&v0.coords) >= 0.0
}

fn project_edge(a: &Point3<f64>, b: &Point3<f64>, projector: &Projector) -> Option<ScreenSegment> {
    let pa = projector.project(a).ok()?;
    let pb = projector.project(b).ok()?;
    Some(ScreenSegment {
        x1: pa.x,
        y1: pa.y,
        x2: pb.x,
        y2: pb.y,
    })
}

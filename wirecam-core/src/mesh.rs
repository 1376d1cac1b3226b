/// Wireframe mesh topology, validated once at construction
use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MeshError {
    /// An edge or face references a vertex the mesh does not have.
    #[error("index {index} out of range for {vertex_count} vertices")]
    InvalidIndex { index: usize, vertex_count: usize },

    /// An edge joins a vertex to itself.
    #[error("edge joins vertex {index} to itself")]
    DegenerateEdge { index: usize },
}

/// A fixed set of object-space vertices plus the edges joining them.
///
/// Topology is validated here and never again; render passes may index
/// unchecked. Vertices are immutable after construction — per-frame
/// positions are derived copies, so repeated rendering never accumulates
/// floating-point drift in the model itself.
#[derive(Debug, Clone)]
pub struct WireMesh {
    vertices: Vec<Point3<f64>>,
    edges: Vec<[usize; 2]>,
    faces: Vec<[usize; 4]>,
}

impl WireMesh {
    /// Build a mesh from explicit vertices and edges.
    pub fn new(vertices: Vec<Point3<f64>>, edges: Vec<[usize; 2]>) -> Result<Self, MeshError> {
        validate_edges(&edges, vertices.len())?;
        Ok(Self {
            vertices,
            edges,
            faces: Vec::new(),
        })
    }

    /// Build a mesh from quad faces, deriving the edge list.
    ///
    /// Shared edges are deduplicated; the faces are kept so the render
    /// pass can back-face cull.
    pub fn from_quads(
        vertices: Vec<Point3<f64>>,
        faces: Vec<[usize; 4]>,
    ) -> Result<Self, MeshError> {
        let mut edges: Vec<[usize; 2]> = Vec::with_capacity(faces.len() * 4);
        for face in &faces {
            for k in 0..4 {
                let (i, j) = (face[k], face[(k + 1) % 4]);
                let edge = [i.min(j), i.max(j)];
                if !edges.contains(&edge) {
                    edges.push(edge);
                }
            }
        }
        validate_edges(&edges, vertices.len())?;
        Ok(Self {
            vertices,
            edges,
            faces,
        })
    }

    /// The canonical demo mesh: an axis-aligned cube of the given
    /// half-extent centered on the object-space origin. 8 vertices,
    /// 12 edges, 6 outward-wound quad faces.
    pub fn cube(half_extent: f64) -> Self {
        let h = half_extent;
        let vertices = vec![
            Point3::new(-h, -h, -h),
            Point3::new(h, -h, -h),
            Point3::new(h, h, -h),
            Point3::new(-h, h, -h),
            Point3::new(-h, -h, h),
            Point3::new(h, -h, h),
            Point3::new(h, h, h),
            Point3::new(-h, h, h),
        ];
        let edges = vec![
            [0, 1],
            [1, 2],
            [2, 3],
            [3, 0],
            [4, 5],
            [5, 6],
            [6, 7],
            [7, 4],
            [0, 4],
            [1, 5],
            [2, 6],
            [3, 7],
        ];
        // Wound so cross(v1 - v0, v2 - v0) points out of the cube.
        let faces = vec![
            [0, 3, 2, 1],
            [4, 5, 6, 7],
            [0, 4, 7, 3],
            [1, 2, 6, 5],
            [0, 1, 5, 4],
            [3, 7, 6, 2],
        ];

        Self {
            vertices,
            edges,
            faces,
        }
    }

    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    pub fn faces(&self) -> &[[usize; 4]] {
        &self.faces
    }
}

fn validate_edges(edges: &[[usize; 2]], vertex_count: usize) -> Result<(), MeshError> {
    for &[i, j] in edges {
        for index in [i, j] {
            if index >= vertex_count {
                return Err(MeshError::InvalidIndex {
                    index,
                    vertex_count,
                });
            }
        }
        if i == j {
            return Err(MeshError::DegenerateEdge { index: i });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_topology() {
        let cube = WireMesh::cube(100.0);
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.edges().len(), 12);
        assert_eq!(cube.faces().len(), 6);

        // Every vertex sits on a corner of the half-extent box.
        for v in cube.vertices() {
            assert_eq!(v.x.abs(), 100.0);
            assert_eq!(v.y.abs(), 100.0);
            assert_eq!(v.z.abs(), 100.0);
        }
    }

    #[test]
    fn test_out_of_range_edge_rejected() {
        let vertices = vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        let result = WireMesh::new(vertices, vec![[0, 2]]);
        assert_eq!(
            result.unwrap_err(),
            MeshError::InvalidIndex {
                index: 2,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn test_self_edge_rejected() {
        let vertices = vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        let result = WireMesh::new(vertices, vec![[1, 1]]);
        assert_eq!(result.unwrap_err(), MeshError::DegenerateEdge { index: 1 });
    }

    #[test]
    fn test_quads_derive_deduplicated_edges() {
        // Two quads sharing the 1-2 edge: 7 distinct edges, not 8.
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
        ];
        let mesh = WireMesh::from_quads(vertices, vec![[0, 1, 2, 3], [1, 4, 5, 2]]).unwrap();
        assert_eq!(mesh.edges().len(), 7);
        assert_eq!(mesh.faces().len(), 2);
    }

    #[test]
    fn test_quads_with_bad_index_rejected() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        assert!(WireMesh::from_quads(vertices, vec![[0, 1, 2, 9]]).is_err());
    }
}

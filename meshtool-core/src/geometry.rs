/// Mesh data extracted from a scene file
use nalgebra::{Point3, Vector3};

use crate::error::{MeshError, Result};

/// A triangle face as three indices into the vertex list
pub type Face = [usize; 3];

/// Vertex and face lists of a single sub-mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Point3<f64>>,
    pub faces: Vec<Face>,
}

impl MeshData {
    pub fn new(vertices: Vec<Point3<f64>>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Unweighted centroid of all vertices
    pub fn center_of_mass(&self) -> Result<Point3<f64>> {
        center_of_mass(&self.vertices)
    }

    /// Check that every face index points at an existing vertex.
    ///
    /// Reports the first offending face in file order.
    pub fn validate_faces(&self) -> Result<()> {
        let vertex_count = self.vertex_count();
        for (face, indices) in self.faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i >= vertex_count) {
                return Err(MeshError::FaceIndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

/// Coordinate-wise arithmetic mean of a vertex list.
///
/// An empty list has no mean and yields [`MeshError::EmptyInput`] rather
/// than a NaN-filled point.
pub fn center_of_mass(vertices: &[Point3<f64>]) -> Result<Point3<f64>> {
    if vertices.is_empty() {
        return Err(MeshError::EmptyInput);
    }

    let sum = vertices
        .iter()
        .fold(Vector3::zeros(), |acc, vertex| acc + vertex.coords);

    Ok(Point3::from(sum / vertices.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create an axis-aligned cube centered on the origin
    fn cube(size: f64) -> MeshData {
        let half = size / 2.0;
        let vertices = vec![
            Point3::new(-half, -half, -half),
            Point3::new(half, -half, -half),
            Point3::new(half, half, -half),
            Point3::new(-half, half, -half),
            Point3::new(-half, -half, half),
            Point3::new(half, -half, half),
            Point3::new(half, half, half),
            Point3::new(-half, half, half),
        ];
        let faces = vec![
            // Front
            [4, 5, 6],
            [4, 6, 7],
            // Back
            [0, 3, 2],
            [0, 2, 1],
            // Top
            [3, 7, 6],
            [3, 6, 2],
            // Bottom
            [0, 1, 5],
            [0, 5, 4],
            // Right
            [1, 2, 6],
            [1, 6, 5],
            // Left
            [0, 4, 7],
            [0, 7, 3],
        ];
        MeshData::new(vertices, faces)
    }

    #[test]
    fn test_center_of_tetrahedron_corners() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(0.0, 0.0, 2.0),
        ];
        let center = center_of_mass(&vertices).unwrap();
        assert_eq!(center, Point3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_single_vertex_is_its_own_center() {
        let center = center_of_mass(&[Point3::new(1.0, 2.0, 3.0)]).unwrap();
        assert_eq!(center, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_empty_vertex_list_is_rejected() {
        let result = center_of_mass(&[]);
        assert!(matches!(result, Err(MeshError::EmptyInput)));
    }

    #[test]
    fn test_cube_is_centered_and_valid() {
        let cube = cube(2.0);
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.face_count(), 12);
        assert!(cube.validate_faces().is_ok());

        let center = cube.center_of_mass().unwrap();
        assert!(center.coords.norm() < 1e-12);
    }

    #[test]
    fn test_out_of_range_face_is_reported() {
        let mut mesh = cube(1.0);
        mesh.faces.push([0, 1, 8]);

        match mesh.validate_faces() {
            Err(MeshError::FaceIndexOutOfRange {
                face,
                index,
                vertex_count,
            }) => {
                assert_eq!(face, 12);
                assert_eq!(index, 8);
                assert_eq!(vertex_count, 8);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

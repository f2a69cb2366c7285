/// Homogeneous rotation matrices about the coordinate axes
use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix4, Point3, Vector3};

use crate::error::{MeshError, Result};

/// Rotation applied when no angle is given
pub const DEFAULT_ANGLE_DEGREES: f64 = 1.0;

/// Coordinate axis to rotate about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl FromStr for Axis {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(MeshError::InvalidAxis(other.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Rotation by `degrees` about `axis`, right-handed, translation-free
    pub fn rotation_matrix(axis: Axis, degrees: f64) -> Matrix4<f64> {
        let radians = degrees.to_radians();
        let (s, c) = radians.sin_cos();

        // Matrix4::new takes its arguments row by row
        match axis {
            Axis::X => Matrix4::new(
                1.0, 0.0, 0.0, 0.0,
                0.0, c, -s, 0.0,
                0.0, s, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
            Axis::Y => Matrix4::new(
                c, 0.0, s, 0.0,
                0.0, 1.0, 0.0, 0.0,
                -s, 0.0, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
            Axis::Z => Matrix4::new(
                c, -s, 0.0, 0.0,
                s, c, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
        }
    }

    /// Create a translation matrix
    pub fn translation_matrix(offset: &Vector3<f64>) -> Matrix4<f64> {
        Matrix4::new_translation(offset)
    }

    /// Rotation about an axis through `center` instead of the origin
    pub fn rotation_about_point(axis: Axis, degrees: f64, center: &Point3<f64>) -> Matrix4<f64> {
        Self::translation_matrix(&center.coords)
            * Self::rotation_matrix(axis, degrees)
            * Self::translation_matrix(&-center.coords)
    }

    /// Flatten a matrix into its 16 entries, row by row
    pub fn row_major(matrix: &Matrix4<f64>) -> [f64; 16] {
        let mut entries = [0.0; 16];
        for (row, chunk) in entries.chunks_exact_mut(4).enumerate() {
            for (col, entry) in chunk.iter_mut().enumerate() {
                *entry = matrix[(row, col)];
            }
        }
        entries
    }
}

/// Build the row-major rotation matrix for a textual axis identifier
pub fn create_rotation_matrix(axis: &str, degrees: f64) -> Result<[f64; 16]> {
    let axis: Axis = axis.parse()?;
    Ok(Transform::row_major(&Transform::rotation_matrix(axis, degrees)))
}

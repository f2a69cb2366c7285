/// Meshtool Core Library - Mesh loading and geometric computations
///
/// This library provides the stateless core shared by the meshtool
/// binaries: JSON scene loading, center-of-mass calculation and
/// axis-aligned rotation matrices.

pub mod error;
pub mod geometry;
pub mod loader;
pub mod transform;

// Re-export commonly used types
pub use error::{MeshError, Result};
pub use geometry::{center_of_mass, Face, MeshData};
pub use loader::{extract_mesh, load_mesh, load_mesh_at, read_json_file};
pub use transform::{create_rotation_matrix, Axis, Transform, DEFAULT_ANGLE_DEGREES};

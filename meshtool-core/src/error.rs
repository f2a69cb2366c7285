/// Error taxonomy for loading meshes and building transforms
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MeshError>;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing field `{path}`")]
    MissingField { path: String },

    #[error("`{path}` has the wrong shape: expected {expected}")]
    TypeMismatch { path: String, expected: &'static str },

    #[error("invalid axis {0:?}, must be \"x\", \"y\", or \"z\"")]
    InvalidAxis(String),

    #[error("cannot compute the center of mass of an empty vertex list")]
    EmptyInput,

    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
}

impl MeshError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    pub(crate) fn mismatch(path: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected,
        }
    }
}

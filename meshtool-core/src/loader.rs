/// Mesh scene loader for JSON files
///
/// The expected document shape is
/// `{ "meshes": [ { "vertices": [x, y, z, ...], "faces": [[a, b, c], ...] } ] }`.
/// Other keys (normals, texture coordinates, materials) are ignored.
use std::fs;
use std::io;
use std::path::Path;

use nalgebra::Point3;
use serde_json::Value;
use tracing::debug;

use crate::error::{MeshError, Result};
use crate::geometry::{Face, MeshData};

/// Read a file and parse its whole contents as JSON
pub fn read_json_file(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => MeshError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => MeshError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&text).map_err(|source| MeshError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the first sub-mesh of a scene file
pub fn load_mesh(path: impl AsRef<Path>) -> Result<MeshData> {
    load_mesh_at(path, 0)
}

/// Load the sub-mesh at `index` of a scene file
pub fn load_mesh_at(path: impl AsRef<Path>, index: usize) -> Result<MeshData> {
    let path = path.as_ref();
    let document = read_json_file(path)?;
    let mesh = extract_mesh(&document, index)?;

    debug!(
        path = %path.display(),
        index,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "loaded mesh"
    );

    Ok(mesh)
}

/// Pull the vertex and face lists of `meshes[index]` out of a parsed document
pub fn extract_mesh(document: &Value, index: usize) -> Result<MeshData> {
    let meshes = document
        .get("meshes")
        .ok_or_else(|| MeshError::missing("meshes"))?
        .as_array()
        .ok_or_else(|| MeshError::mismatch("meshes", "an array of meshes"))?;

    let mesh_path = format!("meshes[{}]", index);
    let mesh = meshes
        .get(index)
        .ok_or_else(|| MeshError::missing(mesh_path.clone()))?;

    let vertices = extract_vertices(mesh, &mesh_path)?;
    let faces = extract_faces(mesh, &mesh_path)?;

    Ok(MeshData::new(vertices, faces))
}

fn extract_vertices(mesh: &Value, mesh_path: &str) -> Result<Vec<Point3<f64>>> {
    let path = format!("{}.vertices", mesh_path);
    let values = mesh
        .get("vertices")
        .ok_or_else(|| MeshError::missing(path.clone()))?
        .as_array()
        .ok_or_else(|| MeshError::mismatch(path.clone(), "a flat array of numbers"))?;

    if values.len() % 3 != 0 {
        return Err(MeshError::mismatch(path, "a length divisible by 3"));
    }

    let coords = values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            value
                .as_f64()
                .ok_or_else(|| MeshError::mismatch(format!("{}[{}]", path, i), "a number"))
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(coords
        .chunks_exact(3)
        .map(|xyz| Point3::new(xyz[0], xyz[1], xyz[2]))
        .collect())
}

fn extract_faces(mesh: &Value, mesh_path: &str) -> Result<Vec<Face>> {
    let path = format!("{}.faces", mesh_path);
    let groups = mesh
        .get("faces")
        .ok_or_else(|| MeshError::missing(path.clone()))?
        .as_array()
        .ok_or_else(|| MeshError::mismatch(path.clone(), "an array of index arrays"))?;

    // Inner arrays are flattened before regrouping, so their own lengths
    // only matter in total.
    let mut indices = Vec::with_capacity(groups.len() * 3);
    for (i, group) in groups.iter().enumerate() {
        let group_path = format!("{}[{}]", path, i);
        let group = group
            .as_array()
            .ok_or_else(|| MeshError::mismatch(group_path.clone(), "an array of indices"))?;

        for (j, value) in group.iter().enumerate() {
            let index = value
                .as_u64()
                .and_then(|index| usize::try_from(index).ok())
                .ok_or_else(|| {
                    MeshError::mismatch(format!("{}[{}]", group_path, j), "a non-negative integer")
                })?;
            indices.push(index);
        }
    }

    if indices.len() % 3 != 0 {
        return Err(MeshError::mismatch(
            path,
            "a total index count divisible by 3",
        ));
    }

    Ok(indices
        .chunks_exact(3)
        .map(|abc| [abc[0], abc[1], abc[2]])
        .collect())
}

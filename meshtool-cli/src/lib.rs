/// Command-line front end for meshtool
///
/// Both binaries share one pipeline: load a sub-mesh from a JSON scene,
/// optionally validate its faces, then compute a single result.
use anyhow::{Context, Result};
use nalgebra::Point3;
use tracing::{debug, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use meshtool_core::{load_mesh_at, Axis, MeshData, Transform};

pub mod args;
pub mod output;

pub use args::{CenterOfMassOptions, Parsed, RotateOptions};
pub use output::{format_point, format_values};

/// Install the stderr logger, filtered by `RUST_LOG` (default `warn`)
pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}

/// Load the requested sub-mesh and check its face indices.
///
/// Bad indices are only logged unless `strict` is set.
pub fn load_checked(path: &std::path::Path, mesh_index: usize, strict: bool) -> Result<MeshData> {
    let mesh = load_mesh_at(path, mesh_index)
        .with_context(|| format!("failed to load mesh from {}", path.display()))?;
    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "mesh loaded"
    );

    if let Err(err) = mesh.validate_faces() {
        if strict {
            return Err(err).context("face validation failed");
        }
        warn!("{}", err);
    }

    Ok(mesh)
}

pub fn center_of_mass(options: &CenterOfMassOptions) -> Result<Point3<f64>> {
    let mesh = load_checked(&options.path, options.mesh_index, options.strict)?;
    let center = mesh
        .center_of_mass()
        .context("failed to compute center of mass")?;
    debug!(x = center.x, y = center.y, z = center.z, "center of mass");
    Ok(center)
}

/// Row-major rotation matrix for the requested axis and angle
pub fn rotation(options: &RotateOptions) -> Result<[f64; 16]> {
    let mesh = load_checked(&options.path, options.mesh_index, options.strict)?;

    let axis: Axis = options
        .axis
        .parse()
        .context("failed to build rotation matrix")?;
    info!(%axis, degrees = options.angle_degrees, "building rotation");

    let matrix = if options.about_center {
        let center = mesh
            .center_of_mass()
            .context("failed to compute rotation center")?;
        debug!(x = center.x, y = center.y, z = center.z, "rotating about center");
        Transform::rotation_about_point(axis, options.angle_degrees, &center)
    } else {
        Transform::rotation_matrix(axis, options.angle_degrees)
    };

    Ok(Transform::row_major(&matrix))
}

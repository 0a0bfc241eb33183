//! Volume → mesh extraction pipeline.
//!
//! Smooths the volume, resolves the level semantics, extracts the
//! isosurface, and normalizes the result into a canonical mesh.

use serde::{Deserialize, Serialize};
use tracing::info;

use cortica_mesh::{normalize::normalize_mesh, MeshSource, NormalizeOptions, RawSurface, SurfaceMesh};
use cortica_types::constants::{DEFAULT_VOLUME_SMOOTH_FACTOR, HALF_UNIT_ISOVALUE};
use cortica_types::CorticaResult;

use crate::isosurface::{IsosurfaceExtractor, SurfaceNets};
use crate::smooth::{BoxSmoother, VolumeSmoother};
use crate::volume::ScalarVolume;

/// Level selection for isosurface extraction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Level {
    /// Isolate one integer label: every voxel not equal to the label is
    /// zeroed, then the surface is taken at the half-unit isovalue.
    Label(i64),
    /// Use the value directly as the isovalue on the smoothed field.
    Iso(f32),
}

/// Options for [`volume_to_mesh`].
#[derive(Debug, Clone)]
pub struct VolumeMeshOptions {
    /// Smoothing kernel width applied to the volume before extraction.
    pub smooth_factor: usize,
    /// Level selection; `None` takes the surface at the half-unit
    /// isovalue (the volume is expected to be a {0,1}-ish mask).
    pub level: Option<Level>,
    /// Normalization options forwarded to the mesh stage.
    pub normalize: NormalizeOptions,
}

impl Default for VolumeMeshOptions {
    fn default() -> Self {
        Self {
            smooth_factor: DEFAULT_VOLUME_SMOOTH_FACTOR,
            level: None,
            normalize: NormalizeOptions::default(),
        }
    }
}

/// Converts a scalar volume into a canonical mesh using the default
/// collaborators ([`BoxSmoother`], [`SurfaceNets`]).
///
/// A volume with no data crossing the resolved isovalue yields the
/// empty mesh, which is a valid result rather than an error.
pub fn volume_to_mesh(
    volume: &ScalarVolume,
    options: &VolumeMeshOptions,
) -> CorticaResult<SurfaceMesh> {
    volume_to_mesh_with(volume, options, &BoxSmoother, &SurfaceNets)
}

/// [`volume_to_mesh`] with explicit smoothing and extraction
/// collaborators.
pub fn volume_to_mesh_with(
    volume: &ScalarVolume,
    options: &VolumeMeshOptions,
    smoother: &dyn VolumeSmoother,
    extractor: &dyn IsosurfaceExtractor,
) -> CorticaResult<SurfaceMesh> {
    volume.validate()?;

    let mut smoothed = smoother.smooth(volume, options.smooth_factor);

    let level = match options.level {
        None => HALF_UNIT_ISOVALUE,
        Some(Level::Iso(l)) => l,
        Some(Level::Label(label)) => {
            // Label isolation happens on the smoothed field; smoothing
            // keeps constant label regions exact, so the comparison
            // erodes the boundary but preserves the interior.
            let label_value = label as f32;
            for v in &mut smoothed.data {
                if *v != label_value {
                    *v = 0.0;
                }
            }
            HALF_UNIT_ISOVALUE
        }
    };

    let (vertices, faces) = extractor.extract(&smoothed, level);
    info!(
        vertices = vertices.len() / 3,
        faces = faces.len() / 3,
        level,
        "isosurface extracted"
    );

    let raw = RawSurface::from_arrays(&vertices, &faces, None)?;
    normalize_mesh(MeshSource::Raw(raw), &options.normalize)
}

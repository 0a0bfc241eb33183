//! # cortica-volume
//!
//! Scalar volume grid and the volume→mesh extraction pipeline.
//!
//! ## Key types and operations
//!
//! - [`ScalarVolume`] — dense 3-D scalar grid.
//! - [`smooth::VolumeSmoother`] / [`smooth::BoxSmoother`] — volumetric
//!   smoothing collaborator.
//! - [`isosurface::IsosurfaceExtractor`] / [`isosurface::SurfaceNets`] —
//!   isosurface extraction collaborator.
//! - [`extract::volume_to_mesh`] — smooth, resolve the level, extract,
//!   and normalize into a canonical mesh.

pub mod extract;
pub mod isosurface;
pub mod smooth;
pub mod volume;

pub use extract::{volume_to_mesh, volume_to_mesh_with, Level, VolumeMeshOptions};
pub use volume::ScalarVolume;

//! # cortica-mesh
//!
//! Canonical triangle-mesh representation and the connectivity operators
//! built on top of it.
//!
//! ## Key types and operations
//!
//! - [`SurfaceMesh`] — packed, render-ready vertex/face/normal buffers.
//! - [`normalize::normalize_mesh`] — turns raw arrays or a prebuilt mesh
//!   into a canonical [`SurfaceMesh`] (zero-based indices, per-vertex
//!   normals, optional orientation flip and spatial transform).
//! - [`adjacency::edge_adjacency`] — sparse vertex-adjacency graph from
//!   triangle faces.
//! - [`diffusion::smoothing_operator`] — sparse operator that propagates
//!   values from a seeded vertex subset to the full vertex set.
//! - Procedural generators for test meshes (quad grids, unit cube).

pub mod adjacency;
pub mod canonical;
pub mod diffusion;
pub mod generators;
pub mod mesh;
pub mod normalize;
pub mod normals;

pub use diffusion::DiffusionConfig;
pub use mesh::SurfaceMesh;
pub use normalize::{MeshSource, NormalizeOptions, RawSurface};

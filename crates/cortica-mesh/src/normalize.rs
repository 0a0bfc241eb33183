//! Mesh normalization.
//!
//! Turns raw vertex/face/normal arrays (or an already-built mesh) into
//! a canonical [`SurfaceMesh`]: zero-based `u32` indices, exactly one
//! `f32` normal per vertex, optional orientation flip and spatial
//! transform. This is the single entry point through which all geometry
//! reaches the rest of the pipeline.

use cortica_math::{Mat4, Vec3};
use cortica_types::{CorticaError, CorticaResult};
use num_traits::ToPrimitive;
use tracing::debug;

use crate::canonical::{check_stride3, packed_f32, packed_i64, packed_u32};
use crate::mesh::SurfaceMesh;
use crate::normals::vertex_normals;

/// Raw mesh arrays, canonicalized but not yet normalized.
///
/// Face indices stay signed until the zero-base shift resolves, so
/// 1-based (MATLAB-style) input is still representable.
#[derive(Debug, Clone)]
pub struct RawSurface {
    vertices: Vec<f32>,
    faces: Vec<i64>,
    normals: Option<Vec<f32>>,
}

impl RawSurface {
    /// Canonicalizes arbitrary numeric arrays into a `RawSurface`.
    ///
    /// `vertices` and `normals` are flat stride-3 point lists; `faces`
    /// is a flat stride-3 index list in any integer convention. Fails
    /// with `InvalidInput` on stride violations or values that do not
    /// survive a value-preserving cast.
    pub fn from_arrays<V, I>(
        vertices: &[V],
        faces: &[I],
        normals: Option<&[V]>,
    ) -> CorticaResult<Self>
    where
        V: ToPrimitive + Copy,
        I: ToPrimitive + Copy,
    {
        check_stride3(vertices.len(), "vertex")?;
        check_stride3(faces.len(), "face")?;
        if let Some(n) = normals {
            check_stride3(n.len(), "normal")?;
        }
        Ok(Self {
            vertices: packed_f32(vertices)?,
            faces: packed_i64(faces)?,
            normals: normals.map(packed_f32).transpose()?,
        })
    }
}

/// Input to [`normalize_mesh`].
///
/// The prebuilt case wins over everything: its buffers are taken as-is
/// and its per-vertex normals are trusted.
#[derive(Debug, Clone)]
pub enum MeshSource {
    /// Raw arrays that still need index shifting and normal computation.
    Raw(RawSurface),
    /// A mesh that already carries canonical buffers.
    Prebuilt(SurfaceMesh),
}

/// Options for [`normalize_mesh`].
#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    /// Negate every normal component. Use when the surface renders
    /// dark because its normals point inward.
    pub invert_normals: bool,
    /// Spatial transform applied to positions and normals alike; the
    /// homogeneous component is dropped after mapping.
    pub transform: Option<Mat4>,
}

/// Produces a canonical [`SurfaceMesh`] from raw arrays or a prebuilt mesh.
///
/// For raw input, faces are shifted so the minimum index is zero (this
/// handles 1-based input), and normals are recomputed from topology when
/// absent or mismatched. The orientation flip and transform apply to
/// both branches. Deterministic given identical inputs.
pub fn normalize_mesh(source: MeshSource, options: &NormalizeOptions) -> CorticaResult<SurfaceMesh> {
    let (positions, faces, mut normals) = match source {
        MeshSource::Prebuilt(mesh) => {
            let SurfaceMesh {
                positions,
                normals,
                faces,
            } = mesh;
            let normals = if normals.len() == positions.len() {
                normals
            } else {
                debug!("prebuilt mesh lacks per-vertex normals, recomputing");
                vertex_normals(&positions, &faces)
            };
            (positions, faces, normals)
        }
        MeshSource::Raw(raw) => {
            let RawSurface {
                vertices,
                faces,
                normals,
            } = raw;
            let faces = shift_to_zero_base(&faces)?;
            let normals = match normals {
                Some(n) if n.len() == vertices.len() => n,
                Some(_) | None => {
                    debug!("vertex normals computed from face topology");
                    vertex_normals(&vertices, &faces)
                }
            };
            (vertices, faces, normals)
        }
    };

    let vertex_count = positions.len() / 3;
    for &idx in &faces {
        if idx as usize >= vertex_count {
            return Err(CorticaError::InvalidInput(format!(
                "face index {} out of range (vertex count: {})",
                idx, vertex_count
            )));
        }
    }

    if options.invert_normals {
        for v in &mut normals {
            *v = -*v;
        }
    }

    let (positions, normals) = match options.transform {
        Some(m) => (map_points(&m, &positions), map_points(&m, &normals)),
        None => (positions, normals),
    };

    Ok(SurfaceMesh {
        positions,
        normals,
        faces,
    })
}

/// Shifts face indices so the minimum observed index is zero.
fn shift_to_zero_base(faces: &[i64]) -> CorticaResult<Vec<u32>> {
    let min = match faces.iter().min() {
        Some(&m) => m,
        None => return Ok(Vec::new()),
    };
    if min != 0 {
        debug!(shift = min, "face indices shifted to zero base");
        let shifted: Vec<i64> = faces.iter().map(|&f| f - min).collect();
        packed_u32(&shifted)
    } else {
        packed_u32(faces)
    }
}

/// Maps every stride-3 point through the transform, keeping the three
/// spatial components.
fn map_points(m: &Mat4, points: &[f32]) -> Vec<f32> {
    let mut out = Vec::with_capacity(points.len());
    for p in points.chunks_exact(3) {
        let mapped = m.transform_point3(Vec3::new(p[0], p[1], p[2]));
        out.push(mapped.x);
        out.push(mapped.y);
        out.push(mapped.z);
    }
    out
}

//! Canonical triangle mesh type with packed buffers.
//!
//! All three buffers are flat and contiguous:
//! - `positions: [x0, y0, z0, x1, y1, z1, ...]`
//! - `normals:   [nx0, ny0, nz0, ...]` — exactly one normal per vertex
//! - `faces:     [t0v0, t0v1, t0v2, t1v0, ...]`
//!
//! This is the render-ready layout GPU vertex buffers consume directly;
//! no re-packing happens downstream.

use serde::{Deserialize, Serialize};

use cortica_types::{CorticaError, CorticaResult};

/// A canonical triangle mesh.
///
/// Produced by [`crate::normalize::normalize_mesh`]; the empty mesh
/// (zero vertices, zero faces) is a valid value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurfaceMesh {
    /// Vertex positions, flat with stride 3.
    pub positions: Vec<f32>,
    /// Per-vertex normals, flat with stride 3.
    pub normals: Vec<f32>,
    /// Triangle indices, flat with stride 3.
    pub faces: Vec<u32>,
}

impl SurfaceMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        ]
    }

    /// Returns the normal of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn normal(&self, i: usize) -> [f32; 3] {
        [
            self.normals[i * 3],
            self.normals[i * 3 + 1],
            self.normals[i * 3 + 2],
        ]
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.faces[base], self.faces[base + 1], self.faces[base + 2]]
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All buffers have stride-3 lengths
    /// - Exactly one normal per vertex
    /// - Triangle indices are within bounds
    ///
    /// Degenerate triangles are allowed; upstream data may contain them
    /// and they are harmless to the connectivity operators.
    pub fn validate(&self) -> CorticaResult<()> {
        if self.positions.len() % 3 != 0 {
            return Err(CorticaError::InvalidInput(
                "Position buffer length is not divisible by 3".into(),
            ));
        }
        if self.faces.len() % 3 != 0 {
            return Err(CorticaError::InvalidInput(
                "Face buffer length is not divisible by 3".into(),
            ));
        }
        if self.normals.len() != self.positions.len() {
            return Err(CorticaError::InvalidInput(format!(
                "Normal buffer length ({}) != position buffer length ({})",
                self.normals.len(),
                self.positions.len()
            )));
        }

        let n = self.vertex_count();
        for (i, &idx) in self.faces.iter().enumerate() {
            if idx as usize >= n {
                return Err(CorticaError::InvalidInput(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        Ok(())
    }
}

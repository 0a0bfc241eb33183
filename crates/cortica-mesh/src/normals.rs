//! Vertex normal computation from triangle topology.
//!
//! Computes area-weighted vertex normals by accumulating face normals
//! from each adjacent triangle. Deterministic, and continuous under
//! small vertex perturbations.

use cortica_types::constants::NORMAL_EPSILON;

/// Computes per-vertex normals from positions and faces (area-weighted).
///
/// Each triangle's face normal (weighted by its area) is accumulated at
/// each of its vertices, then the result is normalized. Vertices with no
/// adjacent triangles, or whose accumulated normal cancels out, keep a
/// zero normal.
pub fn vertex_normals(positions: &[f32], faces: &[u32]) -> Vec<f32> {
    let mut normals = vec![0.0f32; positions.len()];

    // Accumulate area-weighted face normals
    for tri in faces.chunks_exact(3) {
        let a = tri[0] as usize * 3;
        let b = tri[1] as usize * 3;
        let c = tri[2] as usize * 3;

        // Edge vectors
        let e1x = positions[b] - positions[a];
        let e1y = positions[b + 1] - positions[a + 1];
        let e1z = positions[b + 2] - positions[a + 2];

        let e2x = positions[c] - positions[a];
        let e2y = positions[c + 1] - positions[a + 1];
        let e2z = positions[c + 2] - positions[a + 2];

        // Cross product (magnitude = 2 × triangle area)
        let nx = e1y * e2z - e1z * e2y;
        let ny = e1z * e2x - e1x * e2z;
        let nz = e1x * e2y - e1y * e2x;

        for &base in &[a, b, c] {
            normals[base] += nx;
            normals[base + 1] += ny;
            normals[base + 2] += nz;
        }
    }

    // Normalize
    for n in normals.chunks_exact_mut(3) {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        if len > NORMAL_EPSILON {
            let inv = 1.0 / len;
            n[0] *= inv;
            n[1] *= inv;
            n[2] *= inv;
        }
    }

    normals
}

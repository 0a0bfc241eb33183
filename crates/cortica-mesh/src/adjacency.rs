//! Vertex-adjacency graph from triangle faces.
//!
//! The graph records "shares an edge in some triangle" as a symmetric
//! sparse matrix. Edge multiplicities accumulate additively during
//! construction (an interior manifold edge ends up with weight 2) and
//! are consumed, not collapsed, downstream: the diffusion smoother
//! clips them.

use cortica_math::CsrMatrix;
use cortica_types::{CorticaError, CorticaResult};

/// Builds the vertex-adjacency matrix from a flat face index buffer.
///
/// The matrix is `N × N` with `N = max(faces) + 1`. For every triangle
/// `(a, b, c)`, weight 1 is accumulated at each of `(a,b)`, `(b,c)`,
/// `(c,a)` and at the transposed positions, so the result is symmetric
/// by construction. Empty input yields the 0×0 matrix.
pub fn edge_adjacency(faces: &[u32]) -> CorticaResult<CsrMatrix> {
    if faces.len() % 3 != 0 {
        return Err(CorticaError::InvalidInput(format!(
            "face buffer length ({}) is not divisible by 3",
            faces.len()
        )));
    }
    let n = match faces.iter().max() {
        Some(&m) => m as usize + 1,
        None => return Ok(CsrMatrix::new(0, 0)),
    };
    Ok(build(faces, n))
}

/// Like [`edge_adjacency`], but cross-checked against the caller's
/// vertex count.
///
/// Fails with `InvalidInput` when a face references a vertex at or past
/// `vertex_count`. A count larger than `max(faces) + 1` is allowed
/// (trailing vertices are simply isolated) and the matrix is padded to
/// `vertex_count × vertex_count` so row indices line up with the mesh.
pub fn edge_adjacency_checked(faces: &[u32], vertex_count: usize) -> CorticaResult<CsrMatrix> {
    if faces.len() % 3 != 0 {
        return Err(CorticaError::InvalidInput(format!(
            "face buffer length ({}) is not divisible by 3",
            faces.len()
        )));
    }
    if let Some(&m) = faces.iter().max() {
        if m as usize >= vertex_count {
            return Err(CorticaError::InvalidInput(format!(
                "face index {} out of range (vertex count: {})",
                m, vertex_count
            )));
        }
    }
    Ok(build(faces, vertex_count))
}

fn build(faces: &[u32], n: usize) -> CsrMatrix {
    // Three directed incidence triplet sets plus their transposes.
    let mut triplets = Vec::with_capacity(faces.len() * 2);
    for tri in faces.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        for (i, j) in [(a, b), (b, c), (c, a)] {
            triplets.push((i, j, 1.0));
            triplets.push((j, i, 1.0));
        }
    }
    CsrMatrix::from_triplets(n, n, &triplets)
}

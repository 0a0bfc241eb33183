//! Diffusion smoothing operator.
//!
//! Builds a sparse linear map that propagates values known at a subset
//! of "seed" vertices to every vertex reachable through the adjacency
//! graph, by iterated neighbor averaging. Applying the operator to a
//! vector of seed values yields an estimate at all `N` vertices; rows
//! for vertices no diffusion step ever reaches stay all-zero.

use cortica_math::CsrMatrix;
use cortica_types::constants::{DEFAULT_SMOOTHING_STEPS, SMOOTHING_ITERATION_CAP};
use cortica_types::{CorticaError, CorticaResult};
use tracing::debug;

/// Configuration for [`smoothing_operator`].
#[derive(Debug, Clone)]
pub struct DiffusionConfig {
    /// Number of smoothing steps. `None` keeps iterating until every
    /// vertex has been reached; only meaningful when the seeds cover a
    /// subsampled version of the mesh.
    pub steps: Option<usize>,

    /// Safety bound on coverage-mode iteration (`steps: None`). Regions
    /// unreachable from the seed set would otherwise spin forever; when
    /// the cap is hit, their rows are returned as all-zero.
    pub iteration_cap: usize,
}

impl Default for DiffusionConfig {
    fn default() -> Self {
        Self {
            steps: Some(DEFAULT_SMOOTHING_STEPS),
            iteration_cap: SMOOTHING_ITERATION_CAP,
        }
    }
}

impl DiffusionConfig {
    /// Coverage mode: iterate until the whole mesh is reached (bounded
    /// by the default iteration cap).
    pub fn until_coverage() -> Self {
        Self {
            steps: None,
            ..Default::default()
        }
    }
}

/// Builds the `N × |seeds|` smoothing operator for the given adjacency
/// matrix.
///
/// Algorithm, per step: restrict the (self-loop augmented) adjacency to
/// the currently active columns, find every row with nonzero degree,
/// row-normalize, and compose with the operator accumulated so far.
/// Each output row is a weighted average over the neighbors reached in
/// the final step; column `j` corresponds to `seeds[j]`.
///
/// Multiplicity weights of exactly 2 in `adjacency` are clipped to 1
/// before iteration, so an interior edge counts once.
///
/// An empty seed set yields the valid degenerate `N × 0` operator.
pub fn smoothing_operator(
    seeds: &[usize],
    adjacency: &CsrMatrix,
    config: &DiffusionConfig,
) -> CorticaResult<CsrMatrix> {
    if adjacency.rows != adjacency.cols {
        return Err(CorticaError::InvalidInput(format!(
            "adjacency matrix must be square, got {}×{}",
            adjacency.rows, adjacency.cols
        )));
    }
    let n = adjacency.rows;
    for &s in seeds {
        if s >= n {
            return Err(CorticaError::InvalidInput(format!(
                "seed index {} out of range (vertex count: {})",
                s, n
            )));
        }
    }
    if config.steps == Some(0) {
        return Err(CorticaError::InvalidConfig(
            "smoothing steps must be >= 1".into(),
        ));
    }
    if seeds.is_empty() {
        debug!("empty seed set, returning zero-column operator");
        return Ok(CsrMatrix::new(n, 0));
    }

    // E = clip(adjacency) + I
    let mut clipped = adjacency.clone();
    for v in &mut clipped.values {
        if *v == 2.0 {
            *v = 1.0;
        }
    }
    let mut triplets = clipped.to_triplets();
    triplets.extend((0..n).map(|i| (i, i, 1.0)));
    let e = CsrMatrix::from_triplets(n, n, &triplets);

    let coverage_mode = config.steps.is_none();
    let n_iter = config.steps.unwrap_or(config.iteration_cap);

    // The accumulated operator starts as an identity placeholder: the
    // first step's normalized restriction simply becomes the operator.
    let mut active: Vec<usize> = seeds.to_vec();
    let mut smooth: Option<CsrMatrix> = None;

    for _ in 0..n_iter {
        // Restrict to the active columns; rows with nonzero degree form
        // the next active set.
        let e_use = e.select_columns(&active);
        let degree = e_use.row_sums();
        let next: Vec<usize> = (0..n).filter(|&i| degree[i] != 0.0).collect();
        let inv_degree: Vec<f32> = next.iter().map(|&i| 1.0 / degree[i]).collect();

        let step = e_use.select_rows(&next).scale_rows(&inv_degree);
        smooth = Some(match smooth {
            None => step,
            Some(prev) => step.matmul(&prev),
        });
        active = next;

        if coverage_mode && active.len() >= n {
            break;
        }
    }

    if coverage_mode && active.len() < n {
        debug!(
            reached = active.len(),
            total = n,
            "coverage-mode diffusion hit the iteration cap with unreached vertices"
        );
    }

    // Re-express rows against the original vertex numbering and pin the
    // shape to exactly N × |seeds|.
    let mat = smooth.unwrap_or_else(|| CsrMatrix::new(0, seeds.len()));
    let mut remapped = Vec::with_capacity(mat.nnz());
    for i in 0..mat.rows {
        for k in mat.row_ptr[i]..mat.row_ptr[i + 1] {
            remapped.push((active[i], mat.col_idx[k], mat.values[k]));
        }
    }
    Ok(CsrMatrix::from_triplets(n, seeds.len(), &remapped))
}

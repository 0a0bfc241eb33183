//! Sparse matrix representation.
//!
//! Provides a CSR (Compressed Sparse Row) matrix with the small set of
//! operations the adjacency graph and diffusion smoother need: triplet
//! assembly with duplicate accumulation, row/column restriction, row
//! scaling, and sparse-sparse products. Nothing here densifies; memory
//! stays proportional to the number of stored entries.

use serde::{Deserialize, Serialize};

/// Compressed Sparse Row (CSR) matrix.
///
/// Stores a sparse matrix in row-major order. `row_ptr[i]..row_ptr[i+1]`
/// are the indices into `col_idx` and `values` for non-zeros in row `i`,
/// with column indices sorted within each row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsrMatrix {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Row pointer array (length = rows + 1).
    pub row_ptr: Vec<usize>,
    /// Column indices of non-zero entries.
    pub col_idx: Vec<usize>,
    /// Non-zero values.
    pub values: Vec<f32>,
}

impl CsrMatrix {
    /// Creates an empty CSR matrix with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row_ptr: vec![0; rows + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates the n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        Self {
            rows: n,
            cols: n,
            row_ptr: (0..=n).collect(),
            col_idx: (0..n).collect(),
            values: vec![1.0; n],
        }
    }

    /// Returns the number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Creates a CSR matrix from triplets (row, col, value).
    ///
    /// Entries at the same (row, col) position are summed, so edge
    /// multiplicities accumulate additively.
    pub fn from_triplets(rows: usize, cols: usize, triplets: &[(usize, usize, f32)]) -> Self {
        // Count entries per row
        let mut row_counts = vec![0usize; rows];
        for &(r, _, _) in triplets {
            row_counts[r] += 1;
        }

        // Build raw (pre-merge) row pointers
        let mut raw_ptr = vec![0usize; rows + 1];
        for i in 0..rows {
            raw_ptr[i + 1] = raw_ptr[i] + row_counts[i];
        }

        let raw_nnz = raw_ptr[rows];
        let mut raw_col = vec![0usize; raw_nnz];
        let mut raw_val = vec![0.0f32; raw_nnz];

        // Fill in — use row_counts as write cursor
        let mut cursor = raw_ptr[..rows].to_vec();
        for &(r, c, v) in triplets {
            let pos = cursor[r];
            raw_col[pos] = c;
            raw_val[pos] = v;
            cursor[r] += 1;
        }

        // Sort each row by column index, then merge duplicates
        let mut row_ptr = vec![0usize; rows + 1];
        let mut col_idx = Vec::with_capacity(raw_nnz);
        let mut values = Vec::with_capacity(raw_nnz);

        for i in 0..rows {
            let start = raw_ptr[i];
            let end = raw_ptr[i + 1];
            let slice = &mut raw_col[start..end];
            let val_slice = &mut raw_val[start..end];

            // Simple insertion sort (rows are typically small)
            for j in 1..slice.len() {
                let mut k = j;
                while k > 0 && slice[k - 1] > slice[k] {
                    slice.swap(k - 1, k);
                    val_slice.swap(k - 1, k);
                    k -= 1;
                }
            }

            let mut j = 0;
            while j < slice.len() {
                let c = slice[j];
                let mut v = val_slice[j];
                j += 1;
                while j < slice.len() && slice[j] == c {
                    v += val_slice[j];
                    j += 1;
                }
                col_idx.push(c);
                values.push(v);
            }
            row_ptr[i + 1] = col_idx.len();
        }

        Self {
            rows,
            cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Returns the stored entries as (row, col, value) triplets.
    pub fn to_triplets(&self) -> Vec<(usize, usize, f32)> {
        let mut triplets = Vec::with_capacity(self.nnz());
        for i in 0..self.rows {
            for k in self.row_ptr[i]..self.row_ptr[i + 1] {
                triplets.push((i, self.col_idx[k], self.values[k]));
            }
        }
        triplets
    }

    /// Returns the stored value at (row, col), or 0.0 if absent.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        for k in self.row_ptr[row]..self.row_ptr[row + 1] {
            if self.col_idx[k] == col {
                return self.values[k];
            }
        }
        0.0
    }

    /// Restricts the matrix to the given columns.
    ///
    /// Result is `rows × cols.len()`; column `j` of the result is column
    /// `cols[j]` of the original. Columns not listed are dropped.
    pub fn select_columns(&self, cols: &[usize]) -> Self {
        let mut remap = vec![usize::MAX; self.cols];
        for (new, &c) in cols.iter().enumerate() {
            remap[c] = new;
        }

        let mut row_ptr = vec![0usize; self.rows + 1];
        let mut col_idx = Vec::new();
        let mut values = Vec::new();

        for i in 0..self.rows {
            for k in self.row_ptr[i]..self.row_ptr[i + 1] {
                let mapped = remap[self.col_idx[k]];
                if mapped != usize::MAX {
                    col_idx.push(mapped);
                    values.push(self.values[k]);
                }
            }
            // Restore sorted column order within the row
            let start = row_ptr[i];
            let row_cols = &mut col_idx[start..];
            let row_vals = &mut values[start..];
            for j in 1..row_cols.len() {
                let mut k = j;
                while k > 0 && row_cols[k - 1] > row_cols[k] {
                    row_cols.swap(k - 1, k);
                    row_vals.swap(k - 1, k);
                    k -= 1;
                }
            }
            row_ptr[i + 1] = col_idx.len();
        }

        Self {
            rows: self.rows,
            cols: cols.len(),
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Restricts the matrix to the given rows, in the given order.
    ///
    /// Result is `rows.len() × cols`.
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        let mut row_ptr = vec![0usize; rows.len() + 1];
        let mut col_idx = Vec::new();
        let mut values = Vec::new();

        for (new, &r) in rows.iter().enumerate() {
            for k in self.row_ptr[r]..self.row_ptr[r + 1] {
                col_idx.push(self.col_idx[k]);
                values.push(self.values[k]);
            }
            row_ptr[new + 1] = col_idx.len();
        }

        Self {
            rows: rows.len(),
            cols: self.cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Returns the sum of stored values in each row.
    pub fn row_sums(&self) -> Vec<f32> {
        let mut sums = vec![0.0f32; self.rows];
        for i in 0..self.rows {
            for k in self.row_ptr[i]..self.row_ptr[i + 1] {
                sums[i] += self.values[k];
            }
        }
        sums
    }

    /// Multiplies each row by the corresponding factor.
    ///
    /// Equivalent to a left product with `diag(factors)`.
    pub fn scale_rows(mut self, factors: &[f32]) -> Self {
        assert_eq!(factors.len(), self.rows, "one factor per row");
        for i in 0..self.rows {
            for k in self.row_ptr[i]..self.row_ptr[i + 1] {
                self.values[k] *= factors[i];
            }
        }
        self
    }

    /// Sparse-sparse product `self * other`.
    ///
    /// Uses a per-row scatter accumulator, so operand rows need not be
    /// sorted and the output stays sparse.
    pub fn matmul(&self, other: &CsrMatrix) -> Self {
        assert_eq!(self.cols, other.rows, "inner dimensions must agree");

        let mut row_ptr = vec![0usize; self.rows + 1];
        let mut col_idx = Vec::new();
        let mut values = Vec::new();

        let mut acc = vec![0.0f32; other.cols];
        let mut marked = vec![false; other.cols];
        let mut touched: Vec<usize> = Vec::new();

        for i in 0..self.rows {
            for k in self.row_ptr[i]..self.row_ptr[i + 1] {
                let a = self.values[k];
                let j = self.col_idx[k];
                for kk in other.row_ptr[j]..other.row_ptr[j + 1] {
                    let c = other.col_idx[kk];
                    if !marked[c] {
                        marked[c] = true;
                        touched.push(c);
                    }
                    acc[c] += a * other.values[kk];
                }
            }
            touched.sort_unstable();
            for &c in &touched {
                col_idx.push(c);
                values.push(acc[c]);
                acc[c] = 0.0;
                marked[c] = false;
            }
            touched.clear();
            row_ptr[i + 1] = col_idx.len();
        }

        Self {
            rows: self.rows,
            cols: other.cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Matrix-vector product `self * x`.
    pub fn mul_vec(&self, x: &[f32]) -> Vec<f32> {
        assert_eq!(x.len(), self.cols, "vector length must equal cols");
        let mut out = vec![0.0f32; self.rows];
        for i in 0..self.rows {
            for k in self.row_ptr[i]..self.row_ptr[i + 1] {
                out[i] += self.values[k] * x[self.col_idx[k]];
            }
        }
        out
    }
}

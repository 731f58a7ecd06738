use nalgebra::DMatrix;

use super::{parallel, single};

/// Which bound the right-neighbour check compares the column index against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RightEdgeBound {
    /// `j + 1 != rows - 1`. Matches the column bound on square grids only; on other
    /// shapes a right coupling can be skipped mid-row or wrap into the next interior
    /// row. Couplings past the last interior cell are dropped.
    #[default]
    RowCount,
    /// `j + 1 != cols - 1`, the plain five-point stencil.
    ColumnCount,
}

/// Five-point Laplacian over the interior cells of a `rows x cols` grid, scaled by α².
///
/// Interior cell `(i, j)` maps to `p = (i - 1) * (cols - 2) + (j - 1)`. Couplings to
/// boundary cells are omitted, which is what makes the boundary a fixed zero.
/// Stored row-compressed with each row in ascending column order, so a product
/// accumulates in the same order as the dense `dim x dim` matrix would.
#[derive(Debug, Clone, PartialEq)]
pub struct LaplacianOperator {
    dim: usize,
    inner_cols: usize,
    offsets: Vec<usize>,
    columns: Vec<usize>,
    values: Vec<f64>,
}

impl LaplacianOperator {
    pub fn build(rows: usize, cols: usize, alpha: f64, bound: RightEdgeBound) -> Self {
        let inner_rows = rows.saturating_sub(2);
        let inner_cols = cols.saturating_sub(2);
        let dim = inner_rows * inner_cols;

        let mut op = LaplacianOperator {
            dim,
            inner_cols,
            offsets: Vec::with_capacity(dim + 1),
            columns: Vec::with_capacity(dim * 5),
            values: Vec::with_capacity(dim * 5),
        };
        op.offsets.push(0);
        if dim == 0 {
            return op;
        }

        let a2 = alpha * alpha;
        let right_limit = match bound {
            RightEdgeBound::RowCount => rows - 1,
            RightEdgeBound::ColumnCount => cols - 1,
        };

        let mut p = 0;
        for i in 1..rows - 1 {
            for j in 1..cols - 1 {
                if i - 1 != 0 {
                    op.set(p - inner_cols, a2);
                }
                if j - 1 != 0 {
                    op.set(p - 1, a2);
                }
                op.set(p, -4.0 * a2);
                if j + 1 != right_limit && p + 1 < dim {
                    op.set(p + 1, a2);
                }
                if i + 1 != rows - 1 {
                    op.set(p + inner_cols, a2);
                }
                op.offsets.push(op.columns.len());
                p += 1;
            }
        }

        op
    }

    // Entries arrive in ascending column order; a repeated column overwrites.
    fn set(&mut self, column: usize, value: f64) {
        let row_start = *self.offsets.last().unwrap_or(&0);
        if self.columns.len() > row_start && self.columns.last() == Some(&column) {
            if let Some(last) = self.values.last_mut() {
                *last = value;
            }
            return;
        }
        self.columns.push(column);
        self.values.push(value);
    }

    /// Side length of the square operator, the number of interior cells.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Interior cells per grid row.
    pub fn inner_cols(&self) -> usize {
        self.inner_cols
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Coefficient at `(p, q)`, zero when not stored.
    pub fn entry(&self, p: usize, q: usize) -> f64 {
        if p >= self.dim {
            return 0.0;
        }
        let (columns, values) = self.row(p);
        columns
            .iter()
            .position(|&c| c == q)
            .map_or(0.0, |k| values[k])
    }

    pub(crate) fn row(&self, p: usize) -> (&[usize], &[f64]) {
        let range = self.offsets[p]..self.offsets[p + 1];
        (&self.columns[range.clone()], &self.values[range])
    }

    #[inline]
    pub(crate) fn row_dot(&self, p: usize, v: &[f64]) -> f64 {
        let (columns, values) = self.row(p);
        let mut acc = 0.0;
        for (&c, &a) in columns.iter().zip(values) {
            acc += a * v[c];
        }
        acc
    }

    pub fn to_dense(&self) -> DMatrix<f64> {
        let mut m = DMatrix::zeros(self.dim, self.dim);
        for p in 0..self.dim {
            let (columns, values) = self.row(p);
            for (&q, &a) in columns.iter().zip(values) {
                m[(p, q)] = a;
            }
        }
        m
    }

    /// `L · v` on the current thread.
    pub fn apply(&self, v: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.dim];
        single::apply(self, v, &mut out);
        out
    }

    /// `L · v` split across rayon's pool, one interior grid row per task.
    pub fn par_apply(&self, v: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.dim];
        parallel::apply(self, v, &mut out);
        out
    }
}

use std::fmt;
use std::ops::Index;

use crate::error::{HeatError, Result};

/// Temperature field addressed `[row][col]`, stored row-major.
///
/// Rows follow the y axis and columns the x axis. The outer ring of cells is the
/// fixed zero boundary; only interior cells ever change.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid {
    /// All-zero grid.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a grid from nested rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        if rows.iter().any(|r| r.len() != n_cols) {
            return Err(HeatError::InvalidGrid {
                rows: n_rows,
                cols: n_cols,
                reason: "rows have different lengths",
            });
        }

        Ok(Grid {
            rows: n_rows,
            cols: n_cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Grid { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row-major view of every cell.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn is_boundary(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.rows || col + 1 == self.cols
    }

    pub fn boundary_is_zero(&self) -> bool {
        (0..self.rows)
            .flat_map(|i| (0..self.cols).map(move |j| (i, j)))
            .filter(|&(i, j)| self.is_boundary(i, j))
            .all(|(i, j)| self.data[i * self.cols + j] == 0.0)
    }

    /// Number of interior cells, `(rows - 2) * (cols - 2)`, zero for degenerate grids.
    pub fn interior_len(&self) -> usize {
        self.rows.saturating_sub(2) * self.cols.saturating_sub(2)
    }

    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    pub fn interior_mean(&self) -> Option<f64> {
        let n = self.interior_len();
        if n == 0 {
            return None;
        }
        let sum: f64 = (1..self.rows - 1)
            .flat_map(|i| self.row(i)[1..self.cols - 1].iter())
            .sum();
        Some(sum / n as f64)
    }

    /// Adds `velocity` cell by cell. Boundary cells of the velocity are zero, so the
    /// boundary of `self` is untouched.
    pub(crate) fn accumulate(&mut self, velocity: &VelocityField) {
        debug_assert_eq!((self.rows, self.cols), (velocity.rows, velocity.cols));
        for (cell, delta) in self.data.iter_mut().zip(&velocity.data) {
            *cell += delta;
        }
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for v in self.row(i) {
                write!(f, "{:8.2} ", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Per-cell temperature change produced by one diffusion step.
#[derive(Clone, Debug, PartialEq)]
pub struct VelocityField {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl VelocityField {
    pub(crate) fn zeros(rows: usize, cols: usize) -> Self {
        VelocityField {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Writes the interior vector (row-major over interior cells) into place,
    /// leaving the boundary at zero.
    pub(crate) fn scatter_interior(&mut self, interior: &[f64]) {
        let inner_cols = self.cols.saturating_sub(2);
        debug_assert_eq!(interior.len(), self.rows.saturating_sub(2) * inner_cols);
        if inner_cols == 0 {
            return;
        }
        for (r, chunk) in interior.chunks(inner_cols).enumerate() {
            let i = r + 1;
            let start = i * self.cols + 1;
            self.data[start..start + inner_cols].copy_from_slice(chunk);
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl Index<(usize, usize)> for VelocityField {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_and_index() {
        let g = Grid::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g[(1, 0)], 4.0);
        assert_eq!(g.get(0, 2), Some(3.0));
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, HeatError::InvalidGrid { rows: 2, .. }));
    }

    #[test]
    fn test_boundary_helpers() {
        let mut rows = vec![vec![0.0; 4]; 4];
        rows[1][1] = 7.0;
        rows[2][2] = 3.0;
        let g = Grid::from_rows(rows).unwrap();

        assert!(g.is_boundary(0, 2));
        assert!(g.is_boundary(3, 1));
        assert!(g.is_boundary(2, 3));
        assert!(!g.is_boundary(1, 2));
        assert!(g.boundary_is_zero());
        assert_eq!(g.interior_len(), 4);
        assert_eq!(g.interior_mean(), Some(2.5));
        assert_eq!(g.min_max(), Some((0.0, 7.0)));

        let mut rows = vec![vec![0.0; 3]; 3];
        rows[0][1] = 1.0;
        assert!(!Grid::from_rows(rows).unwrap().boundary_is_zero());
    }

    #[test]
    fn test_degenerate_interior() {
        let g = Grid::zeros(2, 5);
        assert_eq!(g.interior_len(), 0);
        assert_eq!(g.interior_mean(), None);
        assert_eq!(Grid::zeros(0, 0).min_max(), None);
    }

    #[test]
    fn test_scatter_and_accumulate() {
        let mut v = VelocityField::zeros(4, 5);
        v.scatter_interior(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(v[(1, 1)], 1.0);
        assert_eq!(v[(1, 3)], 3.0);
        assert_eq!(v[(2, 1)], 4.0);
        assert_eq!(v[(0, 0)], 0.0);
        assert_eq!(v[(2, 4)], 0.0);

        let mut g = Grid::zeros(4, 5);
        g.accumulate(&v);
        g.accumulate(&v);
        assert_eq!(g[(2, 3)], 12.0);
        assert!(g.boundary_is_zero());
    }
}

use nalgebra::{DMatrix, DVector};

use super::SurfaceModel;
use crate::error::{HeatError, Result};
use crate::point::Point;

/// Smallest accepted `σ_min / σ_max` of the column-scaled system. Below this the
/// coefficients are dominated by rounding and the fit is rejected as singular.
pub const CONDITION_TOLERANCE: f64 = 1e-12;

/// Fits a [`SurfaceModel`] that passes through every sample.
///
/// For `N` samples the unknowns are `[c, a₁..a_xs, b₁..b_ys]` with
/// `(xs, ys) = SurfaceModel::term_split(N)`. Row `i` of the system is
///
/// ```text
/// [1, xᵢ, xᵢ², .., xᵢ^xs, yᵢ, yᵢ², .., yᵢ^ys] · coeffs = zᵢ
/// ```
///
/// The y block starts at column `xs + 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceFitter;

impl SurfaceFitter {
    pub fn fit(points: &[Point]) -> Result<SurfaceModel> {
        let (a, b) = Self::system(points)?;
        let n = points.len();
        let (x_size, y_size) = SurfaceModel::term_split(n);

        log::debug!("solving {n}x{n} interpolation system ({x_size} x terms, {y_size} y terms)");

        let rcond = Self::reciprocal_condition(&a);
        if rcond < CONDITION_TOLERANCE {
            log::warn!(
                "interpolation matrix is ill-conditioned (rcond = {rcond:e}), cannot fit {n} samples"
            );
            return Err(HeatError::SingularMatrix { size: n });
        }

        let coefficients = match a.lu().solve(&b) {
            Some(c) if c.iter().all(|v| v.is_finite()) => c,
            _ => {
                log::warn!("interpolation matrix is singular, cannot fit {n} samples");
                return Err(HeatError::SingularMatrix { size: n });
            }
        };

        let c = coefficients.as_slice();
        debug_assert_eq!(c.len(), 1 + x_size + y_size);

        Ok(SurfaceModel::new(
            c[0],
            c[1..=x_size].to_vec(),
            c[x_size + 1..].to_vec(),
        ))
    }

    /// `σ_min / σ_max` of `a` after scaling every column to unit max-norm, so the
    /// differing magnitudes of the power columns do not count as ill-conditioning.
    /// Zero for a matrix with an all-zero column.
    pub fn reciprocal_condition(a: &DMatrix<f64>) -> f64 {
        let mut scaled = a.clone();
        for mut column in scaled.column_iter_mut() {
            let norm = column.amax();
            if norm == 0.0 || !norm.is_finite() {
                return 0.0;
            }
            column /= norm;
        }

        let sv = scaled.singular_values();
        let (lo, hi) = sv
            .iter()
            .fold((f64::INFINITY, 0.0_f64), |(lo, hi), &s| (lo.min(s), hi.max(s)));
        if hi == 0.0 {
            0.0
        } else {
            lo / hi
        }
    }

    /// Builds the interpolation system `A·coeffs = b` without solving it.
    pub fn system(points: &[Point]) -> Result<(DMatrix<f64>, DVector<f64>)> {
        if points.is_empty() {
            return Err(HeatError::invalid_input("no sample points"));
        }
        if let Some(p) = points.iter().find(|p| !p.is_finite()) {
            return Err(HeatError::invalid_input(format!(
                "non-finite sample ({}, {}, {})",
                p.x(),
                p.y(),
                p.z()
            )));
        }

        let n = points.len();
        let (x_size, _) = SurfaceModel::term_split(n);

        let mut a = DMatrix::zeros(n, n);
        let mut b = DVector::zeros(n);

        for (i, p) in points.iter().enumerate() {
            b[i] = p.z();
            a[(i, 0)] = 1.0;
            for k in 0..x_size {
                a[(i, k + 1)] = p.x().powi(k as i32 + 1);
            }
            for k in x_size + 1..n {
                a[(i, k)] = p.y().powi((k - x_size) as i32);
            }
        }

        Ok((a, b))
    }
}

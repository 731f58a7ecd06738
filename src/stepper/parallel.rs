use rayon::prelude::*;

use super::LaplacianOperator;

// Each task owns one interior grid row of the output, so no two tasks write the
// same slot and rows need no synchronisation.
pub(crate) fn apply(op: &LaplacianOperator, v: &[f64], out: &mut [f64]) {
    debug_assert_eq!(v.len(), op.dim());
    debug_assert_eq!(out.len(), op.dim());

    let inner_cols = op.inner_cols();
    if inner_cols == 0 {
        return;
    }

    out.par_chunks_mut(inner_cols)
        .enumerate()
        .for_each(|(r, out_row)| {
            let base = r * inner_cols;
            for (k, o) in out_row.iter_mut().enumerate() {
                *o = op.row_dot(base + k, v);
            }
        });
}

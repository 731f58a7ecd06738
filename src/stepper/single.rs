use super::LaplacianOperator;

pub(crate) fn apply(op: &LaplacianOperator, v: &[f64], out: &mut [f64]) {
    debug_assert_eq!(v.len(), op.dim());
    debug_assert_eq!(out.len(), op.dim());

    for (p, o) in out.iter_mut().enumerate() {
        *o = op.row_dot(p, v);
    }
}

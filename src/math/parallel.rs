//! Row-parallel versions of the operators in [`super::linalg`].
//!
//! Every output row is independent: workers only read the source vector and
//! each writes one destination slot, so no locking is needed. Rows are summed
//! in the same order as the serial kernels, making the results bit-identical.

use rayon::prelude::*;

use super::linalg::{col_dot, row_dot};

/// v = A u, rows split across the rayon pool.
pub fn a_times_u_par(u: &[f64], v: &mut [f64]) {
    assert_eq!(v.len(), u.len(), "a_times_u_par: output length must match input length");
    v.par_iter_mut()
        .enumerate()
        .for_each(|(i, vi)| *vi = row_dot(i, u));
}

/// v = A^T u, rows split across the rayon pool.
pub fn at_times_u_par(u: &[f64], v: &mut [f64]) {
    assert_eq!(v.len(), u.len(), "at_times_u_par: output length must match input length");
    v.par_iter_mut()
        .enumerate()
        .for_each(|(i, vi)| *vi = col_dot(i, u));
}

/// out = A^T (A u). The forward pass finishes on every row before the
/// transpose pass starts reading `tmp`.
pub fn ata_times_u_par(u: &[f64], out: &mut [f64], tmp: &mut [f64]) {
    a_times_u_par(u, tmp);
    at_times_u_par(tmp, out);
}

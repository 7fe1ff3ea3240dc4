/// Entry (i, j) of the infinite matrix A, 0-based:
/// `1 / (T(i + j) + i + 1)` with `T(k) = k (k + 1) / 2`.
///
/// The triangular term stays in `u128` integer arithmetic, exact whenever
/// `i + j < 2^64`; the product of two consecutive integers is always even, so
/// the shift is an exact halving. Past that the denominator is formed in f64.
/// Defined for every `usize` pair, never panics.
///
/// A is not symmetric: `matrix_element(1, 0) == 1.0 / 3.0` but
/// `matrix_element(0, 1) == 0.5`.
#[inline]
pub fn matrix_element(i: usize, j: usize) -> f64 {
    let (i, j) = (i as u128, j as u128);
    let k = i + j;
    match k.checked_mul(k + 1) {
        Some(p) => 1.0 / ((p >> 1) + i + 1) as f64,
        None => {
            let kf = k as f64;
            1.0 / (kf * (kf + 1.0) * 0.5 + i as f64 + 1.0)
        }
    }
}

/// v = A u, with A truncated to n x n where n = u.len().
pub fn a_times_u(u: &[f64], v: &mut [f64]) {
    let n = u.len();
    assert_eq!(v.len(), n, "a_times_u: output length must match input length");

    for i in 0..n {
        v[i] = row_dot(i, u);
    }
}

/// v = A^T u. Elements are regenerated with swapped indices, never read
/// back from a forward pass.
pub fn at_times_u(u: &[f64], v: &mut [f64]) {
    let n = u.len();
    assert_eq!(v.len(), n, "at_times_u: output length must match input length");

    for i in 0..n {
        v[i] = col_dot(i, u);
    }
}

/// out = A^T (A u), using `tmp` for the intermediate A u.
///
/// B = A^T A is symmetric positive semi-definite, so its dominant eigenvalue
/// is the square of the spectral norm of A.
pub fn ata_times_u(u: &[f64], out: &mut [f64], tmp: &mut [f64]) {
    a_times_u(u, tmp);
    at_times_u(tmp, out);
}

/// Row i of A dotted with u, summed in ascending j.
#[inline]
pub(crate) fn row_dot(i: usize, u: &[f64]) -> f64 {
    let mut sum = 0.0;
    for (j, &uj) in u.iter().enumerate() {
        sum += matrix_element(i, j) * uj;
    }
    sum
}

/// Column i of A dotted with u, summed in ascending j.
#[inline]
pub(crate) fn col_dot(i: usize, u: &[f64]) -> f64 {
    let mut sum = 0.0;
    for (j, &uj) in u.iter().enumerate() {
        sum += matrix_element(j, i) * uj;
    }
    sum
}

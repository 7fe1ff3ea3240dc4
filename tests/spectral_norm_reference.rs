use approx::assert_abs_diff_eq;

use spectral_norm::{spectral_norm, Kernel, PowerConfig, PowerModel, SpectralNormError};

fn parallel_norm(n: usize) -> f64 {
    let model = PowerModel::new(PowerConfig { n, kernel: Kernel::Parallel, ..PowerConfig::default() }).unwrap();
    model.estimate(&mut model.workspace()).unwrap()
}

#[test]
fn small_sizes_are_finite_positive_and_non_decreasing() {
    let mut prev = 0.0;
    for n in 1..=24 {
        let s = spectral_norm(n).unwrap();
        assert!(s.is_finite() && s > 0.0, "n={n}: {s}");
        assert!(s >= prev, "n={n}: {s} < {prev}");
        prev = s;
    }
}

#[test]
fn known_small_values() {
    // 2x2 through 5x5 after ten iterations. Values from a separate plain
    // Python float64 run of the same loop (A, A^T, B = A^T A, ten rounds of
    // v <- B u, u <- B v), printed with %.9f.
    let expected = [1.183350177, 1.233644501, 1.252537398, 1.261217616];
    for (n, want) in (2..).zip(expected) {
        assert_abs_diff_eq!(spectral_norm(n).unwrap(), want, epsilon = 1e-9);
    }
}

#[test]
fn two_by_two_matches_closed_form() {
    // A = [[1, 1/2], [1/3, 1/5]]; sigma_max^2 is the larger root of the
    // characteristic polynomial of the 2x2 matrix A^T A.
    let (a, b, c, d): (f64, f64, f64, f64) = (1.0, 0.5, 1.0 / 3.0, 0.2);
    let (p, q, r) = (a * a + c * c, a * b + c * d, b * b + d * d);
    let (tr, det) = (p + r, p * r - q * q);
    let sigma = ((tr + (tr * tr - 4.0 * det).sqrt()) / 2.0).sqrt();

    assert_abs_diff_eq!(spectral_norm(2).unwrap(), sigma, epsilon = 1e-10);
}

#[test]
fn reference_n_100() {
    let s = spectral_norm(100).unwrap();
    assert_abs_diff_eq!(s, 1.274219991, epsilon = 1e-6);
    assert_eq!(format!("{:.9}", s), "1.274219991");
}

#[test]
fn reference_n_1000() {
    assert_abs_diff_eq!(parallel_norm(1000), 1.274224150, epsilon = 1e-6);
}

#[test]
#[ignore = "slow without optimizations; run with --release -- --ignored"]
fn reference_n_5000() {
    assert_abs_diff_eq!(parallel_norm(5000), 1.274224152, epsilon = 1e-6);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let a = spectral_norm(50).unwrap();
    let b = spectral_norm(50).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn fewer_iterations_converge_towards_default() {
    let run = |iters| {
        let model = PowerModel::new(PowerConfig { n: 100, n_power_iter: iters, kernel: Kernel::Serial }).unwrap();
        model.estimate(&mut model.workspace()).unwrap()
    };
    let one = run(1);
    let three = run(3);
    let ten = spectral_norm(100).unwrap();
    assert!((ten - one).abs() > (ten - three).abs());
    assert_abs_diff_eq!(one, 1.273814722, epsilon = 1e-9);
}

#[test]
fn zero_size_is_invalid() {
    assert!(matches!(spectral_norm(0), Err(SpectralNormError::InvalidArgument(_))));
}

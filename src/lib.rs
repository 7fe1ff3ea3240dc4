pub mod error;
pub mod io;
pub mod math;
pub mod model;

pub use error::{Result, SpectralNormError};
pub use math::workspace::PowerWorkspace;
pub use model::power::{Kernel, PowerConfig, PowerModel, MAX_SIZE, N_POWER_ITER};

/// Spectral norm of the infinite matrix `A` truncated to `n x n`, using the
/// default iteration count and the serial kernel.
pub fn spectral_norm(n: usize) -> Result<f64> {
    let model = PowerModel::new(PowerConfig { n, ..PowerConfig::default() })?;
    let mut ws = model.workspace();
    model.estimate(&mut ws)
}

/// Parse a matrix size from user input. Anything that is not a positive
/// integer is an invalid argument.
pub fn parse_size(s: &str) -> Result<usize> {
    let trimmed = s.trim();
    let value: i128 = trimmed
        .parse()
        .map_err(|_| SpectralNormError::InvalidArgument(format!("n must be a positive integer, got {:?}", s)))?;
    if value <= 0 {
        return Err(SpectralNormError::InvalidArgument(format!("n must be positive, got {}", value)));
    }
    usize::try_from(value)
        .map_err(|_| SpectralNormError::InvalidArgument(format!("n={} does not fit in usize", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_size_accepts_positive_integers() {
        assert_eq!(parse_size("1").unwrap(), 1);
        assert_eq!(parse_size(" 5500 ").unwrap(), 5500);
    }

    #[test]
    fn parse_size_rejects_non_positive_and_garbage() {
        for bad in ["0", "-3", "abc", "1.5", ""] {
            let err = parse_size(bad).unwrap_err();
            assert!(matches!(err, SpectralNormError::InvalidArgument(_)), "{bad:?} -> {err:?}");
        }
    }

    #[test]
    fn spectral_norm_of_one_by_one_is_exact() {
        assert_eq!(spectral_norm(1).unwrap(), 1.0);
    }

    #[test]
    fn spectral_norm_rejects_zero() {
        assert!(matches!(spectral_norm(0), Err(SpectralNormError::InvalidArgument(_))));
    }
}

/// Result type for the spectral norm computation.
pub type Result<T> = std::result::Result<T, SpectralNormError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpectralNormError {
    /// Rejected before any buffer is allocated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The final Rayleigh ratio could not be formed.
    #[error("numeric degeneracy: {0}")]
    Degenerate(String),
}

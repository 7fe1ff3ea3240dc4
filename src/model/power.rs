use serde::{Deserialize, Serialize};

use crate::error::{Result, SpectralNormError};
use crate::math::linalg::ata_times_u;
use crate::math::parallel::ata_times_u_par;
use crate::math::workspace::PowerWorkspace;

/// Driver iterations per run. Each iteration applies B = A^T A twice.
pub const N_POWER_ITER: usize = 10;

/// Largest accepted truncation size.
pub const MAX_SIZE: usize = 1 << 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kernel {
    #[default]
    Serial,
    Parallel,
}

impl std::fmt::Display for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kernel::Serial => f.write_str("serial"),
            Kernel::Parallel => f.write_str("parallel"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerConfig {
    /// Truncation size: A is used as an n x n matrix.
    pub n: usize,
    #[serde(default = "default_n_power_iter")]
    pub n_power_iter: usize,
    #[serde(default)]
    pub kernel: Kernel,
}

fn default_n_power_iter() -> usize {
    N_POWER_ITER
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            n: 100,
            n_power_iter: N_POWER_ITER,
            kernel: Kernel::Serial,
        }
    }
}

impl PowerConfig {
    pub fn check(&self) -> Result<()> {
        if self.n == 0 {
            return Err(SpectralNormError::InvalidArgument("n must be >= 1".to_string()));
        }
        if self.n > MAX_SIZE {
            return Err(SpectralNormError::InvalidArgument(format!(
                "n={} exceeds the maximum size {}",
                self.n, MAX_SIZE
            )));
        }
        if self.n_power_iter == 0 {
            return Err(SpectralNormError::InvalidArgument("n_power_iter must be >= 1".to_string()));
        }
        Ok(())
    }
}

/// sqrt(u.v / v.v) for the post-iteration vectors, where u = B v.
pub fn rayleigh_estimate(u: &[f64], v: &[f64]) -> Result<f64> {
    assert_eq!(u.len(), v.len(), "rayleigh_estimate: vectors must have equal length");

    let mut vbv = 0.0;
    let mut vv = 0.0;
    for (ue, ve) in u.iter().zip(v.iter()) {
        vbv += ue * ve;
        vv += ve * ve;
    }

    if vv == 0.0 {
        return Err(SpectralNormError::Degenerate("v.v is zero".to_string()));
    }
    let lambda = (vbv / vv).sqrt();
    if !lambda.is_finite() {
        return Err(SpectralNormError::Degenerate(format!(
            "non-finite estimate (vBv={}, vv={})",
            vbv, vv
        )));
    }
    Ok(lambda)
}

pub struct PowerModel {
    pub cfg: PowerConfig,
}

impl PowerModel {
    pub fn new(cfg: PowerConfig) -> Result<Self> {
        cfg.check()?;
        Ok(Self { cfg })
    }

    /// Fresh buffers sized for this model.
    pub fn workspace(&self) -> PowerWorkspace {
        PowerWorkspace::new(self.cfg.n)
    }

    fn apply_b(&self, src: &[f64], dst: &mut [f64], tmp: &mut [f64]) {
        match self.cfg.kernel {
            Kernel::Serial => ata_times_u(src, dst, tmp),
            Kernel::Parallel => ata_times_u_par(src, dst, tmp),
        }
    }

    /// One driver iteration: v <- B u, then u <- B v.
    pub fn step(&self, ws: &mut PowerWorkspace) {
        let PowerWorkspace { u, v, tmp } = ws;
        self.apply_b(u, v, tmp);
        self.apply_b(v, u, tmp);
    }

    /// Run `n_power_iter` iterations from the initial state and return the
    /// spectral norm estimate. The workspace is resized and reset first.
    pub fn estimate(&self, ws: &mut PowerWorkspace) -> Result<f64> {
        ws.resize(self.cfg.n);
        for k in 0..self.cfg.n_power_iter {
            self.step(ws);
            tracing::trace!(iteration = k + 1, n = self.cfg.n, "power iteration step");
        }
        let lambda = rayleigh_estimate(&ws.u, &ws.v)?;
        tracing::debug!(
            n = self.cfg.n,
            iterations = self.cfg.n_power_iter,
            kernel = %self.cfg.kernel,
            estimate = lambda,
            "spectral norm computed"
        );
        Ok(lambda)
    }

    /// Same run as [`estimate`](Self::estimate), recording `(iteration, estimate)`
    /// after every iteration. The last entry equals `estimate()`.
    pub fn trajectory(&self, ws: &mut PowerWorkspace) -> Result<Vec<(usize, f64)>> {
        ws.resize(self.cfg.n);
        let mut out = Vec::with_capacity(self.cfg.n_power_iter);
        for k in 1..=self.cfg.n_power_iter {
            self.step(ws);
            let lambda = rayleigh_estimate(&ws.u, &ws.v)?;
            tracing::trace!(iteration = k, estimate = lambda, "power iteration step");
            out.push((k, lambda));
        }
        Ok(out)
    }
}

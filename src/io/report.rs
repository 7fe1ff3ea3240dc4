use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::model::power::{Kernel, PowerConfig};

/// One-line machine-readable result, printed by the CLI with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: String,
    pub n: usize,
    pub n_power_iter: usize,
    pub kernel: Kernel,
    pub spectral_norm: f64,
    pub elapsed_ms: f64,
}

/// Write `spectral_norm_<run_id>.txt` into `out_dir`: a `key=value` header, the
/// per-iteration estimates as CSV, and the final estimate.
pub fn write_run_report(
    out_dir: impl AsRef<Path>,
    run_id: &str,
    cfg: &PowerConfig,
    trajectory: &[(usize, f64)],
) -> anyhow::Result<PathBuf> {
    use std::io::Write;

    let (_, last) = *trajectory.last().context("empty trajectory, nothing to report")?;

    std::fs::create_dir_all(out_dir.as_ref()).context("create report dir failed")?;
    let path = out_dir.as_ref().join(format!("spectral_norm_{}.txt", run_id));
    let mut f = std::fs::File::create(&path)
        .with_context(|| format!("create run report failed (path={:?})", path))?;

    writeln!(f, "run_id={}", run_id)?;
    writeln!(f, "n={}", cfg.n)?;
    writeln!(f, "n_power_iter={}", cfg.n_power_iter)?;
    writeln!(f, "kernel={}", cfg.kernel)?;
    writeln!(f)?;
    writeln!(f, "iteration,estimate")?;

    let mut prev = 0;
    for &(k, est) in trajectory {
        anyhow::ensure!(k > prev, "trajectory iterations must be increasing (got {} after {})", k, prev);
        writeln!(f, "{},{:.9}", k, est)?;
        prev = k;
    }
    writeln!(f)?;
    writeln!(f, "spectral_norm={:.9}", last)?;

    Ok(path)
}

//! Compute the spectral norm of A truncated to `N x N` and print it with nine
//! decimals.
//!
//! ```bash
//! spectral_norm_cli 5500
//! spectral_norm_cli 1000 --parallel --json
//! SPECTRAL_NORM_REPORT_DIR=logs spectral_norm_cli 100
//! ```
//!
//! Exit codes: 0 success, 1 computation or I/O failure, 2 invalid argument.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use spectral_norm::io::report::{write_run_report, RunSummary};
use spectral_norm::{parse_size, Kernel, PowerConfig, PowerModel, SpectralNormError, N_POWER_ITER};

#[derive(Parser, Debug)]
#[command(name = "spectral_norm_cli", version, about = "Spectral norm of the truncated infinite matrix A by power iteration")]
struct Args {
    /// Matrix truncation size (positive integer).
    #[arg(allow_hyphen_values = true)]
    n: String,

    /// Power iterations (each applies A^T A twice).
    #[arg(long, env = "SPECTRAL_NORM_ITERATIONS", default_value_t = N_POWER_ITER)]
    iterations: usize,

    /// Split matrix-vector rows across all cores. The env var takes 1/0,
    /// yes/no, on/off or true/false.
    #[arg(
        long,
        env = "SPECTRAL_NORM_PARALLEL",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    parallel: bool,

    /// Write a per-iteration run report into this directory.
    #[arg(long, env = "SPECTRAL_NORM_REPORT_DIR")]
    report_dir: Option<PathBuf>,

    /// Print a JSON summary instead of the bare estimate.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log level when RUST_LOG is unset: trace, debug, info, warn, error.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[spectral_norm] error: {e:#}");
            match e.downcast_ref::<SpectralNormError>() {
                Some(SpectralNormError::InvalidArgument(_)) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let n = parse_size(&args.n)?;
    let cfg = PowerConfig {
        n,
        n_power_iter: args.iterations,
        kernel: if args.parallel { Kernel::Parallel } else { Kernel::Serial },
    };
    let model = PowerModel::new(cfg)?;
    let mut ws = model.workspace();
    let run_id = format!("n{}-{}", n, now_millis());

    tracing::info!(run_id = %run_id, n, iterations = model.cfg.n_power_iter, kernel = %model.cfg.kernel, "starting");
    let started = Instant::now();

    let estimate = match &args.report_dir {
        Some(dir) => {
            let traj = model.trajectory(&mut ws)?;
            let path = write_run_report(dir, &run_id, &model.cfg, &traj)
                .with_context(|| format!("writing run report into {}", dir.display()))?;
            tracing::info!(path = %path.display(), "run report written");
            traj.last().map(|&(_, est)| est).context("empty trajectory")?
        }
        None => model.estimate(&mut ws)?,
    };

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    tracing::info!(elapsed_ms, "finished");

    if args.json {
        let summary = RunSummary {
            run_id,
            n,
            n_power_iter: model.cfg.n_power_iter,
            kernel: model.cfg.kernel,
            spectral_norm: estimate,
            elapsed_ms,
        };
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("{:.9}", estimate);
    }
    Ok(())
}

fn now_millis() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

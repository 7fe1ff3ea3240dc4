use spectral_norm::{Kernel, PowerConfig, PowerModel};

fn main() -> anyhow::Result<()> {
    let n: usize = std::env::args().nth(1).map(|s| spectral_norm::parse_size(&s)).transpose()?.unwrap_or(100);

    let model = PowerModel::new(PowerConfig {
        n,
        n_power_iter: 10,
        kernel: Kernel::Serial,
    })?;
    let mut ws = model.workspace();
    let traj = model.trajectory(&mut ws)?;

    // Estimate after each iteration and its change from the previous one
    println!("iteration,estimate,delta");
    let mut prev = f64::NAN;
    for (k, est) in &traj {
        println!("{},{:.12},{:.3e}", k, est, est - prev);
        prev = *est;
    }

    Ok(())
}

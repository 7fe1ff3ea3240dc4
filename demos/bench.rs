use std::time::Instant;

use spectral_norm::{Kernel, PowerConfig, PowerModel};

fn main() -> anyhow::Result<()> {
    // Large enough that the row split pays for itself
    let n = 2000;

    let serial = PowerModel::new(PowerConfig { n, kernel: Kernel::Serial, ..PowerConfig::default() })?;
    let parallel = PowerModel::new(PowerConfig { n, kernel: Kernel::Parallel, ..PowerConfig::default() })?;
    let mut ws = serial.workspace();

    let t_start = Instant::now();
    let s1 = serial.estimate(&mut ws)?;
    let dur1 = t_start.elapsed();

    let t_start2 = Instant::now();
    let s2 = parallel.estimate(&mut ws)?;
    let dur2 = t_start2.elapsed();

    anyhow::ensure!(s1.to_bits() == s2.to_bits(), "kernels disagree: {} vs {}", s1, s2);

    println!("n,serial_ms,parallel_ms,speedup_x,estimate");
    let s_ms = dur1.as_secs_f64() * 1000.0;
    let p_ms = dur2.as_secs_f64() * 1000.0;
    println!("{},{:.3},{:.3},{:.2},{:.9}", n, s_ms, p_ms, s_ms.max(1e-9) / p_ms.max(1e-9), s1);

    Ok(())
}

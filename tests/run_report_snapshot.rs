use spectral_norm::io::report::write_run_report;
use spectral_norm::{Kernel, PowerConfig, PowerModel};

#[test]
fn run_report_snapshot_small() {
    let cfg = PowerConfig {
        n: 4,
        n_power_iter: 10,
        kernel: Kernel::Serial,
    };
    let model = PowerModel::new(cfg).expect("model config invalid");
    let mut ws = model.workspace();
    let traj = model.trajectory(&mut ws).expect("trajectory");

    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_run_report(tmp.path(), "TEST-SMALL", &model.cfg, &traj).expect("write run report");
    assert_eq!(path.file_name().unwrap(), "spectral_norm_TEST-SMALL.txt");

    let s = std::fs::read_to_string(path).expect("read run report");
    insta::assert_snapshot!(s);
}

#[test]
fn run_report_creates_nested_dir() {
    let model = PowerModel::new(PowerConfig { n: 2, ..PowerConfig::default() }).unwrap();
    let traj = model.trajectory(&mut model.workspace()).unwrap();

    let tmp = tempfile::tempdir().expect("tempdir");
    let nested = tmp.path().join("logs").join("runs");
    let path = write_run_report(&nested, "nested", &model.cfg, &traj).expect("write run report");
    assert!(path.starts_with(&nested));

    let s = std::fs::read_to_string(path).unwrap();
    assert!(s.ends_with("spectral_norm=1.183350177\n"), "{s}");
}

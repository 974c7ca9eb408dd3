use assert_cmd::cargo::cargo_bin_cmd;
use serde::Deserialize;
use std::{error::Error, fs, path::PathBuf};
use tempfile::tempdir;

#[derive(Deserialize)]
struct ReportOutput {
    label: String,
    duration_h: f64,
    distance_km: f64,
    speed_kmh: f64,
    calories: f64,
}

fn sample_path(relative: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .join(relative)
        .to_string_lossy()
        .to_string()
}

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn report_text_matches_builtin_demo() -> Result<(), Box<dyn Error>> {
    let demo = cargo_bin_cmd!("fit")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let mut cmd = cargo_bin_cmd!("fit");
    cmd.args(["report", "--input", &sample_path("test_data/packages.toml")]);
    let out = cmd.assert().success().get_output().stdout.clone();
    assert_eq!(out, demo);
    Ok(())
}

#[test]
fn report_json_emits_one_object_per_package() -> Result<(), Box<dyn Error>> {
    let mut cmd = cargo_bin_cmd!("fit");
    cmd.args([
        "report",
        "--input",
        &sample_path("test_data/packages.toml"),
        "--format",
        "json",
    ]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let reports = String::from_utf8(out)?
        .lines()
        .map(serde_json::from_str::<ReportOutput>)
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(reports.len(), 3);

    assert_eq!(reports[0].label, "Swimming");
    assert_close(reports[0].distance_km, 0.9936, 1e-9);
    assert_close(reports[0].speed_kmh, 1.0, 1e-9);
    assert_close(reports[0].calories, 336.0, 1e-9);

    assert_eq!(reports[1].label, "Running");
    assert_close(reports[1].duration_h, 1.0, 1e-12);
    assert_close(reports[1].calories, 699.75, 1e-9);

    assert_eq!(reports[2].label, "SportsWalking");
    assert_close(reports[2].speed_kmh, 5.85, 1e-9);
    assert_close(reports[2].calories, 157.5, 1e-9);
    Ok(())
}

#[test]
fn report_reads_stdin() {
    let mut cmd = cargo_bin_cmd!("fit");
    cmd.arg("report")
        .write_stdin("[[package]]\ncode = \"walk\"\ndata = [9000, 1, 75, 180]\n");
    let out = cmd.assert().success().get_output().stdout.clone();
    let line = String::from_utf8(out).expect("utf8 stdout");
    assert!(line.starts_with("Тип тренировки: SportsWalking;"));
    assert!(line.contains("Потрачено ккал: 157.500."));
}

#[test]
fn unknown_workout_type_fails() {
    let mut cmd = cargo_bin_cmd!("fit");
    cmd.args(["report", "--input", &sample_path("test_data/unknown_code.toml")]);
    let output = cmd.assert().failure().get_output().clone();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown workout type: BIKE"));
    // packages before the bad one are still reported
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Тип тренировки: Running;"));
}

#[test]
fn wrong_arity_fails() -> Result<(), Box<dyn Error>> {
    let temp = tempdir()?;
    let path = temp.path().join("short.toml");
    fs::write(&path, "[[package]]\ncode = \"SWM\"\ndata = [720, 1, 80]\n")?;
    let mut cmd = cargo_bin_cmd!("fit");
    cmd.args(["report", "--input", path.to_str().expect("utf8 path")]);
    let output = cmd.assert().failure().get_output().clone();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected 5 arguments, got 3"));
    Ok(())
}

#[test]
fn non_positive_duration_fails() -> Result<(), Box<dyn Error>> {
    let temp = tempdir()?;
    let path = temp.path().join("zero.toml");
    fs::write(&path, "[[package]]\ncode = \"RUN\"\ndata = [15000, 0, 75]\n")?;
    let mut cmd = cargo_bin_cmd!("fit");
    cmd.args(["report", "--input", path.to_str().expect("utf8 path")]);
    let output = cmd.assert().failure().get_output().clone();
    assert!(String::from_utf8_lossy(&output.stderr).contains("duration_h"));
    Ok(())
}

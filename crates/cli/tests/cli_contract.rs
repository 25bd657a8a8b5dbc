use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures").join(name)
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout should contain valid json")
}

fn area_json(file: &Path, data_dir: &Path, extra: &[&str]) -> Value {
    let output = cargo_bin_cmd!("landplot-cli")
        .arg("area")
        .arg(file)
        .args(extra)
        .env("LANDPLOT_DATA_DIR", data_dir)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    stdout_json(&output)
}

#[test]
fn area_of_rectangle_uses_declared_sides() {
    let data = tempfile::tempdir().expect("temp dir should be created");
    let value = area_json(&fixture("rectangle.json"), data.path(), &[]);

    assert_eq!(value["area"], 200.0);
    assert_eq!(value["pixel_area"], 20000.0);
    assert_eq!(value["strategy"], "rectangle");
    assert_eq!(value["scale"], "1:100");
    assert_eq!(value["segments"], 4);
    assert_eq!(value["perimeter"], 60.0);
    assert_eq!(value["pixel_perimeter"], 600.0);
    assert_eq!(value["formatted"], "200.00m²");
}

#[test]
fn area_of_triangle_projects_pixel_ratio() {
    let data = tempfile::tempdir().expect("temp dir should be created");
    let value = area_json(&fixture("triangle.json"), data.path(), &[]);

    assert_eq!(value["strategy"], "ratio_projection");
    assert_eq!(value["pixel_area"], 2400.0);
    let area = value["area"].as_f64().expect("area should be a number");
    assert!((area - 6.0).abs() < 1e-9);
}

#[test]
fn scale_flag_changes_label_but_not_area() {
    let data = tempfile::tempdir().expect("temp dir should be created");
    let value = area_json(&fixture("triangle.json"), data.path(), &["--scale", "500"]);
    let baseline = area_json(&fixture("triangle.json"), data.path(), &[]);

    assert_eq!(value["scale"], "1:500");
    assert_eq!(value["area"], baseline["area"]);
}

#[test]
fn check_accepts_closed_loop() {
    cargo_bin_cmd!("landplot-cli")
        .arg("check")
        .arg(fixture("rectangle.json"))
        .assert()
        .success()
        .stdout(predicate::str::diff("ok\n"));
}

#[test]
fn check_reports_gaps() {
    let output = cargo_bin_cmd!("landplot-cli")
        .arg("check")
        .arg(fixture("open.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("segment chain is not connected"))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).expect("stdout should be utf-8");
    insta::assert_snapshot!("cli_check_open_plot", stdout);
}

#[test]
fn recompute_writes_refreshed_area() {
    let data = tempfile::tempdir().expect("temp dir should be created");
    let output_path = data.path().join("out").join("rectangle.json");

    cargo_bin_cmd!("landplot-cli")
        .arg("recompute")
        .arg(fixture("rectangle.json"))
        .arg("--output")
        .arg(&output_path)
        .env("LANDPLOT_DATA_DIR", data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("rectangle.json"));

    let bytes = std::fs::read(&output_path).expect("output plot should exist");
    let value = stdout_json(&bytes);
    assert_eq!(value["area"], 200.0);
    assert_eq!(value["lines"][0]["startPoint"]["x"], 0.0);
    assert_eq!(value["lines"].as_array().map(Vec::len), Some(4));
}

#[test]
fn settings_are_persisted() {
    let data = tempfile::tempdir().expect("temp dir should be created");

    let output = cargo_bin_cmd!("landplot-cli")
        .args(["settings", "show"])
        .env("LANDPLOT_DATA_DIR", data.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let defaults = stdout_json(&output);
    assert_eq!(defaults["scale"], 100);
    assert_eq!(defaults["defaultLength"], 10.0);

    cargo_bin_cmd!("landplot-cli")
        .args(["settings", "set", "--scale", "250", "--default-length", "7.5"])
        .env("LANDPLOT_DATA_DIR", data.path())
        .assert()
        .success();

    let value = area_json(&fixture("rectangle.json"), data.path(), &[]);
    assert_eq!(value["scale"], "1:250");
    assert_eq!(value["area"], 200.0);
}

#[test]
fn settings_reject_zero_scale() {
    let data = tempfile::tempdir().expect("temp dir should be created");

    cargo_bin_cmd!("landplot-cli")
        .args(["settings", "set", "--scale", "0"])
        .env("LANDPLOT_DATA_DIR", data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("scale must be a positive integer"));
}

#[test]
fn area_fails_for_missing_file() {
    cargo_bin_cmd!("landplot-cli")
        .arg("area")
        .arg(fixture("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("file does not exist"));
}

#[test]
fn area_fails_for_non_positive_length() {
    let data = tempfile::tempdir().expect("temp dir should be created");

    cargo_bin_cmd!("landplot-cli")
        .arg("area")
        .arg(fixture("invalid-length.json"))
        .env("LANDPLOT_DATA_DIR", data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("segment 2 has non-positive length"));
}

#[test]
fn area_fails_for_negative_stored_area() {
    let data = tempfile::tempdir().expect("temp dir should be created");

    cargo_bin_cmd!("landplot-cli")
        .arg("area")
        .arg(fixture("negative-area.json"))
        .env("LANDPLOT_DATA_DIR", data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("stored area must be a non-negative number"));
}

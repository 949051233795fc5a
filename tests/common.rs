#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn xb() -> Command {
    cargo_bin_cmd!("examboard")
}

/// Create a unique test roster path inside the system temp dir and remove any
/// existing file
pub fn setup_test_roster(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_examboard.json", name));
    let roster_path = path.to_string_lossy().to_string();
    fs::remove_file(&roster_path).ok();
    roster_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Seed a roster with two records useful for many tests
pub fn init_roster_with_data(roster_path: &str) {
    xb()
        .args([
            "--roster",
            roster_path,
            "add",
            "Math",
            "2025-09-01",
            "09:00:00",
            "11:00:00",
        ])
        .assert()
        .success();

    xb()
        .args([
            "--roster",
            roster_path,
            "add",
            "Physics",
            "2025-09-01",
            "14:00:00",
            "16:00:00",
        ])
        .assert()
        .success();
}

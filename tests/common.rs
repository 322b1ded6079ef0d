#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const KEY: &str = "event_records.csv";

pub fn pt() -> Command {
    cargo_bin_cmd!("paytrack")
}

/// Create a unique bucket directory inside the system temp dir and remove any
/// stale content from previous runs
pub fn setup_bucket(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_paytrack_bucket", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create bucket dir");
    path.to_string_lossy().to_string()
}

/// Path of the persisted CSV object inside a bucket
pub fn object_path(bucket: &str) -> PathBuf {
    PathBuf::from(bucket).join(KEY)
}

/// Add one event through the CLI with the standard test anchor
/// (2025-02-16, 2 periods)
pub fn add_event(bucket: &str, date: &str, name: &str, time: &str, duration: &str) {
    pt()
        .args([
            "--bucket", bucket, "--key", KEY, "--anchor", "2025-02-16", "--periods", "2", "add",
            date, name, "--time", time, "--duration", duration,
        ])
        .assert()
        .success();
}

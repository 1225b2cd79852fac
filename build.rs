//! Stamps `BUILD_TIME`, `GIT_HASH` and `RUST_VERSION` for `/health`.

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

/// Trimmed stdout of a successful command
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn main() {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();

    let stamps = [
        ("BUILD_TIME", Some(seconds.to_string())),
        ("GIT_HASH", command_output("git", &["rev-parse", "--short", "HEAD"])),
        ("RUST_VERSION", command_output("rustc", &["--version"])),
    ];
    for (name, value) in stamps {
        let value = value.unwrap_or_else(|| "unknown".to_string());
        println!("cargo:rustc-env={name}={value}");
    }

    for watched in [".git/HEAD", "data/products.json"] {
        println!("cargo:rerun-if-changed={watched}");
    }
}

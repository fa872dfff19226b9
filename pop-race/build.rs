//! Build script for pop-race
//!
//! Stamps the binary with the identification logged in its startup banner:
//! `GIT_HASH`, `BUILD_TIMESTAMP` and `BUILD_PROFILE`.

use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

/// Short commit of the checkout being built
fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}

/// UTC time of this build, whole seconds
fn build_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

/// Cargo profile (`debug` or `release`)
fn build_profile() -> String {
    env::var("PROFILE").unwrap_or_else(|_| UNKNOWN.to_string())
}

fn main() {
    let stamps = [
        ("GIT_HASH", git_short_hash().unwrap_or_else(|| UNKNOWN.to_string())),
        ("BUILD_TIMESTAMP", build_timestamp()),
        ("BUILD_PROFILE", build_profile()),
    ];
    for (key, value) in &stamps {
        println!("cargo:rustc-env={}={}", key, value);
    }

    // Re-stamp when the checked-out commit moves
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=../.git/refs/heads");
}

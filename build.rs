//! Build script: derives the version string baked into the binary.

use std::process::Command;

fn main() {
    // Prefer CREATE_VUEYOUSE_VERSION env var if set (e.g., by CI release
    // workflow), otherwise fall back to git describe for local development
    // builds.
    if let Ok(version) = std::env::var("CREATE_VUEYOUSE_VERSION") {
        println!("cargo:rustc-env=CREATE_VUEYOUSE_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=CREATE_VUEYOUSE_VERSION={version}");
    }

    // Re-run if git HEAD changes or env var changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=CREATE_VUEYOUSE_VERSION");
}

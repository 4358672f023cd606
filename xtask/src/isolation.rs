use std::process::Command;

use anyhow::{Context, Result};

/// Library crates in dependency order.
const LIBRARY_CRATES: &[&str] = &["tradeline-domain", "tradeline-core", "tradeline-infra", "tradeline"];

/// Check that every library crate compiles on its own, without features
/// unified from the rest of the workspace.
pub fn check_crates_in_isolation() -> Result<()> {
    println!("Checking {} crates in isolation...", LIBRARY_CRATES.len());

    for (index, package) in LIBRARY_CRATES.iter().enumerate() {
        println!("\n[{}/{}] cargo check -p {package}", index + 1, LIBRARY_CRATES.len());

        let status = Command::new("cargo")
            .args(["check", "-p", package, "--all-targets"])
            .status()
            .with_context(|| format!("Failed to run cargo check for '{package}'"))?;

        if !status.success() {
            anyhow::bail!("Crate '{package}' failed to compile on its own");
        }

        println!("✅ {package} compiled successfully");
    }

    println!("\n✅ All {} crates compile in isolation!", LIBRARY_CRATES.len());

    Ok(())
}

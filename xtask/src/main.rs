//! Packaging tasks for tilehop
//!
//! Usage:
//!   cargo xtask package                    # Release build + assets into dist/<host>/
//!   cargo xtask package --platform linux   # Same, checked against the host
//!   cargo xtask clean-dist                 # Remove dist/

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const BINARY: &str = "tilehop";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Packaging for tilehop")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a release binary and bundle it with the assets
    Package {
        /// Platform name: windows, macos, linux (must match the host)
        #[arg(long)]
        platform: Option<String>,
    },
    /// Remove the dist/ directory
    CleanDist,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Package { platform } => package(platform),
        Commands::CleanDist => clean_dist(),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src).with_context(|| format!("Cannot read {}", src.display()))? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

fn host_platform() -> &'static str {
    if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "macos") {
        "macos"
    } else {
        "linux"
    }
}

/// Only the host platform can be packaged; there is no cross-compilation
fn resolve_platform(requested: Option<String>, host: &str) -> Result<String> {
    match requested {
        None => Ok(host.to_string()),
        Some(p) if p == host => Ok(p),
        Some(p) => anyhow::bail!(
            "Cannot package for {} on a {} host; run `cargo xtask package` on {} instead",
            p,
            host,
            p
        ),
    }
}

fn package(platform: Option<String>) -> Result<()> {
    let root = project_root()?;
    let platform = resolve_platform(platform, host_platform())?;
    let dist = root.join("dist").join(&platform);

    println!("Building native release for {}...", platform);
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--bin", BINARY]),
    )?;

    // Clean and create dist folder
    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    let binary_name = if platform == "windows" {
        format!("{}.exe", BINARY)
    } else {
        BINARY.to_string()
    };
    let built = root.join("target/release").join(&binary_name);
    std::fs::copy(&built, dist.join(&binary_name))
        .with_context(|| format!("Cannot copy {}", built.display()))?;

    let assets = root.join("assets");
    if assets.exists() {
        copy_dir_recursive(&assets, &dist.join("assets"))?;
    } else {
        println!("No assets/ directory, packaging the binary alone");
    }

    println!("Package ready: dist/{}/", platform);
    Ok(())
}

fn clean_dist() -> Result<()> {
    let dist = project_root()?.join("dist");
    if dist.exists() {
        std::fs::remove_dir_all(&dist).with_context(|| format!("Cannot remove {}", dist.display()))?;
        println!("Removed {}", dist.display());
    } else {
        println!("Nothing to clean");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_defaults_to_host() {
        assert_eq!(resolve_platform(None, "linux").unwrap(), "linux");
        assert_eq!(resolve_platform(Some("linux".to_string()), "linux").unwrap(), "linux");
    }

    #[test]
    fn test_foreign_platform_is_rejected() {
        let err = resolve_platform(Some("windows".to_string()), "linux").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("windows") && msg.contains("linux"), "{}", msg);
    }
}

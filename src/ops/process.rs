//! Process lifecycle helpers: port killing, server spawning, and the
//! shell command runner the deploy gate uses for lint/build steps.
//!
//! Unix-only: port discovery goes through `lsof`.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Kill whatever is listening on `port`. Returns whether anything was killed.
pub fn kill_port(port: u16) -> Result<bool> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(format!("lsof -ti :{}", port))
        .output()
        .context("Failed to run lsof")?;

    let pids: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();

    if pids.is_empty() {
        info!("No process listening on port {}", port);
        return Ok(false);
    }

    for pid in &pids {
        debug!("Killing pid {} on port {}", pid, port);
        let status = Command::new("kill")
            .args(["-9", pid])
            .status()
            .context("Failed to run kill")?;
        if !status.success() {
            warn!("kill -9 {} exited with {}", pid, status);
        }
    }

    info!("Killed {} process(es) on port {}", pids.len(), port);
    Ok(true)
}

/// Run a shell command in `cwd`, streaming its output to the console.
/// Returns whether it exited successfully.
pub fn run_command(command: &str, cwd: &Path) -> Result<bool> {
    info!("Running `{}` in {}", command, cwd.display());

    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(cwd)
        .status()
        .with_context(|| format!("Failed to run `{}`", command))?;

    Ok(status.success())
}

/// Spawn a long-running server command detached, discarding its output.
pub fn spawn_detached(command: &str, cwd: &Path) -> Result<()> {
    info!("Starting `{}` in {}", command, cwd.display());

    Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to start `{}`", command))?;

    Ok(())
}

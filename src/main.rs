//! uxaudit - heuristic UX-quality auditor and deploy gate
//!
//! A CLI tool that statically scans a front-end source tree, scores
//! four UX categories out of 25 points each, and writes a console
//! report plus a JSON snapshot. Also ships the surrounding ops
//! commands: server health probes, restart, and a deploy gate.
//!
//! Exit codes:
//!   0 - requested operation passed
//!   1 - operation completed but failed its gate (audit below
//!       threshold, a server down, a gate step red)
//!   2 - runtime error (bad arguments/config, missing audited root,
//!       report sink failure)

mod analysis;
mod cli;
mod collector;
mod config;
mod models;
mod ops;
mod report;
mod scorers;

use anyhow::{Context, Result};
use chrono::Local;
use cli::{Cli, Commands};
use collector::SourceCollector;
use config::Config;
use indicatif::ProgressBar;
use models::AuditResult;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Validate arguments
    if let Err(e) = cli.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    // Handle --init-config early (no logging needed)
    if cli.init_config {
        match handle_init_config() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("❌ Error: {:#}", e);
                std::process::exit(2);
            }
        }
    }

    // Initialize logging
    init_logging(&cli);

    info!("uxaudit v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", cli);

    match run(cli).await {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            // Runtime errors (including sink failures) exit with 2, so a
            // pipeline can tell them apart from a quality-gate failure.
            error!("Run failed: {:#}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(2);
        }
    }
}

/// Handle --init-config: generate a default .uxaudit.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(".uxaudit.toml");

    if path.exists() {
        anyhow::bail!(".uxaudit.toml already exists. Remove it first or edit it manually.");
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .uxaudit.toml")?;

    println!("✅ Created .uxaudit.toml with default settings.");
    println!("   Edit it to customize paths, thresholds, and server commands.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(cli: &Cli) {
    let level = cli.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Dispatch the selected subcommand. Returns the process exit code.
async fn run(cli: Cli) -> Result<i32> {
    let config = load_config(&cli)?;

    let command = cli.command.clone().unwrap_or(Commands::Audit {
        root: None,
        output: None,
        fail_under: None,
    });

    match command {
        Commands::Audit {
            root,
            output,
            fail_under,
        } => run_audit_command(&config, root, output, fail_under),
        Commands::Health => Ok(run_health(&config).await),
        Commands::Restart {
            backend_only,
            frontend_only,
        } => run_restart(&config, backend_only, frontend_only).await,
        Commands::Gate { skip_health } => run_gate(&config, skip_health).await,
    }
}

/// Load configuration from file or use defaults.
fn load_config(cli: &Cli) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = cli.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .uxaudit.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}

/// Run the audit and apply the pass/fail gate.
fn run_audit_command(
    config: &Config,
    root: Option<PathBuf>,
    output: Option<PathBuf>,
    fail_under: Option<f64>,
) -> Result<i32> {
    let threshold = fail_under.unwrap_or(config.audit.pass_percentage);
    let result = perform_audit(config, root, output)?;

    if result.passed(threshold) {
        Ok(0)
    } else {
        println!(
            "⛔ Overall {:.1}% is below the {:.0}% gate.",
            result.overall_percentage(),
            threshold
        );
        Ok(1)
    }
}

/// Collect, score, render, and persist one audit run.
fn perform_audit(
    config: &Config,
    root_override: Option<PathBuf>,
    output_override: Option<PathBuf>,
) -> Result<AuditResult> {
    let root = root_override.unwrap_or_else(|| PathBuf::from(&config.paths.root));

    println!("{}", "=".repeat(60));
    println!("UX AUDIT");
    println!("Time: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("Root: {}", root.display());
    println!("{}", "=".repeat(60));

    let collector = SourceCollector::new(root, config.paths.clone());
    let tree = collector.collect()?;

    let result = analysis::run_audit(&tree, &config.audit);
    print!("{}", report::render_console(&result));

    let output = output_override.unwrap_or_else(|| PathBuf::from(&config.report.output));
    report::save_report(&result, &output).context("Report sink failure")?;
    println!("Report saved: {}", output.display());

    Ok(result)
}

/// Probe both servers once.
async fn run_health(config: &Config) -> i32 {
    println!("{}", "=".repeat(50));
    println!("SERVER HEALTH CHECK");
    println!("Time: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("{}", "=".repeat(50));

    let report = ops::health::check_all(&config.server).await;

    if report.all_up() {
        println!("\n✅ All servers healthy.");
        0
    } else {
        println!("\n⛔ One or more servers are down.");
        1
    }
}

/// Kill the server ports, start the servers again, then probe them.
async fn run_restart(config: &Config, backend_only: bool, frontend_only: bool) -> Result<i32> {
    let server = &config.server;
    let do_backend = !frontend_only;
    let do_frontend = !backend_only;

    if do_backend {
        ops::process::kill_port(server.backend_port)?;
        ops::process::spawn_detached(&server.backend_cmd, Path::new(&server.backend_dir))?;
    }
    if do_frontend {
        ops::process::kill_port(server.frontend_port)?;
        ops::process::spawn_detached(&server.frontend_cmd, Path::new(&server.frontend_dir))?;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Waiting for servers to come up...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    tokio::time::sleep(Duration::from_secs(server.startup_wait_seconds)).await;
    spinner.finish_and_clear();

    let mut healthy = true;
    if do_backend {
        healthy &= ops::health::check_backend(server).await;
    }
    if do_frontend {
        healthy &= ops::health::check_frontend(server).await;
    }

    Ok(if healthy { 0 } else { 1 })
}

/// Run the configured check steps, the audit, and the health probes.
async fn run_gate(config: &Config, skip_health: bool) -> Result<i32> {
    let mut steps: Vec<(String, bool)> = Vec::new();

    for check in &config.gate.checks {
        println!("\n{}", "=".repeat(60));
        println!("[step] {}", check.name);
        println!("{}", "=".repeat(60));

        let passed = ops::process::run_command(&check.command, Path::new(&check.cwd))?;
        steps.push((check.name.clone(), passed));
    }

    println!();
    let audit_passed = perform_audit(config, None, None)?.passed(config.audit.pass_percentage);
    steps.push(("ux audit".to_string(), audit_passed));

    if !skip_health {
        println!();
        let report = ops::health::check_all(&config.server).await;
        steps.push(("health".to_string(), report.all_up()));
    }

    println!("\n{}", "=".repeat(60));
    println!("DEPLOY GATE SUMMARY");
    println!("{}", "=".repeat(60));
    for (name, passed) in &steps {
        println!("  {} {}", if *passed { "✅" } else { "⛔" }, name);
    }

    let all_passed = steps.iter().all(|(_, passed)| *passed);
    if all_passed {
        println!("\n✅ Deploy gate passed.");
        Ok(0)
    } else {
        println!("\n⛔ Deploy gate failed.");
        Ok(1)
    }
}

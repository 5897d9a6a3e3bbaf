//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.uxaudit.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Audited source tree layout.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Scoring thresholds and limits.
    #[serde(default)]
    pub audit: AuditConfig,

    /// Report sink settings.
    #[serde(default)]
    pub report: ReportConfig,

    /// Backend/frontend server settings for the ops subcommands.
    #[serde(default)]
    pub server: ServerConfig,

    /// Deploy gate steps.
    #[serde(default)]
    pub gate: GateConfig,
}

/// Fixed relative sub-paths the collector expects under the audited root.
/// Files not matching them are invisible to the audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Audited root directory.
    #[serde(default = "default_root")]
    pub root: String,

    /// Subdirectory holding page components (scanned non-recursively).
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,

    /// Subdirectory holding shared components (scanned non-recursively).
    #[serde(default = "default_components_dir")]
    pub components_dir: String,

    /// Relative path of the global stylesheet.
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,

    /// Relative path of the header component.
    #[serde(default = "default_header")]
    pub header: String,

    /// Relative path of the root application/routing file.
    #[serde(default = "default_app")]
    pub app: String,

    /// Markup-component file extension (without dot).
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            pages_dir: default_pages_dir(),
            components_dir: default_components_dir(),
            stylesheet: default_stylesheet(),
            header: default_header(),
            app: default_app(),
            extension: default_extension(),
        }
    }
}

fn default_root() -> String {
    "frontend/src".to_string()
}

fn default_pages_dir() -> String {
    "pages".to_string()
}

fn default_components_dir() -> String {
    "components".to_string()
}

fn default_stylesheet() -> String {
    "styles/global.css".to_string()
}

fn default_header() -> String {
    "components/Header.jsx".to_string()
}

fn default_app() -> String {
    "App.jsx".to_string()
}

fn default_extension() -> String {
    "jsx".to_string()
}

/// Scoring thresholds. Point budgets themselves are fixed; these tune the
/// pass gate and the count limits the heuristics compare against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Overall percentage required for the run to pass.
    #[serde(default = "default_pass_percentage")]
    pub pass_percentage: f64,

    /// Categories strictly below this percentage get a recommendation.
    #[serde(default = "default_recommend_below")]
    pub recommend_below: f64,

    /// Issues shown per category in the report.
    #[serde(default = "default_max_display_issues")]
    pub max_display_issues: usize,

    /// Inline-style occurrences tolerated across page files.
    #[serde(default = "default_max_inline_styles")]
    pub max_inline_styles: usize,

    /// Distinct button class attributes tolerated across page files.
    #[serde(default = "default_max_button_classes")]
    pub max_button_classes: usize,

    /// Minimum navigation links expected in the header.
    #[serde(default = "default_min_nav_links")]
    pub min_nav_links: usize,

    /// Minimum route declarations expected in the app file.
    #[serde(default = "default_min_routes")]
    pub min_routes: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            pass_percentage: default_pass_percentage(),
            recommend_below: default_recommend_below(),
            max_display_issues: default_max_display_issues(),
            max_inline_styles: default_max_inline_styles(),
            max_button_classes: default_max_button_classes(),
            min_nav_links: default_min_nav_links(),
            min_routes: default_min_routes(),
        }
    }
}

fn default_pass_percentage() -> f64 {
    70.0
}

fn default_recommend_below() -> f64 {
    60.0
}

fn default_max_display_issues() -> usize {
    5
}

fn default_max_inline_styles() -> usize {
    50
}

fn default_max_button_classes() -> usize {
    5
}

fn default_min_nav_links() -> usize {
    3
}

fn default_min_routes() -> usize {
    5
}

/// Report sink settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path of the persisted JSON snapshot.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

fn default_output() -> String {
    "ux_audit_result.json".to_string()
}

/// Server endpoints and start commands for `health` and `restart`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub backend_host: String,

    #[serde(default = "default_backend_port")]
    pub backend_port: u16,

    #[serde(default = "default_host")]
    pub frontend_host: String,

    #[serde(default = "default_frontend_port")]
    pub frontend_port: u16,

    /// Per-request timeout for health probes.
    #[serde(default = "default_health_timeout")]
    pub health_timeout_seconds: u64,

    /// Seconds to wait after spawning servers before probing them.
    #[serde(default = "default_startup_wait")]
    pub startup_wait_seconds: u64,

    #[serde(default = "default_backend_dir")]
    pub backend_dir: String,

    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,

    #[serde(default = "default_backend_cmd")]
    pub backend_cmd: String,

    #[serde(default = "default_frontend_cmd")]
    pub frontend_cmd: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            backend_host: default_host(),
            backend_port: default_backend_port(),
            frontend_host: default_host(),
            frontend_port: default_frontend_port(),
            health_timeout_seconds: default_health_timeout(),
            startup_wait_seconds: default_startup_wait(),
            backend_dir: default_backend_dir(),
            frontend_dir: default_frontend_dir(),
            backend_cmd: default_backend_cmd(),
            frontend_cmd: default_frontend_cmd(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_backend_port() -> u16 {
    5000
}

fn default_frontend_port() -> u16 {
    5173
}

fn default_health_timeout() -> u64 {
    10
}

fn default_startup_wait() -> u64 {
    5
}

fn default_backend_dir() -> String {
    "backend".to_string()
}

fn default_frontend_dir() -> String {
    "frontend".to_string()
}

fn default_backend_cmd() -> String {
    "npm start".to_string()
}

fn default_frontend_cmd() -> String {
    "npm run dev".to_string()
}

/// One lint/build step the deploy gate runs before the audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateCheck {
    /// Label shown in the step summary.
    pub name: String,
    /// Shell command to run.
    pub command: String,
    /// Working directory, relative to the current directory.
    #[serde(default = "default_cwd")]
    pub cwd: String,
}

fn default_cwd() -> String {
    ".".to_string()
}

/// Deploy gate settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Steps run in order before the audit and health checks.
    #[serde(default = "default_gate_checks")]
    pub checks: Vec<GateCheck>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            checks: default_gate_checks(),
        }
    }
}

fn default_gate_checks() -> Vec<GateCheck> {
    vec![
        GateCheck {
            name: "lint".to_string(),
            command: "npx eslint src --ext .js,.jsx".to_string(),
            cwd: "frontend".to_string(),
        },
        GateCheck {
            name: "build".to_string(),
            command: "npm run build".to_string(),
            cwd: "frontend".to_string(),
        },
    ]
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".uxaudit.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

//! HTTP health probes for the backend and frontend dev servers.

use crate::config::ServerConfig;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Outcome of probing both servers.
#[derive(Debug, Clone, Copy)]
pub struct HealthReport {
    pub backend: bool,
    pub frontend: bool,
}

impl HealthReport {
    pub fn all_up(&self) -> bool {
        self.backend && self.frontend
    }
}

/// Body of the backend's /api/health endpoint. Fields are best-effort;
/// an unparseable body still counts as healthy if the status was 200.
#[derive(Debug, Deserialize)]
struct BackendHealth {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    database: Option<String>,
}

fn client(config: &ServerConfig) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(config.health_timeout_seconds))
        .build()
        .unwrap_or_default()
}

/// Probe both servers concurrently and print per-service status lines.
pub async fn check_all(config: &ServerConfig) -> HealthReport {
    let (backend, frontend) = tokio::join!(check_backend(config), check_frontend(config));
    HealthReport { backend, frontend }
}

/// GET the backend health endpoint. Healthy iff it answers 200.
pub async fn check_backend(config: &ServerConfig) -> bool {
    let url = format!(
        "http://{}:{}/api/health",
        config.backend_host, config.backend_port
    );
    debug!("Probing backend at {}", url);

    match client(config).get(&url).send().await {
        Ok(response) if response.status().is_success() => {
            println!("[OK] backend up (port {})", config.backend_port);
            if let Ok(health) = response.json::<BackendHealth>().await {
                println!(
                    "     status: {}",
                    health.status.as_deref().unwrap_or("unknown")
                );
                println!(
                    "     database: {}",
                    health.database.as_deref().unwrap_or("unknown")
                );
            }
            true
        }
        Ok(response) => {
            println!(
                "[ERROR] backend responded with HTTP {} (port {})",
                response.status(),
                config.backend_port
            );
            false
        }
        Err(e) if e.is_timeout() => {
            println!("[ERROR] backend timed out (port {})", config.backend_port);
            false
        }
        Err(e) => {
            debug!("Backend probe failed: {}", e);
            println!(
                "[ERROR] backend unreachable (port {})",
                config.backend_port
            );
            false
        }
    }
}

/// GET the frontend root. Healthy iff it answers 200.
pub async fn check_frontend(config: &ServerConfig) -> bool {
    let url = format!("http://{}:{}/", config.frontend_host, config.frontend_port);
    debug!("Probing frontend at {}", url);

    match client(config).get(&url).send().await {
        Ok(response) if response.status().is_success() => {
            println!("[OK] frontend up (port {})", config.frontend_port);
            true
        }
        Ok(response) => {
            println!(
                "[ERROR] frontend responded with HTTP {} (port {})",
                response.status(),
                config.frontend_port
            );
            false
        }
        Err(e) if e.is_timeout() => {
            println!("[ERROR] frontend timed out (port {})", config.frontend_port);
            false
        }
        Err(e) => {
            debug!("Frontend probe failed: {}", e);
            println!(
                "[ERROR] frontend unreachable (port {})",
                config.frontend_port
            );
            false
        }
    }
}

//! Dashboard configuration
//!
//! Loaded from TOML, then overridden from the environment:
//! - `DATABASE_URL`: Postgres connection string
//! - `INVOICEDASH_BIND`: HTTP bind address
//! - `INVOICEDASH_REVENUE_DELAY_MS`: simulated latency for the revenue query
//!
//! File lookup order: explicit path, `./invoicedash.toml`,
//! `~/.invoicedash/config.toml`. A missing file means defaults.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

const LOCAL_CONFIG_FILE: &str = "invoicedash.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub dashboard: DashboardSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    /// Allow any origin. Localhost only when false.
    #[serde(default)]
    pub cors_permissive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSection {
    #[serde(default = "default_revenue_delay_ms")]
    pub revenue_delay_ms: u64,
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3030))
}

fn default_revenue_delay_ms() -> u64 {
    3000
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors_permissive: false,
        }
    }
}

impl Default for DashboardSection {
    fn default() -> Self {
        Self {
            revenue_delay_ms: default_revenue_delay_ms(),
        }
    }
}

impl DashboardConfig {
    /// Load config from `path` (or the default locations) and apply
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match resolve_path(path) {
            Some(path) => Self::from_file(&path)?,
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.apply_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production, a map in tests).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            self.database.url = Some(url);
        }

        if let Some(bind) = lookup("INVOICEDASH_BIND") {
            self.server.bind = bind.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "INVOICEDASH_BIND",
                value: bind.clone(),
            })?;
        }

        if let Some(delay) = lookup("INVOICEDASH_REVENUE_DELAY_MS") {
            self.dashboard.revenue_delay_ms =
                delay.parse().map_err(|_| ConfigError::InvalidEnv {
                    var: "INVOICEDASH_REVENUE_DELAY_MS",
                    value: delay.clone(),
                })?;
        }

        Ok(())
    }

    pub fn revenue_delay(&self) -> Duration {
        Duration::from_millis(self.dashboard.revenue_delay_ms)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.database.acquire_timeout_secs)
    }

    /// User-level config path: ~/.invoicedash/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".invoicedash").join("config.toml"))
    }
}

fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    DashboardConfig::user_config_path().filter(|p| p.exists())
}

//! Service configuration loaded from an optional TOML file and the environment.
//!
//! Lookup order for every setting: environment variable, then `config.toml`
//! (or the file named by `CONFIG_PATH`), then the built-in default.

use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Store address used when neither `MONGO_URI` nor the config file names one.
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub uri: String,
    #[serde(default = "default_connect_attempts")]
    pub connect_attempts: u32,
    #[serde(default = "default_retry_delay")]
    pub connect_retry_delay_secs: u64,
    #[serde(default = "default_selection_timeout")]
    pub server_selection_timeout_secs: u64,
    /// Round-trip a `ping` before accepting the connection.
    #[serde(default = "default_true")]
    pub probe_on_startup: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: String::new(),
            connect_attempts: default_connect_attempts(),
            connect_retry_delay_secs: default_retry_delay(),
            server_selection_timeout_secs: default_selection_timeout(),
            probe_on_startup: true,
        }
    }
}

fn default_connect_attempts() -> u32 { 10 }
fn default_retry_delay() -> u64 { 5 }
fn default_selection_timeout() -> u64 { 5 }
fn default_true() -> bool { true }

/// List endpoint limits. `max_limit = None` keeps `limit` unbounded.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct PaginationConfig {
    #[serde(default)]
    pub max_limit: Option<u64>,
}

/// Read the config file if present; a missing file yields defaults.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    match std::fs::read_to_string(&path) {
        Ok(content) => AppConfig::from_toml_str(&content)
            .map_err(|e| anyhow!("invalid config file {path}: {e}")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(anyhow!("cannot read config file {path}: {e}")),
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// File + process environment, normalized and validated.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.apply_env(|key| std::env::var(key).ok());
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Overlay environment values through `lookup` (injected for tests).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(uri) = lookup("MONGO_URI").filter(|v| !v.trim().is_empty()) {
            self.database.uri = uri;
        }
        if let Some(host) = lookup("SERVER_HOST").filter(|v| !v.trim().is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Some(max) = lookup("MAX_LIST_LIMIT").and_then(|v| v.parse::<u64>().ok()) {
            self.pagination.max_limit = Some(max);
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize();
        self.database.validate()?;
        if self.pagination.max_limit == Some(0) {
            return Err(anyhow!("pagination.max_limit must be >= 1 when set"));
        }
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    fn normalize(&mut self) {
        if self.uri.trim().is_empty() {
            self.uri = DEFAULT_MONGO_URI.to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        let lower = self.uri.to_lowercase();
        if !(lower.starts_with("mongodb://") || lower.starts_with("mongodb+srv://")) {
            return Err(anyhow!("database.uri must start with mongodb:// or mongodb+srv://"));
        }
        if self.connect_attempts == 0 {
            return Err(anyhow!("database.connect_attempts must be >= 1"));
        }
        if self.server_selection_timeout_secs == 0 {
            return Err(anyhow!("database.server_selection_timeout_secs must be positive"));
        }
        Ok(())
    }
}

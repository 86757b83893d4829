//! Configuration loading for the explorer.
//! Reads lifexp.toml from the current directory or the path in the LIFEXP_CONFIG env var.
//! Every field has a default, so running without a config file is supported.
//! Default paths point at the files shipped with the workspace, so they do not
//! depend on the directory the binary is started from. Relative paths inside a
//! config file are taken relative to that file.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "LIFEXP_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "lifexp.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub defaults: SelectionDefaults,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Workspace root, two levels above this crate's manifest.
fn workspace_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn default_static_dir() -> PathBuf { workspace_dir().join("crates/lifexp-web/static") }
fn default_log_level()  -> String  { "info".to_string() }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 8501 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// CSV file with one row per country-year.
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf { workspace_dir().join("data/wdi.csv") }

impl Default for DataConfig {
    fn default() -> Self {
        Self { path: default_data_path() }
    }
}

/// Initial control values shown on a first visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionDefaults {
    #[serde(default = "default_year")]
    pub year: i32,
    #[serde(default = "default_continents")]
    pub continents: Vec<String>,
}

fn default_year() -> i32 { 2000 }
fn default_continents() -> Vec<String> { vec!["Africa".to_string()] }

impl Default for SelectionDefaults {
    fn default() -> Self {
        Self { year: default_year(), continents: default_continents() }
    }
}

impl ExplorerConfig {
    /// Load configuration from lifexp.toml.
    /// Checks LIFEXP_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(CONFIG_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(Path::new(&path))
    }

    /// A missing file yields the defaults; an unreadable or invalid one is an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {e}", path.display()))?;

        if let Some(base) = path.parent() {
            config.data.path = base.join(&config.data.path);
            config.static_dir = base.join(&config.static_dir);
        }
        Ok(config)
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address {addr}: {e}"))
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            data: DataConfig::default(),
            defaults: SelectionDefaults::default(),
            static_dir: default_static_dir(),
            log_level: default_log_level(),
        }
    }
}

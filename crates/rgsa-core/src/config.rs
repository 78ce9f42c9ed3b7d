use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Backend used when neither the config file nor the command line names one.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Global configuration loaded from `~/.config/rgsa/config.toml`.
///
/// Every key is optional in the file; missing keys take the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RgsaConfig {
    /// Base URL of the analysis backend, e.g. `http://127.0.0.1:8000`. Not validated.
    pub api_base: String,
    /// Seconds allowed for establishing the TCP/TLS connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole exchange (report generation included).
    pub timeout_secs: u64,
    /// Directory reports are saved into (None = current directory).
    pub output_dir: Option<PathBuf>,
    /// User-Agent header sent to the backend (None = `rgsa/<version>`).
    pub user_agent: Option<String>,
}

impl Default for RgsaConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 120,
            output_dir: None,
            user_agent: None,
        }
    }
}

impl RgsaConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rgsa")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RgsaConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<RgsaConfig> {
    if !path.exists() {
        let default_cfg = RgsaConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RgsaConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default record key holding the URL list.
pub const DEFAULT_STORAGE_KEY: &str = "urls";

/// Storage backend: SQLite database (default) or a plain JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Json,
}

/// Global configuration loaded from `~/.config/tabstash/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabstashConfig {
    /// Where the list lives: "sqlite" (default) or "json".
    #[serde(default)]
    pub storage_backend: StorageBackend,
    /// Record key the list is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Optional state directory override (None = `~/.local/state/tabstash`).
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for TabstashConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::default(),
            storage_key: default_storage_key(),
            state_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tabstash")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TabstashConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TabstashConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: TabstashConfig = toml::from_str(&data)?;
    Ok(cfg)
}

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_connect_timeout() -> u64 {
    15
}

fn default_request_timeout() -> u64 {
    60
}

/// Global configuration loaded from `~/.config/sheetstat/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetstatConfig {
    /// Site root hosting the `/india_topo_maps/...` listing files.
    pub base_url: String,
    /// Connect timeout per listing GET, in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Total transfer timeout per listing GET, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for SheetstatConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ramseraph.github.io".to_string(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sheetstat")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SheetstatConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SheetstatConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<SheetstatConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: SheetstatConfig = toml::from_str(&data)?;
    Ok(cfg)
}

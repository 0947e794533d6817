use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_check::{UrlValidator, DEFAULT_SCHEMES, MAX_URL_LEN};

/// Global configuration loaded from `~/.config/page-analyzer/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum accepted URL length, in characters.
    #[serde(default = "default_max_url_len")]
    pub max_url_len: usize,
    /// URL schemes accepted by validation.
    #[serde(default = "default_schemes")]
    pub allowed_schemes: Vec<String>,
    /// Database file; if missing, `~/.local/state/page-analyzer/urls.db`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

fn default_max_url_len() -> usize {
    MAX_URL_LEN
}

fn default_schemes() -> Vec<String> {
    DEFAULT_SCHEMES.iter().map(|s| s.to_string()).collect()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_url_len: default_max_url_len(),
            allowed_schemes: default_schemes(),
            database_path: None,
        }
    }
}

impl AnalyzerConfig {
    /// Validator built from the length limit and scheme list.
    pub fn validator(&self) -> UrlValidator {
        UrlValidator::new(self.max_url_len, &self.allowed_schemes)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("page-analyzer")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AnalyzerConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<AnalyzerConfig> {
    if !path.exists() {
        let default_cfg = AnalyzerConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: AnalyzerConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

//! On-disk configuration
//!
//! Stored as TOML at the platform config dir (e.g.
//! `~/.config/plotdeck/config.toml`). Every field has a default so a
//! missing or partial file is fine; CLI flags override whatever is loaded.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Color theme selection persisted in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckTheme {
    #[default]
    Mocha,
    Nord,
    Latte,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Cards shown per carousel page
    pub page_size: usize,
    pub theme: DeckTheme,
    /// Default catalog file; the built-in seed catalog is used when unset
    pub catalog: Option<PathBuf>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            page_size: crate::pager::DEFAULT_PAGE_SIZE,
            theme: DeckTheme::default(),
            catalog: None,
        }
    }
}

impl DeckConfig {
    /// Path to the config file, platform-dependent
    pub fn path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "plotdeck")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from disk, falling back to defaults when the file is absent
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::path() else {
            anyhow::bail!("could not determine config directory");
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(&path, raw)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }
}

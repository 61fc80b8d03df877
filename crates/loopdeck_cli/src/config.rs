//! Loopdeck configuration file handling

use anyhow::{Context, Result};
use loopdeck_carousel::CarouselConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "loopdeck.toml";

/// Top-level configuration (loopdeck.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoopdeckConfig {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Defaults for `loopdeck simulate`
#[derive(Debug, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Number of blocks to mount
    #[serde(default = "default_items")]
    pub items: usize,
    /// Container width in px
    #[serde(default = "default_width")]
    pub width: f32,
    /// Characters of text per block (drives wrapped height)
    #[serde(default = "default_text_len")]
    pub text_len: usize,
}

fn default_items() -> usize {
    5
}

fn default_width() -> f32 {
    1024.0
}

fn default_text_len() -> usize {
    160
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            items: default_items(),
            width: default_width(),
            text_len: default_text_len(),
        }
    }
}

impl LoopdeckConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load `path` if given, else `loopdeck.toml` if present, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid TOML")?;
        config
            .carousel
            .validate()
            .context("Invalid [carousel] section")?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

//! Configuration loading and management.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::attribute::{UniqueTypes, UNIQUE_TYPES};
use crate::error::CoreError;

/// Full configuration for the Identifi widgets and CLI.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct IdentifiConfig {
    /// Rendering settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Attribute classification settings.
    #[serde(default)]
    pub attributes: AttributeConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Base URL that profile links are built on: `{base}/{type}/{value}`.
    #[serde(default = "default_profile_base_url")]
    pub profile_base_url: String,
    /// Identicon width inside a profile card, in pixels.
    #[serde(default = "default_card_identicon_size")]
    pub card_identicon_size: u32,
    /// Identicon aura width, in pixels.
    #[serde(default = "default_border")]
    pub default_border: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeConfig {
    /// Attribute types accepted as canonical identifiers.
    #[serde(default = "default_unique_types")]
    pub unique_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_profile_base_url() -> String {
    "https://identi.fi/#/identities".into()
}
fn default_card_identicon_size() -> u32 {
    60
}
fn default_border() -> u32 {
    4
}
fn default_unique_types() -> Vec<String> {
    UNIQUE_TYPES.iter().map(|t| t.to_string()).collect()
}
fn default_log_level() -> String {
    "info".into()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            profile_base_url: default_profile_base_url(),
            card_identicon_size: default_card_identicon_size(),
            default_border: default_border(),
        }
    }
}

impl Default for AttributeConfig {
    fn default() -> Self {
        Self {
            unique_types: default_unique_types(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl IdentifiConfig {
    /// Load config from a TOML file, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: IdentifiConfig = toml::from_str(&contents)?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save the current config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.render.profile_base_url.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "render.profile_base_url must not be empty".into(),
            ));
        }
        if self.render.card_identicon_size == 0 {
            return Err(CoreError::InvalidConfig(
                "render.card_identicon_size must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Classifier built from `[attributes] unique_types`.
    pub fn unique_types(&self) -> UniqueTypes {
        UniqueTypes::new(self.attributes.unique_types.iter().cloned())
    }
}

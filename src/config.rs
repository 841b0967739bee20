//! Token Configuration Module
//!
//! This module handles loading and managing the token metadata
//! configuration: the symbol, human-readable name, and decimal places the
//! token is constructed with.

use serde::{Deserialize, Serialize};

/// Token metadata configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Token symbol (e.g. "UBT")
    pub symbol: String,
    /// Human-readable token name
    pub name: String,
    /// Number of decimal places
    pub decimals: u8,
}

impl TokenConfig {
    /// Loads the configuration from its TOML file.
    ///
    /// The path is taken from the `UBT_CONFIG_PATH` environment variable
    /// when set, falling back to `config/token.toml`.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenConfig)` - Successfully loaded configuration
    /// * `Err(anyhow::Error)` - Failed to load configuration or file doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let config_path =
            std::env::var("UBT_CONFIG_PATH").unwrap_or_else(|_| "config/token.toml".to_string());

        if std::path::Path::new(&config_path).exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: TokenConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Err(anyhow::anyhow!(
                "Configuration file '{}' not found. Please copy the template:\n\
                cp config/token.template.toml config/token.toml\n\
                Then edit config/token.toml with your actual values.",
                config_path
            ))
        }
    }
}

impl Default for TokenConfig {
    /// Placeholder values suitable for local development and testing.
    fn default() -> Self {
        Self {
            symbol: "UBT".to_string(),
            name: "Utility Branded Token".to_string(),
            decimals: 18,
        }
    }
}

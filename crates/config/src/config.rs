//! Configuration files.

use eyre::WrapErr;
use gasprice_chainspec::ChainSpec;
use gasprice_oracle::FeeHistoryConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Configuration for the gas price oracle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Limits of fee history queries.
    pub fee_history: FeeHistoryConfig,
    /// The chain the oracle serves.
    pub chain: ChainSpec,
}

impl Config {
    /// Load a [`Config`] from a specified path.
    ///
    /// A new configuration file is created with default values if none exists.
    pub fn from_path(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(cfg_string) => {
                toml::from_str(&cfg_string).wrap_err_with(|| format!("Failed to parse {path:?}"))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .wrap_err_with(|| format!("Could not create {parent:?}"))?;
                }
                let cfg = Self::default();
                cfg.save(path)?;
                info!(target: "gasprice::config", ?path, "Created default configuration");
                Ok(cfg)
            }
            Err(e) => {
                Err(e).wrap_err_with(|| format!("Failed to load configuration from {path:?}"))
            }
        }
    }

    /// Save the configuration to toml file.
    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        if path.extension() != Some(std::ffi::OsStr::new("toml")) {
            eyre::bail!("Configuration file {path:?} must have a .toml extension")
        }
        std::fs::write(path, toml::to_string_pretty(self)?)
            .wrap_err_with(|| format!("Failed to write configuration to {path:?}"))
    }
}

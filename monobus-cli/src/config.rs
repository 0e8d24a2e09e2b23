//! Bus configuration loading
//!
//! Reads a [`BusConfig`] from TOML and layers command-line flags on top.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use monobus_core::BusConfig;

use crate::cli::TargetArgs;

/// Parse a TOML bus configuration
pub fn parse_config(input: &str) -> Result<BusConfig> {
    toml::from_str(input).context("invalid bus configuration")
}

/// Load a TOML bus configuration from disk
pub fn load_config(path: &Path) -> Result<BusConfig> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&input).with_context(|| format!("in {}", path.display()))
}

/// Resolve the effective configuration: file first, then flags
pub fn resolve(target: &TargetArgs) -> Result<BusConfig> {
    let mut config = match &target.config {
        Some(path) => load_config(path)?,
        None => BusConfig::default(),
    };

    if let Some(bus) = target.bus {
        config.bus = bus;
    }
    if let Some(address) = target.address {
        config.address = Some(address);
    }

    tracing::debug!(?config, "resolved bus configuration");
    Ok(config)
}

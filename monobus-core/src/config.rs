//! Bus configuration
//!
//! Selects which bus to open and which device to bind. Deserializable
//! when the `serde` feature is enabled.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default device node prefix; the bus number is appended
pub const DEFAULT_DEVICE_PREFIX: &str = "/dev/i2c-";

/// Default bus number
pub const DEFAULT_BUS: u32 = 1;

/// Bus and device selection
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BusConfig {
    /// Bus number
    pub bus: u32,
    /// Target device address, if configured
    pub address: Option<u16>,
    /// Device node prefix
    pub device_prefix: String,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            bus: DEFAULT_BUS,
            address: None,
            device_prefix: DEFAULT_DEVICE_PREFIX.into(),
        }
    }
}

impl BusConfig {
    /// Configuration for a bus and device on the default prefix
    pub fn new(bus: u32, address: u16) -> Self {
        Self {
            bus,
            address: Some(address),
            ..Self::default()
        }
    }

    /// Full device node path for the configured bus
    pub fn device_path(&self) -> String {
        format!("{}{}", self.device_prefix, self.bus)
    }
}

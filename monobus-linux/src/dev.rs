//! i2c-dev device nodes
//!
//! A bus number maps to a device node by appending it to a prefix
//! (`/dev/i2c-` by default). The node is opened read-write and bound to a
//! device with the `I2C_SLAVE` ioctl; after that plain `read(2)` and
//! `write(2)` talk to that device.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::os::fd::AsRawFd;

use monobus_core::DEFAULT_DEVICE_PREFIX;
use monobus_hal::{Channel, Connector};

use crate::ffi;

/// Opens `/dev/i2c-N` style device nodes
///
/// Only [`LinuxBus`](crate::LinuxBus) can create one, so every open
/// descriptor goes through the take-once guard. The type is neither
/// constructible nor cloneable outside this crate:
///
/// ```compile_fail
/// let connector = monobus_linux::DevConnector::new();
/// ```
///
/// ```compile_fail
/// fn duplicate(bus: &monobus_linux::LinuxBus) -> monobus_linux::DevConnector {
///     bus.connector().clone()
/// }
/// ```
#[derive(Debug)]
pub struct DevConnector {
    prefix: String,
}

impl DevConnector {
    /// Connector for the standard `/dev/i2c-N` nodes
    pub(crate) fn new() -> Self {
        Self::with_prefix(DEFAULT_DEVICE_PREFIX)
    }

    /// Connector for nodes named `<prefix><bus>`
    pub(crate) fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Device node prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Device node path for a bus
    pub fn path(&self, bus_id: u32) -> String {
        format!("{}{}", self.prefix, bus_id)
    }
}

impl Connector for DevConnector {
    type Channel = DevChannel;
    type Error = io::Error;

    fn connect(&mut self, bus_id: u32) -> Result<DevChannel, io::Error> {
        let path = self.path(bus_id);
        let file = OpenOptions::new().read(true).write(true).open(&path)?;
        tracing::trace!(path = %path, fd = file.as_raw_fd(), "device node opened");
        Ok(DevChannel { file })
    }
}

/// An open i2c-dev device node
///
/// The descriptor is closed when the channel is dropped.
#[derive(Debug)]
pub struct DevChannel {
    file: File,
}

impl Channel for DevChannel {
    type Error = io::Error;

    fn bind(&mut self, address: u16) -> Result<(), io::Error> {
        ffi::set_slave_address(self.file.as_raw_fd(), address).map_err(io::Error::from)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, io::Error> {
        self.file.write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, io::Error> {
        self.file.read(buf)
    }
}

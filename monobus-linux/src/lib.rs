//! Linux i2c-dev backend
//!
//! This crate connects [`monobus_core::BusSession`] to the kernel's
//! userspace I2C interface:
//!
//! - [`DevConnector`] / [`DevChannel`] - `/dev/i2c-N` device nodes
//! - [`LinuxBus`] - the process-wide, take-once session
//!
//! See <https://www.kernel.org/doc/Documentation/i2c/dev-interface>.

#![deny(unsafe_code)]

pub mod bus;
pub mod dev;
mod ffi;

pub use bus::LinuxBus;
pub use dev::{DevChannel, DevConnector};

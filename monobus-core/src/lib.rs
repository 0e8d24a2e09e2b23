//! Single-handle I2C bus session
//!
//! This crate contains the session logic that does not depend on a
//! specific platform:
//!
//! - [`BusSession`] - open/close lifecycle and buffer transfers
//! - [`Error`] / [`ErrorKind`] - failure taxonomy and status-code mapping
//! - [`BusConfig`] - bus and device selection
//! - `embedded-hal` [`I2c`](embedded_hal::i2c::I2c) adapter for the session
//!
//! The session never retries and never logs the errors it returns; every
//! failure goes straight back to the caller.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
mod i2c;
#[cfg(test)]
mod mock;
pub mod session;

pub use config::{BusConfig, DEFAULT_DEVICE_PREFIX};
pub use error::{status_code, BoxError, Error, ErrorKind};
pub use session::BusSession;

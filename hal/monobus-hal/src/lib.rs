//! Collaborator traits for monobus sessions
//!
//! A session owns at most one open channel. It gets that channel from a
//! [`Connector`] and afterwards only calls the [`Channel`] methods, so the
//! same session logic runs against the kernel's i2c-dev nodes or against a
//! recording mock in tests.
//!
//! ```text
//!   BusSession::open(bus, addr)
//!        │
//!        ├── Connector::connect(bus) ──► Channel   (i2c-dev: open /dev/i2c-<bus>)
//!        └── Channel::bind(addr)                   (i2c-dev: ioctl I2C_SLAVE)
//!
//!   BusSession::write / read ──► Channel::write / read
//!   BusSession::close        ──► drop(Channel)
//! ```
//!
//! Implementations live in `monobus-linux` (`DevConnector`, `DevChannel`)
//! and in the test mocks of `monobus-core`.

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

// Re-export key traits at crate root for convenience
pub use i2c::{Channel, Connector};

//! Process-wide bus session
//!
//! Only one [`LinuxBus`] exists at a time. [`LinuxBus::take`] hands it out
//! once; it becomes available again after the previous one is dropped.
//! This keeps at most one i2c-dev handle open per process without a global
//! handle variable: [`DevConnector`] can only be created here, and the
//! session behind the guard cannot be moved out or replaced.

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};

use monobus_core::{BusConfig, BusSession};

use crate::dev::DevConnector;

/// Set while a `LinuxBus` is alive
static TAKEN: AtomicBool = AtomicBool::new(false);

/// The process's single i2c-dev session
///
/// Dereferences to the underlying [`BusSession`]. Dropping it closes the
/// session and lets the next [`take`](Self::take) succeed.
pub struct LinuxBus {
    session: BusSession<DevConnector>,
}

impl LinuxBus {
    /// Take the session for the standard `/dev/i2c-N` nodes
    ///
    /// Returns `None` while another `LinuxBus` is alive.
    pub fn take() -> Option<Self> {
        Self::claim(DevConnector::new())
    }

    /// Take the session using the device prefix from `config`
    pub fn take_for(config: &BusConfig) -> Option<Self> {
        Self::take_with(config.device_prefix.as_str())
    }

    /// Take the session for device nodes named `<prefix><bus>`
    pub fn take_with(prefix: impl Into<String>) -> Option<Self> {
        Self::claim(DevConnector::with_prefix(prefix))
    }

    fn claim(connector: DevConnector) -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(Self {
            session: BusSession::new(connector),
        })
    }
}

impl Deref for LinuxBus {
    type Target = BusSession<DevConnector>;

    fn deref(&self) -> &Self::Target {
        &self.session
    }
}

impl DerefMut for LinuxBus {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.session
    }
}

impl Drop for LinuxBus {
    fn drop(&mut self) {
        // Release the descriptor before the next owner can open one
        if self.session.is_open() {
            let _ = self.session.close();
        }
        TAKEN.store(false, Ordering::Release);
    }
}

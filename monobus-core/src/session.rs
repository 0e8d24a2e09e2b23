//! Bus session
//!
//! A [`BusSession`] is either closed or holds exactly one open channel
//! together with the device address it was bound to. The channel and the
//! address are stored and cleared together, so an address is never
//! observable without an open channel.
//!
//! # Usage
//!
//! ```ignore
//! let mut session = BusSession::new(connector);
//! session.open(1, 0x50)?;
//! session.write(&[0x00, 0x10])?;
//! let mut buf = [0u8; 2];
//! session.read(&mut buf)?;
//! session.close()?;
//! ```
//!
//! # Threading
//!
//! Every operation takes `&mut self` and blocks until the platform call
//! returns. The session does no locking of its own; callers sharing one
//! across threads must serialize access themselves (e.g. behind a
//! `Mutex`).

use monobus_hal::{Channel, Connector};
use tracing::{debug, trace};

use crate::error::{BoxError, Error};

/// An open channel and its binding
struct Binding<H> {
    channel: H,
    bus_id: u32,
    address: u16,
}

/// Single-handle bus session
///
/// Opening an already-open session is a successful no-op that keeps the
/// existing binding, even when a different bus or address is requested.
/// Dropping an open session releases its channel.
pub struct BusSession<C: Connector> {
    connector: C,
    binding: Option<Binding<C::Channel>>,
}

impl<C: Connector> BusSession<C> {
    /// Create a closed session that acquires channels from `connector`
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            binding: None,
        }
    }

    /// Check if a channel is open
    pub fn is_open(&self) -> bool {
        self.binding.is_some()
    }

    /// Address bound at the most recent successful open, while still open
    pub fn bound_address(&self) -> Option<u16> {
        self.binding.as_ref().map(|b| b.address)
    }

    /// Bus the open channel belongs to
    pub fn bus_id(&self) -> Option<u32> {
        self.binding.as_ref().map(|b| b.bus_id)
    }

    /// Get the connector
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Release the channel, if any, and return the connector
    pub fn into_connector(self) -> C {
        self.connector
    }
}

impl<C> BusSession<C>
where
    C: Connector,
    C::Error: Into<BoxError>,
    <C::Channel as Channel>::Error: Into<BoxError>,
{
    /// Open a channel to `bus_id` and bind it to `address`
    ///
    /// Returns immediately if the session is already open. If binding
    /// fails, the freshly acquired channel is released before returning.
    pub fn open(&mut self, bus_id: u32, address: u16) -> Result<(), Error> {
        if let Some(binding) = &self.binding {
            if binding.bus_id != bus_id || binding.address != address {
                debug!(
                    bus_id = binding.bus_id,
                    address = binding.address,
                    requested_bus_id = bus_id,
                    requested_address = address,
                    "session already open, keeping existing binding"
                );
            }
            return Ok(());
        }

        let mut channel = self
            .connector
            .connect(bus_id)
            .map_err(|e| Error::Acquire {
                bus_id,
                source: e.into(),
            })?;

        if let Err(e) = channel.bind(address) {
            drop(channel);
            return Err(Error::Bind {
                bus_id,
                address,
                source: e.into(),
            });
        }

        debug!(bus_id, address, "bus session opened");
        self.binding = Some(Binding {
            channel,
            bus_id,
            address,
        });
        Ok(())
    }

    /// Release the open channel
    ///
    /// Closing a session that is not open is an error.
    pub fn close(&mut self) -> Result<(), Error> {
        let binding = self.binding.take().ok_or(Error::NotOpen)?;
        drop(binding.channel);
        debug!(bus_id = binding.bus_id, "bus session closed");
        Ok(())
    }

    /// Write `data` to the bound device in one transfer
    ///
    /// Succeeds whenever the session is open and `data` is non-empty. The
    /// platform's transfer count and transfer errors are not inspected; use
    /// [`write_counted`](Self::write_counted) to see them.
    pub fn write(&mut self, data: &[u8]) -> Result<(), Error> {
        let channel = self.channel_for(data.len())?;
        match channel.write(data) {
            Ok(n) => trace!(requested = data.len(), transferred = n, "write"),
            Err(_) => trace!(requested = data.len(), "write failed, not reported"),
        }
        Ok(())
    }

    /// Read up to `buf.len()` bytes from the bound device in one transfer
    ///
    /// Succeeds whenever the session is open and `buf` is non-empty. Short
    /// reads and transfer errors are not reported; use
    /// [`read_counted`](Self::read_counted) to see them.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        let requested = buf.len();
        let channel = self.channel_for(requested)?;
        match channel.read(buf) {
            Ok(n) => trace!(requested, transferred = n, "read"),
            Err(_) => trace!(requested, "read failed, not reported"),
        }
        Ok(())
    }

    /// Write `data` and return the number of bytes the platform accepted
    ///
    /// Same preconditions as [`write`](Self::write); platform transfer
    /// errors are returned as [`Error::Transfer`].
    pub fn write_counted(&mut self, data: &[u8]) -> Result<usize, Error> {
        let channel = self.channel_for(data.len())?;
        let n = channel.write(data).map_err(|e| Error::Transfer {
            source: e.into(),
        })?;
        trace!(requested = data.len(), transferred = n, "write");
        Ok(n)
    }

    /// Read into `buf` and return the number of bytes received
    ///
    /// Same preconditions as [`read`](Self::read); platform transfer errors
    /// are returned as [`Error::Transfer`].
    pub fn read_counted(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let requested = buf.len();
        let channel = self.channel_for(requested)?;
        let n = channel.read(buf).map_err(|e| Error::Transfer {
            source: e.into(),
        })?;
        trace!(requested, transferred = n, "read");
        Ok(n)
    }

    /// Check transfer preconditions and hand out the open channel
    fn channel_for(&mut self, len: usize) -> Result<&mut C::Channel, Error> {
        let binding = self.binding.as_mut().ok_or(Error::NotOpen)?;
        if len == 0 {
            return Err(Error::EmptyBuffer);
        }
        Ok(&mut binding.channel)
    }
}

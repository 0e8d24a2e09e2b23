//! Session errors
//!
//! Every operation reports one of a small set of [`ErrorKind`]s. The
//! [`Error`] variants carry the detail and, where the platform failed, the
//! platform's own error as the source.

use thiserror::Error;

/// Boxed collaborator error kept as an error source
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Coarse error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Channel acquisition or address binding failed during open
    ConnectionFailed,
    /// Precondition violated: session not open, or empty buffer
    InvalidOperation,
    /// A checked transfer failed or moved fewer bytes than requested
    ///
    /// Only the counted transfer operations and the `embedded-hal` adapter
    /// produce this kind.
    Transfer,
}

/// Error from a bus session operation
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to acquire channel for bus {bus_id}")]
    Acquire {
        bus_id: u32,
        #[source]
        source: BoxError,
    },

    #[error("failed to bind bus {bus_id} to device 0x{address:02x}")]
    Bind {
        bus_id: u32,
        address: u16,
        #[source]
        source: BoxError,
    },

    #[error("bus session is not open")]
    NotOpen,

    #[error("transfer buffer is empty")]
    EmptyBuffer,

    #[error("device 0x{requested:02x} is not the bound device 0x{bound:02x}")]
    AddressMismatch { bound: u16, requested: u16 },

    #[error("transfer failed")]
    Transfer {
        #[source]
        source: BoxError,
    },

    #[error("short transfer: {transferred} of {requested} bytes")]
    ShortTransfer { requested: usize, transferred: usize },
}

impl Error {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Acquire { .. } | Error::Bind { .. } => ErrorKind::ConnectionFailed,
            Error::NotOpen | Error::EmptyBuffer | Error::AddressMismatch { .. } => {
                ErrorKind::InvalidOperation
            }
            Error::Transfer { .. } | Error::ShortTransfer { .. } => ErrorKind::Transfer,
        }
    }
}

/// Map a result onto the numeric status convention
///
/// `0` means success and `1` means failure, whatever the error kind.
pub fn status_code<T>(result: &Result<T, Error>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

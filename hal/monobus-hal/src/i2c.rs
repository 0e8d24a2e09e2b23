//! I2C channel abstractions
//!
//! Splits bus access into two steps the way the Linux i2c-dev interface
//! does: acquire a channel for a bus, then bind that channel to a device
//! address before moving bytes.

/// Largest address representable in 7-bit addressing mode
pub const MAX_SEVEN_BIT_ADDRESS: u16 = 0x7F;

/// Largest address representable in 10-bit addressing mode
pub const MAX_TEN_BIT_ADDRESS: u16 = 0x3FF;

/// Source of bus channels
///
/// Implementations map a numeric bus identifier onto whatever the platform
/// uses to reach that bus (a device node, a mock, ...).
pub trait Connector {
    /// Channel produced by a successful connection
    type Channel: Channel;

    /// Error type for channel acquisition
    type Error;

    /// Acquire a read-write channel to the given bus
    ///
    /// # Arguments
    /// * `bus_id` - Bus number, e.g. `1` for `/dev/i2c-1`
    fn connect(&mut self, bus_id: u32) -> Result<Self::Channel, Self::Error>;
}

/// An open channel to one bus
///
/// Dropping the channel releases the underlying resource.
pub trait Channel {
    /// Error type for channel operations
    type Error;

    /// Bind the channel to a target device
    ///
    /// All later transfers on this channel go to `address`.
    fn bind(&mut self, address: u16) -> Result<(), Self::Error>;

    /// Write bytes to the bound device in a single transfer
    ///
    /// Returns the number of bytes the platform reports as written, which
    /// may be less than `data.len()`.
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;

    /// Read bytes from the bound device in a single transfer
    ///
    /// Returns the number of bytes the platform reports as read, which may
    /// be less than `buf.len()`.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Check whether an address fits 7-bit addressing
pub fn is_seven_bit(address: u16) -> bool {
    address <= MAX_SEVEN_BIT_ADDRESS
}

/// Check whether an address fits 10-bit addressing
pub fn is_ten_bit(address: u16) -> bool {
    address <= MAX_TEN_BIT_ADDRESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_ranges() {
        assert!(is_seven_bit(0x50));
        assert!(is_seven_bit(0x7F));
        assert!(!is_seven_bit(0x80));

        assert!(is_ten_bit(0x80));
        assert!(is_ten_bit(0x3FF));
        assert!(!is_ten_bit(0x400));
    }
}

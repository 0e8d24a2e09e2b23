//! `embedded-hal` I2C adapter
//!
//! Lets drivers written against [`embedded_hal::i2c::I2c`] run on an open
//! session. The session stays bound to one device, so a transaction must
//! target the bound address. Each operation is a separate counted transfer
//! (no repeated start) and short transfers are errors here.

use embedded_hal::i2c::{self as hal_i2c, ErrorType, I2c, Operation, SevenBitAddress};
use monobus_hal::{Channel, Connector};

use crate::error::{BoxError, Error};
use crate::session::BusSession;

impl hal_i2c::Error for Error {
    fn kind(&self) -> hal_i2c::ErrorKind {
        hal_i2c::ErrorKind::Other
    }
}

impl<C: Connector> ErrorType for BusSession<C> {
    type Error = Error;
}

impl<C> I2c<SevenBitAddress> for BusSession<C>
where
    C: Connector,
    C::Error: Into<BoxError>,
    <C::Channel as Channel>::Error: Into<BoxError>,
{
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Error> {
        let bound = self.bound_address().ok_or(Error::NotOpen)?;
        if u16::from(address) != bound {
            return Err(Error::AddressMismatch {
                bound,
                requested: address.into(),
            });
        }

        for op in operations {
            let (requested, transferred) = match op {
                // Zero-length operations carry no data on i2c-dev
                Operation::Write(data) if data.is_empty() => continue,
                Operation::Read(buf) if buf.is_empty() => continue,
                Operation::Write(data) => (data.len(), self.write_counted(data)?),
                Operation::Read(buf) => (buf.len(), self.read_counted(buf)?),
            };
            if transferred != requested {
                return Err(Error::ShortTransfer {
                    requested,
                    transferred,
                });
            }
        }

        Ok(())
    }
}

//! Kernel i2c-dev ioctl bindings

#![allow(unsafe_code)]

use std::os::fd::RawFd;

use nix::errno::Errno;

/// Use this slave address for later transfers (`linux/i2c-dev.h`)
const I2C_SLAVE: u16 = 0x0703;

nix::ioctl_write_int_bad!(i2c_set_slave, I2C_SLAVE);

/// Bind an open i2c-dev descriptor to a device address
pub(crate) fn set_slave_address(fd: RawFd, address: u16) -> Result<(), Errno> {
    // SAFETY: I2C_SLAVE takes the address by value and touches no memory
    // on our side; an invalid descriptor is reported as EBADF.
    unsafe { i2c_set_slave(fd, address.into()) }.map(drop)
}

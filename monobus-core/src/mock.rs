//! Recording mock collaborators for session tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use monobus_hal::{Channel, Connector};

/// Everything the mock saw
#[derive(Debug, Default)]
pub struct Log {
    pub connects: Vec<u32>,
    pub binds: Vec<u16>,
    pub writes: usize,
    pub reads: usize,
    pub released: usize,
    /// Bytes written and not yet read back
    pub echo: VecDeque<u8>,
}

impl Log {
    /// Number of channel primitives invoked, release excluded
    pub fn channel_calls(&self) -> usize {
        self.connects.len() + self.binds.len() + self.writes + self.reads
    }
}

/// Connector handing out echoing channels
#[derive(Debug, Default)]
pub struct MockConnector {
    pub log: Rc<RefCell<Log>>,
    pub fail_connect: bool,
    pub fail_bind: bool,
    pub fail_transfer: bool,
    /// Transfers report this many bytes fewer than requested
    pub short_by: usize,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Rc<RefCell<Log>> {
        Rc::clone(&self.log)
    }
}

impl Connector for MockConnector {
    type Channel = MockChannel;
    type Error = io::Error;

    fn connect(&mut self, bus_id: u32) -> Result<MockChannel, io::Error> {
        self.log.borrow_mut().connects.push(bus_id);
        if self.fail_connect {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        Ok(MockChannel {
            log: Rc::clone(&self.log),
            fail_bind: self.fail_bind,
            fail_transfer: self.fail_transfer,
            short_by: self.short_by,
        })
    }
}

/// Channel that reads back whatever was written to it
#[derive(Debug)]
pub struct MockChannel {
    log: Rc<RefCell<Log>>,
    fail_bind: bool,
    fail_transfer: bool,
    short_by: usize,
}

impl Channel for MockChannel {
    type Error = io::Error;

    fn bind(&mut self, address: u16) -> Result<(), io::Error> {
        self.log.borrow_mut().binds.push(address);
        if self.fail_bind {
            return Err(io::Error::from_raw_os_error(25)); // ENOTTY
        }
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, io::Error> {
        let mut log = self.log.borrow_mut();
        log.writes += 1;
        if self.fail_transfer {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }
        let n = data.len().saturating_sub(self.short_by);
        log.echo.extend(&data[..n]);
        Ok(n)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, io::Error> {
        let mut log = self.log.borrow_mut();
        log.reads += 1;
        if self.fail_transfer {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }
        let n = buf.len().saturating_sub(self.short_by).min(log.echo.len());
        for slot in &mut buf[..n] {
            *slot = log.echo.pop_front().unwrap_or_default();
        }
        Ok(n)
    }
}

impl Drop for MockChannel {
    fn drop(&mut self) {
        self.log.borrow_mut().released += 1;
    }
}

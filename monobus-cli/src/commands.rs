//! Subcommand execution
//!
//! Every command opens the bus, does its work, and closes the bus again.

use anyhow::{anyhow, Context, Result};
use monobus_core::BusConfig;
use monobus_hal::i2c::is_seven_bit;
use monobus_linux::LinuxBus;
use tracing::{info, warn};

use crate::cli::Command;

/// Run one command against the configured device
pub fn run(command: Command, config: &BusConfig, checked: bool) -> Result<()> {
    let address = config
        .address
        .ok_or_else(|| anyhow!("no device address given (use --address or a config file)"))?;
    if !is_seven_bit(address) {
        warn!(address, "address is outside the 7-bit range");
    }

    let mut bus = LinuxBus::take_for(config).context("bus already in use")?;
    bus.open(config.bus, address)
        .with_context(|| format!("cannot open {}", config.device_path()))?;
    info!(bus = config.bus, address, "bus open");

    let result = match command {
        Command::Write { bytes } => write(&mut bus, &bytes, checked),
        Command::Read { len } => read(&mut bus, len, checked),
        Command::Probe => {
            println!("0x{address:02x} on {}: ok", config.device_path());
            Ok(())
        }
    };

    bus.close().context("failed to close bus")?;
    result
}

fn write(bus: &mut LinuxBus, bytes: &[u8], checked: bool) -> Result<()> {
    if checked {
        let written = bus.write_counted(bytes)?;
        if written != bytes.len() {
            return Err(anyhow!("short write: {written} of {} bytes", bytes.len()));
        }
    } else {
        bus.write(bytes)?;
    }
    Ok(())
}

fn read(bus: &mut LinuxBus, len: usize, checked: bool) -> Result<()> {
    let mut buf = vec![0u8; len];
    let received = if checked {
        bus.read_counted(&mut buf)?
    } else {
        bus.read(&mut buf)?;
        len
    };

    let hex: Vec<String> = buf[..received].iter().map(|b| format!("0x{b:02x}")).collect();
    println!("{}", hex.join(" "));

    if received != len {
        return Err(anyhow!("short read: {received} of {len} bytes"));
    }
    Ok(())
}

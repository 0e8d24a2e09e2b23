use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "monobus")]
#[command(about = "Talk to one I2C device over Linux i2c-dev")]
#[command(version)]
pub struct Cli {
    /// Increase verbosity (-v lifecycle, -vv transfers)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub target: TargetArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Bus and device selection; flags override the config file
#[derive(Args, Debug, Default)]
pub struct TargetArgs {
    /// TOML file with `bus`, `address` and `device_prefix`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Bus number (`/dev/i2c-<BUS>`)
    #[arg(short, long, global = true)]
    pub bus: Option<u32>,

    /// Device address, decimal or 0x-prefixed hex
    #[arg(short, long, global = true, value_parser = parse_address)]
    pub address: Option<u16>,

    /// Report short transfers and transfer errors instead of ignoring them
    #[arg(long, global = true)]
    pub checked: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write bytes to the device
    Write {
        /// Bytes to send, decimal or 0x-prefixed hex
        #[arg(required = true, value_parser = parse_byte)]
        bytes: Vec<u8>,
    },
    /// Read bytes from the device and print them as hex
    Read {
        /// Number of bytes to read
        #[arg(short = 'n', long, default_value_t = 1)]
        len: usize,
    },
    /// Open and close the bus to check the device can be bound
    Probe,
}

fn parse_int(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid number '{s}': {e}"))
}

pub fn parse_address(s: &str) -> Result<u16, String> {
    let value = parse_int(s)?;
    u16::try_from(value)
        .ok()
        .filter(|addr| monobus_hal::i2c::is_ten_bit(*addr))
        .ok_or_else(|| format!("address {s} is outside the 10-bit range"))
}

pub fn parse_byte(s: &str) -> Result<u8, String> {
    let value = parse_int(s)?;
    u8::try_from(value).map_err(|_| format!("{s} does not fit in a byte"))
}

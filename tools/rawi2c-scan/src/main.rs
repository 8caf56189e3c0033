//! Scan an i2c bus for responding targets.
//!
//! Probes each address in the scan range by binding it and attempting a
//! one-byte read, then prints the familiar 16-column presence grid.
//! Addresses that refuse the probe are shown as `--`.
//!
//! A read probe can upset write-only devices, the same caveat i2cdetect
//! carries; keep the range narrow when scanning a live system.

use anyhow::{bail, Context, Result};
use rawi2c::{BusTransport, I2cBus};
use tracing::debug;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    prelude::*,
};

// 0x00..=0x02 and 0x78..=0x7f are reserved by the i2c specification.
const FIRST_ADDRESS: u8 = 0x03;
const LAST_ADDRESS: u8 = 0x77;

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => bail!("usage: rawi2c-scan <bus-path> [first] [last]"),
    };
    let first = parse_address(args.next().as_deref(), FIRST_ADDRESS)?;
    let last = parse_address(args.next().as_deref(), LAST_ADDRESS)?;
    if first > last {
        bail!("empty scan range: 0x{first:02x} > 0x{last:02x}");
    }

    let mut bus = I2cBus::open(&path).with_context(|| format!("opening {path}"))?;

    let mut found = 0u32;
    println!("     0  1  2  3  4  5  6  7  8  9  a  b  c  d  e  f");
    for row in (0x00u8..=0x70).step_by(0x10) {
        print!("{row:02x}:");
        for col in 0..0x10u8 {
            let address = row + col;
            if address < first || address > last {
                print!("   ");
            } else if probe(&mut bus, address) {
                print!(" {address:02x}");
                found += 1;
            } else {
                print!(" --");
            }
        }
        println!();
    }
    println!("{found} device(s) responding");

    bus.close().context("closing bus")?;
    Ok(())
}

/// Whether a target at `address` answers a one-byte read.
fn probe(bus: &mut I2cBus, address: u8) -> bool {
    if let Err(err) = bus.select_address(address) {
        debug!("cannot bind 0x{address:02x}: {err}");
        return false;
    }
    match bus.read_byte() {
        Ok(_) => true,
        Err(err) => {
            debug!("no response at 0x{address:02x}: {err}");
            false
        }
    }
}

/// Parse a hex address argument, with or without a `0x` prefix.
fn parse_address(arg: Option<&str>, default: u8) -> Result<u8> {
    let Some(arg) = arg else {
        return Ok(default);
    };
    let digits = arg.trim_start_matches("0x");
    u8::from_str_radix(digits, 16).with_context(|| format!("invalid address {arg:?}"))
}

// Log to stderr, filtering according to environment variable RUST_LOG,
// so probe diagnostics never interleave with the grid on stdout.
fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var("RUST_LOG")
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

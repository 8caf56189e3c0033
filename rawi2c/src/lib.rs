//! Raw access to Linux i2c-dev bus devices.
//!
//! This crate is a thin, blocking wrapper over the kernel's i2c
//! character-device interface (`/dev/i2c-N`): open a bus node, bind a 7-bit
//! target address, and move raw bytes or big-endian 16-bit words. Every
//! operation maps to a single OS primitive (`open`, `ioctl`, `read`,
//! `write`, `close`); there is no buffering, no retry policy, and no
//! protocol layer above raw framing.
//!
//! The target address bound with [`BusTransport::select_address`] is sticky
//! per handle, the same way the kernel tracks it per open file description.
//! The `&mut self` API keeps a handle from being driven from two places at
//! once; distinct handles are fully independent.
//!
//! ```no_run
//! use rawi2c::{BusTransport, I2cBus};
//!
//! # fn main() -> rawi2c::Result<()> {
//! let mut bus = I2cBus::open("/dev/i2c-1")?;
//! bus.select_address(0x50)?;
//! bus.write_byte(0x10)?;
//! let word = bus.read_word()?;
//! # let _ = word;
//! # Ok(())
//! # }
//! ```
//!
//! On platforms without i2c character devices, every operation returns
//! [`Error::UnsupportedPlatform`] without attempting an OS call.

pub mod bus;
pub mod error;
pub mod mock;
pub mod transport;

pub use bus::I2cBus;
pub use error::{Error, Result};
pub use transport::BusTransport;

//! Bus transport seam and the exact-length byte/word transfers.
//!
//! [`BusTransport`] is the boundary between callers and the underlying
//! device: the real [`crate::I2cBus`] implements it against the kernel, and
//! [`crate::mock::Loopback`] implements it in memory for tests and
//! bring-up. The word transfers are big-endian on the wire regardless of
//! host byte order.

use crate::error::{Error, Result};

/// A byte-oriented bus transport with a sticky target address.
///
/// The address bound by [`select_address`](Self::select_address) applies to
/// every later transfer on the same transport until it is re-bound. Raw
/// transfers report the count actually moved, which may be short or zero;
/// the byte and word transfers demand exact counts and fail with
/// [`Error::ShortTransfer`] otherwise.
pub trait BusTransport {
    /// Bind `address` as the target for subsequent transfers.
    ///
    /// Addresses are 7-bit (0..=127). No range check happens here; an
    /// out-of-range value is passed through and its effect is OS-defined.
    fn select_address(&mut self, address: u8) -> Result<()>;

    /// Read up to `buf.len()` bytes from the selected target.
    ///
    /// Returns the count actually read. A short or zero count is a valid
    /// result, not an error; [`Error::Io`] means the transfer itself failed.
    fn read_raw(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Write `bytes` to the selected target.
    ///
    /// Returns the count actually written, which may be short.
    fn write_raw(&mut self, bytes: &[u8]) -> Result<usize>;

    /// Read exactly one byte from the selected target.
    fn read_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        let count = self.read_raw(&mut buf)?;
        exact(count, 1)?;
        Ok(buf[0])
    }

    /// Write exactly one byte to the selected target.
    fn write_byte(&mut self, value: u8) -> Result<()> {
        let count = self.write_raw(&[value])?;
        exact(count, 1)
    }

    /// Read exactly two bytes and combine them most significant first.
    fn read_word(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        let count = self.read_raw(&mut buf)?;
        exact(count, 2)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Write a 16-bit value as two bytes, most significant first.
    fn write_word(&mut self, value: u16) -> Result<()> {
        let count = self.write_raw(&value.to_be_bytes())?;
        exact(count, 2)
    }
}

fn exact(actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::ShortTransfer { expected, actual })
    }
}

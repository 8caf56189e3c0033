//! In-memory loopback transport.
//!
//! Stands in for a real bus device in tests and during bring-up on
//! machines without i2c hardware: everything written to the selected
//! target is queued and handed back to subsequent reads, byte order
//! preserved.

use std::collections::VecDeque;

use crate::error::Result;
use crate::transport::BusTransport;

/// Loopback transport: writes enqueue bytes, reads dequeue them.
///
/// The sticky-address model of the real bus is kept: the transport records
/// the last selected address, observable through
/// [`selected_address`](Self::selected_address). Like the kernel interface,
/// it does not range-check the address.
#[derive(Debug, Default)]
pub struct Loopback {
    selected: Option<u8>,
    queue: VecDeque<u8>,
}

impl Loopback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target address most recently bound, if any.
    pub fn selected_address(&self) -> Option<u8> {
        self.selected
    }

    /// Count of bytes written but not yet read back.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl BusTransport for Loopback {
    fn select_address(&mut self, address: u8) -> Result<()> {
        self.selected = Some(address);
        Ok(())
    }

    fn read_raw(&mut self, buf: &mut [u8]) -> Result<usize> {
        let count = buf.len().min(self.queue.len());
        for (slot, byte) in buf.iter_mut().zip(self.queue.drain(..count)) {
            *slot = byte;
        }
        Ok(count)
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<usize> {
        self.queue.extend(bytes);
        Ok(bytes.len())
    }
}

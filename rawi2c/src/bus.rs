//! The i2c-dev bus device handle.
//!
//! On Linux this wraps an open `/dev/i2c-N` character device; the target
//! address is bound with the `I2C_SLAVE` ioctl and raw transfers go through
//! plain blocking `read`/`write` on the file. On every other platform the
//! same type exists but deterministically reports
//! [`Error::UnsupportedPlatform`](crate::Error::UnsupportedPlatform).

#[cfg(target_os = "linux")]
pub use self::linux::I2cBus;
#[cfg(not(target_os = "linux"))]
pub use self::unsupported::I2cBus;

#[cfg(target_os = "linux")]
mod linux {
    use std::fs::{File, OpenOptions};
    use std::io::{Read, Write};
    use std::os::fd::{AsRawFd, IntoRawFd};
    use std::path::Path;

    use nix::libc::c_int;
    use tracing::trace;

    use crate::error::{Error, Result};
    use crate::transport::BusTransport;

    // From <linux/i2c-dev.h>: bind a 7-bit target address to the open
    // file description.
    const I2C_SLAVE: u16 = 0x0703;

    nix::ioctl_write_int_bad!(i2c_slave, I2C_SLAVE);

    /// An open i2c-dev bus device.
    ///
    /// Dropping the handle releases the underlying file descriptor; use
    /// [`close`](Self::close) instead when a close failure must be
    /// observable. The handle is not internally locked: the selected
    /// address is shared state on the descriptor, so a single `I2cBus`
    /// must not be driven from two threads at once.
    #[derive(Debug)]
    pub struct I2cBus {
        file: File,
    }

    impl I2cBus {
        /// Open the bus device node at `path` for read and write.
        ///
        /// The path is passed through untouched; by convention it is
        /// `/dev/i2c-<N>`. A target address must be bound with
        /// [`BusTransport::select_address`] before the first transfer.
        pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
            let path = path.as_ref();
            let file = OpenOptions::new()
                .read(true)
                .write(true)
                .open(path)
                .map_err(Error::Open)?;
            trace!("opened bus device {} (fd {})", path.display(), file.as_raw_fd());
            Ok(Self { file })
        }

        /// Release the handle, reporting a close failure to the caller.
        pub fn close(self) -> Result<()> {
            let fd = self.file.into_raw_fd();
            nix::unistd::close(fd).map_err(|errno| Error::Close(errno.into()))
        }
    }

    impl BusTransport for I2cBus {
        fn select_address(&mut self, address: u8) -> Result<()> {
            // SAFETY: the fd is owned by `self.file` and open; I2C_SLAVE
            // takes the address by value, no pointers are involved.
            unsafe { i2c_slave(self.file.as_raw_fd(), address as c_int) }.map_err(|errno| {
                Error::AddressSelect {
                    address,
                    source: errno.into(),
                }
            })?;
            trace!("bound target address 0x{address:02x}");
            Ok(())
        }

        fn read_raw(&mut self, buf: &mut [u8]) -> Result<usize> {
            self.file.read(buf).map_err(Error::Io)
        }

        fn write_raw(&mut self, bytes: &[u8]) -> Result<usize> {
            self.file.write(bytes).map_err(Error::Io)
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod unsupported {
    use std::path::Path;

    use crate::error::{Error, Result};
    use crate::transport::BusTransport;

    /// Stub bus handle for platforms without i2c character devices.
    ///
    /// Every operation fails with [`Error::UnsupportedPlatform`] without
    /// attempting an OS call; there is no partial emulation.
    #[derive(Debug)]
    pub struct I2cBus {
        _private: (),
    }

    impl I2cBus {
        /// Always fails: this platform has no i2c character devices.
        pub fn open<P: AsRef<Path>>(_path: P) -> Result<Self> {
            Err(Error::UnsupportedPlatform)
        }

        /// Always fails: this platform has no i2c character devices.
        pub fn close(self) -> Result<()> {
            Err(Error::UnsupportedPlatform)
        }
    }

    impl BusTransport for I2cBus {
        fn select_address(&mut self, _address: u8) -> Result<()> {
            Err(Error::UnsupportedPlatform)
        }

        fn read_raw(&mut self, _buf: &mut [u8]) -> Result<usize> {
            Err(Error::UnsupportedPlatform)
        }

        fn write_raw(&mut self, _bytes: &[u8]) -> Result<usize> {
            Err(Error::UnsupportedPlatform)
        }
    }
}

// These run against /dev/null: it opens read-write like a bus node, hits
// EOF on read, takes writes, and rejects the I2C_SLAVE ioctl, which is
// enough to exercise every error path without i2c hardware.
#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::transport::BusTransport;

    #[test]
    fn open_missing_node_fails() {
        match I2cBus::open("/dev/i2c-no-such-bus") {
            Err(Error::Open(_)) => {}
            other => panic!("expected Error::Open, got {other:?}"),
        }
    }

    #[test]
    fn handles_are_independent() {
        let mut survivor = I2cBus::open("/dev/null").expect("open");
        let doomed = I2cBus::open("/dev/null").expect("open");
        doomed.close().expect("close");

        // Closing one handle must not affect the other.
        assert_eq!(survivor.write_raw(&[0x55]).expect("write"), 1);
    }

    #[test]
    fn explicit_close_succeeds() {
        let bus = I2cBus::open("/dev/null").expect("open");
        bus.close().expect("close");
    }

    #[test]
    fn select_address_fails_on_non_i2c_node() {
        let mut bus = I2cBus::open("/dev/null").expect("open");
        match bus.select_address(0x50) {
            Err(Error::AddressSelect { address: 0x50, .. }) => {}
            other => panic!("expected Error::AddressSelect, got {other:?}"),
        }
    }

    #[test]
    fn read_byte_at_eof_is_short_transfer() {
        let mut bus = I2cBus::open("/dev/null").expect("open");
        match bus.read_byte() {
            Err(Error::ShortTransfer {
                expected: 1,
                actual: 0,
            }) => {}
            other => panic!("expected Error::ShortTransfer, got {other:?}"),
        }
    }

    #[test]
    fn raw_read_at_eof_is_zero_not_error() {
        let mut bus = I2cBus::open("/dev/null").expect("open");
        let mut buf = [0u8; 4];
        assert_eq!(bus.read_raw(&mut buf).expect("read"), 0);
    }
}

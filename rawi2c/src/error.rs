//! Error types for rawi2c.
//!
//! Each bus operation fails with exactly one variant, so the variant alone
//! tells a caller which call site failed. The OS-reported cause is attached
//! as the error source where one exists.

use thiserror::Error;

/// Failure kinds for bus transport operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The bus device node could not be opened.
    #[error("failed to open bus device: {0}")]
    Open(#[source] std::io::Error),

    /// The bus handle could not be released cleanly.
    #[error("failed to close bus device: {0}")]
    Close(#[source] std::io::Error),

    /// The target address could not be bound to the handle.
    #[error("failed to select target address 0x{address:02x}: {source}")]
    AddressSelect {
        address: u8,
        #[source]
        source: std::io::Error,
    },

    /// A raw transfer failed outright at the OS level.
    ///
    /// Short transfers are not this error; raw reads and writes report
    /// short counts as ordinary results.
    #[error("raw transfer failed: {0}")]
    Io(#[source] std::io::Error),

    /// A byte or word transfer moved a different count than required.
    ///
    /// Both "nothing arrived" and "wrong count arrived" collapse here;
    /// either way the exact-length contract was violated.
    #[error("short transfer: expected {expected} byte(s), moved {actual}")]
    ShortTransfer { expected: usize, actual: usize },

    /// This platform has no i2c character-device support.
    #[error("i2c character devices are not supported on this platform")]
    UnsupportedPlatform,
}

/// Convenience type alias for Results using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

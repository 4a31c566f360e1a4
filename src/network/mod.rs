//! A network abstraction layer for object storage clients
//!
//! This module provides the small set of traits the HTTP transport is written
//! against, together with the error type shared by every network layer. A
//! connection is anything that can read, write and close; the OS-backed TCP
//! implementation lives in [`socket`] behind the `std` feature, and embedded
//! targets can supply their own.

#![allow(missing_docs)]
#![deny(unsafe_code)]

/// Common error types for network operations
pub mod error;

/// HTTP protocol implementation
pub mod protocol;

/// OS-backed resolver, TCP socket and connector
#[cfg(feature = "std")]
pub mod socket;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Close, Connect, Connection, Read, Write};
}

// Core synchronous traits
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous connection
pub trait Connection: Read + Write + Close {}

/// A synchronous connector (client)
pub trait Connect {
    /// Associated connection type
    type Connection: Connection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Open a connection to a `host:port` remote
    fn connect(&mut self, remote: &str) -> Result<Self::Connection, Self::Error>;
}

/// ======================
/// Protocol-Specific Extensions
/// ======================

// TCP
pub trait Tcp: Connection {}

// HTTP
pub trait Http: Connection {}

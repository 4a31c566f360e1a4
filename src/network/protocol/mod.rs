//! # Protocol Layer
//!
//! Wire protocols spoken over a [`Connection`](crate::network::Connection).
//! Object storage services are plain HTTP/1.1 underneath, so HTTP is the only
//! protocol this crate ships; it follows the same pattern any further protocol
//! would:
//!
//! 1. Create a connection using your transport layer
//! 2. Wrap it with the protocol type
//! 3. Use protocol-specific methods for communication
//!
//! All protocol code in this module is connection agnostic, `no_std`
//! compatible and works with fixed-size buffers.

/// HTTP/1.1 header model and client transport.
pub mod http;

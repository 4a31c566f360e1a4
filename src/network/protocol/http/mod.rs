//! HTTP/1.1 client protocol implementation.
//!
//! This module provides the line-oriented HTTP plumbing an object storage
//! client sits on: an ordered header model that serializes to and parses from
//! the wire text form, and a transport that moves request/response heads and
//! bodies over any [`Connection`](crate::network::Connection).
//!
//! # Features
//!
//! - HTTP/1.1 request line and header serialization
//! - Lenient line-oriented response parsing (degenerate status lines from
//!   real servers never crash the client)
//! - Strict `Content-Length` body framing; chunked transfer is out of scope
//! - Synchronous request/response model with fixed-size buffers
//!
//! # Usage
//!
//! The caller builds a [`Head`], hands it to a [`Transport`], then streams
//! the body either from a flat byte slice or through the
//! [`stream`](crate::stream) interface.
//!
//! ```rust,no_run
//! use liboss::network::protocol::http::{Head, Transport};
//! # use liboss::network::Connection;
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl liboss::network::Read for MockConnection {
//! #     type Error = ();
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl liboss::network::Write for MockConnection {
//! #     type Error = ();
//! #     fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> { Ok(0) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl liboss::network::Close for MockConnection {
//! #     type Error = ();
//! #     fn close(self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//!
//! let connection = MockConnection;
//! let mut transport = Transport::new(connection);
//!
//! let mut head = Head::new();
//! head.set_verb("GET").unwrap();
//! head.set_target("/bucket/object").unwrap();
//! head.add_host("oss.example.com").unwrap();
//!
//! // transport.put_head(&head)?;
//! // let response = transport.get_head()?;
//! // let len = response.content_length();
//! ```

/// Ordered header fields plus request/response metadata.
pub mod header;

/// Request/response head and body I/O over a connection.
pub mod transport;

pub use header::{Field, Head};
pub use transport::Transport;

/// Protocol version written on every request line.
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Line terminator used throughout the header block.
pub const CRLF: &str = "\r\n";

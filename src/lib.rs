//! # liboss - Rust object storage client stack
//!
//! A minimal Rust client stack for talking to S3/OSS-compatible cloud object
//! storage over plain HTTP/1.1. The crate covers the transport floor of such a
//! client - name resolution, blocking TCP connections, line-oriented HTTP
//! header construction and parsing, and streamed request/response bodies -
//! while signing, listing semantics and command surfaces stay with the caller.
//!
//! ## Features
//!
//! ### Network Core
//! - **Connection traits**: protocol code is written against small
//!   [`Read`](network::Read)/[`Write`](network::Write)/[`Close`](network::Close)
//!   capabilities, so it runs over any byte pipe
//! - **HTTP/1.1 client transport**: request line + header serialization,
//!   line-oriented response parsing, strict `Content-Length` body framing
//! - **Blocking TCP socket and resolver** (`std` feature): ordered candidate
//!   resolution, idempotent teardown, optional timeouts
//!
//! ### Body Streaming
//! - [`Source`](stream::Source)/[`Sink`](stream::Sink) capability contracts
//!   decouple body transfer from any particular buffer type
//! - In-memory sink for immediate parsing by upper layers
//!
//! ### Time
//! - Pure RFC 1123 GMT formatting for the `Date` request header, pluggable
//!   through the [`Clock`](time::Clock) trait
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! liboss = "0.1.0"
//! ```
//!
//! ### Sending a request head
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
//! head.set_target("/").unwrap();
//! head.add_host("oss.example.com").unwrap();
//! head.add_accept("*/*").unwrap();
//!
//! // transport.put_head(&head)?;
//! // let response = transport.get_head()?;
//! ```
//!
//! ### Connecting over TCP (`std`)
//!
//! ```rust,no_run
//! # #[cfg(feature = "std")] {
//! use liboss::network::Connect;
//! use liboss::network::socket::TcpConnector;
//! use liboss::network::protocol::http::Transport;
//!
//! let mut connector = TcpConnector::new();
//! let socket = connector.connect("oss.example.com:80").unwrap();
//! let mut transport = Transport::new(socket);
//! # }
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Hosted platforms with OS sockets (the default `std` feature)
//! - Embedded targets supplying their own [`Connection`](network::Connection)
//!   implementation (`default-features = false`)
//!
//! ## Optional Features
//!
//! - `std`: OS-backed socket, resolver and system clock (default: enabled)
//! - `defmt`: defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Network layer: connection traits, error types, the HTTP protocol
/// implementation and the OS socket backend.
pub mod network;

/// Byte stream interface used for request and response bodies.
///
/// Decouples body transfer from any concrete buffer type; the transport only
/// borrows a stream for the duration of one body operation.
pub mod stream;

/// Wall-clock access and HTTP `Date` header formatting.
pub mod time;

//! HTTP head and body I/O over a connection.
//!
//! [`Transport`] composes a [`Connection`] with the header model: it
//! serializes a request [`Head`] onto the wire, reads a response head back
//! line by line, and moves bodies either through flat buffers or the
//! [`stream`](crate::stream) interface. The transport owns the connection
//! and borrows body streams for the duration of one operation; it never
//! retries on its own.

use crate::network::error::Error;
use crate::network::{Connection, Read, Write};
use crate::stream::{Sink, Source};
use heapless::Vec;

use super::header::Head;
use super::{CRLF, HTTP_VERSION};

/// Maximum length of one response header line, terminator excluded.
pub const MAX_LINE_LEN: usize = 512;

/// Chunk size for body transfers.
const BODY_CHUNK: usize = 256;

/// Synchronous HTTP client transport over any [`Connection`].
///
/// One logical flow of control owns the transport for the duration of a
/// request/response exchange; the connection can be reused for further
/// exchanges afterwards.
#[derive(Debug)]
pub struct Transport<C: Connection> {
    conn: C,
}

impl<C: Connection> Transport<C> {
    /// Wrap a connection.
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    /// Access the underlying connection.
    pub fn connection_mut(&mut self) -> &mut C {
        &mut self.conn
    }

    /// Unwrap the transport, returning the connection.
    pub fn into_inner(self) -> C {
        self.conn
    }

    /// Serialize a request head onto the connection.
    ///
    /// Writes `VERB target HTTP/1.1`, every field as `Key: Value` honoring
    /// its colon-space flag, and the terminating blank line, each line
    /// CRLF-terminated. Fails if the underlying send fails.
    pub fn put_head(&mut self, head: &Head) -> Result<(), Error> {
        self.send_all(head.verb().as_bytes())?;
        self.send_all(b" ")?;
        self.send_all(head.target().as_bytes())?;
        self.send_all(b" ")?;
        self.send_all(HTTP_VERSION.as_bytes())?;
        self.send_all(CRLF.as_bytes())?;

        for field in head.iter() {
            let sep: &[u8] = if field.space() { b": " } else { b":" };
            self.send_all(field.key().as_bytes())?;
            self.send_all(sep)?;
            self.send_all(field.value().as_bytes())?;
            self.send_all(CRLF.as_bytes())?;
        }

        self.send_all(CRLF.as_bytes())?;
        self.conn.flush().map_err(|_| Error::WriteError)
    }

    /// Read a response head from the connection.
    ///
    /// Reads line by line until the blank line: the first line populates
    /// version/status/reason via the status-line parser, each further
    /// non-empty line is parsed as a header field. A line without a colon is
    /// skipped rather than rejected; upstream servers occasionally emit
    /// non-conformant lines. Fails with [`Error::ProtocolError`] if the
    /// connection closes before the blank line.
    pub fn get_head(&mut self) -> Result<Head, Error> {
        let mut head = Head::new();
        let mut line: Vec<u8, MAX_LINE_LEN> = Vec::new();

        if !self.get_line(&mut line, false)? {
            return Err(Error::ProtocolError);
        }
        let status = core::str::from_utf8(&line).map_err(|_| Error::ProtocolError)?;
        head.set_status_line(status)?;

        loop {
            if !self.get_line(&mut line, false)? {
                return Err(Error::ProtocolError);
            }
            if line.is_empty() {
                break;
            }
            let text = core::str::from_utf8(&line).map_err(|_| Error::ProtocolError)?;
            match head.add_line(text) {
                Ok(()) => {}
                Err(Error::HeaderParseError) => {} // junk line, skip
                Err(e) => return Err(e),
            }
        }

        Ok(head)
    }

    /// Read one line from the connection.
    ///
    /// Accumulates bytes into `line` (cleared first) until a CRLF is found;
    /// a bare LF is tolerated. The terminator is kept or stripped per
    /// `keep_terminator`. Returns `Ok(true)` when a terminator was seen and
    /// `Ok(false)` when the connection closed first, with whatever was
    /// accumulated left in `line` - end of stream is signalled, not thrown.
    pub fn get_line<const N: usize>(
        &mut self,
        line: &mut Vec<u8, N>,
        keep_terminator: bool,
    ) -> Result<bool, Error> {
        line.clear();
        let mut byte = [0u8; 1];
        loop {
            let n = self.conn.read(&mut byte).map_err(|_| Error::ReadError)?;
            if n == 0 {
                return Ok(false);
            }
            if byte[0] == b'\n' {
                if keep_terminator {
                    line.push(b'\n').map_err(|_| Error::BufferFull)?;
                } else if line.last() == Some(&b'\r') {
                    line.pop();
                }
                return Ok(true);
            }
            line.push(byte[0]).map_err(|_| Error::BufferFull)?;
        }
    }

    /// Write raw body bytes.
    pub fn put_body(&mut self, data: &[u8]) -> Result<(), Error> {
        self.send_all(data)?;
        self.conn.flush().map_err(|_| Error::WriteError)
    }

    /// Drain a byte source onto the connection, returning the bytes sent.
    ///
    /// The source's declared size is consulted as a cross-check: when it is
    /// known and the drained byte count disagrees, the body on the wire does
    /// not match its framing and the call fails with
    /// [`Error::ProtocolError`].
    pub fn put_body_from<S: Source>(&mut self, source: &mut S) -> Result<usize, Error> {
        let declared = source.size();
        let mut chunk = [0u8; BODY_CHUNK];
        let mut total = 0;
        loop {
            let n = source.read_some(&mut chunk);
            if n == 0 {
                break;
            }
            self.send_all(&chunk[..n])?;
            total += n;
        }
        self.conn.flush().map_err(|_| Error::WriteError)?;
        if let Some(declared) = declared {
            if declared != total {
                return Err(Error::ProtocolError);
            }
        }
        Ok(total)
    }

    /// Read body bytes into `buf`, up to its length.
    ///
    /// Returns the byte count actually read; fewer than `buf.len()` only at
    /// connection end.
    pub fn get_body(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let mut total = 0;
        while total < buf.len() {
            let n = self
                .conn
                .read(&mut buf[total..])
                .map_err(|_| Error::ReadError)?;
            if n == 0 {
                break;
            }
            total += n;
        }
        Ok(total)
    }

    /// Read the response body into a byte sink, returning the bytes read.
    ///
    /// With `len` known (from [`Head::content_length`]) exactly that many
    /// bytes are read and a premature close fails with
    /// [`Error::ConnectionClosed`]; without it the body runs to end of
    /// stream. A sink that stops accepting while bytes remain fails with
    /// [`Error::BufferFull`].
    pub fn get_body_into<S: Sink>(
        &mut self,
        len: Option<usize>,
        sink: &mut S,
    ) -> Result<usize, Error> {
        let mut chunk = [0u8; BODY_CHUNK];
        let mut total = 0;
        loop {
            let want = match len {
                Some(len) => {
                    if total == len {
                        break;
                    }
                    core::cmp::min(BODY_CHUNK, len - total)
                }
                None => BODY_CHUNK,
            };
            let n = self
                .conn
                .read(&mut chunk[..want])
                .map_err(|_| Error::ReadError)?;
            if n == 0 {
                if len.is_some() {
                    return Err(Error::ConnectionClosed);
                }
                break;
            }
            let mut offset = 0;
            while offset < n {
                let accepted = sink.write_some(&chunk[offset..n]);
                if accepted == 0 {
                    return Err(Error::BufferFull);
                }
                offset += accepted;
            }
            total += n;
        }
        Ok(total)
    }

    /// Write all of `data`, looping over partial writes.
    fn send_all(&mut self, mut data: &[u8]) -> Result<(), Error> {
        while !data.is_empty() {
            let n = self.conn.write(data).map_err(|_| Error::WriteError)?;
            if n == 0 {
                return Err(Error::WriteError);
            }
            data = &data[n..];
        }
        Ok(())
    }
}

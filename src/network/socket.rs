//! OS-backed blocking networking.
//!
//! This module hosts the concrete transport for hosted platforms: an ordered
//! name [`Resolver`], a blocking [`TcpSocket`] implementing the core
//! connection traits, and a [`TcpConnector`] that walks resolver candidates
//! in order. It is the only part of the crate that touches `std`; platform
//! differences end at this boundary, selected at build time by the `std`
//! feature rather than by runtime branching.

use crate::network::error::Error;
use crate::network::{Close, Connect, Connection, Read, Tcp, Write};
use std::io;
use std::io::{Read as IoRead, Write as IoWrite};
use std::net::{IpAddr, Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Translate a service name into a port number.
///
/// Decimal port strings parse directly; the only service names this stack
/// ever dials are `http` and `https`.
fn service_port(service: &str) -> Option<u16> {
    match service {
        "http" => Some(80),
        "https" => Some(443),
        _ => service.parse().ok(),
    }
}

/// Map an I/O error onto the portable error taxonomy.
fn map_io(err: &io::Error, fallback: Error) -> Error {
    match err.kind() {
        io::ErrorKind::ConnectionRefused => Error::ConnectionRefused,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => Error::Timeout,
        io::ErrorKind::AddrNotAvailable | io::ErrorKind::InvalidInput => Error::InvalidAddress,
        io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::BrokenPipe
        | io::ErrorKind::UnexpectedEof => Error::ConnectionClosed,
        _ => fallback,
    }
}

/// Ordered name resolution results.
///
/// One lookup per instance lifetime is the common pattern: resolve, walk the
/// candidates, drop. `resolve` replaces any previous result and [`clear`]
/// (also implied by drop) is idempotent.
///
/// Candidate access is zero-based: index 0 is the first address the OS
/// returned. A literal IP resolves to exactly one candidate equal to the
/// input.
///
/// [`clear`]: Resolver::clear
#[derive(Debug, Default)]
pub struct Resolver {
    addrs: Vec<IpAddr>,
}

impl Resolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `host`/`service`, replacing any previous result.
    ///
    /// `service` is a decimal port or one of `http`/`https`. Fails with
    /// [`Error::ResolveError`] when the host is unknown, the service is
    /// invalid, or the lookup produces no addresses.
    pub fn resolve(&mut self, host: &str, service: &str) -> Result<(), Error> {
        self.clear();
        let port = service_port(service).ok_or(Error::ResolveError)?;
        let candidates = (host, port)
            .to_socket_addrs()
            .map_err(|_| Error::ResolveError)?;
        self.addrs.extend(candidates.map(|addr| addr.ip()));
        if self.addrs.is_empty() {
            return Err(Error::ResolveError);
        }
        Ok(())
    }

    /// Number of candidate addresses.
    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    /// Whether the last lookup produced no candidates.
    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    /// The candidate at `index`, zero-based.
    pub fn get(&self, index: usize) -> Option<IpAddr> {
        self.addrs.get(index).copied()
    }

    /// Release the lookup results. Idempotent.
    pub fn clear(&mut self) {
        self.addrs.clear();
    }
}

impl core::ops::Index<usize> for Resolver {
    type Output = IpAddr;

    fn index(&self, index: usize) -> &IpAddr {
        &self.addrs[index]
    }
}

/// A blocking TCP connection.
///
/// Owns at most one OS socket; the socket is alive exactly while the inner
/// stream is present. Teardown is idempotent and infallible - close errors
/// are swallowed, and dropping a live socket disconnects as a best effort
/// that never panics.
#[derive(Debug, Default)]
pub struct TcpSocket {
    stream: Option<TcpStream>,
}

impl TcpSocket {
    /// Create a disconnected socket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a blocking TCP connection to a literal IP and port.
    ///
    /// An already-live socket is disconnected first. Fails with
    /// [`Error::InvalidAddress`] when `ip` is not a literal address, and
    /// with [`Error::ConnectionRefused`] or [`Error::Timeout`] per the OS
    /// failure cause.
    pub fn connect(&mut self, ip: &str, port: u16) -> Result<(), Error> {
        self.disconnect();
        let ip: IpAddr = ip.parse().map_err(|_| Error::InvalidAddress)?;
        let stream = TcpStream::connect(SocketAddr::new(ip, port))
            .map_err(|e| map_io(&e, Error::ConnectionRefused))?;
        self.stream = Some(stream);
        Ok(())
    }

    /// Like [`connect`](TcpSocket::connect), giving up after `timeout`.
    pub fn connect_timeout(&mut self, ip: &str, port: u16, timeout: Duration) -> Result<(), Error> {
        self.disconnect();
        let ip: IpAddr = ip.parse().map_err(|_| Error::InvalidAddress)?;
        let stream = TcpStream::connect_timeout(&SocketAddr::new(ip, port), timeout)
            .map_err(|e| map_io(&e, Error::ConnectionRefused))?;
        self.stream = Some(stream);
        Ok(())
    }

    /// Apply a read and write timeout, or remove both with `None`.
    ///
    /// Without a timeout every operation blocks until the peer acts; a
    /// stalled peer stalls the caller indefinitely. A zero duration is
    /// rejected with [`Error::Timeout`].
    pub fn set_timeout(&mut self, timeout: Option<Duration>) -> Result<(), Error> {
        let stream = self.stream.as_ref().ok_or(Error::NotOpen)?;
        if timeout.is_some_and(|t| t.is_zero()) {
            return Err(Error::Timeout);
        }
        stream
            .set_read_timeout(timeout)
            .and_then(|()| stream.set_write_timeout(timeout))
            .map_err(|e| map_io(&e, Error::Timeout))
    }

    /// Whether the socket is connected.
    pub fn alive(&self) -> bool {
        self.stream.is_some()
    }

    /// Close the connection if open. Idempotent; never fails.
    pub fn disconnect(&mut self) {
        if let Some(stream) = self.stream.take() {
            // Cleanup must always complete; a failed shutdown is not
            // actionable here.
            let _ = stream.shutdown(Shutdown::Both);
        }
    }

    /// Write all of `data`, looping over partial writes.
    ///
    /// `Interrupted` writes are retried. Any other failure means the
    /// connection became unusable: the socket is torn down before the error
    /// is returned.
    pub fn send(&mut self, data: &[u8]) -> Result<(), Error> {
        let mut written = 0;
        while written < data.len() {
            let result = match self.stream.as_mut() {
                Some(stream) => stream.write(&data[written..]),
                None => return Err(Error::NotOpen),
            };
            match result {
                Ok(0) => {
                    self.disconnect();
                    return Err(Error::WriteError);
                }
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    let err = map_io(&e, Error::WriteError);
                    self.disconnect();
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Read up to `buf.len()` bytes in one call.
    ///
    /// Returns the count actually read; `Ok(0)` means the peer closed the
    /// connection, which is not an error by itself.
    pub fn recv(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        loop {
            let result = match self.stream.as_mut() {
                Some(stream) => stream.read(buf),
                None => return Err(Error::NotOpen),
            };
            match result {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(map_io(&e, Error::ReadError)),
            }
        }
    }
}

impl Drop for TcpSocket {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl Read for TcpSocket {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.recv(buf)
    }
}

impl Write for TcpSocket {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.send(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        let stream = self.stream.as_mut().ok_or(Error::NotOpen)?;
        stream.flush().map_err(|e| map_io(&e, Error::WriteError))
    }
}

impl Close for TcpSocket {
    type Error = Error;

    fn close(mut self) -> Result<(), Self::Error> {
        self.disconnect();
        Ok(())
    }
}

impl Connection for TcpSocket {}
impl Tcp for TcpSocket {}

/// Connects a [`TcpSocket`] to a `host:port` remote.
///
/// Resolves the host and tries each candidate address in order, returning
/// the first socket that connects or the last failure. This is the
/// composition seam between name resolution and the HTTP transport: the
/// transport holds a connection, it never is one.
#[derive(Debug, Default)]
pub struct TcpConnector {
    timeout: Option<Duration>,
}

impl TcpConnector {
    /// Create a connector without timeouts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a connector that bounds connect, read and write with `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

impl Connect for TcpConnector {
    type Connection = TcpSocket;
    type Error = Error;

    fn connect(&mut self, remote: &str) -> Result<TcpSocket, Error> {
        let (host, service) = remote.rsplit_once(':').ok_or(Error::InvalidAddress)?;
        let port = service_port(service).ok_or(Error::ResolveError)?;

        let mut resolver = Resolver::new();
        resolver.resolve(host, service)?;

        let mut last = Error::ResolveError;
        for index in 0..resolver.len() {
            let ip = resolver[index].to_string();
            let mut socket = TcpSocket::new();
            let connected = match self.timeout {
                Some(timeout) => socket.connect_timeout(&ip, port, timeout),
                None => socket.connect(&ip, port),
            };
            match connected {
                Ok(()) => {
                    if self.timeout.is_some() {
                        socket.set_timeout(self.timeout)?;
                    }
                    return Ok(socket);
                }
                Err(e) => last = e,
            }
        }
        Err(last)
    }
}

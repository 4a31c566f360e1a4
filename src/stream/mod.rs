//! Byte stream capability traits for request and response bodies.
//!
//! Body transfer is decoupled from any particular buffer type through two
//! one-directional contracts: a [`Source`] produces bytes for an outgoing
//! request body, a [`Sink`] accepts bytes of an incoming response body. The
//! HTTP transport borrows a stream for the duration of one body operation;
//! ownership stays with the caller.
//!
//! [`SliceSource`] and [`MemorySink`] are the in-memory implementations most
//! callers need: a borrowed payload on the way out, a flat byte range ready
//! for parsing on the way in. File-backed or chained implementations are
//! ordinary trait impls on the caller's side.

/// A producer of body bytes.
pub trait Source {
    /// Total bytes this source will produce, if known up front.
    fn size(&self) -> Option<usize>;

    /// Read up to `buf.len()` bytes into `buf`, returning the count
    /// produced. Partial reads are legal; `0` signals exhaustion.
    fn read_some(&mut self, buf: &mut [u8]) -> usize;
}

/// A consumer of body bytes.
pub trait Sink {
    /// Bytes accepted so far.
    fn size(&self) -> usize;

    /// Accept up to `buf.len()` bytes, returning the count taken. Partial
    /// acceptance is legal; `0` means no more bytes can be accepted.
    fn write_some(&mut self, buf: &[u8]) -> usize;
}

/// A [`Source`] over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Wrap a payload.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl Source for SliceSource<'_> {
    fn size(&self) -> Option<usize> {
        Some(self.data.len())
    }

    fn read_some(&mut self, buf: &mut [u8]) -> usize {
        let n = core::cmp::min(buf.len(), self.remaining());
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        n
    }
}

/// A [`Sink`] accumulating bytes in a fixed-capacity buffer.
///
/// Collects an entire response body and exposes it as a flat byte range for
/// immediate parsing by upper layers. Once the capacity `N` is reached the
/// sink stops accepting, which the transport reports as an overflow.
#[derive(Debug, Default)]
pub struct MemorySink<const N: usize> {
    buf: heapless::Vec<u8, N>,
}

impl<const N: usize> MemorySink<N> {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self {
            buf: heapless::Vec::new(),
        }
    }

    /// The bytes accumulated so far.
    pub fn data(&self) -> &[u8] {
        &self.buf
    }

    /// Discard the accumulated bytes.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl<const N: usize> Sink for MemorySink<N> {
    fn size(&self) -> usize {
        self.buf.len()
    }

    fn write_some(&mut self, buf: &[u8]) -> usize {
        let n = core::cmp::min(buf.len(), N - self.buf.len());
        // n is clamped to the remaining capacity
        let _ = self.buf.extend_from_slice(&buf[..n]);
        n
    }
}

use criterion::{Criterion, Throughput};
use liboss::network::protocol::http::{Head, Transport};
use liboss::network::{Close, Connection, Read, Write};
use liboss::stream::MemorySink;

const RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\n\
Server: bench\r\n\
Date: Thu, 01 Jan 1970 00:00:00 GMT\r\n\
Content-Length: 0\r\n\
Connection: keep-alive\r\n\r\n";

const BODY_LEN: usize = 4096;

/// Endless connection: reads replay `data`, writes are discarded.
struct ReplayConnection {
    data: &'static [u8],
    pos: usize,
}

impl ReplayConnection {
    fn new(data: &'static [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl Read for ReplayConnection {
    type Error = liboss::network::error::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.pos == self.data.len() {
            self.pos = 0;
        }
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

impl Write for ReplayConnection {
    type Error = liboss::network::error::Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for ReplayConnection {
    type Error = liboss::network::error::Error;

    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Connection for ReplayConnection {}

fn request_head() -> Head {
    let mut head = Head::new();
    head.set_verb("GET").unwrap();
    head.set_target("/bucket/object").unwrap();
    head.add_host("oss.example.com").unwrap();
    head.add_user_agent("liboss-bench/0.1").unwrap();
    head.add_accept("*/*").unwrap();
    head.add_date("Thu, 01 Jan 1970 00:00:00 GMT").unwrap();
    head
}

pub fn bench_put_head(c: &mut Criterion) {
    let head = request_head();
    let mut transport = Transport::new(ReplayConnection::new(b""));

    let mut group = c.benchmark_group("put_head");
    group.bench_function("put_head", |b| {
        b.iter(|| transport.put_head(&head).unwrap())
    });
    group.finish();
}

pub fn bench_get_head(c: &mut Criterion) {
    let mut transport = Transport::new(ReplayConnection::new(RESPONSE));

    let mut group = c.benchmark_group("get_head");
    group.throughput(Throughput::Bytes(RESPONSE.len() as u64));
    group.bench_function("get_head", |b| {
        b.iter(|| transport.get_head().unwrap())
    });
    group.finish();
}

pub fn bench_get_body(c: &mut Criterion) {
    static BODY: [u8; BODY_LEN] = [0x5a; BODY_LEN];
    let mut transport = Transport::new(ReplayConnection::new(&BODY));
    let mut sink: MemorySink<BODY_LEN> = MemorySink::new();

    let mut group = c.benchmark_group("get_body");
    group.throughput(Throughput::Bytes(BODY_LEN as u64));
    group.bench_function("get_body_into", |b| {
        b.iter(|| {
            sink.clear();
            transport.get_body_into(Some(BODY_LEN), &mut sink).unwrap()
        })
    });
    group.finish();
}

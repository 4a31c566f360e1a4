use crate::mock::MockConnection;
use heapless::Vec;
use liboss::network::error::Error;
use liboss::network::protocol::http::{Head, Transport};
use liboss::stream::{MemorySink, SliceSource, Source};

#[test]
fn put_head_serializes_request_line_fields_and_blank_line() {
    let mut head = Head::new();
    head.set_verb("GET").unwrap();
    head.set_target("/bucket/key").unwrap();
    head.add_host("oss.example.com").unwrap();
    head.add_field("X-Raw", "v", false).unwrap();

    let mut transport = Transport::new(MockConnection::new(b""));
    transport.put_head(&head).unwrap();

    assert_eq!(
        transport.connection_mut().written_data(),
        b"GET /bucket/key HTTP/1.1\r\nHost: oss.example.com\r\nX-Raw:v\r\n\r\n".as_slice()
    );
}

#[test]
fn head_round_trip_preserves_fields_and_order() {
    // client side: serialize the request head
    let mut request = Head::new();
    request.set_verb("GET").unwrap();
    request.set_target("/").unwrap();
    request.add_host("x").unwrap();
    request.add_accept("*/*").unwrap();

    let mut transport = Transport::new(MockConnection::new(b""));
    transport.put_head(&request).unwrap();
    let written = transport.connection_mut().written_data();
    assert!(written.starts_with(b"GET / HTTP/1.1\r\n"));

    // peer side: the same field lines come back on a response and parse to
    // equal keys/values in the original order
    let mut peer = Transport::new(MockConnection::new(
        b"HTTP/1.1 200 OK\r\nHost: x\r\nAccept: */*\r\n\r\n",
    ));
    let response = peer.get_head().unwrap();

    assert_eq!(response.version(), "HTTP/1.1");
    assert_eq!(response.status(), "200");
    assert_eq!(response.reason(), "OK");
    assert_eq!(response.len(), request.len());
    for (got, sent) in response.iter().zip(request.iter()) {
        assert_eq!(got.key(), sent.key());
        assert_eq!(got.value(), sent.value());
    }
}

#[test]
fn get_head_reads_until_blank_line() {
    let mut transport = Transport::new(MockConnection::new(
        b"HTTP/1.1 204 No Content\r\nServer: test\r\nX-Id: 7\r\n\r\nleftover",
    ));
    let head = transport.get_head().unwrap();

    assert_eq!(head.status(), "204");
    assert_eq!(head.reason(), "No Content");
    assert_eq!(head.len(), 2);
    assert_eq!(head.get("Server"), Some("test"));
    assert_eq!(head.get("X-Id"), Some("7"));

    // the body is still on the connection
    let mut body = [0u8; 16];
    let n = transport.get_body(&mut body).unwrap();
    assert_eq!(&body[..n], b"leftover");
}

#[test]
fn get_head_fails_when_connection_closes_before_blank_line() {
    let mut transport = Transport::new(MockConnection::new(b"HTTP/1.1 200 OK\r\nHost: x\r\n"));
    assert_eq!(transport.get_head(), Err(Error::ProtocolError));
}

#[test]
fn get_head_on_closed_connection_fails() {
    let mut transport = Transport::new(MockConnection::new(b""));
    assert_eq!(transport.get_head(), Err(Error::ProtocolError));
}

#[test]
fn get_head_skips_header_lines_without_colon() {
    let mut transport = Transport::new(MockConnection::new(
        b"HTTP/1.1 200 OK\r\ngarbage line\r\nHost: x\r\n\r\n",
    ));
    let head = transport.get_head().unwrap();
    assert_eq!(head.len(), 1);
    assert_eq!(head.get("Host"), Some("x"));
}

#[test]
fn get_line_strips_crlf_by_default() {
    let mut transport = Transport::new(MockConnection::new(b"first\r\nsecond\n"));
    let mut line: Vec<u8, 64> = Vec::new();

    assert!(transport.get_line(&mut line, false).unwrap());
    assert_eq!(&line[..], b"first");

    // bare LF is tolerated
    assert!(transport.get_line(&mut line, false).unwrap());
    assert_eq!(&line[..], b"second");
}

#[test]
fn get_line_can_keep_the_terminator() {
    let mut transport = Transport::new(MockConnection::new(b"line\r\n"));
    let mut line: Vec<u8, 64> = Vec::new();

    assert!(transport.get_line(&mut line, true).unwrap());
    assert_eq!(&line[..], b"line\r\n");
}

#[test]
fn get_line_returns_partial_bytes_on_close() {
    let mut transport = Transport::new(MockConnection::new(b"partial"));
    let mut line: Vec<u8, 64> = Vec::new();

    // no terminator ever arrives: end of stream is signalled, not thrown
    assert!(!transport.get_line(&mut line, false).unwrap());
    assert_eq!(&line[..], b"partial");

    // and the next call reports an empty end of stream
    assert!(!transport.get_line(&mut line, false).unwrap());
    assert!(line.is_empty());
}

#[test]
fn get_body_reads_up_to_buffer_len() {
    let mut transport = Transport::new(MockConnection::with_chunk_size(b"0123456789", 3));
    let mut buf = [0u8; 6];

    assert_eq!(transport.get_body(&mut buf).unwrap(), 6);
    assert_eq!(&buf, b"012345");

    // fewer bytes only at connection end
    let mut rest = [0u8; 6];
    assert_eq!(transport.get_body(&mut rest).unwrap(), 4);
    assert_eq!(&rest[..4], b"6789");
}

#[test]
fn get_body_into_honors_content_length() {
    let mut transport = Transport::new(MockConnection::with_chunk_size(b"hello worldXXX", 4));
    let mut sink: MemorySink<64> = MemorySink::new();

    let n = transport.get_body_into(Some(11), &mut sink).unwrap();
    assert_eq!(n, 11);
    assert_eq!(sink.data(), b"hello world");
}

#[test]
fn get_body_into_reads_to_end_without_length() {
    let mut transport = Transport::new(MockConnection::with_chunk_size(b"hello world", 4));
    let mut sink: MemorySink<64> = MemorySink::new();

    let n = transport.get_body_into(None, &mut sink).unwrap();
    assert_eq!(n, 11);
    assert_eq!(sink.data(), b"hello world");
}

#[test]
fn get_body_into_fails_on_premature_close() {
    let mut transport = Transport::new(MockConnection::new(b"short"));
    let mut sink: MemorySink<64> = MemorySink::new();

    assert_eq!(
        transport.get_body_into(Some(20), &mut sink),
        Err(Error::ConnectionClosed)
    );
}

#[test]
fn get_body_into_reports_sink_overflow() {
    let mut transport = Transport::new(MockConnection::new(b"0123456789"));
    let mut sink: MemorySink<4> = MemorySink::new();

    assert_eq!(
        transport.get_body_into(None, &mut sink),
        Err(Error::BufferFull)
    );
}

#[test]
fn put_body_writes_raw_bytes() {
    let mut transport = Transport::new(MockConnection::new(b""));
    transport.put_body(b"payload").unwrap();
    assert_eq!(transport.connection_mut().written_data(), b"payload");
}

#[test]
fn put_body_from_drains_a_source() {
    let payload = [7u8; 1000];
    let mut source = SliceSource::new(&payload);

    let mut transport = Transport::new(MockConnection::new(b""));
    let n = transport.put_body_from(&mut source).unwrap();

    assert_eq!(n, 1000);
    assert_eq!(transport.connection_mut().written_data(), &payload[..]);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn put_body_from_rejects_a_lying_size() {
    // declares more bytes than it produces
    struct LyingSource {
        left: usize,
    }

    impl Source for LyingSource {
        fn size(&self) -> Option<usize> {
            Some(100)
        }

        fn read_some(&mut self, buf: &mut [u8]) -> usize {
            let n = buf.len().min(self.left);
            buf[..n].fill(b'x');
            self.left -= n;
            n
        }
    }

    let mut transport = Transport::new(MockConnection::new(b""));
    let mut source = LyingSource { left: 10 };
    assert_eq!(
        transport.put_body_from(&mut source),
        Err(Error::ProtocolError)
    );
}

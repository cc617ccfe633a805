//! One-shot HTTP stub server for exercising the client without a network.
//!
//! Shared by the client unit tests and the CLI integration tests.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

pub(crate) struct StubResponse {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

impl StubResponse {
    pub(crate) fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub(crate) fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.as_bytes().to_vec(),
        }
    }

    /// Raw body bytes, not necessarily UTF-8
    pub(crate) fn bytes(status: u16, body: &[u8]) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_vec(),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct CapturedRequest {
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: String,
}

impl CapturedRequest {
    /// Case-insensitive header lookup
    pub(crate) fn header(&self, name: &str) -> Option<String> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
    }
}

/// Serve exactly one request with `response`, returning the endpoint URL and
/// a handle that yields what the client sent.
pub(crate) fn serve_once(response: StubResponse) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let port = listener.local_addr().expect("local addr").port();
    let url = format!("http://127.0.0.1:{port}/api/v1/chat/completions");

    let handle = std::thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let captured = read_request(&mut reader);

        let reason = match response.status {
            200 => "OK",
            401 => "Unauthorized",
            500 => "Internal Server Error",
            _ => "Status",
        };
        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {} {reason}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            response.status,
            response.content_type,
            response.body.len(),
        )
        .expect("write response head");
        stream.write_all(&response.body).expect("write response body");
        stream.flush().expect("flush");
        captured
    });

    (url, handle)
}

/// URL of a local port with nothing listening on it
pub(crate) fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api/v1/chat/completions")
}

fn read_request(reader: &mut impl BufRead) -> CapturedRequest {
    let mut captured = CapturedRequest::default();

    let mut line = String::new();
    reader.read_line(&mut line).expect("request line");
    let mut parts = line.split_whitespace();
    captured.method = parts.next().unwrap_or_default().to_string();
    captured.path = parts.next().unwrap_or_default().to_string();

    loop {
        line.clear();
        reader.read_line(&mut line).expect("header line");
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            break;
        }
        if let Some((name, value)) = trimmed.split_once(':') {
            captured
                .headers
                .push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    let body = if let Some(len) = captured
        .header("content-length")
        .and_then(|v| v.parse::<usize>().ok())
    {
        let mut buf = vec![0u8; len];
        reader.read_exact(&mut buf).expect("body");
        buf
    } else if captured
        .header("transfer-encoding")
        .is_some_and(|v| v.eq_ignore_ascii_case("chunked"))
    {
        read_chunked(reader)
    } else {
        Vec::new()
    };
    captured.body = String::from_utf8_lossy(&body).into_owned();
    captured
}

fn read_chunked(reader: &mut impl BufRead) -> Vec<u8> {
    let mut body = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        reader.read_line(&mut line).expect("chunk size");
        let size = usize::from_str_radix(line.trim(), 16).expect("hex chunk size");
        if size == 0 {
            line.clear();
            let _ = reader.read_line(&mut line);
            return body;
        }
        let mut chunk = vec![0u8; size + 2];
        reader.read_exact(&mut chunk).expect("chunk");
        body.extend_from_slice(&chunk[..size]);
    }
}

//! Small recording HTTP server for unit tests.
//!
//! Serves canned JSON bodies and records every request so tests can assert
//! on the exact sequence that went over the wire.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

pub struct MockCluster {
    port: u16,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockCluster {
    /// Start a server answering 200 with canned bodies. The first entry
    /// whose fragment appears in the request path wins, so callers list
    /// more specific fragments first.
    pub fn start(responses: &[(&str, &str)]) -> Self {
        let responses: Vec<(String, String)> = responses
            .iter()
            .map(|(fragment, body)| (fragment.to_string(), body.to_string()))
            .collect();
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let Some(request) = read_request(&mut stream) else {
                    continue;
                };
                let body = responses
                    .iter()
                    .find(|(fragment, _)| request.path.contains(fragment.as_str()))
                    .map(|(_, body)| body.as_str())
                    .unwrap_or(r#"{"error":"unmatched request"}"#);
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                recorded.lock().unwrap().push(request);
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self { port, requests }
    }

    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            return None;
        }
        raw.extend_from_slice(&buf[..n]);
        if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
    let mut request_line = head.lines().next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();
    let content_length = head
        .lines()
        .skip(1)
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = raw[header_end + 4..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&buf[..n]);
    }

    Some(RecordedRequest {
        method,
        path,
        body: String::from_utf8_lossy(&body).to_string(),
    })
}

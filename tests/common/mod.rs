//! Shared mock backends for integration tests.
//!
//! Each helper binds an ephemeral port and returns the bound address so
//! concurrently running tests cannot collide.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        400 => "400 Bad Request",
        404 => "404 Not Found",
        409 => "409 Conflict",
        418 => "418 I'm a teapot",
        500 => "500 Internal Server Error",
        _ => "200 OK",
    }
}

fn declared_content_length(text: &str) -> usize {
    text.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Read one full request (head plus any declared body) from the socket.
async fn read_request_head(socket: &mut TcpStream) -> String {
    let mut buf = Vec::with_capacity(4096);
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&buf);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    if buf.len() >= header_end + 4 + declared_content_length(&text) {
                        break;
                    }
                }
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

async fn write_json_response(socket: &mut TcpStream, status: u16, body: &str) {
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_text(status),
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// Start a mock backend that answers every request with a fixed status
/// and JSON body.
pub async fn start_json_backend(status: u16, body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let _ = read_request_head(&mut socket).await;
                        write_json_response(&mut socket, status, body).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a programmable mock backend. The closure receives the raw
/// request head and returns the status and JSON body to send.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let head = read_request_head(&mut socket).await;
                        let (status, body) = f(head).await;
                        write_json_response(&mut socket, status, &body).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a backend that accepts and reads but never responds. Returns the
/// address and a counter of accepted connections (one per client attempt).
pub async fn start_stalling_backend() -> (SocketAddr, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let attempts = Arc::new(AtomicU32::new(0));
    let counter = attempts.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    counter.fetch_add(1, Ordering::SeqCst);
                    tokio::spawn(async move {
                        let _ = read_request_head(&mut socket).await;
                        tokio::time::sleep(Duration::from_secs(60)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, attempts)
}

/// Start a backend that drops the first `fail_first` connections without
/// a response, then answers with the given status and body. With
/// `fail_first = u32::MAX` every connection is dropped.
pub async fn start_flaky_backend(
    fail_first: u32,
    status: u16,
    body: &'static str,
) -> (SocketAddr, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let attempts = Arc::new(AtomicU32::new(0));
    let counter = attempts.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let seen = counter.fetch_add(1, Ordering::SeqCst);
                    tokio::spawn(async move {
                        let _ = read_request_head(&mut socket).await;
                        if seen < fail_first {
                            // Close without a response; the client sees a
                            // connection error, not an HTTP status.
                            let _ = socket.shutdown().await;
                        } else {
                            write_json_response(&mut socket, status, body).await;
                        }
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, attempts)
}

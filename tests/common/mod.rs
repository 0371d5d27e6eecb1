//! Shared utilities for integration testing.
//!
//! Mock upstreams are plain TCP listeners speaking just enough HTTP/1.1
//! for the forwarder; they bind an ephemeral port and report the address.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use nof1_proxy::forward::{build_client, FingerprintProfile, Forwarder};

/// Build a forwarder pointed at the given origin, with a short client
/// timeout so failure tests stay fast.
pub fn forwarder_for(origin: &str) -> Forwarder {
    let fingerprint = FingerprintProfile::chrome_120(origin).expect("fingerprint");
    let client = build_client(&fingerprint, 2).expect("client");
    Forwarder::new(client, fingerprint, origin)
}

/// Start a programmable mock upstream. The responder receives the request
/// head (request line plus headers) and produces a status and body.
pub async fn start_upstream<F, Fut>(respond: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let respond = Arc::new(respond);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let respond = respond.clone();
                    tokio::spawn(async move {
                        let mut head = Vec::new();
                        let mut chunk = [0u8; 1024];
                        loop {
                            match socket.read(&mut chunk).await {
                                Ok(0) | Err(_) => break,
                                Ok(n) => {
                                    head.extend_from_slice(&chunk[..n]);
                                    if head.windows(4).any(|w| w == b"\r\n\r\n")
                                        || head.len() > 16 * 1024
                                    {
                                        break;
                                    }
                                }
                            }
                        }

                        let head = String::from_utf8_lossy(&head).into_owned();
                        let (status, body) = respond(head).await;
                        let status_text = match status {
                            200 => "200 OK".to_string(),
                            400 => "400 Bad Request".to_string(),
                            404 => "404 Not Found".to_string(),
                            500 => "500 Internal Server Error".to_string(),
                            503 => "503 Service Unavailable".to_string(),
                            _ => format!("{status} Status"),
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Mock upstream returning a fixed status and body.
pub async fn start_fixed_upstream(status: u16, body: &'static str) -> SocketAddr {
    start_upstream(move |_| async move { (status, body.to_string()) }).await
}

/// Mock upstream echoing the request target (path + query) back as JSON.
pub async fn start_echo_upstream() -> SocketAddr {
    start_upstream(|head: String| async move {
        let target = head
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().nth(1))
            .unwrap_or("")
            .to_string();
        (200, serde_json::json!({ "target": target }).to_string())
    })
    .await
}

//! One-shot HTTP responder for adapter tests.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub(crate) struct CapturedRequest {
    /// Request line and headers, lowercased
    pub head: String,
    pub body: String,
}

/// Bind to an ephemeral local port; returns the listener and its base URL.
pub(crate) async fn bind() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    (listener, url)
}

/// Accept one request, answer with `status_line` and `body`, and return what
/// the client sent.
pub(crate) async fn serve_once(
    listener: TcpListener,
    status_line: &'static str,
    body: &'static str,
) -> CapturedRequest {
    let (mut socket, _) = listener.accept().await.unwrap();
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length: usize = head
        .lines()
        .find_map(|l| l.strip_prefix("content-length:"))
        .map(|v| v.trim().parse().unwrap())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before body");
        buf.extend_from_slice(&chunk[..n]);
    }

    let response = format!(
        "{}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    socket.write_all(response.as_bytes()).await.unwrap();
    socket.flush().await.unwrap();

    CapturedRequest {
        head,
        body: String::from_utf8_lossy(&buf[header_end..header_end + content_length]).into_owned(),
    }
}

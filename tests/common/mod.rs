//! Shared test helpers: an in-process HTTP server with canned responses and
//! buffer-to-text conversion for rendering assertions.
#![allow(dead_code)]

use daily_quote::api::{Quote, QuoteClient};
use ratatui::buffer::Buffer;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use url::Url;

pub const TODAY_OK: &str = r#"{
    "success": true,
    "data": {"id": 1, "content": "认识你自己。", "author": "苏格拉底", "date": "2024-03-15", "is_fallback": false},
    "message": "获取成功"
}"#;

pub const RECENT_OK: &str = r#"{
    "success": true,
    "data": [
        {"content": "认识你自己。", "author": "苏格拉底", "date": "2024-03-15"},
        {"content": "我思故我在。", "author": "笛卡尔", "date": "2024-03-14"}
    ],
    "count": 2,
    "message": "获取成功"
}"#;

pub const RECENT_EMPTY: &str = r#"{"success": true, "data": [], "count": 0, "message": "获取成功"}"#;

pub fn socrates() -> Quote {
    Quote::new("认识你自己。", "苏格拉底", "2024-03-15")
}

/// Client for a test server; bypasses any proxy configured in the environment
pub fn test_client(base_url: Url, timeout: Duration) -> QuoteClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    QuoteClient::with_http_client(http, base_url, timeout)
}

/// A canned response for one request path (query string ignored)
#[derive(Debug, Clone)]
pub struct MockRoute {
    pub path: String,
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    pub delay: Option<Duration>,
}

impl MockRoute {
    pub fn json(path: &str, body: &str) -> Self {
        Self {
            path: path.to_string(),
            status: 200,
            content_type: "application/json",
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn html(path: &str, status: u16, body: &str) -> Self {
        Self {
            path: path.to_string(),
            status,
            content_type: "text/html",
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Minimal HTTP/1.1 server answering GET requests from a route table
pub struct MockServer {
    base_url: Url,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    pub async fn start(routes: Vec<MockRoute>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let routes = Arc::new(routes);

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let routes = Arc::clone(&routes);
                let recorded = Arc::clone(&recorded);
                tokio::spawn(async move {
                    let _ = respond(socket, &routes, &recorded).await;
                });
            }
        });

        Self {
            base_url: Url::parse(&format!("http://{}", addr)).unwrap(),
            requests,
        }
    }

    pub fn base_url(&self) -> Url {
        self.base_url.clone()
    }

    /// Request targets (path and query) in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Address nothing listens on
pub async fn closed_port_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}", addr)).unwrap()
}

async fn respond(
    mut socket: TcpStream,
    routes: &[MockRoute],
    recorded: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        request.extend_from_slice(&chunk[..n]);
        if request.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    let request = String::from_utf8_lossy(&request);
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    recorded.lock().unwrap().push(target.clone());

    let path = target.split('?').next().unwrap_or("/");
    let route = routes.iter().find(|route| route.path == path);

    let (status, content_type, body) = match route {
        Some(route) => {
            if let Some(delay) = route.delay {
                tokio::time::sleep(delay).await;
            }
            (route.status, route.content_type, route.body.clone())
        }
        None => (404, "application/json", r#"{"detail":"Not Found"}"#.to_string()),
    };

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        content_type,
        body.len(),
        body
    );
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Unknown",
    }
}

/// Rows of a rendered buffer with all spaces removed
///
/// Wide characters leave a blank continuation cell behind them, so assertions
/// compare text with spaces stripped on both sides.
pub fn buffer_rows(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>().replace(' ', ""))
        .collect()
}

pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    let needle = text.replace(' ', "");
    buffer_rows(buffer).iter().any(|row| row.contains(&needle))
}

// ═══════════════════════════════════════════════════════════════════
// Minimal HTTP/1.1 fake of the journal API, for exercising the real
// reqwest-backed store without a network dependency.
// ═══════════════════════════════════════════════════════════════════

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

/// A request as the fake server saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Canned responses keyed by `(method, path)`; anything else is a 404.
pub struct FakeApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeApi {
    pub async fn start(routes: Vec<(&str, &str, u16, &str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes: Arc<HashMap<(String, String), (u16, String)>> = Arc::new(
            routes
                .into_iter()
                .map(|(m, p, s, b)| ((m.to_string(), p.to_string()), (s, b.to_string())))
                .collect(),
        );
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = requests.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = routes.clone();
                let log = log.clone();
                tokio::spawn(async move {
                    handle(stream, &routes, &log).await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}/api"),
            requests,
        }
    }

    pub async fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().await.clone()
    }

    pub async fn count(&self, method: &str) -> usize {
        self.requests
            .lock()
            .await
            .iter()
            .filter(|r| r.method == method)
            .count()
    }
}

async fn handle(
    mut stream: TcpStream,
    routes: &HashMap<(String, String), (u16, String)>,
    log: &Mutex<Vec<Recorded>>,
) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    // Headers
    let header_end = loop {
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    };
    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|l| l.split_once(':'))
        .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    // Body
    while buf.len() < header_end + content_length {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let body_end = buf.len().min(header_end + content_length);
    let body = String::from_utf8_lossy(&buf[header_end..body_end]).to_string();

    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let full_path = request_line.next().unwrap_or_default().to_string();
    let path = full_path.strip_prefix("/api").unwrap_or(&full_path).to_string();

    log.lock().await.push(Recorded {
        method: method.clone(),
        path: path.clone(),
        body,
    });

    let (status, payload) = routes
        .get(&(method, path))
        .cloned()
        .unwrap_or((404, r#"{"detail":"Not Found"}"#.to_string()));

    let response = if status == 204 {
        "HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n".to_string()
    } else {
        format!(
            "HTTP/1.1 {status} Fake\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{payload}",
            payload.len()
        )
    };
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

pub const TRADE_1: &str = r#"{"id":1,"symbol":"AAPL","side":"long","quantity":10.0,"entry_price":100.0,"exit_price":110.0,"entry_time":"2024-01-01T09:30:00","exit_time":null,"strategy_tag":"Breakout","notes":null}"#;

pub const TRADE_2: &str = r#"{"id":2,"symbol":"TSLA","side":"short","quantity":5.0,"entry_price":50.0,"exit_price":null,"entry_time":"2024-01-02T10:00:00","exit_time":null,"strategy_tag":null,"notes":null}"#;

pub const STATS: &str = r#"{"total_trades":2,"winning_trades":1,"losing_trades":0,"winrate":1.0,"realized_pnl":100.0,"avg_win":100.0,"avg_loss":null}"#;

pub fn trade_list() -> String {
    format!("[{TRADE_1},{TRADE_2}]")
}

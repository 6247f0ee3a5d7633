#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{extract::Query, http::StatusCode, routing::get, Router};
use gif_search::{
    config::{API_KEY_VAR, API_URL_VAR},
    Config,
};

pub const TEST_KEY: &str = "test-key-0123456789";

/// Local stand-in for the GIPHY search endpoint, answering every request
/// with the same status and body.
pub struct StubApi {
    pub url: String,
    hits: Arc<AtomicUsize>,
    last_params: Arc<Mutex<Option<HashMap<String, String>>>>,
}

impl StubApi {
    pub async fn start(status: u16, body: &'static str) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let last_params = Arc::new(Mutex::new(None));
        let status = StatusCode::from_u16(status).expect("valid status");

        let handler = {
            let hits = hits.clone();
            let last_params = last_params.clone();
            move |Query(params): Query<HashMap<String, String>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                *last_params.lock().unwrap() = Some(params);
                (status, body)
            }
        };

        let app = Router::new().route("/v1/gifs/search", get(handler));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub listener");
        let addr = listener.local_addr().expect("stub has no local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server failed");
        });

        Self {
            url: format!("http://{}/v1/gifs/search", addr),
            hits,
            last_params,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_param(&self, name: &str) -> Option<String> {
        self.last_params
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|params| params.get(name).cloned())
    }

    pub fn source(&self) -> HashMap<String, String> {
        source_for(&self.url)
    }

    pub fn config(&self) -> Config {
        Config::load(&self.source()).expect("stub config should load")
    }
}

pub fn source_for(url: &str) -> HashMap<String, String> {
    HashMap::from([
        (API_KEY_VAR.to_string(), TEST_KEY.to_string()),
        (API_URL_VAR.to_string(), url.to_string()),
    ])
}

/// An address nothing is listening on.
pub fn closed_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let addr = listener.local_addr().expect("no local addr");
    drop(listener);

    format!("http://{}/v1/gifs/search", addr)
}

/// Serves one response whose body stops short of its `Content-Length`, then
/// closes the connection.
pub async fn truncated_body_url() -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind truncating listener");
    let addr = listener.local_addr().expect("no local addr");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept failed");

        // Drain the request head first so closing sends FIN rather than RST.
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("read failed");
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }

        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"data\":")
            .await
            .expect("write failed");
        socket.flush().await.expect("flush failed");
        let _ = socket.shutdown().await;
    });

    format!("http://{}/v1/gifs/search", addr)
}

//! Mock users endpoint for exercising the HTTP fetch.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::json("[]")
    }
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: format!(r#"{{"error": "{}"}}"#, message).into_bytes(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

pub struct MockApi {
    addr: SocketAddr,
    state: MockState,
    shutdown_tx: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown_tx,
        }
    }

    pub fn users_url(&self) -> String {
        format!("http://{}/users", self.addr)
    }

    /// Responses are served in FIFO order; an empty queue answers `[]`.
    pub async fn enqueue(&self, response: MockResponse) {
        self.state.responses.lock().await.push_back(response);
    }

    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}

async fn handle(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let captured = CapturedRequest {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        headers: req
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect(),
    };
    state.requests.lock().await.push(captured);

    let response = state
        .responses
        .lock()
        .await
        .pop_front()
        .unwrap_or_default();

    if response.delay_ms > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(response.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK))
        .header("content-type", "application/json")
        .body(Body::from(response.body))
        .unwrap()
}

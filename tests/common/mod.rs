//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use futures::StreamExt;
use social_gateway::config::Settings;
use social_gateway::startup::{build_router, AppState};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tower::ServiceExt;

pub type TestSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Test application driven in-process through `oneshot`
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with an isolated registry
    pub fn new() -> Self {
        let state = AppState::new(test_settings());
        Self {
            router: build_router(state.clone()),
            state,
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.request("GET", uri, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &serde_json::Value) -> Response<Body> {
        self.request("POST", uri, Some(body)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &serde_json::Value) -> Response<Body> {
        self.request("PUT", uri, Some(body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.request("DELETE", uri, None).await
    }

    async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<&serde_json::Value>,
    ) -> Response<Body> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Settings with built-in defaults only
pub fn test_settings() -> Settings {
    Settings::default_for("test").expect("default settings must be valid")
}

/// Read a response body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Serve the full application on an ephemeral port
pub async fn spawn_app() -> (SocketAddr, AppState) {
    let state = AppState::new(test_settings());
    let router = build_router(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

    (addr, state)
}

/// Open a WebSocket to the running application
pub async fn connect(addr: SocketAddr, query: &str) -> TestSocket {
    let url = format!("ws://{}/ws{}", addr, query);
    let (socket, _) = tokio_tungstenite::connect_async(url).await.unwrap();
    socket
}

/// Next text frame as JSON, skipping control frames
pub async fn next_json(socket: &mut TestSocket) -> serde_json::Value {
    tokio::time::timeout(Duration::from_secs(5), async {
        while let Some(msg) = socket.next().await {
            if let Message::Text(text) = msg.unwrap() {
                return serde_json::from_str(text.as_str()).unwrap();
            }
        }
        panic!("socket closed before a text frame arrived");
    })
    .await
    .expect("timed out waiting for a frame")
}

/// Poll until `condition` holds or give up after two seconds
pub async fn eventually(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    condition()
}

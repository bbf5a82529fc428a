//! Test harness for HTTP-level gateway tests.
//!
//! Spins up the real Axum app on an ephemeral port with mock downstream
//! clients injected, then drives it with a plain reqwest client. Each test
//! gets its own server and its own set of mocks.

use std::sync::Arc;

use gateway_core::kernel::TestDependencies;
use gateway_core::server::build_app;
use reqwest::{Response, StatusCode};
use serde_json::Value;

pub struct TestHarness {
    /// Mock downstreams, kept for call assertions after requests complete.
    pub td: Arc<TestDependencies>,
    base_url: String,
    client: reqwest::Client,
}

impl TestHarness {
    /// Start a gateway with default mocks.
    pub async fn spawn() -> Self {
        Self::spawn_with(TestDependencies::new(), false).await
    }

    /// Start a gateway with customized mocks.
    pub async fn spawn_with(td: TestDependencies, delete_side_effects: bool) -> Self {
        let td = Arc::new(td);
        let app = build_app(td.deps_with_delete_side_effects(delete_side_effects));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let addr = listener.local_addr().expect("listener has no local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server failed");
        });

        Self {
            td,
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }

    pub async fn post(&self, path: &str, token: &str, body: &Value) -> Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("request failed")
    }

    /// POST with a raw (non-JSON) body, for malformed-payload tests.
    pub async fn post_raw(&self, path: &str, token: &str, body: &str) -> Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("request failed")
    }

    pub async fn delete(&self, path: &str, token: &str) -> Response {
        self.client
            .delete(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .send()
            .await
            .expect("request failed")
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("request failed")
    }
}

/// Assert a response status and return its JSON body.
pub async fn json_body(response: Response, expected: StatusCode) -> Value {
    let status = response.status();
    let text = response.text().await.expect("failed to read body");
    assert_eq!(status, expected, "unexpected status, body: {text}");
    serde_json::from_str(&text).expect("body is not JSON")
}

//! Shared reqwest plumbing for the downstream service clients.

use anyhow::{anyhow, Context, Result};
use reqwest::{Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

use super::ClientError;

/// Build the HTTP client every downstream requester shares. The timeout
/// bounds each call; expiry surfaces as a transport failure.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to create HTTP client")
}

/// Decode a successful JSON answer, or classify the failure.
pub async fn expect_json(response: Response) -> Result<Value, ClientError> {
    if !response.status().is_success() {
        return Err(classify_failure(response).await);
    }
    response.json::<Value>().await.map_err(|e| {
        ClientError::Service(
            anyhow::Error::new(e).context("Failed to decode downstream response"),
        )
    })
}

/// Accept any successful answer without reading a body, or classify the failure.
pub async fn expect_empty(response: Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(classify_failure(response).await);
    }
    Ok(())
}

/// Classify a non-success downstream answer per the gateway's taxonomy:
/// 400 means the forwarded fields were unintelligible, other 4xx are
/// application-level rejections carried through with their body, and
/// everything else is a service failure.
async fn classify_failure(response: Response) -> ClientError {
    let status = response.status();
    if status == StatusCode::BAD_REQUEST {
        return ClientError::ShapeMismatch;
    }
    if status.is_client_error() {
        return match response.json::<Value>().await {
            Ok(body) => ClientError::Rejected { status, body },
            Err(e) => ClientError::Service(
                anyhow::Error::new(e).context("Undecodable rejection body"),
            ),
        };
    }
    ClientError::Service(anyhow!("downstream returned {status}"))
}

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use super::http::{build_client, expect_json};
use super::{BaseAwardsClient, ClientError, ClientResult};
use crate::common::Pin;

/// HTTP client for the awards service (purchasable pins).
pub struct AwardsClient {
    base_url: String,
    client: reqwest::Client,
}

impl AwardsClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url,
            client: build_client(timeout)?,
        })
    }
}

#[async_trait]
impl BaseAwardsClient for AwardsClient {
    async fn resolve_pin(&self, fields: &Value, token: &str) -> ClientResult<Pin> {
        let response = self
            .client
            .post(format!("{}/api/pins/resolve/", self.base_url))
            .bearer_auth(token)
            .json(fields)
            .send()
            .await
            .map_err(|e| anyhow::Error::new(e).context("Failed to reach awards service"))?;

        let body = expect_json(response).await?;
        serde_json::from_value(body).map_err(|e| {
            ClientError::Service(
                anyhow::Error::new(e).context("Awards service returned an unexpected pin shape"),
            )
        })
    }
}

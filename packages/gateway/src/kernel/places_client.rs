use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

use super::http::{build_client, expect_empty, expect_json};
use super::{BasePlacesClient, ClientResult};

/// HTTP client for the places service (places, ratings, acceptances).
pub struct PlacesClient {
    base_url: String,
    client: reqwest::Client,
}

impl PlacesClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url,
            client: build_client(timeout)?,
        })
    }

    /// Forward the caller's fields verbatim with the authorship stamped in.
    fn with_created_by(fields: &Value, created_by: i64) -> Value {
        let mut body = fields.as_object().cloned().unwrap_or_default();
        body.insert("created_by".to_string(), json!(created_by));
        Value::Object(body)
    }

    async fn create(
        &self,
        path: &str,
        fields: &Value,
        created_by: i64,
        token: &str,
    ) -> ClientResult<Value> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .json(&Self::with_created_by(fields, created_by))
            .send()
            .await
            .map_err(|e| anyhow::Error::new(e).context("Failed to reach places service"))?;

        expect_json(response).await
    }
}

#[async_trait]
impl BasePlacesClient for PlacesClient {
    async fn create_place(
        &self,
        fields: &Value,
        created_by: i64,
        token: &str,
    ) -> ClientResult<Value> {
        self.create("/api/places/", fields, created_by, token).await
    }

    async fn create_rating(
        &self,
        fields: &Value,
        created_by: i64,
        token: &str,
    ) -> ClientResult<Value> {
        self.create("/api/ratings/", fields, created_by, token).await
    }

    async fn create_acceptance(
        &self,
        fields: &Value,
        created_by: i64,
        token: &str,
    ) -> ClientResult<Value> {
        self.create("/api/acceptances/", fields, created_by, token)
            .await
    }

    async fn delete_acceptance(&self, acceptance_id: i64, token: &str) -> ClientResult<()> {
        let response = self
            .client
            .delete(format!("{}/api/acceptances/{}/", self.base_url, acceptance_id))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| anyhow::Error::new(e).context("Failed to reach places service"))?;

        expect_empty(response).await
    }
}

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

use super::http::{build_client, expect_json};
use super::{BaseUsersClient, ClientResult};
use crate::common::Profile;

/// HTTP client for the users service (profiles, achievements, reputation).
///
/// Every operation here is privileged and authenticates with the gateway's
/// app-level token, never the end user's own credential.
pub struct UsersClient {
    base_url: String,
    client: reqwest::Client,
}

impl UsersClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url,
            client: build_client(timeout)?,
        })
    }
}

#[async_trait]
impl BaseUsersClient for UsersClient {
    async fn grant_achievement(
        &self,
        user_id: i64,
        achievement_id: i64,
        app_token: &str,
    ) -> ClientResult<Profile> {
        let response = self
            .client
            .post(format!("{}/api/users/{}/achievements/", self.base_url, user_id))
            .bearer_auth(app_token)
            .json(&json!({ "achievement_id": achievement_id }))
            .send()
            .await
            .map_err(|e| anyhow::Error::new(e).context("Failed to reach users service"))?;

        expect_json(response).await
    }

    async fn adjust_rating(
        &self,
        user_id: i64,
        delta: i64,
        app_token: &str,
    ) -> ClientResult<Profile> {
        let response = self
            .client
            .patch(format!("{}/api/users/{}/rating/", self.base_url, user_id))
            .bearer_auth(app_token)
            .json(&json!({ "delta": delta }))
            .send()
            .await
            .map_err(|e| anyhow::Error::new(e).context("Failed to reach users service"))?;

        expect_json(response).await
    }

    async fn debit_for_pin(
        &self,
        pin_id: i64,
        user_id: i64,
        price: i64,
        app_token: &str,
    ) -> ClientResult<Profile> {
        let response = self
            .client
            .post(format!("{}/api/users/{}/pins/", self.base_url, user_id))
            .bearer_auth(app_token)
            .json(&json!({ "pin_id": pin_id, "price": price }))
            .send()
            .await
            .map_err(|e| anyhow::Error::new(e).context("Failed to reach users service"))?;

        expect_json(response).await
    }
}

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::http::{build_client, expect_json};
use super::{BaseAuthClient, ClientError, ClientResult};
use crate::common::UserIdentity;

/// HTTP client for the identity/authentication service.
pub struct AuthClient {
    base_url: String,
    client: reqwest::Client,
}

impl AuthClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url,
            client: build_client(timeout)?,
        })
    }
}

/// App-level credential request
#[derive(Debug, Serialize)]
struct AppTokenRequest<'a> {
    app_id: &'a str,
    app_secret: &'a str,
}

/// App-level credential response
#[derive(Debug, Deserialize)]
struct AppTokenResponse {
    access: String,
}

#[async_trait]
impl BaseAuthClient for AuthClient {
    async fn get_identity(&self, token: &str) -> ClientResult<UserIdentity> {
        let response = self
            .client
            .get(format!("{}/api/auth/user_info/", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| anyhow::Error::new(e).context("Failed to reach auth service"))?;

        let body = expect_json(response).await?;
        serde_json::from_value(body).map_err(|e| {
            ClientError::Service(
                anyhow::Error::new(e).context("Auth service returned an unexpected identity shape"),
            )
        })
    }

    async fn app_token(&self, app_id: &str, app_secret: &str) -> ClientResult<String> {
        let request = AppTokenRequest { app_id, app_secret };

        let response = self
            .client
            .post(format!("{}/api/auth/token/", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow::Error::new(e).context("Failed to reach auth service"))?;

        let body = expect_json(response).await?;
        let token: AppTokenResponse = serde_json::from_value(body).map_err(|e| {
            ClientError::Service(
                anyhow::Error::new(e).context("Auth service returned an unexpected token shape"),
            )
        })?;
        Ok(token.access)
    }
}

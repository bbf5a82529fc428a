// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no orchestration logic.
// The per-action workflow lives in domains/gateway and uses these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAuthClient)

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::common::{Pin, Profile, UserIdentity};

// =============================================================================
// Failure taxonomy
// =============================================================================

/// Failure taxonomy shared by every downstream client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The downstream service could not interpret the fields we forwarded.
    #[error("downstream service rejected the request shape")]
    ShapeMismatch,

    /// Explicit application-level rejection; status and body are preserved
    /// so the gateway can pass them through verbatim.
    #[error("downstream service rejected the operation with status {status}")]
    Rejected { status: StatusCode, body: Value },

    /// Transport failure, 5xx answer or an undecodable response.
    #[error("downstream service unavailable: {0}")]
    Service(anyhow::Error),
}

impl From<anyhow::Error> for ClientError {
    fn from(err: anyhow::Error) -> Self {
        Self::Service(err)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

// =============================================================================
// Auth Service (identity resolution + app-level credentials)
// =============================================================================

#[async_trait]
pub trait BaseAuthClient: Send + Sync {
    /// Resolve a credential token into the calling user's identity.
    async fn get_identity(&self, token: &str) -> ClientResult<UserIdentity>;

    /// Obtain the gateway's own app-level access token for privileged calls.
    async fn app_token(&self, app_id: &str, app_secret: &str) -> ClientResult<String>;
}

// =============================================================================
// Places Service (places, ratings, acceptances)
// =============================================================================

#[async_trait]
pub trait BasePlacesClient: Send + Sync {
    async fn create_place(
        &self,
        fields: &Value,
        created_by: i64,
        token: &str,
    ) -> ClientResult<Value>;

    async fn create_rating(
        &self,
        fields: &Value,
        created_by: i64,
        token: &str,
    ) -> ClientResult<Value>;

    async fn create_acceptance(
        &self,
        fields: &Value,
        created_by: i64,
        token: &str,
    ) -> ClientResult<Value>;

    async fn delete_acceptance(&self, acceptance_id: i64, token: &str) -> ClientResult<()>;
}

// =============================================================================
// Users Service (profiles, achievements, reputation)
// =============================================================================

#[async_trait]
pub trait BaseUsersClient: Send + Sync {
    /// Grant an achievement to a user; returns the updated profile.
    async fn grant_achievement(
        &self,
        user_id: i64,
        achievement_id: i64,
        app_token: &str,
    ) -> ClientResult<Profile>;

    /// Adjust a user's reputation score by a delta; returns the updated profile.
    async fn adjust_rating(
        &self,
        user_id: i64,
        delta: i64,
        app_token: &str,
    ) -> ClientResult<Profile>;

    /// Debit a user for a pin purchase; returns the updated profile.
    async fn debit_for_pin(
        &self,
        pin_id: i64,
        user_id: i64,
        price: i64,
        app_token: &str,
    ) -> ClientResult<Profile>;
}

// =============================================================================
// Awards Service (pins)
// =============================================================================

#[async_trait]
pub trait BaseAwardsClient: Send + Sync {
    /// Resolve the pin described by the request fields to its id and price.
    async fn resolve_pin(&self, fields: &Value, token: &str) -> ClientResult<Pin>;
}

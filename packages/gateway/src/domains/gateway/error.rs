//! Client-facing error taxonomy and HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

use crate::kernel::ClientError;

/// Errors a gateway workflow can surface to the client.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Malformed payload or path parameter. Fixed 400, generic message.
    #[error("malformed request payload")]
    BadRequest,

    /// A downstream service explicitly rejected the operation; its status
    /// and body pass through verbatim.
    #[error("upstream rejected the operation with status {status}")]
    Upstream { status: StatusCode, body: Value },

    /// A downstream dependency was unreachable or misbehaved. Fixed 500.
    #[error("{service} service unavailable")]
    ServiceUnavailable { service: &'static str },
}

impl GatewayError {
    /// Map a primary-path downstream failure onto the client-facing taxonomy.
    pub fn from_client(service: &'static str, err: ClientError) -> Self {
        match err {
            ClientError::ShapeMismatch => Self::BadRequest,
            ClientError::Rejected { status, body } => Self::Upstream { status, body },
            ClientError::Service(e) => {
                tracing::warn!(service, error = %e, "Downstream call failed");
                Self::ServiceUnavailable { service }
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Malformed request payload"})),
            )
                .into_response(),
            Self::Upstream { status, body } => (status, Json(body)).into_response(),
            Self::ServiceUnavailable { service } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": format!("{service} service is unavailable, try again later")
                })),
            )
                .into_response(),
        }
    }
}

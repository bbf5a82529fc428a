//! HTTP handlers for the gateway actions.
//!
//! Each handler is a thin adapter: pull the credential token and payload out
//! of the request, hand them to the workflow, and let the workflow's response
//! and error types render themselves. Payload extraction is deliberately
//! lenient (`Option<Json<Value>>`) so that identity resolution happens before
//! payload validation, mirroring the workflow's own ordering.

use axum::{
    extract::{Extension, Path},
    http::header::AUTHORIZATION,
    http::HeaderMap,
    Json,
};
use serde_json::Value;

use crate::domains::gateway::{run, ActionRequest, GatewayError, WorkflowResponse};
use crate::server::app::AppState;

/// Extract the bearer token from the Authorization header.
///
/// A missing or malformed header yields an empty token; the auth service
/// rejects it downstream, so no separate 401 path exists here.
fn bearer_token(headers: &HeaderMap) -> String {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.strip_prefix("Bearer ").unwrap_or(value))
        .unwrap_or_default()
        .to_string()
}

fn payload(body: Option<Json<Value>>) -> Value {
    body.map(|Json(value)| value).unwrap_or(Value::Null)
}

pub async fn add_place_handler(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    body: Option<Json<Value>>,
) -> Result<WorkflowResponse, GatewayError> {
    let token = bearer_token(&headers);
    run(&state.deps, &token, ActionRequest::AddPlace(payload(body))).await
}

pub async fn add_rating_handler(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    body: Option<Json<Value>>,
) -> Result<WorkflowResponse, GatewayError> {
    let token = bearer_token(&headers);
    run(&state.deps, &token, ActionRequest::AddRating(payload(body))).await
}

pub async fn add_acceptance_handler(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    body: Option<Json<Value>>,
) -> Result<WorkflowResponse, GatewayError> {
    let token = bearer_token(&headers);
    run(
        &state.deps,
        &token,
        ActionRequest::AddAcceptance(payload(body)),
    )
    .await
}

pub async fn delete_acceptance_handler(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    Path(acceptance_id): Path<String>,
) -> Result<WorkflowResponse, GatewayError> {
    let token = bearer_token(&headers);
    run(
        &state.deps,
        &token,
        ActionRequest::DeleteAcceptance(acceptance_id),
    )
    .await
}

pub async fn buy_pin_handler(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    body: Option<Json<Value>>,
) -> Result<WorkflowResponse, GatewayError> {
    let token = bearer_token(&headers);
    run(&state.deps, &token, ActionRequest::BuyPin(payload(body))).await
}

//! Per-action orchestration: authenticate, run the primary action, attempt
//! best-effort side effects, assemble the composite response.
//!
//! The partial-failure policy is the heart of this module: a failure
//! anywhere on the primary path aborts the request immediately, while
//! side-effect failures are absorbed and simply leave the `profile` field
//! out of the response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Map, Value};

use super::actions::{GatewayAction, SideEffects};
use super::error::GatewayError;
use crate::common::{Profile, UserIdentity};
use crate::kernel::{GatewayDeps, StatsEvent, StatsEventKind};

/// Request payload for one gateway action, taken verbatim from the inbound
/// request. Unparseable bodies arrive as `Value::Null` and fail validation
/// after identity resolution, like any other malformed payload.
#[derive(Debug)]
pub enum ActionRequest {
    AddPlace(Value),
    AddRating(Value),
    AddAcceptance(Value),
    DeleteAcceptance(String),
    BuyPin(Value),
}

impl ActionRequest {
    fn action(&self) -> GatewayAction {
        match self {
            Self::AddPlace(_) => GatewayAction::AddPlace,
            Self::AddRating(_) => GatewayAction::AddRating,
            Self::AddAcceptance(_) => GatewayAction::AddAcceptance,
            Self::DeleteAcceptance(_) => GatewayAction::DeleteAcceptance,
            Self::BuyPin(_) => GatewayAction::BuyPin,
        }
    }
}

/// Outcome of a completed workflow, ready for the HTTP layer.
#[derive(Debug)]
pub struct WorkflowResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl IntoResponse for WorkflowResponse {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}

/// The primary result of an action, before response assembly.
enum Primary {
    /// Create actions: the new object, keyed by the action's noun.
    Keyed(Value),
    /// BuyPin: the debited profile, embedded directly in the response.
    Profile { profile: Value, pin_id: i64 },
    /// Deletion: no body.
    Empty,
}

/// Outcomes of the two best-effort attempts, in call order.
#[derive(Debug, Default)]
pub struct SideEffectOutcome {
    pub achievement: Option<Profile>,
    pub rating: Option<Profile>,
}

/// Resolve the caller's identity from the credential token.
///
/// Any failure here, including the auth service rejecting the token, is
/// reported as the auth dependency being unavailable and short-circuits
/// the request before any business call is made. No retries: the client
/// is expected to retry the whole request.
pub async fn resolve_identity(
    deps: &GatewayDeps,
    token: &str,
) -> Result<UserIdentity, GatewayError> {
    deps.auth.get_identity(token).await.map_err(|e| {
        tracing::warn!(error = %e, "Identity resolution failed");
        GatewayError::ServiceUnavailable { service: "auth" }
    })
}

/// Run one gateway action end to end.
pub async fn run(
    deps: &GatewayDeps,
    token: &str,
    request: ActionRequest,
) -> Result<WorkflowResponse, GatewayError> {
    let action = request.action();
    let user = resolve_identity(deps, token).await?;

    let primary = match &request {
        ActionRequest::AddPlace(payload) => {
            let fields = require_object(payload)?;
            let place = deps
                .places
                .create_place(fields, user.id, token)
                .await
                .map_err(|e| GatewayError::from_client("places", e))?;
            Primary::Keyed(place)
        }
        ActionRequest::AddRating(payload) => {
            let fields = require_object(payload)?;
            let rating = deps
                .places
                .create_rating(fields, user.id, token)
                .await
                .map_err(|e| GatewayError::from_client("places", e))?;
            Primary::Keyed(rating)
        }
        ActionRequest::AddAcceptance(payload) => {
            let fields = require_object(payload)?;
            let acceptance = deps
                .places
                .create_acceptance(fields, user.id, token)
                .await
                .map_err(|e| GatewayError::from_client("places", e))?;
            Primary::Keyed(acceptance)
        }
        ActionRequest::DeleteAcceptance(raw_id) => {
            let acceptance_id: i64 = raw_id.parse().map_err(|_| GatewayError::BadRequest)?;
            deps.places
                .delete_acceptance(acceptance_id, token)
                .await
                .map_err(|e| GatewayError::from_client("places", e))?;
            Primary::Empty
        }
        ActionRequest::BuyPin(payload) => {
            // Two sequential downstream operations form the primary action.
            // The pin is resolved with the user's token, the debit runs
            // under the gateway's own app-level credential. A failed debit
            // fails the whole action; the pin was never granted, so there
            // is nothing to compensate.
            let fields = require_object(payload)?;
            let pin = deps
                .awards
                .resolve_pin(fields, token)
                .await
                .map_err(|e| GatewayError::from_client("awards", e))?;
            let app_token = deps
                .auth
                .app_token(&deps.app_id, &deps.app_secret)
                .await
                .map_err(|e| GatewayError::from_client("auth", e))?;
            let profile = deps
                .users
                .debit_for_pin(pin.id, user.id, pin.price, &app_token)
                .await
                .map_err(|e| GatewayError::from_client("users", e))?;
            Primary::Profile {
                profile,
                pin_id: pin.id,
            }
        }
    };

    let fx = action.side_effects(deps.delete_side_effects_enabled);
    let outcome = match fx {
        Some(fx) => attempt_side_effects(deps, user.id, fx).await,
        None => SideEffectOutcome::default(),
    };
    let achievement_granted = outcome.achievement.is_some();

    let status = action.success_status();
    let (body, purchased_pin) = match primary {
        Primary::Keyed(value) => {
            let key = action.result_key().unwrap_or("result");
            (Some(assemble(key, value, outcome)), None)
        }
        Primary::Profile { profile, pin_id } => {
            // The rating adjustment wins over the debited profile. The
            // achievement outcome feeds stats only for pin purchases.
            (Some(outcome.rating.unwrap_or(profile)), Some(pin_id))
        }
        Primary::Empty => (None, None),
    };

    deps.stats.emit(StatsEvent::new(
        user.id,
        StatsEventKind::Request {
            method: action.method().to_string(),
            path: action.path().to_string(),
            status: status.as_u16(),
        },
    ));
    if let Some(pin_id) = purchased_pin {
        deps.stats
            .emit(StatsEvent::new(user.id, StatsEventKind::PinPurchase { pin_id }));
    }
    if achievement_granted {
        if let Some(fx) = fx {
            deps.stats.emit(StatsEvent::new(
                user.id,
                StatsEventKind::Achievement {
                    achievement_id: fx.achievement_id,
                },
            ));
        }
    }

    Ok(WorkflowResponse { status, body })
}

/// Attempt the action's achievement grant and rating adjustment, in that
/// order. Failures are absorbed here: the user-visible action already
/// succeeded and gamification bookkeeping must never block or corrupt it.
pub async fn attempt_side_effects(
    deps: &GatewayDeps,
    user_id: i64,
    fx: SideEffects,
) -> SideEffectOutcome {
    let achievement = grant_achievement(deps, user_id, fx.achievement_id).await;
    let rating = adjust_rating(deps, user_id, fx.rating_delta).await;
    SideEffectOutcome {
        achievement,
        rating,
    }
}

async fn grant_achievement(
    deps: &GatewayDeps,
    user_id: i64,
    achievement_id: i64,
) -> Option<Profile> {
    let app_token = match deps.auth.app_token(&deps.app_id, &deps.app_secret).await {
        Ok(token) => token,
        Err(e) => {
            tracing::debug!(error = %e, "App token acquisition failed, skipping achievement grant");
            return None;
        }
    };
    match deps
        .users
        .grant_achievement(user_id, achievement_id, &app_token)
        .await
    {
        Ok(profile) => Some(profile),
        Err(e) => {
            tracing::debug!(error = %e, achievement_id, "Achievement grant failed");
            None
        }
    }
}

async fn adjust_rating(deps: &GatewayDeps, user_id: i64, delta: i64) -> Option<Profile> {
    let app_token = match deps.auth.app_token(&deps.app_id, &deps.app_secret).await {
        Ok(token) => token,
        Err(e) => {
            tracing::debug!(error = %e, "App token acquisition failed, skipping rating adjustment");
            return None;
        }
    };
    match deps.users.adjust_rating(user_id, delta, &app_token).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            tracing::debug!(error = %e, delta, "Rating adjustment failed");
            None
        }
    }
}

/// Merge the primary result and the freshest updated profile into the
/// action's composite body. The rating adjustment runs after the
/// achievement grant, so it wins when both produced a profile.
pub fn assemble(key: &str, primary: Value, outcome: SideEffectOutcome) -> Value {
    let mut body = Map::new();
    body.insert(key.to_string(), primary);
    if let Some(profile) = outcome.rating.or(outcome.achievement) {
        body.insert("profile".to_string(), profile);
    }
    Value::Object(body)
}

/// Primary payloads must be JSON objects; anything else is malformed.
fn require_object(payload: &Value) -> Result<&Value, GatewayError> {
    if payload.is_object() {
        Ok(payload)
    } else {
        Err(GatewayError::BadRequest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Pin;
    use crate::kernel::test_dependencies::{
        MockAuthClient, MockAwardsClient, MockPlacesClient, MockUsersClient,
    };
    use crate::kernel::{ClientError, TestDependencies};
    use anyhow::anyhow;
    use serde_json::json;
    use std::sync::Arc;

    fn rejected(status: u16, body: Value) -> ClientError {
        ClientError::Rejected {
            status: StatusCode::from_u16(status).unwrap(),
            body,
        }
    }

    fn transport() -> ClientError {
        ClientError::Service(anyhow!("connection refused"))
    }

    // ---- identity resolution ----

    #[tokio::test]
    async fn identity_failure_short_circuits_every_action() {
        let requests = [
            ActionRequest::AddPlace(json!({"name": "x"})),
            ActionRequest::AddRating(json!({"place_id": 1})),
            ActionRequest::AddAcceptance(json!({"place_id": 1})),
            ActionRequest::DeleteAcceptance("12".to_string()),
            ActionRequest::BuyPin(json!({"pin_id": 3})),
        ];
        for request in requests {
            let td = TestDependencies {
                auth: Arc::new(MockAuthClient::new().failing_identity()),
                ..TestDependencies::new()
            };
            let err = run(&td.deps(), "token", request).await.unwrap_err();
            assert!(matches!(
                err,
                GatewayError::ServiceUnavailable { service: "auth" }
            ));
            assert_eq!(td.business_call_count(), 0);
            assert!(td.stats.events().is_empty());
        }
    }

    #[tokio::test]
    async fn an_invalid_token_reads_as_an_auth_outage() {
        // The auth service rejecting the token is indistinguishable from an
        // outage at this layer; both produce the fixed 500-class error.
        let td = TestDependencies {
            auth: Arc::new(MockAuthClient::new().failing_identity()),
            ..TestDependencies::new()
        };
        let err = run(&td.deps(), "", ActionRequest::AddPlace(json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::ServiceUnavailable { .. }));
    }

    // ---- validation ----

    #[tokio::test]
    async fn non_object_payload_fails_after_identity_resolution() {
        let td = TestDependencies::new();
        let err = run(&td.deps(), "token", ActionRequest::AddRating(Value::Null))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::BadRequest));
        assert_eq!(td.auth.identity_calls().len(), 1);
        assert_eq!(td.business_call_count(), 0);
    }

    #[tokio::test]
    async fn non_numeric_acceptance_id_is_a_bad_request() {
        let td = TestDependencies::new();
        let err = run(
            &td.deps(),
            "token",
            ActionRequest::DeleteAcceptance("abc".to_string()),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GatewayError::BadRequest));
        assert_eq!(td.places.call_count(), 0);
    }

    // ---- primary-path failure mapping ----

    #[tokio::test]
    async fn upstream_rejection_passes_through() {
        let td = TestDependencies {
            places: Arc::new(
                MockPlacesClient::new()
                    .with_place_error(rejected(409, json!({"error": "duplicate"}))),
            ),
            ..TestDependencies::new()
        };
        let err = run(
            &td.deps(),
            "token",
            ActionRequest::AddPlace(json!({"name": "x"})),
        )
        .await
        .unwrap_err();
        match err {
            GatewayError::Upstream { status, body } => {
                assert_eq!(status, StatusCode::CONFLICT);
                assert_eq!(body, json!({"error": "duplicate"}));
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
        // A failed primary makes no side-effect attempts and emits nothing.
        assert_eq!(td.users.call_count(), 0);
        assert!(td.stats.events().is_empty());
    }

    #[tokio::test]
    async fn shape_mismatch_is_a_bad_request() {
        let td = TestDependencies {
            places: Arc::new(
                MockPlacesClient::new().with_rating_error(ClientError::ShapeMismatch),
            ),
            ..TestDependencies::new()
        };
        let err = run(
            &td.deps(),
            "token",
            ActionRequest::AddRating(json!({"wrong": "fields"})),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GatewayError::BadRequest));
    }

    #[tokio::test]
    async fn transport_failure_is_service_unavailable() {
        let td = TestDependencies {
            places: Arc::new(MockPlacesClient::new().with_acceptance_error(transport())),
            ..TestDependencies::new()
        };
        let err = run(
            &td.deps(),
            "token",
            ActionRequest::AddAcceptance(json!({"place_id": 1})),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            GatewayError::ServiceUnavailable { service: "places" }
        ));
    }

    // ---- side-effect isolation ----

    #[tokio::test]
    async fn side_effect_failures_never_change_a_successful_status() {
        // The default users mock fails both attempts.
        let td = TestDependencies {
            places: Arc::new(MockPlacesClient::new().with_rating(json!({"id": 55}))),
            ..TestDependencies::new()
        };
        let response = run(
            &td.deps(),
            "token",
            ActionRequest::AddRating(json!({"place_id": 1, "stars": 4})),
        )
        .await
        .unwrap();
        assert_eq!(response.status, StatusCode::CREATED);
        let body = response.body.unwrap();
        assert_eq!(body["rating"], json!({"id": 55}));
        assert!(body.get("profile").is_none());
        // Both attempts were still made, in order.
        assert_eq!(td.users.grant_calls().len(), 1);
        assert_eq!(td.users.rating_calls().len(), 1);
    }

    #[tokio::test]
    async fn rating_outcome_wins_when_both_side_effects_succeed() {
        let td = TestDependencies {
            users: Arc::new(
                MockUsersClient::new()
                    .with_grant(json!({"id": 7, "achievements": [2]}))
                    .with_rating(json!({"id": 7, "achievements": [2], "rating": 1999})),
            ),
            ..TestDependencies::new()
        };
        let response = run(
            &td.deps(),
            "token",
            ActionRequest::AddPlace(json!({"name": "x"})),
        )
        .await
        .unwrap();
        let body = response.body.unwrap();
        assert_eq!(
            body["profile"],
            json!({"id": 7, "achievements": [2], "rating": 1999})
        );
    }

    #[tokio::test]
    async fn achievement_outcome_is_kept_when_rating_adjustment_fails() {
        let td = TestDependencies {
            auth: Arc::new(MockAuthClient::new().with_identity(7)),
            places: Arc::new(MockPlacesClient::new().with_place(json!({"id": 99}))),
            users: Arc::new(
                MockUsersClient::new().with_grant(json!({"id": 7, "achievements": [2]})),
            ),
            ..TestDependencies::new()
        };
        let response = run(
            &td.deps(),
            "token",
            ActionRequest::AddPlace(json!({"name": "x"})),
        )
        .await
        .unwrap();
        assert_eq!(response.status, StatusCode::CREATED);
        let body = response.body.unwrap();
        assert_eq!(body["place"], json!({"id": 99}));
        assert_eq!(body["profile"], json!({"id": 7, "achievements": [2]}));
    }

    #[tokio::test]
    async fn app_token_failure_suppresses_both_side_effects() {
        let td = TestDependencies {
            auth: Arc::new(
                MockAuthClient::new()
                    .with_identity(7)
                    .failing_app_token()
                    .failing_app_token(),
            ),
            ..TestDependencies::new()
        };
        let response = run(
            &td.deps(),
            "token",
            ActionRequest::AddPlace(json!({"name": "x"})),
        )
        .await
        .unwrap();
        assert_eq!(response.status, StatusCode::CREATED);
        assert!(response.body.unwrap().get("profile").is_none());
        assert_eq!(td.users.call_count(), 0);
    }

    #[tokio::test]
    async fn side_effects_use_the_app_credential_not_the_user_token() {
        let td = TestDependencies {
            users: Arc::new(
                MockUsersClient::new()
                    .with_grant(json!({"id": 7}))
                    .with_rating(json!({"id": 7})),
            ),
            ..TestDependencies::new()
        };
        run(
            &td.deps(),
            "user-token",
            ActionRequest::AddAcceptance(json!({"place_id": 1})),
        )
        .await
        .unwrap();
        assert_eq!(
            td.auth.app_token_calls(),
            vec![
                ("gateway-app".to_string(), "gateway-secret".to_string()),
                ("gateway-app".to_string(), "gateway-secret".to_string()),
            ]
        );
        assert_eq!(td.users.grant_calls(), vec![(7, 4, "app-token".to_string())]);
        assert_eq!(td.users.rating_calls(), vec![(7, 50, "app-token".to_string())]);
    }

    // ---- deletion ----

    #[tokio::test]
    async fn deletion_returns_no_content_and_no_side_effects_by_default() {
        let td = TestDependencies::new();
        let response = run(
            &td.deps(),
            "token",
            ActionRequest::DeleteAcceptance("12".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert!(response.body.is_none());
        assert_eq!(td.places.delete_calls(), vec![(12, "token".to_string())]);
        assert_eq!(td.users.call_count(), 0);
    }

    #[tokio::test]
    async fn deletion_side_effects_run_when_enabled() {
        let td = TestDependencies {
            users: Arc::new(
                MockUsersClient::new()
                    .with_grant(json!({"id": 7}))
                    .with_rating(json!({"id": 7})),
            ),
            ..TestDependencies::new()
        };
        let response = run(
            &td.deps_with_delete_side_effects(true),
            "token",
            ActionRequest::DeleteAcceptance("12".to_string()),
        )
        .await
        .unwrap();
        // Still 204 with no body; only the attempts change.
        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert!(response.body.is_none());
        assert_eq!(td.users.grant_calls(), vec![(7, 5, "app-token".to_string())]);
        assert_eq!(td.users.rating_calls(), vec![(7, 50, "app-token".to_string())]);
    }

    // ---- buy pin ----

    #[tokio::test]
    async fn buy_pin_debits_the_resolved_pin_under_the_app_credential() {
        let td = TestDependencies {
            awards: Arc::new(MockAwardsClient::new().with_pin(Pin { id: 5, price: 100 })),
            users: Arc::new(MockUsersClient::new().with_debit(json!({"id": 7, "coins": 0}))),
            ..TestDependencies::new()
        };
        let response = run(
            &td.deps(),
            "user-token",
            ActionRequest::BuyPin(json!({"pin_id": 5})),
        )
        .await
        .unwrap();
        assert_eq!(response.status, StatusCode::CREATED);
        // Side effects failed (default users mock), so the body is the
        // debited profile itself.
        assert_eq!(response.body.unwrap(), json!({"id": 7, "coins": 0}));
        assert_eq!(
            td.awards.resolve_calls(),
            vec![(json!({"pin_id": 5}), "user-token".to_string())]
        );
        assert_eq!(
            td.users.debit_calls(),
            vec![(5, 7, 100, "app-token".to_string())]
        );
    }

    #[tokio::test]
    async fn buy_pin_rating_outcome_replaces_the_debited_profile() {
        let td = TestDependencies {
            awards: Arc::new(MockAwardsClient::new().with_pin(Pin { id: 5, price: 100 })),
            users: Arc::new(
                MockUsersClient::new()
                    .with_debit(json!({"id": 7, "coins": 0}))
                    .with_grant(json!({"id": 7, "achievements": [6]}))
                    .with_rating(json!({"id": 7, "achievements": [6], "rating": 600})),
            ),
            ..TestDependencies::new()
        };
        let response = run(
            &td.deps(),
            "token",
            ActionRequest::BuyPin(json!({"pin_id": 5})),
        )
        .await
        .unwrap();
        assert_eq!(
            response.body.unwrap(),
            json!({"id": 7, "achievements": [6], "rating": 600})
        );
    }

    #[tokio::test]
    async fn buy_pin_debit_failure_fails_the_action_without_compensation() {
        let td = TestDependencies {
            awards: Arc::new(MockAwardsClient::new().with_pin(Pin { id: 5, price: 100 })),
            users: Arc::new(MockUsersClient::new().with_debit_error(transport())),
            ..TestDependencies::new()
        };
        let err = run(
            &td.deps(),
            "token",
            ActionRequest::BuyPin(json!({"pin_id": 5})),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            GatewayError::ServiceUnavailable { service: "users" }
        ));
        // Exactly one debit attempt, no further users or awards calls, and
        // no stats emitted for the failed purchase.
        assert_eq!(td.users.debit_calls().len(), 1);
        assert_eq!(td.users.call_count(), 1);
        assert_eq!(td.awards.call_count(), 1);
        assert!(td.stats.events().is_empty());
    }

    // ---- stats emission ----

    #[tokio::test]
    async fn a_successful_action_emits_request_and_achievement_events() {
        let td = TestDependencies {
            users: Arc::new(MockUsersClient::new().with_grant(json!({"id": 7}))),
            ..TestDependencies::new()
        };
        run(
            &td.deps(),
            "token",
            ActionRequest::AddPlace(json!({"name": "x"})),
        )
        .await
        .unwrap();
        let events = td.stats.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0].kind,
            StatsEventKind::Request { method, path, status }
                if method == "POST" && path == "/gateway/add_place/" && *status == 201
        ));
        assert!(matches!(
            events[1].kind,
            StatsEventKind::Achievement { achievement_id: 2 }
        ));
    }

    #[tokio::test]
    async fn failed_side_effects_emit_only_the_request_event() {
        let td = TestDependencies::new();
        run(
            &td.deps(),
            "token",
            ActionRequest::AddRating(json!({"place_id": 1})),
        )
        .await
        .unwrap();
        let events = td.stats.events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0].kind, StatsEventKind::Request { .. }));
    }

    #[tokio::test]
    async fn buy_pin_emits_a_pin_purchase_event() {
        let td = TestDependencies {
            awards: Arc::new(MockAwardsClient::new().with_pin(Pin { id: 5, price: 100 })),
            users: Arc::new(MockUsersClient::new().with_debit(json!({"id": 7}))),
            ..TestDependencies::new()
        };
        run(
            &td.deps(),
            "token",
            ActionRequest::BuyPin(json!({"pin_id": 5})),
        )
        .await
        .unwrap();
        let events = td.stats.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0].kind, StatsEventKind::Request { .. }));
        assert!(matches!(events[1].kind, StatsEventKind::PinPurchase { pin_id: 5 }));
    }

    // ---- assembler ----

    #[test]
    fn assemble_omits_profile_when_both_outcomes_are_absent() {
        let body = assemble("place", json!({"id": 1}), SideEffectOutcome::default());
        assert_eq!(body, json!({"place": {"id": 1}}));
    }

    #[test]
    fn assemble_prefers_the_rating_outcome() {
        let outcome = SideEffectOutcome {
            achievement: Some(json!({"rating": 1})),
            rating: Some(json!({"rating": 2})),
        };
        let body = assemble("accept", json!({"id": 1}), outcome);
        assert_eq!(body["profile"], json!({"rating": 2}));
    }

    #[test]
    fn assemble_falls_back_to_the_achievement_outcome() {
        let outcome = SideEffectOutcome {
            achievement: Some(json!({"rating": 1})),
            rating: None,
        };
        let body = assemble("rating", json!({"id": 1}), outcome);
        assert_eq!(body["profile"], json!({"rating": 1}));
    }
}

// TestDependencies - mock implementations for testing
//
// Provides mock downstream clients that can be injected into GatewayDeps.
// Every mock records its calls so tests can assert that a workflow made
// exactly the downstream calls it was supposed to (and no others).

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use super::{
    BaseAuthClient, BaseAwardsClient, BasePlacesClient, BaseStatsEmitter, BaseUsersClient,
    ClientError, ClientResult, GatewayDeps, StatsEvent,
};
use crate::common::{Pin, Profile, UserIdentity};

fn service_down(what: &str) -> ClientError {
    ClientError::Service(anyhow!("{what} unavailable (mock)"))
}

fn no_response() -> ClientError {
    ClientError::Service(anyhow!("no mock response queued"))
}

// =============================================================================
// Mock Auth Client
// =============================================================================

pub struct MockAuthClient {
    identities: Mutex<Vec<ClientResult<UserIdentity>>>,
    app_tokens: Mutex<Vec<ClientResult<String>>>,
    identity_calls: Mutex<Vec<String>>,
    app_token_calls: Mutex<Vec<(String, String)>>,
}

impl MockAuthClient {
    pub fn new() -> Self {
        Self {
            identities: Mutex::new(Vec::new()),
            app_tokens: Mutex::new(Vec::new()),
            identity_calls: Mutex::new(Vec::new()),
            app_token_calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue an identity to resolve to.
    pub fn with_identity(self, id: i64) -> Self {
        self.identities
            .lock()
            .unwrap()
            .push(Ok(UserIdentity::new(id)));
        self
    }

    /// Queue an identity-resolution failure.
    pub fn failing_identity(self) -> Self {
        self.identities
            .lock()
            .unwrap()
            .push(Err(service_down("auth service")));
        self
    }

    /// Queue an app-level token to hand out.
    pub fn with_app_token(self, token: &str) -> Self {
        self.app_tokens.lock().unwrap().push(Ok(token.to_string()));
        self
    }

    /// Queue an app-token acquisition failure.
    pub fn failing_app_token(self) -> Self {
        self.app_tokens
            .lock()
            .unwrap()
            .push(Err(service_down("auth service")));
        self
    }

    /// Tokens the gateway tried to resolve identities for.
    pub fn identity_calls(&self) -> Vec<String> {
        self.identity_calls.lock().unwrap().clone()
    }

    /// (app_id, app_secret) pairs used to request app tokens.
    pub fn app_token_calls(&self) -> Vec<(String, String)> {
        self.app_token_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseAuthClient for MockAuthClient {
    async fn get_identity(&self, token: &str) -> ClientResult<UserIdentity> {
        self.identity_calls.lock().unwrap().push(token.to_string());

        let mut identities = self.identities.lock().unwrap();
        if !identities.is_empty() {
            identities.remove(0)
        } else {
            Ok(UserIdentity::new(7))
        }
    }

    async fn app_token(&self, app_id: &str, app_secret: &str) -> ClientResult<String> {
        self.app_token_calls
            .lock()
            .unwrap()
            .push((app_id.to_string(), app_secret.to_string()));

        let mut app_tokens = self.app_tokens.lock().unwrap();
        if !app_tokens.is_empty() {
            app_tokens.remove(0)
        } else {
            Ok("app-token".to_string())
        }
    }
}

// =============================================================================
// Mock Places Client
// =============================================================================

pub struct MockPlacesClient {
    place_results: Mutex<Vec<ClientResult<Value>>>,
    rating_results: Mutex<Vec<ClientResult<Value>>>,
    acceptance_results: Mutex<Vec<ClientResult<Value>>>,
    delete_results: Mutex<Vec<ClientResult<()>>>,
    place_calls: Mutex<Vec<(Value, i64, String)>>,
    rating_calls: Mutex<Vec<(Value, i64, String)>>,
    acceptance_calls: Mutex<Vec<(Value, i64, String)>>,
    delete_calls: Mutex<Vec<(i64, String)>>,
}

impl MockPlacesClient {
    pub fn new() -> Self {
        Self {
            place_results: Mutex::new(Vec::new()),
            rating_results: Mutex::new(Vec::new()),
            acceptance_results: Mutex::new(Vec::new()),
            delete_results: Mutex::new(Vec::new()),
            place_calls: Mutex::new(Vec::new()),
            rating_calls: Mutex::new(Vec::new()),
            acceptance_calls: Mutex::new(Vec::new()),
            delete_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_place(self, place: Value) -> Self {
        self.place_results.lock().unwrap().push(Ok(place));
        self
    }

    pub fn with_place_error(self, error: ClientError) -> Self {
        self.place_results.lock().unwrap().push(Err(error));
        self
    }

    pub fn with_rating(self, rating: Value) -> Self {
        self.rating_results.lock().unwrap().push(Ok(rating));
        self
    }

    pub fn with_rating_error(self, error: ClientError) -> Self {
        self.rating_results.lock().unwrap().push(Err(error));
        self
    }

    pub fn with_acceptance(self, acceptance: Value) -> Self {
        self.acceptance_results.lock().unwrap().push(Ok(acceptance));
        self
    }

    pub fn with_acceptance_error(self, error: ClientError) -> Self {
        self.acceptance_results.lock().unwrap().push(Err(error));
        self
    }

    pub fn with_delete_error(self, error: ClientError) -> Self {
        self.delete_results.lock().unwrap().push(Err(error));
        self
    }

    pub fn place_calls(&self) -> Vec<(Value, i64, String)> {
        self.place_calls.lock().unwrap().clone()
    }

    pub fn rating_calls(&self) -> Vec<(Value, i64, String)> {
        self.rating_calls.lock().unwrap().clone()
    }

    pub fn acceptance_calls(&self) -> Vec<(Value, i64, String)> {
        self.acceptance_calls.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> Vec<(i64, String)> {
        self.delete_calls.lock().unwrap().clone()
    }

    /// Total number of calls made to this service.
    pub fn call_count(&self) -> usize {
        self.place_calls.lock().unwrap().len()
            + self.rating_calls.lock().unwrap().len()
            + self.acceptance_calls.lock().unwrap().len()
            + self.delete_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BasePlacesClient for MockPlacesClient {
    async fn create_place(
        &self,
        fields: &Value,
        created_by: i64,
        token: &str,
    ) -> ClientResult<Value> {
        self.place_calls
            .lock()
            .unwrap()
            .push((fields.clone(), created_by, token.to_string()));

        let mut results = self.place_results.lock().unwrap();
        if !results.is_empty() {
            results.remove(0)
        } else {
            Ok(json!({"id": 1}))
        }
    }

    async fn create_rating(
        &self,
        fields: &Value,
        created_by: i64,
        token: &str,
    ) -> ClientResult<Value> {
        self.rating_calls
            .lock()
            .unwrap()
            .push((fields.clone(), created_by, token.to_string()));

        let mut results = self.rating_results.lock().unwrap();
        if !results.is_empty() {
            results.remove(0)
        } else {
            Ok(json!({"id": 1}))
        }
    }

    async fn create_acceptance(
        &self,
        fields: &Value,
        created_by: i64,
        token: &str,
    ) -> ClientResult<Value> {
        self.acceptance_calls
            .lock()
            .unwrap()
            .push((fields.clone(), created_by, token.to_string()));

        let mut results = self.acceptance_results.lock().unwrap();
        if !results.is_empty() {
            results.remove(0)
        } else {
            Ok(json!({"id": 1}))
        }
    }

    async fn delete_acceptance(&self, acceptance_id: i64, token: &str) -> ClientResult<()> {
        self.delete_calls
            .lock()
            .unwrap()
            .push((acceptance_id, token.to_string()));

        let mut results = self.delete_results.lock().unwrap();
        if !results.is_empty() {
            results.remove(0)
        } else {
            Ok(())
        }
    }
}

// =============================================================================
// Mock Users Client
// =============================================================================

/// Mock users service. Unlike the places mock, side-effect operations fail
/// by default so that tests must opt in to successful grants/adjustments.
pub struct MockUsersClient {
    grant_results: Mutex<Vec<ClientResult<Profile>>>,
    rating_results: Mutex<Vec<ClientResult<Profile>>>,
    debit_results: Mutex<Vec<ClientResult<Profile>>>,
    grant_calls: Mutex<Vec<(i64, i64, String)>>,
    rating_calls: Mutex<Vec<(i64, i64, String)>>,
    debit_calls: Mutex<Vec<(i64, i64, i64, String)>>,
}

impl MockUsersClient {
    pub fn new() -> Self {
        Self {
            grant_results: Mutex::new(Vec::new()),
            rating_results: Mutex::new(Vec::new()),
            debit_results: Mutex::new(Vec::new()),
            grant_calls: Mutex::new(Vec::new()),
            rating_calls: Mutex::new(Vec::new()),
            debit_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_grant(self, profile: Profile) -> Self {
        self.grant_results.lock().unwrap().push(Ok(profile));
        self
    }

    pub fn with_rating(self, profile: Profile) -> Self {
        self.rating_results.lock().unwrap().push(Ok(profile));
        self
    }

    pub fn with_debit(self, profile: Profile) -> Self {
        self.debit_results.lock().unwrap().push(Ok(profile));
        self
    }

    pub fn with_debit_error(self, error: ClientError) -> Self {
        self.debit_results.lock().unwrap().push(Err(error));
        self
    }

    /// (user_id, achievement_id, app_token) triples for grant attempts.
    pub fn grant_calls(&self) -> Vec<(i64, i64, String)> {
        self.grant_calls.lock().unwrap().clone()
    }

    /// (user_id, delta, app_token) triples for rating adjustments.
    pub fn rating_calls(&self) -> Vec<(i64, i64, String)> {
        self.rating_calls.lock().unwrap().clone()
    }

    /// (pin_id, user_id, price, app_token) tuples for pin debits.
    pub fn debit_calls(&self) -> Vec<(i64, i64, i64, String)> {
        self.debit_calls.lock().unwrap().clone()
    }

    /// Total number of calls made to this service.
    pub fn call_count(&self) -> usize {
        self.grant_calls.lock().unwrap().len()
            + self.rating_calls.lock().unwrap().len()
            + self.debit_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseUsersClient for MockUsersClient {
    async fn grant_achievement(
        &self,
        user_id: i64,
        achievement_id: i64,
        app_token: &str,
    ) -> ClientResult<Profile> {
        self.grant_calls
            .lock()
            .unwrap()
            .push((user_id, achievement_id, app_token.to_string()));

        let mut results = self.grant_results.lock().unwrap();
        if !results.is_empty() {
            results.remove(0)
        } else {
            Err(no_response())
        }
    }

    async fn adjust_rating(
        &self,
        user_id: i64,
        delta: i64,
        app_token: &str,
    ) -> ClientResult<Profile> {
        self.rating_calls
            .lock()
            .unwrap()
            .push((user_id, delta, app_token.to_string()));

        let mut results = self.rating_results.lock().unwrap();
        if !results.is_empty() {
            results.remove(0)
        } else {
            Err(no_response())
        }
    }

    async fn debit_for_pin(
        &self,
        pin_id: i64,
        user_id: i64,
        price: i64,
        app_token: &str,
    ) -> ClientResult<Profile> {
        self.debit_calls
            .lock()
            .unwrap()
            .push((pin_id, user_id, price, app_token.to_string()));

        let mut results = self.debit_results.lock().unwrap();
        if !results.is_empty() {
            results.remove(0)
        } else {
            Err(no_response())
        }
    }
}

// =============================================================================
// Mock Awards Client
// =============================================================================

pub struct MockAwardsClient {
    pin_results: Mutex<Vec<ClientResult<Pin>>>,
    resolve_calls: Mutex<Vec<(Value, String)>>,
}

impl MockAwardsClient {
    pub fn new() -> Self {
        Self {
            pin_results: Mutex::new(Vec::new()),
            resolve_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_pin(self, pin: Pin) -> Self {
        self.pin_results.lock().unwrap().push(Ok(pin));
        self
    }

    pub fn with_pin_error(self, error: ClientError) -> Self {
        self.pin_results.lock().unwrap().push(Err(error));
        self
    }

    pub fn resolve_calls(&self) -> Vec<(Value, String)> {
        self.resolve_calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.resolve_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseAwardsClient for MockAwardsClient {
    async fn resolve_pin(&self, fields: &Value, token: &str) -> ClientResult<Pin> {
        self.resolve_calls
            .lock()
            .unwrap()
            .push((fields.clone(), token.to_string()));

        let mut results = self.pin_results.lock().unwrap();
        if !results.is_empty() {
            results.remove(0)
        } else {
            Err(no_response())
        }
    }
}

// =============================================================================
// Recording Stats Emitter
// =============================================================================

pub struct RecordingStatsEmitter {
    events: Mutex<Vec<StatsEvent>>,
}

impl RecordingStatsEmitter {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<StatsEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl BaseStatsEmitter for RecordingStatsEmitter {
    fn emit(&self, event: StatsEvent) {
        self.events.lock().unwrap().push(event);
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundle of mock clients that wires into a [`GatewayDeps`] for tests.
///
/// Fields are public so tests can swap in a customized mock with struct
/// update syntax:
///
/// ```ignore
/// let td = TestDependencies {
///     places: Arc::new(MockPlacesClient::new().with_place(json!({"id": 99}))),
///     ..TestDependencies::new()
/// };
/// let deps = td.deps();
/// ```
pub struct TestDependencies {
    pub auth: Arc<MockAuthClient>,
    pub places: Arc<MockPlacesClient>,
    pub users: Arc<MockUsersClient>,
    pub awards: Arc<MockAwardsClient>,
    pub stats: Arc<RecordingStatsEmitter>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            auth: Arc::new(MockAuthClient::new()),
            places: Arc::new(MockPlacesClient::new()),
            users: Arc::new(MockUsersClient::new()),
            awards: Arc::new(MockAwardsClient::new()),
            stats: Arc::new(RecordingStatsEmitter::new()),
        }
    }

    pub fn deps(&self) -> GatewayDeps {
        self.deps_with_delete_side_effects(false)
    }

    pub fn deps_with_delete_side_effects(&self, enabled: bool) -> GatewayDeps {
        GatewayDeps {
            auth: self.auth.clone(),
            places: self.places.clone(),
            users: self.users.clone(),
            awards: self.awards.clone(),
            stats: self.stats.clone(),
            app_id: "gateway-app".to_string(),
            app_secret: "gateway-secret".to_string(),
            delete_side_effects_enabled: enabled,
        }
    }

    /// Calls made to the business services (everything past identity
    /// resolution). Used to assert short-circuit behavior.
    pub fn business_call_count(&self) -> usize {
        self.places.call_count() + self.users.call_count() + self.awards.call_count()
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::http::build_client;
use crate::kernel::{
    AuthClient, AwardsClient, BaseStatsEmitter, GatewayDeps, HttpStatsEmitter, NoopStatsEmitter,
    PlacesClient, UsersClient,
};
use crate::server::routes::{
    add_acceptance_handler, add_place_handler, add_rating_handler, buy_pin_handler,
    delete_acceptance_handler, health_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: GatewayDeps,
}

/// Wire up real downstream clients from configuration.
pub fn build_deps(config: &Config) -> Result<GatewayDeps> {
    let timeout = Duration::from_secs(config.request_timeout_secs);

    let stats: Arc<dyn BaseStatsEmitter> = match &config.stats_base_url {
        Some(base_url) => Arc::new(HttpStatsEmitter::spawn(
            base_url.clone(),
            build_client(timeout)?,
        )),
        None => {
            tracing::info!("STATS_BASE_URL not set, stats events will be dropped");
            Arc::new(NoopStatsEmitter)
        }
    };

    Ok(GatewayDeps {
        auth: Arc::new(AuthClient::new(config.auth_base_url.clone(), timeout)?),
        places: Arc::new(PlacesClient::new(config.places_base_url.clone(), timeout)?),
        users: Arc::new(UsersClient::new(config.users_base_url.clone(), timeout)?),
        awards: Arc::new(AwardsClient::new(config.awards_base_url.clone(), timeout)?),
        stats,
        app_id: config.app_id.clone(),
        app_secret: config.app_secret.clone(),
        delete_side_effects_enabled: config.delete_acceptance_side_effects,
    })
}

/// Build the Axum application router
pub fn build_app(deps: GatewayDeps) -> Router {
    let app_state = AppState { deps };

    // CORS configuration - the gateway fronts browser and mobile clients
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/gateway/add_place/", post(add_place_handler))
        .route("/gateway/add_rating/", post(add_rating_handler))
        .route("/gateway/add_acceptance/", post(add_acceptance_handler))
        .route(
            "/gateway/delete_acceptance/:acceptance_id/",
            delete(delete_acceptance_handler),
        )
        .route("/gateway/buy_pin/", post(buy_pin_handler))
        // Health check (no auth)
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

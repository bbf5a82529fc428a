//! Gateway dependencies for the action workflows (using traits for testability)
//!
//! This module provides the central dependency container shared by every
//! workflow. All downstream services use trait abstractions to enable testing.

use std::sync::Arc;

use super::{
    BaseAuthClient, BaseAwardsClient, BasePlacesClient, BaseStatsEmitter, BaseUsersClient,
};

/// Downstream collaborators plus the process-wide service credentials.
///
/// The credential fields are read-only for the process lifetime; everything
/// request-scoped lives in the workflow itself.
#[derive(Clone)]
pub struct GatewayDeps {
    pub auth: Arc<dyn BaseAuthClient>,
    pub places: Arc<dyn BasePlacesClient>,
    pub users: Arc<dyn BaseUsersClient>,
    pub awards: Arc<dyn BaseAwardsClient>,
    pub stats: Arc<dyn BaseStatsEmitter>,
    /// The gateway's own credentials for app-level token acquisition.
    pub app_id: String,
    pub app_secret: String,
    /// Whether deleting an acceptance also grants/penalizes. Ships disabled.
    pub delete_side_effects_enabled: bool,
}

//! Gateway domain: per-action orchestration over the downstream services.

pub mod actions;
pub mod error;
pub mod workflow;

pub use actions::{GatewayAction, SideEffects};
pub use error::GatewayError;
pub use workflow::{run, ActionRequest, WorkflowResponse};

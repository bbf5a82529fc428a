// Places Gateway - API Core
//
// This crate is the aggregation layer in front of the auth, places, users
// and awards services. Each client-facing action authenticates the caller,
// runs one primary downstream operation, attempts best-effort gamification
// side effects and merges everything into a single composite response.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;

//! Kernel module - gateway infrastructure and dependencies.

pub mod auth_client;
pub mod awards_client;
pub mod deps;
pub mod http;
pub mod places_client;
pub mod stats;
pub mod test_dependencies;
pub mod traits;
pub mod users_client;

pub use auth_client::AuthClient;
pub use awards_client::AwardsClient;
pub use deps::GatewayDeps;
pub use places_client::PlacesClient;
pub use stats::{BaseStatsEmitter, HttpStatsEmitter, NoopStatsEmitter, StatsEvent, StatsEventKind};
pub use test_dependencies::TestDependencies;
pub use traits::*;
pub use users_client::UsersClient;

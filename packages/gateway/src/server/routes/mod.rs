// HTTP routes
pub mod gateway;
pub mod health;

pub use gateway::*;
pub use health::*;

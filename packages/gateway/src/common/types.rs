use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity resolved from a credential token by the auth service.
///
/// Only `id` is interpreted by the gateway; every other field the auth
/// service returns is carried along untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserIdentity {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            extra: Map::new(),
        }
    }
}

/// Purchasable pin resolved by the awards service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    pub id: i64,
    pub price: i64,
}

/// Updated profile object returned by the users service. The gateway never
/// looks inside it; it is forwarded to the client verbatim.
pub type Profile = Value;

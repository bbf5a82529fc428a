//! Per-action parameters for the gateway workflows.
//!
//! The five actions share one orchestration skeleton; everything that
//! differs between them is data in this table.

use axum::http::StatusCode;

/// Best-effort secondary effects attempted after a successful primary action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideEffects {
    pub achievement_id: i64,
    pub rating_delta: i64,
}

/// The five client-facing gateway actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayAction {
    AddPlace,
    AddRating,
    AddAcceptance,
    DeleteAcceptance,
    BuyPin,
}

impl GatewayAction {
    /// Side effects for this action. Deletion carries its parameters in the
    /// table but ships disabled; `delete_enabled` is the configuration point.
    pub fn side_effects(self, delete_enabled: bool) -> Option<SideEffects> {
        match self {
            Self::AddPlace => Some(SideEffects {
                achievement_id: 2,
                rating_delta: 1000,
            }),
            Self::AddRating => Some(SideEffects {
                achievement_id: 3,
                rating_delta: 30,
            }),
            Self::AddAcceptance => Some(SideEffects {
                achievement_id: 4,
                rating_delta: 50,
            }),
            Self::DeleteAcceptance => delete_enabled.then_some(SideEffects {
                achievement_id: 5,
                rating_delta: 50,
            }),
            Self::BuyPin => Some(SideEffects {
                achievement_id: 6,
                rating_delta: 100,
            }),
        }
    }

    /// Key the primary result is embedded under in the composite response.
    /// BuyPin embeds the profile directly and deletion returns no body.
    pub fn result_key(self) -> Option<&'static str> {
        match self {
            Self::AddPlace => Some("place"),
            Self::AddRating => Some("rating"),
            Self::AddAcceptance => Some("accept"),
            Self::DeleteAcceptance | Self::BuyPin => None,
        }
    }

    pub fn success_status(self) -> StatusCode {
        match self {
            Self::DeleteAcceptance => StatusCode::NO_CONTENT,
            _ => StatusCode::CREATED,
        }
    }

    /// Route path, used for request-level stats events.
    pub fn path(self) -> &'static str {
        match self {
            Self::AddPlace => "/gateway/add_place/",
            Self::AddRating => "/gateway/add_rating/",
            Self::AddAcceptance => "/gateway/add_acceptance/",
            Self::DeleteAcceptance => "/gateway/delete_acceptance/",
            Self::BuyPin => "/gateway/buy_pin/",
        }
    }

    pub fn method(self) -> &'static str {
        match self {
            Self::DeleteAcceptance => "DELETE",
            _ => "POST",
        }
    }
}

use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub auth_base_url: String,
    pub places_base_url: String,
    pub users_base_url: String,
    pub awards_base_url: String,
    /// Stats sink is optional; without it events are dropped.
    pub stats_base_url: Option<String>,
    pub app_id: String,
    pub app_secret: String,
    /// Bounded timeout applied to every downstream call, in seconds.
    pub request_timeout_secs: u64,
    /// Whether deleting an acceptance also grants/penalizes. Ships off.
    pub delete_acceptance_side_effects: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            auth_base_url: env::var("AUTH_BASE_URL")
                .context("AUTH_BASE_URL must be set")?,
            places_base_url: env::var("PLACES_BASE_URL")
                .context("PLACES_BASE_URL must be set")?,
            users_base_url: env::var("USERS_BASE_URL")
                .context("USERS_BASE_URL must be set")?,
            awards_base_url: env::var("AWARDS_BASE_URL")
                .context("AWARDS_BASE_URL must be set")?,
            stats_base_url: env::var("STATS_BASE_URL").ok(),
            app_id: env::var("APP_ID").context("APP_ID must be set")?,
            app_secret: env::var("APP_SECRET").context("APP_SECRET must be set")?,
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("REQUEST_TIMEOUT_SECS must be a valid number")?,
            delete_acceptance_side_effects: env::var("DELETE_ACCEPTANCE_SIDE_EFFECTS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}

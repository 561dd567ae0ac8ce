//! Application configuration loaded from environment variables.
//!
//! Read once at startup; the data store client is built from it and never
//! reconfigured.

use crate::models::Profile;
use std::env;

/// Table read when `SUPABASE_TABLE` is not set.
pub const DEFAULT_TABLE: &str = "Zapier";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Supabase project URL (e.g. `https://xyz.supabase.co`)
    pub supabase_url: String,
    /// Supabase access key (anon or service role)
    pub supabase_key: String,
    /// Table to read rows from
    pub table: String,
    /// Which column mapping the dashboard uses
    pub profile: Profile,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            supabase_url: "http://127.0.0.1:54321".to_string(),
            supabase_key: "test_key".to_string(),
            table: DEFAULT_TABLE.to_string(),
            profile: Profile::Activities,
            port: 8080,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let profile = match env::var("DASHBOARD_PROFILE") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "DASHBOARD_PROFILE",
                value: raw,
            })?,
            Err(_) => Profile::Activities,
        };

        Ok(Self {
            supabase_url: env::var("SUPABASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("SUPABASE_URL"))?,
            supabase_key: env::var("SUPABASE_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("SUPABASE_KEY"))?,
            table: env::var("SUPABASE_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string()),
            profile,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

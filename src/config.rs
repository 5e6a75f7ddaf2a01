// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_MAP_BASE_URL: &str = "https://www.google.com";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Public origin of this deployment, used to build tracking URLs
    pub public_origin: String,
    /// Map provider origin for deep links
    pub map_base_url: String,
    /// Hosted record store, if configured. `None` means in-memory.
    pub supabase: Option<SupabaseConfig>,
}

/// Connection settings for the hosted record store.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyzcompany.supabase.co`
    pub url: String,
    /// Anonymous (public) API key
    pub anon_key: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            public_origin: "http://localhost:8080".to_string(),
            map_base_url: DEFAULT_MAP_BASE_URL.to_string(),
            supabase: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let supabase = match (non_empty_var("SUPABASE_URL"), non_empty_var("SUPABASE_ANON_KEY")) {
            (Some(url), Some(anon_key)) => Some(SupabaseConfig {
                url: trim_origin(&url),
                anon_key: anon_key.trim().to_string(),
            }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Incomplete("SUPABASE_ANON_KEY")),
            (None, Some(_)) => return Err(ConfigError::Incomplete("SUPABASE_URL")),
        };

        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            public_origin: trim_origin(
                &env::var("PUBLIC_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string()),
            ),
            map_base_url: trim_origin(
                &env::var("MAP_BASE_URL").unwrap_or_else(|_| DEFAULT_MAP_BASE_URL.to_string()),
            ),
            supabase,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Strip surrounding whitespace and trailing slashes from an origin.
pub fn trim_origin(origin: &str) -> String {
    origin.trim().trim_end_matches('/').to_string()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Incomplete record store configuration: missing {0}")]
    Incomplete(&'static str),
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Configuration loaded from environment variables (and `.env` if present).
//!
//! Everything here is static for the lifetime of the process.

use std::env;
use std::fmt;
use std::path::PathBuf;

/// Default Strava OAuth token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://www.strava.com/oauth/token";
/// Default Strava REST API base.
pub const DEFAULT_API_BASE_URL: &str = "https://www.strava.com/api/v3";
/// Default location of the append-only debug log.
pub const DEFAULT_DEBUG_LOG_PATH: &str = "debug.txt";

/// Application configuration, loaded once at startup.
#[derive(Clone)]
pub struct Config {
    /// Strava OAuth client ID (public)
    pub strava_client_id: String,
    /// Strava OAuth client secret
    pub strava_client_secret: String,
    /// Long-lived refresh token for the athlete
    pub strava_refresh_token: String,
    /// OAuth token endpoint
    pub token_url: String,
    /// API base URL, without trailing slash
    pub api_base_url: String,
    /// Gear to assign to the most recent activity
    pub gear_id: Option<String>,
    /// Where update records are appended
    pub debug_log_path: PathBuf,
    /// Refuse to call the API without an access token
    pub strict_auth: bool,
    /// Attempts per HTTP call (transport failures only)
    pub http_attempts: u32,
    /// Emit JSON log lines instead of human-readable text
    pub json_logs: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("strava_client_id", &self.strava_client_id)
            .field("strava_client_secret", &"<redacted>")
            .field("strava_refresh_token", &"<redacted>")
            .field("token_url", &self.token_url)
            .field("api_base_url", &self.api_base_url)
            .field("gear_id", &self.gear_id)
            .field("debug_log_path", &self.debug_log_path)
            .field("strict_auth", &self.strict_auth)
            .field("http_attempts", &self.http_attempts)
            .field("json_logs", &self.json_logs)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_env_with(|k| env::var(k).ok())
    }

    /// Build configuration through an arbitrary lookup, so tests don't have
    /// to touch the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut required = |name: &'static str| {
            get(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let strava_client_id = required("STRAVA_CLIENT_ID")?;
        let strava_client_secret = required("STRAVA_CLIENT_SECRET")?;
        let strava_refresh_token = required("STRAVA_REFRESH_TOKEN")?;

        let optional = |get: &mut F, name: &str| {
            get(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let token_url =
            optional(&mut get, "STRAVA_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());
        let api_base_url = optional(&mut get, "STRAVA_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let gear_id = optional(&mut get, "STRAVA_GEAR_ID");
        let debug_log_path = optional(&mut get, "DEBUG_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DEBUG_LOG_PATH));

        let strict_auth = match optional(&mut get, "STRICT_AUTH") {
            Some(v) => parse_bool("STRICT_AUTH", &v)?,
            None => false,
        };

        let http_attempts = match optional(&mut get, "HTTP_ATTEMPTS") {
            Some(v) => v
                .parse::<u32>()
                .map_err(|_| ConfigError::Invalid {
                    name: "HTTP_ATTEMPTS",
                    value: v.clone(),
                })?
                .max(1),
            None => 1,
        };

        let json_logs = optional(&mut get, "LOG_FORMAT")
            .is_some_and(|v| v.eq_ignore_ascii_case("json"));

        Ok(Self {
            strava_client_id,
            strava_client_secret,
            strava_refresh_token,
            token_url,
            api_base_url,
            gear_id,
            debug_log_path,
            strict_auth,
            http_attempts,
            json_logs,
        })
    }

    /// Configuration pointing at a local mock server, for tests.
    pub fn test_default(server_uri: &str, debug_log_path: PathBuf) -> Self {
        Self {
            strava_client_id: "test_client_id".to_string(),
            strava_client_secret: "test_secret".to_string(),
            strava_refresh_token: "test_refresh_token".to_string(),
            token_url: format!("{}/oauth/token", server_uri),
            api_base_url: format!("{}/api/v3", server_uri),
            gear_id: Some("b123".to_string()),
            debug_log_path,
            strict_auth: false,
            http_attempts: 1,
            json_logs: false,
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
        }),
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

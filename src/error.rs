// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Every variant that comes from a Strava response keeps the raw status code
//! and body so the driver can print them exactly as received.

/// Application error type shared by all services.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Error refreshing token: {status}, {body}")]
    Auth { status: u16, body: String },

    #[error("Error fetching activities: {status}, {body}")]
    Fetch { status: u16, body: String },

    #[error("Error updating activity: {status}, Response: {body}")]
    Update { status: u16, body: String },

    #[error("No access token available")]
    MissingToken,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Strava request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(String),

    #[error("Failed to write debug log: {0}")]
    AuditLog(#[from] std::io::Error),
}

impl AppError {
    /// HTTP status Strava answered with, if the error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Auth { status, .. }
            | AppError::Fetch { status, .. }
            | AppError::Update { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error means the credential was missing or rejected.
    pub fn is_token_error(&self) -> bool {
        match self {
            AppError::Auth { .. } | AppError::MissingToken => true,
            AppError::Fetch { status, .. } | AppError::Update { status, .. } => *status == 401,
            _ => false,
        }
    }
}

/// Result type alias for services
pub type Result<T> = std::result::Result<T, AppError>;

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth token endpoint response.

use serde::Deserialize;

/// Token refresh response from Strava. The rotated refresh token is not
/// kept: the configured one is reused on every run.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRefreshResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

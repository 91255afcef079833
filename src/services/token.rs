// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Refresh-token exchange.

use crate::error::Result;
use crate::services::StravaClient;
use crate::session::Session;

/// Mints a short-lived access token from the long-lived refresh token.
#[derive(Clone)]
pub struct TokenRefresher {
    client: StravaClient,
    refresh_token: String,
}

impl TokenRefresher {
    pub fn new(client: StravaClient, refresh_token: String) -> Self {
        Self {
            client,
            refresh_token,
        }
    }

    /// Exchange the refresh token once and store the result in `session`.
    ///
    /// On failure the session is left untouched and the error is logged here;
    /// callers decide whether to carry on.
    pub async fn refresh(&self, session: &mut Session) -> Result<()> {
        match self.client.refresh_token(&self.refresh_token).await {
            Ok(tokens) => {
                tracing::info!(
                    expires_at = tokens.expires_at,
                    "Access token refreshed successfully."
                );
                tracing::debug!(access_token = %tokens.access_token, "New access token");
                session.set_access_token(tokens.access_token);
                Ok(())
            }
            Err(e) => {
                tracing::error!(status = e.status(), "{}", e);
                Err(e)
            }
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-run session state.
//!
//! Owned by the driver and passed to each service call. The access token is
//! set by a successful refresh and read by every later call.

/// Access token holder for one run of the pipeline.
#[derive(Default)]
pub struct Session {
    access_token: Option<String>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("has_access_token", &self.has_access_token())
            .finish()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly minted access token. Empty tokens are ignored.
    pub fn set_access_token(&mut self, token: String) {
        if !token.is_empty() {
            self.access_token = Some(token);
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Token to put in the bearer header. Empty when no refresh has
    /// succeeded; the API rejects it with 401.
    pub fn bearer(&self) -> &str {
        self.access_token.as_deref().unwrap_or_default()
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for the three calls this tool makes.
//!
//! Handles:
//! - Refresh-token exchange at the OAuth endpoint
//! - Listing the athlete's activities (first page only)
//! - Updating an activity's gear, commute and visibility flags
//!
//! Success is exactly HTTP 200. Any other status is returned as a typed
//! error carrying the status code and raw body.

use crate::config::{Config, DEFAULT_API_BASE_URL, DEFAULT_TOKEN_URL};
use crate::error::{AppError, Result};
use crate::models::{ActivitySummary, TokenRefreshResponse, UpdateRequest, UpdatedActivity};
use crate::retry::RetryPolicy;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    token_url: String,
    client_id: String,
    client_secret: String,
    retry: RetryPolicy,
}

/// Raw outcome of a successful activity update.
#[derive(Debug, Clone)]
pub struct UpdateResponse {
    pub status: u16,
    /// Body exactly as received, for the debug log
    pub body: String,
    pub activity: UpdatedActivity,
}

impl StravaClient {
    /// Create a new Strava client with OAuth credentials against the public API.
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            client_id,
            client_secret,
            retry: RetryPolicy::single(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.strava_client_id.clone(),
            config.strava_client_secret.clone(),
        )
        .with_urls(&config.api_base_url, &config.token_url)
        .with_retry(RetryPolicy::with_attempts(config.http_attempts))
    }

    /// Point the client at different endpoints (mock servers in tests).
    pub fn with_urls(mut self, base_url: &str, token_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self.token_url = token_url.to_string();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Exchange a refresh token for a new access token.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenRefreshResponse> {
        let response = self
            .retry
            .run(|| {
                self.http
                    .post(&self.token_url)
                    .form(&[
                        ("client_id", self.client_id.as_str()),
                        ("client_secret", self.client_secret.as_str()),
                        ("grant_type", "refresh_token"),
                        ("refresh_token", refresh_token),
                    ])
                    .send()
            })
            .await?;

        let (status, body) = read_response(response).await?;
        if status != StatusCode::OK {
            return Err(AppError::Auth {
                status: status.as_u16(),
                body,
            });
        }

        parse_json(&body)
    }

    /// List the athlete's activities, most recent first (first page only).
    pub async fn list_activities(&self, access_token: &str) -> Result<Vec<ActivitySummary>> {
        let url = format!("{}/athlete/activities", self.base_url);

        let response = self
            .retry
            .run(|| self.http.get(&url).bearer_auth(access_token).send())
            .await?;

        let (status, body) = read_response(response).await?;
        if status != StatusCode::OK {
            return Err(AppError::Fetch {
                status: status.as_u16(),
                body,
            });
        }

        parse_json(&body)
    }

    /// Apply a sparse update to an activity.
    pub async fn update_activity(
        &self,
        access_token: &str,
        activity_id: u64,
        update: &UpdateRequest,
    ) -> Result<UpdateResponse> {
        let url = format!("{}/activities/{}", self.base_url, activity_id);

        let response = self
            .retry
            .run(|| {
                self.http
                    .put(&url)
                    .bearer_auth(access_token)
                    .json(update)
                    .send()
            })
            .await?;

        let (status, body) = read_response(response).await?;
        if status != StatusCode::OK {
            return Err(AppError::Update {
                status: status.as_u16(),
                body,
            });
        }

        let activity = parse_json(&body)?;
        Ok(UpdateResponse {
            status: status.as_u16(),
            body,
            activity,
        })
    }
}

/// Read status and the full body as text.
async fn read_response(response: reqwest::Response) -> Result<(StatusCode, String)> {
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| AppError::Parse(e.to_string()))
}

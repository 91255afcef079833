// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Driver: refresh, fetch the most recent activity, update it.
//!
//! Every step runs once, in order, on the caller's task.

use crate::config::Config;
use crate::error::AppError;
use crate::services::audit::{AuditLog, FileAuditLog};
use crate::services::{
    ActivityFetcher, ActivityUpdater, StravaClient, TokenRefresher, UpdateOutcome,
};
use crate::session::Session;
use std::sync::Arc;

/// The driver always marks the activity as a commute.
pub const MARK_COMMUTE: bool = true;
/// The driver never hides the activity from the home feed.
pub const MARK_MUTED: bool = false;

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The most recent activity was updated.
    Updated(UpdateOutcome),
    /// The athlete has no activities; nothing was updated.
    NoActivity,
    /// A step failed; later steps were skipped.
    Aborted(AppError),
}

/// The three-step tagging pipeline.
pub struct Pipeline {
    refresher: TokenRefresher,
    fetcher: ActivityFetcher,
    updater: ActivityUpdater,
    gear_id: Option<String>,
    strict_auth: bool,
}

impl Pipeline {
    pub fn new(
        client: StravaClient,
        refresh_token: String,
        audit: Arc<dyn AuditLog>,
        gear_id: Option<String>,
        strict_auth: bool,
    ) -> Self {
        let refresher = TokenRefresher::new(client.clone(), refresh_token);
        Self {
            fetcher: ActivityFetcher::new(client.clone(), refresher.clone(), strict_auth),
            updater: ActivityUpdater::new(client, audit, strict_auth),
            refresher,
            gear_id,
            strict_auth,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            StravaClient::from_config(config),
            config.strava_refresh_token.clone(),
            Arc::new(FileAuditLog::new(config.debug_log_path.clone())),
            config.gear_id.clone(),
            config.strict_auth,
        )
    }

    pub async fn run(&self) -> RunOutcome {
        let mut session = Session::new();

        // A failed refresh only stops the run in strict mode; otherwise the
        // fetch below tries again and then goes ahead with whatever it has.
        if let Err(e) = self.refresher.refresh(&mut session).await {
            if self.strict_auth {
                return RunOutcome::Aborted(e);
            }
        }

        let activity = match self.fetcher.fetch_most_recent(&mut session).await {
            Ok(Some(activity)) => activity,
            Ok(None) => return RunOutcome::NoActivity,
            Err(e) => return RunOutcome::Aborted(e),
        };

        tracing::info!(
            activity_id = activity.id,
            "Most recent activity ID: {}, Name: {}",
            activity.id,
            activity.name
        );

        match self
            .updater
            .update(
                &session,
                activity.id,
                self.gear_id.as_deref(),
                MARK_COMMUTE,
                MARK_MUTED,
            )
            .await
        {
            Ok(outcome) => RunOutcome::Updated(outcome),
            Err(e) => RunOutcome::Aborted(e),
        }
    }
}

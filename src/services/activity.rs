// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity services.
//!
//! - `ActivityFetcher` picks the most recent activity from the list endpoint
//! - `ActivityUpdater` applies gear/commute/visibility changes and records
//!   each successful update in the debug log

use crate::error::{AppError, Result};
use crate::models::{ActivitySummary, GearReport, UpdateRequest};
use crate::services::audit::{AuditLog, AuditRecord};
use crate::services::{StravaClient, TokenRefresher};
use crate::session::Session;
use std::sync::Arc;

/// Finds the athlete's most recent activity.
#[derive(Clone)]
pub struct ActivityFetcher {
    client: StravaClient,
    refresher: TokenRefresher,
    strict_auth: bool,
}

impl ActivityFetcher {
    pub fn new(client: StravaClient, refresher: TokenRefresher, strict_auth: bool) -> Self {
        Self {
            client,
            refresher,
            strict_auth,
        }
    }

    /// Return the first activity of the list, trusting Strava's newest-first
    /// ordering. `Ok(None)` means the athlete has no activities.
    ///
    /// Refreshes the token first if the session has none.
    pub async fn fetch_most_recent(
        &self,
        session: &mut Session,
    ) -> Result<Option<ActivitySummary>> {
        if !session.has_access_token() {
            // Failure is already logged by the refresher
            let _ = self.refresher.refresh(session).await;
        }

        if self.strict_auth && !session.has_access_token() {
            tracing::error!("Refusing to fetch activities without an access token");
            return Err(AppError::MissingToken);
        }

        let activities = match self.client.list_activities(session.bearer()).await {
            Ok(a) => a,
            Err(e) => {
                tracing::error!(status = e.status(), "{}", e);
                return Err(e);
            }
        };

        let most_recent = activities.into_iter().next();
        if most_recent.is_none() {
            tracing::info!("No activities found.");
        }
        Ok(most_recent)
    }
}

/// Result of a successful update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub activity_id: u64,
    /// Payload that was sent
    pub request: UpdateRequest,
    /// Gear mileage, if the response carried gear
    pub gear: Option<GearReport>,
}

/// Applies metadata changes to one activity.
#[derive(Clone)]
pub struct ActivityUpdater {
    client: StravaClient,
    audit: Arc<dyn AuditLog>,
    strict_auth: bool,
}

impl ActivityUpdater {
    pub fn new(client: StravaClient, audit: Arc<dyn AuditLog>, strict_auth: bool) -> Self {
        Self {
            client,
            audit,
            strict_auth,
        }
    }

    /// Update an activity's gear, commute flag and home-feed visibility.
    ///
    /// An empty `gear_id` leaves the gear unchanged. Flags are only sent when
    /// true. Only a 200 response is written to the debug log.
    pub async fn update(
        &self,
        session: &Session,
        activity_id: u64,
        gear_id: Option<&str>,
        commute: bool,
        mute: bool,
    ) -> Result<UpdateOutcome> {
        if activity_id == 0 {
            return Err(AppError::BadRequest(
                "activity id must be positive".to_string(),
            ));
        }

        if self.strict_auth && !session.has_access_token() {
            tracing::error!(
                activity_id,
                "Refusing to update activity without an access token"
            );
            return Err(AppError::MissingToken);
        }

        let request = UpdateRequest::new(gear_id, commute, mute);

        let response = match self
            .client
            .update_activity(session.bearer(), activity_id, &request)
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(activity_id, status = e.status(), "{}", e);
                return Err(e);
            }
        };

        tracing::info!(activity_id, "Activity {} updated successfully.", activity_id);

        let gear = response.activity.gear.as_ref().map(|g| g.report());
        match &gear {
            Some(report) => {
                tracing::info!("{}", report.updated_line());
                tracing::info!(
                    miles = report.miles,
                    km = report.km,
                    "{}",
                    report.mileage_line()
                );
            }
            None => tracing::info!("Gear information not included"),
        }

        let record = AuditRecord {
            activity_id,
            payload: request.to_json(),
            status: response.status,
            response_body: response.body,
        };
        self.audit.append_record(&record)?;

        Ok(UpdateOutcome {
            activity_id,
            request,
            gear,
        })
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - Strava calls and the debug log.

pub mod activity;
pub mod audit;
pub mod strava;
pub mod token;

pub use activity::{ActivityFetcher, ActivityUpdater, UpdateOutcome};
pub use audit::{AuditLog, AuditRecord, FileAuditLog};
pub use strava::StravaClient;
pub use token::TokenRefresher;

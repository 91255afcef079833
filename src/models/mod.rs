// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the Strava API.

pub mod activity;
pub mod token;
pub mod update;

pub use activity::{ActivitySummary, Gear, GearReport, UpdatedActivity};
pub use token::TokenRefreshResponse;
pub use update::UpdateRequest;

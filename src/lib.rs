// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Commute tagger: mark the most recent Strava activity as a commute
//!
//! Refreshes an OAuth access token, picks the athlete's newest activity and
//! sets its gear, commute and visibility flags, reporting the bike's total
//! mileage afterwards.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod retry;
pub mod services;
pub mod session;
pub mod units;

pub use pipeline::{Pipeline, RunOutcome};
pub use session::Session;

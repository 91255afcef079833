// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Commute tagger CLI
//!
//! Tags the most recent Strava activity with a bike and the commute flag.

use commute_tagger::{config::Config, error::AppError, Pipeline, RunOutcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;

    init_logging(config.json_logs);
    tracing::debug!(?config, "Configuration loaded");

    match Pipeline::from_config(&config).run().await {
        RunOutcome::Updated(outcome) => {
            tracing::debug!(activity_id = outcome.activity_id, "Run complete");
        }
        RunOutcome::NoActivity => {}
        RunOutcome::Aborted(e @ AppError::AuditLog(_)) => return Err(e.into()),
        RunOutcome::Aborted(e) => {
            tracing::debug!(error = %e, "Run stopped early");
        }
    }

    Ok(())
}

/// Initialize logging: human-readable by default, flattened JSON on request.
fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("commute_tagger=info"));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}

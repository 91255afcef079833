// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Attempt policy for HTTP calls.
//!
//! The default is a single attempt. Extra attempts only cover transport
//! failures; an HTTP status from Strava is an answer, not a failure to retry.

use rand::Rng;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, at least 1
    pub attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::single()
    }
}

impl RetryPolicy {
    pub fn single() -> Self {
        Self::with_attempts(1)
    }

    pub fn with_attempts(attempts: u32) -> Self {
        Self {
            attempts: attempts.max(1),
            base_delay: Duration::from_millis(250),
        }
    }

    /// Run `f` until it succeeds or attempts are exhausted, with exponential
    /// backoff and jitter between attempts.
    pub async fn run<F, Fut, T>(&self, mut f: F) -> Result<T, reqwest::Error>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, reqwest::Error>>,
    {
        let mut attempt = 1u32;
        loop {
            match f().await {
                Ok(v) => return Ok(v),
                Err(e) if attempt >= self.attempts => return Err(e),
                Err(e) => {
                    let delay = self.backoff(attempt);
                    tracing::warn!(
                        error = %e,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Strava request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    fn backoff(&self, attempt: u32) -> Duration {
        let max_delay = self.base_delay * (1u32 << attempt.min(10));
        let max_ms = max_delay.as_millis().max(1) as u64;
        let jitter = rand::rng().random_range(0..max_ms);
        Duration::from_millis(jitter)
    }
}

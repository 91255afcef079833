// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Console diagnostics printed along each pipeline branch.

use commute_tagger::{Pipeline, RunOutcome};
use serde_json::json;
use std::io;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{mount_activities, mount_token_ok, test_config};

/// Shared buffer the test subscriber writes formatted events into.
#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Install a plain-text subscriber for the current thread.
fn capture_console() -> (CapturedOutput, tracing::subscriber::DefaultGuard) {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (output, guard)
}

#[tokio::test]
async fn test_refresh_failure_is_reported_then_fetch_proceeds() {
    let (output, _guard) = capture_console();
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = Pipeline::from_config(&config).run().await;
    assert!(matches!(outcome, RunOutcome::Aborted(_)));

    let console = output.contents();
    // Driver refresh, then the fetcher's own attempt
    assert_eq!(console.matches("Error refreshing token: 401, bad").count(), 2);
    assert!(console.contains("Error fetching activities: 401, unauthorized"));
    assert!(!console.contains("Most recent activity ID"));
}

#[tokio::test]
async fn test_empty_list_is_reported() {
    let (output, _guard) = capture_console();
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());

    mount_token_ok(&server).await;
    mount_activities(&server, json!([])).await;

    let outcome = Pipeline::from_config(&config).run().await;
    assert!(matches!(outcome, RunOutcome::NoActivity));

    let console = output.contents();
    assert!(console.contains("Access token refreshed successfully."));
    assert!(console.contains("No activities found."));
    assert!(!console.contains("updated successfully"));
}

#[tokio::test]
async fn test_gear_mileage_is_reported() {
    let (output, _guard) = capture_console();
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());

    mount_token_ok(&server).await;
    mount_activities(&server, json!([{"id": 555, "name": "Morning Ride"}])).await;
    Mock::given(method("PUT"))
        .and(path("/api/v3/activities/555"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 555,
            "gear": {"nickname": "Trusty", "name": "Trek", "converted_distance": 50.0}
        })))
        .mount(&server)
        .await;

    let outcome = Pipeline::from_config(&config).run().await;
    assert!(matches!(outcome, RunOutcome::Updated(_)));

    let console = output.contents();
    assert!(console.contains("Most recent activity ID: 555, Name: Morning Ride"));
    assert!(console.contains("Activity 555 updated successfully."));
    assert!(console.contains("Updated gear: Trusty"));
    assert!(console.contains("Total mileage on Trusty: 50.0 miles (80.45 km)"));
    assert!(!console.contains("Gear information not included"));
}

#[tokio::test]
async fn test_missing_gear_is_reported() {
    let (output, _guard) = capture_console();
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());

    mount_token_ok(&server).await;
    mount_activities(&server, json!([{"id": 555, "name": "Morning Ride"}])).await;
    Mock::given(method("PUT"))
        .and(path("/api/v3/activities/555"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 555})))
        .mount(&server)
        .await;

    Pipeline::from_config(&config).run().await;

    assert!(output.contents().contains("Gear information not included"));
}

#[tokio::test]
async fn test_update_failure_is_reported() {
    let (output, _guard) = capture_console();
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path());

    mount_token_ok(&server).await;
    mount_activities(&server, json!([{"id": 555, "name": "Morning Ride"}])).await;
    Mock::given(method("PUT"))
        .and(path("/api/v3/activities/555"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Record Not Found"))
        .mount(&server)
        .await;

    Pipeline::from_config(&config).run().await;

    assert!(output
        .contents()
        .contains("Error updating activity: 404, Response: Record Not Found"));
}

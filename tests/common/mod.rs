// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use commute_tagger::config::Config;
use serde_json::json;
use std::path::Path;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "fresh_access_token";

/// Config pointing at the mock server, logging updates under `dir`.
#[allow(dead_code)]
pub fn test_config(server: &MockServer, dir: &Path) -> Config {
    Config::test_default(&server.uri(), dir.join("debug.txt"))
}

/// Token endpoint that always hands out `ACCESS_TOKEN`.
#[allow(dead_code)]
pub async fn mount_token_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "access_token": ACCESS_TOKEN,
            "expires_at": 1_900_000_000,
            "expires_in": 21600,
            "refresh_token": "test_refresh_token"
        })))
        .mount(server)
        .await;
}

/// Activities list endpoint returning `body` with status 200.
#[allow(dead_code)]
pub async fn mount_activities(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Read the debug log, or an empty string if it was never created.
#[allow(dead_code)]
pub fn read_debug_log(config: &Config) -> String {
    std::fs::read_to_string(&config.debug_log_path).unwrap_or_default()
}

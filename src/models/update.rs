// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sparse activity update payload.

use serde::Serialize;

/// Fields to change on an activity. Only fields that are set are sent;
/// nothing is ever sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gear_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commute: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_from_home: Option<bool>,
}

impl UpdateRequest {
    /// Build a request from driver inputs. An empty gear id is omitted and
    /// any other value is sent as given. Flags are only included when true.
    pub fn new(gear_id: Option<&str>, commute: bool, mute: bool) -> Self {
        Self {
            gear_id: gear_id.filter(|g| !g.is_empty()).map(str::to_string),
            commute: commute.then_some(true),
            hide_from_home: mute.then_some(true),
        }
    }

    /// Compact JSON as sent on the wire.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity and gear models as returned by the API.

use crate::units::{format_distance, miles_to_km};
use serde::Deserialize;

/// Summary activity from the athlete activities list.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ActivitySummary {
    /// Strava activity ID
    pub id: u64,
    /// Activity name/title
    pub name: String,
}

/// Activity returned by the update endpoint. Only the parts we report on.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatedActivity {
    pub id: Option<u64>,
    pub name: Option<String>,
    /// Gear attached to the activity; `null` and missing are both "no gear"
    #[serde(default)]
    pub gear: Option<Gear>,
}

/// User-owned equipment attached to an activity.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Gear {
    pub name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    /// Cumulative distance in the athlete's preferred unit (miles here)
    pub converted_distance: f64,
}

impl Gear {
    /// Nickname if set, otherwise the gear name.
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.name)
    }

    pub fn report(&self) -> GearReport {
        GearReport {
            name: self.display_name().to_string(),
            miles: self.converted_distance,
            km: miles_to_km(self.converted_distance),
        }
    }
}

/// Mileage summary printed after a successful update.
#[derive(Debug, Clone, PartialEq)]
pub struct GearReport {
    pub name: String,
    pub miles: f64,
    pub km: f64,
}

impl GearReport {
    pub fn updated_line(&self) -> String {
        format!("Updated gear: {}", self.name)
    }

    pub fn mileage_line(&self) -> String {
        format!(
            "Total mileage on {}: {} miles ({} km)",
            self.name,
            format_distance(self.miles),
            format_distance(self.km)
        )
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for distance conversion and display.

/// Fixed miles-to-kilometers multiplier used for gear mileage reports.
pub const MILES_TO_KM: f64 = 1.609;

/// Convert a distance in miles to kilometers.
pub fn miles_to_km(miles: f64) -> f64 {
    miles * MILES_TO_KM
}

/// Format a mileage value in plain decimal notation using its shortest
/// round-trip digits, always keeping a decimal point (`50.0`, `80.45`).
/// Never switches to exponent notation, even for tiny values.
pub fn format_distance(value: f64) -> String {
    let s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        format!("{}.0", s)
    } else {
        s
    }
}

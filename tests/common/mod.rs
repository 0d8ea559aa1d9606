// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Utc};

use jsondate::{DateValue, Value};

// ============================================================================
// Date Fixtures
// ============================================================================

/// Date parsed from an RFC 3339 literal.
pub fn iso(s: &str) -> DateValue {
    DateTime::parse_from_rfc3339(s).expect("valid RFC 3339 fixture")
}

/// Date at `millis` since the Unix epoch.
pub fn epoch(millis: i64) -> DateValue {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .expect("millis in range")
        .fixed_offset()
}

/// Assert that `value` is a revived date equal to `expected`.
pub fn assert_date(value: Option<&Value>, expected: DateValue) {
    match value {
        Some(Value::Date(actual)) => assert_eq!(*actual, expected),
        other => panic!("expected date {expected}, got {other:?}"),
    }
}

// ============================================================================
// Process-wide State
// ============================================================================

/// Restores the legacy flag and the global decoder when dropped.
///
/// Tests holding one must also be `#[serial]`.
pub struct GlobalStateGuard {
    legacy: bool,
}

impl GlobalStateGuard {
    /// Capture the current state and set the legacy flag.
    pub fn with_legacy(enabled: bool) -> Self {
        let guard = Self {
            legacy: jsondate::config::parse_ms_ajax_date(),
        };
        jsondate::config::set_parse_ms_ajax_date(enabled);
        guard
    }
}

impl Drop for GlobalStateGuard {
    fn drop(&mut self) {
        jsondate::config::set_parse_ms_ajax_date(self.legacy);
        jsondate::reset_date_parser();
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Standalone string-to-date conversion.
//!
//! Converts a bare date string, a JSON string literal cut out of a larger
//! document, or an already-revived [`Value::Date`] into a date without running
//! a full decode.

use crate::config;
use crate::core::{DateValue, Value};

use super::pattern::{iso_to_date, IsoPattern, LegacyEpochPattern};

/// Converter for single values.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateConverter {
    legacy_epoch: Option<bool>,
}

impl DateConverter {
    /// Create a converter that follows the process-wide legacy flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force legacy `/Date(ms)/` recognition on or off for this converter.
    pub fn legacy_epoch(mut self, enabled: bool) -> Self {
        self.legacy_epoch = Some(enabled);
        self
    }

    fn legacy_enabled(&self) -> bool {
        self.legacy_epoch.unwrap_or_else(config::parse_ms_ajax_date)
    }

    /// Convert a value to a date.
    ///
    /// Dates are returned as-is, strings are matched, and everything else,
    /// including falsy values, yields `None`.
    pub fn convert(&self, input: &Value) -> Option<DateValue> {
        if input.is_falsy() {
            return None;
        }
        match input {
            Value::Date(date) => Some(*date),
            Value::String(s) => self.convert_str(s),
            _ => None,
        }
    }

    /// Convert a date string, optionally wrapped in one pair of `"` or `'`.
    pub fn convert_str(&self, input: &str) -> Option<DateValue> {
        let text = strip_quotes(input);
        if text.is_empty() {
            return None;
        }

        if IsoPattern::is_match(text) {
            return iso_to_date(text);
        }

        if !self.legacy_enabled() {
            return None;
        }

        LegacyEpochPattern::to_date(text)
    }

    /// Convert a value to [`Value::Date`], or return `fallback`.
    ///
    /// A falsy fallback is normalized to [`Value::Null`].
    pub fn convert_or(&self, input: &Value, fallback: Value) -> Value {
        match self.convert(input) {
            Some(date) => Value::Date(date),
            None if fallback.is_falsy() => Value::Null,
            None => fallback,
        }
    }
}

/// Strip one matching pair of leading/trailing quote characters.
fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Convert a value to a date using the process-wide legacy flag.
pub fn to_date(input: &Value) -> Option<DateValue> {
    DateConverter::new().convert(input)
}

/// Convert a date string using the process-wide legacy flag.
pub fn str_to_date(input: &str) -> Option<DateValue> {
    DateConverter::new().convert_str(input)
}

/// Convert a value to [`Value::Date`], or return `fallback` (`Null` when falsy).
pub fn date_string_to_date(input: &Value, fallback: Value) -> Value {
    DateConverter::new().convert_or(input, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn iso(s: &str) -> DateValue {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_plain_iso() {
        let converter = DateConverter::new().legacy_epoch(false);
        assert_eq!(
            converter.convert_str("2014-03-01T10:00:00Z"),
            Some(iso("2014-03-01T10:00:00Z"))
        );
    }

    #[test]
    fn test_quoted_iso_matches_unquoted() {
        let converter = DateConverter::new().legacy_epoch(false);
        let unquoted = converter.convert_str("2014-03-01T10:00:00Z");
        assert!(unquoted.is_some());
        assert_eq!(converter.convert_str("\"2014-03-01T10:00:00Z\""), unquoted);
        assert_eq!(converter.convert_str("'2014-03-01T10:00:00Z'"), unquoted);
    }

    #[test]
    fn test_mismatched_quotes_not_stripped() {
        let converter = DateConverter::new().legacy_epoch(false);
        assert_eq!(converter.convert_str("\"2014-03-01T10:00:00Z'"), None);
        assert_eq!(converter.convert_str("\"2014-03-01T10:00:00Z"), None);
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"abc\""), "abc");
        assert_eq!(strip_quotes("'abc'"), "abc");
        assert_eq!(strip_quotes("\"\""), "");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("abc"), "abc");
    }

    #[test]
    fn test_date_passthrough() {
        let date = iso("2014-03-01T10:00:00Z");
        let converter = DateConverter::new();
        assert_eq!(converter.convert(&Value::Date(date)), Some(date));
    }

    #[test]
    fn test_falsy_and_non_string_inputs() {
        let converter = DateConverter::new().legacy_epoch(true);
        assert_eq!(converter.convert(&Value::Null), None);
        assert_eq!(converter.convert(&Value::from("")), None);
        assert_eq!(converter.convert(&Value::Int64(0)), None);
        assert_eq!(converter.convert(&Value::Int64(1000)), None);
        assert_eq!(converter.convert(&Value::Array(vec![])), None);
    }

    #[test]
    fn test_convert_or_fallbacks() {
        let converter = DateConverter::new().legacy_epoch(false);
        assert_eq!(converter.convert_or(&Value::from(""), Value::Null), Value::Null);
        assert_eq!(
            converter.convert_or(&Value::Null, Value::from("N/A")),
            Value::from("N/A")
        );
        assert_eq!(
            converter.convert_or(&Value::from("garbage"), Value::Bool(false)),
            Value::Null
        );
        assert_eq!(
            converter.convert_or(&Value::from("2014-03-01T10:00:00Z"), Value::from("N/A")),
            Value::Date(iso("2014-03-01T10:00:00Z"))
        );
    }

    #[test]
    fn test_legacy_disabled_returns_fallback() {
        let converter = DateConverter::new().legacy_epoch(false);
        assert_eq!(converter.convert_str("/Date(1000)/"), None);
        assert_eq!(
            converter.convert_or(&Value::from("/Date(1000)/"), Value::from("N/A")),
            Value::from("N/A")
        );
    }

    #[test]
    fn test_legacy_enabled() {
        let converter = DateConverter::new().legacy_epoch(true);
        assert_eq!(
            converter.convert_str("/Date(1000)/"),
            Some(iso("1970-01-01T00:00:01Z"))
        );
        assert_eq!(
            converter.convert_str("\"/Date(1000)/\""),
            Some(iso("1970-01-01T00:00:01Z"))
        );
        assert_eq!(
            converter.convert_str("/Date(-1000)/"),
            Some(iso("1969-12-31T23:59:59Z"))
        );
        assert_eq!(
            converter.convert_str("/Date(1000+0100)/"),
            Some(iso("1970-01-01T00:00:01Z"))
        );
        assert_eq!(converter.convert_str("/Date(abc)/"), None);
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Date string recognition.
//!
//! Two fixed patterns are recognized:
//! - [`IsoPattern`] - `YYYY-MM-DDThh:mm:ss[.fraction][Z|(+|-)offset]`
//! - [`LegacyEpochPattern`] - `/Date(<millis>[(+|-)offset])/`, the .NET Ajax encoding
//!
//! ISO always takes precedence: callers check it first.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::core::DateValue;

const ISO_PATTERN: &str = r"^([0-9]{4})-([0-9]{2})-([0-9]{2})T([0-9]{2}):([0-9]{2}):([0-9]{2}(?:\.{0,1}[0-9]*))(?:Z|(\+|-)([0-9:]*))?$";

const LEGACY_EPOCH_PATTERN: &str = r"^/Date\((d|-|.*)\)[/\\]$";

/// Separators between the epoch token and the offset token of a legacy payload.
const EPOCH_SEPARATORS: [char; 4] = ['-', '+', ',', '.'];

static ISO_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static LEGACY_EPOCH_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn compiled(slot: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    slot.get_or_init(|| {
        Regex::new(pattern)
            .map_err(|e| tracing::error!(pattern, error = %e, "Date pattern failed to compile"))
            .ok()
    })
    .as_ref()
}

/// ISO-8601 timestamp matcher.
///
/// The pattern is only a gate. On a match the whole string goes to
/// [`iso_to_date`], so fractional seconds and offsets are kept as parsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoPattern;

impl IsoPattern {
    /// Check whether `s` is an ISO-8601 timestamp.
    pub fn is_match(s: &str) -> bool {
        compiled(&ISO_REGEX, ISO_PATTERN).is_some_and(|re| re.is_match(s))
    }

    /// Match and construct in one step.
    pub fn to_date(s: &str) -> Option<DateValue> {
        if Self::is_match(s) {
            iso_to_date(s)
        } else {
            None
        }
    }
}

/// Legacy .NET Ajax `/Date(ms)/` matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyEpochPattern;

impl LegacyEpochPattern {
    /// Check whether `s` has the `/Date(...)/` shape.
    pub fn is_match(s: &str) -> bool {
        Self::captures(s).is_some()
    }

    /// Return the payload between the parentheses.
    pub fn captures(s: &str) -> Option<&str> {
        compiled(&LEGACY_EPOCH_REGEX, LEGACY_EPOCH_PATTERN)?
            .captures(s)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Extract milliseconds since the epoch from a `/Date(...)/` string.
    ///
    /// The payload is split on `-`, `+`, `,` and `.`. A non-empty first token
    /// is the epoch; the offset suffix after it is informational only. An
    /// empty first token means a leading minus, so the epoch is the negated
    /// second token; an empty or missing second token counts as 0. `None`
    /// when the shape does not match or a non-empty token is not an integer.
    pub fn epoch_millis(s: &str) -> Option<i64> {
        let payload = Self::captures(s)?;
        let mut tokens = payload.split(EPOCH_SEPARATORS);
        let first = tokens.next().unwrap_or_default();

        if !first.is_empty() {
            return first.parse::<i64>().ok();
        }

        match tokens.next() {
            Some(second) if !second.is_empty() => second.parse::<i64>().ok().map(|ms| 0 - ms),
            _ => Some(0),
        }
    }

    /// Match and construct in one step.
    pub fn to_date(s: &str) -> Option<DateValue> {
        Self::epoch_millis(s).and_then(date_from_epoch_millis)
    }
}

/// Construct a date from a string that passed [`IsoPattern`].
///
/// Accepts RFC 3339 (`Z` or `+hh:mm`), compact `+hhmm` offsets, and strings
/// without an offset, which are taken as UTC.
pub fn iso_to_date(s: &str) -> Option<DateValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt);
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Construct a UTC date from milliseconds since the Unix epoch.
pub fn date_from_epoch_millis(millis: i64) -> Option<DateValue> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.fixed_offset())
}

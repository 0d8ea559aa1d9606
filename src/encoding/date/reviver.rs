// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Date revival filter.
//!
//! [`DateReviver`] turns date strings into [`Value::Date`] and hands every
//! other value to an optional chained [`Reviver`]. Build a fresh one per
//! decode call; instances share no state.

use std::fmt;

use crate::config;
use crate::core::{Reviver, Value};

use super::pattern::{iso_to_date, IsoPattern, LegacyEpochPattern};

/// Revival filter that recognizes ISO-8601 and legacy `/Date(ms)/` strings.
///
/// # Example
///
/// ```
/// use jsondate::{DateReviver, Reviver, Value};
///
/// let reviver = DateReviver::new();
/// let revived = reviver.revive("d", Value::from("2014-03-01T10:00:00Z"));
/// assert!(revived.is_date());
/// ```
#[derive(Clone, Copy, Default)]
pub struct DateReviver<'a> {
    chain: Option<&'a dyn Reviver>,
    legacy_epoch: Option<bool>,
}

impl fmt::Debug for DateReviver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateReviver")
            .field("chained", &self.chain.is_some())
            .field("legacy_epoch", &self.legacy_epoch)
            .finish()
    }
}

impl DateReviver<'static> {
    /// Create a filter with no chain; non-date values pass through unchanged.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> DateReviver<'a> {
    /// Create a filter that delegates non-date values to `chain`.
    pub fn chained(chain: &'a dyn Reviver) -> Self {
        Self::with_chain(Some(chain))
    }

    /// Create a filter with an optional chain.
    pub fn with_chain(chain: Option<&'a dyn Reviver>) -> Self {
        Self {
            chain,
            legacy_epoch: None,
        }
    }

    /// Force legacy `/Date(ms)/` recognition on or off for this filter.
    ///
    /// Without this the process-wide flag is read on every call.
    pub fn legacy_epoch(mut self, enabled: bool) -> Self {
        self.legacy_epoch = Some(enabled);
        self
    }

    /// Whether this filter delegates to a chained reviver.
    pub fn is_chained(&self) -> bool {
        self.chain.is_some()
    }

    fn legacy_enabled(&self) -> bool {
        self.legacy_epoch.unwrap_or_else(config::parse_ms_ajax_date)
    }

    fn delegate(&self, key: &str, value: Value) -> Value {
        match self.chain {
            Some(chain) => chain.revive(key, value),
            None => value,
        }
    }
}

impl Reviver for DateReviver<'_> {
    fn revive(&self, key: &str, value: Value) -> Value {
        let Value::String(text) = &value else {
            return self.delegate(key, value);
        };

        if IsoPattern::is_match(text) {
            return match iso_to_date(text) {
                Some(date) => Value::Date(date),
                None => {
                    tracing::trace!(key, text = %text, "ISO-shaped string is not a valid date");
                    value
                }
            };
        }

        if !self.legacy_enabled() {
            return value;
        }

        if LegacyEpochPattern::is_match(text) {
            return match LegacyEpochPattern::to_date(text) {
                Some(date) => Value::Date(date),
                None => {
                    tracing::trace!(key, text = %text, "legacy date payload is not an epoch");
                    value
                }
            };
        }

        self.delegate(key, value)
    }
}

/// The default, unchained date filter.
pub fn date_parser() -> DateReviver<'static> {
    DateReviver::new()
}

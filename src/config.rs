// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Process-wide date parsing configuration.
//!
//! Holds the legacy `/Date(ms)/` parse flag and a TOML-backed
//! [`DateParserConfig`] that can set both the flag and the global decoder
//! override in one call.
//!
//! ```toml
//! parse_ms_ajax_date = true
//! use_date_parser = true
//! ```

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use crate::core::{DateJsonError, Result};
use crate::encoding::registry::global_decoder;

static PARSE_MS_AJAX_DATE: AtomicBool = AtomicBool::new(false);

/// Whether legacy `/Date(ms)/` strings are revived. Defaults to `false`.
pub fn parse_ms_ajax_date() -> bool {
    PARSE_MS_AJAX_DATE.load(Ordering::Acquire)
}

/// Enable or disable legacy `/Date(ms)/` revival for the whole process.
pub fn set_parse_ms_ajax_date(enabled: bool) {
    PARSE_MS_AJAX_DATE.store(enabled, Ordering::Release);
}

/// Configuration for date parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateParserConfig {
    /// Revive legacy `/Date(ms)/` strings in addition to ISO-8601
    pub parse_ms_ajax_date: bool,
    /// Install the date-aware decoder as the process-wide entry point
    pub use_date_parser: bool,
}

impl DateParserConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| DateJsonError::config(e.to_string()))
    }

    /// Load a configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Snapshot of the settings currently in effect.
    pub fn current() -> Self {
        Self {
            parse_ms_ajax_date: parse_ms_ajax_date(),
            use_date_parser: global_decoder().is_date_parser_installed(),
        }
    }

    /// Push these settings into the process-wide state.
    pub fn apply(&self) {
        set_parse_ms_ajax_date(self.parse_ms_ajax_date);
        global_decoder().set_date_aware_decoding(!self.use_date_parser);
        tracing::debug!(
            parse_ms_ajax_date = self.parse_ms_ajax_date,
            use_date_parser = self.use_date_parser,
            "applied date parser configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DateParserConfig::default();
        assert!(!config.parse_ms_ajax_date);
        assert!(!config.use_date_parser);
    }

    #[test]
    fn test_from_toml_str() {
        let config = DateParserConfig::from_toml_str("parse_ms_ajax_date = true\n").unwrap();
        assert!(config.parse_ms_ajax_date);
        assert!(!config.use_date_parser);

        let config = DateParserConfig::from_toml_str("").unwrap();
        assert_eq!(config, DateParserConfig::default());
    }

    #[test]
    fn test_from_toml_str_rejects_wrong_type() {
        let err = DateParserConfig::from_toml_str("parse_ms_ajax_date = \"yes\"").unwrap_err();
        assert!(matches!(err, DateJsonError::Config { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DateParserConfig::load("/nonexistent/jsondate.toml").unwrap_err();
        assert!(matches!(err, DateJsonError::Config { .. }));
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # jsondate
//!
//! JSON decoding that revives date strings into native dates.
//!
//! Two encodings are recognized:
//! - **ISO-8601** timestamps such as `2014-03-01T10:00:00.123+01:00`, always on
//! - **Legacy .NET Ajax** strings such as `/Date(1394000000000)/`, gated by
//!   [`config::set_parse_ms_ajax_date`]
//!
//! ## Architecture
//!
//! - `core/` - Value tree, [`Reviver`] trait and error types
//! - `encoding/date/` - Pattern matchers, [`DateReviver`], [`DateAwareDecoder`], converter
//! - `encoding/json/` - [`StandardDecoder`], the plain `serde_json` decoder
//! - `encoding/registry` - [`DecoderService`] and the process-wide toggle
//! - `config` - Legacy flag and TOML configuration
//!
//! ## Example: Decoding with dates
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let value = jsondate::parse_with_date(r#"{"d":"2014-03-01T10:00:00Z"}"#, None)?;
//! let date = value.get("d").and_then(|d| d.as_date()).unwrap();
//! assert_eq!(date.timestamp(), 1_393_668_000);
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Converting a single string
//!
//! ```
//! use jsondate::Value;
//!
//! let date = jsondate::date_string_to_date(&Value::from("\"2014-03-01T10:00:00Z\""), Value::Null);
//! assert!(date.is_date());
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{DateJsonError, DateValue, JsonObject, Result, Reviver, Value};

// Decoding
pub mod encoding;

// Process-wide settings
pub mod config;

pub use crate::encoding::{
    date_parser, date_string_to_date, global_decoder, str_to_date, to_date, DateAwareDecoder,
    DateConverter, DateReviver, DecoderService, IsoPattern, LegacyEpochPattern, StandardDecoder,
};

/// Decoder trait for `parse(text, reviver)` style decoding.
pub trait Decoder: Send + Sync {
    /// Decode `text`, applying `reviver` to every value when given.
    fn decode(&self, text: &str, reviver: Option<&dyn Reviver>) -> Result<Value>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}

/// Decode with the process-wide active decoder.
pub fn parse(text: &str) -> Result<Value> {
    global_decoder().parse(text)
}

/// Decode with the process-wide active decoder and a reviver.
pub fn parse_with_reviver(text: &str, reviver: &dyn Reviver) -> Result<Value> {
    global_decoder().parse_with_reviver(text, reviver)
}

/// Decode with date revival, delegating non-date values to `chain`.
///
/// Fails with [`DateJsonError::MalformedInput`] on any decoder error.
pub fn parse_with_date(text: &str, chain: Option<&dyn Reviver>) -> Result<Value> {
    global_decoder().parse_with_date(text, chain)
}

/// Make [`parse`] date-aware for the whole process.
pub fn use_date_parser() {
    global_decoder().use_date_parser();
}

/// Undo [`use_date_parser`].
pub fn reset_date_parser() {
    global_decoder().reset_date_parser();
}

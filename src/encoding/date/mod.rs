// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Date detection and revival.
//!
//! - [`pattern`] - ISO-8601 and legacy `/Date(ms)/` matchers
//! - [`reviver`] - [`DateReviver`], the chainable revival filter
//! - [`decoder`] - [`DateAwareDecoder`], the decode wrapper
//! - [`convert`] - Standalone string-to-date conversion

pub mod convert;
pub mod decoder;
pub mod pattern;
pub mod reviver;

pub use convert::{date_string_to_date, str_to_date, to_date, DateConverter};
pub use decoder::DateAwareDecoder;
pub use pattern::{date_from_epoch_millis, iso_to_date, IsoPattern, LegacyEpochPattern};
pub use reviver::{date_parser, DateReviver};

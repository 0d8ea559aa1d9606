// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decoding implementations.
//!
//! - [`json`] - Plain JSON decoding with reviver support
//! - [`date`] - Date detection, revival filter and date-aware decoder
//! - [`registry`] - Active decoder service and the process-wide toggle

pub mod date;
pub mod json;
pub mod registry;

pub use date::{
    date_parser, date_string_to_date, str_to_date, to_date, DateAwareDecoder, DateConverter,
    DateReviver, IsoPattern, LegacyEpochPattern,
};
pub use json::StandardDecoder;
pub use registry::{global_decoder, DecoderService};

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON decoder module.
//!
//! Provides the plain, date-unaware JSON decoder.

pub mod decoder;

pub use decoder::StandardDecoder;

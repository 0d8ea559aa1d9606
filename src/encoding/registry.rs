// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Active decoder service.
//!
//! [`DecoderService`] owns the decoder used by [`DecoderService::parse`] and
//! can swap it for a date-aware wrapper and back:
//! - [`DecoderService::use_date_parser`] installs the wrapper around the current decoder
//! - [`DecoderService::reset_date_parser`] restores the saved original
//!
//! The active decoder is always either the original (nothing saved) or a
//! [`DateAwareDecoder`] around the saved original, never a wrapper around a
//! wrapper.
//!
//! # Example
//!
//! ```
//! use jsondate::encoding::DecoderService;
//!
//! let service = DecoderService::new();
//! service.use_date_parser();
//! let value = service.parse(r#"{"d":"2014-03-01T10:00:00Z"}"#).unwrap();
//! assert!(value.get("d").is_some_and(|d| d.is_date()));
//! service.reset_date_parser();
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::{Result, Reviver, Value};
use crate::encoding::date::DateAwareDecoder;
use crate::encoding::json::StandardDecoder;
use crate::Decoder;

struct DecoderState {
    active: Arc<dyn Decoder>,
    saved: Option<Arc<dyn Decoder>>,
}

/// Injectable "active decoder" with an install/uninstall lifecycle.
pub struct DecoderService {
    // Use RwLock for thread-safe access
    state: RwLock<DecoderState>,
}

impl fmt::Debug for DecoderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (active, installed) = {
            let state = self.read();
            (state.active.name().to_string(), state.saved.is_some())
        };
        f.debug_struct("DecoderService")
            .field("active", &active)
            .field("date_parser_installed", &installed)
            .finish()
    }
}

impl Default for DecoderService {
    fn default() -> Self {
        Self::new()
    }
}

impl DecoderService {
    /// Create a service whose original decoder is [`StandardDecoder`].
    pub fn new() -> Self {
        Self::with_decoder(Arc::new(StandardDecoder::new()))
    }

    /// Create a service around a custom original decoder.
    pub fn with_decoder(decoder: Arc<dyn Decoder>) -> Self {
        Self {
            state: RwLock::new(DecoderState {
                active: decoder,
                saved: None,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, DecoderState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DecoderState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// The decoder currently behind [`parse`](Self::parse).
    pub fn active_decoder(&self) -> Arc<dyn Decoder> {
        Arc::clone(&self.read().active)
    }

    /// The decoder that is not a date wrapper: the saved original while the
    /// date parser is installed, the active decoder otherwise.
    pub fn original_decoder(&self) -> Arc<dyn Decoder> {
        let state = self.read();
        Arc::clone(state.saved.as_ref().unwrap_or(&state.active))
    }

    /// Whether the date-aware wrapper is currently installed.
    pub fn is_date_parser_installed(&self) -> bool {
        self.read().saved.is_some()
    }

    /// Decode with the active decoder.
    pub fn parse(&self, text: &str) -> Result<Value> {
        self.active_decoder().decode(text, None)
    }

    /// Decode with the active decoder and a reviver.
    ///
    /// While the date parser is installed the reviver acts as its chain filter.
    pub fn parse_with_reviver(&self, text: &str, reviver: &dyn Reviver) -> Result<Value> {
        self.active_decoder().decode(text, Some(reviver))
    }

    /// Decode with date revival regardless of the installed state.
    ///
    /// Always runs the original decoder, so an installed wrapper is never
    /// re-entered.
    pub fn parse_with_date(&self, text: &str, chain: Option<&dyn Reviver>) -> Result<Value> {
        DateAwareDecoder::new(self.original_decoder()).parse_with_date(text, chain)
    }

    /// Install the date-aware wrapper. No-op when already installed.
    pub fn use_date_parser(&self) {
        let mut state = self.write();
        if state.saved.is_some() {
            return;
        }

        let original = Arc::clone(&state.active);
        tracing::debug!(original = original.name(), "installing date-aware JSON decoder");
        state.active = Arc::new(DateAwareDecoder::new(Arc::clone(&original)));
        state.saved = Some(original);
    }

    /// Restore the original decoder. No-op when nothing is installed.
    pub fn reset_date_parser(&self) {
        let mut state = self.write();
        if let Some(original) = state.saved.take() {
            tracing::debug!(original = original.name(), "restoring original JSON decoder");
            state.active = original;
        }
    }

    /// Single-entry toggle: `reset == false` enables, `reset == true` restores.
    pub fn set_date_aware_decoding(&self, reset: bool) {
        if reset {
            self.reset_date_parser();
        } else {
            self.use_date_parser();
        }
    }
}

/// Process-wide decoder service.
///
/// This is a convenience singleton. For isolated state, create a
/// `DecoderService` instance directly.
static GLOBAL_DECODER: OnceLock<DecoderService> = OnceLock::new();

/// Get the process-wide decoder service.
pub fn global_decoder() -> &'static DecoderService {
    GLOBAL_DECODER.get_or_init(DecoderService::new)
}

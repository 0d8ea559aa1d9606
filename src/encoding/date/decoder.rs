// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Date-aware decode wrapper.

use std::fmt;
use std::sync::Arc;

use crate::core::{DateJsonError, Result, Reviver, Value};
use crate::encoding::json::StandardDecoder;
use crate::Decoder;

use super::reviver::DateReviver;

/// Decoder that runs an inner decoder with a fresh [`DateReviver`].
///
/// The reviver passed to [`Decoder::decode`] becomes the chain filter for
/// non-date values. Every failure of the inner decoder is reported as
/// [`DateJsonError::MalformedInput`].
#[derive(Clone)]
pub struct DateAwareDecoder {
    inner: Arc<dyn Decoder>,
}

impl fmt::Debug for DateAwareDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateAwareDecoder")
            .field("inner", &self.inner.name())
            .finish()
    }
}

impl Default for DateAwareDecoder {
    fn default() -> Self {
        Self::new(Arc::new(StandardDecoder::new()))
    }
}

impl DateAwareDecoder {
    /// Wrap `inner` with date revival.
    pub fn new(inner: Arc<dyn Decoder>) -> Self {
        Self { inner }
    }

    /// The decoder doing the actual parsing.
    pub fn inner(&self) -> &Arc<dyn Decoder> {
        &self.inner
    }

    /// Decode `text`, reviving dates and delegating other values to `chain`.
    pub fn parse_with_date(&self, text: &str, chain: Option<&dyn Reviver>) -> Result<Value> {
        let reviver = DateReviver::with_chain(chain);
        self.inner.decode(text, Some(&reviver)).map_err(|e| {
            tracing::debug!(
                decoder = self.inner.name(),
                cause = %e,
                "JSON content could not be parsed"
            );
            DateJsonError::MalformedInput
        })
    }
}

impl Decoder for DateAwareDecoder {
    fn decode(&self, text: &str, reviver: Option<&dyn Reviver>) -> Result<Value> {
        self.parse_with_date(text, reviver)
    }

    fn name(&self) -> &str {
        "json+dates"
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout jsondate.
//!
//! - [`DateJsonError`] - Error handling
//! - [`Value`] - Decoded value tree with native dates
//! - [`Reviver`] - Key/value transformer applied while decoding

pub mod error;
pub mod value;

pub use error::{DateJsonError, Result, MALFORMED_INPUT_MESSAGE};
pub use value::{DateValue, JsonObject, Value};

/// Key/value transformer applied to every decoded member.
///
/// Receives the member key (array indices as decimal strings, `""` for the
/// root) and the already-revived value, and returns the value to store.
pub trait Reviver {
    /// Transform one decoded value.
    fn revive(&self, key: &str, value: Value) -> Value;
}

impl<F> Reviver for F
where
    F: Fn(&str, Value) -> Value,
{
    fn revive(&self, key: &str, value: Value) -> Value {
        self(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_reviver() {
        let upper = |_key: &str, value: Value| match value {
            Value::String(s) => Value::String(s.to_uppercase()),
            other => other,
        };
        assert_eq!(upper.revive("k", Value::from("abc")), Value::from("ABC"));
        assert_eq!(upper.revive("k", Value::Int64(1)), Value::Int64(1));
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Standard JSON Decoder
//!
//! Plain JSON decoder backed by `serde_json`, with optional reviver support.
//! It knows nothing about dates; date revival is layered on top by
//! [`DateAwareDecoder`](crate::encoding::date::DateAwareDecoder).
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use jsondate::encoding::json::StandardDecoder;
//! use jsondate::Value;
//!
//! let decoder = StandardDecoder::new();
//! let decoded = decoder.decode_str(r#"{"x": 1, "y": 2}"#, None)?;
//! assert_eq!(decoded.get("x"), Some(&Value::Int64(1)));
//! # Ok(())
//! # }
//! ```

use crate::core::{DateJsonError, Result, Reviver, Value};

/// JSON decoder following the host `parse(text, reviver)` contract.
///
/// The reviver sees every value bottom-up: members in document order, array
/// elements keyed by their decimal index, and finally the root under `""`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDecoder {
    _private: (),
}

impl StandardDecoder {
    /// Create a new JSON decoder.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Decode JSON text, applying `reviver` to every value when given.
    ///
    /// # Arguments
    ///
    /// * `text` - The JSON text to decode
    /// * `reviver` - Optional key/value transformer
    pub fn decode_str(&self, text: &str, reviver: Option<&dyn Reviver>) -> Result<Value> {
        let tree: serde_json::Value =
            serde_json::from_str(text).map_err(|e| DateJsonError::parse("json", format!("{e}")))?;

        Ok(Self::revive_tree(tree, reviver))
    }

    /// Decode JSON bytes, applying `reviver` to every value when given.
    ///
    /// # Arguments
    ///
    /// * `data` - The JSON bytes to decode
    /// * `reviver` - Optional key/value transformer
    pub fn decode_bytes(&self, data: &[u8], reviver: Option<&dyn Reviver>) -> Result<Value> {
        let tree: serde_json::Value = serde_json::from_slice(data)
            .map_err(|e| DateJsonError::parse("json", format!("{e}")))?;

        Ok(Self::revive_tree(tree, reviver))
    }

    fn revive_tree(tree: serde_json::Value, reviver: Option<&dyn Reviver>) -> Value {
        match reviver {
            Some(reviver) => Self::revive_node(reviver, "", tree),
            None => Value::from(tree),
        }
    }

    /// Convert one node, reviving children before the node itself.
    fn revive_node(reviver: &dyn Reviver, key: &str, node: serde_json::Value) -> Value {
        let value = match node {
            serde_json::Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| Self::revive_node(reviver, &index.to_string(), item))
                    .collect(),
            ),
            serde_json::Value::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(name, member)| {
                        let revived = Self::revive_node(reviver, &name, member);
                        (name, revived)
                    })
                    .collect(),
            ),
            leaf => Value::from(leaf),
        };

        reviver.revive(key, value)
    }

    /// Encode a value tree to JSON text.
    ///
    /// Dates are written as ISO-8601 strings with millisecond precision.
    /// Object members come out in [`JsonObject`](crate::core::JsonObject)
    /// iteration order, which is unspecified; only the reviver walk follows
    /// document order.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to encode
    /// * `pretty` - Whether to pretty-print the output
    pub fn encode(&self, value: &Value, pretty: bool) -> Result<String> {
        let json_value = value.to_json();

        if pretty {
            serde_json::to_string_pretty(&json_value)
                .map_err(|e| DateJsonError::encode(format!("{e}")))
        } else {
            serde_json::to_string(&json_value).map_err(|e| DateJsonError::encode(format!("{e}")))
        }
    }
}

impl crate::Decoder for StandardDecoder {
    fn decode(&self, text: &str, reviver: Option<&dyn Reviver>) -> Result<Value> {
        self.decode_str(text, reviver)
    }

    fn name(&self) -> &str {
        "json"
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for jsondate.
//!
//! The date-aware decode path reports exactly one kind,
//! [`DateJsonError::MalformedInput`]. The remaining variants belong to the
//! underlying decoder and the configuration loader.

use thiserror::Error;

/// Fixed message carried by [`DateJsonError::MalformedInput`].
pub const MALFORMED_INPUT_MESSAGE: &str = "JSON content could not be parsed";

/// Errors that can occur while decoding, encoding or configuring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateJsonError {
    /// The underlying decoder rejected the input. Detail is intentionally dropped.
    #[error("JSON content could not be parsed")]
    MalformedInput,

    /// Parse error reported by the underlying decoder
    #[error("Parse error in {context}: {message}")]
    Parse {
        /// What was being parsed
        context: String,
        /// Error message
        message: String,
    },

    /// Encoding a value tree back to text failed
    #[error("JSON encode error: {message}")]
    Encode {
        /// Error message
        message: String,
    },

    /// Configuration could not be read or deserialized
    #[error("Invalid configuration: {message}")]
    Config {
        /// Error message
        message: String,
    },
}

impl DateJsonError {
    /// Create a parse error.
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        DateJsonError::Parse {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an encode error.
    pub fn encode(message: impl Into<String>) -> Self {
        DateJsonError::Encode {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        DateJsonError::Config {
            message: message.into(),
        }
    }

    /// Check whether this is the normalized malformed-input error.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, DateJsonError::MalformedInput)
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            DateJsonError::MalformedInput => {
                vec![("message", MALFORMED_INPUT_MESSAGE.to_string())]
            }
            DateJsonError::Parse { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            DateJsonError::Encode { message } | DateJsonError::Config { message } => {
                vec![("message", message.clone())]
            }
        }
    }
}

impl From<std::io::Error> for DateJsonError {
    fn from(err: std::io::Error) -> Self {
        DateJsonError::Config {
            message: err.to_string(),
        }
    }
}

/// Result type for jsondate operations.
pub type Result<T> = std::result::Result<T, DateJsonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_message() {
        let err = DateJsonError::MalformedInput;
        assert!(err.is_malformed_input());
        assert_eq!(err.to_string(), "JSON content could not be parsed");
        assert_eq!(err.to_string(), MALFORMED_INPUT_MESSAGE);
    }

    #[test]
    fn test_parse_error() {
        let err = DateJsonError::parse("json", "EOF while parsing an object");
        assert!(matches!(err, DateJsonError::Parse { .. }));
        assert!(!err.is_malformed_input());
        assert_eq!(
            err.to_string(),
            "Parse error in json: EOF while parsing an object"
        );
    }

    #[test]
    fn test_encode_error() {
        let err = DateJsonError::encode("float not representable");
        assert_eq!(err.to_string(), "JSON encode error: float not representable");
    }

    #[test]
    fn test_config_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err: DateJsonError = io.into();
        assert!(matches!(err, DateJsonError::Config { .. }));
        assert_eq!(err.to_string(), "Invalid configuration: missing file");
    }

    #[test]
    fn test_log_fields() {
        let err = DateJsonError::parse("json", "bad token");
        let fields = err.log_fields();
        assert_eq!(fields[0], ("context", "json".to_string()));
        assert_eq!(fields[1], ("message", "bad token".to_string()));

        let fields = DateJsonError::MalformedInput.log_fields();
        assert_eq!(fields, vec![("message", MALFORMED_INPUT_MESSAGE.to_string())]);
    }
}

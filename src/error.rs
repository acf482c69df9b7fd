//! Multibase error types

use crate::base::Base;

/// Error type for multibase encode/decode operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Decode was called with an empty string
    EmptyInput,
    /// The first codepoint of the input does not match any registered prefix
    UnknownPrefix(char),
    /// The base is registered but has no codec wired to it (Base1/2/8/10)
    UnsupportedBase(Base),
    /// The payload after the prefix is not valid text for the base's alphabet
    InvalidPayload {
        /// Name of the base whose codec rejected the payload
        base: &'static str,
        /// Description from the underlying codec
        detail: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyInput => {
                write!(f, "Cannot decode an empty string")
            }
            Error::UnknownPrefix(c) => {
                write!(f, "Unknown multibase prefix: '{}'", c)
            }
            Error::UnsupportedBase(base) => {
                write!(f, "Unsupported base encoding: {}", base.name())
            }
            Error::InvalidPayload { base, detail } => {
                write!(f, "Invalid {} payload: {}", base, detail)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for multibase operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_input() {
        assert_eq!(Error::EmptyInput.to_string(), "Cannot decode an empty string");
    }

    #[test]
    fn test_display_unknown_prefix_carries_codepoint() {
        let msg = Error::UnknownPrefix('?').to_string();
        assert!(msg.contains('?'));
    }

    #[test]
    fn test_display_unsupported_base_carries_name() {
        let msg = Error::UnsupportedBase(Base::Base10).to_string();
        assert!(msg.contains("base10"));
    }

    #[test]
    fn test_display_invalid_payload_carries_base_name() {
        let err = Error::InvalidPayload {
            base: "base58btc",
            detail: "invalid character".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("base58btc"));
        assert!(msg.contains("invalid character"));
    }
}

//! # emx-multibase
//!
//! Self-describing multibase encoding: the first codepoint of an encoded string
//! identifies which base produced it, so decoding needs no out-of-band knowledge
//! of the encoding.
//!
//! ## Format
//!
//! ```text
//! <prefix><payload>
//!
//! zCn8eVZg          base58btc of "hello"
//! fdead             base16 of [0xDE, 0xAD]
//! bmzxw6yq          base32 of "foob"
//! 🚀😊😊            base256emoji payload
//! ```
//!
//! The variant set is closed: 23 registered prefixes covering base16/32/36/58/64
//! in their case, padding and alphabet pairings, plus base256emoji. Four prefixes
//! (base1/2/8/10) are reserved without a wired codec and are rejected with
//! [`Error::UnsupportedBase`].
//!
//! ## Usage
//!
//! ```
//! use emx_multibase::{encode, decode, encoding, Base};
//!
//! let text = encode(Base::Base58BTC, b"hello").unwrap();
//! assert_eq!(text, "zCn8eVZg");
//! assert_eq!(encoding(&text).unwrap(), Base::Base58BTC);
//! assert_eq!(decode(&text).unwrap(), b"hello");
//! ```
//!
//! ## Decoding rules
//!
//! Decoding is forgiving where the alphabet allows it:
//! - hex and base32/base36 payloads decode case-insensitively
//! - padded and unpadded base32/base64 payloads both decode under either prefix
//! - the base256emoji prefix is stripped by codepoint, never by byte offset
//!
//! The digit arithmetic itself is delegated to `data-encoding`, `bs58`, `base-x`
//! and `base64`; this crate owns the prefix registry, the dispatch and the
//! per-variant text shaping only. All operations are pure and the registry is
//! built once and read-only, so everything is safe to call from multiple threads.

pub mod base;
pub mod decoder;
pub mod emoji;
pub mod encoder;
pub mod error;

pub use base::Base;
pub use decoder::{decode, encoding};
pub use encoder::encode;
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface_round_trip() {
        let text = encode(Base::Base64Url, &[0xFB, 0xFF]).unwrap();
        assert_eq!(encoding(&text).unwrap(), Base::Base64Url);
        assert_eq!(decode(&text).unwrap(), vec![0xFB, 0xFF]);
    }

    #[test]
    fn test_error_variants_are_distinct() {
        assert_eq!(decode("").unwrap_err(), Error::EmptyInput);
        assert_eq!(decode("?x").unwrap_err(), Error::UnknownPrefix('?'));
        assert_eq!(
            encode(Base::Base1, b"x").unwrap_err(),
            Error::UnsupportedBase(Base::Base1)
        );
        assert!(matches!(
            decode("fzz").unwrap_err(),
            Error::InvalidPayload { .. }
        ));
    }
}

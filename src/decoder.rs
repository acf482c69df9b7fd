//! Multibase decoder
//!
//! Resolves the prefix to a base, applies the inverse of the encoder's text
//! shaping and hands the payload to the matching codec. Case-folded variants
//! decode case-insensitively, and padded/unpadded pairs accept each other's
//! payloads: padding is stripped up front and the no-pad codec does the work.

use crate::base::Base;
use crate::emoji;
use crate::encoder::BASE36_ALPHABET;
use crate::error::{Error, Result};
use base64::Engine;

/// Identify which base produced a multibase string
///
/// Prefix resolution only; the payload is not validated.
pub fn encoding(input: &str) -> Result<Base> {
    let (base, _) = Base::resolve(input)?;
    Ok(base)
}

/// Decode a self-describing multibase string back to bytes
///
/// A prefix with an empty payload decodes to the empty byte vector; every wired
/// codec accepts an empty payload.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let (base, rest) = Base::resolve(input)?;
    decode_payload(base, rest)
}

/// Decode a shaped payload for an already-resolved base
fn decode_payload(base: Base, rest: &str) -> Result<Vec<u8>> {
    use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
    use data_encoding::{BASE32HEX_NOPAD, BASE32_NOPAD, HEXLOWER};

    match base {
        // Hex decodes case-insensitively for both variants
        Base::Base16 | Base::Base16Upper => HEXLOWER
            .decode(rest.to_lowercase().as_bytes())
            .map_err(|e| invalid(base, e)),

        Base::Base32 | Base::Base32Upper | Base::Base32Pad | Base::Base32PadUpper => {
            BASE32_NOPAD
                .decode(strip_padding(&rest.to_uppercase()).as_bytes())
                .map_err(|e| invalid(base, e))
        }
        Base::Base32Hex
        | Base::Base32HexUpper
        | Base::Base32HexPad
        | Base::Base32HexPadUpper => BASE32HEX_NOPAD
            .decode(strip_padding(&rest.to_uppercase()).as_bytes())
            .map_err(|e| invalid(base, e)),

        Base::Base36 | Base::Base36Upper => {
            base36_decode(&rest.to_lowercase()).map_err(|e| invalid(base, e))
        }

        Base::Base58BTC => bs58::decode(rest).into_vec().map_err(|e| invalid(base, e)),
        Base::Base58Flickr => bs58::decode(rest)
            .with_alphabet(bs58::Alphabet::FLICKR)
            .into_vec()
            .map_err(|e| invalid(base, e)),

        Base::Base64 | Base::Base64Pad => STANDARD_NO_PAD
            .decode(strip_padding(rest))
            .map_err(|e| invalid(base, e)),
        Base::Base64Url | Base::Base64UrlPad => URL_SAFE_NO_PAD
            .decode(strip_padding(rest))
            .map_err(|e| invalid(base, e)),

        Base::Base256Emoji => emoji::decode(rest),

        Base::Base1 | Base::Base2 | Base::Base8 | Base::Base10 => {
            Err(Error::UnsupportedBase(base))
        }
    }
}

/// Strip trailing '=' so padded and unpadded payloads decode identically
fn strip_padding(payload: &str) -> &str {
    payload.trim_end_matches('=')
}

/// Base36-decode, restoring the leading zero bytes carried as '0' digits
fn base36_decode(payload: &str) -> std::result::Result<Vec<u8>, base_x::DecodeError> {
    let zeros = payload.chars().take_while(|&c| c == '0').count();
    // '0' is ASCII, so the digit count equals the byte offset
    let tail = base_x::decode(BASE36_ALPHABET, &payload[zeros..])?;

    let mut output = vec![0u8; zeros];
    output.extend(tail);
    Ok(output)
}

fn invalid(base: Base, err: impl std::fmt::Display) -> Error {
    Error::InvalidPayload {
        base: base.name(),
        detail: err.to_string(),
    }
}

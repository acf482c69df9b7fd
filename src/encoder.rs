//! Multibase encoder
//!
//! Runs the codec for the requested base, applies the variant's text shaping
//! (case folding, padding policy, alphabet choice) and prepends the prefix.

use crate::base::Base;
use crate::emoji;
use crate::error::{Error, Result};
use base64::Engine;

/// Base36 digit alphabet, shared by both case variants
pub(crate) const BASE36_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Base36-encode with leading zero bytes preserved
///
/// Big-integer conversion drops leading `0x00` bytes, so the zero run is
/// carried as explicit '0' digits in front of the converted tail.
pub(crate) fn base36_encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();
    let tail = base_x::encode(BASE36_ALPHABET, &data[zeros..]);

    let mut output = String::with_capacity(zeros + tail.len());
    for _ in 0..zeros {
        output.push('0');
    }
    output.push_str(&tail);
    output
}

/// Encode bytes into a self-describing multibase string
///
/// Total for every byte sequence, including the empty one, on every variant with
/// a wired codec. Reserved prefixes (base1/2/8/10) fail with
/// [`Error::UnsupportedBase`].
pub fn encode(base: Base, data: &[u8]) -> Result<String> {
    let payload = encode_payload(base, data)?;

    let mut output = String::with_capacity(payload.len() + 4);
    output.push(base.code());
    output.push_str(&payload);
    Ok(output)
}

/// Produce the shaped payload for a base, without the prefix
fn encode_payload(base: Base, data: &[u8]) -> Result<String> {
    use base64::engine::general_purpose::{
        STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD,
    };
    use data_encoding::{BASE32, BASE32HEX, BASE32HEX_NOPAD, BASE32_NOPAD, HEXLOWER, HEXUPPER};

    let payload = match base {
        Base::Base16 => HEXLOWER.encode(data),
        Base::Base16Upper => HEXUPPER.encode(data),

        // data-encoding's RFC 4648 specs emit uppercase; lowercase variants fold
        // the result, pad variants keep the trailing '='.
        Base::Base32 => BASE32_NOPAD.encode(data).to_lowercase(),
        Base::Base32Upper => BASE32_NOPAD.encode(data),
        Base::Base32Pad => BASE32.encode(data).to_lowercase(),
        Base::Base32PadUpper => BASE32.encode(data),
        Base::Base32Hex => BASE32HEX_NOPAD.encode(data).to_lowercase(),
        Base::Base32HexUpper => BASE32HEX_NOPAD.encode(data),
        Base::Base32HexPad => BASE32HEX.encode(data).to_lowercase(),
        Base::Base32HexPadUpper => BASE32HEX.encode(data),

        Base::Base36 => base36_encode(data),
        Base::Base36Upper => base36_encode(data).to_uppercase(),

        Base::Base58BTC => bs58::encode(data).into_string(),
        Base::Base58Flickr => bs58::encode(data)
            .with_alphabet(bs58::Alphabet::FLICKR)
            .into_string(),

        // URL-safe variants use the URL-safe engine, never a character
        // substitution on standard-alphabet output.
        Base::Base64 => STANDARD_NO_PAD.encode(data),
        Base::Base64Url => URL_SAFE_NO_PAD.encode(data),
        Base::Base64Pad => STANDARD.encode(data),
        Base::Base64UrlPad => URL_SAFE.encode(data),

        Base::Base256Emoji => emoji::encode(data),

        Base::Base1 | Base::Base2 | Base::Base8 | Base::Base10 => {
            return Err(Error::UnsupportedBase(base))
        }
    };

    Ok(payload)
}

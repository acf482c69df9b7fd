//! Base variant registry and prefix resolution
//!
//! The registry is the closed set of multibase encodings. Each variant carries a
//! unique one-codepoint prefix that makes encoded strings self-describing: the
//! prefix is prepended on encode and resolved back to the variant on decode.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

/// A registered multibase encoding variant
///
/// The set is closed: variants pair up by case (`Base16`/`Base16Upper`), padding
/// (`Base32`/`Base32Pad`) and alphabet (`Base32`/`Base32Hex`), sharing a codec and
/// differing only in text shaping. `Base1`, `Base2`, `Base8` and `Base10` are
/// reserved prefixes without a wired codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    /// Unary (prefix reserved, no codec)
    Base1,
    /// Binary (prefix reserved, no codec)
    Base2,
    /// Octal (prefix reserved, no codec)
    Base8,
    /// Decimal (prefix reserved, no codec)
    Base10,
    /// Hexadecimal, lowercase
    Base16,
    /// Hexadecimal, uppercase
    Base16Upper,
    /// RFC 4648 base32, lowercase, no padding
    Base32,
    /// RFC 4648 base32, uppercase, no padding
    Base32Upper,
    /// RFC 4648 base32, lowercase, with padding
    Base32Pad,
    /// RFC 4648 base32, uppercase, with padding
    Base32PadUpper,
    /// RFC 4648 base32hex, lowercase, no padding
    Base32Hex,
    /// RFC 4648 base32hex, uppercase, no padding
    Base32HexUpper,
    /// RFC 4648 base32hex, lowercase, with padding
    Base32HexPad,
    /// RFC 4648 base32hex, uppercase, with padding
    Base32HexPadUpper,
    /// Base36, lowercase
    Base36,
    /// Base36, uppercase
    Base36Upper,
    /// Base58, Bitcoin alphabet
    Base58BTC,
    /// Base58, Flickr alphabet
    Base58Flickr,
    /// RFC 4648 base64, no padding
    Base64,
    /// RFC 4648 base64url, no padding
    Base64Url,
    /// RFC 4648 base64, with padding
    Base64Pad,
    /// RFC 4648 base64url, with padding
    Base64UrlPad,
    /// One emoji symbol per byte
    Base256Emoji,
}

impl Base {
    /// Every registered variant, in registry order
    pub const ALL: [Base; 23] = [
        Base::Base1,
        Base::Base2,
        Base::Base8,
        Base::Base10,
        Base::Base16,
        Base::Base16Upper,
        Base::Base32,
        Base::Base32Upper,
        Base::Base32Pad,
        Base::Base32PadUpper,
        Base::Base32Hex,
        Base::Base32HexUpper,
        Base::Base32HexPad,
        Base::Base32HexPadUpper,
        Base::Base36,
        Base::Base36Upper,
        Base::Base58BTC,
        Base::Base58Flickr,
        Base::Base64,
        Base::Base64Url,
        Base::Base64Pad,
        Base::Base64UrlPad,
        Base::Base256Emoji,
    ];

    /// The prefix codepoint identifying this variant
    pub const fn code(self) -> char {
        match self {
            Base::Base1 => '1',
            Base::Base2 => '0',
            Base::Base8 => '7',
            Base::Base10 => '9',
            Base::Base16 => 'f',
            Base::Base16Upper => 'F',
            Base::Base32 => 'b',
            Base::Base32Upper => 'B',
            Base::Base32Pad => 'c',
            Base::Base32PadUpper => 'C',
            Base::Base32Hex => 'v',
            Base::Base32HexUpper => 'V',
            Base::Base32HexPad => 't',
            Base::Base32HexPadUpper => 'T',
            Base::Base36 => 'k',
            Base::Base36Upper => 'K',
            Base::Base58BTC => 'z',
            Base::Base58Flickr => 'Z',
            Base::Base64 => 'm',
            Base::Base64Url => 'u',
            Base::Base64Pad => 'M',
            Base::Base64UrlPad => 'U',
            Base::Base256Emoji => '🚀',
        }
    }

    /// Human-readable variant name
    pub const fn name(self) -> &'static str {
        match self {
            Base::Base1 => "base1",
            Base::Base2 => "base2",
            Base::Base8 => "base8",
            Base::Base10 => "base10",
            Base::Base16 => "base16",
            Base::Base16Upper => "base16upper",
            Base::Base32 => "base32",
            Base::Base32Upper => "base32upper",
            Base::Base32Pad => "base32pad",
            Base::Base32PadUpper => "base32padupper",
            Base::Base32Hex => "base32hex",
            Base::Base32HexUpper => "base32hexupper",
            Base::Base32HexPad => "base32hexpad",
            Base::Base32HexPadUpper => "base32hexpadupper",
            Base::Base36 => "base36",
            Base::Base36Upper => "base36upper",
            Base::Base58BTC => "base58btc",
            Base::Base58Flickr => "base58flickr",
            Base::Base64 => "base64",
            Base::Base64Url => "base64url",
            Base::Base64Pad => "base64pad",
            Base::Base64UrlPad => "base64urlpad",
            Base::Base256Emoji => "base256emoji",
        }
    }

    /// Whether a codec is wired to this variant
    ///
    /// Reserved prefixes (base1/2/8/10) resolve during decode but reject both
    /// encode and decode with [`Error::UnsupportedBase`].
    pub const fn is_supported(self) -> bool {
        !matches!(
            self,
            Base::Base1 | Base::Base2 | Base::Base8 | Base::Base10
        )
    }

    /// Look up a variant by its prefix codepoint
    pub fn from_code(code: char) -> Option<Base> {
        registry().get(&code).copied()
    }

    /// Look up a variant by its name (as returned by [`Base::name`])
    ///
    /// Matching is case-insensitive so CLI arguments like `Base58BTC` work.
    pub fn from_name(name: &str) -> Option<Base> {
        let lower = name.to_lowercase();
        Base::ALL.iter().copied().find(|b| b.name() == lower)
    }

    /// Resolve the variant and payload of a multibase string
    ///
    /// Takes the first codepoint of `input` and looks it up in the registry; the
    /// payload is everything after it. If the first codepoint matches nothing, one
    /// documented exception is checked: inputs starting with the Base256Emoji
    /// prefix symbol resolve to that variant with exactly the symbol stripped.
    /// Splitting walks char boundaries, never raw byte offsets, so multi-byte
    /// prefixes like '🚀' strip cleanly.
    pub fn resolve(input: &str) -> Result<(Base, &str)> {
        let mut chars = input.chars();
        let first = chars.next().ok_or(Error::EmptyInput)?;

        if let Some(base) = Base::from_code(first) {
            return Ok((base, chars.as_str()));
        }

        // Fallback for prefixes wider than one codepoint. The emoji prefix is a
        // single scalar value in Rust, so the primary lookup already catches it,
        // but the registry contract keeps this path for any multi-codepoint symbol.
        let mut buf = [0u8; 4];
        let emoji_prefix: &str = Base::Base256Emoji.code().encode_utf8(&mut buf);
        if let Some(rest) = input.strip_prefix(emoji_prefix) {
            return Ok((Base::Base256Emoji, rest));
        }

        Err(Error::UnknownPrefix(first))
    }
}

static REGISTRY: OnceLock<HashMap<char, Base>> = OnceLock::new();

/// The prefix lookup table, built once on first use and read-only after
///
/// A duplicate prefix is a configuration fault in the closed variant set, so
/// construction panics rather than returning an error.
fn registry() -> &'static HashMap<char, Base> {
    REGISTRY.get_or_init(|| {
        let mut table = HashMap::with_capacity(Base::ALL.len());
        for base in Base::ALL {
            if table.insert(base.code(), base).is_some() {
                panic!("Duplicate multibase prefix: '{}'", base.code());
            }
        }
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_prefixes_are_unique() {
        let codes: HashSet<char> = Base::ALL.iter().map(|b| b.code()).collect();
        assert_eq!(codes.len(), Base::ALL.len());
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = Base::ALL.iter().map(|b| b.name()).collect();
        assert_eq!(names.len(), Base::ALL.len());
    }

    #[test]
    fn test_from_code_covers_every_variant() {
        for base in Base::ALL {
            assert_eq!(Base::from_code(base.code()), Some(base));
        }
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(Base::from_code('?'), None);
        assert_eq!(Base::from_code('='), None);
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(Base::from_name("base58btc"), Some(Base::Base58BTC));
        assert_eq!(Base::from_name("Base58BTC"), Some(Base::Base58BTC));
        assert_eq!(Base::from_name("BASE16"), Some(Base::Base16));
        assert_eq!(Base::from_name("nope"), None);
    }

    #[test]
    fn test_resolve_ascii_prefix() {
        let (base, rest) = Base::resolve("zCn8eVZg").unwrap();
        assert_eq!(base, Base::Base58BTC);
        assert_eq!(rest, "Cn8eVZg");
    }

    #[test]
    fn test_resolve_prefix_only() {
        let (base, rest) = Base::resolve("f").unwrap();
        assert_eq!(base, Base::Base16);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_resolve_emoji_prefix_strips_one_symbol() {
        let (base, rest) = Base::resolve("🚀😂❤").unwrap();
        assert_eq!(base, Base::Base256Emoji);
        assert_eq!(rest, "😂❤");
    }

    #[test]
    fn test_resolve_empty_input() {
        assert_eq!(Base::resolve("").unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn test_resolve_unknown_prefix() {
        assert_eq!(Base::resolve("?abc").unwrap_err(), Error::UnknownPrefix('?'));
    }

    #[test]
    fn test_resolve_unknown_multibyte_prefix() {
        assert_eq!(Base::resolve("🙂abc").unwrap_err(), Error::UnknownPrefix('🙂'));
    }

    #[test]
    fn test_reserved_prefixes_resolve_but_are_unsupported() {
        for input in ["1", "0", "7", "9"] {
            let (base, _) = Base::resolve(input).unwrap();
            assert!(!base.is_supported());
        }
    }
}

//! Base256Emoji codec
//!
//! Maps each byte to one emoji symbol from a fixed 256-entry alphabet. This is a
//! straight byte-to-symbol table, not positional digit arithmetic, so there is no
//! ecosystem codec crate for it and it lives here.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

/// The 256-symbol alphabet, indexed by byte value
const ALPHABET: &str = "🚀🪐☄🛰🌌🌑🌒🌓🌔🌕🌖🌗🌘🌍🌏🌎🐉☀💻🖥💾💿😂❤😍🤣😊🙏💕😭😘👍😅👏😁🔥🥰💔💖💙😢🤔😆🙄💪😉☺👌🤗💜😔😎😇🌹🤦🎉💞✌✨🤷😱😌🌸🙌😋💗💚😏💛🙂💓🤩😄😀🖤😃💯🙈👇🎶😒🤭❣😜💋👀😪😑💥🙋😞😩😡🤪👊🥳😥🤤👉💃😳✋😚😝😴🌟😬🙃🍀🌷😻😓⭐✅🥺🌈😈🤘💦✔😣🏃💐☹🎊💘😠☝😕🌺🎂🌻😐🖕💝🙊😹🗣💫💀👑🎵🤞😛🔴😤🌼😫⚽🤙☕🏆🤫👈😮🙆🍻🍃🐶💁😲🌿🧡🎁⚡🌞🎈❌✊👋😰🤨😶🤝🚶💰🍓💢🤟🙁🚨💨🤬✈🎀🍺🤓😙💟🌱😖👶🥴▶➡❓💎💸⬇😨🌚🦋😷🕺⚠🙅😟😵👎🤲🤠🤧📌🔵💅🧐🐾🍒😗🤑🌊🤯🐷☎💧😯💆👆🎤🙇🍑❄🌴💣🐸💌📍🥀🤢👅💡💩👐📸👻🤐🤮🎼🥵🚩🍎🍊👼💍📣🥂";

static FORWARD: OnceLock<Vec<char>> = OnceLock::new();
static REVERSE: OnceLock<HashMap<char, u8>> = OnceLock::new();

fn forward() -> &'static [char] {
    FORWARD.get_or_init(|| {
        let table: Vec<char> = ALPHABET.chars().collect();
        assert_eq!(table.len(), 256, "base256emoji alphabet must have 256 symbols");
        table
    })
}

fn reverse() -> &'static HashMap<char, u8> {
    REVERSE.get_or_init(|| {
        forward()
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u8))
            .collect()
    })
}

/// Encode bytes as one emoji symbol per byte
pub fn encode(data: &[u8]) -> String {
    let table = forward();
    data.iter().map(|&b| table[b as usize]).collect()
}

/// Decode an emoji payload back to bytes
///
/// Fails on any symbol outside the fixed alphabet.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let table = reverse();
    text.chars()
        .map(|c| {
            table.get(&c).copied().ok_or_else(|| Error::InvalidPayload {
                base: "base256emoji",
                detail: format!("'{}' is not in the emoji alphabet", c),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_has_256_unique_symbols() {
        assert_eq!(forward().len(), 256);
        assert_eq!(reverse().len(), 256);
    }

    #[test]
    fn test_zero_byte_is_rocket() {
        assert_eq!(encode(&[0]), "🚀");
    }

    #[test]
    fn test_round_trip_all_bytes() {
        let data: Vec<u8> = (0..=255).collect();
        let text = encode(&data);
        assert_eq!(decode(&text).unwrap(), data);
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_rejects_foreign_symbol() {
        let err = decode("🚀x").unwrap_err();
        assert!(err.to_string().contains("base256emoji"));
    }
}

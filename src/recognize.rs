//! Best-effort recognition of captured SGR sequences.
//!
//! The inverse direction of the renderer, and deliberately partial:
//! only the subset needed for style round-tripping is mapped. Cursor
//! movement, erase, and the rest of the CSI space are out of scope,
//! as is splitting a byte stream into tokens. Input here is one
//! already-isolated CSI token.

use crate::sequence::CSI;
use crate::style::Format;

/// One segmented CSI token: numeric body plus final byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsiToken {
    body: String,
    final_byte: char,
}

impl CsiToken {
    pub fn new(body: impl Into<String>, final_byte: char) -> Self {
        Self {
            body: body.into(),
            final_byte,
        }
    }

    /// Split a single isolated `ESC [ ... X` string into body and
    /// final byte. Returns `None` for anything that is not one
    /// complete CSI sequence; this is not a stream tokenizer.
    pub fn from_sequence(sequence: &str) -> Option<Self> {
        let rest = sequence.strip_prefix(CSI)?;
        let final_byte = rest.chars().last()?;
        // CSI final bytes are 0x40..=0x7e
        if !('\u{40}'..='\u{7e}').contains(&final_byte) {
            return None;
        }
        let body = &rest[..rest.len() - final_byte.len_utf8()];
        Some(Self::new(body, final_byte))
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn final_byte(&self) -> char {
        self.final_byte
    }
}

/// Map one CSI token back to the style flags it encodes.
///
/// `None` means the token is not an SGR sequence at all (final byte
/// other than `m`). `Some` with an empty flag set means the sequence
/// was recognized but its body is outside the mapped subset — today
/// only `"0"` (reset) and `"1"` (bold) are mapped, and everything
/// else is dropped rather than treated as an error.
pub fn recognize(token: &CsiToken) -> Option<Format> {
    if token.final_byte() != 'm' {
        return None;
    }
    Some(match token.body() {
        "0" => Format::CLEAR,
        "1" => Format::BOLD,
        _ => Format::empty(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_sgr_final_byte_is_rejected() {
        assert_eq!(recognize(&CsiToken::new("2", 'J')), None);
        assert_eq!(recognize(&CsiToken::new("10", 'A')), None);
    }

    #[test]
    fn test_reset_and_bold_are_mapped() {
        assert_eq!(recognize(&CsiToken::new("0", 'm')), Some(Format::CLEAR));
        assert_eq!(recognize(&CsiToken::new("1", 'm')), Some(Format::BOLD));
    }

    #[test]
    fn test_unmapped_sgr_body_is_recognized_but_empty() {
        assert_eq!(recognize(&CsiToken::new("38;2;1;2;3", 'm')), Some(Format::empty()));
        assert_eq!(recognize(&CsiToken::new("4", 'm')), Some(Format::empty()));
        assert_eq!(recognize(&CsiToken::new("", 'm')), Some(Format::empty()));
    }

    #[test]
    fn test_from_sequence_splits_one_token() {
        let token = CsiToken::from_sequence("\u{1b}[1;91m").unwrap();
        assert_eq!(token.body(), "1;91");
        assert_eq!(token.final_byte(), 'm');

        let token = CsiToken::from_sequence("\u{1b}[0m").unwrap();
        assert_eq!(recognize(&token), Some(Format::CLEAR));
    }

    #[test]
    fn test_from_sequence_rejects_non_csi_input() {
        assert_eq!(CsiToken::from_sequence("plain"), None);
        assert_eq!(CsiToken::from_sequence("\u{1b}]8;;U\u{7}"), None);
        assert_eq!(CsiToken::from_sequence("\u{1b}["), None);
    }
}

use bitflags::bitflags;
use smol_str::SmolStr;

use crate::lex::TokenKind;

bitflags! {
    /// Whitespace at a token boundary, folded into the neighboring tokens.
    /// Outside verbatim mode these two bits are the entire whitespace
    /// representation of a component-value tree.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct WhitespaceFlags: u8 {
        const BEFORE = 1 << 0;
        const AFTER = 1 << 1;
    }
}

/// One node of a component-value tree. Grouping tokens (functions, parens,
/// braces, brackets) own their contents as an optional child sequence.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: SmolStr,
    pub whitespace: WhitespaceFlags,

    /// For dimensions, the byte offset of the unit within `text`.
    pub unit_offset: u16,

    /// For URL tokens, the index of the import record this token created.
    pub import_record_index: Option<u32>,

    pub children: Option<Vec<Token>>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            text: text.into(),
            whitespace: WhitespaceFlags::empty(),
            unit_offset: 0,
            import_record_index: None,
            children: None,
        }
    }

    /// The numeric part of a percentage token.
    pub fn percentage_value(&self) -> &str {
        self.text.strip_suffix('%').unwrap_or(&self.text)
    }

    /// The numeric part of a dimension token.
    pub fn dimension_value(&self) -> &str {
        &self.text[..self.unit_offset as usize]
    }

    /// The unit part of a dimension token.
    pub fn dimension_unit(&self) -> &str {
        &self.text[self.unit_offset as usize..]
    }
}

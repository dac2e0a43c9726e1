//! The parsed form of a stylesheet: a list of rules over component-value
//! trees. Whitespace lives in per-token flags rather than in the tree.

pub mod properties;
pub mod selectors;
pub mod values;

pub use self::properties::Property;
pub use self::values::{Token, WhitespaceFlags};

use smol_str::SmolStr;
use xxhash_rust::xxh32::Xxh32;

use crate::lex::TokenKind;
use crate::source::Span;
use self::selectors::ComplexSelector;

#[derive(Debug, Default)]
pub struct StyleSheet {
    pub rules: Vec<Rule>,
    pub import_records: Vec<ImportRecord>,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Rule {
    AtCharset {
        encoding: SmolStr,
    },

    AtImport {
        import_record_index: u32,
        import_conditions: Vec<Token>,
    },

    AtKeyframes {
        at_token: SmolStr,
        name: SmolStr,
        blocks: Vec<KeyframeBlock>,
    },

    /// An at-rule with a recognized shape: a prelude and a block of rules.
    KnownAt {
        at_token: SmolStr,
        prelude: Vec<Token>,
        rules: Vec<Rule>,
    },

    /// An at-rule treated structurally: a prelude and an optional raw block.
    UnknownAt {
        at_token: SmolStr,
        prelude: Vec<Token>,
        block: Option<Vec<Token>>,
    },

    Selector {
        selectors: Vec<ComplexSelector>,
        rules: Vec<Rule>,
    },

    /// The fallback when the prelude does not parse as a selector list.
    Qualified {
        prelude: Vec<Token>,
        rules: Option<Vec<Rule>>,
    },

    Declaration(Declaration),

    /// A declaration that failed the `ident ":"` prefix, kept as raw tokens.
    BadDeclaration {
        tokens: Vec<Token>,
    },
}

/// `Xxh32` does not implement `std::hash::Hasher` itself; this newtype
/// bridges it so `Hash::hash` can drive it.
struct Xxh32Hasher(Xxh32);

impl std::hash::Hasher for Xxh32Hasher {
    fn finish(&self) -> u64 {
        self.0.digest() as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }
}

impl Rule {
    /// The 32-bit structural hash used to bucket candidate duplicates.
    /// Rules whose identity is positional rather than structural (imports
    /// carrying record indices, malformed declarations) opt out.
    pub fn structural_hash(&self) -> Option<u32> {
        match self {
            Rule::AtImport { .. } | Rule::BadDeclaration { .. } => None,
            _ => {
                let mut hasher = Xxh32Hasher(Xxh32::new(0));
                std::hash::Hash::hash(self, &mut hasher);
                Some(hasher.0.digest())
            }
        }
    }

    /// True when the rule has a body and that body is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Rule::AtKeyframes { blocks, .. } => blocks.is_empty(),
            Rule::KnownAt { rules, .. } | Rule::Selector { rules, .. } => rules.is_empty(),
            _ => false,
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct KeyframeBlock {
    pub selectors: Vec<SmolStr>,
    pub rules: Vec<Rule>,
}

#[derive(Clone, Debug)]
pub struct Declaration {
    pub key: Property,
    pub key_text: SmolStr,
    pub key_span: Span,
    pub value: Vec<Token>,
    pub important: bool,
}

// The key span is identity, not structure: two copies of the same
// declaration at different positions are still duplicates.
impl PartialEq for Declaration {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.key_text == other.key_text
            && self.value == other.value
            && self.important == other.important
    }
}

impl Eq for Declaration {}

impl std::hash::Hash for Declaration {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.key_text.hash(state);
        self.value.hash(state);
        self.important.hash(state);
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ImportKind {
    /// `@import` with no media conditions.
    At,
    /// `@import` followed by condition tokens.
    AtConditional,
    /// A `url(...)` reference inside a value.
    Url,
}

/// One external reference discovered during the parse. Records are
/// append-only; the index handed out at insertion stays valid for the
/// lifetime of the tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImportRecord {
    pub kind: ImportKind,
    pub path: SmolStr,
    pub span: Span,

    /// Set for URL tokens that appear somewhere imports cannot load from.
    pub is_unused: bool,
}

/// A name as it appeared in a selector: an identifier or `*`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NameToken {
    pub kind: TokenKind,
    pub text: SmolStr,
}

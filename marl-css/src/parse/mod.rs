//! A recursive-descent CSS parser over a pre-tokenized array, with
//! support for nesting (`&` rules inside declaration blocks) and optional
//! syntactic minification.

mod minify;
mod parser;

#[cfg(test)]
mod tests;

use bitflags::bitflags;

use crate::ast::StyleSheet;
use crate::errors::Errors;
use crate::lex::{self, TokenKind};
use crate::source::Source;

use self::parser::{Parser, RuleContext};

bitflags! {
    /// Modern CSS features an output target cannot represent. The parser
    /// records these for downstream emitters and does not branch on them.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct Features: u32 {
        const HEX_RGBA = 1 << 0;
        const REBECCA_PURPLE = 1 << 1;
        const MODERN_RGB_HSL = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    pub unsupported_features: Features,

    /// Rewrite numbers, dimensions, and keyframe keywords into shorter
    /// equivalents, and drop empty or duplicated rules.
    pub mangle_syntax: bool,

    /// Strip inter-token whitespace instead of normalizing it.
    pub remove_whitespace: bool,
}

/// Parse an entire stylesheet. The parse never fails; malformed input
/// produces warnings and best-effort rules.
pub fn parse(errors: &mut Errors, source: &Source, options: Options) -> StyleSheet {
    let tokens = lex::tokenize(errors, source);
    let mut parser = Parser::new(errors, source, &tokens, options);

    let rules = parser.parse_list_of_rules(RuleContext {
        is_top_level: true,
        parse_selectors: true,
    });
    parser.expect(TokenKind::EndOfFile);

    StyleSheet { rules, import_records: parser.finish() }
}

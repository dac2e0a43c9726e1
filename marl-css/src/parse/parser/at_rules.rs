use log::trace;
use smol_str::SmolStr;

use crate::ast::{ImportKind, ImportRecord, KeyframeBlock, Rule, WhitespaceFlags};
use crate::lex::TokenKind;
use crate::source::Span;

use super::values::ConvertOptions;
use super::{Parser, RuleContext};

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct AtRuleContext {
    pub is_declaration_list: bool,
}

/// What kind of body an at-rule takes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AtRuleKind {
    /// Structure unknown; the block, if any, is kept as raw tokens.
    Unknown,
    /// The block holds declarations.
    Declarations,
    /// The block holds rules in whatever mode the enclosing context uses.
    InheritContext,
    /// No block at all.
    Empty,
}

fn special_at_rule_kind(name: &str) -> AtRuleKind {
    match name {
        "font-face" | "page" => AtRuleKind::Declarations,

        // Page-margin boxes; nested inside "@page" in well-formed CSS
        "bottom-center" | "bottom-left" | "bottom-left-corner" | "bottom-right"
        | "bottom-right-corner" | "left-bottom" | "left-middle" | "left-top" | "right-bottom"
        | "right-middle" | "right-top" | "top-center" | "top-left" | "top-left-corner"
        | "top-right" | "top-right-corner" => AtRuleKind::Declarations,

        // Long deprecated, but some design systems still emit these
        "viewport" | "-ms-viewport" => AtRuleKind::Declarations,

        // "@-moz-document url-prefix() {" survives in the wild as an
        // "if Firefox" conditional
        "document" | "-moz-document" => AtRuleKind::InheritContext,

        "media" | "scope" | "supports" => AtRuleKind::InheritContext,

        _ => AtRuleKind::Unknown,
    }
}

impl Parser<'_, '_> {
    pub(crate) fn parse_at_rule(&mut self, context: AtRuleContext) -> Rule {
        let at_token = self.decoded();
        let at_span = self.current().span;
        let mut kind = special_at_rule_kind(&at_token);
        self.advance();
        trace!("parse at-rule");

        let prelude_start = self.index;

        // Specialized grammars; each error path falls through to the
        // generic prelude parsing below
        match at_token.as_str() {
            "charset" => {
                kind = AtRuleKind::Empty;
                self.expect(TokenKind::Whitespace);
                if self.peek(TokenKind::String) {
                    let encoding = self.decoded();
                    if !encoding.eq_ignore_ascii_case("UTF-8") {
                        let at = self.current().span;
                        self.errors.parse_warning(at).unsupported_charset(&encoding);
                    }
                    self.advance();
                    self.expect(TokenKind::Semicolon);
                    return Rule::AtCharset { encoding };
                }
                self.expect(TokenKind::String);
            }

            "import" => {
                kind = AtRuleKind::Empty;
                self.eat(TokenKind::Whitespace);
                if let Some((path, span)) = self.expect_url_or_string() {
                    let conditions_start = self.index;
                    while !matches!(
                        self.current().kind,
                        TokenKind::Semicolon | TokenKind::EndOfFile
                    ) {
                        self.parse_component_value();
                    }
                    let mut import_conditions =
                        self.convert_tokens(conditions_start..self.index);
                    let mut import_kind = ImportKind::At;

                    // Normalize the whitespace between the path and the
                    // first condition
                    if let Some(first) = import_conditions.first_mut() {
                        import_kind = ImportKind::AtConditional;
                        if self.options.remove_whitespace {
                            first.whitespace.remove(WhitespaceFlags::BEFORE);
                        } else {
                            first.whitespace.insert(WhitespaceFlags::BEFORE);
                        }
                    }

                    self.expect(TokenKind::Semicolon);
                    let import_record_index = self.import_records.len() as u32;
                    self.import_records.push(ImportRecord {
                        kind: import_kind,
                        path,
                        span,
                        is_unused: false,
                    });
                    return Rule::AtImport { import_record_index, import_conditions };
                }
            }

            "keyframes" | "-webkit-keyframes" | "-moz-keyframes" | "-ms-keyframes"
            | "-o-keyframes" => {
                self.eat(TokenKind::Whitespace);
                let mut name = SmolStr::default();
                let mut valid = true;

                if self.peek(TokenKind::Ident) {
                    name = self.decoded();
                    self.advance();
                } else if !self.expect(TokenKind::Ident)
                    && !self.eat(TokenKind::String)
                    && !self.peek(TokenKind::OpenBrace)
                {
                    // String names work in Firefox but not in Chrome or
                    // Safari, so they only get the warning from the
                    // expect above; a consumed string still parses on
                    valid = false;
                }

                if valid {
                    self.eat(TokenKind::Whitespace);
                    if self.expect(TokenKind::OpenBrace) {
                        let blocks = self.parse_keyframe_blocks();
                        self.expect(TokenKind::CloseBrace);
                        return Rule::AtKeyframes { at_token: at_token.clone(), name, blocks };
                    }
                }
            }

            _ => {
                if kind == AtRuleKind::Unknown && at_token == "namespace" {
                    // File-scoped namespaces cannot merge across a bundle
                    self.errors.parse_warning(at_span).unsupported_namespace();
                }
            }
        }

        // Parse an unknown prelude
        loop {
            match self.current().kind {
                TokenKind::OpenBrace | TokenKind::EndOfFile => break,

                TokenKind::Semicolon | TokenKind::CloseBrace => {
                    let prelude = self.convert_tokens(prelude_start..self.index);

                    if kind != AtRuleKind::Empty && kind != AtRuleKind::Unknown {
                        // This at-rule expected a block
                        self.expect(TokenKind::OpenBrace);
                        self.eat(TokenKind::Semicolon);
                        return Rule::UnknownAt { at_token, prelude, block: None };
                    }

                    self.expect(TokenKind::Semicolon);
                    return Rule::UnknownAt { at_token, prelude, block: None };
                }

                _ => self.parse_component_value(),
            }
        }

        let prelude = self.convert_tokens(prelude_start..self.index);
        let block_start = self.index;

        match kind {
            AtRuleKind::Empty => {
                // This at-rule should not have a block
                self.expect(TokenKind::Semicolon);
                self.parse_block(TokenKind::OpenBrace, TokenKind::CloseBrace);
                let block = self.convert_tokens(block_start..self.index);
                Rule::UnknownAt { at_token, prelude, block: Some(block) }
            }

            AtRuleKind::Declarations => {
                self.advance();
                let rules = self.parse_list_of_declarations();
                self.expect(TokenKind::CloseBrace);
                Rule::KnownAt { at_token, prelude, rules }
            }

            AtRuleKind::InheritContext => {
                self.advance();
                let rules = if context.is_declaration_list {
                    self.parse_list_of_declarations()
                } else {
                    self.parse_list_of_rules(RuleContext {
                        is_top_level: false,
                        parse_selectors: true,
                    })
                };
                self.expect(TokenKind::CloseBrace);
                Rule::KnownAt { at_token, prelude, rules }
            }

            AtRuleKind::Unknown => {
                self.parse_block(TokenKind::OpenBrace, TokenKind::CloseBrace);
                let tokens = self.tokens;
                let (block, _) = self.convert_tokens_helper(
                    &tokens[block_start..self.index],
                    TokenKind::EndOfFile,
                    ConvertOptions { allow_imports: true, verbatim_whitespace: false },
                );
                Rule::UnknownAt { at_token, prelude, block: Some(block) }
            }
        }
    }

    fn parse_keyframe_blocks(&mut self) -> Vec<KeyframeBlock> {
        let mut blocks = Vec::new();

        loop {
            match self.current().kind {
                TokenKind::Whitespace => {
                    self.advance();
                    continue;
                }

                TokenKind::CloseBrace | TokenKind::EndOfFile => break,

                TokenKind::OpenBrace => {
                    self.expect(TokenKind::Percentage);
                    self.parse_component_value();
                }

                _ => {
                    let mut selectors: Vec<SmolStr> = Vec::new();

                    loop {
                        let t = self.current();
                        match t.kind {
                            TokenKind::Whitespace => {
                                self.advance();
                                continue;
                            }

                            TokenKind::OpenBrace | TokenKind::EndOfFile => break,

                            TokenKind::Ident | TokenKind::Percentage => {
                                let mut text = self.decoded();
                                if t.kind == TokenKind::Ident {
                                    if text == "from" {
                                        if self.options.mangle_syntax {
                                            // "0%" is equivalent but shorter
                                            text = SmolStr::new("0%");
                                        }
                                    } else if text != "to" {
                                        self.expect(TokenKind::Percentage);
                                    }
                                } else if self.options.mangle_syntax && text == "100%" {
                                    // "to" is equivalent but shorter
                                    text = SmolStr::new("to");
                                }
                                selectors.push(text);
                                self.advance();
                            }

                            _ => {
                                self.expect(TokenKind::Percentage);
                                self.parse_component_value();
                            }
                        }

                        self.eat(TokenKind::Whitespace);
                        if t.kind != TokenKind::Comma && !self.peek(TokenKind::OpenBrace) {
                            self.expect(TokenKind::Comma);
                        }
                    }

                    if self.expect(TokenKind::OpenBrace) {
                        let rules = self.parse_list_of_declarations();
                        self.expect(TokenKind::CloseBrace);

                        // An empty block contributes nothing to the animation
                        if !self.options.mangle_syntax || !rules.is_empty() {
                            blocks.push(KeyframeBlock { selectors, rules });
                        }
                    }
                }
            }
        }

        blocks
    }

    /// `<url-token>`, `<string>`, or `url("...")`.
    fn parse_url_or_string(&mut self) -> Option<(SmolStr, Span)> {
        let t = self.current();
        match t.kind {
            TokenKind::String | TokenKind::Url => {
                let text = self.decoded();
                self.advance();
                Some((text, t.span))
            }

            TokenKind::Function if self.decoded() == "url" => {
                self.advance();
                let inner = self.current();
                let text = self.decoded();
                if self.expect(TokenKind::String) && self.expect(TokenKind::CloseParen) {
                    Some((text, inner.span))
                } else {
                    None
                }
            }

            _ => None,
        }
    }

    fn expect_url_or_string(&mut self) -> Option<(SmolStr, Span)> {
        let result = self.parse_url_or_string();
        if result.is_none() {
            self.expect(TokenKind::Url);
        }
        result
    }
}

use std::ops::Range;

use smol_str::SmolStr;

use crate::ast::{self, ImportKind, ImportRecord, WhitespaceFlags};
use crate::lex::{Token, TokenKind};

use super::Parser;
use crate::parse::minify::{mangle_dimension, mangle_number};

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ConvertOptions {
    /// Whether URL tokens found here may actually be loaded by a bundler.
    pub allow_imports: bool,

    /// Keep whitespace tokens byte-faithful instead of folding them into
    /// flags (custom properties and `var()` arguments).
    pub verbatim_whitespace: bool,
}

impl<'a> Parser<'a, '_> {
    /// Skip one component value: a single token, or a balanced group.
    pub(crate) fn parse_component_value(&mut self) {
        match self.current().kind {
            TokenKind::Function => self.parse_block(TokenKind::Function, TokenKind::CloseParen),
            TokenKind::OpenParen => self.parse_block(TokenKind::OpenParen, TokenKind::CloseParen),
            TokenKind::OpenBrace => self.parse_block(TokenKind::OpenBrace, TokenKind::CloseBrace),
            TokenKind::OpenBracket => {
                self.parse_block(TokenKind::OpenBracket, TokenKind::CloseBracket)
            }
            TokenKind::EndOfFile => self.unexpected(),
            _ => self.advance(),
        }
    }

    pub(crate) fn parse_block(&mut self, open: TokenKind, close: TokenKind) {
        if self.expect(open) {
            while !self.eat(close) {
                if self.peek(TokenKind::EndOfFile) {
                    self.expect(close);
                    return;
                }
                self.parse_component_value();
            }
        }
    }

    pub(crate) fn convert_tokens(&mut self, range: Range<usize>) -> Vec<ast::Token> {
        let tokens = self.tokens;
        self.convert_tokens_helper(&tokens[range], TokenKind::EndOfFile, ConvertOptions::default())
            .0
    }

    /// Convert a flat run of lexical tokens into a component-value tree,
    /// balancing groups against `close`. Returns the tree and whatever
    /// input followed the closing token.
    pub(crate) fn convert_tokens_helper(
        &mut self,
        mut tokens: &'a [Token],
        close: TokenKind,
        opts: ConvertOptions,
    ) -> (Vec<ast::Token>, &'a [Token]) {
        let mut result: Vec<ast::Token> = Vec::new();
        let mut next_whitespace = WhitespaceFlags::empty();

        while let Some((&t, rest)) = tokens.split_first() {
            tokens = rest;
            if t.kind == close {
                break;
            }

            let mut token = ast::Token {
                kind: t.kind,
                text: t.decoded_text(&self.source.content),
                whitespace: next_whitespace,
                unit_offset: 0,
                import_record_index: None,
                children: None,
            };
            next_whitespace = WhitespaceFlags::empty();

            match t.kind {
                TokenKind::Whitespace => {
                    // Fold the whitespace into the neighboring tokens
                    if let Some(last) = result.last_mut() {
                        last.whitespace |= WhitespaceFlags::AFTER;
                    }
                    next_whitespace = WhitespaceFlags::BEFORE;
                    continue;
                }

                TokenKind::Number => {
                    if self.options.mangle_syntax {
                        if let Some(text) = mangle_number(&token.text) {
                            token.text = text;
                        }
                    }
                }

                TokenKind::Percentage => {
                    if self.options.mangle_syntax {
                        if let Some(text) = mangle_number(token.percentage_value()) {
                            token.text = SmolStr::new(format!("{text}%"));
                        }
                    }
                }

                TokenKind::Dimension => {
                    token.unit_offset = t.unit_offset;

                    if self.options.mangle_syntax {
                        if let Some(value) = mangle_number(token.dimension_value()) {
                            let text = format!("{value}{}", token.dimension_unit());
                            token.unit_offset = value.len() as u16;
                            token.text = SmolStr::new(text);
                        }

                        if let Some((value, unit)) =
                            mangle_dimension(token.dimension_value(), token.dimension_unit())
                        {
                            token.unit_offset = value.len() as u16;
                            token.text = SmolStr::new(format!("{value}{unit}"));
                        }
                    }
                }

                TokenKind::Url => {
                    token.import_record_index = Some(self.import_records.len() as u32);
                    self.import_records.push(ImportRecord {
                        kind: ImportKind::Url,
                        path: std::mem::take(&mut token.text),
                        span: t.span,
                        is_unused: !opts.allow_imports,
                    });
                }

                TokenKind::Function => {
                    let original = tokens;
                    let mut nested_opts = opts;
                    if token.text == "var" {
                        // Custom property references need their whitespace
                        // byte-for-byte
                        nested_opts.verbatim_whitespace = true;
                    }
                    let (nested, rest) =
                        self.convert_tokens_helper(tokens, TokenKind::CloseParen, nested_opts);
                    tokens = rest;

                    // A URL function wrapping one string is the same thing
                    // as a URL token
                    if token.text == "url"
                        && nested.len() == 1
                        && nested[0].kind == TokenKind::String
                    {
                        token.kind = TokenKind::Url;
                        token.text = SmolStr::default();
                        token.import_record_index = Some(self.import_records.len() as u32);
                        self.import_records.push(ImportRecord {
                            kind: ImportKind::Url,
                            path: nested[0].text.clone(),
                            span: original[0].span,
                            is_unused: !opts.allow_imports,
                        });
                    } else {
                        token.children = Some(nested);
                    }
                }

                TokenKind::OpenParen => {
                    let (nested, rest) =
                        self.convert_tokens_helper(tokens, TokenKind::CloseParen, opts);
                    tokens = rest;
                    token.children = Some(nested);
                }

                TokenKind::OpenBrace => {
                    let (mut nested, rest) =
                        self.convert_tokens_helper(tokens, TokenKind::CloseBrace, opts);
                    tokens = rest;

                    // Pad the braces when pretty-printing
                    if !opts.verbatim_whitespace
                        && !self.options.remove_whitespace
                        && !nested.is_empty()
                    {
                        nested[0].whitespace |= WhitespaceFlags::BEFORE;
                        let last = nested.len() - 1;
                        nested[last].whitespace |= WhitespaceFlags::AFTER;
                    }

                    token.children = Some(nested);
                }

                TokenKind::OpenBracket => {
                    let (nested, rest) =
                        self.convert_tokens_helper(tokens, TokenKind::CloseBracket, opts);
                    tokens = rest;
                    token.children = Some(nested);
                }

                _ => {}
            }

            result.push(token);
        }

        if !opts.verbatim_whitespace {
            let count = result.len();
            for i in 0..count {
                // Trim the edges of every sibling list
                if i == 0 {
                    result[i].whitespace.remove(WhitespaceFlags::BEFORE);
                }
                if i + 1 == count {
                    result[i].whitespace.remove(WhitespaceFlags::AFTER);
                }

                if result[i].kind == TokenKind::Comma {
                    // Whitespace can always be removed before a comma
                    result[i].whitespace.remove(WhitespaceFlags::BEFORE);
                    if i > 0 {
                        result[i - 1].whitespace.remove(WhitespaceFlags::AFTER);
                    }

                    // And added or removed after one
                    if self.options.remove_whitespace {
                        result[i].whitespace.remove(WhitespaceFlags::AFTER);
                        if i + 1 < count {
                            result[i + 1].whitespace.remove(WhitespaceFlags::BEFORE);
                        }
                    } else {
                        result[i].whitespace.insert(WhitespaceFlags::AFTER);
                        if i + 1 < count {
                            result[i + 1].whitespace.insert(WhitespaceFlags::BEFORE);
                        }
                    }
                }
            }
        }

        // A verbatim fragment of nothing but whitespace has no token to
        // carry the flags; this is the one place an explicit whitespace
        // token enters the tree.
        if opts.verbatim_whitespace && result.is_empty() && next_whitespace == WhitespaceFlags::BEFORE
        {
            result.push(ast::Token::new(TokenKind::Whitespace, ""));
        }

        (result, tokens)
    }
}

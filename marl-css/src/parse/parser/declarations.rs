use log::trace;

use crate::ast::{Declaration, Property, Rule, WhitespaceFlags};
use crate::lex::TokenKind;

use super::at_rules::AtRuleContext;
use super::values::ConvertOptions;
use super::Parser;
use crate::parse::minify::remove_empty_and_duplicate_rules;

impl Parser<'_, '_> {
    /// Parse the contents of a declaration block. Besides declarations,
    /// nested at-rules and `&`-prefixed selector rules can appear here.
    pub(crate) fn parse_list_of_declarations(&mut self) -> Vec<Rule> {
        let mut list: Vec<Rule> = Vec::new();

        loop {
            match self.current().kind {
                TokenKind::Whitespace | TokenKind::Semicolon => self.advance(),

                TokenKind::EndOfFile | TokenKind::CloseBrace => {
                    if self.options.mangle_syntax {
                        list = remove_empty_and_duplicate_rules(list);
                    }
                    return list;
                }

                TokenKind::AtKeyword => {
                    let rule = self.parse_at_rule(AtRuleContext { is_declaration_list: true });
                    list.push(rule);
                }

                // The nesting delimiter starts a selector rule inside
                // this declaration block
                TokenKind::Ampersand => list.push(self.parse_selector_rule()),

                _ => list.push(self.parse_declaration()),
            }
        }
    }

    /// ```abnf
    /// declaration = IDENT [ws] ":" *component-value ["!" [ws] "important" [ws]] [";"]
    /// ```
    pub(crate) fn parse_declaration(&mut self) -> Rule {
        trace!("parse declaration");

        // Parse the key
        let key_start = self.index;
        let mut ok = false;
        if self.expect(TokenKind::Ident) {
            self.eat(TokenKind::Whitespace);
            if self.expect(TokenKind::Colon) {
                ok = true;
            }
        }

        // Parse the value
        let value_start = self.index;
        loop {
            match self.current().kind {
                TokenKind::EndOfFile | TokenKind::Semicolon | TokenKind::CloseBrace => break,

                TokenKind::OpenBrace => {
                    // An unexpected block, likely some CSS meta-syntax
                    self.parse_component_value();
                    self.eat(TokenKind::Whitespace);
                    if ok && !self.peek(TokenKind::Semicolon) {
                        self.expect(TokenKind::Semicolon);
                    }
                    break;
                }

                _ => self.parse_component_value(),
            }
        }

        // Without the "ident colon" prefix this is not a declaration;
        // keep everything consumed as raw tokens
        if !ok {
            let tokens = self.convert_tokens(key_start..self.index);
            return Rule::BadDeclaration { tokens };
        }

        let key_token = self.tokens[key_start];
        let key_text = key_token.decoded_text(&self.source.content);
        let tokens = self.tokens;
        let mut value = &tokens[value_start..self.index];

        // Custom property values must keep their whitespace byte-for-byte
        let verbatim_whitespace = key_text.starts_with("--");

        // Strip a trailing "!important"
        let mut important = false;
        let mut i = value.len();
        if i > 0 && value[i - 1].kind == TokenKind::Whitespace {
            i -= 1;
        }
        if i > 0
            && value[i - 1].kind == TokenKind::Ident
            && value[i - 1]
                .decoded_text(&self.source.content)
                .eq_ignore_ascii_case("important")
        {
            i -= 1;
            if i > 0 && value[i - 1].kind == TokenKind::Whitespace {
                i -= 1;
            }
            if i > 0 && value[i - 1].kind == TokenKind::ExclamationPoint {
                value = &value[..i - 1];
                important = true;
            }
        }

        let (mut result, _) = self.convert_tokens_helper(
            value,
            TokenKind::EndOfFile,
            ConvertOptions { allow_imports: true, verbatim_whitespace },
        );

        // Normalize the whitespace between the colon and the value
        if !verbatim_whitespace {
            if let Some(first) = result.first_mut() {
                if self.options.remove_whitespace {
                    first.whitespace.remove(WhitespaceFlags::BEFORE);
                } else {
                    first.whitespace.insert(WhitespaceFlags::BEFORE);
                }
            }
        }

        Rule::Declaration(Declaration {
            key: Property::from_text(&key_text),
            key_text,
            key_span: key_token.span,
            value: result,
            important,
        })
    }
}

use smol_str::SmolStr;

use crate::ast::selectors::{
    AttributeMatcher, AttributeSelector, Combinator, ComplexSelector, CompoundSelector,
    NamespacedName, PseudoSelector, SubclassSelector,
};
use crate::ast::NameToken;
use crate::lex::TokenKind;

use super::Parser;

impl Parser<'_, '_> {
    /// Parse a comma-separated selector list. On failure the cursor stays
    /// wherever the failure left it; the caller falls back to a generic
    /// qualified rule from its recorded prelude start.
    pub(crate) fn parse_selector_list(&mut self) -> Option<Vec<ComplexSelector>> {
        self.eat(TokenKind::Whitespace);
        let mut list = vec![self.parse_complex_selector()?];

        loop {
            self.eat(TokenKind::Whitespace);
            if !self.eat(TokenKind::Comma) {
                break;
            }
            self.eat(TokenKind::Whitespace);
            list.push(self.parse_complex_selector()?);
        }

        Some(list)
    }

    fn parse_complex_selector(&mut self) -> Option<ComplexSelector> {
        let mut selectors = vec![self.parse_compound_selector(None)?];

        loop {
            self.eat(TokenKind::Whitespace);
            if matches!(
                self.current().kind,
                TokenKind::EndOfFile | TokenKind::Comma | TokenKind::OpenBrace
            ) {
                break;
            }

            let combinator = self.parse_combinator();
            if combinator.is_some() {
                self.eat(TokenKind::Whitespace);
            }
            selectors.push(self.parse_compound_selector(combinator)?);
        }

        Some(ComplexSelector { selectors })
    }

    fn parse_combinator(&mut self) -> Option<Combinator> {
        let combinator = match self.current().kind {
            TokenKind::GreaterThan => Combinator::Child,
            TokenKind::Plus => Combinator::NextSibling,
            TokenKind::Tilde => Combinator::LaterSibling,
            _ => return None,
        };
        self.advance();
        Some(combinator)
    }

    fn name_token(&mut self) -> NameToken {
        NameToken { kind: self.current().kind, text: self.decoded() }
    }

    fn parse_compound_selector(&mut self, combinator: Option<Combinator>) -> Option<CompoundSelector> {
        let mut sel = CompoundSelector { combinator, ..CompoundSelector::default() };

        // The nesting prefix from css-nesting
        if self.eat(TokenKind::Ampersand) {
            sel.has_nesting_prefix = true;
        }

        // Parse the type selector
        if matches!(
            self.current().kind,
            TokenKind::Ident | TokenKind::Asterisk | TokenKind::Bar
        ) {
            let mut name = if self.peek(TokenKind::Bar) {
                // An empty prefix, as in "|div"
                NameToken { kind: TokenKind::Ident, text: SmolStr::default() }
            } else {
                let token = self.name_token();
                self.advance();
                token
            };

            let mut namespace_prefix = None;
            if self.peek(TokenKind::Bar) && self.next().kind != TokenKind::Equals {
                self.advance();
                if !matches!(self.current().kind, TokenKind::Ident | TokenKind::Asterisk) {
                    self.expect(TokenKind::Ident);
                    return None;
                }
                namespace_prefix = Some(name);
                name = self.name_token();
                self.advance();
            }

            sel.type_selector = Some(NamespacedName { namespace_prefix, name });
        }

        // Parse the subclass selectors
        loop {
            match self.current().kind {
                TokenKind::IdHash => {
                    sel.subclass_selectors.push(SubclassSelector::Id(self.decoded()));
                    self.advance();
                }

                TokenKind::Dot => {
                    self.advance();
                    if !self.peek(TokenKind::Ident) {
                        self.expect(TokenKind::Ident);
                        return None;
                    }
                    sel.subclass_selectors.push(SubclassSelector::Class(self.decoded()));
                    self.advance();
                }

                TokenKind::OpenBracket => {
                    self.advance();
                    let attribute = self.parse_attribute_selector()?;
                    sel.subclass_selectors.push(SubclassSelector::Attribute(attribute));
                }

                TokenKind::Colon => {
                    let pseudo = self.parse_pseudo_selector()?;
                    sel.subclass_selectors.push(SubclassSelector::Pseudo(pseudo));
                }

                _ => break,
            }
        }

        if !sel.has_nesting_prefix
            && sel.type_selector.is_none()
            && sel.subclass_selectors.is_empty()
        {
            self.unexpected();
            return None;
        }

        Some(sel)
    }

    fn parse_pseudo_selector(&mut self) -> Option<PseudoSelector> {
        self.advance();
        let is_element = self.eat(TokenKind::Colon);

        if self.peek(TokenKind::Function) {
            let name = self.decoded();
            self.advance();

            let args_start = self.index;
            loop {
                match self.current().kind {
                    TokenKind::CloseParen | TokenKind::EndOfFile => break,
                    _ => self.parse_component_value(),
                }
            }
            let args = self.convert_tokens(args_start..self.index);
            self.expect(TokenKind::CloseParen);

            return Some(PseudoSelector { name, args, is_element });
        }

        if !self.peek(TokenKind::Ident) {
            self.expect(TokenKind::Ident);
            return None;
        }
        let name = self.decoded();
        self.advance();
        Some(PseudoSelector { name, args: Vec::new(), is_element })
    }

    fn parse_attribute_selector(&mut self) -> Option<AttributeSelector> {
        self.eat(TokenKind::Whitespace);

        // Attribute names take the same namespace forms as type selectors
        let mut name = match self.current().kind {
            TokenKind::Bar => NameToken { kind: TokenKind::Ident, text: SmolStr::default() },
            TokenKind::Ident | TokenKind::Asterisk => {
                let token = self.name_token();
                self.advance();
                token
            }
            _ => {
                self.expect(TokenKind::Ident);
                return None;
            }
        };

        let mut namespace_prefix = None;

        // A lone "|" here is a namespace separator; "|=" is a matcher
        if self.peek(TokenKind::Bar) && self.next().kind != TokenKind::Equals {
            self.advance();
            if !self.peek(TokenKind::Ident) {
                self.expect(TokenKind::Ident);
                return None;
            }
            namespace_prefix = Some(name);
            name = self.name_token();
            self.advance();
        }
        let name = NamespacedName { namespace_prefix, name };

        self.eat(TokenKind::Whitespace);
        let op = match self.current().kind {
            TokenKind::Equals => {
                self.advance();
                Some(SmolStr::new("="))
            }

            kind @ (TokenKind::Tilde
            | TokenKind::Bar
            | TokenKind::Caret
            | TokenKind::Dollar
            | TokenKind::Asterisk) => {
                self.advance();
                if !self.expect(TokenKind::Equals) {
                    return None;
                }
                let sigil = match kind {
                    TokenKind::Tilde => '~',
                    TokenKind::Bar => '|',
                    TokenKind::Caret => '^',
                    TokenKind::Dollar => '$',
                    _ => '*',
                };
                Some(SmolStr::new(format!("{sigil}=")))
            }

            _ => None,
        };

        let matcher = match op {
            Some(op) => {
                self.eat(TokenKind::Whitespace);
                if !matches!(self.current().kind, TokenKind::String | TokenKind::Ident) {
                    self.expect(TokenKind::String);
                    return None;
                }
                let value = self.decoded();
                self.advance();

                self.eat(TokenKind::Whitespace);
                let mut modifier = None;
                if self.peek(TokenKind::Ident) {
                    let text = self.decoded();
                    if text.eq_ignore_ascii_case("i") || text.eq_ignore_ascii_case("s") {
                        modifier = text.chars().next().map(|c| c.to_ascii_lowercase());
                        self.advance();
                    }
                }

                Some(AttributeMatcher { op, value, modifier })
            }
            None => None,
        };

        self.eat(TokenKind::Whitespace);
        if !self.expect(TokenKind::CloseBracket) {
            return None;
        }

        Some(AttributeSelector { name, matcher })
    }
}

//! The CSS tokenizer. Token text is a projection over the source rather
//! than an owned copy; escapes are only decoded on demand.

#[cfg(test)]
mod tests;

use smol_str::SmolStr;

use crate::errors::Errors;
use crate::source::{Source, Span};

const REPLACEMENT: char = '\u{FFFD}';

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    EndOfFile,
    Whitespace,

    Ident,
    Function,
    AtKeyword,
    Hash,
    IdHash,

    String,
    BadString,
    Url,
    BadUrl,

    Number,
    Percentage,
    Dimension,

    Colon,
    Semicolon,
    Comma,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,

    Cdo,
    Cdc,

    Ampersand,
    Asterisk,
    Bar,
    Caret,
    Dollar,
    Dot,
    Equals,
    ExclamationPoint,
    GreaterThan,
    Minus,
    Plus,
    Slash,
    Tilde,
    Delim,
}

impl TokenKind {
    /// The name used when this kind appears in a diagnostic.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "end of file",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Ident => "identifier",
            TokenKind::Function => "function token",
            TokenKind::AtKeyword => "@-keyword",
            TokenKind::Hash | TokenKind::IdHash => "hash token",
            TokenKind::String => "string token",
            TokenKind::BadString => "bad string token",
            TokenKind::Url => "URL token",
            TokenKind::BadUrl => "bad URL token",
            TokenKind::Number => "number",
            TokenKind::Percentage => "percentage",
            TokenKind::Dimension => "dimension",
            TokenKind::Colon => "\":\"",
            TokenKind::Semicolon => "\";\"",
            TokenKind::Comma => "\",\"",
            TokenKind::OpenParen => "\"(\"",
            TokenKind::CloseParen => "\")\"",
            TokenKind::OpenBracket => "\"[\"",
            TokenKind::CloseBracket => "\"]\"",
            TokenKind::OpenBrace => "\"{\"",
            TokenKind::CloseBrace => "\"}\"",
            TokenKind::Cdo => "\"<!--\"",
            TokenKind::Cdc => "\"-->\"",
            TokenKind::Ampersand => "\"&\"",
            TokenKind::Asterisk => "\"*\"",
            TokenKind::Bar => "\"|\"",
            TokenKind::Caret => "\"^\"",
            TokenKind::Dollar => "\"$\"",
            TokenKind::Dot => "\".\"",
            TokenKind::Equals => "\"=\"",
            TokenKind::ExclamationPoint => "\"!\"",
            TokenKind::GreaterThan => "\">\"",
            TokenKind::Minus => "\"-\"",
            TokenKind::Plus => "\"+\"",
            TokenKind::Slash => "\"/\"",
            TokenKind::Tilde => "\"~\"",
            TokenKind::Delim => "delimiter",
        }
    }
}

/// A single lexical token. The token carries no text of its own; both the
/// raw and the decoded projections slice the source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,

    /// For dimensions, the byte offset of the unit within the token text.
    pub unit_offset: u16,
}

impl Token {
    pub fn raw<'a>(&self, content: &'a str) -> &'a str {
        &content[self.span.start..self.span.end]
    }

    /// The decoded-text projection: escapes resolved, quotes and `url(`
    /// wrappers stripped, names separated from their sigils.
    pub fn decoded_text(&self, content: &str) -> SmolStr {
        let raw = self.raw(content);
        match self.kind {
            TokenKind::Ident => decode(raw),
            TokenKind::Function => decode(&raw[..raw.len() - 1]),
            TokenKind::AtKeyword | TokenKind::Hash | TokenKind::IdHash => decode(&raw[1..]),
            TokenKind::String => decode_string(raw),
            TokenKind::Url => decode_url(raw),
            _ => SmolStr::new(raw),
        }
    }
}

/// Tokenize an entire source. The result does not include a trailing
/// end-of-file token; the parser synthesizes one at the source length.
pub fn tokenize(errors: &mut Errors, source: &Source) -> Vec<Token> {
    let mut lexer = Lexer { errors, source, position: 0 };
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::EndOfFile {
            break;
        }
        tokens.push(token);
    }

    tokens
}

struct Lexer<'a, 'err> {
    errors: &'err mut Errors,
    source: &'a Source,
    position: usize,
}

impl Lexer<'_, '_> {
    fn rest(&self) -> &str {
        &self.source.content[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    fn peek_third(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    fn next_token(&mut self) -> Token {
        let start = self.position;
        let mut unit_offset = 0;

        let kind = match self.peek() {
            None => TokenKind::EndOfFile,

            Some(c) if is_whitespace(c) || self.rest().starts_with("/*") => {
                self.consume_whitespace()
            }

            Some(quote @ ('"' | '\'')) => self.consume_string(quote),

            Some('#') => {
                self.bump();
                if self.peek().is_some_and(is_name) || self.is_valid_escape() {
                    let id = self.would_start_identifier();
                    self.consume_name();
                    if id {
                        TokenKind::IdHash
                    } else {
                        TokenKind::Hash
                    }
                } else {
                    TokenKind::Delim
                }
            }

            Some('+') => {
                if self.would_start_number() {
                    self.consume_numeric(start, &mut unit_offset)
                } else {
                    self.bump();
                    TokenKind::Plus
                }
            }

            Some('-') => {
                if self.rest().starts_with("-->") {
                    self.position += 3;
                    TokenKind::Cdc
                } else if self.would_start_number() {
                    self.consume_numeric(start, &mut unit_offset)
                } else if self.would_start_identifier() {
                    self.consume_ident_like()
                } else {
                    self.bump();
                    TokenKind::Minus
                }
            }

            Some('.') => {
                if self.would_start_number() {
                    self.consume_numeric(start, &mut unit_offset)
                } else {
                    self.bump();
                    TokenKind::Dot
                }
            }

            Some('<') => {
                if self.rest().starts_with("<!--") {
                    self.position += 4;
                    TokenKind::Cdo
                } else {
                    self.bump();
                    TokenKind::Delim
                }
            }

            Some('@') => {
                self.bump();
                if self.would_start_identifier() {
                    self.consume_name();
                    TokenKind::AtKeyword
                } else {
                    TokenKind::Delim
                }
            }

            Some('\\') => {
                if self.is_valid_escape() {
                    self.consume_ident_like()
                } else {
                    self.bump();
                    TokenKind::Delim
                }
            }

            Some(c) if c.is_ascii_digit() => self.consume_numeric(start, &mut unit_offset),
            Some(c) if is_name_start(c) => self.consume_ident_like(),

            Some(c) => {
                self.bump();
                match c {
                    ':' => TokenKind::Colon,
                    ';' => TokenKind::Semicolon,
                    ',' => TokenKind::Comma,
                    '(' => TokenKind::OpenParen,
                    ')' => TokenKind::CloseParen,
                    '[' => TokenKind::OpenBracket,
                    ']' => TokenKind::CloseBracket,
                    '{' => TokenKind::OpenBrace,
                    '}' => TokenKind::CloseBrace,
                    '&' => TokenKind::Ampersand,
                    '*' => TokenKind::Asterisk,
                    '|' => TokenKind::Bar,
                    '^' => TokenKind::Caret,
                    '$' => TokenKind::Dollar,
                    '=' => TokenKind::Equals,
                    '!' => TokenKind::ExclamationPoint,
                    '>' => TokenKind::GreaterThan,
                    '/' => TokenKind::Slash,
                    '~' => TokenKind::Tilde,
                    _ => TokenKind::Delim,
                }
            }
        };

        Token { kind, span: self.source.id.span(start, self.position), unit_offset }
    }

    /// Comments count as whitespace so that `a/**/b` keeps its separation.
    fn consume_whitespace(&mut self) -> TokenKind {
        loop {
            if self.peek().is_some_and(is_whitespace) {
                self.bump();
            } else if self.rest().starts_with("/*") {
                self.consume_comment();
            } else {
                break;
            }
        }
        TokenKind::Whitespace
    }

    fn consume_comment(&mut self) {
        let start = self.position;
        self.position += 2;
        match self.rest().find("*/") {
            Some(offset) => self.position += offset + 2,
            None => {
                self.position = self.source.content.len();
                let span = self.source.id.span(start, self.position);
                self.errors.lex_warning(span).unterminated_comment();
            }
        }
    }

    fn consume_string(&mut self, quote: char) -> TokenKind {
        let start = self.position;
        self.bump();

        loop {
            match self.peek() {
                None => {
                    let span = self.source.id.span(start, self.position);
                    self.errors.lex_warning(span).unterminated_string(quote);
                    return TokenKind::String;
                }

                Some(c) if c == quote => {
                    self.bump();
                    return TokenKind::String;
                }

                // The newline is left for the next token
                Some(c) if is_newline(c) => return TokenKind::BadString,

                Some('\\') => match self.peek_second() {
                    None => {
                        self.bump();
                    }
                    Some(c) if is_newline(c) => {
                        self.bump();
                        self.bump_newline();
                    }
                    Some(_) => self.consume_escape(),
                },

                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    fn consume_numeric(&mut self, start: usize, unit_offset: &mut u16) -> TokenKind {
        self.consume_number();

        if self.would_start_identifier() {
            *unit_offset = (self.position - start) as u16;
            self.consume_name();
            TokenKind::Dimension
        } else if self.peek() == Some('%') {
            self.bump();
            TokenKind::Percentage
        } else {
            TokenKind::Number
        }
    }

    fn consume_number(&mut self) {
        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }

        if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let exponent = match self.peek_second() {
                Some(c) if c.is_ascii_digit() => true,
                Some('+' | '-') => self.peek_third().is_some_and(|c| c.is_ascii_digit()),
                _ => false,
            };

            if exponent {
                self.bump();
                self.bump();
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.bump();
                }
            }
        }
    }

    fn consume_ident_like(&mut self) -> TokenKind {
        let name_start = self.position;
        self.consume_name();
        let is_url = self.source.content[name_start..self.position].eq_ignore_ascii_case("url");

        if self.peek() == Some('(') {
            self.bump();
            if is_url {
                // A quoted argument keeps this a plain function token
                let after = self.rest().trim_start_matches(|c: char| is_whitespace(c));
                match after.chars().next() {
                    Some('"' | '\'') => TokenKind::Function,
                    _ => self.consume_url(),
                }
            } else {
                TokenKind::Function
            }
        } else {
            TokenKind::Ident
        }
    }

    fn consume_url(&mut self) -> TokenKind {
        loop {
            match self.peek() {
                None => {
                    let span = self.source.id.span(self.position, self.position);
                    self.errors.lex_warning(span).unterminated_url();
                    return TokenKind::Url;
                }

                Some(')') => {
                    self.bump();
                    return TokenKind::Url;
                }

                Some(c) if is_whitespace(c) => {
                    while self.peek().is_some_and(is_whitespace) {
                        self.bump();
                    }
                    match self.peek() {
                        Some(')') => {
                            self.bump();
                            return TokenKind::Url;
                        }
                        None => {
                            let span = self.source.id.span(self.position, self.position);
                            self.errors.lex_warning(span).unterminated_url();
                            return TokenKind::Url;
                        }
                        Some(_) => {
                            self.consume_bad_url_remnants();
                            return TokenKind::BadUrl;
                        }
                    }
                }

                Some('"' | '\'' | '(') => {
                    self.consume_bad_url_remnants();
                    return TokenKind::BadUrl;
                }

                Some(c) if is_non_printable(c) => {
                    self.consume_bad_url_remnants();
                    return TokenKind::BadUrl;
                }

                Some('\\') => {
                    if self.is_valid_escape() {
                        self.consume_escape();
                    } else {
                        self.consume_bad_url_remnants();
                        return TokenKind::BadUrl;
                    }
                }

                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    fn consume_bad_url_remnants(&mut self) {
        loop {
            match self.peek() {
                None => return,
                Some(')') => {
                    self.bump();
                    return;
                }
                Some('\\') if self.is_valid_escape() => self.consume_escape(),
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    fn consume_name(&mut self) {
        loop {
            match self.peek() {
                Some(c) if is_name(c) => {
                    self.bump();
                }
                Some('\\') if self.is_valid_escape() => self.consume_escape(),
                _ => break,
            }
        }
    }

    /// Consume a valid escape: the backslash, the escaped code point or up
    /// to six hex digits, and the single whitespace that terminates a hex
    /// escape.
    fn consume_escape(&mut self) {
        self.bump();
        match self.peek() {
            Some(c) if c.is_ascii_hexdigit() => {
                let mut digits = 0;
                while digits < 6 && self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                    self.bump();
                    digits += 1;
                }
                if self.peek().is_some_and(is_whitespace) {
                    self.bump_newline();
                }
            }
            Some(_) => {
                self.bump();
            }
            None => {}
        }
    }

    /// Consume one whitespace code point, treating `\r\n` as a single one.
    fn bump_newline(&mut self) {
        if let Some(c) = self.bump() {
            if c == '\r' && self.peek() == Some('\n') {
                self.bump();
            }
        }
    }

    fn is_valid_escape(&self) -> bool {
        self.peek() == Some('\\') && !self.peek_second().is_some_and(is_newline)
    }

    fn would_start_identifier(&self) -> bool {
        match self.peek() {
            Some('-') => match self.peek_second() {
                Some('-') => true,
                Some(c) if is_name_start(c) => true,
                Some('\\') => !self.peek_third().is_some_and(is_newline),
                _ => false,
            },
            Some('\\') => self.is_valid_escape(),
            Some(c) => is_name_start(c),
            None => false,
        }
    }

    fn would_start_number(&self) -> bool {
        match self.peek() {
            Some('+' | '-') => match self.peek_second() {
                Some(c) if c.is_ascii_digit() => true,
                Some('.') => self.peek_third().is_some_and(|c| c.is_ascii_digit()),
                _ => false,
            },
            Some('.') => self.peek_second().is_some_and(|c| c.is_ascii_digit()),
            Some(c) => c.is_ascii_digit(),
            None => false,
        }
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')
}

fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\x0c')
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_name(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-'
}

fn is_non_printable(c: char) -> bool {
    matches!(c, '\x00'..='\x08' | '\x0b' | '\x0e'..='\x1f' | '\x7f')
}

fn decode(raw: &str) -> SmolStr {
    if !raw.contains('\\') {
        return SmolStr::new(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(c) = rest.chars().next() {
        if c != '\\' {
            out.push(c);
            rest = &rest[c.len_utf8()..];
            continue;
        }

        rest = &rest[1..];
        let Some(next) = rest.chars().next() else {
            out.push(REPLACEMENT);
            break;
        };

        if next.is_ascii_hexdigit() {
            let mut value = 0;
            let mut digits = 0;
            while digits < 6 {
                match rest.chars().next() {
                    Some(h) if h.is_ascii_hexdigit() => {
                        value = value * 16 + h.to_digit(16).unwrap();
                        rest = &rest[1..];
                        digits += 1;
                    }
                    _ => break,
                }
            }

            // A single whitespace terminates the hex escape
            if rest.starts_with("\r\n") {
                rest = &rest[2..];
            } else if let Some(w) = rest.chars().next() {
                if is_whitespace(w) {
                    rest = &rest[w.len_utf8()..];
                }
            }

            out.push(unescaped(value));
        } else if is_newline(next) {
            // Escaped newline in a string: a continuation, emits nothing
            if rest.starts_with("\r\n") {
                rest = &rest[2..];
            } else {
                rest = &rest[next.len_utf8()..];
            }
        } else {
            out.push(next);
            rest = &rest[next.len_utf8()..];
        }
    }

    SmolStr::new(out)
}

fn unescaped(value: u32) -> char {
    match char::from_u32(value) {
        Some(c) if value != 0 => c,
        _ => REPLACEMENT,
    }
}

fn decode_string(raw: &str) -> SmolStr {
    let mut inner = raw;
    if let Some(quote) = inner.chars().next() {
        inner = &inner[quote.len_utf8()..];
        if inner.ends_with(quote) {
            inner = &inner[..inner.len() - quote.len_utf8()];
        }
    }
    decode(inner)
}

fn decode_url(raw: &str) -> SmolStr {
    let mut inner = match raw.find('(') {
        Some(open) => &raw[open + 1..],
        None => raw,
    };
    if inner.ends_with(')') {
        inner = &inner[..inner.len() - 1];
    }
    decode(inner.trim_matches(|c: char| is_whitespace(c)))
}

mod at_rules;
mod declarations;
mod rules;
mod selectors;
mod values;

use smol_str::SmolStr;

use crate::ast::ImportRecord;
use crate::errors::Errors;
use crate::lex::{Token, TokenKind};
use crate::source::{Source, Span};

use super::Options;

pub(super) use self::rules::RuleContext;

pub(super) struct Parser<'a, 'err> {
    errors: &'err mut Errors,
    source: &'a Source,
    options: Options,
    tokens: &'a [Token],
    index: usize,
    end: usize,

    /// Start offset of the last reported expectation problem. Diagnostics
    /// at or before this position are dropped so one stray token cannot
    /// cascade into a wall of warnings.
    prev_error: Option<usize>,

    import_records: Vec<ImportRecord>,
}

impl<'a, 'err> Parser<'a, 'err> {
    pub fn new(
        errors: &'err mut Errors,
        source: &'a Source,
        tokens: &'a [Token],
        options: Options,
    ) -> Self {
        Self {
            errors,
            source,
            options,
            tokens,
            index: 0,
            end: tokens.len(),
            prev_error: None,
            import_records: Vec::new(),
        }
    }

    /// Hand back the import records collected during the parse.
    pub fn finish(self) -> Vec<ImportRecord> {
        self.import_records
    }

    pub(crate) fn advance(&mut self) {
        if self.index < self.end {
            self.index += 1;
        }
    }

    /// The token at `index`, or a synthesized end-of-file token pinned to
    /// the source length.
    pub(crate) fn at(&self, index: usize) -> Token {
        if index < self.end {
            return self.tokens[index];
        }

        let end = self.source.content.len();
        Token {
            kind: TokenKind::EndOfFile,
            span: self.source.id.span(end, end),
            unit_offset: 0,
        }
    }

    pub(crate) fn current(&self) -> Token {
        self.at(self.index)
    }

    pub(crate) fn next(&self) -> Token {
        self.at(self.index + 1)
    }

    pub(crate) fn decoded(&self) -> SmolStr {
        self.current().decoded_text(&self.source.content)
    }

    pub(crate) fn peek(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Advance past the current token iff it matches.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek(kind) {
            self.advance();
            return true;
        }
        false
    }

    /// Advance past the current token iff it matches; warn otherwise.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> bool {
        if self.eat(kind) {
            return true;
        }

        let t = self.current();

        // A missing semicolon reads best right after the value it should
        // have terminated
        if kind == TokenKind::Semicolon
            && self.index > 0
            && self.at(self.index - 1).kind == TokenKind::Whitespace
        {
            let at = self.at(self.index - 1).span;
            if self.fresh(at) {
                self.errors.parse_warning(at).missing_semicolon();
            }
            return false;
        }

        let (at, found) = self.describe(t);
        if self.fresh(at) {
            self.errors.parse_warning(at).expected_token(kind.name(), &found);
        }
        false
    }

    /// Warn that no production begins at the current token.
    pub(crate) fn unexpected(&mut self) {
        let t = self.current();
        let (at, found) = self.describe(t);
        if self.fresh(at) {
            self.errors.parse_warning(at).unexpected_token(&found);
        }
    }

    /// How a token reads in a diagnostic: kind names for the invisible and
    /// the unquotable, the quoted source slice for everything else.
    fn describe(&self, t: Token) -> (Span, String) {
        match t.kind {
            TokenKind::EndOfFile | TokenKind::Whitespace => {
                (t.span.collapse(), t.kind.name().to_string())
            }
            TokenKind::BadUrl | TokenKind::BadString => (t.span, t.kind.name().to_string()),
            _ => (t.span, format!("{:?}", t.raw(&self.source.content))),
        }
    }

    /// True when a diagnostic at `at` is past everything already reported;
    /// marks the position as reported.
    fn fresh(&mut self, at: Span) -> bool {
        match self.prev_error {
            Some(start) if at.start <= start => false,
            _ => {
                self.prev_error = Some(at.start);
                true
            }
        }
    }
}

use crate::errors::{Error, ErrorId, ErrorType, Errors, Severity};
use crate::source::Span;

impl Errors {
    pub(crate) fn parse_warning(&mut self, at: Span) -> ParseWarnings {
        ParseWarnings { errors: self, primary: at }
    }
}

pub(crate) struct ParseWarnings<'a> {
    errors: &'a mut Errors,
    primary: Span,
}

impl ParseWarnings<'_> {
    pub fn expected_token(&mut self, expected: &str, found: &str) -> ErrorId {
        let error = self.warning(format!("Expected {expected} but found {found}"));
        self.errors.add(error)
    }

    /// The trailing-semicolon case points at the whitespace right after the
    /// value instead of at whatever the next token happens to be.
    pub fn missing_semicolon(&mut self) -> ErrorId {
        let error = self.warning("Expected \";\"");
        self.errors.add(error)
    }

    pub fn unexpected_token(&mut self, found: &str) -> ErrorId {
        let error = self.warning(format!("Unexpected {found}"));
        self.errors.add(error)
    }

    pub fn charset_not_first(&mut self, previous: Span) -> ErrorId {
        let error = self
            .warning("\"@charset\" must be the first rule in the file")
            .with_label(previous, "This rule cannot come before a \"@charset\" rule");
        self.errors.add(error)
    }

    pub fn imports_come_first(&mut self, previous: Span) -> ErrorId {
        let error = self
            .warning("All \"@import\" rules must come first")
            .with_label(previous, "This rule cannot come before an \"@import\" rule");
        self.errors.add(error)
    }

    pub fn unsupported_charset(&mut self, encoding: &str) -> ErrorId {
        let error = Error::new(
            ErrorType::Encoding,
            Severity::Warning,
            self.primary,
            format!("\"UTF-8\" will be used instead of unsupported charset {encoding:?}"),
        );
        self.errors.add(error)
    }

    pub fn unsupported_namespace(&mut self) -> ErrorId {
        let error = self.warning("\"@namespace\" rules are not supported");
        self.errors.add(error)
    }

    fn warning(&mut self, title: impl Into<String>) -> Error {
        Error::new(ErrorType::Syntax, Severity::Warning, self.primary, title)
    }
}

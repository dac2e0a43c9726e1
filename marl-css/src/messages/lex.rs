use crate::errors::{Error, ErrorId, ErrorType, Errors, Severity};
use crate::source::Span;

impl Errors {
    pub(crate) fn lex_warning(&mut self, at: Span) -> LexWarnings {
        LexWarnings { errors: self, primary: at }
    }
}

pub(crate) struct LexWarnings<'a> {
    errors: &'a mut Errors,
    primary: Span,
}

impl LexWarnings<'_> {
    pub fn unterminated_comment(&mut self) -> ErrorId {
        let error = self.warning("Expected \"*/\" to terminate multi-line comment");
        self.errors.add(error)
    }

    pub fn unterminated_string(&mut self, quote: char) -> ErrorId {
        let error = self.warning(format!("Expected {quote:?} to terminate string"));
        self.errors.add(error)
    }

    pub fn unterminated_url(&mut self) -> ErrorId {
        let error = self.warning("Expected \")\" to terminate URL token");
        self.errors.add(error)
    }

    fn warning(&mut self, title: impl Into<String>) -> Error {
        Error::new(ErrorType::Syntax, Severity::Warning, self.primary, title)
    }
}

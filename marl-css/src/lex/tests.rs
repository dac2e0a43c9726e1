use proptest::{prop_assert, prop_assert_eq, proptest};

use super::{tokenize, Token, TokenKind};
use crate::errors::Errors;
use crate::source::Sources;

fn lex(text: &str) -> (Vec<Token>, usize) {
    let mut sources = Sources::new();
    let id = sources.add(text);
    let mut errors = Errors::new();
    let tokens = tokenize(&mut errors, sources.get(id));
    (tokens, errors.num_warnings())
}

fn kinds(text: &str) -> Vec<TokenKind> {
    lex(text).0.into_iter().map(|token| token.kind).collect()
}

fn decoded(text: &str) -> String {
    let (tokens, _) = lex(text);
    tokens[0].decoded_text(text).to_string()
}

#[test]
fn simple_rule() {
    let expected = vec![
        TokenKind::Ident,
        TokenKind::Whitespace,
        TokenKind::OpenBrace,
        TokenKind::Whitespace,
        TokenKind::Ident,
        TokenKind::Colon,
        TokenKind::Whitespace,
        TokenKind::Ident,
        TokenKind::Semicolon,
        TokenKind::Whitespace,
        TokenKind::CloseBrace,
    ];
    assert_eq!(expected, kinds("a { color: red; }"));
}

#[test]
fn numeric_tokens() {
    assert_eq!(vec![TokenKind::Number], kinds("12"));
    assert_eq!(vec![TokenKind::Number], kinds("-1.5e3"));
    assert_eq!(vec![TokenKind::Percentage], kinds("50%"));
    assert_eq!(vec![TokenKind::Dimension], kinds("12.5px"));
    assert_eq!(vec![TokenKind::Dot, TokenKind::Ident], kinds(".red"));
}

#[test]
fn dimension_unit_offset() {
    let (tokens, _) = lex("12.5px");
    assert_eq!(TokenKind::Dimension, tokens[0].kind);
    assert_eq!(4, tokens[0].unit_offset);

    let (tokens, _) = lex("-3em");
    assert_eq!(2, tokens[0].unit_offset);
}

#[test]
fn url_forms() {
    // Unquoted contents belong to the url token itself
    assert_eq!(vec![TokenKind::Url], kinds("url(foo.png)"));
    assert_eq!(vec![TokenKind::Url], kinds("url(  foo.png  )"));
    assert_eq!(vec![TokenKind::Url], kinds("URL(foo.png)"));

    // Quoted contents keep this a plain function call
    assert_eq!(
        vec![TokenKind::Function, TokenKind::String, TokenKind::CloseParen],
        kinds("url(\"foo.png\")")
    );

    // Interior whitespace makes the token unusable
    assert_eq!(vec![TokenKind::BadUrl], kinds("url(a b)"));
    assert_eq!(vec![TokenKind::BadUrl], kinds("url(a\"b)"));
}

#[test]
fn url_decoding() {
    assert_eq!("foo.png", decoded("url( foo.png )"));
    assert_eq!("a)b", decoded("url(a\\)b)"));
}

#[test]
fn hash_tokens() {
    assert_eq!(vec![TokenKind::IdHash], kinds("#foo"));
    assert_eq!(vec![TokenKind::Hash], kinds("#0af"));
    assert_eq!(vec![TokenKind::Delim], kinds("#"));
    assert_eq!("foo", decoded("#foo"));
}

#[test]
fn at_keywords() {
    assert_eq!(vec![TokenKind::AtKeyword], kinds("@media"));
    assert_eq!(vec![TokenKind::AtKeyword], kinds("@-moz-document"));
    assert_eq!("media", decoded("@media"));
    assert_eq!(vec![TokenKind::Delim, TokenKind::Whitespace], kinds("@ "));
}

#[test]
fn ident_escapes() {
    // "\41" followed by the terminating space is the letter A
    assert_eq!(vec![TokenKind::Ident], kinds("\\41 B"));
    assert_eq!("AB", decoded("\\41 B"));
    assert_eq!("a b", decoded("a\\ b"));
}

#[test]
fn custom_property_names() {
    assert_eq!(vec![TokenKind::Ident], kinds("--main-color"));
    assert_eq!("--main-color", decoded("--main-color"));
}

#[test]
fn strings() {
    assert_eq!(vec![TokenKind::String], kinds("\"hello\""));
    assert_eq!("hello", decoded("\"hello\""));
    assert_eq!("a\"b", decoded("\"a\\\"b\""));
    assert_eq!("it's", decoded("'it\\'s'"));
}

#[test]
fn bad_string_stops_at_newline() {
    assert_eq!(
        vec![TokenKind::BadString, TokenKind::Whitespace, TokenKind::Ident],
        kinds("\"abc\n x")
    );
}

#[test]
fn unterminated_string_warns() {
    let (tokens, warnings) = lex("\"abc");
    assert_eq!(vec![TokenKind::String], tokens.iter().map(|t| t.kind).collect::<Vec<_>>());
    assert_eq!(1, warnings);
}

#[test]
fn comments_count_as_whitespace() {
    assert_eq!(
        vec![TokenKind::Ident, TokenKind::Whitespace, TokenKind::Ident],
        kinds("a/**/b")
    );
    assert_eq!(
        vec![TokenKind::Ident, TokenKind::Whitespace, TokenKind::Ident],
        kinds("a /* x */ b")
    );
}

#[test]
fn unterminated_comment_warns() {
    let (tokens, warnings) = lex("/* x");
    assert_eq!(vec![TokenKind::Whitespace], tokens.iter().map(|t| t.kind).collect::<Vec<_>>());
    assert_eq!(1, warnings);
}

#[test]
fn html_comment_delimiters() {
    assert_eq!(vec![TokenKind::Cdo, TokenKind::Whitespace, TokenKind::Cdc], kinds("<!-- -->"));
}

#[test]
fn selector_delimiters() {
    assert_eq!(
        vec![
            TokenKind::Ident,
            TokenKind::Whitespace,
            TokenKind::GreaterThan,
            TokenKind::Whitespace,
            TokenKind::Dot,
            TokenKind::Ident,
        ],
        kinds("a > .b")
    );
    assert_eq!(vec![TokenKind::Ampersand, TokenKind::Colon, TokenKind::Ident], kinds("&:hover"));
}

proptest! {
    #[test]
    fn tokens_tile_the_source(s in r".*") {
        let (tokens, _) = lex(&s);

        let mut position = 0;
        for token in &tokens {
            prop_assert_eq!(position, token.span.start);
            prop_assert!(token.span.end > token.span.start);
            position = token.span.end;
        }
        prop_assert_eq!(position, s.len());
    }
}

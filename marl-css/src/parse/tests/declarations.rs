use crate::ast::{Property, Rule, WhitespaceFlags};
use crate::lex::TokenKind;

use super::{declaration, parse_styles, parsed, selector_rules};

#[test]
fn important_flag() {
    let sheet = parsed("a { color: red !important }");
    let declaration = declaration(&selector_rules(&sheet.rules[0])[0]);

    assert!(declaration.important);
    assert_eq!(1, declaration.value.len());
    assert_eq!("red", declaration.value[0].text);
}

#[test]
fn important_is_case_insensitive() {
    let sheet = parsed("a { color: red !IMPORTANT; }");
    assert!(declaration(&selector_rules(&sheet.rules[0])[0]).important);
}

#[test]
fn missing_colon_recovers() {
    let (sheet, titles) = parse_styles("a { color red }", Default::default());
    assert_eq!(1, titles.len());
    assert_eq!("Expected \":\" but found \"red\"", titles[0]);

    let rules = selector_rules(&sheet.rules[0]);
    match &rules[0] {
        Rule::BadDeclaration { tokens } => {
            assert_eq!(2, tokens.len());
            assert_eq!("color", tokens[0].text);
            assert_eq!("red", tokens[1].text);
        }
        other => panic!("expected a bad declaration, found {other:?}"),
    }
}

#[test]
fn parse_continues_after_bad_declaration() {
    let (sheet, _) = parse_styles("a { color red; width: 1px }", Default::default());
    let rules = selector_rules(&sheet.rules[0]);
    assert_eq!(2, rules.len());
    assert_eq!("width", declaration(&rules[1]).key_text);
}

#[test]
fn unknown_property() {
    let sheet = parsed("a { frobnicate: yes }");
    let declaration = declaration(&selector_rules(&sheet.rules[0])[0]);
    assert_eq!(Property::Unknown, declaration.key);
    assert_eq!("frobnicate", declaration.key_text);
}

#[test]
fn custom_property_keeps_verbatim_whitespace() {
    let sheet = parsed("a { --x: 1  2 }");
    let declaration = declaration(&selector_rules(&sheet.rules[0])[0]);

    assert_eq!(Property::Unknown, declaration.key);
    assert_eq!("--x", declaration.key_text);

    // Both numbers keep their boundary whitespace; nothing is trimmed
    assert_eq!(2, declaration.value.len());
    assert_eq!(
        WhitespaceFlags::BEFORE | WhitespaceFlags::AFTER,
        declaration.value[0].whitespace
    );
    assert_eq!(WhitespaceFlags::BEFORE, declaration.value[1].whitespace);
}

#[test]
fn custom_property_of_only_whitespace() {
    // With nothing to carry the flags, the whitespace itself is the value
    let sheet = parsed("a { --x: }");
    let declaration = declaration(&selector_rules(&sheet.rules[0])[0]);
    assert_eq!(1, declaration.value.len());
    assert_eq!(TokenKind::Whitespace, declaration.value[0].kind);
}

#[test]
fn block_in_value_recovers_and_wants_a_semicolon() {
    let (sheet, titles) = parse_styles("a { color: red {bad} width: 1px }", Default::default());
    assert_eq!(vec!["Expected \";\"".to_string()], titles);

    // The declaration after the recovery point still parses
    let rules = selector_rules(&sheet.rules[0]);
    assert_eq!(2, rules.len());
    assert_eq!("width", declaration(&rules[1]).key_text);
}

#[test]
fn stray_semicolons_are_skipped() {
    let sheet = parsed("a { ; ; color: red ; ; }");
    assert_eq!(1, selector_rules(&sheet.rules[0]).len());
}

#[test]
fn value_url_creates_an_import_record() {
    let sheet = parsed("a { background: url(img.png) }");
    let declaration = declaration(&selector_rules(&sheet.rules[0])[0]);

    assert_eq!(TokenKind::Url, declaration.value[0].kind);
    assert_eq!("", declaration.value[0].text);
    assert_eq!(Some(0), declaration.value[0].import_record_index);

    assert_eq!(1, sheet.import_records.len());
    assert_eq!("img.png", sheet.import_records[0].path);
    assert!(!sheet.import_records[0].is_unused);
}

#[test]
fn url_function_with_string_becomes_a_url_token() {
    let sheet = parsed("a { background: url(\"img.png\") }");
    let declaration = declaration(&selector_rules(&sheet.rules[0])[0]);

    assert_eq!(TokenKind::Url, declaration.value[0].kind);
    assert!(declaration.value[0].children.is_none());
    assert_eq!("img.png", sheet.import_records[0].path);
}

#[test]
fn var_arguments_are_verbatim() {
    let sheet = parsed("a { color: var( --x ) }");
    let declaration = declaration(&selector_rules(&sheet.rules[0])[0]);

    assert_eq!(TokenKind::Function, declaration.value[0].kind);
    assert_eq!("var", declaration.value[0].text);

    let children = declaration.value[0].children.as_ref().unwrap();
    assert_eq!(1, children.len());
    assert_eq!("--x", children[0].text);
    assert_eq!(
        WhitespaceFlags::BEFORE | WhitespaceFlags::AFTER,
        children[0].whitespace
    );
}

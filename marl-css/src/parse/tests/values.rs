use crate::ast::WhitespaceFlags;
use crate::lex::TokenKind;

use super::{declaration, parse_styles, parsed, selector_rules};
use crate::parse::Options;

fn value_of(text: &str, options: Options) -> Vec<crate::ast::Token> {
    let (sheet, warnings) = parse_styles(text, options);
    assert_eq!(Vec::<String>::new(), warnings, "expected a clean parse of {text:?}");
    declaration(&selector_rules(&sheet.rules[0])[0]).value.clone()
}

#[test]
fn commas_normalize_whitespace() {
    let value = value_of("a { font-family: x , y }", Options::default());

    assert_eq!(3, value.len());
    assert_eq!(WhitespaceFlags::BEFORE, value[0].whitespace);
    assert_eq!(TokenKind::Comma, value[1].kind);
    assert_eq!(WhitespaceFlags::AFTER, value[1].whitespace);
    assert_eq!(WhitespaceFlags::BEFORE, value[2].whitespace);
}

#[test]
fn commas_strip_whitespace_when_minifying() {
    let options = Options { remove_whitespace: true, ..Options::default() };
    let value = value_of("a { font-family: x , y }", options);

    assert_eq!(WhitespaceFlags::empty(), value[0].whitespace);
    assert_eq!(WhitespaceFlags::empty(), value[1].whitespace);
    assert_eq!(WhitespaceFlags::empty(), value[2].whitespace);
}

#[test]
fn nested_groups() {
    let value = value_of("a { width: calc((1px + 2px) * 3) }", Options::default());

    assert_eq!(TokenKind::Function, value[0].kind);
    assert_eq!("calc", value[0].text);

    let children = value[0].children.as_ref().unwrap();
    assert_eq!(TokenKind::OpenParen, children[0].kind);
    let inner = children[0].children.as_ref().unwrap();
    assert_eq!(3, inner.len());
    assert_eq!("1px", inner[0].text);
}

#[test]
fn numbers_mangle_in_values() {
    let options = Options { mangle_syntax: true, ..Options::default() };
    let value = value_of("a { opacity: 0.50 }", options);
    assert_eq!(".5", value[0].text);
}

#[test]
fn percentages_mangle_in_values() {
    let options = Options { mangle_syntax: true, ..Options::default() };
    let value = value_of("a { width: 50.0% }", options);
    assert_eq!("50%", value[0].text);
}

#[test]
fn dimensions_mangle_in_values() {
    let options = Options { mangle_syntax: true, ..Options::default() };
    let value = value_of("a { width: 1.50px }", options);
    assert_eq!("1.5px", value[0].text);
    assert_eq!("1.5", value[0].dimension_value());
    assert_eq!("px", value[0].dimension_unit());
}

#[test]
fn time_dimensions_convert_units() {
    let options = Options { mangle_syntax: true, ..Options::default() };

    // ".5ms" beats "0.0005s" on length
    let value = value_of("a { transition-delay: 0.50ms }", options);
    assert_eq!(".5ms", value[0].text);
    assert_eq!(2, value[0].unit_offset);

    // ".5s" beats "500ms"
    let value = value_of("a { transition-delay: 500ms }", options);
    assert_eq!(".5s", value[0].text);
    assert_eq!("s", value[0].dimension_unit());
}

#[test]
fn unmangled_values_keep_their_text() {
    let value = value_of("a { opacity: 0.50 }", Options::default());
    assert_eq!("0.50", value[0].text);
}

#[test]
fn brace_groups_pad_for_pretty_printing() {
    let (sheet, _) = parse_styles("@foo { x }", Options::default());
    match &sheet.rules[0] {
        crate::ast::Rule::UnknownAt { block: Some(block), .. } => {
            let children = block[0].children.as_ref().unwrap();
            assert_eq!(
                WhitespaceFlags::BEFORE | WhitespaceFlags::AFTER,
                children[0].whitespace
            );
        }
        other => panic!("expected an unknown at-rule with a block, found {other:?}"),
    }
}

#[test]
fn exponent_numbers_are_left_alone() {
    let options = Options { mangle_syntax: true, ..Options::default() };
    let value = value_of("a { width: 1.50e2px }", options);
    assert_eq!("1.50e2px", value[0].text);
}

#[test]
fn whole_sheet_shape() {
    let sheet = parsed("a { color: red }\nb { color: blue }");
    assert_eq!(2, sheet.rules.len());
}

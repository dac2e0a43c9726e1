use crate::ast::{Declaration, Rule, StyleSheet};
use crate::errors::Errors;
use crate::source::Sources;

use super::{parse, Options};

mod declarations;
mod junk;
mod minify;
mod values;

fn parse_styles(text: &str, options: Options) -> (StyleSheet, Vec<String>) {
    let mut sources = Sources::new();
    let id = sources.add(text);
    let mut errors = Errors::new();
    let sheet = parse(&mut errors, sources.get(id), options);

    let mut reports: Vec<_> = errors.drain().collect();
    reports.sort_by_key(|(id, _)| *id);
    let titles = reports.into_iter().map(|(_, error)| error.title).collect();

    (sheet, titles)
}

fn parsed(text: &str) -> StyleSheet {
    let (sheet, warnings) = parse_styles(text, Options::default());
    assert_eq!(Vec::<String>::new(), warnings, "expected a clean parse of {text:?}");
    sheet
}

fn mangled(text: &str) -> StyleSheet {
    let options = Options { mangle_syntax: true, ..Options::default() };
    parse_styles(text, options).0
}

fn warnings(text: &str) -> Vec<String> {
    parse_styles(text, Options::default()).1
}

fn selector_rules(rule: &Rule) -> &[Rule] {
    match rule {
        Rule::Selector { rules, .. } => rules,
        other => panic!("expected a selector rule, found {other:?}"),
    }
}

fn declaration(rule: &Rule) -> &Declaration {
    match rule {
        Rule::Declaration(declaration) => declaration,
        other => panic!("expected a declaration, found {other:?}"),
    }
}

//! The parser should be total: any input produces a tree and warnings,
//! never a panic, and the same input always produces the same tree.

use proptest::{prop_assert, proptest};

use crate::errors::Errors;
use crate::source::Sources;

use super::super::{parse, Options};

fn survives(text: &str) {
    let mut sources = Sources::new();
    let id = sources.add(text);
    let mut errors = Errors::new();
    let _ = parse(&mut errors, sources.get(id), Options::default());

    let options = Options { mangle_syntax: true, remove_whitespace: true, ..Options::default() };
    let _ = parse(&mut errors, sources.get(id), options);
}

proptest! {
    #[test]
    fn doesnt_crash(s in r".*") {
        survives(&s);
    }

    #[test]
    fn doesnt_crash_on_css_shaped_input(s in r"[a-z@{}();:,.#&%\x22 \n-]{0,40}") {
        survives(&s);
    }

    #[test]
    fn parsing_is_deterministic(s in r"[a-z@{}();:, \n-]{0,40}") {
        let mut sources = Sources::new();
        let id = sources.add(s);

        let mut errors = Errors::new();
        let first = parse(&mut errors, sources.get(id), Options::default());
        let second = parse(&mut errors, sources.get(id), Options::default());

        prop_assert!(first.rules == second.rules);
        prop_assert!(first.import_records == second.import_records);
    }
}

#[test]
fn tolerates_tiny_gibberish() {
    survives("ï¿¼0{");
    survives("(\u{a8ff}");
    survives("@@@@");
    survives("}}}}");
    survives("a{b{c{d{");
    survives("url(");
    survives("\"");
}

#[test]
fn empty_source_is_empty() {
    let mut sources = Sources::new();
    let id = sources.add("");
    let mut errors = Errors::new();
    let sheet = parse(&mut errors, sources.get(id), Options::default());

    assert!(sheet.rules.is_empty());
    assert!(errors.is_perfect());
}

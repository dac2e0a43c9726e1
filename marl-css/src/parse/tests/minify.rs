use proptest::{prop_assert, prop_assert_eq, proptest};

use crate::ast::Rule;
use crate::parse::minify::{mangle_dimension, mangle_number, shift_dot};

use super::{mangled, selector_rules};

#[test]
fn mangle_number_drops_redundant_text() {
    assert_eq!(Some("1".into()), mangle_number("1.0"));
    assert_eq!(Some("0".into()), mangle_number("0.0"));
    assert_eq!(Some(".5".into()), mangle_number("0.50"));
    assert_eq!(Some("-.5".into()), mangle_number("-0.5"));
    assert_eq!(Some("+.5".into()), mangle_number("+0.50"));
    assert_eq!(Some("10".into()), mangle_number("10.000"));
    assert_eq!(Some(".05".into()), mangle_number("0.05"));
}

#[test]
fn mangle_number_leaves_short_forms_alone() {
    assert_eq!(None, mangle_number("10"));
    assert_eq!(None, mangle_number(".5"));
    assert_eq!(None, mangle_number("1.5"));
    assert_eq!(None, mangle_number("0"));
}

#[test]
fn mangle_number_ignores_exponents() {
    assert_eq!(None, mangle_number("1.50e3"));
    assert_eq!(None, mangle_number("1E2"));
}

#[test]
fn shift_dot_moves_the_point() {
    assert_eq!(Some(".5".into()), shift_dot("500", -3));
    assert_eq!(Some("500".into()), shift_dot("0.5", 3));
    assert_eq!(Some(".0005".into()), shift_dot(".5", -3));
    assert_eq!(Some("-.25".into()), shift_dot("-250", -3));
    assert_eq!(Some("1500".into()), shift_dot("1.5", 3));
    assert_eq!(None, shift_dot("1e3", 3));
}

#[test]
fn dimension_times_pick_the_shorter_unit() {
    assert_eq!(Some((".5".into(), "s")), mangle_dimension("500", "ms"));
    assert_eq!(Some((".1".into(), "s")), mangle_dimension("100", "ms"));
    assert_eq!(Some(("2".into(), "ms")), mangle_dimension("0.002", "s"));

    // Neither direction gets shorter here
    assert_eq!(None, mangle_dimension("0.5", "s"));
    assert_eq!(None, mangle_dimension("2", "s"));
    assert_eq!(None, mangle_dimension("1.5", "ms"));

    // Only time units take part
    assert_eq!(None, mangle_dimension("500", "px"));
}

#[test]
fn duplicate_declarations_keep_the_last() {
    let sheet = mangled("a { color: red; color: red }");
    assert_eq!(1, selector_rules(&sheet.rules[0]).len());
}

#[test]
fn differing_declarations_both_stay() {
    let sheet = mangled("a { color: red; color: blue }");
    assert_eq!(2, selector_rules(&sheet.rules[0]).len());
}

#[test]
fn duplicate_rules_keep_the_last() {
    let sheet = mangled("a { color: red } b { color: blue } a { color: red }");
    assert_eq!(2, sheet.rules.len());

    // The survivor of the duplicate pair is the later occurrence
    match &sheet.rules[0] {
        Rule::Selector { selectors, .. } => {
            let name = selectors[0].selectors[0].type_selector.as_ref().unwrap();
            assert_eq!("b", name.name.text);
        }
        other => panic!("expected a selector rule, found {other:?}"),
    }
}

#[test]
fn empty_rules_drop_when_mangling() {
    let sheet = mangled("a {} @media print {} b { color: red }");
    assert_eq!(1, sheet.rules.len());
}

#[test]
fn empty_rules_stay_without_mangling() {
    let sheet = super::parsed("a {} @media print {}");
    assert_eq!(2, sheet.rules.len());
}

#[test]
fn imports_never_deduplicate() {
    let sheet = mangled("@import \"x.css\"; @import \"x.css\";");
    assert_eq!(2, sheet.rules.len());
    assert_eq!(2, sheet.import_records.len());
}

proptest! {
    #[test]
    fn mangle_number_is_idempotent(s in r"[+-]?[0-9]{1,4}\.[0-9]{1,4}") {
        if let Some(once) = mangle_number(&s) {
            prop_assert_eq!(None, mangle_number(&once));
        }
    }

    #[test]
    fn mangle_number_preserves_the_value(s in r"[+-]?[0-9]{1,4}\.[0-9]{1,4}") {
        if let Some(once) = mangle_number(&s) {
            let before: f64 = s.parse().unwrap();
            let after: f64 = once.parse().unwrap();
            prop_assert_eq!(before, after);
        }
    }

    #[test]
    fn shift_dot_round_trips(s in r"[1-9][0-9]{0,4}(\.[0-9]{1,5})?") {
        let there = shift_dot(&s, 3).unwrap();
        let back = shift_dot(&there, -3).unwrap();

        let original: f64 = s.parse().unwrap();
        let returned: f64 = back.parse().unwrap();
        prop_assert!((original - returned).abs() < 1e-9);
    }
}

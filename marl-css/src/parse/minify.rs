use std::collections::HashMap;

use smol_str::SmolStr;

use crate::ast::Rule;

/// Drop rules with empty bodies and all but the last copy of equivalent
/// rules. The scan runs from the back so that the copy that wins the
/// cascade is the one that survives.
pub(super) fn remove_empty_and_duplicate_rules(rules: Vec<Rule>) -> Vec<Rule> {
    let mut keep = vec![false; rules.len()];
    let mut buckets: HashMap<u32, Vec<usize>> = HashMap::new();

    'rules: for i in (0..rules.len()).rev() {
        let rule = &rules[i];

        if rule.is_empty() {
            continue;
        }

        if let Some(hash) = rule.structural_hash() {
            let bucket = buckets.entry(hash).or_default();
            for &seen in bucket.iter() {
                if *rule == rules[seen] {
                    continue 'rules;
                }
            }
            bucket.push(i);
        }

        keep[i] = true;
    }

    let mut keep = keep.into_iter();
    let mut rules = rules;
    rules.retain(|_| keep.next().unwrap());
    rules
}

/// Shorten a numeric text without changing its value: trailing fractional
/// zeros go, then an unnecessary decimal point, then a redundant leading
/// zero. Returns the new text only when something changed.
pub(super) fn mangle_number(text: &str) -> Option<SmolStr> {
    // Exponent forms interact badly with the dot rules; leave them alone
    if text.contains(['e', 'E']) {
        return None;
    }

    let dot = text.find('.')?;
    let mut t = text.trim_end_matches('0');

    if dot + 1 == t.len() {
        // The fraction is gone, so the dot can go too
        t = &t[..dot];
        if t.is_empty() || t == "+" || t == "-" {
            return Some(SmolStr::new(format!("{t}0")));
        }
        return Some(SmolStr::new(t));
    }

    let bytes = t.as_bytes();
    if t.len() >= 3 && bytes[0] == b'0' && bytes[1] == b'.' && bytes[2].is_ascii_digit() {
        return Some(SmolStr::new(&t[1..]));
    }
    if t.len() >= 4
        && (bytes[0] == b'+' || bytes[0] == b'-')
        && bytes[1] == b'0'
        && bytes[2] == b'.'
        && bytes[3].is_ascii_digit()
    {
        return Some(SmolStr::new(format!("{}{}", &t[..1], &t[2..])));
    }

    (t != text).then(|| SmolStr::new(t))
}

/// Move the decimal point of an exponent-free number by `offset` digits,
/// trimming zeros on both ends and rebuilding the shortest textual form.
pub(super) fn shift_dot(text: &str, offset: isize) -> Option<String> {
    if text.contains(['e', 'E']) {
        return None;
    }

    let (sign, mut digits) = match text.as_bytes().first() {
        Some(b'+' | b'-') => (&text[..1], String::from(&text[1..])),
        _ => ("", String::from(text)),
    };

    // Remove the dot
    let mut dot = match digits.find('.') {
        Some(index) => {
            digits.remove(index);
            index as isize
        }
        None => digits.len() as isize,
    };

    // Move the dot
    dot += offset;

    // Remove leading zeros before the dot
    while !digits.is_empty() && dot > 0 && digits.starts_with('0') {
        digits.remove(0);
        dot -= 1;
    }

    // Remove trailing zeros after the dot
    while !digits.is_empty() && (digits.len() as isize) > dot && digits.ends_with('0') {
        digits.pop();
    }

    // No fractional component left
    if dot >= digits.len() as isize {
        let zeros = "0".repeat((dot - digits.len() as isize) as usize);
        return Some(format!("{sign}{digits}{zeros}"));
    }

    // A fractional component, possibly needing leading zeros back
    if dot < 0 {
        let zeros = "0".repeat((-dot) as usize);
        digits.insert_str(0, &zeros);
        dot = 0;
    }

    let (integral, fractional) = digits.split_at(dot as usize);
    Some(format!("{sign}{integral}.{fractional}"))
}

/// Convert between "ms" and "s" when the other spelling is strictly
/// shorter. Other units are left alone.
pub(super) fn mangle_dimension(value: &str, unit: &str) -> Option<(String, &'static str)> {
    const MS_LEN: usize = 2;
    const S_LEN: usize = 1;

    if unit.eq_ignore_ascii_case("ms") {
        if let Some(shifted) = shift_dot(value, -3) {
            if shifted.len() + S_LEN < value.len() + MS_LEN {
                return Some((shifted, "s"));
            }
        }
    }

    if unit.eq_ignore_ascii_case("s") {
        if let Some(shifted) = shift_dot(value, 3) {
            if shifted.len() + MS_LEN < value.len() + S_LEN {
                return Some((shifted, "ms"));
            }
        }
    }

    None
}

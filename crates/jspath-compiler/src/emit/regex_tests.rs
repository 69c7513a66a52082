use jspath_core::RegexFlags;

use super::EmitError;
use super::regex::check_pattern;

fn message(pattern: &str) -> String {
    let err = check_pattern(pattern, RegexFlags::NONE).unwrap_err();
    let EmitError::InvalidRegex { pattern: p, message } = err else {
        panic!("expected InvalidRegex");
    };
    assert_eq!(p, pattern);
    message
}

#[test]
fn valid_patterns() {
    check_pattern("^ab+c$", RegexFlags::NONE).unwrap();
    check_pattern("[a-z]{2,3}", RegexFlags::ICASE | RegexFlags::DOTALL).unwrap();
    check_pattern("a # comment", RegexFlags::WSPACE).unwrap();
}

#[test]
fn backreference_and_lookahead_are_accepted() {
    check_pattern(r"(a)\1", RegexFlags::NONE).unwrap();
    check_pattern("a(?=b)", RegexFlags::NONE).unwrap();
    check_pattern("a(?!b)", RegexFlags::ICASE).unwrap();
}

#[test]
fn unbalanced_group() {
    assert_eq!(message("(ab"), "unclosed group");
    assert_eq!(message("ab)"), "unopened group");
}

#[test]
fn unbalanced_class() {
    assert_eq!(message("[ab"), "unclosed character class");
}

#[test]
fn quantifier_without_operand() {
    assert_eq!(message("*a"), "repetition operator missing expression");
}

#[test]
fn quoted_pattern_is_not_parsed() {
    check_pattern("(ab", RegexFlags::QUOTE).unwrap();
}

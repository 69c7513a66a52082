/// Append `s` to `out` as a double-quoted JSON string literal.
///
/// Keys, variable names and string literals are all printed this way, so
/// `$.a` renders as `$."a"`.
pub fn escape_json(out: &mut String, s: &str) {
    let quoted = serde_json::to_string(s).expect("a str always serializes to JSON");
    out.push_str(&quoted);
}

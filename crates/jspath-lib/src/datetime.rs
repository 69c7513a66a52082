//! `.datetime()` template inspection.

/// Whether a datetime template produces a value with a time zone.
///
/// A template is zoned when it contains a `TZH` or `TZM` field. Text inside
/// double quotes is literal. Inside quotes a backslash escapes the next
/// character; outside them it only escapes a double quote.
pub fn template_is_zoned(template: &str) -> bool {
    let bytes = template.as_bytes();
    let mut quoted = false;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if quoted || bytes.get(i + 1) == Some(&b'"') => i += 2,
            b'"' => {
                quoted = !quoted;
                i += 1;
            }
            _ if !quoted && (bytes[i..].starts_with(b"TZH") || bytes[i..].starts_with(b"TZM")) => {
                return true;
            }
            _ => i += 1,
        }
    }
    false
}

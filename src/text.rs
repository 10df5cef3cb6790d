//! Label text conversion.
//!
//! Source labels use TeX-style inline math (`$...$`); Origin renders the
//! equivalent with its `\q(...)` rich-text escape. Labels starting with an
//! underscore are hidden by convention and carry no legend entry.

/// Convert a raw source label to display text, or `None` if the label is
/// hidden (empty or underscore-prefixed).
pub fn display_label(raw: &str) -> Option<String> {
    if raw.is_empty() || raw.starts_with('_') {
        return None;
    }
    Some(escape_math(raw))
}

/// Rewrite inline math segments `$...$` as Origin `\q(...)` text.
///
/// Unterminated `$` and empty `$$` segments are left literal.
pub fn escape_math(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('$') {
        match rest[start + 1..].find('$') {
            Some(0) => {
                // "$$": nothing to wrap, emit the first '$' and move on
                out.push_str(&rest[..start + 1]);
                rest = &rest[start + 1..];
            }
            Some(inner_len) => {
                out.push_str(&rest[..start]);
                out.push_str("\\q(");
                out.push_str(&rest[start + 1..start + 1 + inner_len]);
                out.push(')');
                rest = &rest[start + 1 + inner_len + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

//! Text cleaning for free-text filename fields.

/// Restricts `text` to ASCII letters and digits separated by single underscores.
///
/// Whitespace and underscores both act as separators: runs of them collapse into one
/// underscore, and leading/trailing separators are dropped. Every other character is
/// removed outright, so `"My Show!"` becomes `"My_Show"`. Applying it twice is a no-op.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(c);
        } else if c.is_whitespace() || c == '_' {
            pending_separator = true;
        }
    }
    out
}

/// Drops every `.` and `,` from the aspect text so `1.85` and `1,85` both give `185`.
/// Nothing else is touched.
pub fn normalize_aspect(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, '.' | ',')).collect()
}

/// Separator set between items: ASCII whitespace plus vertical tab, matching C `isspace`.
pub fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\u{0B}'
}

/// Splits text into raw item tokens. Runs of separators never yield empty tokens.
pub fn split_items(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

/// Strips whitespace a token can still carry after splitting (e.g. U+00A0).
pub fn clean_item(token: &str) -> &str {
    token.trim()
}

//! Display-text helpers shared by the table cells.

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = " [...]";

/// Shorten `s` to fit a cell of `n` characters.
///
/// Strings of at most `n` characters come back unchanged. Longer strings keep
/// their first `n - 1` characters; with `use_word_boundary` that prefix is cut
/// again at its last space, unless it contains none. The result always ends in
/// [`ELLIPSIS`]. Lengths are counted in `char`s, not bytes.
pub fn truncate(s: &str, n: usize, use_word_boundary: bool) -> String {
    if s.chars().count() <= n {
        return s.to_string();
    }

    let prefix: String = s.chars().take(n.saturating_sub(1)).collect();
    let kept = if use_word_boundary {
        match prefix.rfind(' ') {
            Some(idx) => &prefix[..idx],
            None => prefix.as_str(),
        }
    } else {
        prefix.as_str()
    };

    format!("{}{}", kept, ELLIPSIS)
}

/// Like [`truncate`], treating a missing string as empty.
pub fn truncate_opt(s: Option<&str>, n: usize, use_word_boundary: bool) -> String {
    s.map(|s| truncate(s, n, use_word_boundary)).unwrap_or_default()
}

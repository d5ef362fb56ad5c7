//! Shared utility functions.

/// Head of `s`, at most `max_bytes` long, cut on a UTF-8 character boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Tail of `s`, at most `max_bytes` long, cut on a UTF-8 character boundary.
///
/// Used when logging assembled prompts, where the interesting part (the
/// latest turns) sits at the end.
pub fn tail_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut start = s.len() - max_bytes;
    while start < s.len() && !s.is_char_boundary(start) {
        start += 1;
    }
    &s[start..]
}

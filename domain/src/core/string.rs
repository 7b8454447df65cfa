//! String utilities for the domain layer.

/// Single-line preview of arbitrary text for log fields.
///
/// Line breaks are escaped so a frame or payload never spans several log
/// lines, and the result is cut at a UTF-8 character boundary once it
/// exceeds `max_len` bytes.
pub fn preview(s: &str, max_len: usize) -> String {
    let escaped = s.replace('\r', "\\r").replace('\n', "\\n");
    if escaped.len() <= max_len {
        return escaped;
    }
    let mut end = max_len.saturating_sub(3);
    while end > 0 && !escaped.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &escaped[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("data: [DONE]", 40), "data: [DONE]");
    }

    #[test]
    fn test_preview_escapes_line_breaks() {
        assert_eq!(preview("a\r\nb", 40), "a\\r\\nb");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        // "₹" is 3 bytes; target is 7 bytes, which falls inside the third rupee sign
        assert_eq!(preview("₹₹₹₹", 10), "₹₹...");
        assert_eq!(preview("hello world", 8), "hello...");
    }
}

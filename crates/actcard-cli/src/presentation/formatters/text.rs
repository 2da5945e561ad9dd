use regex::Regex;
use std::sync::LazyLock;

/// HTML-ish tags in markup bodies, e.g. "<p>" or "</a>"
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Flatten a markup body into a one-line preview: tags dropped, common
/// entities decoded, whitespace collapsed.
pub fn strip_markup(markup: &str) -> String {
    let without_tags = TAG_REGEX.replace_all(markup, " ");
    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("привет", 10), "привет");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("подтверждение", 8), "подтв...");
    }

    #[test]
    fn test_truncate_tiny_width_has_no_ellipsis() {
        assert_eq!(truncate("hello", 3), "hel");
    }

    #[test]
    fn test_strip_markup_drops_tags_and_decodes_entities() {
        let markup = "<h1>Новость</h1><p>Курс&nbsp;обновлён &amp; подтверждён</p>";
        assert_eq!(strip_markup(markup), "Новость Курс обновлён & подтверждён");
    }

    #[test]
    fn test_strip_markup_collapses_whitespace() {
        assert_eq!(strip_markup("a\n\n  <br/>   b"), "a b");
    }
}

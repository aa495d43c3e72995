//! Width-aware text helpers shared by the widgets.

use unicode_width::UnicodeWidthStr;

/// Display width of `text` in terminal cells, saturating at `u16::MAX`.
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Truncate `text` to at most `max_width` cells, ending in `...` when cut.
///
/// Widths are measured in terminal cells, so wide characters (CJK, emoji)
/// count double.
///
/// # Examples
/// ```
/// # use stakra_tui::widgets::text::truncate_with_ellipsis;
/// assert_eq!(truncate_with_ellipsis("Hello", 10), "Hello");
/// assert_eq!(truncate_with_ellipsis("Hello World", 8), "Hello...");
/// assert_eq!(truncate_with_ellipsis("Test", 3), "...");
/// ```
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    // Measure the whole prefix, since sequences like U+FE0F widen the
    // character before them
    let budget = max_width - 3;
    let mut truncated = String::new();
    for ch in text.chars() {
        truncated.push(ch);
        if truncated.width() > budget {
            truncated.pop();
            break;
        }
    }
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_unchanged() {
        assert_eq!(truncate_with_ellipsis("Ready for QA", 12), "Ready for QA");
        assert_eq!(truncate_with_ellipsis("", 0), "");
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Needs Clarification", 10), "Needs C...");
        assert_eq!(truncate_with_ellipsis("abcdef", 2), "..");
    }

    #[test]
    fn test_wide_characters_count_double() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(truncate_with_ellipsis("日本語テキスト", 7), "日本...");
    }

    #[test]
    fn test_emoji_sequences_stay_within_width() {
        let hearts = "\u{2764}\u{FE0F}\u{2764}\u{FE0F}\u{2764}\u{FE0F}";
        let truncated = truncate_with_ellipsis(hearts, 5);
        assert_eq!(truncated, "\u{2764}\u{FE0F}...");
        assert!(display_width(&truncated) <= 5);

        for max in 0..8 {
            assert!(truncate_with_ellipsis(hearts, max).width() <= max);
        }
    }
}

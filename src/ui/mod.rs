mod detail;
mod help;
mod list;
mod tags;

use crate::app::App;
use ratatui::Frame;

/// Top-level render dispatch.
pub fn render(app: &App, frame: &mut Frame) {
    match app.view {
        crate::app::View::List => list::render(app, frame),
        crate::app::View::Detail => detail::render(app, frame),
        crate::app::View::Tags => tags::render(app, frame),
    }

    // Render help overlay on top if active
    if app.show_help {
        help::render(app, frame);
    }
}

/// Truncate a string to `max_width` display columns, adding "…" if truncated.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            break;
        }
        width += w;
        result.push(c);
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_str("chess", 10), "chess");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_str("chess tools", 6), "chess…");
    }

    #[test]
    fn test_truncate_counts_display_width() {
        // Wide characters take two columns each.
        assert_eq!(truncate_str("日本語テスト", 5), "日本…");
    }
}

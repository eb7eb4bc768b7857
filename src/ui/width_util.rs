use terminal_size::{Width, terminal_size};

const ELLIPSIS: &str = "...";

/// Column width arithmetic for plain-text tables.
#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    pub fn visible_width(&self, s: &str) -> usize {
        s.chars().count()
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            s.to_string()
        } else {
            format!("{s}{}", " ".repeat(width - w))
        }
    }

    /// Cut `s` to at most `width` characters, marking the cut with an ellipsis.
    pub fn truncate(&self, s: &str, width: usize) -> String {
        if self.visible_width(s) <= width {
            return s.to_string();
        }
        if width <= ELLIPSIS.len() {
            return s.chars().take(width).collect();
        }
        let kept: String = s.chars().take(width - ELLIPSIS.len()).collect();
        format!("{kept}{ELLIPSIS}")
    }

    /// Best-effort terminal width (defaults to 80).
    pub fn terminal_width(&self) -> usize {
        match terminal_size() {
            Some((Width(w), _)) => w as usize,
            None => 80,
        }
    }
}

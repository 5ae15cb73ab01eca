use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Creates a centered rectangle within the given area
///
/// # Arguments
/// * `percent_x` - Width as a percentage of the container (0-100)
/// * `percent_y` - Height as a percentage of the container (0-100)
/// * `r` - The container rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);

    // Small terminals get the whole area rather than an unusable sliver
    let min_width = 30u16;
    let min_height = 10u16;

    let [middle] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(r);
    let [mut result] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(middle);

    if result.width < min_width && r.width >= min_width {
        result.width = min_width;
        result.x = r.x + (r.width - result.width) / 2;
    }
    if result.height < min_height && r.height >= min_height {
        result.height = min_height;
        result.y = r.y + (r.height - result.height) / 2;
    }

    result
}

/// Cuts `text` to at most `max_width` display columns, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for character in text.chars() {
        let width = character.width().unwrap_or(0);
        if used + width + 1 > max_width {
            break;
        }
        result.push(character);
        used += width;
    }
    result.push('…');
    result
}

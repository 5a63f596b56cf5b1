use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the detail screen's cup column.
const DETAIL_LEFT_WIDTH: u16 = 32;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Hero text, category tabs and the card list of the list screen.
pub fn list_regions(body: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(body);
    (chunks[0], chunks[1], chunks[2])
}

/// Cup column and guide column of the detail screen.
pub fn detail_regions(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(DETAIL_LEFT_WIDTH), Constraint::Min(0)])
        .split(body);
    (chunks[0], chunks[1])
}

/// A rect of at most `width` x `height`, centred horizontally in `area`
/// and aligned to its top.
pub fn centered_top(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height,
    }
}

//! Bottom bar: key hints for the current screen, version on the right.

use crate::ui::theme::{AMBER, GLOBAL_BORDER, HEADER_SEPARATOR, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `(keys, action)` pairs.
type Hints = &'static [(&'static str, &'static str)];

const LIST_HINTS: Hints = &[
    ("↑↓", "Move"),
    ("←→/1-4", "Category"),
    ("Enter", "Open"),
    ("q", "Quit"),
];
const DETAIL_HINTS: Hints = &[
    ("Esc", "Back"),
    ("r", "Replay"),
    ("↑↓", "Scroll"),
    ("q", "Quit"),
];

#[derive(Default)]
pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, detail: bool) -> Paragraph<'static> {
        let hints = if detail { DETAIL_HINTS } else { LIST_HINTS };
        let key_style = Style::default().fg(AMBER).add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(MUTED_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::raw(" ")];
        for (idx, (keys, action)) in hints.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" │ ", separator_style));
            }
            spans.push(Span::styled(*keys, key_style));
            spans.push(Span::styled(format!(" {action}"), label_style));
        }

        let version = format!("v{VERSION} ");
        let used: usize = spans.iter().map(Span::width).sum();
        let inner_width = usize::from(area.width.saturating_sub(2));
        let gap = inner_width.saturating_sub(used + version.chars().count());
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::styled(version, label_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

use crate::ui::theme::{AMBER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, recipe_count: usize) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ☕  ", Style::default().fg(AMBER)),
            Span::styled("BrewMaster ", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("Pro", Style::default().fg(AMBER).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled("Coffee brewing master", Style::default().fg(MUTED_TEXT)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{recipe_count} recipes"), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

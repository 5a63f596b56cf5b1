//! Detail screen: animated cup on the left, brewing guide on the right.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::CoffeeRecipe;
use crate::ui::app::App;
use crate::ui::layout::{centered_top, detail_regions};
use crate::ui::reveal::{RevealPhase, RevealState};
use crate::ui::theme::{rgb, AMBER, CREMA, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use crate::ui::visualizer::CupWidget;

const CUP_WIDTH: u16 = 22;
const CUP_HEIGHT: u16 = 16;
const ESTIMATED_TIME: &str = "3-5 min";

pub fn render_detail(frame: &mut Frame<'_>, area: Rect, app: &App, recipe: &CoffeeRecipe) {
    let (left, right) = detail_regions(area);
    render_cup_column(frame, left, app, recipe);
    render_guide(frame, right, recipe, app.navigation().detail_scroll);
}

fn render_cup_column(frame: &mut Frame<'_>, area: Rect, app: &App, recipe: &CoffeeRecipe) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(2),
            Constraint::Length(3),
        ])
        .split(inner);

    let title = vec![
        Line::from(Span::styled(
            recipe.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            recipe.english_name.clone(),
            Style::default().fg(AMBER),
        )),
    ];
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        rows[0],
    );

    let reveal = app.reveal();
    let mut cup = CupWidget::new(&recipe.ingredients, reveal.visible);
    if reveal.steam_enabled() {
        cup = cup.steam(app.frame());
    }
    frame.render_widget(cup, centered_top(rows[1], CUP_WIDTH, CUP_HEIGHT));

    let replay = vec![
        Line::from(Span::styled(
            pour_status(reveal),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(vec![
            Span::styled("r", Style::default().fg(AMBER).add_modifier(Modifier::BOLD)),
            Span::styled("  Replay animation", Style::default().fg(MUTED_TEXT)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(replay).alignment(Alignment::Center),
        rows[2],
    );

    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    let stats = vec![
        Line::from(vec![
            Span::styled(" ⏱  Est. time   ", label),
            Span::styled(ESTIMATED_TIME, value),
        ]),
        Line::from(vec![
            Span::styled(" ★  Difficulty  ", label),
            Span::styled(recipe.difficulty.label(), value),
        ]),
    ];
    frame.render_widget(Paragraph::new(stats), rows[3]);
}

fn pour_status(reveal: &RevealState) -> String {
    match reveal.phase() {
        RevealPhase::Settled => "Ready to serve".to_string(),
        RevealPhase::Idle | RevealPhase::Revealing => {
            format!("Pouring {}/{}", reveal.visible, reveal.layer_count)
        }
    }
}

/// Lines of the guide column, before wrapping.
fn guide_lines(recipe: &CoffeeRecipe) -> Vec<Line<'static>> {
    let heading = Style::default().fg(AMBER).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);

    let mut lines = vec![Line::from(Span::styled("Ingredients", heading))];
    // Top layer first, the way the drink is seen from above.
    for layer in recipe.ingredients.iter().rev() {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("●", Style::default().fg(rgb(layer.color))),
            Span::raw(" "),
            Span::styled(layer.name.clone(), text),
            Span::styled(format!("  {}", layer.texture.glyph()), muted),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Steps", heading)));
    for (idx, step) in recipe.steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>2}. ", idx + 1), Style::default().fg(CREMA)),
            Span::styled(step.clone(), text),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Master tips", heading)));
    for tip in &recipe.tips {
        lines.push(Line::from(vec![
            Span::styled("  → ", Style::default().fg(CREMA)),
            Span::styled(tip.clone(), text),
        ]));
    }
    lines
}

/// Highest useful scroll offset of the guide, counted in unwrapped lines.
pub fn guide_scroll_limit(recipe: &CoffeeRecipe) -> u16 {
    let lines = guide_lines(recipe).len().saturating_sub(1);
    u16::try_from(lines).unwrap_or(u16::MAX)
}

/// Rows `lines` take once wrapped to `width` columns.
fn wrapped_rows(lines: &[Line<'_>], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum()
}

/// Keeps the last page of the guide filled instead of scrolling into
/// blank rows.
fn clamp_scroll(scroll: u16, rows: usize, viewport: u16) -> u16 {
    let max = rows.saturating_sub(usize::from(viewport));
    scroll.min(u16::try_from(max).unwrap_or(u16::MAX))
}

fn render_guide(frame: &mut Frame<'_>, area: Rect, recipe: &CoffeeRecipe, scroll: u16) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(Span::styled(" Guide ", Style::default().fg(MUTED_TEXT)));
    let inner = block.inner(area);

    let lines = guide_lines(recipe);
    let scroll = clamp_scroll(scroll, wrapped_rows(&lines, inner.width), inner.height);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reports_progress_then_ready() {
        let mut reveal = RevealState {
            generation: 1,
            layer_count: 3,
            visible: 1,
            playing: true,
        };
        assert_eq!(pour_status(&reveal), "Pouring 1/3");
        reveal.visible = 3;
        assert_eq!(pour_status(&reveal), "Ready to serve");
    }

    #[test]
    fn scroll_stops_at_last_page() {
        assert_eq!(clamp_scroll(50, 30, 10), 20);
        assert_eq!(clamp_scroll(5, 30, 10), 5);
        assert_eq!(clamp_scroll(7, 4, 10), 0);
    }

    #[test]
    fn long_lines_count_every_wrapped_row() {
        let lines = vec![Line::from("x".repeat(25)), Line::from("")];
        assert_eq!(wrapped_rows(&lines, 10), 4);
    }

    #[test]
    fn scroll_limit_covers_every_section() {
        let catalog = crate::catalog::Catalog::builtin().expect("built-in catalog");
        let latte = catalog.get("latte").expect("latte");
        // Three headings and two spacers around the listed items.
        let items = latte.ingredients.len() + latte.steps.len() + latte.tips.len();
        assert_eq!(usize::from(guide_scroll_limit(latte)), items + 5 - 1);
    }
}

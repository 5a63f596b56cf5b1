//! List screen: hero text, category tabs and recipe cards.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::catalog::{CategoryFilter, CoffeeRecipe};
use crate::ui::app::App;
use crate::ui::layout::list_regions;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, AMBER, CREMA, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
};
use crate::ui::visualizer::CupWidget;

const CARD_HEIGHT: u16 = 8;
const CARD_CUP_WIDTH: u16 = 12;

pub fn render_catalog(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let (hero, tabs, cards) = list_regions(area);

    let hero_text = vec![
        Line::from(Span::styled(
            "Master the art of coffee making",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Visual recipes and expert tips for the perfect cup, every time.",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    frame.render_widget(
        Paragraph::new(hero_text).alignment(Alignment::Center),
        hero,
    );

    let titles: Vec<Line> = CategoryFilter::ALL
        .iter()
        .enumerate()
        .map(|(idx, filter)| Line::from(format!(" {} {} ", idx + 1, filter.label())))
        .collect();
    let tab_bar = Tabs::new(titles)
        .select(app.navigation().filter.index())
        .style(Style::default().fg(MUTED_TEXT))
        .highlight_style(
            Style::default()
                .fg(HEADER_TEXT)
                .bg(CREMA)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" ");
    frame.render_widget(tab_bar, centered_tabs(tabs));

    let recipes = app.displayed_recipes();
    if recipes.is_empty() {
        frame.render_widget(
            Paragraph::new("No recipes in this category.")
                .style(Style::default().fg(MUTED_TEXT))
                .alignment(Alignment::Center),
            cards,
        );
        return;
    }

    let focused = app.navigation().focused.min(recipes.len() - 1);
    let per_page = (cards.height / CARD_HEIGHT).max(1) as usize;
    let offset = (focused + 1).saturating_sub(per_page);

    for (slot, (index, recipe)) in recipes
        .iter()
        .enumerate()
        .skip(offset)
        .take(per_page)
        .enumerate()
    {
        let y = cards.y + slot as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(cards.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let rect = Rect {
            x: cards.x,
            y,
            width: cards.width,
            height,
        };
        render_card(frame, rect, recipe, index == focused);
    }
}

fn centered_tabs(area: Rect) -> Rect {
    let width: u16 = CategoryFilter::ALL
        .iter()
        .enumerate()
        .map(|(idx, filter)| format!(" {} {} ", idx + 1, filter.label()).chars().count() as u16 + 1)
        .sum();
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn render_card(frame: &mut Frame<'_>, area: Rect, recipe: &CoffeeRecipe, focused: bool) {
    let border = if focused { AMBER } else { GLOBAL_BORDER };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if focused {
        block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CARD_CUP_WIDTH), Constraint::Min(0)])
        .split(inner);

    // Cards always show the finished drink.
    frame.render_widget(
        CupWidget::new(&recipe.ingredients, recipe.ingredients.len()),
        columns[0],
    );

    let badge_style = Style::default().fg(CREMA);
    let lines = vec![
        Line::from(vec![
            Span::styled(
                recipe.name.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(recipe.english_name.clone(), Style::default().fg(MUTED_TEXT)),
        ]),
        Line::from(Span::styled(
            recipe.description.clone(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("[{}]", recipe.difficulty.label()), badge_style),
            Span::raw("  "),
            Span::styled(recipe.category.label(), badge_style),
            Span::styled(" · ", Style::default().fg(MUTED_TEXT)),
            Span::styled(format!("{} steps", recipe.steps.len()), badge_style),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        columns[1],
    );
}

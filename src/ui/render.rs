use crate::ui::app::App;
use crate::ui::catalog_view::render_catalog;
use crate::ui::detail_view::render_detail;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.catalog().len()), header);
    frame.render_widget(Clear, body);
    match app.selected_recipe() {
        Some(recipe) => render_detail(frame, body, app, recipe),
        None => render_catalog(frame, body, app),
    }
    let detail = app.navigation().is_detail();
    frame.render_widget(Footer::new().widget(footer, detail), footer);
}

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use std::time::Instant;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::progress_bar::fill_progress;
use crate::tui::components::{PlantDetail, PlantList, TitleBar, Toolbar};
use crate::tui::theme::Palette;
use crate::tui::{InputMode, TuiState};

/// Draw one frame: title, search, toolbar, list, and the detail overlay on top.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    use Constraint::{Length, Min};

    let palette = Palette::for_theme(app.theme);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        frame.area(),
    );

    let layout = Layout::vertical([Length(1), Length(3), Length(1), Min(0)]);
    let [title_area, search_area, toolbar_area, list_area] = layout.areas(frame.area());

    let plants = app.visible_plants();

    TitleBar::new(
        app.status_message.clone(),
        plants.len(),
        app.catalog.len(),
        palette,
    )
    .render(frame, title_area);

    tui.search_bar.palette = palette;
    tui.search_bar.focused = tui.input_mode == InputMode::Search && !app.navigator.is_open();
    tui.search_bar.render(frame, search_area);

    Toolbar {
        filter: app.view.difficulty_filter(),
        sort_key: app.view.sort_key(),
        sort_order: app.view.sort_order(),
        palette,
    }
    .render(frame, toolbar_area);

    PlantList::new(&mut tui.plant_list, &plants, palette).render(frame, list_area);

    if let (Some(plant), Some(tab)) = (
        app.navigator.current_selection(),
        app.navigator.current_tab(),
    ) {
        let position = app.catalog.position(plant.id).map_or(0, |i| i + 1);
        let fill = tui
            .detail_shown_at
            .map_or(1.0, |shown| fill_progress(now.saturating_duration_since(shown)));
        PlantDetail {
            plant,
            tab,
            position: (position, app.catalog.len()),
            palette,
            fill,
        }
        .render(frame, frame.area());
    }
}

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::{
    ui::{content, context::AppContext, route::Route, traits::View},
    util::colors,
};

#[derive(Default)]
pub struct Clubs;

impl View for Clubs {
    fn route(&self) -> Route {
        Route::Clubs
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _ctx: &AppContext) {
        let line = Rect {
            y: area.y + area.height / 2,
            height: area.height.min(1),
            ..area
        };
        f.render_widget(
            Paragraph::new(Line::styled(
                content::COMING_SOON,
                Style::default()
                    .fg(colors::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            line,
        );
    }
}

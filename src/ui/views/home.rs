use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::ui::{
    components::{chart::ChartList, tiles::TileGrid},
    content::{self, ChartEntry, Tile},
    context::AppContext,
    route::Route,
    traits::View,
};

pub struct Home {
    featured: Vec<Tile>,
    chart: Vec<ChartEntry>,
    artists: Vec<Tile>,
    genres: Vec<Tile>,
}

impl Default for Home {
    fn default() -> Self {
        Self {
            featured: content::featured_artists(),
            chart: content::top_chart(),
            artists: content::explore_artists(),
            genres: content::genres(),
        }
    }
}

impl View for Home {
    fn route(&self) -> Route {
        Route::Home
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _ctx: &AppContext) {
        let featured = TileGrid::new(&self.featured);
        let chart = ChartList::new(&self.chart);
        let artists = TileGrid::new(&self.artists)
            .title("EXPLORE BY ARTIST")
            .centered();
        let genres = TileGrid::new(&self.genres)
            .title("EXPLORE BY GENRE")
            .centered();

        let chunks = Layout::vertical([
            Constraint::Length(featured.height()),
            Constraint::Length(chart.height()),
            Constraint::Length(artists.height()),
            Constraint::Length(genres.height()),
            Constraint::Min(0),
        ])
        .spacing(1)
        .split(area);

        f.render_widget(featured, chunks[0]);
        f.render_widget(chart, chunks[1]);
        f.render_widget(artists, chunks[2]);
        f.render_widget(genres, chunks[3]);
    }
}

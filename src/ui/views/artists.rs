use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::ui::{
    components::tiles::{Banner, TileGrid},
    content::{self, Tile},
    context::AppContext,
    route::Route,
    traits::View,
};

const BANNER_HEIGHT: u16 = 8;

pub struct Artists {
    popular_artists: Vec<Tile>,
    popular_albums: Vec<Tile>,
}

impl Default for Artists {
    fn default() -> Self {
        Self {
            popular_artists: content::popular_artists(),
            popular_albums: content::popular_albums(),
        }
    }
}

impl View for Artists {
    fn route(&self) -> Route {
        Route::Artists
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _ctx: &AppContext) {
        let artists = TileGrid::new(&self.popular_artists).title("POPULAR ARTISTS");
        let albums = TileGrid::new(&self.popular_albums).title("POPULAR ALBUMS");

        let chunks = Layout::vertical([
            Constraint::Length(BANNER_HEIGHT),
            Constraint::Length(artists.height()),
            Constraint::Length(albums.height()),
            Constraint::Min(0),
        ])
        .spacing(1)
        .split(area);

        f.render_widget(
            Banner::new(
                "Featured Artist",
                content::FEATURED_ARTIST,
                content::FEATURED_RELEASE,
            ),
            chunks[0],
        );
        f.render_widget(artists, chunks[1]);
        f.render_widget(albums, chunks[2]);
    }
}

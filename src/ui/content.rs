//! Placeholder catalog content. Everything here is fixed filler until real
//! catalog data exists.

pub const GENRES: [&str; 5] = ["NY DRILL", "hyperpop", "House", "Trap", "underground"];
pub const CHART_SIZE: u8 = 10;
pub const COLLECTION_PLACEHOLDER_COUNT: usize = 8;

pub const FEATURED_ARTIST: &str = "MIKE SINI";
pub const FEATURED_RELEASE: &str = "CHECK UP";
pub const COMING_SOON: &str = "COMING SOON";
pub const EMPTY_COLLECTION: &str = "Your collection will appear here";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub title: String,
    pub subtitle: Option<String>,
}

impl Tile {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEntry {
    pub rank: u8,
    pub artist: &'static str,
    pub song: &'static str,
    pub price: &'static str,
}

fn numbered(prefix: &str, count: usize) -> Vec<Tile> {
    (1..=count).map(|i| Tile::new(format!("{prefix} {i}"))).collect()
}

pub fn featured_artists() -> Vec<Tile> {
    numbered("Featured Artist", 3)
}

pub fn top_chart() -> Vec<ChartEntry> {
    (1..=CHART_SIZE)
        .map(|rank| ChartEntry {
            rank,
            artist: "Artist Name",
            song: "Song Title",
            price: "$XXX.XX",
        })
        .collect()
}

pub fn explore_artists() -> Vec<Tile> {
    numbered("Artist", 5)
}

pub fn genres() -> Vec<Tile> {
    GENRES.iter().map(|g| Tile::new(*g)).collect()
}

pub fn popular_artists() -> Vec<Tile> {
    numbered("Artist", 5)
}

pub fn popular_albums() -> Vec<Tile> {
    numbered("Album", 5)
}

pub fn collection_items() -> Vec<Tile> {
    (1..=COLLECTION_PLACEHOLDER_COUNT)
        .map(|i| Tile::new(format!("Song Title {i}")).with_subtitle("Artist Name"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_has_ten_unique_consecutive_ranks() {
        let ranks: Vec<u8> = top_chart().iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn grids_have_fixed_sizes() {
        assert_eq!(featured_artists().len(), 3);
        assert_eq!(explore_artists().len(), 5);
        assert_eq!(popular_albums().last().unwrap().title, "Album 5");
        assert_eq!(genres()[0].title, "NY DRILL");
        let items = collection_items();
        assert_eq!(items.len(), 8);
        assert_eq!(items[7].title, "Song Title 8");
        assert_eq!(items[0].subtitle.as_deref(), Some("Artist Name"));
    }
}

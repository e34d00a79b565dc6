use crate::{config::AlbumsTabPolicy, ui::route::Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Artists,
    Albums,
    Clubs,
    MyCollection,
}

impl Tab {
    /// Tabs in header order. `MyCollection` is drawn with the right-hand buttons.
    pub const ALL: [Tab; 4] = [Tab::Artists, Tab::Albums, Tab::Clubs, Tab::MyCollection];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Artists => "Artists",
            Tab::Albums => "Albums",
            Tab::Clubs => "Clubs",
            Tab::MyCollection => "My Collection",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    pub fn is_visible(&self, policy: AlbumsTabPolicy) -> bool {
        !matches!((self, policy), (Tab::Albums, AlbumsTabPolicy::Hidden))
    }

    pub fn visible(policy: AlbumsTabPolicy) -> impl Iterator<Item = Tab> {
        Self::ALL.into_iter().filter(move |t| t.is_visible(policy))
    }

    pub fn next(&self, policy: AlbumsTabPolicy) -> Tab {
        let tabs: Vec<Tab> = Self::visible(policy).collect();
        let i = tabs.iter().position(|t| t == self).unwrap_or(tabs.len() - 1);
        tabs[(i + 1) % tabs.len()]
    }

    pub fn prev(&self, policy: AlbumsTabPolicy) -> Tab {
        let tabs: Vec<Tab> = Self::visible(policy).collect();
        let i = tabs.iter().position(|t| t == self).unwrap_or(0);
        tabs[(i + tabs.len() - 1) % tabs.len()]
    }
}

/// Maps a tab to the page it opens.
pub struct TabRouter;

impl TabRouter {
    pub fn resolve(tab: Tab) -> Option<Route> {
        match tab {
            Tab::Artists => Some(Route::Artists),
            // no albums page yet
            Tab::Albums => None,
            Tab::Clubs => Some(Route::Clubs),
            Tab::MyCollection => Some(Route::Collection),
        }
    }

    /// Unknown labels resolve to nothing.
    pub fn resolve_label(label: &str) -> Option<Route> {
        Tab::from_label(label).and_then(Self::resolve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_and_unknown_is_none() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_label(tab.label()), Some(tab));
        }
        assert_eq!(Tab::from_label("Podcasts"), None);
        assert_eq!(Tab::from_label("artists"), None);
    }

    #[test]
    fn resolves_routes_for_built_pages() {
        assert_eq!(TabRouter::resolve(Tab::Artists), Some(Route::Artists));
        assert_eq!(TabRouter::resolve(Tab::Albums), None);
        assert_eq!(TabRouter::resolve(Tab::Clubs), Some(Route::Clubs));
        assert_eq!(
            TabRouter::resolve(Tab::MyCollection),
            Some(Route::Collection)
        );
        assert_eq!(TabRouter::resolve_label("Radio"), None);
        assert_eq!(
            TabRouter::resolve_label("My Collection"),
            Some(Route::Collection)
        );
    }

    #[test]
    fn cycling_skips_hidden_albums() {
        assert_eq!(Tab::Artists.next(AlbumsTabPolicy::Highlight), Tab::Albums);
        assert_eq!(Tab::Artists.next(AlbumsTabPolicy::Hidden), Tab::Clubs);
        assert_eq!(Tab::Clubs.prev(AlbumsTabPolicy::Hidden), Tab::Artists);
        assert_eq!(Tab::MyCollection.next(AlbumsTabPolicy::Hidden), Tab::Artists);
        assert_eq!(Tab::Artists.prev(AlbumsTabPolicy::Highlight), Tab::MyCollection);
    }
}

use std::fmt;

use crate::ui::tab::Tab;

/// A top-level screen bound to a logical path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Artists,
    Clubs,
    Collection,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::Artists, Route::Clubs, Route::Collection];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Artists => "/artists",
            Route::Clubs => "/clubs",
            Route::Collection => "/collection",
        }
    }

    /// Resolves a path to a mounted route. `/albums` has no page and yields `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }

    /// The tab a freshly mounted page highlights.
    pub fn default_tab(&self) -> Option<Tab> {
        match self {
            Route::Home => None,
            Route::Artists => Some(Tab::Artists),
            Route::Clubs => Some(Tab::Clubs),
            Route::Collection => Some(Tab::MyCollection),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_back_to_routes() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/artists/"), Some(Route::Artists));
        assert_eq!(Route::from_path(""), Some(Route::Home));
    }

    #[test]
    fn albums_path_is_not_routable() {
        assert_eq!(Route::from_path("/albums"), None);
        assert_eq!(Route::from_path("/nowhere"), None);
    }

    #[test]
    fn default_tabs_match_pages() {
        assert_eq!(Route::Home.default_tab(), None);
        assert_eq!(Route::Artists.default_tab(), Some(Tab::Artists));
        assert_eq!(Route::Clubs.default_tab(), Some(Tab::Clubs));
        assert_eq!(Route::Collection.default_tab(), Some(Tab::MyCollection));
    }
}

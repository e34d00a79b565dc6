use std::{str::FromStr, time::Duration};

use thiserror::Error;

use crate::ui::route::Route;

pub const START_ROUTE_ENV: &str = "SINI_START_ROUTE";
pub const ALBUMS_TAB_ENV: &str = "SINI_ALBUMS_TAB";
pub const COLLECTION_ITEMS_ENV: &str = "SINI_COLLECTION_ITEMS";
pub const TICK_RATE_ENV: &str = "SINI_TICK_RATE_MS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// What the Albums tab does while no albums page exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlbumsTabPolicy {
    /// Drawn and highlighted on click, never navigates.
    #[default]
    Highlight,
    /// Not drawn and not reachable.
    Hidden,
}

impl FromStr for AlbumsTabPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "highlight" => Ok(Self::Highlight),
            "hidden" => Ok(Self::Hidden),
            _ => Err(ConfigError::InvalidValue {
                key: ALBUMS_TAB_ENV,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub start_route: Route,
    pub albums_tab: AlbumsTabPolicy,
    /// Shows placeholder cards on the collection page instead of the empty state.
    pub collection_items: bool,
    pub tick_rate: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_route: Route::Home,
            albums_tab: AlbumsTabPolicy::Highlight,
            collection_items: false,
            tick_rate: Duration::from_millis(33),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(START_ROUTE_ENV) {
            config.start_route =
                Route::from_path(&path).ok_or(ConfigError::UnknownRoute(path))?;
        }

        if let Some(policy) = lookup(ALBUMS_TAB_ENV) {
            config.albums_tab = policy.parse()?;
        }

        if let Some(flag) = lookup(COLLECTION_ITEMS_ENV) {
            config.collection_items = parse_flag(COLLECTION_ITEMS_ENV, &flag)?;
        }

        if let Some(ms) = lookup(TICK_RATE_ENV) {
            let millis = ms
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: TICK_RATE_ENV,
                    value: ms.clone(),
                })?;
            config.tick_rate = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.start_route, Route::Home);
        assert_eq!(config.albums_tab, AlbumsTabPolicy::Highlight);
        assert!(!config.collection_items);
        assert_eq!(config.tick_rate, Duration::from_millis(33));
    }

    #[test]
    fn reads_every_key() {
        let config = Config::from_lookup(lookup(&[
            (START_ROUTE_ENV, "/collection"),
            (ALBUMS_TAB_ENV, "Hidden"),
            (COLLECTION_ITEMS_ENV, "yes"),
            (TICK_RATE_ENV, "100"),
        ]))
        .unwrap();
        assert_eq!(config.start_route, Route::Collection);
        assert_eq!(config.albums_tab, AlbumsTabPolicy::Hidden);
        assert!(config.collection_items);
        assert_eq!(config.tick_rate, Duration::from_millis(100));
    }

    #[test]
    fn rejects_albums_route_and_bad_values() {
        assert_eq!(
            Config::from_lookup(lookup(&[(START_ROUTE_ENV, "/albums")])).unwrap_err(),
            ConfigError::UnknownRoute("/albums".to_string())
        );
        assert!(matches!(
            Config::from_lookup(lookup(&[(ALBUMS_TAB_ENV, "disabled")])),
            Err(ConfigError::InvalidValue { key: ALBUMS_TAB_ENV, .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(COLLECTION_ITEMS_ENV, "maybe")])),
            Err(ConfigError::InvalidValue { key: COLLECTION_ITEMS_ENV, .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(TICK_RATE_ENV, "0")])),
            Err(ConfigError::InvalidValue { key: TICK_RATE_ENV, .. })
        ));
    }
}

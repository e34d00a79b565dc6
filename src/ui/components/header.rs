use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    config::AlbumsTabPolicy,
    ui::{route::Route, tab::Tab},
    util::{colors, icons},
};

pub const HEADER_HEIGHT: u16 = 3;
pub const LOGO: &str = "Sini";
pub const SEARCH_PLACEHOLDER: &str = "Search artists, albums, clubs...";
pub const PORTAL_LABEL: &str = "Artist Portal";
pub const CART_COUNT: usize = 0;

/// Text input in the header. Accepts typing but never runs a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchField {
    pub input: String,
    pub editing: bool,
}

impl SearchField {
    pub fn focus(&mut self) {
        self.editing = true;
    }

    pub fn insert_str(&mut self, text: &str) {
        self.input.extend(text.chars().filter(|c| !c.is_control()));
    }

    /// Returns `true` when the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.editing {
            return false;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            // other chords are swallowed, not typed
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                true
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                true
            }
            KeyCode::Backspace => {
                self.input.pop();
                true
            }
            KeyCode::Enter => {
                debug!("search submitted with no backend: {:?}", self.input);
                self.editing = false;
                true
            }
            KeyCode::Esc => {
                self.editing = false;
                true
            }
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub active_tab: Option<Tab>,
    pub search: SearchField,
}

impl HeaderState {
    pub fn for_route(route: Route) -> Self {
        Self {
            active_tab: route.default_tab(),
            search: SearchField::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderControl {
    Logo,
    Tab(Tab),
    Search,
    ArtistPortal,
    Account,
    Cart,
}

/// Screen rects of every header control, used for drawing and hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    pub logo: Rect,
    pub tabs: Vec<(Tab, Rect)>,
    pub search: Rect,
    pub collection: Rect,
    pub portal: Rect,
    pub account: Rect,
    pub cart: Rect,
}

fn button_width(label: &str) -> u16 {
    label.width() as u16 + 4
}

impl HeaderLayout {
    pub fn new(area: Rect, policy: AlbumsTabPolicy) -> Self {
        let nav_tabs: Vec<Tab> = Tab::visible(policy)
            .filter(|t| *t != Tab::MyCollection)
            .collect();

        let mut constraints = vec![Constraint::Length(button_width(LOGO))];
        constraints.extend(
            nav_tabs
                .iter()
                .map(|t| Constraint::Length(button_width(t.label()))),
        );
        constraints.extend([
            Constraint::Min(10),
            Constraint::Length(button_width(Tab::MyCollection.label())),
            Constraint::Length(button_width(PORTAL_LABEL)),
            Constraint::Length(5),
            Constraint::Length(7),
        ]);

        let chunks = Layout::horizontal(constraints).spacing(1).split(area);
        let n = nav_tabs.len();

        Self {
            logo: chunks[0],
            tabs: nav_tabs
                .into_iter()
                .enumerate()
                .map(|(i, tab)| (tab, chunks[i + 1]))
                .collect(),
            search: chunks[n + 1],
            collection: chunks[n + 2],
            portal: chunks[n + 3],
            account: chunks[n + 4],
            cart: chunks[n + 5],
        }
    }

    pub fn control_at(&self, position: Position) -> Option<HeaderControl> {
        if self.logo.contains(position) {
            return Some(HeaderControl::Logo);
        }
        if let Some((tab, _)) = self.tabs.iter().find(|(_, r)| r.contains(position)) {
            return Some(HeaderControl::Tab(*tab));
        }

        [
            (self.search, HeaderControl::Search),
            (self.collection, HeaderControl::Tab(Tab::MyCollection)),
            (self.portal, HeaderControl::ArtistPortal),
            (self.account, HeaderControl::Account),
            (self.cart, HeaderControl::Cart),
        ]
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, control)| control)
    }
}

/// Keeps the end of `text` that fits in `width` columns.
fn tail_fitting(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = i;
    }
    &text[start..]
}

pub struct NavigationHeader<'a> {
    state: &'a HeaderState,
    policy: AlbumsTabPolicy,
}

impl<'a> NavigationHeader<'a> {
    pub fn new(state: &'a HeaderState, policy: AlbumsTabPolicy) -> Self {
        Self { state, policy }
    }

    fn button(label: &str, style: Style, area: Rect, buf: &mut Buffer) {
        Paragraph::new(label.to_string())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(style),
            )
            .render(area, buf);
    }

    fn tab_style(&self, tab: Tab) -> Style {
        if self.state.active_tab == Some(tab) {
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::NEUTRAL)
        }
    }
}

impl Widget for NavigationHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = HeaderLayout::new(area, self.policy);

        Self::button(LOGO, Style::default().fg(colors::PRIMARY), layout.logo, buf);

        for (tab, rect) in &layout.tabs {
            Self::button(tab.label(), self.tab_style(*tab), *rect, buf);
        }

        let search = &self.state.search;
        let search_style = if search.editing {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let search_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(search_style);
        let inner_width = search_block.inner(layout.search).width.saturating_sub(2) as usize;
        let text = if search.input.is_empty() && !search.editing {
            Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(colors::NEUTRAL))
        } else {
            Span::styled(
                tail_fitting(&search.input, inner_width.saturating_sub(1)).to_string(),
                Style::default().fg(colors::TEXT),
            )
        };
        let mut spans = vec![Span::styled(format!("{} ", icons::SEARCH), search_style), text];
        if search.editing {
            spans.push(Span::styled("_", search_style));
        }
        Paragraph::new(Line::from(spans))
            .block(search_block)
            .render(layout.search, buf);

        Self::button(
            Tab::MyCollection.label(),
            self.tab_style(Tab::MyCollection),
            layout.collection,
            buf,
        );
        Self::button(
            PORTAL_LABEL,
            Style::default().fg(colors::TEXT),
            layout.portal,
            buf,
        );
        Self::button(
            icons::ACCOUNT,
            Style::default().fg(colors::NEUTRAL),
            layout.account,
            buf,
        );
        Self::button(
            &format!("{} {}", icons::CART, CART_COUNT),
            Style::default().fg(colors::NEUTRAL),
            layout.cart,
            buf,
        );
    }
}

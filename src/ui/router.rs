use ratatui::Frame;
use ratatui::crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

use crate::event::events::Event;
use crate::ui::{
    components::header::{HeaderControl, HeaderLayout, HeaderState, NavigationHeader},
    context::AppContext,
    route::Route,
    tab::{Tab, TabRouter},
    traits::View,
    views::{Artists, Clubs, Collection, Home},
};

/// Oldest entries are dropped past this.
pub const HISTORY_LIMIT: usize = 32;

/// Owns the mounted page and the header state derived from it. Every
/// navigation mounts a fresh page.
pub struct Router {
    page: Box<dyn View>,
    header: HeaderState,
    header_area: Rect,
    history: Vec<Route>,
}

fn mount(route: Route, ctx: &AppContext) -> Box<dyn View> {
    match route {
        Route::Home => Box::new(Home::default()),
        Route::Artists => Box::new(Artists::default()),
        Route::Clubs => Box::new(Clubs),
        Route::Collection => Box::new(Collection::new(ctx.config.collection_items)),
    }
}

impl Router {
    pub fn new(route: Route, ctx: &AppContext) -> Self {
        Self {
            page: mount(route, ctx),
            header: HeaderState::for_route(route),
            header_area: Rect::default(),
            history: Vec::new(),
        }
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    pub fn active_tab(&self) -> Option<Tab> {
        self.header.active_tab
    }

    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut HeaderState {
        &mut self.header
    }

    fn replace(&mut self, route: Route, ctx: &AppContext) {
        self.page = mount(route, ctx);
        self.header = HeaderState::for_route(route);
    }

    pub fn navigate(&mut self, route: Route, ctx: &AppContext) {
        let from = self.route();
        info!("navigate {} -> {}", from, route);
        if from != route {
            if self.history.len() == HISTORY_LIMIT {
                self.history.remove(0);
            }
            self.history.push(from);
        }
        self.replace(route, ctx);
    }

    /// Returns `false` when there is nothing to go back to.
    pub fn back(&mut self, ctx: &AppContext) -> bool {
        match self.history.pop() {
            Some(route) => {
                info!("back {} -> {}", self.route(), route);
                self.replace(route, ctx);
                true
            }
            None => false,
        }
    }

    /// Highlights `tab`, then requests navigation if the tab has a page.
    pub fn click_tab(&mut self, tab: Tab, ctx: &AppContext) {
        if !tab.is_visible(ctx.config.albums_tab) {
            debug!("ignoring click on hidden tab {:?}", tab);
            return;
        }

        self.header.active_tab = Some(tab);
        match TabRouter::resolve(tab) {
            Some(route) => ctx.send(Event::Navigate(route)),
            None => debug!("tab {} has no page", tab.label()),
        }
    }

    pub fn click_label(&mut self, label: &str, ctx: &AppContext) {
        match Tab::from_label(label) {
            Some(tab) => self.click_tab(tab, ctx),
            None => debug!("ignoring unknown tab label {:?}", label),
        }
    }

    pub fn click_header(&mut self, control: HeaderControl, ctx: &AppContext) {
        match control {
            HeaderControl::Logo => ctx.send(Event::Navigate(Route::Home)),
            HeaderControl::Tab(tab) => self.click_tab(tab, ctx),
            HeaderControl::Search => self.header.search.focus(),
            HeaderControl::ArtistPortal | HeaderControl::Account | HeaderControl::Cart => {
                debug!("{:?} is a placeholder", control)
            }
        }
    }

    pub fn render_header(&mut self, f: &mut Frame, area: Rect, ctx: &AppContext) {
        self.header_area = area;
        f.render_widget(
            NavigationHeader::new(&self.header, ctx.config.albums_tab),
            area,
        );
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, ctx: &AppContext) {
        self.page.render(f, area, ctx);
    }

    pub async fn handle_input(&mut self, key: KeyEvent, ctx: &AppContext) -> bool {
        if self.header.search.handle_key(key) {
            return true;
        }
        self.page.handle_input(key, ctx).await
    }

    pub async fn handle_mouse(&mut self, mouse: MouseEvent, ctx: &AppContext) -> bool {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            let position = Position::new(mouse.column, mouse.row);
            if self.header_area.contains(position) {
                let layout = HeaderLayout::new(self.header_area, ctx.config.albums_tab);
                if let Some(control) = layout.control_at(position) {
                    self.click_header(control, ctx);
                }
                return true;
            }
        }
        self.page.handle_mouse(mouse, ctx).await
    }

    pub fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        match event {
            Event::Navigate(route) => self.navigate(*route, ctx),
            Event::Back => {
                self.back(ctx);
            }
        }
    }
}

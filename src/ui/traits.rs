use async_trait::async_trait;
use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

use crate::ui::{context::AppContext, route::Route};

/// A page body mounted by the router below the navigation header.
#[async_trait]
pub trait View: Send {
    fn route(&self) -> Route;

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &AppContext);

    /// Returns `true` when the key was consumed.
    async fn handle_input(&mut self, _key: KeyEvent, _ctx: &AppContext) -> bool {
        false
    }

    /// Returns `true` when the mouse event was consumed.
    async fn handle_mouse(&mut self, _mouse: MouseEvent, _ctx: &AppContext) -> bool {
        false
    }
}

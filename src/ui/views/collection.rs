use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tracing::debug;

use crate::{
    ui::{
        components::{
            dropdown::{DropdownLayout, SortDropdown, SortDropdownWidget},
            tiles::{TileGrid, section_title},
        },
        content::{self, Tile},
        context::AppContext,
        route::Route,
        traits::View,
    },
    util::colors,
};

pub const TITLE: &str = "MY COLLECTION";
const GRID_COLUMNS: usize = 4;

#[derive(Default)]
pub struct Collection {
    items: Vec<Tile>,
    sort: SortDropdown,
    dropdown_layout: DropdownLayout,
}

impl Collection {
    /// `with_items` swaps the empty state for placeholder cards.
    pub fn new(with_items: bool) -> Self {
        Self {
            items: if with_items {
                content::collection_items()
            } else {
                Vec::new()
            },
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[Tile] {
        &self.items
    }

    pub fn sort(&self) -> &SortDropdown {
        &self.sort
    }

    fn toggle_sort(&mut self) {
        self.sort.toggle();
        debug!("sort dropdown open: {}", self.sort.is_open());
    }

    fn apply_highlighted(&mut self) {
        if self.sort.select_highlighted() {
            debug!("sort set to {}", self.sort.selection());
        }
    }
}

#[async_trait]
impl View for Collection {
    fn route(&self) -> Route {
        Route::Collection
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _ctx: &AppContext) {
        let area = area.intersection(f.area());
        if area.is_empty() {
            self.dropdown_layout = DropdownLayout::default();
            return;
        }

        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(1)])
            .spacing(1)
            .split(area);
        let title_area = chunks[0];
        let body_area = chunks[1];

        f.render_widget(
            Paragraph::new(section_title(TITLE)),
            Rect {
                y: title_area.y + 1,
                height: title_area.height.min(1),
                ..title_area
            }
            .intersection(title_area),
        );

        if self.items.is_empty() {
            let message = Rect {
                y: body_area.y + body_area.height / 2,
                height: body_area.height.min(1),
                ..body_area
            };
            f.render_widget(
                Paragraph::new(Line::styled(
                    content::EMPTY_COLLECTION,
                    Style::default()
                        .fg(colors::NEUTRAL)
                        .add_modifier(Modifier::ITALIC),
                ))
                .alignment(Alignment::Center),
                message,
            );
        } else {
            f.render_widget(
                TileGrid::new(&self.items).columns(GRID_COLUMNS),
                body_area,
            );
        }

        // drawn last so the open menu overlays the body
        self.dropdown_layout = DropdownLayout::new(title_area, area, self.sort.is_open());
        f.render_widget(
            SortDropdownWidget::new(&self.sort, &self.dropdown_layout),
            area,
        );
    }

    async fn handle_input(&mut self, key: KeyEvent, _ctx: &AppContext) -> bool {
        if self.sort.is_open() {
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => self.sort.cursor_down(),
                KeyCode::Up | KeyCode::Char('k') => self.sort.cursor_up(),
                KeyCode::Enter => self.apply_highlighted(),
                KeyCode::Esc | KeyCode::Char('s') => self.toggle_sort(),
                _ => return false,
            }
            return true;
        }

        match key.code {
            KeyCode::Char('s') | KeyCode::Enter => {
                self.toggle_sort();
                true
            }
            _ => false,
        }
    }

    async fn handle_mouse(&mut self, mouse: MouseEvent, _ctx: &AppContext) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        let position = Position::new(mouse.column, mouse.row);

        if self.dropdown_layout.hits_trigger(position) {
            self.toggle_sort();
            return true;
        }

        if let Some(option) = self.dropdown_layout.option_at(position) {
            if self.sort.select(option) {
                debug!("sort set to {}", option);
            }
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, crossterm::event::KeyModifiers};

    use super::*;
    use crate::{
        config::Config,
        ui::components::dropdown::SortOption,
    };

    fn ctx() -> AppContext {
        let (tx, _rx) = flume::unbounded();
        AppContext::new(Config::default(), tx)
    }

    fn draw(page: &mut Collection, ctx: &AppContext) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| page.render(f, f.area(), ctx))
            .unwrap();
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn mounts_to_the_empty_state() {
        let ctx = ctx();
        let mut page = Collection::new(false);
        let screen = draw(&mut page, &ctx);

        assert!(screen.contains(content::EMPTY_COLLECTION));
        assert!(screen.contains(TITLE));
        assert!(screen.contains("SORT:"));
        assert!(screen.contains("most recent"));
        assert!(!screen.contains("Song Title"));
        assert!(page.items().is_empty());
    }

    #[test]
    fn placeholder_items_replace_the_empty_state() {
        let ctx = ctx();
        let mut page = Collection::new(true);
        let screen = draw(&mut page, &ctx);

        assert!(!screen.contains(content::EMPTY_COLLECTION));
        assert!(screen.contains("Song Title 1"));
        assert!(screen.contains("Song Title 8"));
    }

    #[tokio::test]
    async fn keyboard_opens_moves_and_selects() {
        let ctx = ctx();
        let mut page = Collection::new(false);

        assert!(page.handle_input(key(KeyCode::Char('s')), &ctx).await);
        assert!(page.sort().is_open());
        assert!(page.handle_input(key(KeyCode::Esc), &ctx).await);
        assert!(!page.sort().is_open());
        assert!(!page.handle_input(key(KeyCode::Esc), &ctx).await);

        assert!(page.handle_input(key(KeyCode::Char('s')), &ctx).await);
        assert!(draw(&mut page, &ctx).contains("> most recent"));

        assert!(page.handle_input(key(KeyCode::Char('j')), &ctx).await);
        assert!(page.handle_input(key(KeyCode::Enter), &ctx).await);
        assert!(!page.sort().is_open());
        assert_eq!(page.sort().selection(), SortOption::MostExpensive);
        assert!(draw(&mut page, &ctx).contains("most $$$"));

        assert!(!page.handle_input(key(KeyCode::Char('x')), &ctx).await);
    }

    #[tokio::test]
    async fn open_menu_is_clipped_to_short_buffers() {
        let ctx = ctx();
        let mut page = Collection::new(true);
        assert!(page.handle_input(key(KeyCode::Char('s')), &ctx).await);

        for height in 1..=6 {
            let mut terminal = Terminal::new(TestBackend::new(80, height)).unwrap();
            terminal
                .draw(|f| page.render(f, Rect::new(0, 0, 80, 24), &ctx))
                .unwrap();
        }
        assert!(page.sort().is_open());
    }

    #[tokio::test]
    async fn mouse_clicks_trigger_and_option() {
        let ctx = ctx();
        let mut page = Collection::new(false);
        draw(&mut page, &ctx);

        let click = |x, y| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        };

        let trigger = page.dropdown_layout.trigger;
        assert!(page.handle_mouse(click(trigger.x + 1, trigger.y + 1), &ctx).await);
        assert!(page.sort().is_open());

        draw(&mut page, &ctx);
        let (option, row) = page.dropdown_layout.options[1];
        assert!(page.handle_mouse(click(row.x, row.y), &ctx).await);
        assert!(!page.sort().is_open());
        assert_eq!(page.sort().selection(), option);

        assert!(!page.handle_mouse(click(0, 23), &ctx).await);
    }
}

use flume::Receiver;
use ratatui::Frame;
use tracing::info;

use crate::{config::Config, event::events::Event};

use super::{
    context::AppContext,
    layout::AppLayout,
    message::AppMessage,
    route::Route,
    router::Router,
    tab::Tab,
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub router: Router,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        let start = config.start_route;
        let ctx = AppContext::new(config, event_tx);
        let router = Router::new(start, &ctx);

        Self {
            event_rx,
            ctx,
            router,
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new(self.ctx.config.tick_rate)?
            .mouse(true)
            .paste(true);
        tui.enter()?;
        info!("started at {}", self.router.route());

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    pub fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::GoHome => self.ctx.send(Event::Navigate(Route::Home)),
            AppMessage::GoBack => self.ctx.send(Event::Back),
            AppMessage::ClickTab(tab) => self.router.click_tab(tab, &self.ctx),
            AppMessage::NextTab | AppMessage::PreviousTab => {
                let policy = self.ctx.config.albums_tab;
                let tab = match (self.router.active_tab(), &msg) {
                    (Some(current), AppMessage::NextTab) => current.next(policy),
                    (Some(current), _) => current.prev(policy),
                    (None, AppMessage::NextTab) => Tab::Artists,
                    (None, _) => Tab::MyCollection,
                };
                self.router.click_tab(tab, &self.ctx);
            }
            AppMessage::FocusSearch => self.router.header_mut().search.focus(),
        }
    }

    /// Applies every queued event.
    pub fn drain_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(evt) = self.event_rx.try_recv() {
            self.router.on_event(&evt, &self.ctx);
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::ui::content;

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|f| app.ui(f)).unwrap();
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

    #[test]
    fn tab_click_round_trips_through_the_event_channel() {
        let mut app = App::new(Config::default());

        app.update(AppMessage::ClickTab(Tab::Clubs));
        assert_eq!(app.router.route(), Route::Home);
        assert!(app.drain_events());
        assert_eq!(app.router.route(), Route::Clubs);
        assert!(!app.drain_events());

        app.update(AppMessage::GoHome);
        app.drain_events();
        assert_eq!(app.router.route(), Route::Home);
        assert_eq!(app.router.active_tab(), None);
    }

    #[test]
    fn tab_cycling_starts_from_artists_on_home() {
        let mut app = App::new(Config::default());
        app.update(AppMessage::NextTab);
        app.drain_events();
        assert_eq!(app.router.route(), Route::Artists);

        app.update(AppMessage::NextTab);
        app.drain_events();
        assert_eq!(app.router.active_tab(), Some(Tab::Albums));
        assert_eq!(app.router.route(), Route::Artists);
    }

    #[test]
    fn home_renders_ten_chart_rows() {
        let mut app = App::new(Config::default());
        let screen = screen(&mut app);

        let ranks: Vec<u8> = screen
            .lines()
            .flat_map(|line| line.split('│'))
            .flat_map(|cell| cell.split("$XXX.XX"))
            .filter_map(|cell| {
                let cell = cell.trim_start();
                let (rank, rest) = cell.split_once("  ")?;
                rest.starts_with("Artist Name").then(|| rank.parse().ok())?
            })
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(sorted, (1..=content::CHART_SIZE).collect::<Vec<u8>>());

        for label in ["Featured Artist 1", "EXPLORE BY ARTIST", "EXPLORE BY GENRE", "underground"] {
            assert!(screen.contains(label), "missing {label}");
        }
    }

    #[test]
    fn every_route_renders_its_shell() {
        let cases = [
            (Route::Artists, "POPULAR ALBUMS"),
            (Route::Clubs, content::COMING_SOON),
            (Route::Collection, content::EMPTY_COLLECTION),
        ];
        for (route, marker) in cases {
            let mut app = App::new(Config {
                start_route: route,
                ..Config::default()
            });
            let screen = screen(&mut app);
            assert!(screen.contains(marker), "{route}: missing {marker}");
            assert!(screen.contains("Artist Portal"));
        }
    }

    #[tokio::test]
    async fn collection_survives_tiny_terminals() {
        use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        for height in 1..=4 {
            for open in [false, true] {
                let mut app = App::new(Config {
                    start_route: Route::Collection,
                    ..Config::default()
                });
                if open {
                    let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
                    assert!(app.router.handle_input(key, &app.ctx).await);
                }
                let mut terminal = Terminal::new(TestBackend::new(80, height)).unwrap();
                terminal.draw(|f| app.ui(f)).unwrap();
            }
        }
    }
}

use ratatui::crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};
use tracing::{debug, info};

use crate::ui::{
    app::App,
    input::InputHandler,
    tui::{TerminalEvent, Tui},
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui).await? {
                should_render = true;
            }
        }

        if app.drain_events() {
            should_render = true;
        }

        Ok(should_render)
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => debug!("terminal ready"),
            TerminalEvent::Closed => {
                info!("terminal input closed");
                app.should_quit = true;
            }
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse).await,
            TerminalEvent::Paste(text) => {
                let search = &mut app.router.header_mut().search;
                if search.editing {
                    search.insert_str(&text);
                }
            }
            TerminalEvent::Tick => {
                return Ok(app.has_focus);
            }
            TerminalEvent::Error | TerminalEvent::Resize(_, _) => {}
        }

        Ok(true)
    }

    async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        if app.router.handle_input(evt, &app.ctx).await {
            return;
        }

        if let Some(msg) = InputHandler::handle_key(evt) {
            app.update(msg);
        }
    }

    async fn handle_mouse_event(app: &mut App, evt: MouseEvent) {
        app.router.handle_mouse(evt, &app.ctx).await;
    }
}

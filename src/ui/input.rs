use crate::ui::{message::AppMessage, tab::Tab};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Char('h'), _) | (KeyCode::Home, _) => Some(AppMessage::GoHome),
            (KeyCode::Char('1'), _) => Some(AppMessage::ClickTab(Tab::Artists)),
            (KeyCode::Char('2'), _) => Some(AppMessage::ClickTab(Tab::Albums)),
            (KeyCode::Char('3'), _) => Some(AppMessage::ClickTab(Tab::Clubs)),
            (KeyCode::Char('4'), _) | (KeyCode::Char('c'), _) => {
                Some(AppMessage::ClickTab(Tab::MyCollection))
            }
            (KeyCode::Char('/'), _) => Some(AppMessage::FocusSearch),
            (KeyCode::Tab, _) => Some(AppMessage::NextTab),
            (KeyCode::BackTab, _) => Some(AppMessage::PreviousTab),
            (KeyCode::Esc, _) => Some(AppMessage::GoBack),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn number_keys_click_tabs() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('1'))),
            Some(AppMessage::ClickTab(Tab::Artists))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('2'))),
            Some(AppMessage::ClickTab(Tab::Albums))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('c'))),
            Some(AppMessage::ClickTab(Tab::MyCollection))
        );
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_opens_collection() {
        assert_eq!(
            InputHandler::handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppMessage::Quit)
        );
        assert_eq!(InputHandler::handle_key(key(KeyCode::Char('q'))), Some(AppMessage::Quit));
        assert_eq!(InputHandler::handle_key(key(KeyCode::Char('z'))), None);
    }
}

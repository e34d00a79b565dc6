use crate::ui::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // Commands
    Navigate(Route),
    Back,
}

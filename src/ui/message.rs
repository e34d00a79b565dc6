use crate::ui::tab::Tab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    // User Input
    Quit,

    // Navigation
    GoHome,
    GoBack,
    ClickTab(Tab),
    NextTab,
    PreviousTab,
    FocusSearch,
}

use std::fmt;

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::util::{colors, icons};

pub const SORT_LABEL: &str = "SORT:";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    #[default]
    MostRecent,
    MostExpensive,
}

impl SortOption {
    pub const ALL: [SortOption; 2] = [SortOption::MostRecent, SortOption::MostExpensive];

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::MostRecent => "most recent",
            SortOption::MostExpensive => "most $$$",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|o| o == self).unwrap_or(0)
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Open/closed sort picker. The selection is display state only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortDropdown {
    selection: SortOption,
    open: bool,
    cursor: usize,
}

impl SortDropdown {
    pub fn selection(&self) -> SortOption {
        self.selection
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> SortOption {
        SortOption::ALL[self.cursor]
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.cursor = self.selection.index();
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Applies `option` and closes. Ignored while closed.
    pub fn select(&mut self, option: SortOption) -> bool {
        if !self.open {
            return false;
        }
        self.selection = option;
        self.open = false;
        true
    }

    pub fn select_highlighted(&mut self) -> bool {
        self.select(self.highlighted())
    }

    pub fn cursor_down(&mut self) {
        if self.open {
            self.cursor = (self.cursor + 1).min(SortOption::ALL.len() - 1);
        }
    }

    pub fn cursor_up(&mut self) {
        if self.open {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }
}

/// Where the trigger and (when open) each option sit on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownLayout {
    pub trigger: Rect,
    pub menu: Option<Rect>,
    pub options: Vec<(SortOption, Rect)>,
}

fn menu_width() -> u16 {
    SortOption::ALL
        .iter()
        .map(|o| o.label().width() as u16)
        .max()
        .unwrap_or(0)
        + 6
}

impl DropdownLayout {
    /// `anchor` is the row area the trigger is right-aligned in; the menu
    /// opens below it, clipped to `bounds`.
    pub fn new(anchor: Rect, bounds: Rect, open: bool) -> Self {
        let width = menu_width().min(anchor.width);
        let trigger = Rect {
            x: anchor.right().saturating_sub(width),
            y: anchor.y,
            width,
            height: anchor.height.min(3),
        };

        if !open {
            return Self {
                trigger,
                menu: None,
                options: Vec::new(),
            };
        }

        let menu = Rect {
            x: trigger.x,
            y: trigger.bottom(),
            width,
            height: SortOption::ALL.len() as u16 + 2,
        }
        .intersection(bounds);

        let options = SortOption::ALL
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let row = Rect {
                    x: menu.x + 1,
                    y: menu.y + 1 + i as u16,
                    width: menu.width.saturating_sub(2),
                    height: 1,
                };
                (*option, row.intersection(menu))
            })
            .filter(|(_, r)| !r.is_empty())
            .collect();

        Self {
            trigger,
            menu: Some(menu),
            options,
        }
    }

    pub fn hits_trigger(&self, position: Position) -> bool {
        self.trigger.contains(position)
    }

    pub fn option_at(&self, position: Position) -> Option<SortOption> {
        self.options
            .iter()
            .find(|(_, r)| r.contains(position))
            .map(|(o, _)| *o)
    }
}

pub struct SortDropdownWidget<'a> {
    dropdown: &'a SortDropdown,
    layout: &'a DropdownLayout,
}

impl<'a> SortDropdownWidget<'a> {
    pub fn new(dropdown: &'a SortDropdown, layout: &'a DropdownLayout) -> Self {
        Self { dropdown, layout }
    }
}

impl Widget for SortDropdownWidget<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let trigger = self.layout.trigger.intersection(buf.area);
        if trigger.is_empty() {
            return;
        }
        let label_width = SORT_LABEL.width() as u16 + 1;
        if trigger.x >= label_width {
            buf.set_string(
                trigger.x - label_width,
                trigger.y + trigger.height / 2,
                SORT_LABEL,
                Style::default().fg(colors::NEUTRAL),
            );
        }

        let trigger_style = if self.dropdown.is_open() {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::TEXT)
        };
        Paragraph::new(Line::from(vec![
            Span::raw(self.dropdown.selection().label()),
            Span::raw(" "),
            Span::raw(icons::CHEVRON_DOWN),
        ]))
        .style(trigger_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(trigger_style),
        )
        .render(trigger, buf);

        let Some(menu) = self.layout.menu.map(|m| m.intersection(buf.area)) else {
            return;
        };

        Clear.render(menu, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .style(Style::default().bg(colors::SURFACE))
            .render(menu, buf);

        for (option, row) in &self.layout.options {
            let row = row.intersection(menu);
            if row.is_empty() {
                continue;
            }
            let mut style = if *option == self.dropdown.selection() {
                Style::default().fg(colors::PRIMARY)
            } else {
                Style::default().fg(colors::TEXT)
            };
            let marker = if *option == self.dropdown.highlighted() {
                style = style.add_modifier(Modifier::BOLD);
                "> "
            } else {
                "  "
            };
            buf.set_stringn(
                row.x,
                row.y,
                format!("{marker}{}", option.label()),
                row.width as usize,
                style,
            );
        }
    }
}

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{ui::content::ChartEntry, util::colors};

pub const CHART_TITLE: &str = " TOP 10 ";
const ROWS_PER_COLUMN: usize = 5;

/// Ranked chart laid out in two columns of five.
pub struct ChartList<'a> {
    entries: &'a [ChartEntry],
}

impl<'a> ChartList<'a> {
    pub fn new(entries: &'a [ChartEntry]) -> Self {
        Self { entries }
    }

    pub fn height(&self) -> u16 {
        ROWS_PER_COLUMN as u16 + 2
    }

    fn render_row(entry: &ChartEntry, area: Rect, buf: &mut Buffer) {
        let price_width = entry.price.width() as u16;
        let line = Line::from(vec![
            Span::styled(
                format!("{:>2}  ", entry.rank),
                Style::default()
                    .fg(colors::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(entry.artist, Style::default().fg(colors::TEXT)),
            Span::raw("  "),
            Span::styled(
                entry.song,
                Style::default()
                    .fg(colors::NEUTRAL)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]);
        let text_width = area.width.saturating_sub(price_width + 1);
        buf.set_line(area.x, area.y, &line, text_width);

        if area.width > price_width {
            buf.set_string(
                area.right() - price_width,
                area.y,
                entry.price,
                Style::default().fg(colors::TEXT),
            );
        }
    }
}

impl Widget for ChartList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title_top(Line::styled(
                CHART_TITLE,
                Style::default()
                    .fg(colors::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        block.render(area, buf);

        let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
            .spacing(3)
            .split(inner);

        for (column, entries) in columns.iter().zip(self.entries.chunks(ROWS_PER_COLUMN)) {
            for (i, entry) in entries.iter().enumerate() {
                let y = column.y + i as u16;
                if y >= column.bottom() {
                    break;
                }
                Self::render_row(entry, Rect { y, height: 1, ..*column }, buf);
            }
        }
    }
}

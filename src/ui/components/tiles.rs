use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{ui::content::Tile, util::colors};

pub fn section_title(title: &str) -> Line<'_> {
    Line::styled(
        title,
        Style::default()
            .fg(colors::TEXT)
            .add_modifier(Modifier::BOLD),
    )
}

/// Rows of bordered placeholder cards, `columns` per row.
pub struct TileGrid<'a> {
    title: Option<&'a str>,
    tiles: &'a [Tile],
    columns: usize,
    alignment: Alignment,
}

impl<'a> TileGrid<'a> {
    pub fn new(tiles: &'a [Tile]) -> Self {
        Self {
            title: None,
            tiles,
            columns: tiles.len().max(1),
            alignment: Alignment::Left,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    fn tile_height(&self) -> u16 {
        if self.tiles.iter().any(|t| t.subtitle.is_some()) {
            4
        } else {
            3
        }
    }

    fn rows(&self) -> u16 {
        self.tiles.len().div_ceil(self.columns) as u16
    }

    pub fn height(&self) -> u16 {
        self.title.map_or(0, |_| 1) + self.rows() * self.tile_height()
    }
}

impl Widget for TileGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut area = area;
        if let Some(title) = self.title {
            Paragraph::new(section_title(title))
                .alignment(self.alignment)
                .render(Rect { height: 1, ..area }, buf);
            area.y += 1;
            area.height = area.height.saturating_sub(1);
        }

        let tile_height = self.tile_height();
        let rows = Layout::vertical(vec![Constraint::Length(tile_height); self.rows() as usize])
            .split(area);

        for (row_area, chunk) in rows.iter().zip(self.tiles.chunks(self.columns)) {
            let cells = Layout::horizontal(vec![Constraint::Fill(1); self.columns])
                .spacing(1)
                .split(*row_area);

            for (cell, tile) in cells.iter().zip(chunk) {
                let mut lines = vec![Line::styled(
                    tile.title.as_str(),
                    Style::default().fg(colors::TEXT),
                )];
                if let Some(subtitle) = &tile.subtitle {
                    lines.push(Line::styled(
                        subtitle.as_str(),
                        Style::default()
                            .fg(colors::NEUTRAL)
                            .add_modifier(Modifier::ITALIC),
                    ));
                }

                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_set(border::ROUNDED)
                            .border_style(Style::default().fg(colors::NEUTRAL)),
                    )
                    .render(*cell, buf);
            }
        }
    }
}

/// Wide featured-artist placeholder with a name overlay in the bottom right.
pub struct Banner<'a> {
    label: &'a str,
    name: &'a str,
    release: &'a str,
}

impl<'a> Banner<'a> {
    pub fn new(label: &'a str, name: &'a str, release: &'a str) -> Self {
        Self {
            label,
            name,
            release,
        }
    }
}

impl Widget for Banner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .style(Style::default().bg(colors::SURFACE));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        Paragraph::new(Line::styled(self.label, Style::default().fg(colors::NEUTRAL)))
            .alignment(Alignment::Center)
            .render(
                Rect {
                    y: inner.y + inner.height.saturating_sub(1) / 2,
                    height: 1,
                    ..inner
                },
                buf,
            );

        let overlay = Rect {
            y: inner.bottom().saturating_sub(2).max(inner.y),
            height: inner.height.min(2),
            ..inner
        };
        Paragraph::new(vec![
            Line::styled(
                self.name,
                Style::default()
                    .fg(colors::TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.release, Style::default().fg(colors::NEUTRAL)),
        ])
        .alignment(Alignment::Right)
        .render(overlay, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::content;

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn height_accounts_for_title_and_wrapped_rows() {
        let tiles = content::collection_items();
        let grid = TileGrid::new(&tiles).title("X").columns(4);
        assert_eq!(grid.height(), 1 + 2 * 4);

        let genres = content::genres();
        assert_eq!(TileGrid::new(&genres).height(), 3);
    }

    #[test]
    fn renders_every_tile_label() {
        let tiles = content::popular_albums();
        let area = Rect::new(0, 0, 100, 4);
        let mut buf = Buffer::empty(area);
        TileGrid::new(&tiles).title("POPULAR ALBUMS").render(area, &mut buf);

        let rendered = text(&buf);
        assert!(rendered.contains("POPULAR ALBUMS"));
        for i in 1..=5 {
            assert!(rendered.contains(&format!("Album {i}")));
        }
    }

    #[test]
    fn banner_shows_overlay() {
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        Banner::new("Featured Artist", "MIKE SINI", "CHECK UP").render(area, &mut buf);

        let rendered = text(&buf);
        assert!(rendered.contains("Featured Artist"));
        assert!(rendered.contains("MIKE SINI"));
        assert!(rendered.contains("CHECK UP"));
    }
}

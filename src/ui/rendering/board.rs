//! Board grid rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    board::{Cell, Player},
    ui::{app::App, types::Focus},
};

impl App {
    pub(in crate::ui) fn draw_board(&self, f: &mut Frame, area: Rect) {
        let size = self.game.board_size();
        let board = self.game.current_board();
        let winning_line = self.game.winner().map(|w| w.line).unwrap_or_default();

        let lines: Vec<Line> = board
            .chunks(size)
            .enumerate()
            .map(|(row, cells)| {
                let spans: Vec<Span> = cells
                    .iter()
                    .enumerate()
                    .map(|(col, &cell)| {
                        let index = row * size + col;
                        let mut style = match cell {
                            Cell::Taken(Player::X) => Style::default().fg(Color::Yellow),
                            Cell::Taken(Player::O) => Style::default().fg(Color::Magenta),
                            Cell::Empty => Style::default().fg(Color::DarkGray),
                        };
                        if winning_line.contains(&index) {
                            style = style.bg(Color::Green).fg(Color::Black);
                        }
                        if index == self.cursor && self.focus == Focus::Board {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        let symbol = match cell {
                            Cell::Empty => '·',
                            _ => cell.symbol(),
                        };
                        Span::styled(format!(" {} ", symbol), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let title = format!(
            "Board {0}x{0} | arrows: move | Enter: play | s: sort | Tab: focus",
            size
        );

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.border_style(Focus::Board))
                    .title(title),
            ),
            area,
        );
    }
}

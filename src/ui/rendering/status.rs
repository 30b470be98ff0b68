use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{game::Status, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let status = self.game.status();

        let color = match status {
            Status::Winner(_) => Color::Green,
            Status::Draw => Color::Yellow,
            Status::NextPlayer(_) => Color::White,
        };

        let text = format!(
            "{} | Move #{} of {} | Ctrl+Q: quit",
            status,
            self.game.current_move(),
            self.game.history().len() - 1
        );

        f.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }
}

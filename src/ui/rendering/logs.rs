//! Log panel rendering.

use ratatui::{
    Frame,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{app::App, types::LogLevel};

impl App {
    pub(in crate::ui) fn draw_logs(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let logs = self.logs.entries();

        // borders take two rows
        let height = area.height.saturating_sub(2) as usize;
        let start = logs.len().saturating_sub(height);

        let lines: Vec<Line> = logs[start..]
            .iter()
            .map(|l| {
                let style = match l.level {
                    LogLevel::Rejected => Style::default().fg(Color::Red),
                    LogLevel::Outcome => Style::default().fg(Color::Green),
                    LogLevel::Info => Style::default(),
                };
                Line::styled(l.text.clone(), style)
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log")),
            area,
        );
    }
}

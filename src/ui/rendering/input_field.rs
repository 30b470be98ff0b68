//! Board size input rendering with validation status.

use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{
    app::App,
    handlers::size_input_status,
    types::{Focus, InputStatus},
};

impl App {
    pub(in crate::ui) fn draw_size_input(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let focused = self.focus == Focus::SizeInput;

        let (border_color, subtitle) = match size_input_status(&self.size_input) {
            _ if !focused => (Color::Reset, ""),
            InputStatus::Incomplete => (Color::Gray, ""),
            InputStatus::Valid(_) => (Color::Green, ""),
            InputStatus::Invalid(msg) => (Color::Red, msg),
        };

        let text = if focused {
            format!("{}▌", self.size_input)
        } else {
            self.size_input.clone()
        };

        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(format!("Board Size (min 3) {} | Enter = new game", subtitle)),
            ),
            area,
        );
    }
}

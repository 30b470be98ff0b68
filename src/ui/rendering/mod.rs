mod board;
mod input_field;
mod logs;
mod moves;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
};

use crate::ui::{app::App, types::Focus};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(f.area());

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(main_layout[0]);

        let right_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(8)])
            .split(main_layout[1]);

        self.draw_status(f, left_layout[0]);
        self.draw_board(f, left_layout[1]);
        self.draw_size_input(f, left_layout[2]);
        self.draw_moves(f, right_layout[0]);
        self.draw_logs(f, right_layout[1]);
    }

    /// Border style for a panel, highlighted while it has focus.
    pub(in crate::ui) fn border_style(&self, panel: Focus) -> Style {
        if self.focus == panel {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        }
    }
}

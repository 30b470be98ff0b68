//! Move list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::ui::{app::App, types::Focus};

impl App {
    pub(in crate::ui) fn draw_moves(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .game
            .move_list()
            .into_iter()
            .map(|entry| {
                let style = if entry.is_current {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(entry.description).style(style)
            })
            .collect();

        let order = if self.game.ascending() {
            "Ascending"
        } else {
            "Descending"
        };
        let title = format!("Moves | Sort by: {} | Enter: jump", order);

        let mut state = ListState::default();
        if self.focus == Focus::Moves {
            state.select(Some(self.selected_entry));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.border_style(Focus::Moves))
                    .title(title),
            )
            .highlight_symbol("> ")
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        f.render_stateful_widget(list, area, &mut state);
    }
}

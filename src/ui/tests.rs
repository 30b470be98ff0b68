//! UI module tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{
    app::App,
    handlers::{GameHandler, InputHandler, size_input_status},
    types::{Focus, InputStatus, LogBuffer, LogLevel},
};
use crate::{
    board::{Cell, Player},
    command::Command,
    game::{GameState, Status},
};

/// Helper function to create a test app on a fresh 3x3 board.
fn create_test_app() -> App {
    App::new(GameState::new(3), LogBuffer::new())
}

fn press(app: &mut App, code: KeyCode) -> bool {
    InputHandler::new(app).handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[cfg(test)]
mod app_tests {
    use super::*;

    #[test]
    fn test_app_initialization() {
        let app = create_test_app();

        assert_eq!(app.focus, Focus::Board);
        assert_eq!(app.cursor, 4);
        assert_eq!(app.size_input, "3");
        assert_eq!(app.game().history().len(), 1);
    }

    #[test]
    fn test_log_buffer() {
        let logs = LogBuffer::new();

        logs.push("Test message 1".to_string());
        logs.push("Test message 2".to_string());

        let lines = logs.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Test message 1"));
        assert!(lines[1].ends_with("Test message 2"));
    }

    #[test]
    fn test_log_buffer_max_capacity() {
        let logs = LogBuffer::new();

        for i in 0..350 {
            logs.push(format!("Message {}", i));
        }

        let lines = logs.lines();
        assert_eq!(lines.len(), super::super::types::MAX_LOG_LINES);
        assert!(lines.last().unwrap().ends_with("Message 349"));
    }

    #[test]
    fn test_log_levels_are_kept_per_entry() {
        let logs = LogBuffer::new();

        logs.push("Winner mentioned in passing".to_string());
        logs.push_at(LogLevel::Rejected, "Size rejected: \"1\"".to_string());
        logs.push_at(LogLevel::Outcome, "Draw".to_string());

        let levels: Vec<LogLevel> = logs.entries().iter().map(|l| l.level).collect();
        assert_eq!(
            levels,
            vec![LogLevel::Info, LogLevel::Rejected, LogLevel::Outcome]
        );
    }

    #[test]
    fn test_draw_smoke() {
        use ratatui::{Terminal, backend::TestBackend};

        let mut app = create_test_app();
        GameHandler::new(&mut app).dispatch(Command::Play(0));

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Next player: O"));
        assert!(text.contains("Go to game start"));
        assert!(text.contains("You are at move #1 (1, 1)"));
    }
}

#[cfg(test)]
mod game_handler_tests {
    use super::*;

    #[test]
    fn test_dispatch_play_logs_move() {
        let mut app = create_test_app();

        assert!(GameHandler::new(&mut app).dispatch(Command::Play(4)));
        assert_eq!(app.game.current_board()[4], Cell::Taken(Player::X));
        assert!(app.logs.lines().last().unwrap().ends_with("X plays (2, 2)"));
    }

    #[test]
    fn test_dispatch_rejected_changes_nothing() {
        let mut app = create_test_app();
        GameHandler::new(&mut app).dispatch(Command::Play(4));
        let logged = app.logs.lines().len();

        assert!(!GameHandler::new(&mut app).dispatch(Command::Play(4)));
        assert!(!GameHandler::new(&mut app).dispatch(Command::JumpTo(7)));
        assert_eq!(app.game.history().len(), 2);
        assert_eq!(app.logs.lines().len(), logged);
    }

    #[test]
    fn test_win_is_announced() {
        let mut app = create_test_app();
        for i in [0, 4, 1, 8, 2] {
            GameHandler::new(&mut app).dispatch(Command::Play(i));
        }

        assert_eq!(app.game.status(), Status::Winner(Player::X));
        let last = app.logs.entries().pop().unwrap();
        assert!(last.text.ends_with("Winner: X"));
        assert_eq!(last.level, LogLevel::Outcome);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let mut app = create_test_app();
        let mut handler = GameHandler::new(&mut app);

        handler.move_cursor(-1, -1);
        handler.move_cursor(-1, -1);
        assert_eq!(app.cursor, 0);

        let mut handler = GameHandler::new(&mut app);
        for _ in 0..5 {
            handler.move_cursor(1, 1);
        }
        assert_eq!(app.cursor, 8);
    }

    #[test]
    fn test_resize_recenters_cursor() {
        let mut app = create_test_app();
        app.cursor = 8;

        GameHandler::new(&mut app).dispatch(Command::Resize(5));

        assert_eq!(app.cursor, 12);
        assert_eq!(app.size_input, "5");
        assert_eq!(app.game.current_board().len(), 25);
    }

    #[test]
    fn test_selection_follows_current_move() {
        let mut app = create_test_app();
        for i in [0, 4, 8] {
            GameHandler::new(&mut app).dispatch(Command::Play(i));
        }
        assert_eq!(app.selected_entry, 3);

        GameHandler::new(&mut app).toggle_sort();
        assert_eq!(app.selected_entry, 0);
    }

    #[test]
    fn test_jump_to_selected_in_descending_order() {
        let mut app = create_test_app();
        for i in [0, 4, 8] {
            GameHandler::new(&mut app).dispatch(Command::Play(i));
        }
        GameHandler::new(&mut app).toggle_sort();

        // descending: rows are moves 3, 2, 1, 0
        app.selected_entry = 2;
        assert!(GameHandler::new(&mut app).jump_to_selected());
        assert_eq!(app.game.current_move(), 1);
        assert_eq!(app.selected_entry, 2);
    }
}

#[cfg(test)]
mod input_handler_tests {
    use super::*;

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.current_board()[5], Cell::Taken(Player::X));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        assert!(press(&mut app, KeyCode::Esc));

        let mut app = create_test_app();
        let quit = InputHandler::new(&mut app)
            .handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(quit);
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Moves);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::SizeInput);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Board);
    }

    #[test]
    fn test_history_navigation_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Enter); // X at 4
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter); // O at 1

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.current_move(), 0);
        assert_eq!(app.game.history().len(), 3);
    }

    #[test]
    fn test_size_input_resizes_board() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Enter);
        app.focus = Focus::SizeInput;

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.board_size(), 7);
        assert_eq!(app.game.history().len(), 1);
        assert_eq!(app.game.current_move(), 0);
        assert_eq!(app.focus, Focus::Board);
    }

    #[test]
    fn test_size_input_rejects_oversized_board() {
        let mut app = create_test_app();
        app.focus = Focus::SizeInput;
        app.size_input = "999".to_string();

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.board_size(), 3);
        assert_eq!(app.game.history().len(), 1);
    }

    #[test]
    fn test_size_input_rejects_small_and_non_numeric() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Enter);
        app.focus = Focus::SizeInput;

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.board_size(), 3);
        assert_eq!(app.game.history().len(), 2);
        assert_eq!(app.focus, Focus::SizeInput);

        assert_eq!(
            app.logs.entries().last().map(|l| l.level),
            Some(LogLevel::Rejected)
        );

        // letters never reach the buffer
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.size_input, "2");
    }

    #[test]
    fn test_size_input_status() {
        assert_eq!(size_input_status(""), InputStatus::Incomplete);
        assert_eq!(size_input_status("12"), InputStatus::Valid(12));
        assert!(matches!(size_input_status("2"), InputStatus::Invalid(_)));
        assert!(matches!(size_input_status("-1"), InputStatus::Invalid(_)));
        assert_eq!(
            size_input_status("100"),
            InputStatus::Invalid("maximum size is 99")
        );
    }
}

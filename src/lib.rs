pub mod args;
pub mod board;
pub mod command;
pub mod game;
pub mod logging;
pub mod ui;
pub mod win;

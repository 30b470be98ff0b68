//! Handler modules for keyboard input and game commands.

mod game_handler;
mod input_handler;

pub use game_handler::GameHandler;
pub use input_handler::{InputHandler, size_input_status};

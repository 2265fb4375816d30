mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, Grid};
pub use bot_controller::search;
pub use game_state::{GameState, MoveError};
pub use types::{Cell, GRID_SIZE, Outcome, Player, Position, SymbolChoice, WinningLine};
pub use win_detector::{compute_outcome, winning_line};

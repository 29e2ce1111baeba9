//! Core Connect Four game logic: per-player occupancy boards, the merged
//! display board, and the turn-taking engine.

mod board;
mod engine;
mod player;

pub use board::{lowest_free_row, Cell, MergedBoard, Placement, PlayerBoard, COLS, CONNECT, ROWS};
pub use engine::{
    GameDisplay, GameEngine, GameOutcome, NullDisplay, Rejection, TurnEvent, TurnState,
};
pub use player::Player;

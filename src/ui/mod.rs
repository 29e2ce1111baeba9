//! Terminal UI for playing Connect Four with arrow keys, built on Ratatui.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;

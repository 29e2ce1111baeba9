//! # Connect Four
//!
//! Rules engine for two-player Connect Four on a 7×6 grid, with a
//! line-oriented console front-end and a Ratatui terminal UI.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: player boards, merged board, turn engine
//! - [`input`] — Parsing player input and the blocking input source trait
//! - [`console`] — Text rendering and stdin/stdout front-end
//! - [`ui`] — Terminal UI: interactive game view
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — Tracing subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;

//! # Connect Four
//!
//! Two-player Connect Four: a game-state engine plus a terminal UI built with
//! Ratatui and a headless replay mode.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: grid, players, win detection, turn state machine
//! - [`ui`] — Terminal UI: board view and key handling
//! - [`replay`] — Headless replay of a column list
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — Log file subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod replay;
pub mod ui;

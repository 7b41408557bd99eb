//! Core Connect Four game logic: the grid, players, win detection, and the
//! turn state machine that ties them together.

mod board;
mod engine;
mod player;
pub mod win;

pub use board::{Cell, GridState, HEIGHT, WIDTH};
pub use engine::{GameEngine, GameStatus, MoveError, Outcome};
pub use player::Player;
pub use win::WinScan;

//! Terminal UI: a ratatui front end that reads the engine's board and turns
//! key presses into column drops.

mod app;
pub mod game_view;

pub use app::App;

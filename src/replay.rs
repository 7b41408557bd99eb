//! Headless front end: play a comma-separated list of columns through a
//! fresh engine and describe what happened after each drop.

use crate::game::{GameEngine, Outcome, Player, WinScan};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("move {index}: '{token}' is not a column number")]
    BadColumn { index: usize, token: String },
}

/// Parse `"3, 3,4"` into columns. Negative numbers parse; the engine rejects
/// them like any other off-board column.
pub fn parse_moves(input: &str) -> Result<Vec<isize>, ReplayError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token.parse().map_err(|_| ReplayError::BadColumn {
                index: index + 1,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Play `moves` in order and return the engine plus one line per move.
/// Rejected moves are reported and skipped.
pub fn replay(moves: &[isize], win_scan: WinScan) -> (GameEngine, Vec<String>) {
    let mut engine = GameEngine::new().with_win_scan(win_scan);
    let mut log = Vec::with_capacity(moves.len());

    for (index, &col) in moves.iter().enumerate() {
        let mover = engine.current_player();
        let outcome = engine.drop_piece(col);
        log.push(describe(index + 1, col, mover, outcome));
    }
    (engine, log)
}

fn describe(index: usize, col: isize, mover: Player, outcome: Outcome) -> String {
    let result = match outcome {
        Outcome::Continue(next) => format!("{mover} dropped, {next} to move"),
        Outcome::Win(player) => format!("{player} won!"),
        Outcome::Tie => "This match is a tie".to_string(),
        Outcome::Rejected(reason) => format!("rejected ({reason})"),
    };
    format!("{index:>2}. column {col}: {result}")
}

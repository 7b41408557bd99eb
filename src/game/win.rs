//! Four-in-a-row detection.
//!
//! A line is four cells starting at an origin and stepping in one of four
//! directions (→, ↓, ↘, ↙). A line wins when all four cells are on the grid
//! and hold the same player. Candidates that leave the grid are skipped.

use super::{GridState, Player};

pub const LINE_LEN: usize = 4;

/// `(row, col)` coordinates of four cells in a row.
pub type Line = [(usize, usize); LINE_LEN];

/// `(d_row, d_col)` steps: horizontal, vertical, diagonal ↘, diagonal ↙.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// How the engine looks for a win after each drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinScan {
    /// Rescan every origin on the grid.
    #[default]
    FullBoard,
    /// Only lines passing through the piece that was just placed.
    LastMove,
}

impl WinScan {
    /// Find a winning line for `player` after a piece landed at `last`.
    pub fn find(self, grid: &GridState, player: Player, last: (usize, usize)) -> Option<Line> {
        match self {
            WinScan::FullBoard => find_line(grid, player),
            WinScan::LastMove => find_line_through(grid, last.0, last.1, player),
        }
    }
}

/// Scan every origin and direction for a line owned by `player`.
pub fn find_line(grid: &GridState, player: Player) -> Option<Line> {
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            for dir in DIRECTIONS {
                let line = candidate(grid, (row as isize, col as isize), dir);
                if let Some(line) = line.filter(|l| owned_by(grid, l, player)) {
                    return Some(line);
                }
            }
        }
    }
    None
}

pub fn has_four(grid: &GridState, player: Player) -> bool {
    find_line(grid, player).is_some()
}

/// Like [`find_line`] but only considers lines containing `(row, col)`.
pub fn find_line_through(grid: &GridState, row: usize, col: usize, player: Player) -> Option<Line> {
    for (dr, dc) in DIRECTIONS {
        // Slide the origin back so (row, col) takes each position in the line.
        for back in 0..LINE_LEN as isize {
            let origin = (row as isize - back * dr, col as isize - back * dc);
            let line = candidate(grid, origin, (dr, dc));
            if let Some(line) = line.filter(|l| owned_by(grid, l, player)) {
                return Some(line);
            }
        }
    }
    None
}

fn candidate(grid: &GridState, origin: (isize, isize), (dr, dc): (isize, isize)) -> Option<Line> {
    let mut line = [(0, 0); LINE_LEN];
    for (step, slot) in line.iter_mut().enumerate() {
        let r = origin.0 + step as isize * dr;
        let c = origin.1 + step as isize * dc;
        if !grid.contains(r, c) {
            return None;
        }
        *slot = (r as usize, c as usize);
    }
    Some(line)
}

fn owned_by(grid: &GridState, line: &Line, player: Player) -> bool {
    line.iter()
        .all(|&(r, c)| grid.cell_at(r, c).player() == Some(player))
}

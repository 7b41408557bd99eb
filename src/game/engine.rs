use tracing::{debug, info};

use super::win::{Line, WinScan};
use super::{Cell, GridState, Player, HEIGHT, WIDTH};

/// Why a drop was refused. A rejected drop never touches the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error("column is outside the board")]
    InvalidColumn,

    #[error("column is full")]
    ColumnFull,
}

/// Result of one `drop_piece` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Piece placed, game goes on with the given player to move.
    Continue(Player),
    Win(Player),
    Tie,
    Rejected(MoveError),
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

/// Turn sequencing and termination for one game. Owns its grid and is the
/// only thing that ever writes to it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameEngine {
    grid: GridState,
    current_player: Player,
    status: GameStatus,
    win_scan: WinScan,
    moves_played: usize,
    last_move: Option<(usize, usize)>,
    winning_line: Option<Line>,
}

impl GameEngine {
    /// Standard 7x6 game, player one to move
    pub fn new() -> Self {
        Self::with_dimensions(WIDTH, HEIGHT)
    }

    pub fn with_dimensions(width: usize, height: usize) -> Self {
        GameEngine {
            grid: GridState::new(width, height),
            current_player: Player::One,
            status: GameStatus::InProgress,
            win_scan: WinScan::default(),
            moves_played: 0,
            last_move: None,
            winning_line: None,
        }
    }

    /// Select the win detection strategy. Both strategies report the same
    /// outcomes; `LastMove` only looks at lines through the newest piece.
    pub fn with_win_scan(mut self, win_scan: WinScan) -> Self {
        self.win_scan = win_scan;
        self
    }

    pub fn win_scan(&self) -> WinScan {
        self.win_scan
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Read-only view of the board
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.grid.cell_at(row, col)
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// `(row, col)` of the most recently placed piece
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// The completed line once the game is won
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Columns that still accept a piece. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.grid.width())
            .filter(|&col| !self.grid.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `col`.
    ///
    /// Win is checked before tie, so a last piece that fills the board and
    /// completes a line is a win. The turn only passes on `Continue`.
    pub fn drop_piece(&mut self, col: isize) -> Outcome {
        let outcome = self.try_drop(col).unwrap_or_else(Outcome::Rejected);
        if let Outcome::Rejected(reason) = outcome {
            debug!(col, %reason, "drop rejected");
        }
        outcome
    }

    fn try_drop(&mut self, col: isize) -> Result<Outcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let col = usize::try_from(col)
            .ok()
            .filter(|&c| c < self.grid.width())
            .ok_or(MoveError::InvalidColumn)?;
        let row = self
            .grid
            .find_landing_row(col)
            .ok_or(MoveError::ColumnFull)?;

        let player = self.current_player;
        self.grid.place(row, col, player);
        self.moves_played += 1;
        self.last_move = Some((row, col));
        debug!(%player, row, col, moves = self.moves_played, "piece placed");

        if let Some(line) = self.win_scan.find(&self.grid, player, (row, col)) {
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
            info!(%player, moves = self.moves_played, "game won");
            return Ok(Outcome::Win(player));
        }

        if self.grid.is_full() {
            self.status = GameStatus::Tied;
            info!(moves = self.moves_played, "game tied");
            return Ok(Outcome::Tie);
        }

        self.current_player = player.other();
        Ok(Outcome::Continue(self.current_player))
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

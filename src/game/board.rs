use std::fmt;

use super::Player;

pub const WIDTH: usize = 7;
pub const HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The occupying player, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// The cell matrix of one game. Row 0 is the top, row `height - 1` the bottom.
///
/// Only [`GameEngine`](super::GameEngine) mutates a grid; everything else sees
/// it through a shared borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GridState {
    /// Create an empty grid. Both dimensions must be non-zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        GridState {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Lowest empty row in `col`, or `None` if the column is full.
    /// `col` must be in `[0, width)`.
    pub fn find_landing_row(&self, col: usize) -> Option<usize> {
        (0..self.height)
            .rev()
            .find(|&row| self.cell_at(row, col).is_empty())
    }

    /// Put `player` into an empty cell. `row` must come from
    /// [`find_landing_row`](Self::find_landing_row) on this unchanged grid.
    pub(crate) fn place(&mut self, row: usize, col: usize, player: Player) {
        let idx = self.index(row, col);
        debug_assert!(self.cells[idx].is_empty(), "cell ({row}, {col}) already occupied");
        self.cells[idx] = player.to_cell();
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        !self.cell_at(0, col).is_empty()
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Whether `(row, col)` is on the grid, for signed candidate coordinates.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        row * self.width + col
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.width {
                let symbol = match self.cell_at(row, col) {
                    Cell::Empty => '.',
                    Cell::Occupied(player) => player.symbol(),
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop(grid: &mut GridState, col: usize, player: Player) -> usize {
        let row = grid.find_landing_row(col).unwrap();
        grid.place(row, col, player);
        row
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = GridState::default();
        assert_eq!(grid.width(), WIDTH);
        assert_eq!(grid.height(), HEIGHT);
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                assert_eq!(grid.cell_at(row, col), Cell::Empty);
            }
        }
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_landing_row_stacks_from_bottom() {
        let mut grid = GridState::default();
        assert_eq!(grid.find_landing_row(3), Some(5));

        assert_eq!(drop(&mut grid, 3, Player::One), 5);
        assert_eq!(grid.cell_at(5, 3), Cell::Occupied(Player::One));

        assert_eq!(drop(&mut grid, 3, Player::Two), 4);
        assert_eq!(grid.cell_at(4, 3), Cell::Occupied(Player::Two));
        assert_eq!(grid.find_landing_row(3), Some(3));
    }

    #[test]
    fn test_find_landing_row_has_no_side_effects() {
        let grid = GridState::default();
        let before = grid.clone();
        grid.find_landing_row(0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_column_full() {
        let mut grid = GridState::default();
        for _ in 0..HEIGHT {
            drop(&mut grid, 0, Player::One);
        }
        assert!(grid.is_column_full(0));
        assert_eq!(grid.find_landing_row(0), None);
        assert!(!grid.is_column_full(1));
        assert!(grid.is_column_full(WIDTH));
    }

    #[test]
    fn test_full_grid() {
        let mut grid = GridState::default();
        for col in 0..WIDTH {
            for _ in 0..HEIGHT {
                assert!(!grid.is_full());
                drop(&mut grid, col, Player::Two);
            }
        }
        assert!(grid.is_full());
        assert_eq!(grid.occupied_count(), WIDTH * HEIGHT);
    }

    #[test]
    fn test_non_square_grid_full_check() {
        let mut grid = GridState::new(2, 3);
        for col in 0..2 {
            for _ in 0..3 {
                drop(&mut grid, col, Player::One);
            }
        }
        assert!(grid.is_full());
    }

    #[test]
    fn test_contains() {
        let grid = GridState::default();
        assert!(grid.contains(0, 0));
        assert!(grid.contains(5, 6));
        assert!(!grid.contains(-1, 0));
        assert!(!grid.contains(0, -1));
        assert!(!grid.contains(6, 0));
        assert!(!grid.contains(0, 7));
    }

    #[test]
    fn test_display() {
        let mut grid = GridState::new(3, 2);
        drop(&mut grid, 0, Player::One);
        drop(&mut grid, 0, Player::Two);
        drop(&mut grid, 2, Player::One);
        assert_eq!(grid.to_string(), "O..\nX.X");
    }

    #[test]
    #[should_panic]
    fn test_cell_at_out_of_bounds_panics() {
        GridState::default().cell_at(HEIGHT, 0);
    }
}

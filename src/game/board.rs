use serde::{Deserialize, Serialize};

use super::player::Token;
use crate::error::BoardError;

pub const HEIGHT: usize = 6;
pub const LENGTH: usize = 7;

/// Number of cells walked in each direction from the anchor when looking for a win.
const REACH: usize = 3;

/// Step vectors `(row_delta, col_delta)` for the four win axes:
/// vertical, horizontal, rising to the right, rising to the left.
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[serde(rename = " ")]
    Empty,
    #[serde(rename = "O")]
    Circle,
    #[serde(rename = "@")]
    At,
}

impl Cell {
    /// Single-character form used in save files and the text grid.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Circle => 'O',
            Cell::At => '@',
        }
    }
}

/// A Connect Four grid. Row 0 is the bottom row, column 0 the leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    cells: [[Cell; LENGTH]; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; LENGTH]; HEIGHT],
        }
    }

    /// Build a board from rows listed bottom-to-top.
    ///
    /// Fails unless there are exactly `HEIGHT` rows of exactly `LENGTH` cells.
    /// Token layout is taken as given; gravity is only enforced by
    /// [`Board::place_token`].
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        if rows.len() != HEIGHT {
            return Err(BoardError::InvalidDimensions {
                rows: rows.len(),
                cols: rows.first().map_or(0, Vec::len),
            });
        }
        if let Some(bad) = rows.iter().find(|row| row.len() != LENGTH) {
            return Err(BoardError::InvalidDimensions {
                rows: HEIGHT,
                cols: bad.len(),
            });
        }

        let mut board = Board::new();
        for (target, source) in board.cells.iter_mut().zip(rows) {
            target.copy_from_slice(&source);
        }
        Ok(board)
    }

    /// Borrow the grid, bottom row first.
    pub fn rows(&self) -> &[[Cell; LENGTH]; HEIGHT] {
        &self.cells
    }

    /// Copy the grid out as nested vectors, bottom row first.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.iter().map(|row| row.to_vec()).collect()
    }

    /// Get the cell at a position. Coordinates off the grid read as empty.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(Cell::Empty)
    }

    /// Signed lookup used by the win scan; `None` off the grid.
    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.cells.get(row)?.get(col).copied()
    }

    pub fn cell_is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Cell::Empty
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= LENGTH {
            return true;
        }
        self.cells[HEIGHT - 1][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// Drop a token into a column, returns the row where it landed
    pub fn place_token(&mut self, token: Token, col: usize) -> Result<usize, BoardError> {
        if col >= LENGTH {
            return Err(BoardError::InvalidColumn(col));
        }

        if self.is_column_full(col) {
            return Err(BoardError::ColumnFull(col));
        }

        let row = (0..HEIGHT)
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(BoardError::ColumnFull(col))?;
        self.cells[row][col] = token.to_cell();
        Ok(row)
    }

    /// Check whether `token` makes four in a row through `(row, col)`.
    ///
    /// Only the cells within three steps of the anchor are inspected, on each
    /// of the four axes, so the cost does not depend on how full the board is.
    pub fn four_in_a_row(&self, row: usize, col: usize, token: Token) -> bool {
        let (Ok(row), Ok(col)) = (isize::try_from(row), isize::try_from(col)) else {
            return false;
        };
        let cell = token.to_cell();

        AXES.iter().any(|&(dr, dc)| {
            self.run_length(row, col, dr, dc, cell) + self.run_length(row, col, -dr, -dc, cell)
                >= REACH
        })
    }

    /// Count consecutive `cell`s stepping away from the anchor, up to `REACH`.
    fn run_length(&self, row: isize, col: isize, dr: isize, dc: isize, cell: Cell) -> usize {
        (1..=REACH as isize)
            .map(|step| self.cell_at(row + dr * step, col + dc * step))
            .take_while(|&found| found == Some(cell))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

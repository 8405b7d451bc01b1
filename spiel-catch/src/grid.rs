//! Board geometry and cell classification.
use spiel_core::SpielError;
use std::fmt;

/// Content of a cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Nothing in the cell.
    Empty,

    /// The falling ball.
    Ball,

    /// The paddle, always on the last row.
    Paddle,
}

impl CellState {
    /// Glyph used when rendering the board.
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Ball => 'o',
            Self::Paddle => 'x',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Dimensions of the board, both at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    columns: usize,
}

impl Board {
    /// Creates a board of the given size.
    ///
    /// Fails with [`SpielError::InvalidConfiguration`] if a dimension is zero.
    pub fn new(rows: usize, columns: usize) -> Result<Self, SpielError> {
        if rows == 0 || columns == 0 {
            return Err(SpielError::InvalidConfiguration(format!(
                "board must have at least one row and one column, got {}x{}",
                rows, columns
            )));
        }
        Ok(Self { rows, columns })
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The row of the paddle. The episode ends when the ball reaches it.
    pub fn last_row(&self) -> usize {
        self.rows - 1
    }

    /// The column the paddle starts in.
    pub fn center_column(&self) -> usize {
        self.columns / 2
    }

    /// The number of cells.
    pub fn num_cells(&self) -> usize {
        self.rows * self.columns
    }

    /// Returns `true` if the cell lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    /// Row-major index of a cell.
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(self.contains(row, col));
        row * self.columns + col
    }

    /// Moves a column by `delta`, staying on the board.
    pub fn shift_column(&self, col: usize, delta: isize) -> usize {
        let shifted = col as isize + delta;
        shifted.max(0).min(self.columns as isize - 1) as usize
    }
}

/// Ball and paddle of an episode after the ball has been dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Positions {
    /// Row of the ball, counted from the top.
    pub ball_row: usize,

    /// Column of the ball. Fixed for the whole episode.
    pub ball_col: usize,

    /// Column of the paddle.
    pub paddle_col: usize,
}

/// Classifies a cell. Every cell is empty before the ball is dropped.
///
/// The paddle wins over the ball when both share the cell. The cell must lie on
/// the board.
pub fn cell_at(board: &Board, positions: Option<Positions>, row: usize, col: usize) -> CellState {
    debug_assert!(board.contains(row, col));
    match positions {
        Some(p) if row == board.last_row() && col == p.paddle_col => CellState::Paddle,
        Some(p) if row == p.ball_row && col == p.ball_col => CellState::Ball,
        _ => CellState::Empty,
    }
}

/// Renders the board, one line per row.
pub fn render(board: &Board, positions: Option<Positions>) -> String {
    let mut s = String::with_capacity((board.columns() + 1) * board.rows());
    for row in 0..board.rows() {
        for col in 0..board.columns() {
            s.push(cell_at(board, positions, row, col).glyph());
        }
        s.push('\n');
    }
    s
}

use crate::error::{EngineError, Result};
use crate::{HEIGHT, WIDTH};

/// The contents of a single board cell
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The same cell with the two players exchanged
    pub fn swapped(self) -> Self {
        match self {
            Cell::PlayerOne => Cell::PlayerTwo,
            Cell::PlayerTwo => Cell::PlayerOne,
            Cell::Empty => Cell::Empty,
        }
    }
}

/// One of the two sides of a game
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    /// The first mover, usually the human
    PlayerOne,
    /// The second mover, the side the engine searches for
    PlayerTwo,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::PlayerOne => Cell::PlayerOne,
            Player::PlayerTwo => Cell::PlayerTwo,
        }
    }

    /// 1 or 2, as shown to players
    pub fn number(self) -> usize {
        match self {
            Player::PlayerOne => 1,
            Player::PlayerTwo => 2,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A Connect 4 grid
///
/// Rows are indexed from the top (0) to the bottom (`HEIGHT - 1`). Pieces
/// always rest on the bottom row or on another piece, so a column is full
/// exactly when its top cell is occupied.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Builds a position from a string of 1-indexed column digits, players
    /// alternating from `PlayerOne`
    ///
    /// Fails on a full column or on any move played after the game was won.
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::PlayerOne;

        for (position, column_char) in moves.as_ref().chars().enumerate() {
            let column = parse_column(position, column_char)?;
            if crate::terminal::is_terminal(&board) {
                return Err(EngineError::GameOver);
            }
            board.apply_move(column, player)?;
            player = player.other();
        }
        Ok(board)
    }

    /// Builds a board from explicit rows, top row first
    ///
    /// The rows are taken as given; gravity is not checked.
    pub fn from_cells(cells: [[Cell; WIDTH]; HEIGHT]) -> Self {
        Self { cells }
    }

    /// # Panics
    ///
    /// Panics if `row` or `column` is off the board.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    pub fn is_legal_move(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    /// Checks a raw column index supplied from outside the engine
    pub fn validate_column(&self, column: i64) -> Result<usize> {
        if column < 0 || column >= WIDTH as i64 {
            return Err(EngineError::ColumnOutOfRange(column));
        }
        let column = column as usize;
        if !self.is_legal_move(column) {
            return Err(EngineError::ColumnFull(column));
        }
        Ok(column)
    }

    /// Drops a piece for `player` into `column`, returning the row it landed on
    ///
    /// The board is untouched when the column is out of range or full.
    pub fn apply_move(&mut self, column: usize, player: Player) -> Result<usize> {
        if column >= WIDTH {
            return Err(EngineError::ColumnOutOfRange(column as i64));
        }
        for row in (0..HEIGHT).rev() {
            if self.cells[row][column].is_empty() {
                self.cells[row][column] = player.cell();
                return Ok(row);
            }
        }
        Err(EngineError::ColumnFull(column))
    }

    /// Removes the top piece of `column`, undoing the last `apply_move` there
    ///
    /// Returns the row that was cleared, or `None` for an empty or
    /// out-of-range column.
    pub fn undo_move(&mut self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        let row = (0..HEIGHT).find(|&row| !self.cells[row][column].is_empty())?;
        self.cells[row][column] = Cell::Empty;
        Some(row)
    }

    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    /// Legal columns, listed in the given preference order
    pub fn legal_moves<'a>(&'a self, order: &'a [usize]) -> impl Iterator<Item = usize> + 'a {
        order.iter().copied().filter(move |&column| self.is_legal_move(column))
    }

    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// The player to move, assuming `PlayerOne` started
    pub fn to_move(&self) -> Player {
        if self.count(Cell::PlayerOne) > self.count(Cell::PlayerTwo) {
            Player::PlayerTwo
        } else {
            Player::PlayerOne
        }
    }

    /// The same position with the two players' pieces exchanged
    pub fn swapped(&self) -> Self {
        let mut cells = self.cells;
        for cell in cells.iter_mut().flatten() {
            *cell = cell.swapped();
        }
        Self { cells }
    }
}

/// Reads one character of a move string as a 0-indexed column
///
/// Move strings hold 1-indexed column digits, so only `1` to `WIDTH` are
/// accepted.
pub(crate) fn parse_column(position: usize, character: char) -> Result<usize> {
    match character.to_digit(10).map(|c| c as usize) {
        Some(column @ 1..=WIDTH) => Ok(column - 1),
        _ => Err(EngineError::ParseMove {
            position,
            character,
        }),
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

//! Win and draw detection
//!
//! Every length-4 line on the board is listed once in [`WINDOWS`]. Win
//! detection, terminal tests in the search and the evaluator all walk this
//! one table, so they can never disagree about what counts as a line.

use crate::board::{Board, Player};
use crate::{HEIGHT, WIDTH};

/// The number of cells in a winning line
pub const LINE: usize = 4;

/// A length-4 line of cells as `(row, column)` pairs
pub type Window = [(usize, usize); LINE];

/// The number of length-4 lines on the board
pub const NUM_WINDOWS: usize = HEIGHT * (WIDTH - LINE + 1)
    + (HEIGHT - LINE + 1) * WIDTH
    + 2 * (HEIGHT - LINE + 1) * (WIDTH - LINE + 1);

/// All windows in scan order: horizontal, vertical, diagonal down-right, then
/// diagonal up-right starting from the bottom band of rows
pub const WINDOWS: [Window; NUM_WINDOWS] = windows();

const fn windows() -> [Window; NUM_WINDOWS] {
    let mut windows = [[(0, 0); LINE]; NUM_WINDOWS];
    let mut n = 0;

    // horizontal
    let mut row = 0;
    while row < HEIGHT {
        let mut column = 0;
        while column + LINE <= WIDTH {
            let mut i = 0;
            while i < LINE {
                windows[n][i] = (row, column + i);
                i += 1;
            }
            n += 1;
            column += 1;
        }
        row += 1;
    }

    // vertical
    row = 0;
    while row + LINE <= HEIGHT {
        let mut column = 0;
        while column < WIDTH {
            let mut i = 0;
            while i < LINE {
                windows[n][i] = (row + i, column);
                i += 1;
            }
            n += 1;
            column += 1;
        }
        row += 1;
    }

    // diagonal, row increasing with column
    row = 0;
    while row + LINE <= HEIGHT {
        let mut column = 0;
        while column + LINE <= WIDTH {
            let mut i = 0;
            while i < LINE {
                windows[n][i] = (row + i, column + i);
                i += 1;
            }
            n += 1;
            column += 1;
        }
        row += 1;
    }

    // diagonal, row decreasing as column increases
    row = LINE - 1;
    while row < HEIGHT {
        let mut column = 0;
        while column + LINE <= WIDTH {
            let mut i = 0;
            while i < LINE {
                windows[n][i] = (row - i, column + i);
                i += 1;
            }
            n += 1;
            column += 1;
        }
        row += 1;
    }

    windows
}

/// A completed line of four
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Win {
    pub player: Player,
    pub cells: Window,
}

/// Returns the first line of four held by `player`, in [`WINDOWS`] order
pub fn find_win(board: &Board, player: Player) -> Option<Win> {
    let cell = player.cell();
    WINDOWS
        .iter()
        .find(|window| window.iter().all(|&(row, column)| board.cell(row, column) == cell))
        .map(|&cells| Win { player, cells })
}

/// True if either player has a line of four or the board is full
pub fn is_terminal(board: &Board) -> bool {
    find_win(board, Player::PlayerOne).is_some()
        || find_win(board, Player::PlayerTwo).is_some()
        || board.is_full()
}

/// A full board is only a draw once both players have been checked for a win
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
        && find_win(board, Player::PlayerOne).is_none()
        && find_win(board, Player::PlayerTwo).is_none()
}

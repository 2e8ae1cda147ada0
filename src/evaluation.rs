//! Static evaluation of a position

use crate::board::{Board, Cell, Player};
use crate::terminal::{Window, LINE, WINDOWS};
use crate::HEIGHT;

/// The column that earns the centre bonus
pub const CENTRE_COLUMN: usize = 3;

/// Scores awarded by the evaluator
///
/// "Own" weights apply to the player being scored for, "opponent" weights to
/// the other side.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct EvalWeights {
    pub centre: i32,
    pub opponent_centre: i32,
    pub four: i32,
    /// three pieces with the empty cell at an end of the window
    pub open_three: i32,
    /// three pieces with the empty cell inside the window
    pub closed_three: i32,
    pub two: i32,
    pub opponent_four: i32,
    pub opponent_three: i32,
    pub opponent_two: i32,
}

impl EvalWeights {
    /// Weights that treat both sides alike, so that exchanging the pieces
    /// exactly negates the score
    pub const fn symmetric() -> Self {
        Self {
            centre: 5,
            opponent_centre: -5,
            four: 100,
            open_three: 12,
            closed_three: 12,
            two: 4,
            opponent_four: -100,
            opponent_three: -12,
            opponent_two: -4,
        }
    }

    fn window(&self, window: &Window, board: &Board, own: Cell) -> i32 {
        let mut own_pieces = 0;
        let mut opponent_pieces = 0;
        let mut empty = 0;
        for &(row, column) in window.iter() {
            match board.cell(row, column) {
                Cell::Empty => empty += 1,
                c if c == own => own_pieces += 1,
                _ => opponent_pieces += 1,
            }
        }

        // a window holding pieces of both sides is worth nothing
        match (own_pieces, opponent_pieces, empty) {
            (4, 0, 0) => self.four,
            (3, 0, 1) => {
                let (first, last) = (window[0], window[LINE - 1]);
                if board.cell(first.0, first.1).is_empty() || board.cell(last.0, last.1).is_empty() {
                    self.open_three
                } else {
                    self.closed_three
                }
            }
            (2, 0, 2) => self.two,
            (0, 4, 0) => self.opponent_four,
            (0, 3, 1) => self.opponent_three,
            (0, 2, 2) => self.opponent_two,
            _ => 0,
        }
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            centre: 5,
            opponent_centre: 0,
            four: 100,
            open_three: 12,
            closed_three: 10,
            two: 4,
            opponent_four: -100,
            opponent_three: -15,
            opponent_two: -5,
        }
    }
}

/// Scores `board` for `player` with the given weights
pub fn evaluate_with(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    let own = player.cell();
    let opponent = player.other().cell();

    let mut score = 0;
    for row in 0..HEIGHT {
        let cell = board.cell(row, CENTRE_COLUMN);
        if cell == own {
            score += weights.centre;
        } else if cell == opponent {
            score += weights.opponent_centre;
        }
    }

    score
        + WINDOWS
            .iter()
            .map(|window| weights.window(window, board, own))
            .sum::<i32>()
}

/// Scores `board` for `player` with the default weights
pub fn evaluate_for(board: &Board, player: Player) -> i32 {
    evaluate_with(board, player, &EvalWeights::default())
}

/// Scores `board` from the computer's (`PlayerTwo`'s) side
pub fn evaluate(board: &Board) -> i32 {
    evaluate_for(board, Player::PlayerTwo)
}

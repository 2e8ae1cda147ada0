//! Minimax search with alpha-beta pruning

use crate::board::{Board, Player};
use crate::evaluation::evaluate;
use crate::search::{SearchContext, Strategy, INFINITY};
use crate::terminal::is_terminal;

/// Alternates a maximising `PlayerTwo` and a minimising `PlayerOne`,
/// scoring every leaf with the static evaluator
#[derive(Copy, Clone, Debug, Default)]
pub struct Minimax;

impl Minimax {
    /// Performs game tree search
    ///
    /// Returns the score of `board` from `PlayerTwo`'s side. The board is
    /// restored before returning.
    pub fn minimax(
        &self,
        context: &mut SearchContext,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        context.node_count += 1;

        if depth == 0 || is_terminal(board) {
            return evaluate(board);
        }

        let (player, mut best) = if maximizing {
            (Player::PlayerTwo, -INFINITY)
        } else {
            (Player::PlayerOne, INFINITY)
        };

        let order = context.order;
        for &column in order.columns() {
            // full columns are skipped
            if board.apply_move(column, player).is_err() {
                continue;
            }
            let score = self.minimax(context, board, depth - 1, alpha, beta, !maximizing);
            board.undo_move(column);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            // the other player will never allow this line
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

impl Strategy for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn score_reply(&self, context: &mut SearchContext, board: &mut Board, depth: usize) -> i32 {
        self.minimax(context, board, depth, -INFINITY, INFINITY, false)
    }
}

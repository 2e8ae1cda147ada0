//! Negascout (principal variation search)
//!
//! The first move at each node is searched with the full window. Later moves
//! are first probed with a null window around alpha, and only re-searched when
//! the probe shows they could beat the current best line.

use crate::board::{Board, Player};
use crate::evaluation::evaluate;
use crate::search::{SearchContext, Strategy, INFINITY};
use crate::terminal::is_terminal;

#[derive(Copy, Clone, Debug, Default)]
pub struct Negascout;

impl Negascout {
    /// Returns the score of `board` from the side of `player`, who is to move
    ///
    /// The caller negates the result. The board is restored before returning.
    pub fn negascout(
        &self,
        context: &mut SearchContext,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        beta: i32,
        player: Player,
    ) -> i32 {
        context.node_count += 1;

        if depth == 0 || is_terminal(board) {
            let score = evaluate(board);
            return match player {
                Player::PlayerTwo => score,
                Player::PlayerOne => -score,
            };
        }

        let next_player = player.other();
        let mut max_score = -INFINITY;
        let mut searched = 0;

        let order = context.order;
        for &column in order.columns() {
            if board.apply_move(column, player).is_err() {
                continue;
            }

            let score = if searched == 0 {
                -self.negascout(context, board, depth - 1, -beta, -alpha, next_player)
            } else {
                let scout =
                    -self.negascout(context, board, depth - 1, -alpha - 1, -alpha, next_player);
                if alpha < scout && scout < beta {
                    -self.negascout(context, board, depth - 1, -beta, -scout, next_player)
                } else {
                    scout
                }
            };
            board.undo_move(column);
            searched += 1;

            max_score = max_score.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        if searched == 0 {
            return 0;
        }
        max_score
    }
}

impl Strategy for Negascout {
    fn name(&self) -> &'static str {
        "negascout"
    }

    fn score_reply(&self, context: &mut SearchContext, board: &mut Board, depth: usize) -> i32 {
        -self.negascout(context, board, depth, -INFINITY, INFINITY, Player::PlayerOne)
    }
}

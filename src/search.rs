//! Machinery shared by the search strategies

use log::{debug, trace};
use rayon::prelude::*;

use crate::board::{Board, Player};
use crate::error::{EngineError, Result};
use crate::WIDTH;

/// A bound no evaluation can reach; negating it cannot overflow
pub const INFINITY: i32 = i32::MAX;

/// Returns the columns ordered from the middle outwards, left before right,
/// as the middle columns are often better moves
pub const fn move_order() -> [usize; WIDTH] {
    let mut move_order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        move_order[i] = (WIDTH / 2) + (1 - i % 2) * (i / 2) - (i % 2) * (i / 2 + 1);
        i += 1;
    }
    move_order
}

/// The order in which candidate columns are tried at every node
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MoveOrder([usize; WIDTH]);

impl MoveOrder {
    /// Accepts any permutation of the board columns
    pub fn new(order: [usize; WIDTH]) -> Result<Self> {
        let mut seen = [false; WIDTH];
        for &column in order.iter() {
            if column >= WIDTH || seen[column] {
                return Err(EngineError::InvalidMoveOrder(order.to_vec()));
            }
            seen[column] = true;
        }
        Ok(Self(order))
    }

    pub fn columns(&self) -> &[usize] {
        &self.0
    }
}

impl Default for MoveOrder {
    /// Centre first: `[3, 2, 4, 1, 5, 0, 6]`
    fn default() -> Self {
        Self(move_order())
    }
}

/// The column picked by a search, with its score for `PlayerTwo`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchOutcome {
    pub column: usize,
    pub score: i32,
    /// The number of positions visited (for diagnostics only)
    pub node_count: usize,
}

/// Per-search state threaded through the recursion
pub struct SearchContext {
    pub order: MoveOrder,
    pub node_count: usize,
}

impl SearchContext {
    pub fn new(order: MoveOrder) -> Self {
        Self {
            order,
            node_count: 0,
        }
    }
}

/// A fixed-depth game tree search
///
/// The root is shared by every strategy: each legal column is played for
/// `PlayerTwo` and the strategy scores the resulting position. Each root child
/// gets the full (-INFINITY, INFINITY) window, so the children are independent
/// and can be searched in any order or in parallel without changing the result.
pub trait Strategy: Sync {
    fn name(&self) -> &'static str;

    /// Scores `board`, with `PlayerOne` to move, from `PlayerTwo`'s side
    ///
    /// `board` must be left as it was found.
    fn score_reply(&self, context: &mut SearchContext, board: &mut Board, depth: usize) -> i32;
}

/// Searches every root move and keeps the first one with the highest score
///
/// Returns `None` when there is no legal move. `board` is never modified.
pub fn search_root<S: Strategy>(
    strategy: &S,
    board: &Board,
    depth: usize,
    order: MoveOrder,
    parallel: bool,
) -> Option<SearchOutcome> {
    let search_child = |column: usize| {
        let mut context = SearchContext::new(order);
        let mut next = *board;
        next.apply_move(column, Player::PlayerTwo).ok()?;
        let score = strategy.score_reply(&mut context, &mut next, depth.saturating_sub(1));
        trace!("{}: column {} scored {}", strategy.name(), column, score);
        Some((column, score, context.node_count))
    };

    let candidates: Vec<usize> = board.legal_moves(order.columns()).collect();
    let scored: Vec<(usize, i32, usize)> = if parallel {
        candidates.par_iter().filter_map(|&c| search_child(c)).collect()
    } else {
        candidates.iter().filter_map(|&c| search_child(c)).collect()
    };

    let mut best: Option<SearchOutcome> = None;
    let mut node_count = 1;
    for (column, score, nodes) in scored {
        node_count += nodes;
        match best {
            Some(ref outcome) if score <= outcome.score => {}
            _ => {
                best = Some(SearchOutcome {
                    column,
                    score,
                    node_count: 0,
                })
            }
        }
    }

    let outcome = best.map(|outcome| SearchOutcome {
        node_count,
        ..outcome
    });
    if let Some(outcome) = outcome {
        debug!(
            "{} at depth {} chose column {} (score {}, {} nodes)",
            strategy.name(),
            depth,
            outcome.column,
            outcome.score,
            outcome.node_count
        );
    }
    outcome
}

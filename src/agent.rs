//! The engine's entry point for a game-management layer
//!
//! An [`Agent`] binds a search algorithm and a depth into a single "choose a
//! column" call. Configuration is string keyed and an unknown key is always an
//! error, never a silent default.
//!
//! ```
//! use connect4_engine::{agent::Agent, board::Board};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let agent = Agent::from_labels("negascout", "medium")?;
//! assert_eq!(agent.choose_column(&Board::new()), Some(3));
//!# Ok(())
//!# }
//! ```

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Player};
use crate::error::{EngineError, Result};
use crate::minimax::Minimax;
use crate::negascout::Negascout;
use crate::search::{search_root, MoveOrder, SearchOutcome};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Expert,
}

impl Difficulty {
    /// Search depth in plies
    pub fn depth(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 4,
            Difficulty::Expert => 7,
        }
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(label: &str) -> Result<Self> {
        match label {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(EngineError::InvalidDifficulty(label.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Expert => "expert",
        })
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Algorithm {
    /// Minimax with alpha-beta pruning
    Minimax,
    /// Principal variation search
    Negascout,
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(label: &str) -> Result<Self> {
        match label {
            "minimax" => Ok(Algorithm::Minimax),
            "negascout" => Ok(Algorithm::Negascout),
            _ => Err(EngineError::InvalidAlgorithm(label.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Minimax => "minimax",
            Algorithm::Negascout => "negascout",
        })
    }
}

/// Everything a search needs besides the board
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    depth: usize,
    pub move_order: MoveOrder,
    /// Search the root's columns on the rayon thread pool
    pub parallel: bool,
}

impl SearchConfig {
    pub fn new(algorithm: Algorithm, difficulty: Difficulty) -> Self {
        Self {
            algorithm,
            depth: difficulty.depth(),
            move_order: MoveOrder::default(),
            parallel: false,
        }
    }

    /// Parses the algorithm and difficulty labels, failing on either unknown label
    pub fn from_labels(algorithm: &str, difficulty: &str) -> Result<Self> {
        Ok(Self::new(algorithm.parse()?, difficulty.parse()?))
    }

    /// Overrides the difficulty's depth; a depth of 0 is rejected
    pub fn with_depth(mut self, depth: usize) -> Result<Self> {
        if depth == 0 {
            return Err(EngineError::InvalidDepth(depth));
        }
        self.depth = depth;
        Ok(self)
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_move_order(mut self, move_order: MoveOrder) -> Self {
        self.move_order = move_order;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// A computer player
#[derive(Copy, Clone, Debug)]
pub struct Agent {
    config: SearchConfig,
}

impl Agent {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn from_labels(algorithm: &str, difficulty: &str) -> Result<Self> {
        Ok(Self::new(SearchConfig::from_labels(algorithm, difficulty)?))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The column `PlayerTwo` should play, or `None` if the board is full
    pub fn choose_column(&self, board: &Board) -> Option<usize> {
        self.best_move(board).map(|outcome| outcome.column)
    }

    /// Searches for `PlayerTwo` without touching any state, returning the
    /// column, its score and the search effort
    pub fn best_move(&self, board: &Board) -> Option<SearchOutcome> {
        let SearchConfig {
            algorithm,
            depth,
            move_order,
            parallel,
        } = self.config;
        match algorithm {
            Algorithm::Minimax => search_root(&Minimax, board, depth, move_order, parallel),
            Algorithm::Negascout => search_root(&Negascout, board, depth, move_order, parallel),
        }
    }

    /// The column `player` should play
    ///
    /// The evaluator always scores for `PlayerTwo`, so a search for
    /// `PlayerOne` runs on the board with the pieces exchanged.
    pub fn choose_column_as(&self, board: &Board, player: Player) -> Option<usize> {
        self.best_move_as(board, player).map(|outcome| outcome.column)
    }

    /// Like [`best_move`](Agent::best_move), for either side; the score is
    /// from `player`'s side
    pub fn best_move_as(&self, board: &Board, player: Player) -> Option<SearchOutcome> {
        match player {
            Player::PlayerTwo => self.best_move(board),
            Player::PlayerOne => self.best_move(&board.swapped()),
        }
    }
}

//! A computer opponent for the board game 'Connect 4'
//!
//! This agent picks a column with a fixed-depth game tree search, either
//! minimax with alpha-beta pruning or negascout, scoring the leaves with a
//! heuristic evaluation of every line of four cells.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{agent::Agent, board::Board};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the engine always moves for player two
//! let board = Board::from_moves("4")?;
//! let agent = Agent::from_labels("minimax", "easy")?;
//!
//! assert_eq!(agent.choose_column(&board), Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod terminal;

pub mod evaluation;

pub mod search;

pub mod minimax;

pub mod negascout;

pub mod agent;

pub mod game;


pub use agent::{Agent, Algorithm, Difficulty, SearchConfig};
pub use board::{Board, Cell, Player};
pub use error::EngineError;
pub use game::{Game, GameStatus};
pub use search::{MoveOrder, SearchOutcome};
pub use terminal::{find_win, Win};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// the window scan and the evaluator's centre column assume a board that can hold a line of four
const_assert!(WIDTH >= 4 && HEIGHT >= 4);
const_assert!(WIDTH % 2 == 1);

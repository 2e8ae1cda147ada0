//! The authoritative record of a game in progress

use log::info;

use crate::board::{parse_column, Board, Player};
use crate::error::{EngineError, Result};
use crate::terminal::{find_win, Win};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameStatus {
    InProgress,
    Won(Win),
    Draw,
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A committed move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MoveRecord {
    pub player: Player,
    pub column: usize,
    pub row: usize,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<MoveRecord>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::PlayerOne,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Replays a string of 1-indexed column digits
    ///
    /// Replay stops early if the game finishes; any digits after that are an
    /// error, as is an unparseable character or a full column.
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut game = Self::new();
        for (position, column_char) in moves.as_ref().chars().enumerate() {
            let column = parse_column(position, column_char)?;
            game.play(column as i64)?;
        }
        Ok(game)
    }

    /// Plays `column` for the current player and settles the game
    ///
    /// The column is checked before the board is touched. A win is looked for
    /// before a draw, so a winning move that fills the board still wins.
    pub fn play(&mut self, column: i64) -> Result<GameStatus> {
        if self.status.is_finished() {
            return Err(EngineError::GameOver);
        }
        let column = self.board.validate_column(column)?;
        let player = self.current_player;
        let row = self.board.apply_move(column, player)?;
        self.history.push(MoveRecord {
            player,
            column,
            row,
        });

        if let Some(win) = find_win(&self.board, player) {
            info!("{} wins with {:?}", player, win.cells);
            self.status = GameStatus::Won(win);
        } else if self.board.is_full() {
            info!("game drawn after {} moves", self.history.len());
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.other();
        }
        Ok(self.status)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(win) => Some(win.player),
            _ => None,
        }
    }

    /// The four cells of the winning line, empty unless the game was won
    pub fn winning_cells(&self) -> &[(usize, usize)] {
        match &self.status {
            GameStatus::Won(win) => &win.cells,
            _ => &[],
        }
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

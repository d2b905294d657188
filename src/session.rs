//! Game session: turn order, outcome latch and move validation
//!
//! A [`GameSession`] owns the board and all mutable game state. Front ends
//! call [`GameSession::attempt_move`] for every move request and read the
//! board back through [`GameSession::cell_state`].

use tracing::{debug, info, instrument};

use crate::board::{Board, Pos, Stone};
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError};
use crate::rules::{check_win, forbidden_rule, winning_line};

/// Game outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    BlackWins,
    WhiteWins,
}

impl Outcome {
    /// Outcome where `stone` has won
    fn won_by(stone: Stone) -> Self {
        match stone {
            Stone::Black => Outcome::BlackWins,
            Stone::White => Outcome::WhiteWins,
            Stone::Empty => Outcome::InProgress,
        }
    }

    pub fn winner(self) -> Option<Stone> {
        match self {
            Outcome::InProgress => None,
            Outcome::BlackWins => Some(Stone::Black),
            Outcome::WhiteWins => Some(Stone::White),
        }
    }
}

/// An accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub pos: Pos,
    pub stone: Stone,
    /// Outcome after this move
    pub outcome: Outcome,
}

/// A single game from the first move to a win
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    current_turn: Stone,
    outcome: Outcome,
    last_move: Option<Pos>,
    move_count: usize,
    winning_line: Option<Vec<Pos>>,
}

impl GameSession {
    /// Start a new game with Black to move.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`GameConfig::validate`]; no session
    /// exists for an invalid configuration.
    #[instrument(err)]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config))
    }

    /// A fresh game with the same configuration
    pub fn restart(&self) -> Self {
        Self::start(self.config)
    }

    fn start(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.rows, config.cols),
            config,
            current_turn: Stone::Black,
            outcome: Outcome::InProgress,
            last_move: None,
            move_count: 0,
            winning_line: None,
        }
    }

    /// Try to place the current side's stone at `(row, col)`.
    ///
    /// Checks run in a fixed order: game over, placement (bounds then
    /// emptiness), then forbidden-move rules for the side to move. A rejected
    /// move leaves the session untouched. An accepted move flips the turn and
    /// is checked for a win.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] describing why the move was rejected.
    #[instrument(skip(self), fields(turn = %self.current_turn))]
    pub fn attempt_move(&mut self, row: isize, col: isize) -> Result<Placement, MoveError> {
        let result = self.try_move(row, col);
        if let Err(err) = &result {
            debug!(%err, "move rejected");
        }
        result
    }

    fn try_move(&mut self, row: isize, col: isize) -> Result<Placement, MoveError> {
        if self.outcome != Outcome::InProgress {
            return Err(MoveError::GameOver);
        }

        if !self.board.in_bounds(row, col) {
            return Err(MoveError::OutOfBounds {
                row,
                col,
                rows: self.board.rows(),
                cols: self.board.cols(),
            });
        }
        let pos = Pos::new(row as usize, col as usize);
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }

        let stone = self.current_turn;
        if let Some(rule) =
            forbidden_rule(&self.board, pos, stone, self.config.num_win, self.config.rules)
        {
            return Err(MoveError::Forbidden { rule });
        }

        self.board.place_stone(pos, stone)?;
        self.current_turn = stone.opponent();
        self.last_move = Some(pos);
        self.move_count += 1;

        if check_win(&self.board, pos, self.config.num_win) {
            self.outcome = Outcome::won_by(stone);
            self.winning_line = winning_line(&self.board, pos, self.config.num_win);
            info!(%stone, row = pos.row, col = pos.col, moves = self.move_count, "game won");
        }

        Ok(Placement {
            pos,
            stone,
            outcome: self.outcome,
        })
    }

    /// Stone at `(row, col)`; `Empty` for cells off the board
    pub fn cell_state(&self, row: isize, col: isize) -> Stone {
        self.board.color_at(row, col)
    }

    /// Whether `current_turn` could legally play at `pos` right now
    pub fn is_valid_move(&self, pos: Pos) -> bool {
        self.outcome == Outcome::InProgress
            && crate::rules::is_valid_move(
                &self.board,
                pos,
                self.current_turn,
                self.config.num_win,
                self.config.rules,
            )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Side to move next
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    pub fn winner(&self) -> Option<Stone> {
        self.outcome.winner()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Number of accepted moves
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Cells of the line that ended the game
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::start(GameConfig::default())
    }
}

//! Error types for moves and game configuration

use crate::rules::ForbiddenRule;

/// Reasons a move can be rejected.
///
/// A rejected move never changes the session: the board, the side to move
/// and the outcome stay exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },

    #[error("({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("forbidden move: {rule}")]
    Forbidden { rule: ForbiddenRule },

    #[error("the game is already over")]
    GameOver,

    #[error("cannot place an empty stone")]
    EmptyStone,
}

impl MoveError {
    /// True for rejections caused by the target square itself
    /// (off the board or already taken).
    pub fn is_illegal_placement(&self) -> bool {
        matches!(
            self,
            MoveError::OutOfBounds { .. } | MoveError::CellOccupied { .. }
        )
    }
}

/// Errors that can occur when building a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be an integer, got '{value}'")]
    NotAnInteger { name: &'static str, value: String },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: i64 },

    #[error("expected at most three integers, got {0} arguments")]
    TooManyArguments(usize),

    #[error("a {rows}x{cols} board is too large, each side is limited to {max}")]
    BoardTooLarge { rows: usize, cols: usize, max: usize },
}

//! Gomoku rules engine with forbidden-move restrictions
//!
//! A five-in-a-row rules engine for rectangular boards of any size:
//! - Configurable board size (default 19x19)
//! - Configurable win length (default 5), exact length only: overlines never win
//! - Double-four forbidden for the side to move
//! - Double-three forbidden for the side to move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, positions and directions
//! - [`rules`]: Line scanning, win detection, forbidden moves
//! - [`session`]: Turn order and outcome for one game
//! - [`config`]: Board size, win length and rule switches
//! - [`error`]: Move and configuration errors
//! - [`ui`]: egui front end driving a session
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameConfig, GameSession, Outcome, Stone};
//!
//! let mut session = GameSession::new(GameConfig::default()).unwrap();
//!
//! let placed = session.attempt_move(9, 9).unwrap();
//! assert_eq!(placed.stone, Stone::Black);
//! assert_eq!(placed.outcome, Outcome::InProgress);
//!
//! // Same cell again is rejected and the turn stays with White
//! assert!(session.attempt_move(9, 9).is_err());
//! assert_eq!(session.current_turn(), Stone::White);
//! ```
//!
//! # Move Validation Order
//!
//! 1. Game already decided: `GameOver`
//! 2. Off the board or occupied: `OutOfBounds` / `CellOccupied`
//! 3. Double-four, then double-three: `Forbidden`
//! 4. Place, flip the turn, check the placed stone for a win

pub mod board;
pub mod config;
pub mod error;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{GameConfig, DEFAULT_WIN_LENGTH, MAX_BOARD_SIZE};
pub use error::{ConfigError, MoveError};
pub use rules::{ForbiddenRule, RuleSet};
pub use session::{GameSession, Outcome, Placement};

//! Game configuration: board size, win length and active rules

use crate::board::DEFAULT_BOARD_SIZE;
use crate::error::ConfigError;
use crate::rules::RuleSet;

/// Default number of stones in a row needed to win
pub const DEFAULT_WIN_LENGTH: usize = 5;

/// Largest accepted board side
pub const MAX_BOARD_SIZE: usize = 1000;

/// Settings fixed for the lifetime of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub num_win: usize,
    pub rules: RuleSet,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_BOARD_SIZE,
            cols: DEFAULT_BOARD_SIZE,
            num_win: DEFAULT_WIN_LENGTH,
            rules: RuleSet::default(),
        }
    }
}

impl GameConfig {
    /// Build a configuration with both forbidden-move rules enabled.
    pub fn new(rows: usize, cols: usize, num_win: usize) -> Result<Self, ConfigError> {
        let config = Self {
            rows,
            cols,
            num_win,
            rules: RuleSet::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Parse launch arguments.
    ///
    /// - no arguments: 19x19 board, five to win
    /// - `WIN`: win length only
    /// - `ROWS COLS`: board size only
    /// - `WIN ROWS COLS`: both
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        match args {
            [] => {}
            [win] => {
                config.num_win = parse_positive("win length", win.as_ref())?;
            }
            [rows, cols] => {
                config.rows = parse_positive("rows", rows.as_ref())?;
                config.cols = parse_positive("columns", cols.as_ref())?;
            }
            [win, rows, cols] => {
                config.num_win = parse_positive("win length", win.as_ref())?;
                config.rows = parse_positive("rows", rows.as_ref())?;
                config.cols = parse_positive("columns", cols.as_ref())?;
            }
            _ => return Err(ConfigError::TooManyArguments(args.len())),
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("rows", self.rows),
            ("columns", self.cols),
            ("win length", self.num_win),
        ] {
            if value == 0 {
                return Err(ConfigError::NonPositive { name, value: 0 });
            }
        }
        if self.rows > MAX_BOARD_SIZE || self.cols > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                rows: self.rows,
                cols: self.cols,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(())
    }
}

fn parse_positive(name: &'static str, value: &str) -> Result<usize, ConfigError> {
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotAnInteger {
            name,
            value: value.to_string(),
        })?;
    if parsed <= 0 {
        return Err(ConfigError::NonPositive {
            name,
            value: parsed,
        });
    }
    usize::try_from(parsed).map_err(|_| ConfigError::NotAnInteger {
        name,
        value: value.to_string(),
    })
}

//! Game rules for Gomoku with forbidden-move restrictions
//!
//! This module implements the rule set including:
//! - Directional line scanning (run lengths, open ends)
//! - Win condition (exactly `num_win` in a row, overlines excluded)
//! - Forbidden moves (double-four, double-three)

pub mod forbidden;
pub mod line;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{
    forbidden_rule, is_valid_move, violates_double_four, violates_double_three, ForbiddenRule,
    RuleSet,
};
pub use line::{is_open_end, line_length, run_length};
pub use win::{check_win, winning_line};

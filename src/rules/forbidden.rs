//! Double-four and double-three forbidden move rules
//!
//! Both rules look at the eight neighbors of the candidate cell on the board
//! as it is *before* the stone goes down. A neighbor holding the mover's color
//! is a threat when the run starting at it, walking away from the candidate,
//! already has the threshold length:
//!
//! - double-four: two or more neighbors with runs of `num_win - 1`
//! - double-three: two or more neighbors with runs of `num_win - 2`, and two
//!   or more occupied neighbors (either color) whose run ends on an empty cell
//!
//! Both rules apply to whichever side is about to move.

use crate::board::{Board, Direction, Pos, Stone};

use super::line::{is_open_end, run_length};

/// Which restriction a move breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForbiddenRule {
    DoubleFour,
    DoubleThree,
}

impl std::fmt::Display for ForbiddenRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForbiddenRule::DoubleFour => write!(f, "double-four"),
            ForbiddenRule::DoubleThree => write!(f, "double-three"),
        }
    }
}

/// Which forbidden-move rules are in force
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub double_four: bool,
    pub double_three: bool,
}

impl RuleSet {
    /// Plain five-in-a-row, no restrictions
    pub const FREESTYLE: RuleSet = RuleSet {
        double_four: false,
        double_three: false,
    };
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            double_four: true,
            double_three: true,
        }
    }
}

/// Count neighbors of `pos` holding `stone` whose run away from `pos` is
/// exactly `threshold` long.
///
/// A zero threshold never matches since every run counts its own origin.
fn count_runs_at(board: &Board, pos: Pos, stone: Stone, threshold: usize) -> usize {
    Direction::ALL
        .iter()
        .filter_map(|&dir| board.step(pos, dir, 1).map(|n| (n, dir)))
        .filter(|&(n, dir)| board.get(n) == Some(stone) && run_length(board, n, dir) == threshold)
        .count()
}

/// Count occupied neighbors of `pos` whose run away from `pos` ends open.
fn count_open_neighbors(board: &Board, pos: Pos) -> usize {
    Direction::ALL
        .iter()
        .filter_map(|&dir| board.step(pos, dir, 1).map(|n| (n, dir)))
        .filter(|&(n, dir)| !board.is_empty(n) && is_open_end(board, n, dir))
        .count()
}

/// Check if placing `stone` at `pos` would be a forbidden double-four
pub fn violates_double_four(board: &Board, pos: Pos, stone: Stone, num_win: usize) -> bool {
    let Some(threshold) = num_win.checked_sub(1) else {
        return false;
    };
    count_runs_at(board, pos, stone, threshold) >= 2
}

/// Check if placing `stone` at `pos` would be a forbidden double-three
///
/// Both counts must independently reach two.
pub fn violates_double_three(board: &Board, pos: Pos, stone: Stone, num_win: usize) -> bool {
    let Some(threshold) = num_win.checked_sub(2) else {
        return false;
    };
    if count_runs_at(board, pos, stone, threshold) < 2 {
        return false;
    }
    count_open_neighbors(board, pos) >= 2
}

/// The first enabled rule the move breaks, double-four checked first.
pub fn forbidden_rule(
    board: &Board,
    pos: Pos,
    stone: Stone,
    num_win: usize,
    rules: RuleSet,
) -> Option<ForbiddenRule> {
    if rules.double_four && violates_double_four(board, pos, stone, num_win) {
        tracing::trace!(row = pos.row, col = pos.col, %stone, "double-four");
        return Some(ForbiddenRule::DoubleFour);
    }
    if rules.double_three && violates_double_three(board, pos, stone, num_win) {
        tracing::trace!(row = pos.row, col = pos.col, %stone, "double-three");
        return Some(ForbiddenRule::DoubleThree);
    }
    None
}

/// Check if a move is valid (on the board, empty and not forbidden)
pub fn is_valid_move(board: &Board, pos: Pos, stone: Stone, num_win: usize, rules: RuleSet) -> bool {
    if pos.row >= board.rows() || pos.col >= board.cols() {
        return false;
    }

    // Must be empty
    if !board.is_empty(pos) {
        return false;
    }

    forbidden_rule(board, pos, stone, num_win, rules).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: impl IntoIterator<Item = (usize, usize)>, stone: Stone) {
        for (r, c) in cells {
            board.place_stone(Pos::new(r, c), stone).unwrap();
        }
    }

    /// Black fours ending next to (9, 9) from the left and from above.
    fn double_four_board() -> Board {
        let mut board = Board::new(19, 19);
        place_all(&mut board, (5..9).map(|c| (9, c)), Stone::Black);
        place_all(&mut board, (5..9).map(|r| (r, 9)), Stone::Black);
        board
    }

    /// Black threes ending next to (9, 9) from the left and from above.
    fn double_three_board() -> Board {
        let mut board = Board::new(19, 19);
        place_all(&mut board, (6..9).map(|c| (9, c)), Stone::Black);
        place_all(&mut board, (6..9).map(|r| (r, 9)), Stone::Black);
        board
    }

    #[test]
    fn test_not_forbidden_empty_board() {
        let board = Board::new(19, 19);
        assert!(!violates_double_four(&board, Pos::new(9, 9), Stone::Black, 5));
        assert!(!violates_double_three(&board, Pos::new(9, 9), Stone::Black, 5));
        assert!(is_valid_move(&board, Pos::new(9, 9), Stone::Black, 5, RuleSet::default()));
    }

    #[test]
    fn test_invalid_move_occupied() {
        let mut board = Board::new(19, 19);
        place_all(&mut board, [(9, 9)], Stone::Black);
        assert!(!is_valid_move(&board, Pos::new(9, 9), Stone::White, 5, RuleSet::default()));
    }

    #[test]
    fn test_invalid_move_off_board() {
        let board = Board::new(9, 9);
        assert!(!is_valid_move(&board, Pos::new(9, 0), Stone::Black, 5, RuleSet::default()));
    }

    #[test]
    fn test_double_four_cross() {
        let board = double_four_board();
        assert!(violates_double_four(&board, Pos::new(9, 9), Stone::Black, 5));
        assert_eq!(
            forbidden_rule(&board, Pos::new(9, 9), Stone::Black, 5, RuleSet::default()),
            Some(ForbiddenRule::DoubleFour)
        );
    }

    #[test]
    fn test_double_four_only_counts_mover() {
        let board = double_four_board();
        // The fours are Black's; White may play the same cell
        assert!(!violates_double_four(&board, Pos::new(9, 9), Stone::White, 5));
        assert!(is_valid_move(&board, Pos::new(9, 9), Stone::White, 5, RuleSet::default()));
    }

    #[test]
    fn test_single_four_allowed() {
        let mut board = Board::new(19, 19);
        place_all(&mut board, (5..9).map(|c| (9, c)), Stone::Black);
        assert!(!violates_double_four(&board, Pos::new(9, 9), Stone::Black, 5));
    }

    #[test]
    fn test_double_four_diagonals() {
        let mut board = Board::new(19, 19);
        // Up-left diagonal and down-left diagonal, both ending next to (9, 9)
        place_all(&mut board, (1..5).map(|i| (9 - i, 9 - i)), Stone::White);
        place_all(&mut board, (1..5).map(|i| (9 + i, 9 - i)), Stone::White);
        assert!(violates_double_four(&board, Pos::new(9, 9), Stone::White, 5));
    }

    #[test]
    fn test_five_long_run_is_not_a_four() {
        let mut board = Board::new(19, 19);
        place_all(&mut board, (4..9).map(|c| (9, c)), Stone::Black);
        place_all(&mut board, (4..9).map(|r| (r, 9)), Stone::Black);
        assert!(!violates_double_four(&board, Pos::new(9, 9), Stone::Black, 5));
    }

    #[test]
    fn test_double_three_two_open_threes() {
        let board = double_three_board();
        assert!(violates_double_three(&board, Pos::new(9, 9), Stone::Black, 5));
        assert_eq!(
            forbidden_rule(&board, Pos::new(9, 9), Stone::Black, 5, RuleSet::default()),
            Some(ForbiddenRule::DoubleThree)
        );
    }

    #[test]
    fn test_open_three_plus_closed_three_allowed() {
        let mut board = double_three_board();
        // Close the far end of the horizontal three
        place_all(&mut board, [(9, 5)], Stone::White);
        assert!(!violates_double_three(&board, Pos::new(9, 9), Stone::Black, 5));
        assert!(is_valid_move(&board, Pos::new(9, 9), Stone::Black, 5, RuleSet::default()));
    }

    #[test]
    fn test_three_closed_by_edge_allowed() {
        let mut board = Board::new(19, 19);
        // Vertical three touching the top edge: rows 0..=2 above (3, 3)
        place_all(&mut board, (0..3).map(|r| (r, 3)), Stone::Black);
        // Horizontal three touching the left edge
        place_all(&mut board, [(3, 0), (3, 1), (3, 2)], Stone::Black);
        assert!(!violates_double_three(&board, Pos::new(3, 3), Stone::Black, 5));
    }

    #[test]
    fn test_single_open_three_allowed() {
        let mut board = Board::new(19, 19);
        place_all(&mut board, (6..9).map(|c| (9, c)), Stone::Black);
        assert!(!violates_double_three(&board, Pos::new(9, 9), Stone::Black, 5));
    }

    #[test]
    fn test_open_count_includes_opponent_stones() {
        let mut board = double_three_board();
        // Close both threes, then add two open White neighbors
        place_all(&mut board, [(9, 5), (5, 9)], Stone::White);
        assert!(!violates_double_three(&board, Pos::new(9, 9), Stone::Black, 5));

        place_all(&mut board, [(10, 10), (10, 8)], Stone::White);
        assert!(violates_double_three(&board, Pos::new(9, 9), Stone::Black, 5));
    }

    #[test]
    fn test_disabled_rules() {
        let four = double_four_board();
        let three = double_three_board();
        let no_four = RuleSet {
            double_four: false,
            double_three: true,
        };
        let no_three = RuleSet {
            double_four: true,
            double_three: false,
        };
        assert_eq!(forbidden_rule(&four, Pos::new(9, 9), Stone::Black, 5, no_four), None);
        assert_eq!(forbidden_rule(&three, Pos::new(9, 9), Stone::Black, 5, no_three), None);
        assert!(is_valid_move(&four, Pos::new(9, 9), Stone::Black, 5, RuleSet::FREESTYLE));
        assert!(is_valid_move(&three, Pos::new(9, 9), Stone::Black, 5, RuleSet::FREESTYLE));
    }

    #[test]
    fn test_tiny_win_length_never_forbidden() {
        let mut board = Board::new(5, 5);
        place_all(&mut board, [(1, 2), (2, 1), (2, 3), (3, 2)], Stone::Black);
        for num_win in 0..=2 {
            assert!(!violates_double_three(&board, Pos::new(2, 2), Stone::Black, num_win));
        }
        assert!(!violates_double_four(&board, Pos::new(2, 2), Stone::Black, 0));
        // num_win = 2: every single-stone neighbor is a "four"
        assert!(violates_double_four(&board, Pos::new(2, 2), Stone::Black, 2));
    }

    #[test]
    fn test_edge_candidate_bounds_guarded() {
        let mut board = Board::new(19, 19);
        place_all(&mut board, (1..5).map(|c| (0, c)), Stone::Black);
        place_all(&mut board, (1..5).map(|r| (r, 0)), Stone::Black);
        assert!(violates_double_four(&board, Pos::new(0, 0), Stone::Black, 5));
    }
}

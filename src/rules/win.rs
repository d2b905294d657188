//! Win condition checking
//!
//! Win condition: exactly `num_win` stones in a row through the placed stone.
//! Overlines never win, and an overline on any axis through the stone cancels
//! an exact line on another axis.

use crate::board::{Board, Direction, Pos};

use super::line::{line_length, run_length};

/// Check whether the stone at `pos` completes a winning line.
///
/// All four axes are measured before deciding: any axis longer than
/// `num_win` means no win, otherwise any axis of exactly `num_win` wins.
pub fn check_win(board: &Board, pos: Pos, num_win: usize) -> bool {
    if !matches!(board.get(pos), Some(stone) if !stone.is_empty()) {
        return false;
    }

    let lengths = Direction::AXES.map(|axis| line_length(board, pos, axis));

    if lengths.iter().any(|&len| len > num_win) {
        return false;
    }
    lengths.iter().any(|&len| len == num_win)
}

/// Find the positions of the winning line through `pos`
///
/// Returns the `num_win` cells ordered from one end of the line to the
/// other, or `None` when `check_win` does not hold.
pub fn winning_line(board: &Board, pos: Pos, num_win: usize) -> Option<Vec<Pos>> {
    if !check_win(board, pos, num_win) {
        return None;
    }

    for (back, forward) in Direction::AXES {
        if line_length(board, pos, (back, forward)) != num_win {
            continue;
        }
        // Start from the far end behind `pos` and walk forward
        let behind = run_length(board, pos, back) - 1;
        let start = board.step(pos, back, behind)?;
        return (0..num_win)
            .map(|i| board.step(start, forward, i))
            .collect();
    }

    None
}

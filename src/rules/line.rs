//! Directional line scanning
//!
//! Every rule in this crate is built from two questions asked about a stone:
//! how many same-colored stones run from it in one direction, and whether the
//! cell just past that run is still free.

use crate::board::{Board, Direction, Pos};

/// Length of the contiguous same-colored run starting at `pos` and walking
/// along `dir`, counting `pos` itself.
///
/// One-sided: combine opposite directions with [`line_length`] to measure a
/// full line. `pos` is expected to hold a stone; an empty or off-board
/// origin yields 1.
pub fn run_length(board: &Board, pos: Pos, dir: Direction) -> usize {
    let stone = match board.get(pos) {
        Some(stone) if !stone.is_empty() => stone,
        _ => return 1,
    };
    let mut count = 1;
    while let Some(next) = board.step(pos, dir, count) {
        if board.get(next) != Some(stone) {
            break;
        }
        count += 1;
    }
    count
}

/// Whether the run starting at `pos` along `dir` ends on an empty cell.
///
/// With `n = run_length(..)`, the end is open when the cell `n` steps away is
/// on the board and empty. Board edges and any stone close the end.
pub fn is_open_end(board: &Board, pos: Pos, dir: Direction) -> bool {
    let n = run_length(board, pos, dir);
    match board.step(pos, dir, n) {
        Some(end) => board.is_empty(end),
        None => false,
    }
}

/// Full length of the line through `pos` on the given axis.
#[inline]
pub fn line_length(board: &Board, pos: Pos, axis: (Direction, Direction)) -> usize {
    run_length(board, pos, axis.0) + run_length(board, pos, axis.1) - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    fn board_with(stones: &[(usize, usize, Stone)]) -> Board {
        let mut board = Board::new(19, 19);
        for &(r, c, s) in stones {
            board.place_stone(Pos::new(r, c), s).unwrap();
        }
        board
    }

    #[test]
    fn test_isolated_stone_runs_one() {
        let board = board_with(&[(9, 9, Stone::Black)]);
        for dir in Direction::ALL {
            assert_eq!(run_length(&board, Pos::new(9, 9), dir), 1, "{:?}", dir);
        }
    }

    #[test]
    fn test_run_stops_at_other_color() {
        // B B B W
        let board = board_with(&[
            (9, 5, Stone::Black),
            (9, 6, Stone::Black),
            (9, 7, Stone::Black),
            (9, 8, Stone::White),
        ]);
        assert_eq!(run_length(&board, Pos::new(9, 5), Direction::Right), 3);
        assert_eq!(run_length(&board, Pos::new(9, 7), Direction::Left), 3);
        assert_eq!(run_length(&board, Pos::new(9, 6), Direction::Right), 2);
        assert_eq!(run_length(&board, Pos::new(9, 8), Direction::Left), 1);
    }

    #[test]
    fn test_run_is_one_sided() {
        let board = board_with(&[
            (5, 5, Stone::White),
            (6, 6, Stone::White),
            (7, 7, Stone::White),
        ]);
        assert_eq!(run_length(&board, Pos::new(6, 6), Direction::DownRight), 2);
        assert_eq!(run_length(&board, Pos::new(6, 6), Direction::UpLeft), 2);
        assert_eq!(
            line_length(&board, Pos::new(6, 6), (Direction::UpLeft, Direction::DownRight)),
            3
        );
    }

    #[test]
    fn test_run_stops_at_edge() {
        let board = board_with(&[(0, 0, Stone::Black), (0, 1, Stone::Black)]);
        assert_eq!(run_length(&board, Pos::new(0, 1), Direction::Left), 2);
        assert_eq!(run_length(&board, Pos::new(0, 0), Direction::Up), 1);
        assert_eq!(run_length(&board, Pos::new(0, 0), Direction::UpLeft), 1);
    }

    #[test]
    fn test_open_end_empty_cell() {
        // _ B B _
        let board = board_with(&[(9, 6, Stone::Black), (9, 7, Stone::Black)]);
        assert!(is_open_end(&board, Pos::new(9, 7), Direction::Left));
        assert!(is_open_end(&board, Pos::new(9, 6), Direction::Right));
    }

    #[test]
    fn test_closed_by_stone() {
        // W B B _
        let board = board_with(&[
            (9, 5, Stone::White),
            (9, 6, Stone::Black),
            (9, 7, Stone::Black),
        ]);
        assert!(!is_open_end(&board, Pos::new(9, 7), Direction::Left));
        assert!(is_open_end(&board, Pos::new(9, 6), Direction::Right));
    }

    #[test]
    fn test_closed_by_edge() {
        let board = board_with(&[(0, 3, Stone::Black), (1, 3, Stone::Black)]);
        assert!(!is_open_end(&board, Pos::new(1, 3), Direction::Up));
        assert!(is_open_end(&board, Pos::new(0, 3), Direction::Down));
    }

    #[test]
    fn test_line_spans_whole_row() {
        let mut board = Board::new(1, 5);
        for c in 0..5 {
            board.place_stone(Pos::new(0, c), Stone::Black).unwrap();
        }
        assert_eq!(
            line_length(&board, Pos::new(0, 2), (Direction::Left, Direction::Right)),
            5
        );
        assert!(!is_open_end(&board, Pos::new(0, 2), Direction::Right));
    }

    #[test]
    fn test_off_board_origin() {
        let board = board_with(&[(1, 6, Stone::Black), (1, 7, Stone::Black)]);
        assert_eq!(run_length(&board, Pos::new(0, 25), Direction::Right), 1);
        assert!(!is_open_end(&board, Pos::new(0, 25), Direction::Right));
    }
}

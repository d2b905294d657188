//! Board structure with configurable dimensions

use super::{Direction, Pos, Stone};
use crate::error::MoveError;

/// Game board
///
/// Cells are stored row-major. Dimensions are fixed at construction and a
/// cell only ever goes from `Empty` to a color, never back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty `rows` x `cols` board.
    ///
    /// Both dimensions are expected to be positive; `GameConfig` enforces it.
    pub fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self {
            rows,
            cols,
            cells: vec![Stone::Empty; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check signed coordinates against the board dimensions
    #[inline]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Stone at `pos`, `None` when it is off the board
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// Stone at signed coordinates, `Empty` when off the board
    #[inline]
    pub fn color_at(&self, row: isize, col: isize) -> Stone {
        if self.in_bounds(row, col) {
            self.cells[self.index(Pos::new(row as usize, col as usize))]
        } else {
            Stone::Empty
        }
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Stone::Empty)
    }

    /// True when both cells hold a stone of the same color
    #[inline]
    pub fn same_color(&self, a: Pos, b: Pos) -> bool {
        match self.get(a) {
            Some(stone) if !stone.is_empty() => self.get(b) == Some(stone),
            _ => false,
        }
    }

    /// The cell `distance` steps from `pos` along `dir`, if it is on the board
    #[inline]
    pub fn step(&self, pos: Pos, dir: Direction, distance: usize) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let r = pos.row as isize + dr * distance as isize;
        let c = pos.col as isize + dc * distance as isize;
        if self.in_bounds(r, c) {
            Some(Pos::new(r as usize, c as usize))
        } else {
            None
        }
    }

    /// Place a stone on an empty cell
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) -> Result<(), MoveError> {
        if stone == Stone::Empty {
            return Err(MoveError::EmptyStone);
        }
        if pos.row >= self.rows || pos.col >= self.cols {
            return Err(MoveError::OutOfBounds {
                row: pos.row as isize,
                col: pos.col as isize,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        let idx = self.index(pos);
        self.cells[idx] = stone;
        Ok(())
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| !s.is_empty()).count()
    }

    /// Check if every cell is taken
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|s| !s.is_empty())
    }

    /// Iterate over every position, row by row
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Pos::new(row, col)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::DEFAULT_BOARD_SIZE, super::DEFAULT_BOARD_SIZE)
    }
}

//! Board rendering for the Gomoku GUI

use crate::{GameSession, Pos, Stone};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    rows: usize,
    cols: usize,
}

impl BoardView {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            rows,
            cols,
        }
    }

    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, session: &GameSession) -> Option<Pos> {
        let available = ui.available_size() - Vec2::splat(20.0);

        // Fit the grid into the available space, keeping cells square
        let spans = Vec2::new(
            (self.cols.max(2) - 1) as f32,
            (self.rows.max(2) - 1) as f32,
        );
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / spans.x)
            .min((available.y - 2.0 * BOARD_MARGIN) / spans.y)
            .max(8.0);

        let size = Vec2::new(
            2.0 * BOARD_MARGIN + (self.cols - 1) as f32 * self.cell_size,
            2.0 * BOARD_MARGIN + (self.rows - 1) as f32 * self.cell_size,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, session);

        if let Some(pos) = session.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = session.winning_line() {
            self.draw_winning_line(&painter, line);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if !session.is_over() {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    if session.board().is_empty(board_pos) {
                        let is_valid = session.is_valid_move(board_pos);
                        self.draw_hover_preview(&painter, board_pos, session.current_turn(), is_valid);
                    }

                    // Rejected clicks still go through so the app can report why
                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let width = (self.cols - 1) as f32 * self.cell_size;
        let height = (self.rows - 1) as f32 * self.cell_size;

        for col in 0..self.cols {
            let x = BOARD_MARGIN + col as f32 * self.cell_size;
            let start = self.board_rect.min + Vec2::new(x, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(x, BOARD_MARGIN + height);
            painter.line_segment([start, end], stroke);
        }

        for row in 0..self.rows {
            let y = BOARD_MARGIN + row as f32 * self.cell_size;
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, y);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + width, y);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (hoshi)
    fn draw_star_points(&self, painter: &Painter) {
        for pos in star_points(self.rows, self.cols) {
            let center = self.board_to_screen(pos);
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.cols {
            let label = column_label(col, self.cols);
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;

            let top = Pos2::new(x, self.board_rect.min.y + 12.0);
            painter.text(top, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);

            let bottom = Pos2::new(x, self.board_rect.max.y - 12.0);
            painter.text(bottom, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }

        // Row labels count up from the bottom edge
        for row in 0..self.rows {
            let num = self.rows - row;
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;

            let left = Pos2::new(self.board_rect.min.x + 12.0, y);
            painter.text(left, egui::Align2::CENTER_CENTER, num.to_string(), font.clone(), GRID_LINE);

            let right = Pos2::new(self.board_rect.max.x - 12.0, y);
            painter.text(right, egui::Align2::CENTER_CENTER, num.to_string(), font.clone(), GRID_LINE);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, session: &GameSession) {
        for pos in session.board().positions() {
            if let Some(stone) = session.board().get(pos).filter(|s| !s.is_empty()) {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);

                // Inner shadow for depth
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in line {
            let center = self.board_to_screen(*pos);
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Stone::Empty => return,
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let col = x.floor() as i64;
        let row = y.floor() as i64;

        if col >= 0 && (col as usize) < self.cols && row >= 0 && (row as usize) < self.rows {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Star points for a board: the center, plus corner and edge points when
/// the board is large enough to hold them.
fn star_points(rows: usize, cols: usize) -> Vec<Pos> {
    let center = Pos::new(rows / 2, cols / 2);
    let min_side = 2 * STAR_POINT_OFFSET + 3;
    if rows < min_side || cols < min_side {
        return vec![center];
    }

    let row_marks = [STAR_POINT_OFFSET, rows / 2, rows - 1 - STAR_POINT_OFFSET];
    let col_marks = [STAR_POINT_OFFSET, cols / 2, cols - 1 - STAR_POINT_OFFSET];
    row_marks
        .iter()
        .flat_map(|&r| col_marks.iter().map(move |&c| Pos::new(r, c)))
        .collect()
}

/// Column label: letters while they last, numbers on very wide boards
fn column_label(col: usize, cols: usize) -> String {
    if cols <= 26 {
        char::from(b'A' + col as u8).to_string()
    } else {
        (col + 1).to_string()
    }
}

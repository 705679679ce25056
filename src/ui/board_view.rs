//! Board rendering for the Ataxx GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::rules::generate_moves;
use crate::{Board, Move, Piece, Square, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        selected: Option<Square>,
        last_move: Option<Move>,
        last_captures: &[Square],
        accept_input: bool,
    ) -> Option<Square> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        let hovered = if accept_input {
            response.hover_pos().and_then(|p| self.screen_to_board(p))
        } else {
            None
        };

        self.draw_cells(&painter, hovered);
        self.draw_coordinates(&painter);

        if let Some(from) = selected {
            self.draw_targets(&painter, board, from);
        }

        self.draw_pieces(&painter, board);

        for &sq in last_captures {
            let radius = self.cell_size * PIECE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(self.board_to_screen(sq), radius, Stroke::new(2.0, CAPTURE_RING));
        }

        if let Some(to) = last_move.and_then(|m| m.destination()) {
            painter.circle_filled(self.board_to_screen(to), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if let Some(from) = selected {
            let radius = self.cell_size * PIECE_RADIUS_RATIO + 4.0;
            painter.circle_stroke(self.board_to_screen(from), radius, Stroke::new(3.0, SELECTED));
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    fn cell_rect(&self, sq: Square) -> Rect {
        let center = self.board_to_screen(sq);
        Rect::from_center_size(center, Vec2::splat(self.cell_size - CELL_GAP))
    }

    /// Draw the 7x7 cell grid
    fn draw_cells(&self, painter: &Painter, hovered: Option<Square>) {
        for sq in Square::all() {
            let fill = if hovered == Some(sq) { CELL_HOVER } else { CELL_BG };
            painter.rect_filled(self.cell_rect(sq), CornerRadius::same(3), fill);
        }

        let inner = self.board_rect.shrink(BOARD_MARGIN);
        painter.rect_stroke(inner, CornerRadius::same(2), Stroke::new(1.0, GRID_LINE), egui::StrokeKind::Outside);
    }

    /// Draw coordinate labels (a-g, 1-7)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);

        for col in 0..BOARD_SIZE as u8 {
            let letter = (b'a' + col) as char;
            let x = self.board_to_screen(Square::new(col, 0)).x;
            let top = Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            let bottom = Pos2::new(x, self.board_rect.max.y - BOARD_MARGIN * 0.5);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), COORD_TEXT);
            painter.text(bottom, egui::Align2::CENTER_CENTER, letter, font.clone(), COORD_TEXT);
        }

        for row in 0..BOARD_SIZE as u8 {
            let y = self.board_to_screen(Square::new(0, row)).y;
            let label = format!("{}", row + 1);
            let left = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, y);
            let right = Pos2::new(self.board_rect.max.x - BOARD_MARGIN * 0.5, y);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), COORD_TEXT);
            painter.text(right, egui::Align2::CENTER_CENTER, &label, font.clone(), COORD_TEXT);
        }
    }

    /// Shade the cells the selected piece can reach
    fn draw_targets(&self, painter: &Painter, board: &Board, from: Square) {
        for mv in generate_moves(board, board.side_to_move()) {
            if mv.source() != Some(from) {
                continue;
            }
            let Some(to) = mv.destination() else { continue };
            let color = if mv.is_clone() { clone_target() } else { jump_target() };
            painter.rect_filled(self.cell_rect(to), CornerRadius::same(3), color);
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for sq in Square::all() {
            match board.content(sq) {
                Piece::Red => self.draw_piece(painter, sq, RED_PIECE, RED_PIECE_HIGHLIGHT),
                Piece::Blue => self.draw_piece(painter, sq, BLUE_PIECE, BLUE_PIECE_HIGHLIGHT),
                Piece::Blocked => self.draw_blocker(painter, sq),
                Piece::Empty => {}
            }
        }
    }

    fn draw_piece(&self, painter: &Painter, sq: Square, fill: Color32, highlight: Color32) {
        let center = self.board_to_screen(sq);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        // Shadow
        painter.circle_filled(center + Vec2::new(2.0, 2.0), radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
        painter.circle_filled(center, radius, fill);
        // Highlight
        painter.circle_filled(center + Vec2::splat(-radius * 0.3), radius * 0.2, highlight);
    }

    fn draw_blocker(&self, painter: &Painter, sq: Square) {
        let rect = self.cell_rect(sq);
        painter.rect_filled(rect, CornerRadius::same(3), BLOCKER);
        let inset = rect.shrink(rect.width() * 0.25);
        let stroke = Stroke::new(3.0, BLOCKER_CROSS);
        painter.line_segment([inset.left_top(), inset.right_bottom()], stroke);
        painter.line_segment([inset.right_top(), inset.left_bottom()], stroke);
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Square> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let from_top = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;
        // Row 7 is drawn at the top.
        Square::try_new(col, BOARD_SIZE as i32 - 1 - from_top)
    }

    /// Convert a board cell to the screen coordinates of its center
    pub fn board_to_screen(&self, sq: Square) -> Pos2 {
        let from_top = BOARD_SIZE as f32 - 1.0 - sq.row() as f32;
        let x = self.board_rect.min.x + BOARD_MARGIN + (sq.col() as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (from_top + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

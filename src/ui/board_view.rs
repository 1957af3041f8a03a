//! Board rendering for the tic-tac-toe window

use crate::rules::is_valid_move;
use crate::{Board, Mark, Pos, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the 3x3 grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 200.0,
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
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 3]>,
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = board_size / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if game_over {
            return None;
        }

        let pointer_pos = response.hover_pos()?;
        let pos = self.screen_to_board(pointer_pos)?;
        if !is_valid_move(board, pos) {
            return None;
        }
        painter.rect_filled(self.cell_rect(pos).shrink(4.0), CornerRadius::same(4), hover_valid());

        if response.clicked() {
            Some(pos)
        } else {
            None
        }
    }

    /// Two vertical and two horizontal separators
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(LINE_WIDTH * self.cell_size, GRID_LINE);
        let min = self.board_rect.min;
        let size = self.cell_size * BOARD_SIZE as f32;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment([min + Vec2::new(offset, 0.0), min + Vec2::new(offset, size)], stroke);
            painter.line_segment([min + Vec2::new(0.0, offset), min + Vec2::new(size, offset)], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                match board.get(pos) {
                    Mark::Cross => self.draw_cross(painter, pos),
                    Mark::Circle => self.draw_circle(painter, pos),
                    Mark::Empty => {}
                }
            }
        }
    }

    fn draw_cross(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos).shrink(MARK_OFFSET * self.cell_size);
        let stroke = Stroke::new(CROSS_WIDTH * self.cell_size, CROSS_COLOR);

        // Descending then ascending stroke
        painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
        painter.line_segment([rect.left_bottom(), rect.right_top()], stroke);
    }

    fn draw_circle(&self, painter: &Painter, pos: Pos) {
        let stroke = Stroke::new(CIRCLE_WIDTH * self.cell_size, CIRCLE_COLOR);
        painter.circle_stroke(self.board_to_screen(pos), CIRCLE_RADIUS * self.cell_size, stroke);
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.cell_rect(pos).left_top() + Vec2::splat(LAST_MOVE_MARKER_RADIUS * 2.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(LINE_WIDTH * self.cell_size * 0.6, WIN_HIGHLIGHT);
        painter.line_segment([self.board_to_screen(line[0]), self.board_to_screen(line[2])], stroke);
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;
        Pos::try_new(row, col)
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}

//! Board rendering for the tic-tac-toe GUI

use crate::{Board, Pos, BOARD_SIZE};
use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

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
            cell_size: 200.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<[Pos; 3]>,
        banner: Option<&str>,
        accepts_input: bool,
    ) -> Option<Pos> {
        let available = ui.available_size();
        let board_size = available.x.min(available.y).max(1.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.set_rect(response.rect);

        painter.rect_filled(self.board_rect, CornerRadius::ZERO, BOARD_BG);

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));
        if accepts_input {
            if let Some(pos) = hovered.filter(|pos| board.is_empty(*pos)) {
                painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, hover_fill());
            }
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }
        if let Some(text) = banner {
            self.draw_banner(&painter, text);
        }

        if !accepts_input || !response.clicked() {
            return None;
        }
        response
            .interact_pointer_pos()
            .and_then(|p| self.screen_to_board(p))
    }

    fn set_rect(&mut self, rect: Rect) {
        self.board_rect = rect;
        self.cell_size = rect.width().min(rect.height()) / BOARD_SIZE as f32;
    }

    /// Two horizontal and two vertical lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(self.cell_size * GRID_LINE_RATIO, GRID_LINE);
        let extent = self.cell_size * BOARD_SIZE as f32;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Horizontal
            let start = self.board_rect.min + Vec2::new(0.0, offset);
            let end = self.board_rect.min + Vec2::new(extent, offset);
            painter.line_segment([start, end], stroke);

            // Vertical
            let start = self.board_rect.min + Vec2::new(offset, 0.0);
            let end = self.board_rect.min + Vec2::new(offset, extent);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for pos in board.x.iter_ones() {
            self.draw_cross(painter, pos);
        }
        for pos in board.o.iter_ones() {
            self.draw_circle(painter, pos);
        }
    }

    /// X: two diagonals inset from the cell edges
    fn draw_cross(&self, painter: &Painter, pos: Pos) {
        let cell = self.cell_rect(pos);
        let inset = self.cell_size * CROSS_INSET_RATIO;
        let inner = cell.shrink(inset);
        let stroke = Stroke::new(self.cell_size * CROSS_WIDTH_RATIO, CROSS_COLOR);

        painter.line_segment([inner.left_bottom(), inner.right_top()], stroke);
        painter.line_segment([inner.left_top(), inner.right_bottom()], stroke);
    }

    /// O: a ring centered in the cell
    fn draw_circle(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * CIRCLE_RADIUS_RATIO;
        let stroke = Stroke::new(self.cell_size * CIRCLE_WIDTH_RATIO, CIRCLE_COLOR);
        painter.circle_stroke(center, radius, stroke);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(self.cell_size * WIN_LINE_RATIO, WIN_HIGHLIGHT);
        let start = self.board_to_screen(line[0]);
        let end = self.board_to_screen(line[2]);
        painter.line_segment([start, end], stroke);
    }

    fn draw_banner(&self, painter: &Painter, text: &str) {
        let height = self.board_rect.height();
        let font = FontId::proportional(height * BANNER_FONT_RATIO);
        let band = Rect::from_center_size(
            self.board_rect.center(),
            Vec2::new(self.board_rect.width(), height * BANNER_FONT_RATIO * 2.0),
        );
        painter.rect_filled(band, CornerRadius::ZERO, banner_shade());
        painter.text(self.board_rect.center(), Align2::CENTER_CENTER, text, font, BANNER_TEXT);
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the center of its cell on screen
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}

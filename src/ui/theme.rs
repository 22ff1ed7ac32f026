//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors - teal
pub const BOARD_BG: Color32 = Color32::from_rgb(28, 170, 156);
pub const GRID_LINE: Color32 = Color32::from_rgb(23, 145, 135);

// Marks
pub const CIRCLE_COLOR: Color32 = Color32::from_rgb(239, 231, 200);
pub const CROSS_COLOR: Color32 = Color32::from_rgb(66, 66, 66);

// Markers
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 255, 255);
pub const BANNER_TEXT: Color32 = Color32::WHITE;

pub fn hover_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 30)
}

pub fn banner_shade() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 90)
}

// Status bar
pub const STATUS_BG: Color32 = Color32::from_rgb(23, 145, 135);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(200, 230, 226);

// Sizes, as fractions of one cell (a 200px cell in the reference layout)
pub const GRID_LINE_RATIO: f32 = 15.0 / 200.0;
pub const CIRCLE_RADIUS_RATIO: f32 = 1.0 / 3.0;
pub const CIRCLE_WIDTH_RATIO: f32 = 15.0 / 200.0;
pub const CROSS_WIDTH_RATIO: f32 = 25.0 / 200.0;
pub const CROSS_INSET_RATIO: f32 = 55.0 / 200.0;
pub const WIN_LINE_RATIO: f32 = 10.0 / 200.0;
pub const BANNER_FONT_RATIO: f32 = 74.0 / 600.0;

pub const STATUS_BAR_HEIGHT: f32 = 28.0;

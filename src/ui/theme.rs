//! Theme constants for the tic-tac-toe window

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(28, 170, 156);
pub const GRID_LINE: Color32 = Color32::from_rgb(23, 145, 135);

// Marks
pub const CROSS_COLOR: Color32 = Color32::from_rgb(66, 66, 66);
pub const CIRCLE_COLOR: Color32 = Color32::from_rgb(239, 231, 200);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(250, 220, 80);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 40)
}

// Panel colors
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes, relative to one cell
pub const LINE_WIDTH: f32 = 15.0 / 200.0;
pub const MARK_OFFSET: f32 = 50.0 / 200.0;
pub const CROSS_WIDTH: f32 = 20.0 / 200.0;
pub const CIRCLE_RADIUS: f32 = 60.0 / 200.0;
pub const CIRCLE_WIDTH: f32 = 15.0 / 200.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 6.0;

// Window
pub const WINDOW_SIZE: [f32; 2] = [860.0, 640.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 420.0];

//! Theme constants for the Ataxx GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(46, 52, 64);
pub const CELL_BG: Color32 = Color32::from_rgb(67, 76, 94);
pub const CELL_HOVER: Color32 = Color32::from_rgb(84, 94, 114);
pub const GRID_LINE: Color32 = Color32::from_rgb(36, 40, 50);
pub const COORD_TEXT: Color32 = Color32::from_rgb(170, 178, 192);

// Pieces
pub const RED_PIECE: Color32 = Color32::from_rgb(220, 68, 68);
pub const RED_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(250, 130, 120);
pub const BLUE_PIECE: Color32 = Color32::from_rgb(60, 120, 225);
pub const BLUE_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(130, 180, 255);
pub const BLOCKER: Color32 = Color32::from_rgb(28, 30, 36);
pub const BLOCKER_CROSS: Color32 = Color32::from_rgb(90, 94, 104);

// Markers
pub const SELECTED: Color32 = Color32::from_rgb(250, 210, 80);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(240, 240, 245);
pub const CAPTURE_RING: Color32 = Color32::from_rgb(255, 180, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn clone_target() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 220, 120, 110)
}

pub fn jump_target() -> Color32 {
    Color32::from_rgba_unmultiplied(250, 210, 80, 90)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const CELL_GAP: f32 = 3.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

pub fn side_color(side: crate::Side) -> Color32 {
    match side {
        crate::Side::Red => RED_PIECE,
        crate::Side::Blue => BLUE_PIECE,
    }
}

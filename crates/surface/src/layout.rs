//! Fixed region geometry, computed once at startup.
//!
//! Character-cell rectangles for the four surface regions. Grid cells
//! render as `CELL_W × CELL_H` character blocks (2×1 compensates for
//! typical terminal glyph aspect ratio). The overlay covers the main
//! field interior; menu screens replace the grid rather than sharing
//! space with it.

use crate::settings::Settings;
use gridfall_types::{PREVIEW_COLS, PREVIEW_ROWS};

/// Grid cell width in terminal columns.
pub const CELL_W: u16 = 2;

/// Grid cell height in terminal rows.
pub const CELL_H: u16 = 1;

/// Score readout width in characters (fits any `u32`).
pub const SCORE_WIDTH: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> u16 {
        self.x + self.w
    }

    pub fn bottom(&self) -> u16 {
        self.y + self.h
    }
}

/// Region rectangles for one surface.
///
/// `*_frame` rects are the bordered boxes; `main`/`preview` are their
/// interiors where cells are painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub main_frame: Rect,
    pub main: Rect,
    pub preview_frame: Rect,
    pub preview: Rect,
    pub score: Rect,
    pub overlay: Rect,
}

impl Layout {
    /// Main field at the origin, preview box to its right, score line
    /// under the preview box.
    pub fn new(settings: &Settings) -> Self {
        let main_w = settings.cols * CELL_W;
        let main_h = settings.rows * CELL_H;
        let main_frame = Rect::new(0, 0, main_w + 2, main_h + 2);
        let main = Rect::new(1, 1, main_w, main_h);

        let preview_w = PREVIEW_COLS * CELL_W;
        let preview_h = PREVIEW_ROWS * CELL_H;
        let preview_x = (settings.cols + 2) * CELL_W;
        let preview_frame = Rect::new(preview_x, 0, preview_w + 2, preview_h + 2);
        let preview = Rect::new(preview_x + 1, 1, preview_w, preview_h);

        let score = Rect::new(preview_x + 1, preview_frame.bottom() + 1, SCORE_WIDTH, 1);

        Self {
            main_frame,
            main,
            preview_frame,
            preview,
            score,
            overlay: main,
        }
    }
}

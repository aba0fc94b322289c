//! Category marker styling.
//!
//! Each cell category maps to a fixed style; 0 is the background.
//! Categories beyond the table wrap rather than erroring, consistent
//! with the absorb-malformed-data policy.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

/// Field background behind all cells.
pub const FIELD_BG: Rgb = Rgb::new(30, 30, 40);

/// Border box style.
pub const BORDER: CellStyle = CellStyle {
    fg: Rgb::new(200, 200, 200),
    bg: Rgb::new(0, 0, 0),
    bold: false,
};

/// Overlay menu text.
pub const MENU_TEXT: CellStyle = CellStyle {
    fg: Rgb::new(220, 220, 220),
    bg: FIELD_BG,
    bold: false,
};

/// Selected overlay menu item.
pub const MENU_SELECTED: CellStyle = CellStyle {
    fg: Rgb::new(255, 255, 255),
    bg: FIELD_BG,
    bold: true,
};

/// Score readout text.
pub const SCORE_TEXT: CellStyle = CellStyle {
    fg: Rgb::new(200, 200, 200),
    bg: Rgb::new(0, 0, 0),
    bold: false,
};

const PALETTE: [CellStyle; 8] = [
    // 0: background
    CellStyle {
        fg: Rgb::new(90, 90, 100),
        bg: FIELD_BG,
        bold: false,
    },
    cell(Rgb::new(80, 220, 220)),
    cell(Rgb::new(240, 220, 80)),
    cell(Rgb::new(200, 120, 220)),
    cell(Rgb::new(100, 220, 120)),
    cell(Rgb::new(220, 80, 80)),
    cell(Rgb::new(80, 120, 220)),
    cell(Rgb::new(255, 165, 0)),
];

const fn cell(fg: Rgb) -> CellStyle {
    CellStyle {
        fg,
        bg: FIELD_BG,
        bold: false,
    }
}

/// Style for a category marker. Out-of-table categories wrap.
pub fn category_style(category: u8) -> CellStyle {
    PALETTE[category as usize % PALETTE.len()]
}

/// Glyph for a category marker: solid block, or space for background.
pub fn category_glyph(category: u8) -> char {
    if category as usize % PALETTE.len() == 0 {
        ' '
    } else {
        '█'
    }
}

//! Terminal surface for the gridfall front end.
//!
//! The surface owns four fixed regions (main grid, preview grid,
//! score readout, overlay) and two mutually exclusive display modes:
//! grid-cell rendering (changed cells only) and line-item text
//! rendering (full rebuild per frame).
//!
//! Drawing never writes to the terminal directly; every operation
//! encodes crossterm commands into a byte buffer that the backend
//! flushes once per frame.

pub mod layout;
pub mod palette;
pub mod playfield;
pub mod settings;
pub mod term;

pub use layout::{Layout, Rect};
pub use palette::{category_glyph, category_style, CellStyle, Rgb};
pub use playfield::{DisplayMode, GridRegion, Playfield};
pub use settings::Settings;
pub use term::TermSurface;

pub use gridfall_types as types;

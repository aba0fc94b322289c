//! Shared vocabulary for the gridfall front end.
//!
//! Pure data types with no external dependencies, usable from the input
//! pump, the frame driver, the surface renderer and any engine
//! implementation.
//!
//! # Field Dimensions
//!
//! - Main field default: 10 columns × 20 rows (overridable at startup)
//! - Preview field: fixed 4 × 4 (16 cells, never resized)
//!
//! # Timing
//!
//! Timestamps are wall-clock milliseconds (`u64`). The default refresh
//! interval is `FRAME_MS` (16ms ≈ 60 FPS).

/// Wall-clock milliseconds handed to the engine on init and every tick.
pub type Timestamp = u64;

/// Default main field width in cells.
pub const MAIN_COLS: u16 = 10;

/// Default main field height in cells.
pub const MAIN_ROWS: u16 = 20;

/// Preview field width in cells (fixed).
pub const PREVIEW_COLS: u16 = 4;

/// Preview field height in cells (fixed).
pub const PREVIEW_ROWS: u16 = 4;

/// Default refresh interval in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u64 = 16;

/// Cell category rendered as empty background.
pub const BACKGROUND: u8 = 0;

/// Abstract input action delivered to the engine.
///
/// At most one action is pending at any instant; a newer action
/// overwrites an unconsumed one (see `gridfall-input::ActionLatch`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Drop,
    Escape,
}

impl Action {
    /// Parse an action from its lowercase name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Action::Up),
            "down" => Some(Action::Down),
            "left" => Some(Action::Left),
            "right" => Some(Action::Right),
            "drop" => Some(Action::Drop),
            "escape" => Some(Action::Escape),
            _ => None,
        }
    }

    /// Convert to a lowercase name (for logging).
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Drop => "drop",
            Action::Escape => "escape",
        }
    }
}

/// One engine tick's output.
///
/// Exactly one variant is produced per tick. `Draw` and `Text` are the
/// two display modes; receiving one while the surface is in the other
/// mode switches the mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameResult {
    /// Grid frame: flat row-major cell categories for the main and
    /// preview fields plus the score. Entries beyond the supplied
    /// length display as `BACKGROUND`.
    Draw {
        main: Vec<u8>,
        preview: Vec<u8>,
        score: u32,
    },
    /// Menu frame: newline-delimited line items and an optional
    /// selected-line index. Splitting into lines is the driver's job.
    Text {
        items: String,
        selected: Option<usize>,
    },
    /// Terminal: the view clears to background and stops scheduling.
    Exit,
    /// Nothing visual changed this tick; render nothing, keep going.
    Idle,
}

impl FrameResult {
    /// Variant name (for logging).
    pub fn variant(&self) -> &'static str {
        match self {
            FrameResult::Draw { .. } => "draw",
            FrameResult::Text { .. } => "text",
            FrameResult::Exit => "exit",
            FrameResult::Idle => "idle",
        }
    }
}

/// The opaque simulation boundary.
///
/// Construction plays the role of `init`: implementations take the
/// startup timestamp in their constructor (see
/// `gridfall-driver::FrameDriver::start`). The driver trusts the
/// engine; malformed cell sequences are absorbed by the renderer's
/// default-to-background policy, while a panicking engine is fatal.
pub trait Engine {
    /// Advance the simulation to `now`, consuming at most one action.
    fn tick(&mut self, now: Timestamp, action: Option<Action>) -> FrameResult;
}

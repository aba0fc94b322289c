//! Startup configuration from environment variables.

use gridfall_types::{FRAME_MS, MAIN_COLS, MAIN_ROWS};

/// The layout breaks down below this; smaller values are clamped.
pub const MIN_FIELD_DIM: u16 = 5;

/// Main field dimensions and frame cadence.
///
/// Read once at startup; the surface regions built from these are
/// fixed for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub cols: u16,
    pub rows: u16,
    pub tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cols: MAIN_COLS,
            rows: MAIN_ROWS,
            tick_ms: FRAME_MS,
        }
    }
}

impl Settings {
    /// Build settings from `GRIDFALL_COLS`, `GRIDFALL_ROWS` and
    /// `GRIDFALL_TICK_MS`, falling back to defaults for unset or
    /// unparseable values.
    pub fn from_env() -> Self {
        Self {
            cols: env_parse("GRIDFALL_COLS", MAIN_COLS),
            rows: env_parse("GRIDFALL_ROWS", MAIN_ROWS),
            tick_ms: env_parse("GRIDFALL_TICK_MS", FRAME_MS),
        }
        .sanitized()
    }

    /// Clamp out-of-range values into the supported envelope.
    pub fn sanitized(mut self) -> Self {
        self.cols = self.cols.max(MIN_FIELD_DIM);
        self.rows = self.rows.max(MIN_FIELD_DIM);
        self.tick_ms = self.tick_ms.max(1);
        self
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

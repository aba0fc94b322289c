//! Keyboard input for the gridfall front end.
//!
//! Two small pieces: a fixed key table mapping terminal key events to
//! abstract actions, and [`ActionLatch`], the single-slot register
//! holding the latest unconsumed action for the frame driver.

pub mod latch;
pub mod map;

pub use latch::ActionLatch;
pub use map::{handle_key_event, key_to_action};

pub use gridfall_types as types;

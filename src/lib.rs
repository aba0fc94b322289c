//! Gridfall (workspace facade crate).
//!
//! This package keeps a single `gridfall::{types,input,driver,surface,engine}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use gridfall_driver as driver;
pub use gridfall_engine as engine;
pub use gridfall_input as input;
pub use gridfall_surface as surface;
pub use gridfall_types as types;

//! Frame driver: the cooperative loop core.
//!
//! One `frame` call per display-refresh interval: the pending action
//! is consumed, the engine ticks with it, and the result is dispatched
//! to a render target. The caller owns scheduling (poll input with a
//! timeout, then call `frame` at each deadline) so each iteration runs
//! to completion before the next begins.
//!
//! The driver performs no validation of engine output: short cell
//! sequences are absorbed by the renderer's default-to-background
//! policy, and an engine panic propagates.

use anyhow::Result;

use gridfall_input::ActionLatch;
use gridfall_types::{Action, Engine, FrameResult, Timestamp};

/// Where frames get rendered.
///
/// The driver only knows this seam, which keeps it testable against a
/// recording double and the terminal surface swappable.
pub trait RenderTarget {
    fn render_grid(&mut self, main: &[u8], preview: &[u8], score: u32) -> Result<()>;
    fn render_text(&mut self, lines: &[&str], selected: Option<usize>) -> Result<()>;
}

/// Driver lifecycle. `Stopped` is terminal; there is no resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Stopped,
}

/// Owns the engine, the pending-action latch and the run state.
pub struct FrameDriver<E> {
    engine: E,
    latch: ActionLatch,
    state: DriverState,
}

impl<E: Engine> FrameDriver<E> {
    /// Initialize the engine with the startup timestamp and enter
    /// `Running`.
    pub fn start<F>(now: Timestamp, init: F) -> Self
    where
        F: FnOnce(Timestamp) -> E,
    {
        log::debug!("frame driver started at t={}", now);
        Self {
            engine: init(now),
            latch: ActionLatch::new(),
            state: DriverState::Running,
        }
    }

    /// Latch an input action for the next frame, overwriting any
    /// unconsumed one.
    pub fn latch(&mut self, action: Action) {
        self.latch.latch(action);
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Run one cooperative frame.
    ///
    /// Reads and clears the pending action, ticks the engine with it,
    /// and dispatches the result:
    ///
    /// - `Draw` forwards cells and score to the grid renderer.
    /// - `Text` splits the payload into lines for the text renderer.
    /// - `Exit` renders one final empty grid (all background, score 0)
    ///   and moves to `Stopped`.
    /// - `Idle` renders nothing.
    ///
    /// Once stopped, further calls never tick the engine again.
    pub fn frame<R: RenderTarget>(&mut self, now: Timestamp, target: &mut R) -> Result<DriverState> {
        if self.state == DriverState::Stopped {
            return Ok(DriverState::Stopped);
        }

        let action = self.latch.take();
        match self.engine.tick(now, action) {
            FrameResult::Draw {
                main,
                preview,
                score,
            } => {
                target.render_grid(&main, &preview, score)?;
            }
            FrameResult::Text { items, selected } => {
                let lines: Vec<&str> = items.lines().collect();
                target.render_text(&lines, selected)?;
            }
            FrameResult::Exit => {
                log::info!("engine exited at t={}", now);
                target.render_grid(&[], &[], 0)?;
                self.state = DriverState::Stopped;
            }
            FrameResult::Idle => {}
        }

        Ok(self.state)
    }
}

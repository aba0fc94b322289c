//! Single-slot pending-action register.

use gridfall_types::Action;

/// Holds at most one pending action until the frame driver consumes it.
///
/// This is a register, not a queue: latching overwrites an unconsumed
/// action, and `take` clears the slot unconditionally whether or not
/// the engine makes use of the value.
///
/// The latch is a plain `Option` confined to the frame loop's thread;
/// input is polled on the same thread between frames, so no
/// synchronization is needed. Moving input handling onto another
/// thread requires wrapping the latch in a mutex.
#[derive(Debug, Default)]
pub struct ActionLatch {
    pending: Option<Action>,
}

impl ActionLatch {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Latch an action, overwriting any unconsumed one.
    pub fn latch(&mut self, action: Action) {
        self.pending = Some(action);
    }

    /// Read and clear the slot.
    pub fn take(&mut self) -> Option<Action> {
        self.pending.take()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

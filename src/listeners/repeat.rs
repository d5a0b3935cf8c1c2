//! # Iteration (repeat) capability.
//!
//! The coarse-grained contract: a listener only learns that *an* iteration
//! starts, ends or fails, not whether it was a read or a write. The
//! multicaster bridges it onto item reads and writes through
//! [`RepeatListenerItemReadAdapter`](crate::RepeatListenerItemReadAdapter) and
//! [`RepeatListenerItemWriteAdapter`](crate::RepeatListenerItemWriteAdapter).

use crate::error::{DynError, ListenerResult};

/// Callbacks around each iteration of a repeated operation.
pub trait RepeatListener: Send + Sync + 'static {
    /// Called before each iteration.
    fn before_iteration(&self) -> ListenerResult {
        Ok(())
    }

    /// Called after an iteration completed.
    fn after_iteration(&self) -> ListenerResult {
        Ok(())
    }

    /// Called when an iteration failed with `error`.
    fn on_iteration_error(&self, _error: &DynError) -> ListenerResult {
        Ok(())
    }
}

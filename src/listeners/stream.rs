//! # Stream lifecycle capability.

use crate::error::ListenerResult;
use crate::step::ExecutionContext;

/// Resource that is opened, checkpointed and closed with the step.
///
/// The context is relayed untouched from the engine; streams store and read
/// their own keys. `open` and `close` report failures as
/// [`ListenerError::Stream`](crate::ListenerError::Stream).
pub trait ItemStream: Send + Sync + 'static {
    /// Acquires resources, restoring state from `ctx` when restarting.
    fn open(&self, _ctx: &mut ExecutionContext) -> ListenerResult {
        Ok(())
    }

    /// Saves current state into `ctx` before a checkpoint.
    fn update(&self, _ctx: &mut ExecutionContext) -> ListenerResult {
        Ok(())
    }

    /// Releases resources.
    fn close(&self, _ctx: &mut ExecutionContext) -> ListenerResult {
        Ok(())
    }
}

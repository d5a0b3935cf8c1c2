//! # Step lifecycle capability.

use crate::error::{DynError, ListenerResult};
use crate::step::{ExitStatus, StepExecution};

/// Callbacks around the whole step.
///
/// `after_step` and `on_error_in_step` may return a status. When several
/// listeners are grouped, the **last** `Some` returned in registration order
/// becomes the group's result, so later listeners override earlier ones.
pub trait StepListener: Send + Sync + 'static {
    /// Called once before the first chunk, with the execution about to run.
    fn before_step(&self, _step: &StepExecution) -> ListenerResult {
        Ok(())
    }

    /// Called after the step completed normally.
    ///
    /// Return `Some` to replace the step's exit status, `None` to keep it.
    fn after_step(&self) -> ListenerResult<Option<ExitStatus>> {
        Ok(None)
    }

    /// Called when the step failed with `error`.
    ///
    /// Return `Some` to replace the step's exit status, `None` to keep it.
    fn on_error_in_step(&self, _error: &DynError) -> ListenerResult<Option<ExitStatus>> {
        Ok(None)
    }
}

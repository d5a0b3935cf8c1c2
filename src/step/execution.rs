//! # The running step as seen by listeners.

use crate::step::ExecutionContext;

/// Record of one step execution, handed to
/// [`StepListener::before_step`](crate::StepListener::before_step).
///
/// The engine owns and updates it; listeners only read it.
#[derive(Debug, Clone, Default)]
pub struct StepExecution {
    /// Engine-assigned execution id.
    pub id: u64,
    /// Name of the step being executed.
    pub step_name: String,
    /// Items read so far.
    pub read_count: u64,
    /// Items written so far.
    pub write_count: u64,
    /// Step-scoped restart state.
    pub execution_context: ExecutionContext,
}

impl StepExecution {
    /// Creates a fresh execution with zeroed counters and an empty context.
    pub fn new(id: u64, step_name: impl Into<String>) -> Self {
        Self {
            id,
            step_name: step_name.into(),
            ..Self::default()
        }
    }
}

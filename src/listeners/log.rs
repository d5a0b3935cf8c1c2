//! # Tracing-backed listener for debugging and demos.
//!
//! [`LogListener`] takes part in every capability and turns each callback into
//! a `tracing` event. Error callbacks are logged at `WARN`, everything else at
//! `INFO` (item-level callbacks at `DEBUG`).
//!
//! ## Output format (with `tracing_subscriber::fmt`)
//! ```text
//! INFO  stepcast: [before-step] step="load-orders" id=1
//! INFO  stepcast: [open] entries=0
//! DEBUG stepcast: [after-read]
//! WARN  stepcast: [write-error] err="disk full"
//! INFO  stepcast: [after-step]
//! ```

use std::any::Any;

use tracing::{debug, info, warn};

use crate::error::{DynError, ListenerResult};
use crate::listeners::{
    ChunkListener, ItemReadListener, ItemStream, ItemWriteListener, RepeatListener, StepListener,
};
use crate::step::{ExecutionContext, ExitStatus, StepExecution};

/// Logging listener.
///
/// Enabled via the `logging` feature. Never fails and never changes the exit
/// status.
///
/// Not intended for production use - implement the capability traits
/// directly for structured audit trails or metrics.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogListener;

impl StepListener for LogListener {
    fn before_step(&self, step: &StepExecution) -> ListenerResult {
        info!(step = %step.step_name, id = step.id, "[before-step]");
        Ok(())
    }

    fn after_step(&self) -> ListenerResult<Option<ExitStatus>> {
        info!("[after-step]");
        Ok(None)
    }

    fn on_error_in_step(&self, error: &DynError) -> ListenerResult<Option<ExitStatus>> {
        warn!(err = %error, "[step-error]");
        Ok(None)
    }
}

impl ItemStream for LogListener {
    fn open(&self, ctx: &mut ExecutionContext) -> ListenerResult {
        info!(entries = ctx.len(), "[open]");
        Ok(())
    }

    fn update(&self, ctx: &mut ExecutionContext) -> ListenerResult {
        info!(entries = ctx.len(), dirty = ctx.is_dirty(), "[update]");
        Ok(())
    }

    fn close(&self, ctx: &mut ExecutionContext) -> ListenerResult {
        info!(entries = ctx.len(), "[close]");
        Ok(())
    }
}

impl ChunkListener for LogListener {
    fn before_chunk(&self) -> ListenerResult {
        info!("[before-chunk]");
        Ok(())
    }

    fn after_chunk(&self) -> ListenerResult {
        info!("[after-chunk]");
        Ok(())
    }
}

impl ItemReadListener for LogListener {
    fn before_read(&self) -> ListenerResult {
        debug!("[before-read]");
        Ok(())
    }

    fn after_read(&self, _item: &dyn Any) -> ListenerResult {
        debug!("[after-read]");
        Ok(())
    }

    fn on_read_error(&self, error: &DynError) -> ListenerResult {
        warn!(err = %error, "[read-error]");
        Ok(())
    }
}

impl ItemWriteListener for LogListener {
    fn before_write(&self, _item: &dyn Any) -> ListenerResult {
        debug!("[before-write]");
        Ok(())
    }

    fn after_write(&self) -> ListenerResult {
        debug!("[after-write]");
        Ok(())
    }

    fn on_write_error(&self, error: &DynError, _item: &dyn Any) -> ListenerResult {
        warn!(err = %error, "[write-error]");
        Ok(())
    }
}

impl RepeatListener for LogListener {
    fn before_iteration(&self) -> ListenerResult {
        debug!("[before-iteration]");
        Ok(())
    }

    fn after_iteration(&self) -> ListenerResult {
        debug!("[after-iteration]");
        Ok(())
    }

    fn on_iteration_error(&self, error: &DynError) -> ListenerResult {
        warn!(err = %error, "[iteration-error]");
        Ok(())
    }
}

crate::impl_listener!(
    LogListener: StepListener,
    ItemStream,
    ChunkListener,
    ItemReadListener,
    ItemWriteListener,
    RepeatListener
);

//! Capability implementations for the broadcast groups.

use std::any::Any;

use crate::composite::ListenerGroup;
use crate::error::{DynError, ListenerResult};
use crate::listeners::{
    ChunkListener, ItemReadListener, ItemStream, ItemWriteListener, RepeatListener, StepListener,
};
use crate::step::{ExecutionContext, ExitStatus, StepExecution};

impl StepListener for ListenerGroup<dyn StepListener> {
    fn before_step(&self, step: &StepExecution) -> ListenerResult {
        self.broadcast(|l| l.before_step(step))
    }

    fn after_step(&self) -> ListenerResult<Option<ExitStatus>> {
        self.fold_status(|l| l.after_step())
    }

    fn on_error_in_step(&self, error: &DynError) -> ListenerResult<Option<ExitStatus>> {
        self.fold_status(|l| l.on_error_in_step(error))
    }
}

impl ItemStream for ListenerGroup<dyn ItemStream> {
    fn open(&self, ctx: &mut ExecutionContext) -> ListenerResult {
        self.broadcast(|s| s.open(ctx))
    }

    fn update(&self, ctx: &mut ExecutionContext) -> ListenerResult {
        self.broadcast(|s| s.update(ctx))
    }

    fn close(&self, ctx: &mut ExecutionContext) -> ListenerResult {
        self.broadcast(|s| s.close(ctx))
    }
}

impl ChunkListener for ListenerGroup<dyn ChunkListener> {
    fn before_chunk(&self) -> ListenerResult {
        self.broadcast(|l| l.before_chunk())
    }

    fn after_chunk(&self) -> ListenerResult {
        self.broadcast(|l| l.after_chunk())
    }
}

impl ItemReadListener for ListenerGroup<dyn ItemReadListener> {
    fn before_read(&self) -> ListenerResult {
        self.broadcast(|l| l.before_read())
    }

    fn after_read(&self, item: &dyn Any) -> ListenerResult {
        self.broadcast(|l| l.after_read(item))
    }

    fn on_read_error(&self, error: &DynError) -> ListenerResult {
        self.broadcast(|l| l.on_read_error(error))
    }
}

impl ItemWriteListener for ListenerGroup<dyn ItemWriteListener> {
    fn before_write(&self, item: &dyn Any) -> ListenerResult {
        self.broadcast(|l| l.before_write(item))
    }

    fn after_write(&self) -> ListenerResult {
        self.broadcast(|l| l.after_write())
    }

    fn on_write_error(&self, error: &DynError, item: &dyn Any) -> ListenerResult {
        self.broadcast(|l| l.on_write_error(error, item))
    }
}

impl RepeatListener for ListenerGroup<dyn RepeatListener> {
    fn before_iteration(&self) -> ListenerResult {
        self.broadcast(|l| l.before_iteration())
    }

    fn after_iteration(&self) -> ListenerResult {
        self.broadcast(|l| l.after_iteration())
    }

    fn on_iteration_error(&self, error: &DynError) -> ListenerResult {
        self.broadcast(|l| l.on_iteration_error(error))
    }
}

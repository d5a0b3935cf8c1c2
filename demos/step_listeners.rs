//! # Demo: step_listeners
//!
//! Drives a [`ListenerMulticaster`] the way a chunk-oriented step would.
//!
//! Shows how to:
//! - Implement capability traits and expose them with [`impl_listener!`].
//! - Bridge a [`RepeatListener`] onto item reads and writes.
//! - Let a later [`StepListener`] override the exit status.
//!
//! ## Flow
//! ```text
//! before_step ─► open ─► [ before_chunk ─► (read ─► write)* ─► update ─► after_chunk ]* ─► close ─► after_step
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example step_listeners --features logging
//! ```

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use stepcast::{
    ChunkListener, ExecutionContext, ExitStatus, ItemReadListener, ItemStream, ItemWriteListener,
    Listener, ListenerError, ListenerMulticaster, ListenerResult, LogListener, RepeatListener,
    StepExecution, StepListener, impl_listener,
};
use tracing_subscriber::EnvFilter;

/// Stream that remembers how many lines were read.
#[derive(Default)]
struct LineCursor {
    lines: AtomicU64,
}

impl ItemStream for LineCursor {
    fn open(&self, ctx: &mut ExecutionContext) -> ListenerResult {
        let start = ctx.get_long("cursor.lines").unwrap_or(0);
        self.lines.store(start as u64, Ordering::Relaxed);
        Ok(())
    }

    fn update(&self, ctx: &mut ExecutionContext) -> ListenerResult {
        ctx.put_long("cursor.lines", self.lines.load(Ordering::Relaxed) as i64);
        Ok(())
    }
}

impl ItemReadListener for LineCursor {
    fn after_read(&self, _item: &dyn Any) -> ListenerResult {
        self.lines.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

impl_listener!(LineCursor: ItemStream, ItemReadListener);

/// Counts iterations without knowing about reads or writes.
#[derive(Default)]
struct IterationCounter {
    started: AtomicU64,
}

impl RepeatListener for IterationCounter {
    fn before_iteration(&self) -> ListenerResult {
        self.started.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

impl_listener!(IterationCounter: RepeatListener);

/// Marks the step as skipped-with-warnings when any write failed.
#[derive(Default)]
struct WriteAudit {
    failures: AtomicU64,
}

impl ItemWriteListener for WriteAudit {
    fn on_write_error(&self, _error: &stepcast::DynError, _item: &dyn Any) -> ListenerResult {
        self.failures.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

impl StepListener for WriteAudit {
    fn after_step(&self) -> ListenerResult<Option<ExitStatus>> {
        let failures = self.failures.load(Ordering::Relaxed);
        if failures == 0 {
            return Ok(None);
        }
        Ok(Some(
            ExitStatus::new("COMPLETED WITH SKIPS")
                .with_description(format!("{failures} write(s) failed")),
        ))
    }
}

impl_listener!(WriteAudit: ItemWriteListener, StepListener);

fn main() -> Result<(), ListenerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cursor = Arc::new(LineCursor::default());
    let counter = Arc::new(IterationCounter::default());
    let audit = Arc::new(WriteAudit::default());

    let listeners: Vec<Arc<dyn Listener>> = vec![
        Arc::new(LogListener),
        cursor.clone(),
        counter.clone(),
        audit.clone(),
    ];
    let multicaster = ListenerMulticaster::builder()
        .with_step_name("import-orders")
        .with_listeners(listeners)
        .build();

    let input = ["order-1", "order-2", "BROKEN", "order-4", "order-5"];
    let mut ctx = ExecutionContext::new();

    multicaster.before_step(&StepExecution::new(1, "import-orders"))?;
    multicaster.open(&mut ctx)?;

    for chunk in input.chunks(2) {
        multicaster.before_chunk()?;
        for item in chunk {
            multicaster.before_read()?;
            multicaster.after_read(item)?;

            multicaster.before_write(item)?;
            if *item == "BROKEN" {
                let err = ListenerError::callback("writer", "malformed order");
                multicaster.on_write_error(&err, item)?;
            } else {
                multicaster.after_write()?;
            }
        }
        multicaster.update(&mut ctx)?;
        multicaster.after_chunk()?;
    }

    multicaster.close(&mut ctx)?;
    let status = multicaster.after_step()?.unwrap_or_else(ExitStatus::completed);

    println!("lines read:       {:?}", ctx.get_long("cursor.lines"));
    println!("iterations:       {}", counter.started.load(Ordering::Relaxed));
    println!("exit status:      {status}");
    Ok(())
}

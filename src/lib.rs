//! # stepcast
//!
//! **stepcast** routes the lifecycle events of a batch step to any number of
//! listeners through one object, the [`ListenerMulticaster`].
//!
//! A listener implements any subset of six capability traits. It is
//! registered once; the multicaster works out which capabilities it has and
//! adds it to one broadcast group per capability. The execution engine then
//! talks to the multicaster as if it were a single listener.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  Listener A  │   │  Listener B  │   │  Listener C  │
//!     │ (step+chunk) │   │   (stream)   │   │   (repeat)   │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  ListenerMulticaster::register()                                  │
//! │  - probes Listener::as_step_listener() .. as_repeat_listener()    │
//! │  - appends to every matching ListenerGroup                        │
//! └──────┬─────────┬─────────┬──────────┬──────────┬──────────┬───────┘
//!        ▼         ▼         ▼          ▼          ▼          ▼
//!      step     stream     chunk      read       write      repeat
//!      group    group      group      group      group      group
//!                                  [adapter,..] [adapter,..]   ▲
//!                                       │          │           │
//!                                       └──────────┴───────────┘
//!                                     adapters forward to the repeat group
//! ```
//!
//! ### Call flow
//! ```text
//! engine ──► multicaster.before_chunk()
//!               └─► chunk group: A.before_chunk() ─► ... (registration order)
//!                      └─ first Err ──► returned to engine unchanged, rest skipped
//!
//! engine ──► multicaster.after_step()
//!               └─► step group: fold, last Some(ExitStatus) wins
//! ```
//!
//! ## Features
//! | Area              | Description                                                    | Key types / traits                          |
//! |-------------------|----------------------------------------------------------------|---------------------------------------------|
//! | **Capabilities**  | Callback contracts a listener may implement.                   | [`StepListener`], [`ItemStream`], [`ChunkListener`], [`ItemReadListener`], [`ItemWriteListener`], [`RepeatListener`] |
//! | **Registration**  | Capability discovery and routing.                              | [`Listener`], [`impl_listener!`], [`ListenerMulticaster`] |
//! | **Broadcast**     | Ordered, fail-fast groups with status override.                | [`ListenerGroup`]                           |
//! | **Adapters**      | Repeat listeners observing item reads/writes.                  | [`RepeatListenerItemReadAdapter`], [`RepeatListenerItemWriteAdapter`] |
//! | **Step data**     | Values exchanged with listeners.                               | [`StepExecution`], [`ExecutionContext`], [`ExitStatus`] |
//! | **Errors**        | Single error type for every callback.                          | [`ListenerError`]                           |
//! | **Configuration** | Step name and initial listeners.                               | [`MulticasterBuilder`]                      |
//!
//! ## Optional features
//! - `logging`: exports [`LogListener`], a `tracing`-backed listener _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use stepcast::{
//!     ExecutionContext, ItemStream, ListenerMulticaster, ListenerResult, RepeatListener,
//!     StepExecution, StepListener, impl_listener,
//! };
//!
//! struct Checkpoint;
//!
//! impl ItemStream for Checkpoint {
//!     fn update(&self, ctx: &mut ExecutionContext) -> ListenerResult {
//!         ctx.put_long("checkpoint.items", 10);
//!         Ok(())
//!     }
//! }
//!
//! impl_listener!(Checkpoint: ItemStream);
//!
//! struct Heartbeat;
//! impl RepeatListener for Heartbeat {}
//! impl_listener!(Heartbeat: RepeatListener);
//!
//! fn main() -> Result<(), stepcast::ListenerError> {
//!     let multicaster = ListenerMulticaster::builder()
//!         .with_step_name("load-orders")
//!         .build();
//!     multicaster.register(Arc::new(Checkpoint));
//!     multicaster.register(Arc::new(Heartbeat));
//!
//!     let mut ctx = ExecutionContext::new();
//!     multicaster.before_step(&StepExecution::new(1, "load-orders"))?;
//!     multicaster.open(&mut ctx)?;
//!     multicaster.update(&mut ctx)?;
//!     multicaster.close(&mut ctx)?;
//!     assert_eq!(ctx.get_long("checkpoint.items"), Some(10));
//!
//!     // No listener overrides the status.
//!     assert_eq!(multicaster.after_step()?, None);
//!     Ok(())
//! }
//! ```
mod adapters;
mod composite;
mod error;
mod listeners;
mod multicast;
mod step;

#[cfg(test)]
mod test_support;

// ---- Public re-exports ----

pub use adapters::{RepeatListenerItemReadAdapter, RepeatListenerItemWriteAdapter};
pub use composite::{
    CompositeChunkListener, CompositeItemReadListener, CompositeItemStream,
    CompositeItemWriteListener, CompositeRepeatListener, CompositeStepListener, ListenerGroup,
};
pub use error::{DynError, ListenerError, ListenerResult};
pub use listeners::{
    Capability, ChunkListener, ItemReadListener, ItemStream, ItemWriteListener, Listener,
    RepeatListener, StepListener,
};
pub use multicast::{ListenerMulticaster, MulticasterBuilder};
pub use step::{ContextValue, ExecutionContext, ExitStatus, StepExecution};

// Optional: expose a simple built-in tracing listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogListener;

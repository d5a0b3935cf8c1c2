//! # Listener capabilities.
//!
//! A listener is any `Arc`-shared object implementing [`Listener`] plus zero or
//! more capability traits. [`Listener`] is how the multicaster discovers which
//! capabilities an object has; the capability traits carry the callbacks.
//!
//! ## Capabilities
//! | Capability          | Trait                 | Callbacks                                          |
//! |---------------------|-----------------------|----------------------------------------------------|
//! | **StepLifecycle**   | [`StepListener`]      | `before_step`, `after_step`, `on_error_in_step`    |
//! | **StreamLifecycle** | [`ItemStream`]        | `open`, `update`, `close`                          |
//! | **ChunkBoundary**   | [`ChunkListener`]     | `before_chunk`, `after_chunk`                      |
//! | **ItemRead**        | [`ItemReadListener`]  | `before_read`, `after_read`, `on_read_error`       |
//! | **ItemWrite**       | [`ItemWriteListener`] | `before_write`, `after_write`, `on_write_error`    |
//! | **Iteration**       | [`RepeatListener`]    | `before_iteration`, `after_iteration`, `on_iteration_error` |
//!
//! Every callback has a no-op default, so a listener only overrides what it
//! needs.
//!
//! ## Implementing a listener
//! ```rust
//! use stepcast::{ChunkListener, ListenerResult, StepListener, StepExecution, impl_listener};
//!
//! struct Audit;
//!
//! impl StepListener for Audit {
//!     fn before_step(&self, step: &StepExecution) -> ListenerResult {
//!         println!("starting {}", step.step_name);
//!         Ok(())
//!     }
//! }
//!
//! impl ChunkListener for Audit {}
//!
//! impl_listener!(Audit: StepListener, ChunkListener);
//! ```

mod chunk;
mod item;
mod listener;
mod repeat;
mod step;
mod stream;

#[cfg(feature = "logging")]
mod log;

pub use chunk::ChunkListener;
pub use item::{ItemReadListener, ItemWriteListener};
pub use listener::{Capability, Listener};
pub use repeat::RepeatListener;
pub use step::StepListener;
pub use stream::ItemStream;

#[cfg(feature = "logging")]
pub use log::LogListener;

//! # Step-side data exchanged with listeners.
//!
//! These are the values the execution engine hands to listeners; the
//! multicaster relays them without looking inside.
//!
//! ## Contents
//! - [`StepExecution`] the running step, passed to `before_step`
//! - [`ExecutionContext`] key/value state relayed through stream `open`/`update`/`close`
//! - [`ExitStatus`] the status folded from `after_step`/`on_error_in_step`

mod context;
mod execution;
mod exit_status;

pub use context::{ContextValue, ExecutionContext};
pub use execution::StepExecution;
pub use exit_status::ExitStatus;

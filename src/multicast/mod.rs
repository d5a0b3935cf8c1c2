//! Listener façade handed to the execution engine.
//!
//! - [`multicaster`]: [`ListenerMulticaster`], capability detection and delegation;
//! - [`builder`]: [`MulticasterBuilder`], in-process configuration.

mod builder;
mod multicaster;

pub use builder::MulticasterBuilder;
pub use multicaster::ListenerMulticaster;

//! # Per-capability broadcast groups.
//!
//! A [`ListenerGroup`] holds the listeners of one capability in registration
//! order and implements that capability itself, so a group can stand in for a
//! single listener.
//!
//! ## Broadcast rules
//! ```text
//! group.before_chunk()
//!     │
//!     ├──► member 1 ──► Ok
//!     ├──► member 2 ──► Err(e) ──► return Err(e)   (member 3 is not called)
//!     └──► member 3
//!
//! group.after_step()
//!     acc = None
//!     ├──► member 1 ──► None          acc = None
//!     ├──► member 2 ──► Some(FAILED)  acc = Some(FAILED)
//!     └──► member 3 ──► None          acc = Some(FAILED)   → Ok(Some(FAILED))
//! ```
//! - **Order**: members are called in registration order; duplicates are called once per registration.
//! - **Fail-fast**: the first error is returned unchanged; later members are skipped for that call.
//! - **Status override**: the last `Some` wins.

mod broadcast;
mod group;

pub use group::ListenerGroup;

use crate::listeners::{
    ChunkListener, ItemReadListener, ItemStream, ItemWriteListener, RepeatListener, StepListener,
};

/// Broadcast group of [`StepListener`]s.
pub type CompositeStepListener = ListenerGroup<dyn StepListener>;
/// Broadcast group of [`ItemStream`]s.
pub type CompositeItemStream = ListenerGroup<dyn ItemStream>;
/// Broadcast group of [`ChunkListener`]s.
pub type CompositeChunkListener = ListenerGroup<dyn ChunkListener>;
/// Broadcast group of [`ItemReadListener`]s.
pub type CompositeItemReadListener = ListenerGroup<dyn ItemReadListener>;
/// Broadcast group of [`ItemWriteListener`]s.
pub type CompositeItemWriteListener = ListenerGroup<dyn ItemWriteListener>;
/// Broadcast group of [`RepeatListener`]s.
pub type CompositeRepeatListener = ListenerGroup<dyn RepeatListener>;

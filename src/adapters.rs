//! # Bridging iteration listeners onto item reads and writes.
//!
//! A [`RepeatListener`] only knows that an iteration started, ended or failed.
//! The adapters below let it observe item reads and writes without being
//! registered for those capabilities:
//!
//! ```text
//! ItemReadListener                      RepeatListener
//!   before_read()            ──►          before_iteration()
//!   after_read(item)         ──►          after_iteration()
//!   on_read_error(e)         ──►          on_iteration_error(e)
//!
//! ItemWriteListener
//!   before_write(item)       ──►          before_iteration()
//!   after_write()            ──►          after_iteration()
//!   on_write_error(e, item)  ──►          on_iteration_error(e)
//! ```
//!
//! The item payload is dropped: the iteration callbacks have nowhere to put it.
//! Listeners that need the item must implement the item capability directly.
//!
//! [`ListenerMulticaster`](crate::ListenerMulticaster) wraps its whole repeat
//! group in one adapter per direction, so each read or write reaches every
//! repeat listener registered at the time of the call.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::{DynError, ListenerResult};
use crate::listeners::{ItemReadListener, ItemWriteListener, RepeatListener};

/// Exposes a [`RepeatListener`] as an [`ItemReadListener`].
pub struct RepeatListenerItemReadAdapter {
    delegate: Arc<dyn RepeatListener>,
}

impl RepeatListenerItemReadAdapter {
    #[must_use]
    pub fn new(delegate: Arc<dyn RepeatListener>) -> Self {
        Self { delegate }
    }
}

impl ItemReadListener for RepeatListenerItemReadAdapter {
    fn before_read(&self) -> ListenerResult {
        self.delegate.before_iteration()
    }

    /// Forwards to `after_iteration`; the item is not passed on.
    fn after_read(&self, _item: &dyn Any) -> ListenerResult {
        self.delegate.after_iteration()
    }

    fn on_read_error(&self, error: &DynError) -> ListenerResult {
        self.delegate.on_iteration_error(error)
    }
}

impl fmt::Debug for RepeatListenerItemReadAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepeatListenerItemReadAdapter").finish_non_exhaustive()
    }
}

crate::impl_listener!(RepeatListenerItemReadAdapter: ItemReadListener);

/// Exposes a [`RepeatListener`] as an [`ItemWriteListener`].
pub struct RepeatListenerItemWriteAdapter {
    delegate: Arc<dyn RepeatListener>,
}

impl RepeatListenerItemWriteAdapter {
    #[must_use]
    pub fn new(delegate: Arc<dyn RepeatListener>) -> Self {
        Self { delegate }
    }
}

impl ItemWriteListener for RepeatListenerItemWriteAdapter {
    /// Forwards to `before_iteration`; the item is not passed on.
    fn before_write(&self, _item: &dyn Any) -> ListenerResult {
        self.delegate.before_iteration()
    }

    fn after_write(&self) -> ListenerResult {
        self.delegate.after_iteration()
    }

    /// Forwards the error to `on_iteration_error`; the item is not passed on.
    fn on_write_error(&self, error: &DynError, _item: &dyn Any) -> ListenerResult {
        self.delegate.on_iteration_error(error)
    }
}

impl fmt::Debug for RepeatListenerItemWriteAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepeatListenerItemWriteAdapter").finish_non_exhaustive()
    }
}

crate::impl_listener!(RepeatListenerItemWriteAdapter: ItemWriteListener);

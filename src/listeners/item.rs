//! # Item read and item write capabilities.
//!
//! Items are opaque to this crate and passed as `&dyn Any`; a listener that
//! cares about the payload downcasts it:
//!
//! ```rust
//! use std::any::Any;
//! use stepcast::{ItemReadListener, ListenerResult};
//!
//! struct LineCounter;
//!
//! impl ItemReadListener for LineCounter {
//!     fn after_read(&self, item: &dyn Any) -> ListenerResult {
//!         if let Some(line) = item.downcast_ref::<String>() {
//!             let _ = line.len();
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use std::any::Any;

use crate::error::{DynError, ListenerResult};

/// Callbacks around each item read.
pub trait ItemReadListener: Send + Sync + 'static {
    /// Called before an item is read.
    fn before_read(&self) -> ListenerResult {
        Ok(())
    }

    /// Called with the item just read.
    fn after_read(&self, _item: &dyn Any) -> ListenerResult {
        Ok(())
    }

    /// Called when reading failed with `error`.
    fn on_read_error(&self, _error: &DynError) -> ListenerResult {
        Ok(())
    }
}

/// Callbacks around each item write.
pub trait ItemWriteListener: Send + Sync + 'static {
    /// Called with the item about to be written.
    fn before_write(&self, _item: &dyn Any) -> ListenerResult {
        Ok(())
    }

    /// Called after the pending items were written.
    fn after_write(&self) -> ListenerResult {
        Ok(())
    }

    /// Called when writing `item` failed with `error`.
    fn on_write_error(&self, _error: &DynError, _item: &dyn Any) -> ListenerResult {
        Ok(())
    }
}

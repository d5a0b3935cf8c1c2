//! # Capability discovery.
//!
//! [`Listener`] exposes one accessor per capability. Each returns the same
//! object re-typed as that capability's trait object, or `None` when the
//! listener does not take part in it. This is how
//! [`ListenerMulticaster::register`](crate::ListenerMulticaster::register)
//! decides which groups a listener joins.
//!
//! Writing the accessors by hand is mechanical; [`impl_listener!`](crate::impl_listener)
//! generates them from a list of capability traits.

use std::fmt;
use std::sync::Arc;

use crate::listeners::{
    ChunkListener, ItemReadListener, ItemStream, ItemWriteListener, RepeatListener, StepListener,
};

/// One of the six contracts a listener may satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// [`StepListener`]
    StepLifecycle,
    /// [`ItemStream`]
    StreamLifecycle,
    /// [`ChunkListener`]
    ChunkBoundary,
    /// [`ItemReadListener`]
    ItemRead,
    /// [`ItemWriteListener`]
    ItemWrite,
    /// [`RepeatListener`]
    Iteration,
}

impl Capability {
    /// All capabilities, in the order registration probes them.
    pub const ALL: [Capability; 6] = [
        Capability::StepLifecycle,
        Capability::StreamLifecycle,
        Capability::ChunkBoundary,
        Capability::ItemRead,
        Capability::ItemWrite,
        Capability::Iteration,
    ];

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            Capability::StepLifecycle => "step_lifecycle",
            Capability::StreamLifecycle => "stream_lifecycle",
            Capability::ChunkBoundary => "chunk_boundary",
            Capability::ItemRead => "item_read",
            Capability::ItemWrite => "item_write",
            Capability::Iteration => "iteration",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Object that can be registered with a multicaster.
///
/// Each `as_*` accessor defaults to `None`; override the ones matching the
/// capability traits the type implements, returning `Some(self)`.
/// A type overriding none of them is accepted by the multicaster and ignored.
pub trait Listener: Send + Sync + 'static {
    /// Returns the listener name used in logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn as_step_listener(self: Arc<Self>) -> Option<Arc<dyn StepListener>> {
        None
    }

    fn as_item_stream(self: Arc<Self>) -> Option<Arc<dyn ItemStream>> {
        None
    }

    fn as_chunk_listener(self: Arc<Self>) -> Option<Arc<dyn ChunkListener>> {
        None
    }

    fn as_item_read_listener(self: Arc<Self>) -> Option<Arc<dyn ItemReadListener>> {
        None
    }

    fn as_item_write_listener(self: Arc<Self>) -> Option<Arc<dyn ItemWriteListener>> {
        None
    }

    fn as_repeat_listener(self: Arc<Self>) -> Option<Arc<dyn RepeatListener>> {
        None
    }
}

/// Implements [`Listener`] for a type from the capability traits it implements.
///
/// Accepted capability names: `StepListener`, `ItemStream`, `ChunkListener`,
/// `ItemReadListener`, `ItemWriteListener`, `RepeatListener`. The type must
/// implement each named trait.
///
/// ```rust
/// use std::sync::Arc;
/// use stepcast::{Listener, RepeatListener, impl_listener};
///
/// struct Ticker;
/// impl RepeatListener for Ticker {}
/// impl_listener!(Ticker: RepeatListener);
///
/// struct Inert;
/// impl_listener!(Inert);
///
/// assert!(Arc::new(Ticker).as_repeat_listener().is_some());
/// assert!(Arc::new(Inert).as_repeat_listener().is_none());
/// ```
#[macro_export]
macro_rules! impl_listener {
    (@as StepListener) => {
        fn as_step_listener(
            self: ::std::sync::Arc<Self>,
        ) -> ::core::option::Option<::std::sync::Arc<dyn $crate::StepListener>> {
            ::core::option::Option::Some(self)
        }
    };
    (@as ItemStream) => {
        fn as_item_stream(
            self: ::std::sync::Arc<Self>,
        ) -> ::core::option::Option<::std::sync::Arc<dyn $crate::ItemStream>> {
            ::core::option::Option::Some(self)
        }
    };
    (@as ChunkListener) => {
        fn as_chunk_listener(
            self: ::std::sync::Arc<Self>,
        ) -> ::core::option::Option<::std::sync::Arc<dyn $crate::ChunkListener>> {
            ::core::option::Option::Some(self)
        }
    };
    (@as ItemReadListener) => {
        fn as_item_read_listener(
            self: ::std::sync::Arc<Self>,
        ) -> ::core::option::Option<::std::sync::Arc<dyn $crate::ItemReadListener>> {
            ::core::option::Option::Some(self)
        }
    };
    (@as ItemWriteListener) => {
        fn as_item_write_listener(
            self: ::std::sync::Arc<Self>,
        ) -> ::core::option::Option<::std::sync::Arc<dyn $crate::ItemWriteListener>> {
            ::core::option::Option::Some(self)
        }
    };
    (@as RepeatListener) => {
        fn as_repeat_listener(
            self: ::std::sync::Arc<Self>,
        ) -> ::core::option::Option<::std::sync::Arc<dyn $crate::RepeatListener>> {
            ::core::option::Option::Some(self)
        }
    };
    ($ty:ty) => {
        impl $crate::Listener for $ty {}
    };
    ($ty:ty : $($cap:ident),+ $(,)?) => {
        impl $crate::Listener for $ty {
            $( $crate::impl_listener!(@as $cap); )+
        }
    };
}

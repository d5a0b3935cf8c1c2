use std::sync::Arc;

use super::multicaster::ListenerMulticaster;
use crate::listeners::Listener;

/// Builder for constructing a [`ListenerMulticaster`].
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use stepcast::{ChunkListener, Listener, ListenerMulticaster, impl_listener};
///
/// struct Progress;
/// impl ChunkListener for Progress {}
/// impl_listener!(Progress: ChunkListener);
///
/// let listeners: Vec<Arc<dyn Listener>> = vec![Arc::new(Progress)];
/// let multicaster = ListenerMulticaster::builder()
///     .with_step_name("load-orders")
///     .with_listeners(listeners)
///     .build();
///
/// assert_eq!(multicaster.step_name(), Some("load-orders"));
/// assert_eq!(multicaster.chunk_listeners().len(), 1);
/// ```
#[derive(Default)]
pub struct MulticasterBuilder {
    step_name: Option<Arc<str>>,
    listeners: Vec<Arc<dyn Listener>>,
}

impl MulticasterBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the step name reported in registration logs.
    pub fn with_step_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.step_name = Some(name.into());
        self
    }

    /// Sets the listeners registered on build, in order.
    ///
    /// Replaces any listeners set before.
    pub fn with_listeners(mut self, listeners: Vec<Arc<dyn Listener>>) -> Self {
        self.listeners = listeners;
        self
    }

    /// Appends one listener after those already set.
    pub fn with_listener(mut self, listener: Arc<dyn Listener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Builds the multicaster and registers the listeners in order.
    pub fn build(self) -> ListenerMulticaster {
        let multicaster = ListenerMulticaster::with_step_name(self.step_name);
        multicaster.set_listeners(self.listeners);
        multicaster
    }
}

//! # Capability-routing listener façade.
//!
//! [`ListenerMulticaster`] owns one broadcast group per capability and routes
//! every registered listener into each group whose capability it has.
//!
//! ## Architecture
//! ```text
//! register(listener)
//!     │
//!     ├─ as_step_listener()      ─► Some ─► step group
//!     ├─ as_item_stream()        ─► Some ─► stream group
//!     ├─ as_chunk_listener()     ─► Some ─► chunk group
//!     ├─ as_item_read_listener() ─► Some ─► read group   [read adapter, ...]
//!     ├─ as_item_write_listener()─► Some ─► write group  [write adapter, ...]
//!     └─ as_repeat_listener()    ─► Some ─► repeat group ◄─── both adapters
//!
//! engine ──► multicaster.after_read(item) ──► read group
//!                                               ├─► read adapter ─► repeat group.after_iteration()
//!                                               └─► user read listeners (registration order)
//! ```
//!
//! ## Rules
//! - A listener joins every group it qualifies for, independently.
//! - A listener with no capability is ignored (no error).
//! - The adapters are registered at construction, so they are always called
//!   before user read/write listeners.
//! - Errors propagate fail-fast and unchanged from the groups.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::builder::MulticasterBuilder;
use crate::adapters::{RepeatListenerItemReadAdapter, RepeatListenerItemWriteAdapter};
use crate::composite::{
    CompositeChunkListener, CompositeItemReadListener, CompositeItemStream,
    CompositeItemWriteListener, CompositeRepeatListener, CompositeStepListener,
};
use crate::error::{DynError, ListenerResult};
use crate::listeners::{
    Capability, ChunkListener, ItemReadListener, ItemStream, ItemWriteListener, Listener,
    RepeatListener, StepListener,
};
use crate::step::{ExecutionContext, ExitStatus, StepExecution};

/// Single listener the engine talks to, broadcasting to all registered ones.
///
/// Create one per step execution, register listeners, then call the
/// capability methods exactly as on a single listener.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use stepcast::{
///     ExitStatus, ListenerMulticaster, ListenerResult, StepExecution, StepListener,
///     impl_listener,
/// };
///
/// struct Verdict(&'static str);
///
/// impl StepListener for Verdict {
///     fn after_step(&self) -> ListenerResult<Option<ExitStatus>> {
///         Ok(Some(ExitStatus::new(self.0)))
///     }
/// }
///
/// impl_listener!(Verdict: StepListener);
///
/// let multicaster = ListenerMulticaster::new();
/// multicaster.register(Arc::new(Verdict("FIRST")));
/// multicaster.register(Arc::new(Verdict("SECOND")));
///
/// multicaster.before_step(&StepExecution::new(1, "load"))?;
/// // The listener registered last has the final word.
/// assert_eq!(multicaster.after_step()?, Some(ExitStatus::new("SECOND")));
/// # Ok::<(), stepcast::ListenerError>(())
/// ```
pub struct ListenerMulticaster {
    step_name: Option<Arc<str>>,
    step_listener: CompositeStepListener,
    stream: CompositeItemStream,
    chunk_listener: CompositeChunkListener,
    item_read_listener: CompositeItemReadListener,
    item_write_listener: CompositeItemWriteListener,
    repeat_listener: Arc<CompositeRepeatListener>,
}

impl ListenerMulticaster {
    /// Creates an unnamed multicaster with no user listeners.
    ///
    /// The read and write groups already hold the repeat adapters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_step_name(None)
    }

    /// Returns a builder for configuring the multicaster.
    #[must_use]
    pub fn builder() -> MulticasterBuilder {
        MulticasterBuilder::new()
    }

    pub(crate) fn with_step_name(step_name: Option<Arc<str>>) -> Self {
        let repeat_listener = Arc::new(CompositeRepeatListener::new());

        let item_read_listener = CompositeItemReadListener::new();
        item_read_listener.register(Arc::new(RepeatListenerItemReadAdapter::new(
            repeat_listener.clone(),
        )));

        let item_write_listener = CompositeItemWriteListener::new();
        item_write_listener.register(Arc::new(RepeatListenerItemWriteAdapter::new(
            repeat_listener.clone(),
        )));

        Self {
            step_name,
            step_listener: CompositeStepListener::new(),
            stream: CompositeItemStream::new(),
            chunk_listener: CompositeChunkListener::new(),
            item_read_listener,
            item_write_listener,
            repeat_listener,
        }
    }

    /// Registers `listener` with every group whose capability it has.
    ///
    /// Returns the capabilities it was registered for, in probe order
    /// ([`Capability::ALL`]). An empty result means the listener was ignored.
    pub fn register(&self, listener: Arc<dyn Listener>) -> Vec<Capability> {
        let mut joined = Vec::with_capacity(Capability::ALL.len());

        if let Some(l) = listener.clone().as_step_listener() {
            self.step_listener.register(l);
            joined.push(Capability::StepLifecycle);
        }
        if let Some(s) = listener.clone().as_item_stream() {
            self.stream.register(s);
            joined.push(Capability::StreamLifecycle);
        }
        if let Some(l) = listener.clone().as_chunk_listener() {
            self.chunk_listener.register(l);
            joined.push(Capability::ChunkBoundary);
        }
        if let Some(l) = listener.clone().as_item_read_listener() {
            self.item_read_listener.register(l);
            joined.push(Capability::ItemRead);
        }
        if let Some(l) = listener.clone().as_item_write_listener() {
            self.item_write_listener.register(l);
            joined.push(Capability::ItemWrite);
        }
        if let Some(l) = listener.clone().as_repeat_listener() {
            self.repeat_listener.register(l);
            joined.push(Capability::Iteration);
        }

        let step = self.step_name.as_deref().unwrap_or("-");
        if joined.is_empty() {
            debug!(listener = listener.name(), step, "listener has no known capability; ignored");
        } else {
            let capabilities: Vec<&str> = joined.iter().map(Capability::as_label).collect();
            debug!(listener = listener.name(), step, ?capabilities, "listener registered");
        }
        joined
    }

    /// Registers each listener in order; same as calling [`register`](Self::register) for each.
    pub fn set_listeners<I>(&self, listeners: I)
    where
        I: IntoIterator<Item = Arc<dyn Listener>>,
    {
        for listener in listeners {
            self.register(listener);
        }
    }

    pub fn step_name(&self) -> Option<&str> {
        self.step_name.as_deref()
    }

    pub fn step_listeners(&self) -> &CompositeStepListener {
        &self.step_listener
    }

    pub fn streams(&self) -> &CompositeItemStream {
        &self.stream
    }

    pub fn chunk_listeners(&self) -> &CompositeChunkListener {
        &self.chunk_listener
    }

    /// Read group; its first member is the repeat adapter.
    pub fn item_read_listeners(&self) -> &CompositeItemReadListener {
        &self.item_read_listener
    }

    /// Write group; its first member is the repeat adapter.
    pub fn item_write_listeners(&self) -> &CompositeItemWriteListener {
        &self.item_write_listener
    }

    pub fn repeat_listeners(&self) -> &CompositeRepeatListener {
        &self.repeat_listener
    }
}

impl Default for ListenerMulticaster {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ListenerMulticaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerMulticaster")
            .field("step_name", &self.step_name)
            .field("step_listeners", &self.step_listener.len())
            .field("streams", &self.stream.len())
            .field("chunk_listeners", &self.chunk_listener.len())
            .field("item_read_listeners", &self.item_read_listener.len())
            .field("item_write_listeners", &self.item_write_listener.len())
            .field("repeat_listeners", &self.repeat_listener.len())
            .finish()
    }
}

impl StepListener for ListenerMulticaster {
    fn before_step(&self, step: &StepExecution) -> ListenerResult {
        self.step_listener.before_step(step)
    }

    fn after_step(&self) -> ListenerResult<Option<ExitStatus>> {
        self.step_listener.after_step()
    }

    fn on_error_in_step(&self, error: &DynError) -> ListenerResult<Option<ExitStatus>> {
        self.step_listener.on_error_in_step(error)
    }
}

impl ItemStream for ListenerMulticaster {
    fn open(&self, ctx: &mut ExecutionContext) -> ListenerResult {
        self.stream.open(ctx)
    }

    fn update(&self, ctx: &mut ExecutionContext) -> ListenerResult {
        self.stream.update(ctx)
    }

    fn close(&self, ctx: &mut ExecutionContext) -> ListenerResult {
        self.stream.close(ctx)
    }
}

impl ChunkListener for ListenerMulticaster {
    fn before_chunk(&self) -> ListenerResult {
        self.chunk_listener.before_chunk()
    }

    fn after_chunk(&self) -> ListenerResult {
        self.chunk_listener.after_chunk()
    }
}

impl ItemReadListener for ListenerMulticaster {
    fn before_read(&self) -> ListenerResult {
        self.item_read_listener.before_read()
    }

    fn after_read(&self, item: &dyn Any) -> ListenerResult {
        self.item_read_listener.after_read(item)
    }

    fn on_read_error(&self, error: &DynError) -> ListenerResult {
        self.item_read_listener.on_read_error(error)
    }
}

impl ItemWriteListener for ListenerMulticaster {
    fn before_write(&self, item: &dyn Any) -> ListenerResult {
        self.item_write_listener.before_write(item)
    }

    fn after_write(&self) -> ListenerResult {
        self.item_write_listener.after_write()
    }

    fn on_write_error(&self, error: &DynError, item: &dyn Any) -> ListenerResult {
        self.item_write_listener.on_write_error(error, item)
    }
}

// Not advertised through `impl_listener!`: a nested multicaster already feeds
// its repeat group from its own read and write adapters.
impl RepeatListener for ListenerMulticaster {
    fn before_iteration(&self) -> ListenerResult {
        self.repeat_listener.before_iteration()
    }

    fn after_iteration(&self) -> ListenerResult {
        self.repeat_listener.after_iteration()
    }

    fn on_iteration_error(&self, error: &DynError) -> ListenerResult {
        self.repeat_listener.on_iteration_error(error)
    }
}

crate::impl_listener!(
    ListenerMulticaster: StepListener,
    ItemStream,
    ChunkListener,
    ItemReadListener,
    ItemWriteListener
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ListenerError;
    use crate::test_support::{Recorder, entries, journal};

    struct Inert;
    crate::impl_listener!(Inert);

    #[test]
    fn test_listener_joins_exactly_its_groups() {
        let j = journal();
        let mc = ListenerMulticaster::new();
        let listener = Recorder::new("a", &j)
            .with_capabilities(&[Capability::StepLifecycle, Capability::ItemWrite])
            .arc();

        let joined = mc.register(listener.clone());

        assert_eq!(joined, [Capability::StepLifecycle, Capability::ItemWrite]);
        assert!(mc.step_listeners().contains(&listener));
        assert!(mc.item_write_listeners().contains(&listener));
        assert!(!mc.streams().contains(&listener));
        assert!(!mc.chunk_listeners().contains(&listener));
        assert!(!mc.item_read_listeners().contains(&listener));
        assert!(!mc.repeat_listeners().contains(&listener));
    }

    #[test]
    fn test_listener_with_all_capabilities_joins_all_groups() {
        let j = journal();
        let mc = ListenerMulticaster::new();
        let listener = Recorder::new("a", &j).arc();

        assert_eq!(mc.register(listener.clone()), Capability::ALL);
        assert_eq!(mc.step_listeners().len(), 1);
        assert_eq!(mc.streams().len(), 1);
        assert_eq!(mc.chunk_listeners().len(), 1);
        assert_eq!(mc.item_read_listeners().len(), 2);
        assert_eq!(mc.item_write_listeners().len(), 2);
        assert_eq!(mc.repeat_listeners().len(), 1);
    }

    #[test]
    fn test_listener_without_capabilities_is_ignored() {
        let mc = ListenerMulticaster::new();

        assert!(mc.register(Arc::new(Inert)).is_empty());
        assert!(mc.step_listeners().is_empty());
        assert!(mc.streams().is_empty());
        assert!(mc.chunk_listeners().is_empty());
        assert_eq!(mc.item_read_listeners().len(), 1, "only the adapter");
        assert_eq!(mc.item_write_listeners().len(), 1, "only the adapter");
        assert!(mc.repeat_listeners().is_empty());
    }

    #[test]
    fn test_calls_follow_registration_order() {
        let j = journal();
        let mc = ListenerMulticaster::new();
        for id in ["a", "b", "c"] {
            mc.register(
                Recorder::new(id, &j)
                    .with_capabilities(&[Capability::ChunkBoundary])
                    .arc(),
            );
        }

        mc.before_chunk().unwrap();
        assert_eq!(entries(&j), ["a.before_chunk", "b.before_chunk", "c.before_chunk"]);
    }

    #[test]
    fn test_after_step_keeps_last_non_none_status() {
        let j = journal();
        let mc = ListenerMulticaster::new();
        let caps = [Capability::StepLifecycle];
        mc.register(Recorder::new("a", &j).with_capabilities(&caps).arc());
        mc.register(
            Recorder::new("b", &j)
                .with_capabilities(&caps)
                .returning(ExitStatus::new("X"))
                .arc(),
        );
        mc.register(Recorder::new("c", &j).with_capabilities(&caps).arc());

        assert_eq!(mc.after_step().unwrap(), Some(ExitStatus::new("X")));
    }

    #[test]
    fn test_repeat_listener_sees_reads_and_writes_through_adapters() {
        let j = journal();
        let mc = ListenerMulticaster::new();
        mc.register(
            Recorder::new("i", &j)
                .with_capabilities(&[Capability::Iteration])
                .arc(),
        );

        let err = ListenerError::stream("bad record");
        mc.before_read().unwrap();
        mc.after_read(&"line-1").unwrap();
        mc.on_read_error(&err).unwrap();
        mc.before_write(&"line-1").unwrap();
        mc.after_write().unwrap();
        mc.on_write_error(&err, &"line-1").unwrap();

        assert_eq!(
            entries(&j),
            [
                "i.before_iteration",
                "i.after_iteration",
                "i.on_iteration_error:stream error: bad record",
                "i.before_iteration",
                "i.after_iteration",
                "i.on_iteration_error:stream error: bad record"
            ]
        );
    }

    #[test]
    fn test_adapters_fire_before_registered_item_listeners() {
        let j = journal();
        let mc = ListenerMulticaster::new();
        mc.register(
            Recorder::new("rw", &j)
                .with_capabilities(&[Capability::ItemRead, Capability::ItemWrite])
                .arc(),
        );
        mc.register(
            Recorder::new("i", &j)
                .with_capabilities(&[Capability::Iteration])
                .arc(),
        );

        mc.after_read(&"x").unwrap();
        mc.before_write(&"y").unwrap();

        assert_eq!(
            entries(&j),
            [
                "i.after_iteration",
                "rw.after_read:x",
                "i.before_iteration",
                "rw.before_write:y"
            ]
        );
    }

    #[test]
    fn test_listener_with_both_item_and_repeat_is_called_twice() {
        let j = journal();
        let mc = ListenerMulticaster::new();
        mc.register(
            Recorder::new("both", &j)
                .with_capabilities(&[Capability::ItemRead, Capability::Iteration])
                .arc(),
        );

        mc.before_read().unwrap();
        assert_eq!(entries(&j), ["both.before_iteration", "both.before_read"]);
    }

    #[test]
    fn test_repeat_events_are_broadcast_directly() {
        let j = journal();
        let mc = ListenerMulticaster::new();
        mc.register(
            Recorder::new("i", &j)
                .with_capabilities(&[Capability::Iteration])
                .arc(),
        );

        mc.before_iteration().unwrap();
        mc.after_iteration().unwrap();
        assert_eq!(entries(&j), ["i.before_iteration", "i.after_iteration"]);
    }

    #[test]
    fn test_failure_skips_rest_and_reaches_caller_unchanged() {
        let j = journal();
        let mc = ListenerMulticaster::new();
        let caps = [Capability::StreamLifecycle];
        mc.register(Recorder::new("a", &j).with_capabilities(&caps).arc());
        mc.register(
            Recorder::new("b", &j)
                .with_capabilities(&caps)
                .failing_on("open")
                .arc(),
        );
        mc.register(Recorder::new("c", &j).with_capabilities(&caps).arc());

        let mut ctx = ExecutionContext::new();
        let err = mc.open(&mut ctx).unwrap_err();

        assert_eq!(entries(&j), ["a.open", "b.open"]);
        assert!(matches!(
            err,
            ListenerError::Callback { ref listener, ref reason } if listener == "b" && reason == "open"
        ));
    }

    #[test]
    fn test_adapter_failure_blocks_item_listeners() {
        let j = journal();
        let mc = ListenerMulticaster::new();
        mc.register(
            Recorder::new("r", &j)
                .with_capabilities(&[Capability::ItemRead])
                .arc(),
        );
        mc.register(
            Recorder::new("i", &j)
                .with_capabilities(&[Capability::Iteration])
                .failing_on("before_iteration")
                .arc(),
        );

        assert!(mc.before_read().is_err());
        assert_eq!(entries(&j), ["i.before_iteration"]);
    }

    #[test]
    fn test_set_listeners_matches_sequential_register() {
        let j1 = journal();
        let listed = ListenerMulticaster::new();
        listed.set_listeners([
            Recorder::new("x", &j1).arc() as Arc<dyn Listener>,
            Recorder::new("y", &j1).arc() as Arc<dyn Listener>,
        ]);

        let j2 = journal();
        let one_by_one = ListenerMulticaster::new();
        one_by_one.register(Recorder::new("x", &j2).arc());
        one_by_one.register(Recorder::new("y", &j2).arc());

        for mc in [&listed, &one_by_one] {
            let mut ctx = ExecutionContext::new();
            mc.before_step(&StepExecution::new(1, "s")).unwrap();
            mc.update(&mut ctx).unwrap();
            mc.before_chunk().unwrap();
            mc.after_read(&1_i32).unwrap();
            mc.after_write().unwrap();
        }

        assert_eq!(entries(&j1), entries(&j2));
        assert_eq!(entries(&j1)[..2], ["x.before_step:s", "y.before_step:s"]);
    }

    #[test]
    fn test_duplicate_registration_is_not_deduplicated() {
        let j = journal();
        let mc = ListenerMulticaster::new();
        let a = Recorder::new("a", &j)
            .with_capabilities(&[Capability::ChunkBoundary])
            .arc();
        mc.register(a.clone());
        mc.register(a);

        mc.after_chunk().unwrap();
        assert_eq!(entries(&j), ["a.after_chunk", "a.after_chunk"]);
    }

    #[test]
    fn test_multicaster_nests_inside_another() {
        let j = journal();
        let inner = Arc::new(ListenerMulticaster::new());
        inner.register(Recorder::new("deep", &j).arc());

        let outer = ListenerMulticaster::new();
        assert_eq!(
            outer.register(inner),
            [
                Capability::StepLifecycle,
                Capability::StreamLifecycle,
                Capability::ChunkBoundary,
                Capability::ItemRead,
                Capability::ItemWrite,
            ]
        );

        outer.before_chunk().unwrap();
        assert_eq!(outer.on_error_in_step(&ListenerError::stream("x")).unwrap(), None);
        outer.before_read().unwrap();
        assert_eq!(
            entries(&j),
            [
                "deep.before_chunk",
                "deep.on_error_in_step:stream error: x",
                "deep.before_iteration",
                "deep.before_read",
            ]
        );
    }

    #[test]
    fn test_nested_multicaster_delivers_item_events_to_repeat_listeners_once() {
        let j = journal();
        let inner = Arc::new(ListenerMulticaster::new());
        inner.register(
            Recorder::new("i", &j)
                .with_capabilities(&[Capability::Iteration])
                .arc(),
        );

        let outer = ListenerMulticaster::new();
        outer.register(inner.clone());
        assert!(
            outer.repeat_listeners().is_empty(),
            "nested multicaster must not join the outer repeat group"
        );

        outer.before_read().unwrap();
        assert_eq!(entries(&j), ["i.before_iteration"]);

        outer.after_write().unwrap();
        assert_eq!(entries(&j), ["i.before_iteration", "i.after_iteration"]);

        // Iteration calls on the facade still reach the inner repeat group.
        inner.on_iteration_error(&ListenerError::stream("x")).unwrap();
        assert_eq!(
            entries(&j),
            [
                "i.before_iteration",
                "i.after_iteration",
                "i.on_iteration_error:stream error: x",
            ]
        );
    }

    #[test]
    fn test_builder_registers_in_order() {
        let j = journal();
        let mc = ListenerMulticaster::builder()
            .with_step_name("load")
            .with_listeners(vec![Recorder::new("a", &j).arc()])
            .with_listener(Recorder::new("b", &j).arc())
            .build();

        assert_eq!(mc.step_name(), Some("load"));
        mc.after_chunk().unwrap();
        assert_eq!(entries(&j), ["a.after_chunk", "b.after_chunk"]);
    }

    #[test]
    fn test_new_has_adapters_only() {
        let mc = ListenerMulticaster::default();
        assert_eq!(mc.step_name(), None);
        assert_eq!(mc.item_read_listeners().len(), 1);
        assert_eq!(mc.item_write_listeners().len(), 1);
        assert!(mc.before_read().is_ok());
        assert!(mc.after_write().is_ok());
        assert_eq!(mc.after_step().unwrap(), None);
    }
}

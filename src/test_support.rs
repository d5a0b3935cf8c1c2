//! Recording listener shared by the unit tests.

use std::any::Any;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    Capability, ChunkListener, DynError, ExecutionContext, ExitStatus, ItemReadListener,
    ItemStream, ItemWriteListener, Listener, ListenerError, ListenerResult, RepeatListener,
    StepExecution, StepListener,
};

/// Shared, ordered log of every callback seen by the recorders of one test.
pub(crate) type Journal = Arc<Mutex<Vec<String>>>;

pub(crate) fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub(crate) fn entries(journal: &Journal) -> Vec<String> {
    journal.lock().clone()
}

/// Renders the item payloads used in tests.
pub(crate) fn describe(item: &dyn Any) -> String {
    if let Some(s) = item.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = item.downcast_ref::<String>() {
        s.clone()
    } else if let Some(n) = item.downcast_ref::<i32>() {
        n.to_string()
    } else {
        "?".to_string()
    }
}

/// Listener that appends `"<id>.<callback>[:<detail>]"` to a journal.
///
/// Takes part in every capability unless narrowed with
/// [`with_capabilities`](Self::with_capabilities). The entry is written before
/// an injected failure is returned.
pub(crate) struct Recorder {
    id: &'static str,
    journal: Journal,
    capabilities: Vec<Capability>,
    fail_on: Option<&'static str>,
    status: Option<ExitStatus>,
}

impl Recorder {
    pub(crate) fn new(id: &'static str, journal: &Journal) -> Self {
        Self {
            id,
            journal: Arc::clone(journal),
            capabilities: Capability::ALL.to_vec(),
            fail_on: None,
            status: None,
        }
    }

    pub(crate) fn with_capabilities(mut self, capabilities: &[Capability]) -> Self {
        self.capabilities = capabilities.to_vec();
        self
    }

    /// Makes the named callback fail with `ListenerError::Callback { listener: id, reason: callback }`.
    pub(crate) fn failing_on(mut self, callback: &'static str) -> Self {
        self.fail_on = Some(callback);
        self
    }

    /// Status returned from `after_step` and `on_error_in_step`.
    pub(crate) fn returning(mut self, status: ExitStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub(crate) fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    fn record(&self, callback: &'static str, detail: Option<String>) -> ListenerResult {
        let entry = match detail {
            Some(detail) => format!("{}.{callback}:{detail}", self.id),
            None => format!("{}.{callback}", self.id),
        };
        self.journal.lock().push(entry);

        if self.fail_on == Some(callback) {
            return Err(ListenerError::callback(self.id, callback));
        }
        Ok(())
    }
}

impl StepListener for Recorder {
    fn before_step(&self, step: &StepExecution) -> ListenerResult {
        self.record("before_step", Some(step.step_name.clone()))
    }

    fn after_step(&self) -> ListenerResult<Option<ExitStatus>> {
        self.record("after_step", None)?;
        Ok(self.status.clone())
    }

    fn on_error_in_step(&self, error: &DynError) -> ListenerResult<Option<ExitStatus>> {
        self.record("on_error_in_step", Some(error.to_string()))?;
        Ok(self.status.clone())
    }
}

impl ItemStream for Recorder {
    fn open(&self, _ctx: &mut ExecutionContext) -> ListenerResult {
        self.record("open", None)
    }

    fn update(&self, ctx: &mut ExecutionContext) -> ListenerResult {
        ctx.put_string(format!("{}.state", self.id), "saved");
        self.record("update", None)
    }

    fn close(&self, _ctx: &mut ExecutionContext) -> ListenerResult {
        self.record("close", None)
    }
}

impl ChunkListener for Recorder {
    fn before_chunk(&self) -> ListenerResult {
        self.record("before_chunk", None)
    }

    fn after_chunk(&self) -> ListenerResult {
        self.record("after_chunk", None)
    }
}

impl ItemReadListener for Recorder {
    fn before_read(&self) -> ListenerResult {
        self.record("before_read", None)
    }

    fn after_read(&self, item: &dyn Any) -> ListenerResult {
        self.record("after_read", Some(describe(item)))
    }

    fn on_read_error(&self, error: &DynError) -> ListenerResult {
        self.record("on_read_error", Some(error.to_string()))
    }
}

impl ItemWriteListener for Recorder {
    fn before_write(&self, item: &dyn Any) -> ListenerResult {
        self.record("before_write", Some(describe(item)))
    }

    fn after_write(&self) -> ListenerResult {
        self.record("after_write", None)
    }

    fn on_write_error(&self, error: &DynError, item: &dyn Any) -> ListenerResult {
        self.record("on_write_error", Some(format!("{error}:{}", describe(item))))
    }
}

impl RepeatListener for Recorder {
    fn before_iteration(&self) -> ListenerResult {
        self.record("before_iteration", None)
    }

    fn after_iteration(&self) -> ListenerResult {
        self.record("after_iteration", None)
    }

    fn on_iteration_error(&self, error: &DynError) -> ListenerResult {
        self.record("on_iteration_error", Some(error.to_string()))
    }
}

impl Listener for Recorder {
    fn name(&self) -> &'static str {
        self.id
    }

    fn as_step_listener(self: Arc<Self>) -> Option<Arc<dyn StepListener>> {
        if self.has(Capability::StepLifecycle) {
            Some(self)
        } else {
            None
        }
    }

    fn as_item_stream(self: Arc<Self>) -> Option<Arc<dyn ItemStream>> {
        if self.has(Capability::StreamLifecycle) {
            Some(self)
        } else {
            None
        }
    }

    fn as_chunk_listener(self: Arc<Self>) -> Option<Arc<dyn ChunkListener>> {
        if self.has(Capability::ChunkBoundary) {
            Some(self)
        } else {
            None
        }
    }

    fn as_item_read_listener(self: Arc<Self>) -> Option<Arc<dyn ItemReadListener>> {
        if self.has(Capability::ItemRead) {
            Some(self)
        } else {
            None
        }
    }

    fn as_item_write_listener(self: Arc<Self>) -> Option<Arc<dyn ItemWriteListener>> {
        if self.has(Capability::ItemWrite) {
            Some(self)
        } else {
            None
        }
    }

    fn as_repeat_listener(self: Arc<Self>) -> Option<Arc<dyn RepeatListener>> {
        if self.has(Capability::Iteration) {
            Some(self)
        } else {
            None
        }
    }
}

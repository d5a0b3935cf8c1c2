//! # Ordered listener group.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::ListenerResult;
use crate::step::ExitStatus;

/// Ordered, append-only collection of listeners of one capability.
///
/// Registration goes through `&self` so a group can be shared (the repeat group
/// is shared between the multicaster and its adapters). Each broadcast works on
/// a snapshot of the members taken when the call starts: a listener registered
/// while a broadcast is running is first called on the next broadcast.
pub struct ListenerGroup<L: ?Sized> {
    members: RwLock<Vec<Arc<L>>>,
}

impl<L: ?Sized> ListenerGroup<L> {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: RwLock::new(Vec::new()),
        }
    }

    /// Appends `listener`; the same listener registered twice is called twice.
    pub fn register(&self, listener: Arc<L>) {
        self.members.write().push(listener);
    }

    pub fn len(&self) -> usize {
        self.members.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.read().is_empty()
    }

    /// Returns `true` if `listener` (compared by pointer identity) is a member.
    pub fn contains<T: ?Sized>(&self, listener: &Arc<T>) -> bool {
        let target = Arc::as_ptr(listener);
        self.members
            .read()
            .iter()
            .any(|m| std::ptr::addr_eq(Arc::as_ptr(m), target))
    }

    /// Returns a snapshot of the members in registration order.
    pub fn members(&self) -> Vec<Arc<L>> {
        self.members.read().clone()
    }

    /// Calls `f` on every member in order, stopping at the first error.
    pub(crate) fn broadcast<F>(&self, mut f: F) -> ListenerResult
    where
        F: FnMut(&L) -> ListenerResult,
    {
        for member in self.members() {
            f(member.as_ref())?;
        }
        Ok(())
    }

    /// Calls `f` on every member in order and keeps the last `Some` returned.
    ///
    /// Stops at the first error like [`broadcast`](Self::broadcast).
    pub(crate) fn fold_status<F>(&self, mut f: F) -> ListenerResult<Option<ExitStatus>>
    where
        F: FnMut(&L) -> ListenerResult<Option<ExitStatus>>,
    {
        let mut status = None;
        for member in self.members() {
            if let Some(next) = f(member.as_ref())? {
                status = Some(next);
            }
        }
        Ok(status)
    }
}

impl<L: ?Sized> Default for ListenerGroup<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> fmt::Debug for ListenerGroup<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGroup")
            .field("len", &self.len())
            .finish()
    }
}

//! Handler table: operation name to handlers in registration order.

use cascade_core::{OperationName, SharedHandler};
use std::collections::BTreeMap;

/// Every key maps to a non-empty vector; keys are only created by a push.
pub(crate) struct HandlerTable<A: ?Sized, T> {
    entries: BTreeMap<OperationName, Vec<SharedHandler<A, T>>>,
}

impl<A: ?Sized, T> HandlerTable<A, T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub(crate) fn push(&mut self, name: OperationName, handler: SharedHandler<A, T>) {
        self.entries.entry(name).or_default().push(handler);
    }

    /// Handlers for `name`, oldest first.
    pub(crate) fn get(&self, name: &str) -> Option<&[SharedHandler<A, T>]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Sorted, since the map is ordered.
    pub(crate) fn names(&self) -> impl Iterator<Item = &OperationName> {
        self.entries.keys()
    }

    pub(crate) fn handler_count(&self, name: &str) -> usize {
        self.get(name).map_or(0, <[_]>::len)
    }
}

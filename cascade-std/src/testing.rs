//! Testing utilities for Cascade.
//!
//! Handler doubles that make dispatch order and fallback behaviour easy to
//! observe.
//!
//! # Features
//!
//! - [`CountingHandler`]: Counts invocations and answers with a fixed value
//! - [`DecliningHandler`]: Counts invocations and always declines
//! - [`FailingHandler`]: Always fails with a fixed message
//! - [`RecordingHandler`]: Appends its id to a shared [`CallLog`]

use cascade_core::{Arguments, BoxError, Handler, HandlerResult, Outcome};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations and handles every call with `value`.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingHandler::new("thumb".to_string());
/// registry.add("resize", counter.clone());
///
/// registry.dispatch("resize", &args)?;
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingHandler<T> {
    count: Arc<AtomicUsize>,
    value: T,
}

impl<T: Clone> CountingHandler<T> {
    /// Create a counting handler answering with `value`.
    pub fn new(value: T) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            value,
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<T: Clone> Clone for CountingHandler<T> {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            value: self.value.clone(),
        }
    }
}

impl<A, T> Handler<A, T> for CountingHandler<T>
where
    A: ?Sized,
    T: Clone + Send + Sync + 'static,
{
    fn call(&self, _args: &A) -> HandlerResult<T> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(Outcome::Handled(self.value.clone()))
    }
}

// ============================================================================
// Declining Handler
// ============================================================================

/// A handler that counts invocations and declines every call.
#[derive(Clone, Default)]
pub struct DecliningHandler {
    count: Arc<AtomicUsize>,
}

impl DecliningHandler {
    /// Create a new declining handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many calls were declined.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<A: ?Sized, T> Handler<A, T> for DecliningHandler {
    fn call(&self, _args: &A) -> HandlerResult<T> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(Outcome::Declined)
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A handler that fails every call with the same message.
#[derive(Clone, Debug)]
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a handler failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<A: ?Sized, T> Handler<A, T> for FailingHandler {
    fn call(&self, _args: &A) -> HandlerResult<T> {
        Err(BoxError::from(self.message.clone()))
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// A shared log of which handlers ran, and with what arguments.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<(usize, Vec<String>)>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of the handlers that ran, in call order.
    pub fn ids(&self) -> Vec<usize> {
        self.lock().iter().map(|(id, _)| *id).collect()
    }

    /// Rendered arguments of every call, in call order.
    pub fn arguments(&self) -> Vec<Vec<String>> {
        self.lock().iter().map(|(_, args)| args.clone()).collect()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn record(&self, id: usize, arguments: Vec<String>) {
        self.lock().push((id, arguments));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(usize, Vec<String>)>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A handler that records its id in a [`CallLog`], then answers with a fixed
/// value or declines.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// registry.add("resize", RecordingHandler::handling(1, &log, "first"));
/// registry.add("resize", RecordingHandler::declining(2, &log));
///
/// registry.dispatch("resize", &args)?;
/// assert_eq!(log.ids(), vec![2, 1]);
/// ```
pub struct RecordingHandler<T> {
    id: usize,
    log: CallLog,
    reply: Option<T>,
}

impl<T> RecordingHandler<T> {
    /// A recording handler that handles every call with `value`.
    pub fn handling(id: usize, log: &CallLog, value: T) -> Self {
        Self {
            id,
            log: log.clone(),
            reply: Some(value),
        }
    }

    /// A recording handler that declines every call.
    pub fn declining(id: usize, log: &CallLog) -> Self {
        Self {
            id,
            log: log.clone(),
            reply: None,
        }
    }
}

impl<A, T> Handler<A, T> for RecordingHandler<T>
where
    A: Arguments + ?Sized,
    T: Clone + Send + Sync + 'static,
{
    fn call(&self, args: &A) -> HandlerResult<T> {
        self.log.record(self.id, args.render());
        Ok(self.reply.clone().into())
    }
}

//! Logging Handler - Observability for individual handlers.

use cascade_core::{Handler, HandlerResult, Logger, Outcome};

/// A Handler wrapper that logs what the inner handler answered.
///
/// With the `tracing` feature the call also runs inside a `handler` span
/// named after the wrapper.
///
/// # Example
///
/// ```rust,ignore
/// use cascade::handlers::LoggingHandler;
///
/// let logged = LoggingHandler::new(resize_png, "png", registry.logger().clone());
/// registry.add("resize", logged);
/// ```
pub struct LoggingHandler<H> {
    inner: H,
    name: &'static str,
    logger: Logger,
}

impl<H> LoggingHandler<H> {
    /// Wrap `inner`, logging through `logger` under `name`.
    pub fn new(inner: H, name: &'static str, logger: Logger) -> Self {
        Self {
            inner,
            name,
            logger,
        }
    }

    /// Get the wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<A, T, H> Handler<A, T> for LoggingHandler<H>
where
    A: ?Sized,
    H: Handler<A, T>,
{
    fn call(&self, args: &A) -> HandlerResult<T> {
        #[cfg(feature = "tracing")]
        let _entered = tracing::debug_span!("handler", name = %self.name).entered();

        let result = self.inner.call(args);
        match &result {
            Ok(Outcome::Handled(_)) => self.logger.debug(format_args!("{} handled", self.name)),
            Ok(Outcome::Declined) => self.logger.debug(format_args!("{} declined", self.name)),
            Err(err) => self.logger.warn(format_args!("{} failed: {err}", self.name)),
        }
        result
    }
}

//! # Handler
//!
//! The callable stored under an operation name. A handler receives the
//! dispatch arguments by reference and answers with an [`Outcome`]:
//! a value, a decline, or an error.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|args: &(String, u32)| Some(args.1 * 2)`
//! 2. **Struct implementation**: `impl Handler<Args, Out> for MyHandler`
//! 3. **Bound extension method**: produced by [`Capabilities::bind`]
//!
//! Handlers are synchronous. Dispatch never holds a lock while a handler
//! runs, so a handler may call back into the registry that invoked it.
//!
//! [`Capabilities::bind`]: crate::Capabilities::bind

use crate::{
    error::BoxError,
    outcome::{IntoOutcome, Outcome},
};
use std::sync::Arc;

/// What a handler hands back to the dispatch loop.
pub type HandlerResult<T> = Result<Outcome<T>, BoxError>;

/// A handler shared between the handler table and dispatch snapshots.
pub type SharedHandler<A, T> = Arc<dyn Handler<A, T>>;

/// A callable registered under an operation name.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle arguments of type `{A}`",
    label = "missing `Handler<{A}, {T}>` implementation",
    note = "Closures taking `&{A}` and returning `Outcome<{T}>` or `Option<{T}>` are handlers."
)]
pub trait Handler<A: ?Sized, T>: Send + Sync + 'static {
    /// Attempts the call.
    fn call(&self, args: &A) -> HandlerResult<T>;
}

// Blanket impl for closures
impl<F, A, T, R> Handler<A, T> for F
where
    A: ?Sized,
    F: Fn(&A) -> R + Send + Sync + 'static,
    R: IntoOutcome<T>,
{
    fn call(&self, args: &A) -> HandlerResult<T> {
        (self)(args).into_outcome()
    }
}

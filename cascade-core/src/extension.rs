//! # Extensions
//!
//! An extension is an object that contributes handlers to a registry. It
//! does so by declaring its capability surface: a list of operation names,
//! each paired with a handler bound to the extension.
//!
//! Extensions that can be configured implement [`Configurable`]. The names it
//! lists, plus [`CONFIGURATION_METHODS`] itself, are never bound as handlers
//! even when the extension reports them among its capabilities.
//!
//! # Registration Sequence
//!
//! 1. The registry builds the extension from a factory.
//! 2. A configuration callback runs against it, if one was given and the
//!    extension is [`Configurable`].
//! 3. [`Extension::use_logger`] receives the registry's [`Logger`].
//! 4. The extension is moved into an `Arc` and asked for its
//!    [`Capabilities`].
//! 5. Every capability outside the configuration names is added.

use crate::{
    handler::{Handler, SharedHandler},
    logger::Logger,
    name::OperationName,
    outcome::IntoOutcome,
};
use std::fmt;
use std::sync::Arc;

/// Name of the method that lists configuration names. Never dispatchable.
pub const CONFIGURATION_METHODS: &str = "configuration_methods";

/// The configuration sub-protocol.
///
/// Configuration happens in place during registration, through the callback
/// handed to the registry, before any capability is collected.
pub trait Configurable {
    /// Names of the getters and setters making up the configuration surface.
    fn configuration_methods(&self) -> &'static [&'static str];

    /// Every name excluded from the capability surface.
    fn excluded_capabilities(&self) -> Vec<&'static str> {
        let mut names = self.configuration_methods().to_vec();
        names.push(CONFIGURATION_METHODS);
        names
    }
}

/// An object that exposes a capability surface.
///
/// Usually implemented through the `#[extension]` attribute macro of the
/// `cascade` crate, which binds every public `&self` method taking one
/// argument.
///
/// # Example
///
/// ```rust,ignore
/// struct Thumbnailer;
///
/// impl Extension<(Image, u32), Image> for Thumbnailer {
///     fn capabilities(self: Arc<Self>) -> Capabilities<(Image, u32), Image> {
///         Capabilities::new().bind("thumb", &self, Self::thumb)
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Extension<{A}, {T}>`",
    label = "missing `Extension` implementation",
    note = "Implement `capabilities` or annotate the impl block with `#[extension]`."
)]
pub trait Extension<A: ?Sized, T>: Send + Sync + 'static {
    /// The operations this extension offers, with handlers bound to it.
    fn capabilities(self: Arc<Self>) -> Capabilities<A, T>;

    /// The configuration sub-protocol, if this extension speaks it.
    fn configuration(&self) -> Option<&dyn Configurable> {
        None
    }

    /// Adopts the registry's logger. Called once per registration.
    fn use_logger(&mut self, _logger: &Logger) {}
}

/// An ordered list of operation names and their handlers.
pub struct Capabilities<A: ?Sized, T> {
    entries: Vec<(OperationName, SharedHandler<A, T>)>,
}

impl<A: ?Sized + 'static, T: 'static> Capabilities<A, T> {
    /// Create an empty capability list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a free-standing handler.
    pub fn with<H: Handler<A, T>>(mut self, name: impl Into<OperationName>, handler: H) -> Self {
        self.push(name, handler);
        self
    }

    /// Add a free-standing handler (mutable version).
    pub fn push<H: Handler<A, T>>(&mut self, name: impl Into<OperationName>, handler: H) {
        self.entries.push((name.into(), Arc::new(handler)));
    }

    /// Add a method of `this` as a handler. The handler keeps `this` alive.
    pub fn bind<X, M, R>(mut self, name: impl Into<OperationName>, this: &Arc<X>, method: M) -> Self
    where
        X: Send + Sync + 'static,
        M: Fn(&X, &A) -> R + Send + Sync + 'static,
        R: IntoOutcome<T>,
    {
        let this = Arc::clone(this);
        self.push(name, move |args: &A| method(&*this, args));
        self
    }

    /// Names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &OperationName> {
        self.entries.iter().map(|(name, _)| name)
    }

    /// Get the number of capabilities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no capabilities.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A: ?Sized + 'static, T: 'static> Default for Capabilities<A, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized, T> IntoIterator for Capabilities<A, T> {
    type Item = (OperationName, SharedHandler<A, T>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<A: ?Sized, T> fmt::Debug for Capabilities<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(name, _)| name))
            .finish()
    }
}

//! Error types for Cascade.
//!
//! - [`DispatchError`] - Everything a dispatch call can fail with
//! - [`BoxError`] - Opaque errors raised by handlers, factories and
//!   configuration callbacks, carried without wrapping

use crate::name::OperationName;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while dispatching a call.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Nothing was ever added under the requested name.
    #[error("function `{name}` not registered with {registry}")]
    NotRegistered {
        /// Identity of the registry that was asked.
        registry: String,
        /// The requested operation.
        name: OperationName,
    },

    /// Every handler registered under the name declined the call.
    #[error(
        "none of the functions registered with {registry} were able to deal with the call \
         {name}({}); you may need to register one that can",
        .arguments.join(", ")
    )]
    Unhandled {
        /// Identity of the registry that was asked.
        registry: String,
        /// The requested operation.
        name: OperationName,
        /// Rendered, truncated arguments of the call.
        arguments: Vec<String>,
    },

    /// A handler failed. The error is the handler's own, untouched.
    #[error(transparent)]
    Handler(BoxError),
}

impl DispatchError {
    /// Returns `true` for [`DispatchError::NotRegistered`].
    pub fn is_not_registered(&self) -> bool {
        matches!(self, Self::NotRegistered { .. })
    }

    /// Returns `true` for [`DispatchError::Unhandled`].
    pub fn is_unhandled(&self) -> bool {
        matches!(self, Self::Unhandled { .. })
    }

    /// The operation name, unless the error came from inside a handler.
    pub fn name(&self) -> Option<&OperationName> {
        match self {
            Self::NotRegistered { name, .. } | Self::Unhandled { name, .. } => Some(name),
            Self::Handler(_) => None,
        }
    }

    /// Gives back the handler's error if this is a [`DispatchError::Handler`].
    pub fn into_handler_error(self) -> Result<BoxError, Self> {
        match self {
            Self::Handler(err) => Ok(err),
            other => Err(other),
        }
    }
}

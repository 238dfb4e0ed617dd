//! # cascade-core
//!
//! Core traits for the Cascade capability registry.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! extensions that only need to describe what they can do, without pulling in
//! the registry implementation from `cascade-std`.
//!
//! # Building Blocks
//!
//! ## Outcome ([`Outcome`])
//!
//! The per-call answer of a handler: `Handled(value)` ends dispatch,
//! `Declined` hands the call to the next handler registered under the same
//! name. Declining is a return value, never an error and never shared state.
//!
//! ## Handler ([`Handler`])
//!
//! A synchronous callable taking the dispatch arguments by reference. Plain
//! closures returning anything that implements [`IntoOutcome`] are handlers.
//!
//! ## Extension ([`Extension`])
//!
//! An object exposing a capability surface. The registry asks it for its
//! [`Capabilities`] instead of inspecting its methods, removes the names of
//! the [`Configurable`] sub-protocol, and binds the rest as handlers.
//!
//! ## Logger ([`Logger`])
//!
//! A named logging handle the registry injects into every extension it
//! registers.
//!
//! # Error Types
//!
//! - [`DispatchError`] - Failures of a dispatch call
//! - [`BoxError`] - Opaque handler, factory and configuration errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod arguments;
mod error;
mod extension;
mod handler;
mod logger;
mod name;
mod outcome;

// Re-exports
pub use arguments::{Arguments, DEFAULT_ARGUMENT_LIMIT, truncate};
pub use error::{BoxError, DispatchError};
pub use extension::{CONFIGURATION_METHODS, Capabilities, Configurable, Extension};
pub use handler::{Handler, HandlerResult, SharedHandler};
pub use logger::Logger;
pub use name::OperationName;
pub use outcome::{IntoOutcome, Outcome};

//! # cascade-std
//!
//! Standard implementations for the Cascade capability registry.
//!
//! This crate provides:
//! - **Dynamic registry**: [`Registry`], [`RegistryBuilder`]
//! - **Standard handlers**: [`LoggingHandler`]
//! - **Codec**: base64 and opaque-object helpers in [`codec`]
//! - **Testing**: handler doubles in [`testing`]
//!
//! [`Registry`]: dynamic::Registry
//! [`RegistryBuilder`]: dynamic::RegistryBuilder
//! [`LoggingHandler`]: handlers::LoggingHandler

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use cascade_core;

// Modules
pub mod codec;
pub mod dynamic;
pub mod handlers;
pub mod testing;

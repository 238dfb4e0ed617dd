//! Dynamic registry.
//!
//! Handlers and extensions are added at runtime, typically during a
//! bootstrap phase, and dispatched by name afterwards.

mod builder;
mod registry;
mod table;

pub use builder::RegistryBuilder;
pub use registry::{RegisteredExtension, Registry};

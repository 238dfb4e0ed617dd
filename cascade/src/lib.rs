//! # cascade - Capability Registry with Fallback Dispatch
//!
//! `cascade` lets independently built extensions register handlers under
//! shared operation names, and lets callers invoke a name without knowing
//! which extension will serve it.
//!
//! Handlers registered later are tried first. A handler that does not apply
//! to the arguments it was given returns [`Outcome::Declined`] and dispatch
//! falls back to the previous registration; a handler error ends dispatch
//! immediately.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cascade::prelude::*;
//!
//! struct Resizer;
//!
//! #[cascade::extension(args = (Image, u32, u32), output = Image)]
//! impl Resizer {
//!     pub fn resize(&self, (image, w, h): &(Image, u32, u32)) -> Option<Image> {
//!         Some(image.scaled(*w, *h))
//!     }
//! }
//!
//! let registry: Registry<(Image, u32, u32), Image> = Registry::builder()
//!     .name("processors")
//!     .build();
//! registry.register_instance(Resizer);
//!
//! let thumb = registry.dispatch("resize", &(image, 100, 100))?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use cascade_core::{
    // Arguments
    Arguments,
    // Error types
    BoxError,
    // Extension
    CONFIGURATION_METHODS,
    Capabilities,
    Configurable,
    DEFAULT_ARGUMENT_LIMIT,
    DispatchError,
    Extension,
    // Handler
    Handler,
    HandlerResult,
    // Outcome
    IntoOutcome,
    // Logging
    Logger,
    // Names
    OperationName,
    Outcome,
    SharedHandler,
};

// Dynamic Registry
pub use cascade_std::dynamic::{RegisteredExtension, Registry, RegistryBuilder};

/// Dynamic registry module.
pub mod dynamic {
    pub use cascade_std::dynamic::{RegisteredExtension, Registry, RegistryBuilder};
}

/// Base64 and opaque-object codec.
pub mod codec {
    pub use cascade_std::codec::{CodecError, decode, decode_opaque, encode, encode_opaque};
}

/// Standard handler wrappers.
pub mod handlers {
    pub use cascade_std::handlers::LoggingHandler;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use cascade_std::testing::*;
}

/// Prelude module - common imports for Cascade.
///
/// # Usage
///
/// ```rust,ignore
/// use cascade::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        // Extensions
        Capabilities,
        Configurable,
        DispatchError,
        Extension,
        // Core traits
        Handler,
        IntoOutcome,
        Logger,
        Outcome,
        // Registry
        Registry,
    };
}

#[cfg(feature = "macros")]
pub use cascade_macros::extension;

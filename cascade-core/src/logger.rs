//! Shared logging handle.
//!
//! Emits through `tracing` when the `tracing` feature is enabled and is a
//! silent no-op otherwise. Every event carries the logger's name as the
//! `logger` field, so an extension that adopted a registry's logger shows up
//! under that registry's name.

use std::fmt::Display;
use std::sync::Arc;

/// A named, cheaply cloneable logging handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    name: Arc<str>,
}

impl Logger {
    /// Create a logger with the given name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
        }
    }

    /// The name attached to every event.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Log at `TRACE` level.
    pub fn trace(&self, message: impl Display) {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(logger = %self.name, "{message}");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = message;
        }
    }

    /// Log at `DEBUG` level.
    pub fn debug(&self, message: impl Display) {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(logger = %self.name, "{message}");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = message;
        }
    }

    /// Log at `INFO` level.
    pub fn info(&self, message: impl Display) {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(logger = %self.name, "{message}");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = message;
        }
    }

    /// Log at `WARN` level.
    pub fn warn(&self, message: impl Display) {
        #[cfg(feature = "tracing")]
        {
            tracing::warn!(logger = %self.name, "{message}");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = message;
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("cascade")
    }
}

//! Registry configuration.

use super::registry::Registry;
use cascade_core::{DEFAULT_ARGUMENT_LIMIT, Logger};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Builder for constructing a Registry.
///
/// # Example
/// ```ignore
/// let registry: Registry<(Image, u32, u32), Image> = Registry::builder()
///     .name("processors")
///     .argument_limit(60)
///     .build();
/// ```
pub struct RegistryBuilder<A: ?Sized, T> {
    name: String,
    logger: Option<Logger>,
    argument_limit: usize,
    _marker: PhantomData<fn(&A) -> T>,
}

impl<A: ?Sized + 'static, T: 'static> RegistryBuilder<A, T> {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            name: "registry".to_string(),
            logger: None,
            argument_limit: DEFAULT_ARGUMENT_LIMIT,
            _marker: PhantomData,
        }
    }

    /// Set the registry name used in its identity and default logger.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Use an existing logger instead of one named after the registry.
    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Set how many characters of each argument appear in unhandled-call
    /// errors.
    pub fn argument_limit(mut self, limit: usize) -> Self {
        self.argument_limit = limit;
        self
    }

    /// Build the empty registry.
    pub fn build(self) -> Registry<A, T> {
        let id = NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed);
        let identity = format!("{}#{}", self.name, id);
        let logger = self.logger.unwrap_or_else(|| Logger::new(&self.name));
        Registry::from_parts(identity, logger, self.argument_limit)
    }
}

impl<A: ?Sized + 'static, T: 'static> Default for RegistryBuilder<A, T> {
    fn default() -> Self {
        Self::new()
    }
}

//! Dynamic registry with last-registered-first fallback dispatch.

use super::{builder::RegistryBuilder, table::HandlerTable};
use cascade_core::{
    Arguments, BoxError, DispatchError, Extension, Handler, Logger, OperationName, Outcome,
    SharedHandler,
};
use std::any::{Any, type_name};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Record of one registered extension, kept for introspection.
#[derive(Clone)]
pub struct RegisteredExtension {
    type_name: &'static str,
    operations: Vec<OperationName>,
    instance: Arc<dyn Any + Send + Sync>,
}

impl RegisteredExtension {
    /// Type name of the extension.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Operations this extension contributed, in declaration order.
    pub fn operations(&self) -> &[OperationName] {
        &self.operations
    }

    /// The extension itself, if it is an `X`.
    pub fn downcast<X: Any + Send + Sync>(&self) -> Option<Arc<X>> {
        Arc::clone(&self.instance).downcast::<X>().ok()
    }
}

impl fmt::Debug for RegisteredExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredExtension")
            .field("type_name", &self.type_name)
            .field("operations", &self.operations)
            .finish_non_exhaustive()
    }
}

struct State<A: ?Sized, T> {
    table: HandlerTable<A, T>,
    extensions: Vec<RegisteredExtension>,
}

/// A registry of handlers dispatched by operation name.
///
/// Several handlers may share a name. [`dispatch`](Registry::dispatch) tries
/// them newest first and returns the first handled value, so a later
/// registration overrides an earlier one for the arguments it accepts and
/// falls back to it for the rest.
///
/// The registry is `Send + Sync`. Registration takes a write lock; dispatch
/// only holds a read lock long enough to snapshot the handlers for a name,
/// so handlers never run under a lock.
///
/// # Example
/// ```ignore
/// let registry: Registry<(Image, u32, u32), Image> = Registry::new();
/// registry.add("resize", |args: &(Image, u32, u32)| Some(args.0.resized(args.1, args.2)));
/// let thumb = registry.dispatch("resize", &(image, 100, 100))?;
/// ```
pub struct Registry<A: ?Sized, T> {
    identity: String,
    logger: Logger,
    argument_limit: usize,
    state: RwLock<State<A, T>>,
}

impl<A: ?Sized + 'static, T: 'static> Registry<A, T> {
    /// Create an empty registry with default settings.
    pub fn new() -> Self {
        RegistryBuilder::new().build()
    }

    /// Start configuring a registry.
    pub fn builder() -> RegistryBuilder<A, T> {
        RegistryBuilder::new()
    }

    pub(crate) fn from_parts(identity: String, logger: Logger, argument_limit: usize) -> Self {
        Self {
            identity,
            logger,
            argument_limit,
            state: RwLock::new(State {
                table: HandlerTable::new(),
                extensions: Vec::new(),
            }),
        }
    }

    /// `name#id`, unique per process.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// The logger handed to every registered extension.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Characters kept per argument in [`DispatchError::Unhandled`].
    pub fn argument_limit(&self) -> usize {
        self.argument_limit
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Append a handler under `name`. Never fails.
    pub fn add<H: Handler<A, T>>(&self, name: impl Into<OperationName>, handler: H) {
        let name = name.into();
        self.logger
            .trace(format_args!("{} adding handler for {name}", self.identity));
        self.write().table.push(name, Arc::new(handler));
    }

    /// Build an extension with `factory` and register its capabilities.
    ///
    /// Constructor arguments are whatever the factory closure captures. A
    /// factory error is returned unchanged and nothing is registered.
    pub fn register<X, F, E>(&self, factory: F) -> Result<Arc<X>, BoxError>
    where
        X: Extension<A, T>,
        F: FnOnce() -> Result<X, E>,
        E: Into<BoxError>,
    {
        let extension = factory().map_err(Into::into)?;
        Ok(self.install(extension))
    }

    /// Like [`register`](Self::register), running `configure` against the
    /// extension before its capabilities are collected.
    ///
    /// `configure` only runs when the extension is
    /// [`Configurable`](cascade_core::Configurable); otherwise it is skipped
    /// with a warning. Its error is returned unchanged and nothing is
    /// registered.
    pub fn register_configured<X, F, E, C, CE>(
        &self,
        factory: F,
        configure: C,
    ) -> Result<Arc<X>, BoxError>
    where
        X: Extension<A, T>,
        F: FnOnce() -> Result<X, E>,
        E: Into<BoxError>,
        C: FnOnce(&mut X) -> Result<(), CE>,
        CE: Into<BoxError>,
    {
        let mut extension = factory().map_err(Into::into)?;
        if extension.configuration().is_some() {
            configure(&mut extension).map_err(Into::into)?;
        } else {
            self.logger.warn(format_args!(
                "{} is not configurable; ignoring configuration for {}",
                type_name::<X>(),
                self.identity
            ));
        }
        Ok(self.install(extension))
    }

    /// Register an already built extension.
    pub fn register_instance<X: Extension<A, T>>(&self, extension: X) -> Arc<X> {
        self.install(extension)
    }

    fn install<X: Extension<A, T>>(&self, mut extension: X) -> Arc<X> {
        extension.use_logger(&self.logger);

        let excluded = extension
            .configuration()
            .map(|configuration| configuration.excluded_capabilities())
            .unwrap_or_default();

        let extension = Arc::new(extension);
        let capabilities = Arc::clone(&extension).capabilities();

        let mut accepted: Vec<(OperationName, SharedHandler<A, T>)> = Vec::new();
        for (name, handler) in capabilities {
            if excluded.iter().any(|excluded| *excluded == name.as_str()) {
                self.logger
                    .trace(format_args!("skipping configuration method {name}"));
                continue;
            }
            accepted.push((name, handler));
        }

        let operations: Vec<OperationName> =
            accepted.iter().map(|(name, _)| name.clone()).collect();
        {
            let mut state = self.write();
            for (name, handler) in accepted {
                state.table.push(name, handler);
            }
            state.extensions.push(RegisteredExtension {
                type_name: type_name::<X>(),
                operations: operations.clone(),
                instance: Arc::clone(&extension) as Arc<dyn Any + Send + Sync>,
            });
        }

        self.logger.debug(format_args!(
            "{} registered {} with functions: {}",
            self.identity,
            type_name::<X>(),
            join(&operations)
        ));
        extension
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Call the newest handler for `name` that does not decline.
    ///
    /// # Errors
    /// - [`DispatchError::NotRegistered`] when nothing was added under `name`.
    /// - [`DispatchError::Handler`] as soon as a handler fails; older handlers
    ///   are not tried.
    /// - [`DispatchError::Unhandled`] when every handler declined.
    pub fn dispatch(&self, name: &str, args: &A) -> Result<T, DispatchError>
    where
        A: Arguments,
    {
        let Some(handlers) = self.snapshot(name) else {
            return Err(DispatchError::NotRegistered {
                registry: self.to_identity_string(),
                name: name.into(),
            });
        };

        for (position, handler) in handlers.iter().enumerate().rev() {
            match handler.call(args) {
                Ok(Outcome::Handled(value)) => return Ok(value),
                Ok(Outcome::Declined) => {
                    self.logger
                        .trace(format_args!("handler {position} for {name} declined"));
                }
                Err(err) => return Err(DispatchError::Handler(err)),
            }
        }

        Err(DispatchError::Unhandled {
            registry: self.to_identity_string(),
            name: name.into(),
            arguments: args.render_truncated(self.argument_limit),
        })
    }

    /// Whether anything was ever added under `name`.
    pub fn handles(&self, name: &str) -> bool {
        self.read().table.get(name).is_some()
    }

    fn snapshot(&self, name: &str) -> Option<Vec<SharedHandler<A, T>>> {
        self.read().table.get(name).map(<[_]>::to_vec)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// All known operation names, sorted.
    pub fn describe(&self) -> Vec<OperationName> {
        self.read().table.names().cloned().collect()
    }

    /// Number of handlers registered under `name`.
    pub fn handler_count(&self, name: &str) -> usize {
        self.read().table.handler_count(name)
    }

    /// Number of registered extensions.
    pub fn extension_count(&self) -> usize {
        self.read().extensions.len()
    }

    /// Registered extensions, oldest first.
    pub fn extensions(&self) -> Vec<RegisteredExtension> {
        self.read().extensions.clone()
    }

    /// The extension at `index` (registration order), if it is an `X`.
    pub fn extension<X: Any + Send + Sync>(&self, index: usize) -> Option<Arc<X>> {
        self.read().extensions.get(index)?.downcast::<X>()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn to_identity_string(&self) -> String {
        format!("Registry({})", self.identity)
    }

    // State is append-only, so a writer that panicked left it consistent.
    fn read(&self) -> RwLockReadGuard<'_, State<A, T>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State<A, T>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A: ?Sized + 'static, T: 'static> Default for Registry<A, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized + 'static, T: 'static> fmt::Display for Registry<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with functions: {}",
            self.to_identity_string(),
            join(&self.describe())
        )
    }
}

impl<A: ?Sized + 'static, T: 'static> fmt::Debug for Registry<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("identity", &self.identity)
            .field("functions", &self.describe())
            .field("extensions", &self.extension_count())
            .finish()
    }
}

fn join(names: &[OperationName]) -> String {
    names
        .iter()
        .map(OperationName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::{Capabilities, Configurable};
    use std::sync::atomic::{AtomicUsize, Ordering};

    type Args = (String, u32);

    fn registry() -> Registry<Args, String> {
        Registry::builder().name("unit").build()
    }

    fn args(text: &str, n: u32) -> Args {
        (text.to_string(), n)
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    #[test]
    fn test_unknown_name_is_not_registered() {
        let registry = registry();
        let err = registry.dispatch("resize", &args("a", 1)).unwrap_err();
        assert!(err.is_not_registered());
        assert!(err.to_string().contains(registry.identity()));
    }

    #[test]
    fn test_single_handler_result() {
        let registry = registry();
        registry.add("repeat", |(text, n): &Args| Some(text.repeat(*n as usize)));
        assert_eq!(registry.dispatch("repeat", &args("ab", 3)).unwrap(), "ababab");
    }

    #[test]
    fn test_newest_handler_wins() {
        let registry = registry();
        let first_calls = Arc::new(AtomicUsize::new(0));
        let counter = first_calls.clone();
        registry.add("label", move |_: &Args| {
            counter.fetch_add(1, Ordering::SeqCst);
            Some("first".to_string())
        });
        registry.add("label", |_: &Args| Some("second".to_string()));

        assert_eq!(registry.dispatch("label", &args("x", 0)).unwrap(), "second");
        assert_eq!(first_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_decline_falls_back_to_older_handler() {
        let registry = registry();
        registry.add("label", |_: &Args| Some("general".to_string()));
        registry.add("label", |(text, _): &Args| {
            text.ends_with(".png").then(|| "png".to_string())
        });

        assert_eq!(registry.dispatch("label", &args("a.png", 0)).unwrap(), "png");
        assert_eq!(registry.dispatch("label", &args("a.gif", 0)).unwrap(), "general");
    }

    #[test]
    fn test_all_declined_is_unhandled() {
        let registry = registry();
        registry.add("label", |_: &Args| None::<String>);
        registry.add("label", |_: &Args| Outcome::<String>::Declined);

        let err = registry.dispatch("label", &args("cat.gif", 7)).unwrap_err();
        let message = err.to_string();
        assert!(err.is_unhandled());
        assert!(message.contains("label"));
        assert!(message.contains(registry.identity()));
        assert!(message.contains("\"cat.gif\", 7"));
    }

    #[test]
    fn test_unhandled_arguments_are_truncated() {
        let registry: Registry<Args, String> = Registry::builder().argument_limit(5).build();
        registry.add("label", |_: &Args| None::<String>);

        match registry.dispatch("label", &args("abcdefghij", 12345678)) {
            Err(DispatchError::Unhandled { arguments, .. }) => {
                assert_eq!(arguments, vec!["\"abcd", "12345"]);
            }
            other => panic!("expected unhandled call, got {other:?}"),
        }
    }

    #[test]
    fn test_handler_error_stops_dispatch() {
        let registry = registry();
        let older_calls = Arc::new(AtomicUsize::new(0));
        let counter = older_calls.clone();
        registry.add("label", move |_: &Args| {
            counter.fetch_add(1, Ordering::SeqCst);
            Some("older".to_string())
        });
        registry.add("label", |_: &Args| -> Result<Outcome<String>, BoxError> {
            Err("corrupt image".into())
        });

        let err = registry.dispatch("label", &args("x", 0)).unwrap_err();
        assert_eq!(err.to_string(), "corrupt image");
        assert!(err.into_handler_error().is_ok());
        assert_eq!(older_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_handler_may_reenter_registry() {
        let registry = Arc::new(registry());
        let inner = Arc::clone(&registry);
        registry.add("outer", move |args: &Args| {
            inner.add("late", |_: &Args| Some("late".to_string()));
            inner.dispatch("late", args).ok()
        });

        assert_eq!(registry.dispatch("outer", &args("x", 0)).unwrap(), "late");
        assert!(registry.handles("late"));
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    #[derive(Default)]
    struct Annotator {
        prefix: String,
        logger: Option<Logger>,
    }

    impl Annotator {
        fn annotate(&self, (text, _): &Args) -> Option<String> {
            Some(format!("{}{}", self.prefix, text))
        }

        fn count(&self, (text, _): &Args) -> Option<String> {
            Some(text.len().to_string())
        }

        fn prefix(&self, _: &Args) -> Option<String> {
            Some(self.prefix.clone())
        }
    }

    impl Configurable for Annotator {
        fn configuration_methods(&self) -> &'static [&'static str] {
            &["prefix", "set_prefix"]
        }
    }

    impl Extension<Args, String> for Annotator {
        fn capabilities(self: Arc<Self>) -> Capabilities<Args, String> {
            Capabilities::new()
                .bind("annotate", &self, Self::annotate)
                .bind("count", &self, Self::count)
                .bind("prefix", &self, Self::prefix)
                .bind("set_prefix", &self, Self::prefix)
                .bind(CONFIG_LISTING, &self, Self::prefix)
        }

        fn configuration(&self) -> Option<&dyn Configurable> {
            Some(self)
        }

        fn use_logger(&mut self, logger: &Logger) {
            self.logger = Some(logger.clone());
        }
    }

    const CONFIG_LISTING: &str = cascade_core::CONFIGURATION_METHODS;

    struct Plain;

    impl Extension<Args, String> for Plain {
        fn capabilities(self: Arc<Self>) -> Capabilities<Args, String> {
            Capabilities::new().with("plain", |_: &Args| Some("plain".to_string()))
        }
    }

    #[test]
    fn test_register_excludes_configuration_methods() {
        let registry = registry();
        let annotator = registry
            .register_configured(
                || Ok::<_, BoxError>(Annotator::default()),
                |annotator: &mut Annotator| {
                    annotator.prefix = "> ".to_string();
                    Ok::<_, BoxError>(())
                },
            )
            .unwrap();

        let described: Vec<String> = registry.describe().iter().map(ToString::to_string).collect();
        assert_eq!(described, vec!["annotate", "count"]);
        assert_eq!(annotator.prefix, "> ");
        assert_eq!(registry.dispatch("annotate", &args("hi", 0)).unwrap(), "> hi");
        assert_eq!(
            registry.extensions()[0].operations(),
            &[OperationName::from("annotate"), OperationName::from("count")]
        );
    }

    #[test]
    fn test_register_shares_logger() {
        let registry = registry();
        let annotator = registry.register_instance(Annotator::default());
        assert_eq!(annotator.logger.as_ref(), Some(registry.logger()));
    }

    #[test]
    fn test_factory_error_registers_nothing() {
        let registry = registry();
        let result = registry.register(|| Err::<Plain, _>(std::io::Error::other("no codec")));
        let err = result.err().expect("factory failure");
        assert!(err.downcast_ref::<std::io::Error>().is_some());
        assert!(registry.describe().is_empty());
        assert_eq!(registry.extension_count(), 0);
    }

    #[test]
    fn test_configure_error_registers_nothing() {
        let registry = registry();
        let result = registry.register_configured(
            || Ok::<_, BoxError>(Annotator::default()),
            |_: &mut Annotator| Err::<(), _>("bad prefix"),
        );
        assert_eq!(result.err().map(|e| e.to_string()), Some("bad prefix".to_string()));
        assert!(registry.describe().is_empty());
    }

    #[test]
    fn test_configure_skipped_for_plain_extension() {
        let registry = registry();
        let configured = Arc::new(AtomicUsize::new(0));
        let seen = configured.clone();
        registry
            .register_configured(
                || Ok::<_, BoxError>(Plain),
                move |_: &mut Plain| {
                    seen.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, BoxError>(())
                },
            )
            .unwrap();
        assert_eq!(configured.load(Ordering::SeqCst), 0);
        assert!(registry.handles("plain"));
    }

    // ------------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------------

    #[test]
    fn test_introspection() {
        let registry = registry();
        registry.register_instance(Plain);
        registry.register_instance(Plain);
        registry.add("zoom", |_: &Args| None::<String>);

        assert_eq!(registry.handler_count("plain"), 2);
        assert_eq!(registry.extension_count(), 2);
        assert!(registry.extension::<Plain>(1).is_some());
        assert!(registry.extension::<Annotator>(0).is_none());
        assert!(registry.extension::<Plain>(5).is_none());
        assert!(registry.extensions()[0].type_name().ends_with("Plain"));

        let rendered = registry.to_string();
        assert!(rendered.starts_with(&format!("Registry({})", registry.identity())));
        assert!(rendered.ends_with("with functions: plain, zoom"));
    }
}

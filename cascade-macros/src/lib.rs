use proc_macro::TokenStream;

mod extension;

/// Implements `cascade::Extension` from an inherent `impl` block.
///
/// Every `pub fn` in the block that takes `&self` plus exactly one argument
/// becomes a capability named after the method. Other methods are left
/// alone.
///
/// # Attribute Arguments
///
/// - `args = Type` (required): the dispatch argument type; methods take `&Type`
/// - `output = Type` (required): the dispatch result type
/// - `configurable`: forward `configuration()` to the type's `Configurable` impl
/// - `loggable`: forward `use_logger` to an inherent `adopt_logger(&mut self, &Logger)`
///
/// # Method Attributes
///
/// - `#[capability(skip)]`: keep a qualifying method out of the surface
/// - `#[capability(name = "other")]`: register under a different name
///
/// The argument type of a bound method is not checked by the macro. A public
/// `&self` method whose argument is not `&Type`, such as an interior-mutability
/// setter `pub fn set_quality(&self, quality: u8)`, fails to satisfy the
/// `Fn(&Self, &Type)` bound of `Capabilities::bind`. Mark it
/// `#[capability(skip)]`; listing it in `Configurable::configuration_methods`
/// only filters it at registration time, after the impl has been generated.
///
/// # Example
///
/// ```rust,ignore
/// #[cascade::extension(args = (Image, u32, u32), output = Image)]
/// impl Resizer {
///     pub fn resize(&self, (image, w, h): &(Image, u32, u32)) -> Option<Image> { ... }
/// }
/// ```
#[proc_macro_attribute]
pub fn extension(attr: TokenStream, item: TokenStream) -> TokenStream {
    extension::extension_impl(attr, item)
}

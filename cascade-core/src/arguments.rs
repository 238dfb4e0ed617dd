//! Positional argument rendering for diagnostics.

use std::fmt::Debug;

/// Maximum number of characters kept per rendered argument in error messages.
pub const DEFAULT_ARGUMENT_LIMIT: usize = 100;

/// Dispatch arguments that can describe themselves, one entry per positional
/// argument.
///
/// Only used to build diagnostics when no handler accepts a call; dispatch
/// itself never looks at the rendering.
///
/// Implemented for `()`, tuples of `Debug` values up to eight elements,
/// and slices, arrays and vectors of `Debug` values.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as dispatch arguments",
    label = "missing `Arguments` implementation",
    note = "Use a tuple of `Debug` values, a slice, or implement `Arguments`."
)]
pub trait Arguments {
    /// Renders every positional argument.
    fn render(&self) -> Vec<String>;

    /// Renders every positional argument, each cut to at most `limit` chars.
    fn render_truncated(&self, limit: usize) -> Vec<String> {
        self.render()
            .into_iter()
            .map(|rendered| truncate(rendered, limit))
            .collect()
    }
}

/// Cuts `rendered` to at most `limit` characters, on a char boundary.
pub fn truncate(mut rendered: String, limit: usize) -> String {
    if let Some((cut, _)) = rendered.char_indices().nth(limit) {
        rendered.truncate(cut);
    }
    rendered
}

impl Arguments for () {
    fn render(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<T: Debug> Arguments for [T] {
    fn render(&self) -> Vec<String> {
        self.iter().map(|arg| format!("{arg:?}")).collect()
    }
}

impl<T: Debug, const N: usize> Arguments for [T; N] {
    fn render(&self) -> Vec<String> {
        self.as_slice().render()
    }
}

impl<T: Debug> Arguments for Vec<T> {
    fn render(&self) -> Vec<String> {
        self.as_slice().render()
    }
}

macro_rules! impl_tuple_arguments {
    ($($ty:ident => $idx:tt),+) => {
        impl<$($ty: Debug),+> Arguments for ($($ty,)+) {
            fn render(&self) -> Vec<String> {
                vec![$(format!("{:?}", self.$idx)),+]
            }
        }
    };
}

impl_tuple_arguments!(A0 => 0);
impl_tuple_arguments!(A0 => 0, A1 => 1);
impl_tuple_arguments!(A0 => 0, A1 => 1, A2 => 2);
impl_tuple_arguments!(A0 => 0, A1 => 1, A2 => 2, A3 => 3);
impl_tuple_arguments!(A0 => 0, A1 => 1, A2 => 2, A3 => 3, A4 => 4);
impl_tuple_arguments!(A0 => 0, A1 => 1, A2 => 2, A3 => 3, A4 => 4, A5 => 5);
impl_tuple_arguments!(A0 => 0, A1 => 1, A2 => 2, A3 => 3, A4 => 4, A5 => 5, A6 => 6);
impl_tuple_arguments!(A0 => 0, A1 => 1, A2 => 2, A3 => 3, A4 => 4, A5 => 5, A6 => 6, A7 => 7);

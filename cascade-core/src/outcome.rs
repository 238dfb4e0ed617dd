//! Handler outcomes and conversions into them.

use crate::error::BoxError;

/// The answer a handler gives to one dispatch attempt.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    /// The handler produced a value; dispatch stops here.
    Handled(T),
    /// The handler does not apply to these arguments; dispatch moves on to
    /// the next handler.
    ///
    /// A handler that declines is expected to have left no side effects
    /// behind. The registry cannot check this.
    Declined,
}

impl<T> Outcome<T> {
    /// Returns `true` if the handler produced a value.
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }

    /// Returns `true` if the handler declined.
    pub fn is_declined(&self) -> bool {
        matches!(self, Self::Declined)
    }

    /// Converts into an `Option`, dropping the distinction to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Handled(value) => Some(value),
            Self::Declined => None,
        }
    }

    /// Maps the handled value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Handled(value) => Outcome::Handled(f(value)),
            Self::Declined => Outcome::Declined,
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Handled(value),
            None => Self::Declined,
        }
    }
}

/// Trait for converting a handler's return value into an [`Outcome`].
///
/// # Default Implementations
///
/// - `Outcome<T>` → As is
/// - `Option<T>` → `Some` = Handled, `None` = Declined
/// - `Result<O, E>` → Delegates to inner `O` or propagates the error
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be turned into an `Outcome<{T}>`",
    label = "missing `IntoOutcome<{T}>` implementation",
    note = "Handlers return `Outcome<T>`, `Option<T>`, or a `Result` wrapping either."
)]
pub trait IntoOutcome<T> {
    /// Convert the return value into an outcome or an error.
    fn into_outcome(self) -> Result<Outcome<T>, BoxError>;
}

impl<T> IntoOutcome<T> for Outcome<T> {
    fn into_outcome(self) -> Result<Outcome<T>, BoxError> {
        Ok(self)
    }
}

impl<T> IntoOutcome<T> for Option<T> {
    fn into_outcome(self) -> Result<Outcome<T>, BoxError> {
        Ok(self.into())
    }
}

impl<T, O, E> IntoOutcome<T> for Result<O, E>
where
    O: IntoOutcome<T>,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<Outcome<T>, BoxError> {
        match self {
            Ok(inner) => inner.into_outcome(),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_conversion() {
        let handled: Outcome<i32> = Some(3).into_outcome().unwrap();
        assert_eq!(handled, Outcome::Handled(3));

        let declined: Outcome<i32> = None.into_outcome().unwrap();
        assert_eq!(declined, Outcome::Declined);
    }

    #[test]
    fn test_result_conversion() {
        let ok: Result<Option<&str>, std::io::Error> = Ok(None);
        let outcome: Outcome<&str> = ok.into_outcome().unwrap();
        assert!(outcome.is_declined());

        let err: Result<Outcome<u8>, std::io::Error> =
            Err(std::io::Error::other("intentional failure"));
        let err = IntoOutcome::<u8>::into_outcome(err).unwrap_err();
        assert_eq!(err.to_string(), "intentional failure");
    }

    #[test]
    fn test_map_and_into_option() {
        let outcome = Outcome::Handled(2).map(|v| v * 10);
        assert!(outcome.is_handled());
        assert_eq!(outcome.into_option(), Some(20));
        assert_eq!(Outcome::<u8>::Declined.map(|v| v + 1).into_option(), None);
    }
}

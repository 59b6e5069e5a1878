//! The success/failure union and its combinators.
//!
//! Every transform is a composition of [`Result::when`], which is the one
//! place an owned value is split by variant. Borrowing inspectors go through
//! [`Result::as_ref`] first and then use `when` on the borrowed view.

use std::convert::identity;
use std::fmt;

use crate::nothing::{NOTHING, Nothing};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
enum Repr<S, F> {
    Success(S),
    Failure(F),
}

/// Outcome of an operation: either a success carrying a value of type `S`
/// or a failure carrying an error of type `F`.
///
/// Values are immutable once built. The variant is private, so a `Result`
/// only comes from [`Result::success`], [`Result::failure`], the catching
/// factories, or a `std::result::Result`.
///
/// Equality, ordering and hashing compare the variant and then the payload
/// structurally, so nested containers compare by content.
#[must_use = "this `Result` may be a failure, which should be handled"]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Result<S, F>(Repr<S, F>);

impl<S, F> Result<S, F> {
    /// Build a success holding `value`.
    pub const fn success(value: S) -> Self {
        Self(Repr::Success(value))
    }

    /// Build a failure holding `error`.
    pub const fn failure(error: F) -> Self {
        Self(Repr::Failure(error))
    }

    /// Run exactly one of the two functions, depending on the variant, and
    /// return what it returns.
    #[must_use]
    pub fn when<R>(self, success: impl FnOnce(S) -> R, failure: impl FnOnce(F) -> R) -> R {
        match self.0 {
            Repr::Success(value) => success(value),
            Repr::Failure(error) => failure(error),
        }
    }

    /// Borrow both payloads.
    pub const fn as_ref(&self) -> Result<&S, &F> {
        match &self.0 {
            Repr::Success(value) => Result::success(value),
            Repr::Failure(error) => Result::failure(error),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.as_ref().when(|_| true, |_| false)
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The value if this is a success.
    #[must_use]
    pub fn maybe_value(&self) -> Option<&S> {
        self.as_ref().into_maybe_value()
    }

    /// The error if this is a failure.
    #[must_use]
    pub fn maybe_error(&self) -> Option<&F> {
        self.as_ref().into_maybe_error()
    }

    #[must_use]
    pub fn into_maybe_value(self) -> Option<S> {
        self.when(Some, |_| None)
    }

    #[must_use]
    pub fn into_maybe_error(self) -> Option<F> {
        self.when(|_| None, Some)
    }

    /// Hand the value back, or the stored error as `Err` so it can travel
    /// with `?`.
    ///
    /// The error is moved out as is; it is never wrapped or copied.
    pub fn value_or_throw(self) -> std::result::Result<S, F> {
        self.when(Ok, Err)
    }

    /// The value, or `default` for a failure.
    #[must_use]
    pub fn value_or(self, default: S) -> S {
        self.when(identity, |_| default)
    }

    /// The value, or one computed from the error.
    #[must_use]
    pub fn value_or_else(self, recover: impl FnOnce(F) -> S) -> S {
        self.when(identity, recover)
    }

    /// Transform the value of a success. Failures pass through untouched.
    pub fn map<T>(self, transform: impl FnOnce(S) -> T) -> Result<T, F> {
        self.when(|value| Result::success(transform(value)), Result::failure)
    }

    /// Transform the error of a failure. Successes pass through untouched.
    pub fn map_error<G>(self, transform: impl FnOnce(F) -> G) -> Result<S, G> {
        self.when(Result::success, |error| Result::failure(transform(error)))
    }

    /// Transform whichever payload is present, keeping the variant.
    pub fn map_when<T, G>(
        self,
        success: impl FnOnce(S) -> T,
        failure: impl FnOnce(F) -> G,
    ) -> Result<T, G> {
        self.when(
            |value| Result::success(success(value)),
            |error| Result::failure(failure(error)),
        )
    }

    /// Decide a new outcome from the value of a success. A failure is
    /// returned unchanged.
    pub fn map_to_result<T>(self, next: impl FnOnce(S) -> Result<T, F>) -> Result<T, F> {
        self.when(next, Result::failure)
    }

    /// Alias of [`Result::map_to_result`].
    pub fn flat_map<T>(self, next: impl FnOnce(S) -> Result<T, F>) -> Result<T, F> {
        self.map_to_result(next)
    }

    /// Decide a new outcome from the error of a failure. A success is
    /// returned unchanged.
    pub fn map_error_to_result<G>(self, recover: impl FnOnce(F) -> Result<S, G>) -> Result<S, G> {
        self.when(Result::success, recover)
    }

    /// Alias of [`Result::map_error_to_result`].
    pub fn flat_map_error<G>(self, recover: impl FnOnce(F) -> Result<S, G>) -> Result<S, G> {
        self.map_error_to_result(recover)
    }

    /// Decide a new outcome from whichever payload is present. Both branches
    /// produce the same result type and either may flip the variant.
    pub fn map_to_result_when<T, G>(
        self,
        success: impl FnOnce(S) -> Result<T, G>,
        failure: impl FnOnce(F) -> Result<T, G>,
    ) -> Result<T, G> {
        self.when(success, failure)
    }

    /// Alias of [`Result::map_to_result_when`].
    pub fn flat_map_when<T, G>(
        self,
        success: impl FnOnce(S) -> Result<T, G>,
        failure: impl FnOnce(F) -> Result<T, G>,
    ) -> Result<T, G> {
        self.map_to_result_when(success, failure)
    }
}

impl<S: Clone, F: Clone> Result<&S, &F> {
    /// Clone the borrowed payload into an owned result.
    pub fn cloned(self) -> Result<S, F> {
        self.map_when(S::clone, F::clone)
    }
}

impl<S, F> Result<Result<S, F>, F> {
    /// Collapse a success that itself holds a result.
    pub fn flatten(self) -> Result<S, F> {
        self.map_to_result(identity)
    }
}

impl<F> Result<Nothing, F> {
    /// A success with no payload.
    pub const fn success_nothing() -> Self {
        Self::success(NOTHING)
    }
}

impl<S, F> From<std::result::Result<S, F>> for Result<S, F> {
    fn from(result: std::result::Result<S, F>) -> Self {
        result.map_or_else(Self::failure, Self::success)
    }
}

impl<S, F> From<Result<S, F>> for std::result::Result<S, F> {
    fn from(result: Result<S, F>) -> Self {
        result.value_or_throw()
    }
}

/// Collect successes until the first failure, which becomes the outcome.
impl<S, F, C: FromIterator<S>> FromIterator<Result<S, F>> for Result<C, F> {
    fn from_iter<I: IntoIterator<Item = Result<S, F>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Result::value_or_throw)
            .collect::<std::result::Result<C, F>>()
            .into()
    }
}

impl<S: fmt::Debug, F: fmt::Debug> fmt::Debug for Result<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (variant, field, payload) = self.as_ref().when(
            |value| ("success", "value", value as &dyn fmt::Debug),
            |error| ("failure", "error", error as &dyn fmt::Debug),
        );
        write!(
            f,
            "Result<{}, {}>.{variant}({field}: {payload:?})",
            short_type_name::<S>(),
            short_type_name::<F>(),
        )
    }
}

impl<S: fmt::Display, F: fmt::Display> fmt::Display for Result<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (variant, field, payload) = self.as_ref().when(
            |value| ("success", "value", value as &dyn fmt::Display),
            |error| ("failure", "error", error as &dyn fmt::Display),
        );
        write!(f, "{variant}({field}: {payload})")
    }
}

/// Type name with module paths removed, e.g. `Vec<String>` rather than
/// `alloc::vec::Vec<alloc::string::String>`.
fn short_type_name<T: ?Sized>() -> String {
    fn last_segment(path: &str) -> &str {
        path.rsplit("::").next().unwrap_or(path)
    }

    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut path = String::new();

    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            path.push(ch);
        } else {
            out.push_str(last_segment(&path));
            path.clear();
            out.push(ch);
        }
    }
    out.push_str(last_segment(&path));

    out
}

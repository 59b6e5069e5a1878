//! Build a [`Result`] by running a computation that may fail.
//!
//! A raised condition in Rust is an unwinding panic, and its kind is the
//! type of the panic payload. [`catching`] runs a closure once and turns a
//! panic whose payload is an `E` into a failure. Any other payload keeps
//! unwinding past the call with the original payload.
//!
//! [`catching_any`] is the form without a requested kind. It converts every
//! unwinding panic into a [`Panic`], which is the broadest category Rust
//! offers. Panics under `panic = "abort"` cannot be caught by either form.
//!
//! [`try_catching`] is the same filter over `anyhow::Error` values instead of
//! panics: an error that downcasts to `E` becomes a failure and anything else
//! is returned as the outer `Err`.
//!
//! With the `async` feature each factory has a future-based twin that polls
//! the given future to completion. No timeout, retry or cancellation policy is
//! added.

use std::any::{Any, type_name};
use std::panic::{self, UnwindSafe};

use crate::error::Panic;
use crate::result::Result;

/// Run `closure` once, converting a panic with an `E` payload into a failure.
///
/// Panics with any other payload are resumed unchanged.
pub fn catching<T, E: Any>(closure: impl FnOnce() -> T + UnwindSafe) -> Result<T, E> {
    panic::catch_unwind(closure).map_err(claim::<E>).into()
}

/// Run `closure` once, converting any panic into a failure.
pub fn catching_any<T>(closure: impl FnOnce() -> T + UnwindSafe) -> Result<T, Panic> {
    panic::catch_unwind(closure).map_err(wrap).into()
}

/// Run `closure` once, converting a returned error of type `E` into a
/// failure.
///
/// Errors of any other type are handed back as the outer `Err`, untouched.
pub fn try_catching<T, E>(
    closure: impl FnOnce() -> anyhow::Result<T>,
) -> anyhow::Result<Result<T, E>>
where
    E: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
{
    absorb(closure())
}

/// Future-based [`catching`].
#[cfg(feature = "async")]
pub async fn catching_async<T, E: Any>(
    future: impl Future<Output = T> + UnwindSafe,
) -> Result<T, E> {
    use futures::FutureExt;

    future.catch_unwind().await.map_err(claim::<E>).into()
}

/// Future-based [`catching_any`].
#[cfg(feature = "async")]
pub async fn catching_any_async<T>(
    future: impl Future<Output = T> + UnwindSafe,
) -> Result<T, Panic> {
    use futures::FutureExt;

    future.catch_unwind().await.map_err(wrap).into()
}

/// Future-based [`try_catching`].
#[cfg(feature = "async")]
pub async fn try_catching_async<T, E>(
    future: impl Future<Output = anyhow::Result<T>>,
) -> anyhow::Result<Result<T, E>>
where
    E: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
{
    absorb(future.await)
}

/// Take the payload if it is an `E`, otherwise keep unwinding.
fn claim<E: Any>(payload: Box<dyn Any + Send>) -> E {
    match payload.downcast::<E>() {
        Ok(error) => {
            tracing::debug!(kind = type_name::<E>(), "caught panic as failure");
            *error
        }
        Err(payload) => {
            tracing::trace!(kind = type_name::<E>(), "panic payload not claimed, resuming");
            panic::resume_unwind(payload)
        }
    }
}

fn wrap(payload: Box<dyn Any + Send>) -> Panic {
    let panic = Panic::new(payload);
    tracing::debug!(reason = panic.message(), "caught panic as failure");
    panic
}

fn absorb<T, E>(outcome: anyhow::Result<T>) -> anyhow::Result<Result<T, E>>
where
    E: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
{
    match outcome {
        Ok(value) => Ok(Result::success(value)),
        Err(error) => match error.downcast::<E>() {
            Ok(error) => {
                tracing::debug!(kind = type_name::<E>(), %error, "caught error as failure");
                Ok(Result::failure(error))
            }
            Err(error) => {
                tracing::trace!(kind = type_name::<E>(), %error, "error not claimed, propagating");
                Err(error)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use std::panic::panic_any;

    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Marker(u32);

    #[test]
    fn normal_return_is_success() {
        let result = catching::<_, Marker>(|| "done");
        assert_eq!(result.maybe_value(), Some(&"done"));
    }

    #[test]
    fn matching_payload_is_failure() {
        let result = catching::<u8, Marker>(|| panic_any(Marker(3)));
        assert_eq!(result.into_maybe_error(), Some(Marker(3)));
    }

    #[test]
    fn other_payload_keeps_unwinding() {
        let outer = panic::catch_unwind(|| catching::<u8, Marker>(|| panic_any(9_i64)));
        let payload = outer.expect_err("i64 payload should not be caught");
        assert_eq!(payload.downcast_ref::<i64>(), Some(&9));
    }

    #[test]
    fn any_panic_message_is_kept() {
        let result = catching_any::<u8>(|| panic!("bad state {}", 7));
        let panic = result.into_maybe_error().expect("should be a failure");
        assert_eq!(panic.message(), Some("bad state 7"));
    }

    #[test]
    fn absorb_filters_by_type() {
        #[derive(Debug, thiserror::Error)]
        #[error("marker")]
        struct Wanted;

        let caught = absorb::<u8, Wanted>(Err(Wanted.into())).expect("should be absorbed");
        assert!(caught.is_failure());

        let passed = absorb::<u8, Wanted>(Err(anyhow::anyhow!("other")));
        assert_eq!(passed.expect_err("should pass through").to_string(), "other");
    }
}

//! Error types produced by the catching factories.

use std::any::Any;

/// A panic caught by [`catching_any`](crate::catching_any).
///
/// Holds the original payload so it can be inspected or re-raised. Payloads
/// created by `panic!` with a message are `&str` or `String`; their text is
/// available through [`Panic::message`].
#[derive(Debug, thiserror::Error)]
#[error("panicked: {}", .message.as_deref().unwrap_or("non-string payload"))]
pub struct Panic {
    message: Option<String>,
    payload: Box<dyn Any + Send>,
}

impl Panic {
    /// Wrap a payload obtained from `catch_unwind`.
    #[must_use]
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned());

        Self { message, payload }
    }

    /// Panic message, if the payload was a string.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Borrow the payload as a concrete type.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Take back the raw payload.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Continue unwinding with the original payload.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

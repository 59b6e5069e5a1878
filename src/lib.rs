//! Result union - an explicit alternative to panics and ad hoc error plumbing.
//!
//! This library provides:
//! - [`Result`], an immutable success/failure union with a closed set of
//!   combinators built on a single branching accessor, [`Result::when`]
//! - [`Nothing`], the payload for successes that carry no value
//! - catching factories that run a fallible computation once and turn a
//!   chosen kind of failure into a [`Result`]
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  ┌─────────────┐
//! │  catching   │  │  success /  │
//! │  factories  │  │  failure    │
//! └──────┬──────┘  └──────┬──────┘
//!        │                │
//!        └───────┬────────┘
//!                │
//!         ┌──────┴──────┐      map / map_error / map_when
//!         │   Result    │ ───▶ map_to_result / map_error_to_result
//!         └──────┬──────┘      map_to_result_when
//!                │
//!              when
//!                │
//!     value  or  error  (value_or_throw, maybe_value, maybe_error)
//! ```
//!
//! # Features
//!
//! - `async` (default): future-based catching factories.
//! - `serde` (default): `Serialize`/`Deserialize` for [`Result`] and [`Nothing`].

pub mod catching;
pub mod error;
pub mod nothing;
pub mod result;

pub use catching::{catching, catching_any, try_catching};
#[cfg(feature = "async")]
pub use catching::{catching_any_async, catching_async, try_catching_async};
pub use error::Panic;
pub use nothing::{NOTHING, Nothing};
pub use result::Result;

//! Unit placeholder for successes that carry no payload.

use std::fmt;

/// A value with no information, used as the success type when an operation
/// has nothing meaningful to return.
///
/// The private field keeps callers from constructing it directly; the one
/// value is [`NOTHING`] (or [`Nothing::instance`]). It is zero-sized, so every
/// copy is indistinguishable from every other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nothing(());

/// The only `Nothing` value.
pub const NOTHING: Nothing = Nothing(());

impl Nothing {
    /// Get the `Nothing` value.
    #[must_use]
    pub const fn instance() -> Self {
        NOTHING
    }
}

impl Default for Nothing {
    fn default() -> Self {
        NOTHING
    }
}

impl From<()> for Nothing {
    fn from((): ()) -> Self {
        NOTHING
    }
}

impl From<Nothing> for () {
    fn from(_: Nothing) -> Self {}
}

impl fmt::Display for Nothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Nothing")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Nothing {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_unit_struct("Nothing")
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Nothing {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <() as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

//! Common ID Types
//!
//! Type-safe, process-local sequential IDs for in-memory entities.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

/// Generic typed ID wrapper around a `u64`
///
/// IDs of different entity kinds cannot be mixed up, and they order
/// by the sequence they were issued in.
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type SessionId = Id<markers::Session>;
/// let id = SessionId::from_raw(7);
/// assert_eq!(id.value(), 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id<T> {
    value: u64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap an existing raw value (e.g. parsed from a request path)
    pub const fn from_raw(value: u64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying value
    pub const fn value(&self) -> u64 {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<u64> for Id<T> {
    fn from(value: u64) -> Self {
        Self::from_raw(value)
    }
}

impl<T> From<Id<T>> for u64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::from_raw)
    }
}

/// Monotonic ID generator
///
/// Safe to share between threads; every call to [`IdSequence::next`]
/// returns a distinct, strictly larger ID than any earlier call.
pub struct IdSequence<T> {
    next: AtomicU64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> IdSequence<T> {
    /// Create a sequence whose first ID is `0`
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
            _marker: PhantomData,
        }
    }

    /// Issue the next ID
    pub fn next(&self) -> Id<T> {
        Id::from_raw(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl<T> Default for IdSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for puzzle session IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Session;
}

/// Type aliases for common IDs
pub type SessionId = Id<markers::Session>;

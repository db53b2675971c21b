//! A list type which is guaranteed to hold at least one element, for the whole of its lifetime.
//!
//! # Purpose
//! Plenty of data is only valid when there is at least one of it: the arguments to a `min`, the
//! segments of a path, the recipients of a message. Representing that with a [`Vec`] leaves every
//! consumer checking for emptiness (or forgetting to). [`NonEmptyList`] moves that check to the
//! points where a list is built or shrunk, after which [`head`](collections::NonEmptyList::head) and
//! [`last`](collections::NonEmptyList::last) are infallible.
//!
//! # Method
//! [`NonEmptyList`] doesn't reimplement array growth. It wraps a private [`Vec`] and only exposes
//! the operations that have been checked against the invariant, rather than inheriting every
//! mutation of the backing storage and trying to guard them after the fact. Read-only access is
//! forwarded to the backing slice.
//!
//! # Error Handling
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs that implement
//! [`Error`](std::error::Error). Every fallible method validates its arguments before touching the
//! list, so a failed call never leaves a partial mutation behind. Indexing with `[]` is the backing
//! slice's and panics like it, while [`at`](collections::NonEmptyList::at) returns the error instead.
//!
//! # Logging
//! Rejected operations are reported as [`tracing`] events at the `debug` level and tail cache
//! activity at the `trace` level. Nothing is printed unless the application installs a subscriber.
//!
//! # Dependencies
//! This crate depends on some derive macros for its error types, because they're helpful and remove
//! the need for some very repetitive programming. Serde support is behind the `serde` feature.
//!
//! [`NonEmptyList`]: collections::NonEmptyList
// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

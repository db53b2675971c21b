//! General-purpose collection types.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves writing some of the more repetitive read-only functionality. Anything that could break a
//! type's invariants is only reachable through its own methods.

#[cfg(feature = "non-empty")]
pub mod non_empty;

#[cfg(feature = "non-empty")]
#[doc(inline)]
pub use non_empty::NonEmptyList;

//! A module containing [`NonEmptyList`] and associated types.
//!
//! Errors are split by cause, following the rules a NonEmptyList enforces: [`InvalidArgument`]
//! for absent values or empty sources, [`WouldEmpty`] for removals that would leave no items,
//! [`IndexOutOfBounds`] and [`RangeOutOfBounds`] for positions outside the list, and
//! [`Unsupported`] for [`clear`](NonEmptyList::clear). Methods that can fail more than one way
//! return a union of the relevant errors, and every error converts into [`Error`].
//!
//! Owned iteration uses [`IntoIter`], a re-export of [`std::vec::IntoIter`].
//! [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for
//! borrowed iteration.
//!
//! [`NonEmptyList`] is also re-exported under the parent module.

mod error;
mod iter;
mod macros;
mod non_empty_list;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::*;
pub use iter::*;
pub use non_empty_list::*;

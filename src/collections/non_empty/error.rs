use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, From, IsVariant, TryInto};

#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, RangeOutOfBounds};

/// The reason an argument was rejected by a [`NonEmptyList`](super::NonEmptyList) constructor or
/// insertion method.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum ArgumentReason {
    #[display("the first item is absent")]
    AbsentFirst,
    #[display("the item is absent")]
    AbsentValue,
    #[display("the item at position {index} is absent")]
    AbsentItem { index: usize },
    #[display("the source sequence is absent")]
    AbsentSource,
    #[display("the source sequence is empty")]
    EmptySource,
    #[display("the range to add is empty")]
    EmptyRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidArgument {
    pub reason: ArgumentReason,
}

impl InvalidArgument {
    pub(crate) const fn new(reason: ArgumentReason) -> InvalidArgument {
        InvalidArgument { reason }
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid argument: {}!", self.reason)
    }
}

impl StdError for InvalidArgument {}

/// The requested removal would leave the list without any elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WouldEmpty {
    pub op: &'static str,
}

impl Display for WouldEmpty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot {}: would empty the NonEmptyList!", self.op)
    }
}

impl StdError for WouldEmpty {}

/// The operation can never succeed on a NonEmptyList.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unsupported {
    pub op: &'static str,
}

impl Display for Unsupported {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot {} a NonEmptyList!", self.op)
    }
}

impl StdError for Unsupported {}

#[derive(Debug, Display, derive_more::Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum RemoveAtError {
    IndexOutOfBounds(IndexOutOfBounds),
    WouldEmpty(WouldEmpty),
}

#[derive(Debug, Display, derive_more::Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum RemoveRangeError {
    RangeOutOfBounds(RangeOutOfBounds),
    WouldEmpty(WouldEmpty),
}

/// The broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An absent value, or an empty sequence where a non-empty one was required.
    InvalidArgument,
    /// The mutation would break the non-empty invariant.
    InvalidState,
    /// A position or range outside of the list's bounds.
    IndexOutOfRange,
    /// The operation is inexpressible for a non-empty list.
    Unsupported,
}

/// Any error produced by this module, for callers that want to propagate them uniformly with `?`.
#[derive(Debug, Display, derive_more::Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    InvalidArgument(InvalidArgument),
    WouldEmpty(WouldEmpty),
    IndexOutOfBounds(IndexOutOfBounds),
    RangeOutOfBounds(RangeOutOfBounds),
    Unsupported(Unsupported),
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::WouldEmpty(_) => ErrorKind::InvalidState,
            Error::IndexOutOfBounds(_) | Error::RangeOutOfBounds(_) => ErrorKind::IndexOutOfRange,
            Error::Unsupported(_) => ErrorKind::Unsupported,
        }
    }
}

impl From<RemoveAtError> for Error {
    fn from(value: RemoveAtError) -> Self {
        match value {
            RemoveAtError::IndexOutOfBounds(err) => err.into(),
            RemoveAtError::WouldEmpty(err) => err.into(),
        }
    }
}

impl From<RemoveRangeError> for Error {
    fn from(value: RemoveRangeError) -> Self {
        match value {
            RemoveRangeError::RangeOutOfBounds(err) => err.into(),
            RemoveRangeError::WouldEmpty(err) => err.into(),
        }
    }
}

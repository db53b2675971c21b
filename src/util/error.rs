use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An index which doesn't refer to an element of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The rejected index.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A range described by a start index and a count, which doesn't fit inside the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeOutOfBounds {
    /// The first index of the range.
    pub start: usize,
    /// The number of elements in the range.
    pub count: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for RangeOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range of {} elements starting at {} out of bounds for collection with {} elements!",
            self.count, self.start, self.len
        )
    }
}

impl Error for RangeOutOfBounds {}

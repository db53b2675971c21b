use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::ops::{Deref, DerefMut};
use std::sync::OnceLock;

use tracing::{debug, trace};

use super::error::{
    ArgumentReason, IndexOutOfBounds, InvalidArgument, RangeOutOfBounds, RemoveAtError,
    RemoveRangeError, Unsupported, WouldEmpty,
};
use crate::util::option::OptionExtension;

/// An ordered, growable collection which always contains at least one element.
///
/// NonEmptyList wraps a [`Vec`] and only exposes the mutations that can't take its length below 1.
/// Read-only slice methods are available through [`Deref<Target = [T]>`](Deref), and the mutable
/// slice methods (`sort`, `swap`, `iter_mut`, ...) through [`DerefMut`], because no slice can
/// change its own length. Where a slice method would return an [`Option`] only to represent
/// emptiness, such as [`first`](NonEmptyList::first) or [`last`](NonEmptyList::last), this type
/// shadows it with an infallible version.
///
/// # Tail Caching
/// [`tail`](NonEmptyList::tail) builds a snapshot of every element after the head and memoizes it.
/// Every path that can change the elements (including handing out a `&mut T` or `&mut [T]`) drops
/// the memoized tail first, so a tail is never observed after the list it came from has changed.
/// The memo is a [`OnceLock`], so a list can be shared across threads for reading like a [`Vec`];
/// mutation still needs the exclusive access that `&mut self` implies.
///
/// # Indexing
/// `list[i]` and range indexing such as `list[1..]` go through the backing slice and panic the same
/// way a slice does. Use [`at`](NonEmptyList::at) for a [`Result`] instead.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the NonEmptyList.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being added or removed.
///
/// | Method | Complexity |
/// |-|-|
/// | `head` | `O(1)` |
/// | `last` | `O(1)` |
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `tail` | `O(n)`*, `O(1)` |
/// | `add` | `O(1)`**, `O(n)` |
/// | `add_range` | `O(m)`**, `O(n+m)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n)` |
/// | `remove_at` | `O(n-i)` |
/// | `remove_range` | `O(n-i)` |
/// | `pop` | `O(1)` |
///
/// \* The first call after a mutation clones the tail, later calls return the memoized snapshot.
///
/// \** If the backing Vec doesn't have enough capacity for the new elements, it reallocates.
pub struct NonEmptyList<T> {
    items: Vec<T>,
    tail: OnceLock<Box<NonEmptyList<T>>>,
}

#[allow(clippy::len_without_is_empty)]
impl<T> NonEmptyList<T> {
    /// Creates a new NonEmptyList from the required first item, followed by all items in `rest`.
    ///
    /// # Examples
    /// ```
    /// # use non_empty_list::collections::non_empty::NonEmptyList;
    /// let list = NonEmptyList::new(1, [2, 3]);
    /// assert_eq!(list.head(), &1);
    /// assert_eq!(list.last(), &3);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn new<I: IntoIterator<Item = T>>(first: T, rest: I) -> NonEmptyList<T> {
        let rest = rest.into_iter();
        let mut items = Vec::with_capacity(rest.size_hint().0.saturating_add(1));
        items.push(first);
        items.extend(rest);
        NonEmptyList::from_vec_unchecked(items)
    }

    /// Creates a NonEmptyList containing only `first`.
    pub fn singleton(first: T) -> NonEmptyList<T> {
        NonEmptyList::from_vec_unchecked(vec![first])
    }

    /// Creates a new NonEmptyList from items which may be absent, represented as [`None`].
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `first` or any item in `rest` is [`None`]. For an absent item
    /// in `rest`, the reported index is its position within `rest`.
    ///
    /// # Examples
    /// ```
    /// # use non_empty_list::collections::non_empty::{ArgumentReason, NonEmptyList};
    /// let list = NonEmptyList::try_new(Some("a"), [Some("b")]).unwrap();
    /// assert_eq!(*list, ["a", "b"]);
    ///
    /// let err = NonEmptyList::try_new(Some("a"), [Some("b"), None]).unwrap_err();
    /// assert_eq!(err.reason, ArgumentReason::AbsentItem { index: 1 });
    /// ```
    pub fn try_new<I>(first: Option<T>, rest: I) -> Result<NonEmptyList<T>, InvalidArgument>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let Some(first) = first else {
            debug!(op = "try_new", "rejected absent first item");
            return Err(InvalidArgument::new(ArgumentReason::AbsentFirst));
        };

        let rest = collect_present(rest, "try_new")?;
        Ok(NonEmptyList::new(first, rest))
    }

    /// Creates a NonEmptyList from all items produced by `source`, in order.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `source` produces no items.
    ///
    /// # Examples
    /// ```
    /// # use non_empty_list::collections::non_empty::NonEmptyList;
    /// let list = NonEmptyList::try_from_iter(1..=3).unwrap();
    /// assert_eq!(*list, [1, 2, 3]);
    /// assert!(NonEmptyList::try_from_iter(Vec::<u8>::new()).is_err());
    /// ```
    pub fn try_from_iter<I: IntoIterator<Item = T>>(
        source: I,
    ) -> Result<NonEmptyList<T>, InvalidArgument> {
        let items: Vec<T> = source.into_iter().collect();
        if items.is_empty() {
            debug!(op = "try_from_iter", "rejected empty source");
            return Err(InvalidArgument::new(ArgumentReason::EmptySource));
        }

        Ok(NonEmptyList::from_vec_unchecked(items))
    }

    /// Creates a NonEmptyList from a source sequence which may itself be absent.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `source` is [`None`] or produces no items.
    pub fn from_source<I: IntoIterator<Item = T>>(
        source: Option<I>,
    ) -> Result<NonEmptyList<T>, InvalidArgument> {
        match source {
            Some(source) => NonEmptyList::try_from_iter(source),
            None => {
                debug!(op = "from_source", "rejected absent source");
                Err(InvalidArgument::new(ArgumentReason::AbsentSource))
            }
        }
    }

    /// Wraps `items` without checking its length. Every caller must guarantee that `items` is
    /// non-empty.
    pub(crate) fn from_vec_unchecked(items: Vec<T>) -> NonEmptyList<T> {
        debug_assert!(!items.is_empty(), "NonEmptyList created from an empty Vec");
        NonEmptyList {
            items,
            tail: OnceLock::new(),
        }
    }

    /// Returns the number of items in the list, which is always at least 1.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of items in the list as a [`NonZeroUsize`].
    pub fn len_nonzero(&self) -> NonZeroUsize {
        // SAFETY: A NonEmptyList always holds at least one item.
        unsafe { NonZeroUsize::new(self.items.len()).unreachable() }
    }

    /// Returns a reference to the first item in the list.
    ///
    /// # Examples
    /// ```
    /// # use non_empty_list::collections::non_empty::NonEmptyList;
    /// let list = NonEmptyList::singleton('a');
    /// assert_eq!(list.head(), &'a');
    /// assert_eq!(list.head(), list.last());
    /// ```
    pub fn head(&self) -> &T {
        // SAFETY: A NonEmptyList always holds at least one item.
        unsafe { self.items.first().unreachable() }
    }

    /// Returns a reference to the first item in the list. Identical to [`head`](Self::head).
    pub fn first(&self) -> &T {
        self.head()
    }

    /// Returns a reference to the last item in the list.
    pub fn last(&self) -> &T {
        // SAFETY: A NonEmptyList always holds at least one item.
        unsafe { self.items.last().unreachable() }
    }

    /// Returns a mutable reference to the first item in the list, invalidating the cached tail.
    pub fn head_mut(&mut self) -> &mut T {
        self.invalidate();
        // SAFETY: A NonEmptyList always holds at least one item.
        unsafe { self.items.first_mut().unreachable() }
    }

    /// Returns a mutable reference to the last item in the list, invalidating the cached tail.
    pub fn last_mut(&mut self) -> &mut T {
        self.invalidate();
        // SAFETY: A NonEmptyList always holds at least one item.
        unsafe { self.items.last_mut().unreachable() }
    }

    /// Returns a reference to the item at the provided index.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use non_empty_list::collections::non_empty::NonEmptyList;
    /// let list = NonEmptyList::new(1, [2, 3]);
    /// assert_eq!(list.at(1), Ok(&2));
    /// assert!(list.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.items.len();
        self.items.get(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the item at the provided index, invalidating the cached tail.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        self.invalidate();
        Ok(&mut self.items[index])
    }

    /// Returns the first item along with a slice of all of the remaining items, which may be empty.
    pub fn split_first(&self) -> (&T, &[T]) {
        // SAFETY: A NonEmptyList always holds at least one item.
        unsafe { self.items.split_first().unreachable() }
    }

    /// Returns the last item along with a slice of all of the preceding items, which may be empty.
    pub fn split_last(&self) -> (&T, &[T]) {
        // SAFETY: A NonEmptyList always holds at least one item.
        unsafe { self.items.split_last().unreachable() }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Appends the provided item to the end of the list.
    ///
    /// # Examples
    /// ```
    /// # use non_empty_list::collections::non_empty::NonEmptyList;
    /// let mut list = NonEmptyList::singleton(1);
    /// list.add(2);
    /// assert_eq!(*list, [1, 2]);
    /// ```
    pub fn add(&mut self, item: T) {
        self.invalidate();
        self.items.push(item);
    }

    /// Appends the provided item to the end of the list, if it is present.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] without modifying the list if `item` is [`None`].
    pub fn try_add(&mut self, item: Option<T>) -> Result<(), InvalidArgument> {
        match item {
            Some(item) => {
                self.add(item);
                Ok(())
            }
            None => {
                debug!(op = "try_add", len = self.len(), "rejected absent item");
                Err(InvalidArgument::new(ArgumentReason::AbsentValue))
            }
        }
    }

    /// Appends all items produced by `items` to the end of the list, in order.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] without modifying the list if `items` produces nothing. Use
    /// [`Extend`] instead to treat an empty range as a no-op.
    ///
    /// # Examples
    /// ```
    /// # use non_empty_list::collections::non_empty::NonEmptyList;
    /// let mut list = NonEmptyList::singleton(1);
    /// list.add_range([2, 3]).unwrap();
    /// assert_eq!(*list, [1, 2, 3]);
    /// assert!(list.add_range([]).is_err());
    /// ```
    pub fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) -> Result<(), InvalidArgument> {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            debug!(op = "add_range", len = self.len(), "rejected empty range");
            return Err(InvalidArgument::new(ArgumentReason::EmptyRange));
        }

        self.invalidate();
        self.items.extend(items);
        Ok(())
    }

    /// Appends a range of items which may be absent, either as a whole or individually.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] without modifying the list if `items` is [`None`], empty, or
    /// contains a [`None`].
    pub fn try_add_range<I>(&mut self, items: Option<I>) -> Result<(), InvalidArgument>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let Some(items) = items else {
            debug!(op = "try_add_range", len = self.len(), "rejected absent range");
            return Err(InvalidArgument::new(ArgumentReason::AbsentSource));
        };

        let items = collect_present(items, "try_add_range")?;
        self.add_range(items)
    }

    /// Inserts the provided item at `index`, shifting all following items towards the end. An
    /// index equal to the length appends the item.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] without modifying the list if `index > len`.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        if index > len {
            debug!(op = "insert", index, len, "rejected out of bounds index");
            return Err(IndexOutOfBounds { index, len });
        }

        self.invalidate();
        self.items.insert(index, item);
        Ok(())
    }

    /// Replaces the item at `index` with `item`, returning the old value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] without modifying the list if `index >= len`.
    pub fn replace(&mut self, index: usize, item: T) -> Result<T, IndexOutOfBounds> {
        Ok(std::mem::replace(self.at_mut(index)?, item))
    }

    /// Removes and returns the item at `index`, shifting all following items towards the start.
    ///
    /// # Errors
    /// Returns [`WouldEmpty`] if the list only has one item, regardless of `index`, otherwise
    /// [`IndexOutOfBounds`] if `index >= len`. The list is unchanged in both cases.
    ///
    /// # Examples
    /// ```
    /// # use non_empty_list::collections::non_empty::NonEmptyList;
    /// let mut list = NonEmptyList::new('a', ['b']);
    /// assert_eq!(list.remove_at(0), Ok('a'));
    /// assert!(list.remove_at(0).is_err_and(|e| e.is_would_empty()));
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, RemoveAtError> {
        self.check_removable("remove_at")?;
        self.check_index(index)?;

        self.invalidate();
        Ok(self.items.remove(index))
    }

    /// Removes `count` items starting at `start`, returning them in order.
    ///
    /// # Errors
    /// Returns [`RangeOutOfBounds`] if the range doesn't fit inside the list, or [`WouldEmpty`] if
    /// it covers every item. The list is unchanged in both cases.
    pub fn remove_range(&mut self, start: usize, count: usize) -> Result<Vec<T>, RemoveRangeError> {
        let len = self.len();
        if start.checked_add(count).is_none_or(|end| end > len) {
            debug!(op = "remove_range", start, count, len, "rejected out of bounds range");
            return Err(RangeOutOfBounds { start, count, len }.into());
        }

        if count == len {
            debug!(op = "remove_range", start, count, len, "rejected removal of every item");
            return Err(WouldEmpty { op: "remove_range" }.into());
        }

        if count == 0 {
            return Ok(Vec::new());
        }

        self.invalidate();
        Ok(self.items.drain(start..start + count).collect())
    }

    /// Removes and returns the last item, unless it is the only one.
    pub fn pop(&mut self) -> Option<T> {
        if self.len() == 1 {
            return None;
        }

        self.invalidate();
        self.items.pop()
    }

    /// Shortens the list to `len` items, dropping the rest. Has no effect if `len` is greater than
    /// or equal to the current length.
    pub fn truncate(&mut self, len: NonZeroUsize) {
        if len.get() < self.len() {
            self.invalidate();
            self.items.truncate(len.get());
        }
    }

    /// Clearing a NonEmptyList would break its one guarantee, so this always fails.
    ///
    /// # Errors
    /// Always returns [`Unsupported`], leaving the list unchanged.
    pub fn clear(&mut self) -> Result<(), Unsupported> {
        debug!(op = "clear", len = self.len(), "rejected clear");
        Err(Unsupported { op: "clear" })
    }

    /// Creates a new NonEmptyList by applying `f` to every item in order.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> NonEmptyList<U> {
        NonEmptyList::from_vec_unchecked(self.items.into_iter().map(f).collect())
    }

    /// Decomposes the list into its head and an owned tail, which is [`None`] for a single item.
    pub fn into_head_tail(self) -> (T, Option<NonEmptyList<T>>) {
        let mut iter = self.items.into_iter();
        // SAFETY: A NonEmptyList always holds at least one item.
        let head = unsafe { iter.next().unreachable() };
        let rest: Vec<T> = iter.collect();
        let tail = (!rest.is_empty()).then(|| NonEmptyList::from_vec_unchecked(rest));
        (head, tail)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Drops the memoized tail, if there is one.
    pub(crate) fn invalidate(&mut self) {
        if self.tail.take().is_some() {
            trace!(len = self.items.len(), "invalidated cached tail");
        }
    }

    #[cfg(test)]
    pub(crate) fn is_tail_cached(&self) -> bool {
        self.tail.get().is_some()
    }

    fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        if index >= len {
            debug!(index, len, "rejected out of bounds index");
            return Err(IndexOutOfBounds { index, len });
        }
        Ok(())
    }

    fn check_removable(&self, op: &'static str) -> Result<(), WouldEmpty> {
        if self.len() == 1 {
            debug!(op, len = 1, "rejected removal of the only item");
            return Err(WouldEmpty { op });
        }
        Ok(())
    }
}

impl<T: PartialEq> NonEmptyList<T> {
    /// Returns the index of the first item equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }

    /// Removes the first item equal to `item`, returning it, or [`None`] if no item matched.
    ///
    /// # Errors
    /// Returns [`WouldEmpty`] if the list only has one item, even if that item doesn't match.
    ///
    /// # Examples
    /// ```
    /// # use non_empty_list::collections::non_empty::NonEmptyList;
    /// let mut list = NonEmptyList::new(1, [2, 1]);
    /// assert_eq!(list.remove(&1), Ok(Some(1)));
    /// assert_eq!(list.remove(&3), Ok(None));
    /// assert_eq!(*list, [2, 1]);
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<Option<T>, WouldEmpty> {
        self.check_removable("remove")?;

        match self.index_of(item) {
            Some(index) => {
                self.invalidate();
                Ok(Some(self.items.remove(index)))
            }
            None => Ok(None),
        }
    }
}

impl<T: Clone> NonEmptyList<T> {
    /// Returns a NonEmptyList of every item after the head, or [`None`] if the list only has one
    /// item.
    ///
    /// The tail is a snapshot: it is computed once and memoized until the next mutation of this
    /// list. Clone it to keep it past a mutation.
    ///
    /// # Examples
    /// ```
    /// # use non_empty_list::collections::non_empty::NonEmptyList;
    /// let mut list = NonEmptyList::new(1, [2, 3]);
    /// let tail = list.tail().cloned().unwrap();
    /// assert_eq!(tail, [2, 3]);
    /// assert_eq!(tail.tail().unwrap(), &[3]);
    /// assert!(tail.tail().unwrap().tail().is_none());
    ///
    /// list.add(4);
    /// assert_eq!(tail, [2, 3]);
    /// assert_eq!(list.tail().unwrap(), &[2, 3, 4]);
    /// ```
    pub fn tail(&self) -> Option<&NonEmptyList<T>> {
        if self.items.len() == 1 {
            return None;
        }

        let tail = self.tail.get_or_init(|| {
            trace!(len = self.items.len() - 1, "computing tail snapshot");
            Box::new(NonEmptyList::from_vec_unchecked(self.items[1..].to_vec()))
        });
        Some(&**tail)
    }

    /// Returns the head and the tail together. Equivalent to calling [`head`](Self::head) and
    /// [`tail`](Self::tail).
    pub fn head_tail(&self) -> (&T, Option<&NonEmptyList<T>>) {
        (self.head(), self.tail())
    }
}

impl<T> Deref for NonEmptyList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for NonEmptyList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.invalidate();
        &mut self.items
    }
}

impl<T> Extend<T> for NonEmptyList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter().peekable();
        if iter.peek().is_some() {
            self.invalidate();
            self.items.extend(iter);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for NonEmptyList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> From<T> for NonEmptyList<T> {
    fn from(value: T) -> Self {
        NonEmptyList::singleton(value)
    }
}

impl<T> From<(T, Vec<T>)> for NonEmptyList<T> {
    fn from((first, rest): (T, Vec<T>)) -> Self {
        NonEmptyList::new(first, rest)
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyList<T> {
    type Error = InvalidArgument;

    fn try_from(value: Vec<T>) -> Result<Self, Self::Error> {
        if value.is_empty() {
            debug!(op = "try_from", "rejected empty Vec");
            return Err(InvalidArgument::new(ArgumentReason::EmptySource));
        }
        Ok(NonEmptyList::from_vec_unchecked(value))
    }
}

impl<T: Clone> TryFrom<&[T]> for NonEmptyList<T> {
    type Error = InvalidArgument;

    fn try_from(value: &[T]) -> Result<Self, Self::Error> {
        Self::try_from(value.to_vec())
    }
}

impl<T> From<NonEmptyList<T>> for Vec<T> {
    fn from(value: NonEmptyList<T>) -> Self {
        value.into_vec()
    }
}

/// Returns a single item list containing the default value of `T`.
impl<T: Default> Default for NonEmptyList<T> {
    fn default() -> Self {
        NonEmptyList::singleton(T::default())
    }
}

impl<T> AsRef<[T]> for NonEmptyList<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for NonEmptyList<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for NonEmptyList<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T: Clone> Clone for NonEmptyList<T> {
    fn clone(&self) -> Self {
        NonEmptyList::from_vec_unchecked(self.items.clone())
    }
}

impl<T: PartialEq> PartialEq for NonEmptyList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for NonEmptyList<T> {}

impl<T: PartialEq> PartialEq<[T]> for NonEmptyList<T> {
    fn eq(&self, other: &[T]) -> bool {
        *self.items == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for NonEmptyList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self.items == *other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for NonEmptyList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.items == *other
    }
}

impl<T: PartialOrd> PartialOrd for NonEmptyList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.items.partial_cmp(&other.items)
    }
}

impl<T: Ord> Ord for NonEmptyList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.items.cmp(&other.items)
    }
}

impl<T: Hash> Hash for NonEmptyList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash as a slice to stay consistent with Borrow<[T]>.
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for NonEmptyList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NonEmptyList")
            .field("contents", &self.items)
            .field("len", &self.items.len())
            .finish()
    }
}

impl<T: Display> Display for NonEmptyList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "NonEmptyList: [")?;
        let (head, rest) = self.split_first();
        write!(f, "{head}")?;
        for item in rest {
            write!(f, ", {item}")?;
        }
        write!(f, "]")
    }
}

/// Unwraps every item produced by `items`, failing on the first absent one.
fn collect_present<T, I>(items: I, op: &'static str) -> Result<Vec<T>, InvalidArgument>
where
    I: IntoIterator<Item = Option<T>>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            item.ok_or_else(|| {
                debug!(op, index, "rejected absent item");
                InvalidArgument::new(ArgumentReason::AbsentItem { index })
            })
        })
        .collect()
}

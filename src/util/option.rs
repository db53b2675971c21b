use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Unwraps an Option that can't be None because of an invariant held by the caller, such as
    /// the length of a NonEmptyList. Hits [`unreachable!`] in debug builds and
    /// [`unreachable_unchecked`](hint::unreachable_unchecked) in release builds.
    ///
    /// No panics section is included so that clippy treats this as infallible. The same goes for
    /// the safety docs: calling this asserts that None is impossible.
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!("NonEmptyList invariant violated"),
            // SAFETY: It is the responsibility of the caller to ensure that None is impossible when
            // invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}

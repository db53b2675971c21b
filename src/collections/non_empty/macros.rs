/// Creates a [`NonEmptyList`](crate::collections::non_empty::NonEmptyList) containing the
/// provided items, in order. Invoking it without any items is a compile error.
///
/// # Examples
/// ```
/// # use non_empty_list::non_empty;
/// let list = non_empty![1, 2, 3];
/// assert_eq!(list.to_string(), "NonEmptyList: [1, 2, 3]");
///
/// let single = non_empty!["only"];
/// assert!(single.tail().is_none());
/// ```
///
/// ```compile_fail
/// # use non_empty_list::non_empty;
/// let list: non_empty_list::collections::non_empty::NonEmptyList<u8> = non_empty![];
/// ```
#[macro_export]
macro_rules! non_empty {
    () => {
        ::std::compile_error!("a NonEmptyList needs at least one item")
    };
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::collections::non_empty::NonEmptyList::new($first, [$($rest),*])
    };
}

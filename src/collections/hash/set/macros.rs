/// Creates a [`Set`](crate::collections::hash::Set) containing the provided values, in the same
/// way that [`vec!`] creates a [`Vec`]. Duplicate values are collapsed into one.
///
/// ```
/// use keyset::set;
///
/// let letters = set!["a", "b", "a", "c", "b"];
/// assert_eq!(letters.len(), 3);
/// assert!(letters.contains("a"));
///
/// let empty: keyset::collections::hash::Set<u8> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::collections::hash::Set::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::collections::hash::Set::from([$($item),+])
    };
}

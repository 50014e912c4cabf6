use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::{IntoIter, Iter, ReserveError};

/// An unordered collection of unique values, which relies on the values implementing [`Hash`].
///
/// Set is a thin layer over [`HashMap<T, ()>`](HashMap): the keys of the map are the members of
/// the set and the values are unit. Hashing and collision handling are left entirely to the map.
///
/// Iteration order (for [`iter`](Set::iter), [`for_each`](Set::for_each),
/// [`to_vec`](Set::to_vec) and friends) is unspecified and may differ between two sets with the
/// same contents. Nothing should rely on it.
///
/// It is a logic error for an item to be modified in a way that changes its hash or equality
/// while it is in the set. Because of this, there is no way to get mutable access to members.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Set.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)` |
/// | `remove` | `O(1)` |
/// | `contains` | `O(1)` |
/// | `for_each` | `O(n)` |
/// | `to_vec` | `O(n)` |
///
/// \* If the Set doesn't have enough capacity for the new item, `insert` will take `O(n)`.
pub struct Set<T: Hash + Eq, B: BuildHasher = RandomState> {
    // Unit values take no space, so the key set of the map is all that's stored.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a new, empty Set. No memory is allocated until the first item is inserted.
    pub fn new() -> Set<T> {
        Set {
            inner: HashMap::new(),
        }
    }

    /// Creates a new, empty Set with space for at least `cap` items before it has to reallocate.
    pub fn with_cap(cap: usize) -> Set<T> {
        Set {
            inner: HashMap::with_capacity(cap),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T, B> {
    /// Creates a new, empty Set which will use the provided `hasher`.
    pub const fn with_hasher(hasher: B) -> Set<T, B> {
        Set {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new, empty Set with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> Set<T, B> {
        Set {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of items in the Set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Set contains no items.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of items the Set can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the Set's [`BuildHasher`].
    pub fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    /// Adds `item` to the Set. If an equal item is already present, the Set is left unchanged
    /// (the existing item is kept, not replaced).
    pub fn insert(&mut self, item: T) {
        self.inner.entry(item).or_insert(());
    }

    /// Removes the item equal to `item` from the Set. Removing an item that isn't present does
    /// nothing.
    pub fn remove<Q>(&mut self, item: &Q)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item);
    }

    /// Removes the item equal to `item` from the Set and returns it, or None if there was no such
    /// item.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|(owned, _)| owned)
    }

    /// Returns true if the Set contains an item equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        // Q is a borrowed form of T, hashing and comparing the same way. This lets a Set<String>
        // be queried with a &str.
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Removes every item from the Set, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Keeps only the items for which `keep` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        self.inner.retain(|item, _| keep(item))
    }

    /// Increases the capacity of the Set so that `extra` more items fit without reallocating.
    ///
    /// # Panics
    /// Panics if the new capacity overflows `usize`. See [`try_reserve`](Set::try_reserve) for a
    /// non-panicking alternative.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Attempts to increase the capacity of the Set so that `extra` more items fit without
    /// reallocating, returning an error instead of panicking if that isn't possible.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), ReserveError> {
        Ok(self.inner.try_reserve(extra)?)
    }

    /// Shrinks the capacity of the Set as close to its length as the underlying map allows.
    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit()
    }

    /// Returns an iterator over all items in the Set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Invokes `visitor` exactly once for every item in the Set, in an unspecified order. The
    /// visitor is called synchronously and is never called for an empty Set.
    pub fn for_each<F: FnMut(&T)>(&self, mut visitor: F) {
        for item in self.inner.keys() {
            visitor(item);
        }
    }

    /// Copies every item into a newly allocated [`Vec`], in an unspecified order. Each call
    /// produces a separate allocation, and an empty Set produces an empty Vec.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the Set, moving every item into a [`Vec`] in an unspecified order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for Set<T, B> {
    fn default() -> Self {
        Set {
            inner: HashMap::default(),
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for Set<T, B> {
    fn clone(&self) -> Self {
        Set {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for Set<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for Set<T, B> {}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for Set<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = Set::with_cap_and_hasher(iter.size_hint().0, B::default());

        for item in iter {
            set.insert(item);
        }

        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for Set<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(|item| (item, ())))
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, B: BuildHasher> Extend<&'a T> for Set<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{")?;
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}

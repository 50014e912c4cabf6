use std::hash::{BuildHasher, Hash, Hasher};

/// A value with a hash chosen by the test rather than derived from the value. Two PinnedHash
/// instances are equal if their values are equal, so giving unequal values the same hash forces
/// a collision.
#[derive(Debug, Clone)]
pub struct PinnedHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> PinnedHash<T> {
    pub const fn new(hash: u64, value: T) -> PinnedHash<T> {
        PinnedHash {
            hash,
            value,
        }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for PinnedHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for PinnedHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for PinnedHash<T> {}

/// A Hasher which returns the last u64 written to it unchanged, so that a [`PinnedHash`] hashes
/// to exactly its pinned value.
#[derive(Debug, Default)]
pub struct PassthroughHasher {
    state: u64,
}

impl Hasher for PassthroughHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.rotate_left(8) ^ *byte as u64;
        }
    }

    fn write_u64(&mut self, value: u64) {
        self.state = value;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughHasherBuilder;

impl BuildHasher for PassthroughHasherBuilder {
    type Hasher = PassthroughHasher;

    fn build_hasher(&self) -> Self::Hasher {
        PassthroughHasher::default()
    }
}

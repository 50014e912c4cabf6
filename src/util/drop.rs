use std::cell::Cell;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// A hashable item which increments a shared counter when dropped. Equality and hashing only
/// consider `id`, so two CountedDrops with the same id are duplicates of each other.
#[derive(Debug)]
pub struct CountedDrop {
    pub id: u32,
    drops: Rc<Cell<usize>>,
}

impl CountedDrop {
    pub fn new(id: u32, drops: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl Hash for CountedDrop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CountedDrop {}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

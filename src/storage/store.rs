// LRU-ordered key/value store. Order is insertion order as last touched:
// most-recently-touched at the tail, least-recently-touched at the head.

use crate::value::{Key, Value};
use indexmap::IndexMap;

/// A (key, value) pair evicted as a side effect of a `set`.
pub type Eviction = Option<(Key, Value)>;

pub struct Store {
    max_keys: usize,
    entries: IndexMap<Key, Value>,
}

impl Store {
    pub fn new(max_keys: usize) -> Self {
        Self {
            max_keys,
            entries: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a key without touching LRU order. Used where a command needs
    /// to inspect the current value but the ordering update is already
    /// accounted for by a subsequent `set` (INCR/DECR, spec.md §4.4).
    pub fn peek(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// GET: returns the value (or the missing-key sentinel) and moves a
    /// present key to the tail. A miss does not alter ordering.
    pub fn get(&mut self, key: &Key) -> Value {
        match self.entries.shift_remove(key) {
            Some(value) => {
                self.entries.insert(key.clone(), value.clone());
                value
            }
            None => Value::missing(),
        }
    }

    /// SET: inserts or replaces `key`, moving it to the tail. If inserting
    /// grew the store past capacity, evicts and returns the head entry.
    /// Replacing an existing key never evicts, since size did not grow.
    pub fn set(&mut self, key: Key, value: Value) -> Eviction {
        let existed = self.entries.shift_remove(&key).is_some();
        self.entries.insert(key, value);

        if existed || self.entries.len() <= self.max_keys {
            return None;
        }

        // `shift_remove_index(0)` pops the head while keeping remaining
        // order intact, the direct analogue of `OrderedDict.popitem(False)`.
        self.entries.shift_remove_index(0)
    }
}

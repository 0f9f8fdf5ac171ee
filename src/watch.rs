// Watch table: per-connection watched-key sets plus a per-connection
// watch-violated flag. `note_write` trips the flag for every connection
// currently watching the written key, matching the observed behavior of
// examples/original_source/testRedish.py's `testSimultaneousTransactions`
// ("Interrupted" case: connection B's SET trips connection A's watch on the
// same key) rather than the narrower writer-scoped reading suggested by a
// literal trace of `redish.py`'s `_set`.

use crate::value::Key;
use std::collections::{HashMap, HashSet};

#[derive(Default)]
pub struct WatchTable {
    watched: HashMap<u64, HashSet<Key>>,
    violated: HashSet<u64>,
}

impl WatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_watch(&mut self, conn_id: u64, key: Key) {
        self.watched.entry(conn_id).or_default().insert(key);
    }

    /// UNWATCH, and EXEC completion (success or violation, spec.md §3):
    /// drops the watch set and the violated flag together.
    pub fn clear_watch(&mut self, conn_id: u64) {
        self.watched.remove(&conn_id);
        self.violated.remove(&conn_id);
    }

    /// Record a write to `key`: every connection currently watching `key`
    /// (including the writer itself, if it happens to be watching its own
    /// write) has its violated flag set.
    pub fn note_write(&mut self, key: &Key) {
        for (&conn_id, keys) in self.watched.iter() {
            if keys.contains(key) {
                self.violated.insert(conn_id);
            }
        }
    }

    pub fn is_violated(&self, conn_id: u64) -> bool {
        self.violated.contains(&conn_id)
    }
}

// Storage module - the LRU-bounded key/value store.

pub mod store;

pub use store::{Eviction, Store};

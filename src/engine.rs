// The engine facade: owns the store, connection registry, watch table and
// transaction manager, and drives one request to one reply (spec.md §2).
// Grounded on the teacher's `server/connection.rs::handle_frame`, which
// holds the same "is this connection mid-transaction" branch point, but
// collapsed to a synchronous `&mut self` per Design Decision D2 in
// `SPEC_FULL.md` §5 — there is no socket, task, or lock in the core.

use crate::commands::dispatcher;
use crate::config::EngineConfig;
use crate::protocol::serialize_response;
use crate::registry::ConnectionRegistry;
use crate::storage::Store;
use crate::transaction::TransactionManager;
use crate::watch::WatchTable;

pub struct Engine {
    pub(crate) store: Store,
    pub(crate) registry: ConnectionRegistry,
    pub(crate) watch: WatchTable,
    pub(crate) tx: TransactionManager,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            store: Store::new(config.max_keys),
            registry: ConnectionRegistry::new(),
            watch: WatchTable::new(),
            tx: TransactionManager::new(),
        }
    }

    /// Parse one wire line and serialize the reply (spec.md §4.5, §6).
    pub fn process_line(&mut self, line: &str) -> String {
        let response = dispatcher::dispatch(self, line);
        serialize_response(&response)
    }
}

// Per-connection transaction state machine: MULTI queues commands,
// DISCARD drops them, EXEC replays them (unless poisoned by an input error
// or a watch violation). Grounded on the teacher's `src/transaction.rs`
// (`Transaction` struct + free `multi`/`exec`/`discard` functions) and
// examples/original_source/redish.py's `transactionQueues` /
// `connectionsWithTransactionInputErrors` dicts.

use crate::protocol::Request;
use std::collections::HashMap;

#[derive(Default)]
struct ConnTx {
    queue: Vec<Request>,
    error_flag: bool,
}

#[derive(Default)]
pub struct TransactionManager {
    /// Present iff the connection is currently inside a MULTI/EXEC region.
    active: HashMap<u64, ConnTx>,
}

impl TransactionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_tx(&self, conn_id: u64) -> bool {
        self.active.contains_key(&conn_id)
    }

    /// MULTI: create an empty queue, clearing any stale error flag.
    /// Caller must have already rejected nested MULTI.
    pub fn begin(&mut self, conn_id: u64) {
        self.active.insert(conn_id, ConnTx::default());
    }

    /// Append a validated request to the queue.
    pub fn enqueue(&mut self, conn_id: u64, request: Request) {
        if let Some(tx) = self.active.get_mut(&conn_id) {
            tx.queue.push(request);
        }
    }

    /// Mark that a queueable command failed argument validation while
    /// inside a MULTI region.
    pub fn mark_error(&mut self, conn_id: u64) {
        if let Some(tx) = self.active.get_mut(&conn_id) {
            tx.error_flag = true;
        }
    }

    pub fn has_error(&self, conn_id: u64) -> bool {
        self.active
            .get(&conn_id)
            .map(|tx| tx.error_flag)
            .unwrap_or(false)
    }

    /// DISCARD: drop the queue and clear the error flag.
    pub fn discard(&mut self, conn_id: u64) {
        self.active.remove(&conn_id);
    }

    /// EXEC: remove and return the queue, ending the transaction region.
    pub fn take_queue(&mut self, conn_id: u64) -> Vec<Request> {
        self.active
            .remove(&conn_id)
            .map(|tx| tx.queue)
            .unwrap_or_default()
    }
}

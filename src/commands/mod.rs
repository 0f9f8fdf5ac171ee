// Command handlers: one module per command family (spec.md §2, §4.4).

pub mod connection_cmds;
pub mod dispatcher;
pub mod string_cmds;
pub mod transaction_cmds;

use crate::engine::Engine;
use crate::error::EngineError;
use crate::protocol::{Request, Response};

/// Shared validate -> (queue | execute) flow for the queueable commands
/// SET/GET/MGET/MSET/INCR/DECR (spec.md §4.4): an argument-shape failure
/// poisons an active transaction instead of aborting it; a valid request
/// queues while the connection is `InTx`, otherwise it runs immediately.
pub(crate) fn run_queueable(
    engine: &mut Engine,
    conn_id: u64,
    request: &Request,
    validate: impl FnOnce(&Request) -> Result<(), EngineError>,
    execute: impl FnOnce(&mut Engine, &Request) -> Response,
) -> Response {
    if let Err(e) = validate(request) {
        if engine.tx.in_tx(conn_id) {
            engine.tx.mark_error(conn_id);
        }
        return Response::error(e.detail());
    }
    if engine.tx.in_tx(conn_id) {
        engine.tx.enqueue(conn_id, request.clone());
        return Response::queued();
    }
    execute(engine, request)
}

// MULTI/EXEC/DISCARD/WATCH/UNWATCH: the transaction-control commands
// (spec.md §4.3). Grounded on examples/original_source/redish.py's
// `handleMULTI`/`handleEXEC`/`handleDISCARD`/`handleWATCH`/`handleUNWATCH`
// and the teacher's `src/commands/transaction_cmds.rs` free-function layout.

use crate::commands::dispatcher;
use crate::engine::Engine;
use crate::error::EngineError;
use crate::protocol::{Request, Response};
use crate::value::Key;

pub fn multi(engine: &mut Engine, conn_id: u64, request: &Request) -> Response {
    if !request.args.is_empty() {
        return Response::error("MULTI should have no arguments");
    }
    if engine.tx.in_tx(conn_id) {
        return Response::error("MULTI calls can not be nested");
    }
    engine.tx.begin(conn_id);
    Response::ok()
}

pub fn exec(engine: &mut Engine, conn_id: u64, request: &Request) -> Response {
    if !request.args.is_empty() {
        return Response::error("EXEC should have no arguments");
    }
    if !engine.tx.in_tx(conn_id) {
        return Response::error("EXEC called without MULTI");
    }

    let had_error = engine.tx.has_error(conn_id);
    let queue = engine.tx.take_queue(conn_id);
    if had_error {
        return Response::error(
            EngineError::TxProtocol("Transaction discarded because of previous errors".to_string())
                .detail(),
        );
    }

    let violated = engine.watch.is_violated(conn_id);
    engine.watch.clear_watch(conn_id);
    if violated {
        return Response::ok();
    }

    let results: Vec<Response> = queue
        .into_iter()
        .map(|queued| dispatcher::route(engine, queued))
        .collect();
    Response::ok().with_results(results)
}

pub fn discard(engine: &mut Engine, conn_id: u64, request: &Request) -> Response {
    if !request.args.is_empty() {
        return Response::error("DISCARD should have no arguments");
    }
    if !engine.tx.in_tx(conn_id) {
        return Response::error("DISCARD called without MULTI");
    }
    engine.tx.discard(conn_id);
    Response::ok()
}

pub fn watch(engine: &mut Engine, conn_id: u64, request: &Request) -> Response {
    if request.args.len() != 1 {
        return Response::error("WATCH requires one argument: key");
    }
    let key = Key::from_json_lossy(&request.args[0]);
    engine.watch.add_watch(conn_id, key);
    Response::ok()
}

pub fn unwatch(engine: &mut Engine, conn_id: u64, request: &Request) -> Response {
    if !request.args.is_empty() {
        return Response::error("UNWATCH should have no arguments");
    }
    engine.watch.clear_watch(conn_id);
    Response::ok()
}

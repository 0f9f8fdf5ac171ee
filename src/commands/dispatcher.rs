// Request dispatcher: parses one wire line, enforces connection identity,
// and routes to a command handler (spec.md §4.5). Grounded on the teacher's
// `src/commands/dispatcher.rs` (`match cmd.as_str()` routing table), cut
// down to the commands in scope, and on
// examples/original_source/redish.py's `processRequestJSON`/`processRequest`.

use super::{connection_cmds, string_cmds, transaction_cmds};
use crate::engine::Engine;
use crate::protocol::{parse_request, Request, Response};
use tracing::{debug, warn};

/// Parse one wire line and produce a reply. Malformed JSON and JSON missing
/// `command` are distinct errors (`parse_request` already tells them apart).
pub fn dispatch(engine: &mut Engine, line: &str) -> Response {
    match parse_request(line) {
        Ok(request) => route(engine, request),
        Err(e) => {
            warn!(error = %e, "rejected malformed request");
            Response::error(e.detail())
        }
    }
}

/// Route one already-parsed request. Used both for fresh wire lines and to
/// replay a transaction's queued requests at EXEC (spec.md §4.3), which is
/// why a connection identity check runs again here: the queued request
/// carries the connection id it was enqueued under.
pub fn route(engine: &mut Engine, request: Request) -> Response {
    debug!(command = %request.command, id = ?request.id, "routing request");

    if request.command == "CONNECT" {
        return connection_cmds::connect(engine, &request);
    }

    let Some(conn_id) = request.id else {
        return Response::error("id not supplied");
    };
    if !engine.registry.is_known(conn_id) {
        return Response::error(format!("id {conn_id} not known"));
    }

    match request.command.as_str() {
        "DISCONNECT" => connection_cmds::disconnect(engine, conn_id, &request),
        "SET" => string_cmds::set(engine, conn_id, &request),
        "GET" => string_cmds::get(engine, conn_id, &request),
        "MGET" => string_cmds::mget(engine, conn_id, &request),
        "MSET" => string_cmds::mset(engine, conn_id, &request),
        "INCR" | "DECR" => string_cmds::incr_decr(engine, conn_id, &request),
        "MULTI" => transaction_cmds::multi(engine, conn_id, &request),
        "EXEC" => transaction_cmds::exec(engine, conn_id, &request),
        "DISCARD" => transaction_cmds::discard(engine, conn_id, &request),
        "WATCH" => transaction_cmds::watch(engine, conn_id, &request),
        "UNWATCH" => transaction_cmds::unwatch(engine, conn_id, &request),
        other => Response::error(format!("command '{other}' not found")),
    }
}

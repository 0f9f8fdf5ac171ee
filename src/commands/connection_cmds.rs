// CONNECT / DISCONNECT: connection-control commands. Never queued, even
// inside a transaction (spec.md §4.3 — only WATCH/UNWATCH share that
// exemption among the commands handled here). Grounded on
// examples/original_source/redish.py's `handleCONNECT`/`handleDISCONNECT`
// and the teacher's `server/client_info.rs` registration flow.

use crate::engine::Engine;
use crate::protocol::{Request, Response};

pub fn connect(engine: &mut Engine, request: &Request) -> Response {
    if !request.args.is_empty() {
        return Response::error("CONNECT has no arguments");
    }
    let id = engine.registry.connect();
    Response::ok().with_id(id)
}

pub fn disconnect(engine: &mut Engine, conn_id: u64, request: &Request) -> Response {
    if !request.args.is_empty() {
        return Response::error("DISCONNECT has no arguments");
    }
    engine.registry.disconnect(conn_id);
    Response::ok()
}

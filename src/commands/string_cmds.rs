// GET/SET/MGET/MSET/INCR/DECR: the queueable store-mutating commands
// (spec.md §4.4). Grounded on examples/original_source/redish.py's
// `handleSET`/`handleGET`/`handleMGET`/`handleMSET`/`handleINCRDECR` and the
// teacher's `src/commands/string.rs` free-function-per-command layout.

use crate::commands::run_queueable;
use crate::engine::Engine;
use crate::error::EngineError;
use crate::protocol::{Request, Response};
use crate::value::{Key, Value};
use serde_json::Value as Json;

pub fn set(engine: &mut Engine, conn_id: u64, request: &Request) -> Response {
    run_queueable(engine, conn_id, request, validate_set, exec_set)
}

fn validate_set(request: &Request) -> Result<(), EngineError> {
    if request.args.len() != 2 {
        return Err(EngineError::ArgShape(
            "SET requires two arguments: key and value".to_string(),
        ));
    }
    Ok(())
}

fn exec_set(engine: &mut Engine, request: &Request) -> Response {
    let key = Key::from_json_lossy(&request.args[0]);
    let value = Value::from_json(request.args[1].clone());
    let evicted = write(engine, key, value);
    with_evicted(Response::ok(), evicted)
}

pub fn get(engine: &mut Engine, conn_id: u64, request: &Request) -> Response {
    run_queueable(engine, conn_id, request, validate_get, exec_get)
}

fn validate_get(request: &Request) -> Result<(), EngineError> {
    if request.args.len() != 1 {
        return Err(EngineError::ArgShape(
            "GET requires one argument: key".to_string(),
        ));
    }
    Ok(())
}

fn exec_get(engine: &mut Engine, request: &Request) -> Response {
    let key = Key::from_json_lossy(&request.args[0]);
    let value = engine.store.get(&key);
    Response::ok().with_result(value.to_json())
}

pub fn mget(engine: &mut Engine, conn_id: u64, request: &Request) -> Response {
    run_queueable(engine, conn_id, request, validate_mget, exec_mget)
}

fn validate_mget(request: &Request) -> Result<(), EngineError> {
    if request.args.is_empty() {
        return Err(EngineError::ArgShape(
            "MGET requires at least one argument: key [key ...]".to_string(),
        ));
    }
    Ok(())
}

fn exec_mget(engine: &mut Engine, request: &Request) -> Response {
    let results = request
        .args
        .iter()
        .map(|arg| engine.store.get(&Key::from_json_lossy(arg)).to_json())
        .collect();
    Response::ok().with_result(Json::Array(results))
}

pub fn mset(engine: &mut Engine, conn_id: u64, request: &Request) -> Response {
    run_queueable(engine, conn_id, request, validate_mset, exec_mset)
}

fn validate_mset(request: &Request) -> Result<(), EngineError> {
    let len = request.args.len();
    if len == 0 || len % 2 != 0 {
        return Err(EngineError::ArgShape(
            "MSET requires at least one pair of arguments: key value [key value ...]".to_string(),
        ));
    }
    Ok(())
}

fn exec_mset(engine: &mut Engine, request: &Request) -> Response {
    let mut evicted = Vec::new();
    for pair in request.args.chunks(2) {
        let key = Key::from_json_lossy(&pair[0]);
        let value = Value::from_json(pair[1].clone());
        evicted.extend(write(engine, key, value));
    }
    with_evicted(Response::ok(), evicted)
}

pub fn incr_decr(engine: &mut Engine, conn_id: u64, request: &Request) -> Response {
    run_queueable(engine, conn_id, request, validate_incr_decr, exec_incr_decr)
}

fn validate_incr_decr(request: &Request) -> Result<(), EngineError> {
    if request.args.len() != 1 {
        return Err(EngineError::ArgShape(format!(
            "{} requires one argument: key",
            request.command
        )));
    }
    Ok(())
}

fn exec_incr_decr(engine: &mut Engine, request: &Request) -> Response {
    let cmd = request.command.as_str();
    let delta: i64 = if cmd == "DECR" { -1 } else { 1 };
    let key = Key::from_json_lossy(&request.args[0]);

    let current = match engine.store.peek(&key) {
        None => None,
        Some(value) => match value.as_int() {
            Some(i) => Some(i),
            None => {
                return Response::error(EngineError::TypeError(owned_cmd(cmd)).detail());
            }
        },
    };

    let new_value = match current {
        None => delta,
        Some(existing) => match existing.checked_add(delta) {
            Some(v) => v,
            None => return Response::error(EngineError::Overflow(owned_cmd(cmd)).detail()),
        },
    };

    let evicted = write(engine, key, Value::Int(new_value));
    with_evicted(Response::ok().with_result(Json::from(new_value)), evicted)
}

/// INCR/DECR's command name is only known at request time, but
/// `EngineError::TypeError`/`Overflow` want a `'static str` to match the
/// error taxonomy's zero-allocation shape; both call sites pass a literal.
fn owned_cmd(cmd: &str) -> &'static str {
    if cmd == "DECR" {
        "DECR"
    } else {
        "INCR"
    }
}

/// Writes one key/value pair: trips the watch table, writes the store, and
/// returns a flattened `[key, value]` pair if the write evicted an entry
/// (spec.md §4.1). MSET concatenates these across all pairs in order.
fn write(engine: &mut Engine, key: Key, value: Value) -> Vec<Json> {
    engine.watch.note_write(&key);
    match engine.store.set(key, value) {
        Some((k, v)) => vec![k.to_json(), v.to_json()],
        None => Vec::new(),
    }
}

fn with_evicted(response: Response, evicted: Vec<Json>) -> Response {
    if evicted.is_empty() {
        response
    } else {
        response.with_evicted(Json::Array(evicted))
    }
}

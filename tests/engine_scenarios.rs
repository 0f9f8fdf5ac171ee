// Literal scenarios from spec.md §8, driven directly against
// `Engine::process_line` the way the teacher's `tests/e2e` suite drove
// the server end to end.

use redish_engine::{Engine, EngineConfig};

fn engine(max_keys: usize) -> Engine {
    Engine::new(EngineConfig { max_keys })
}

fn connect(engine: &mut Engine) -> u64 {
    let reply = engine.process_line(r#"{"command":"CONNECT"}"#);
    let json: serde_json::Value = serde_json::from_str(&reply).unwrap();
    json["id"].as_u64().unwrap()
}

#[test]
fn scenario_1_mset_eviction_then_missing_get() {
    let mut engine = engine(2);
    let id = connect(&mut engine);
    let reply = engine.process_line(&format!(
        r#"{{"command":"MSET","id":{id},"args":["key1","one","key2","two","key3","three"]}}"#
    ));
    assert_eq!(reply, r#"{"status":"OK","evicted":["key1","one"]}"#);

    let reply = engine.process_line(&format!(
        r#"{{"command":"GET","id":{id},"args":["key1"]}}"#
    ));
    assert_eq!(reply, r#"{"status":"OK","result":""}"#);
}

#[test]
fn scenario_2_incr_saturates_at_the_i64_boundary() {
    let mut engine = engine(10);
    let id = connect(&mut engine);
    engine.process_line(&format!(
        r#"{{"command":"SET","id":{id},"args":["big",9223372036854775806]}}"#
    ));
    let reply = engine.process_line(&format!(r#"{{"command":"INCR","id":{id},"args":["big"]}}"#));
    assert_eq!(reply, r#"{"status":"OK","result":9223372036854775807}"#);

    let reply = engine.process_line(&format!(r#"{{"command":"INCR","id":{id},"args":["big"]}}"#));
    assert_eq!(reply, r#"{"status":"ERROR","detail":"INCR would overflow"}"#);
}

#[test]
fn scenario_3_decr_saturates_at_the_i64_boundary() {
    let mut engine = engine(10);
    let id = connect(&mut engine);
    engine.process_line(&format!(
        r#"{{"command":"SET","id":{id},"args":["negbig",-9223372036854775807]}}"#
    ));
    let reply = engine.process_line(&format!(
        r#"{{"command":"DECR","id":{id},"args":["negbig"]}}"#
    ));
    assert_eq!(reply, r#"{"status":"OK","result":-9223372036854775808}"#);

    let reply = engine.process_line(&format!(
        r#"{{"command":"DECR","id":{id},"args":["negbig"]}}"#
    ));
    assert_eq!(reply, r#"{"status":"ERROR","detail":"DECR would overflow"}"#);
}

#[test]
fn scenario_4_queued_incrs_replay_in_order_at_exec() {
    let mut engine = engine(10);
    let id = connect(&mut engine);
    engine.process_line(&format!(r#"{{"command":"MULTI","id":{id}}}"#));
    let reply = engine.process_line(&format!(r#"{{"command":"INCR","id":{id},"args":["foo"]}}"#));
    assert_eq!(reply, r#"{"status":"QUEUED"}"#);
    let reply = engine.process_line(&format!(r#"{{"command":"INCR","id":{id},"args":["bar"]}}"#));
    assert_eq!(reply, r#"{"status":"QUEUED"}"#);

    let reply = engine.process_line(&format!(r#"{{"command":"EXEC","id":{id}}}"#));
    assert_eq!(
        reply,
        r#"{"status":"OK","results":[{"status":"OK","result":1},{"status":"OK","result":1}]}"#
    );
}

#[test]
fn scenario_5_a_bad_queued_command_discards_the_whole_transaction() {
    let mut engine = engine(10);
    let id = connect(&mut engine);
    engine.process_line(&format!(r#"{{"command":"MULTI","id":{id}}}"#));
    let reply = engine.process_line(&format!(r#"{{"command":"INCR","id":{id}}}"#));
    assert_eq!(
        reply,
        r#"{"status":"ERROR","detail":"INCR requires one argument: key"}"#
    );
    let reply = engine.process_line(&format!(r#"{{"command":"INCR","id":{id},"args":["bar"]}}"#));
    assert_eq!(reply, r#"{"status":"QUEUED"}"#);

    let reply = engine.process_line(&format!(r#"{{"command":"EXEC","id":{id}}}"#));
    assert_eq!(
        reply,
        r#"{"status":"ERROR","detail":"Transaction discarded because of previous errors"}"#
    );
}

#[test]
fn scenario_6_a_conflicting_write_from_another_connection_empties_exec() {
    let mut engine = engine(10);
    let a = connect(&mut engine);
    let b = connect(&mut engine);

    engine.process_line(&format!(r#"{{"command":"WATCH","id":{a},"args":["foo"]}}"#));
    engine.process_line(&format!(
        r#"{{"command":"SET","id":{b},"args":["foo",2]}}"#
    ));
    engine.process_line(&format!(r#"{{"command":"MULTI","id":{a}}}"#));
    let reply = engine.process_line(&format!(
        r#"{{"command":"SET","id":{a},"args":["foo",3]}}"#
    ));
    assert_eq!(reply, r#"{"status":"QUEUED"}"#);

    let reply = engine.process_line(&format!(r#"{{"command":"EXEC","id":{a}}}"#));
    assert_eq!(reply, r#"{"status":"OK"}"#);

    let reply = engine.process_line(&format!(r#"{{"command":"GET","id":{a},"args":["foo"]}}"#));
    assert_eq!(reply, r#"{"status":"OK","result":2}"#);
}

#[test]
fn scenario_6_variant_unwatch_lets_the_transaction_through() {
    let mut engine = engine(10);
    let a = connect(&mut engine);
    let b = connect(&mut engine);

    engine.process_line(&format!(r#"{{"command":"WATCH","id":{a},"args":["foo"]}}"#));
    engine.process_line(&format!(r#"{{"command":"UNWATCH","id":{a}}}"#));
    engine.process_line(&format!(
        r#"{{"command":"SET","id":{b},"args":["foo",2]}}"#
    ));
    engine.process_line(&format!(r#"{{"command":"MULTI","id":{a}}}"#));
    engine.process_line(&format!(
        r#"{{"command":"SET","id":{a},"args":["foo",3]}}"#
    ));

    let reply = engine.process_line(&format!(r#"{{"command":"EXEC","id":{a}}}"#));
    assert_eq!(reply, r#"{"status":"OK","results":[{"status":"OK"}]}"#);

    let reply = engine.process_line(&format!(r#"{{"command":"GET","id":{a},"args":["foo"]}}"#));
    assert_eq!(reply, r#"{"status":"OK","result":3}"#);
}

#[test]
fn dispatcher_error_paths() {
    let mut engine = engine(10);
    assert_eq!(
        engine.process_line("not json"),
        r#"{"status":"ERROR","detail":"could not parse json"}"#
    );
    assert_eq!(
        engine.process_line("{}"),
        r#"{"status":"ERROR","detail":"'command' not present in request"}"#
    );
    assert_eq!(
        engine.process_line(r#"{"command":"GET","args":["k"]}"#),
        r#"{"status":"ERROR","detail":"id not supplied"}"#
    );
    assert_eq!(
        engine.process_line(r#"{"command":"GET","id":500,"args":["k"]}"#),
        r#"{"status":"ERROR","detail":"id 500 not known"}"#
    );
    let id = connect(&mut engine);
    assert_eq!(
        engine.process_line(&format!(r#"{{"command":"NOTACOMMAND","id":{id}}}"#)),
        r#"{"status":"ERROR","detail":"command 'NOTACOMMAND' not found"}"#
    );
}

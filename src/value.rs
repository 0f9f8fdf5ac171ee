// Value and key types shared by the store, the watch table, and the wire protocol.

use serde_json::Value as Json;

/// A stored value: either a 64-bit signed integer, a string, or an opaque
/// scalar (booleans, floats, null) that INCR/DECR must never touch.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Str(String),
    /// Any JSON scalar that isn't a string and isn't representable as an i64.
    Other(Json),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The value a missing-key GET returns: an empty string, indistinguishable
    /// from a key that was SET to `""`.
    pub fn missing() -> Value {
        Value::Str(String::new())
    }

    pub fn to_json(&self) -> Json {
        match self {
            Value::Int(i) => Json::from(*i),
            Value::Str(s) => Json::from(s.clone()),
            Value::Other(j) => j.clone(),
        }
    }

    pub fn from_json(json: Json) -> Value {
        match json {
            Json::String(s) => Value::Str(s),
            Json::Number(ref n) if n.is_i64() => Value::Int(n.as_i64().unwrap()),
            other => Value::Other(other),
        }
    }
}

/// A key is any scalar the JSON encoder can produce; equality is structural.
/// Floats carry their bit pattern so the type can derive `Eq`/`Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Int(i64),
    Str(String),
    Bool(bool),
    FloatBits(u64),
    Null,
}

impl Key {
    pub fn from_json(json: &Json) -> Option<Key> {
        match json {
            Json::String(s) => Some(Key::Str(s.clone())),
            Json::Number(n) if n.is_i64() => Some(Key::Int(n.as_i64().unwrap())),
            Json::Number(n) => n.as_f64().map(|f| Key::FloatBits(f.to_bits())),
            Json::Bool(b) => Some(Key::Bool(*b)),
            Json::Null => Some(Key::Null),
            Json::Array(_) | Json::Object(_) => None,
        }
    }

    /// Best-effort key derived from an arbitrary JSON value. The wire
    /// contract guarantees `args` holds only scalars (spec.md §6), so the
    /// fallback only matters for a malformed request.
    pub fn from_json_lossy(json: &Json) -> Key {
        Key::from_json(json).unwrap_or_else(|| Key::Str(json.to_string()))
    }

    pub fn to_json(&self) -> Json {
        match self {
            Key::Int(i) => Json::from(*i),
            Key::Str(s) => Json::from(s.clone()),
            Key::Bool(b) => Json::from(*b),
            Key::FloatBits(bits) => Json::from(f64::from_bits(*bits)),
            Key::Null => Json::Null,
        }
    }
}

// In-memory key/value cache engine: JSON-framed requests in, one structured
// reply per request out (spec.md §1). The store, connection registry, watch
// table, transaction manager and dispatcher are the core; `config` and
// `engine` tie them together for the thin frame loop in `main.rs`.

pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod storage;
pub mod transaction;
pub mod value;
pub mod watch;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::EngineError;
pub use protocol::{Request, Response};

// Error taxonomy for the engine. Every variant maps to a `detail` string in
// the wire contract (spec.md §7); the dispatcher always flattens these into
// a `Response`, never aborting the engine.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("could not parse json")]
    Parse,

    #[error("{0}")]
    Envelope(String),

    #[error("{0}")]
    ArgShape(String),

    #[error("{0} works only on 64 bit signed integers")]
    TypeError(&'static str),

    #[error("{0} would overflow")]
    Overflow(&'static str),

    #[error("{0}")]
    TxProtocol(String),
}

impl EngineError {
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

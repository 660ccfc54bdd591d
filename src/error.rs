/// Errors raised at the loader boundary. The core solver primitives assume
/// well-formed clauses and never return a `Result` themselves (spec.md §7).
#[derive(thiserror::Error, Debug)]
pub enum CnfError {
    #[error("line {line}: invalid integer token {token:?}")]
    Parse { line: usize, token: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading `config.json`.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("missing key {0:?}")]
    MissingKey(&'static str),
    #[error("key {key:?} has the wrong type, expected {expected}")]
    WrongType { key: &'static str, expected: &'static str },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

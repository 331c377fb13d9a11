use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("BIN lookup unavailable: {0}")]
    Unavailable(String),

    #[error("BIN not found")]
    NotFound,
}

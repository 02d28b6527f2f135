use thiserror::Error;

/// Errors produced by model constructors and parsers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown discipline code: {0}")]
    UnknownDiscipline(String),
}

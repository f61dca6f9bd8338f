//! Error types for cssnorm operations.

use thiserror::Error;

/// Errors that can occur while turning raw CSS text into values.
///
/// Shorthand expansion itself never fails: a malformed shorthand expands to
/// an empty [`NormalizedResult`](crate::NormalizedResult). These errors only
/// surface at the text boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("empty CSS value")]
    EmptyValue,

    #[error("invalid token in CSS value: {0}")]
    InvalidToken(String),

    #[error("CSS syntax error at line {line}, column {column}")]
    Syntax { line: u32, column: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("receipt id must not be empty")]
    EmptyId,

    #[error("receipt id contains character {found:?} not allowed in a path segment")]
    InvalidIdCharacter { found: char },
}

//! Domain-level errors (no external dependencies)

use generational_arena::Index;
use thiserror::Error;

/// Domain errors represent violated preconditions of tree operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("node is not part of this tree")]
    NodeNotFound,

    #[error("unknown node index: {0:?}")]
    UnknownNode(Index),

    #[error("node already attached to a parent: {0:?}")]
    AlreadyAttached(Index),

    #[error("node supplied as both children: {0:?}")]
    DuplicateChild(Index),

    #[error("cursor is past the end")]
    CursorAtEnd,
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;

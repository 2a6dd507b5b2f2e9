//! Errors returned by fallible tree operations.

use thiserror::Error;

/// The ways a tree operation can fail. Lookups that merely come up empty
/// return `None` instead; only operations that require the item to be
/// present report an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The requested item is not stored in the tree.
    #[error("item not in tree")]
    NotFound,
}

/// Shorthand for results of tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

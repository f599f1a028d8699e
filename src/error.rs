//! Errors reported by [`Tree`][crate::Tree] construction and traversal.

use thiserror::Error;

/// Everything that can go wrong when building or walking a [`Tree`][crate::Tree].
///
/// None of these leave a tree in a modified state: construction errors mean no
/// tree was produced and traversal errors only affect the call that raised them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// Neither an explicit [`Order`][crate::Order] nor a natural order was available.
    #[error("no ordering available: supply an Order or use an element type implementing Ord")]
    NoOrdering,

    /// A required argument was absent.
    #[error("invalid argument: `{0}` must be present")]
    MissingArgument(&'static str),

    /// A traversal was requested on a tree with no elements.
    #[error("tree is empty")]
    EmptyTree,

    /// The requested traversal order is not supported.
    #[error("{0} traversal is not implemented")]
    NotImplemented(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T, E = TreeError> = std::result::Result<T, E>;

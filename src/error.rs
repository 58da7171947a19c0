use derive_more::Display;
use thiserror::Error;

/// Identifies one of the two input trees.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    /// The tree being edited.
    #[display(fmt = "first")]
    First,

    /// The tree being edited into.
    #[display(fmt = "second")]
    Second,
}

/// The reasons why an adjacency does not describe a tree.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, Hash)]
pub enum InvalidTree {
    /// The root is not a vertex of the tree.
    #[error("the root is not a vertex of the tree")]
    MissingRoot,

    /// A vertex lists a neighbor that is not a vertex of the tree.
    #[error("a vertex refers to a neighbor the tree does not contain")]
    UnknownVertex,

    /// A vertex is reachable from the root along more than one path.
    #[error("the tree contains a cycle")]
    Cycle,

    /// Some vertices are not reachable from the root.
    #[error("only {reached} of {total} vertices are reachable from the root")]
    Disconnected { reached: usize, total: usize },
}

/// The reasons why a tree edit distance cannot be computed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Error {
    /// One of the inputs is not a tree.
    #[error("the {side} tree is invalid")]
    InvalidTree {
        side: Side,
        #[source]
        source: InvalidTree,
    },

    /// A cost function returned a value below zero.
    #[error("edit costs must not be negative")]
    NegativeCost,
}

//! # Overview
//!
//! This crate provides an implementation of the [Zhang-Shasha algorithm][zhang-shasha] for the
//! edit distance between rooted, ordered trees, that is, the lowest cost of transforming one tree
//! into the other by removing, inserting and relabeling vertices, according to a user-defined
//! measure for the cost of each edit. Alongside the distance, one sequence of edits of lowest cost
//! is reconstructed.
//!
//! Removing a vertex splices its children into its parent in its place, inserting a vertex adopts
//! a consecutive range of siblings as its children, and the order of siblings is always
//! preserved.
//!
//! [zhang-shasha]: https://doi.org/10.1137/0218082
//!
//! # Example
//!
//! ```rust
//! use zhang_shasha::*;
//! use std::collections::HashMap;
//!
//! //     f            f
//! //    / \          / \
//! //   d   e   ->   c   e
//! //  / \           |
//! // a   c          d
//! //     |         / \
//! //     b        a   b
//! let a: HashMap<_, _> = [
//!     ('f', vec!['d', 'e']),
//!     ('d', vec!['a', 'c']),
//!     ('c', vec!['b']),
//!     ('a', vec![]),
//!     ('b', vec![]),
//!     ('e', vec![]),
//! ]
//! .into();
//!
//! let b: HashMap<_, _> = [
//!     ('f', vec!['c', 'e']),
//!     ('c', vec!['d']),
//!     ('d', vec!['a', 'b']),
//!     ('a', vec![]),
//!     ('b', vec![]),
//!     ('e', vec![]),
//! ]
//! .into();
//!
//! let ted = TreeEditDistance::new(&a, &'f', &b, &'f');
//!
//! assert_eq!(ted.distance(), Ok(2));
//!
//! assert_eq!(ted.edit_script(), Ok(&[
//!     Edit::Match(&'a', &'a'),
//!     Edit::Match(&'b', &'b'),
//!     Edit::Remove(&'c'),
//!     Edit::Match(&'d', &'d'),
//!     Edit::Insert(&'c'),
//!     Edit::Match(&'e', &'e'),
//!     Edit::Match(&'f', &'f'),
//! ][..]));
//! ```
//!
//! # Logging
//!
//! With the `tracing` feature enabled, the computation emits [tracing] events.
//!
//! [tracing]: https://docs.rs/tracing

mod annotate;
mod cost;
mod diff;
mod distance;
mod edit;
mod error;
mod tree;

pub use annotate::*;
pub use cost::*;
pub use diff::*;
pub use distance::*;
pub use edit::*;
pub use error::*;
pub use tree::*;

mod script;
mod tracing_macros;

pub(crate) use script::*;
pub(crate) use tracing_macros::*;

/*!
# Errors

All recoverable failures of this crate are raised on malformed input and are
never retried internally; callers must correct the input and repeat the call.
Every fallible operation either fully succeeds or leaves its receiver
unchanged. Out-of-contract arguments (node indices `>= n`) panic instead, as
documented per method.
*/

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Errors raised by tree surgery and spanning tree sampling
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The structure is not a valid rooted tree: the number of parentless
    /// nodes differs from one (a disconnected forest or a cycle is present)
    #[error("expected exactly one parentless node but found {0}")]
    InvalidTree(NumNodes),

    /// No path exists from `from` to `to` along parent->child links
    #[error("no path from node {from} to node {to}")]
    PathNotFound {
        /// Start of the requested path
        from: Node,
        /// Target of the requested path
        to: Node,
    },

    /// A bulk label replacement supplied a different number of label pairs
    /// than there are edges on the affected path
    #[error("path has {expected} edges but {found} label pairs were supplied")]
    EdgeCountMismatch {
        /// Number of edges on the path
        expected: usize,
        /// Number of label pairs supplied
        found: usize,
    },

    /// The input graph of the spanning tree sampler is not connected
    #[error("graph is not connected")]
    DisconnectedGraph,
}

/// Crate-local result alias
pub type Result<T> = std::result::Result<T, TreeError>;

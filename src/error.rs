//! Error types for txt2 formatting.

use std::fmt;

use crate::nodes::Sourcepos;

/// Errors that can occur while formatting a document tree.
///
/// None of these are recoverable within a render: the formatter stops at the
/// first one and no partial output is returned by [`render`](crate::render).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The formatter has no handler for this node type at this position.
    #[error("unsupported node type `{node_type}` at {sourcepos}")]
    UnsupportedNodeType {
        /// Name of the offending node type.
        node_type: &'static str,
        /// Source position of the node, `0:0-0:0` when unknown.
        sourcepos: Sourcepos,
    },

    /// The tree violates a structural precondition of the formatter.
    #[error("malformed tree at {sourcepos}: {reason}")]
    MalformedTree {
        /// Source position of the offending node, `0:0-0:0` when unknown.
        sourcepos: Sourcepos,
        /// What is wrong with it.
        reason: String,
    },

    /// The output sink refused a write.
    #[error("write to output failed")]
    Fmt(#[from] fmt::Error),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

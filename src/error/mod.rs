//! Error types for hunters-rabbits
//!
//! Every fallible operation in the crate reports one of these kinds. None of
//! them is retried internally; the caller decides what the player sees.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for board operations
#[derive(Error, Debug)]
pub enum BoardError {
    /// A vertex with this id is already on the board
    #[error("Vertex already in graph: {0}")]
    DuplicateVertex(String),

    /// No vertex with this id is on the board
    #[error("Vertex not in graph: {0}")]
    UnknownVertex(String),

    /// The unordered pair is already an edge
    #[error("Edge already in graph: ({u}, {v})")]
    EdgeExists {
        /// First endpoint
        u: String,
        /// Second endpoint
        v: String,
    },

    /// The unordered pair is not an edge
    #[error("Edge not in graph: ({u}, {v})")]
    EdgeNotFound {
        /// First endpoint
        u: String,
        /// Second endpoint
        v: String,
    },

    /// The document does not follow the graph grammar
    #[error("Malformed graph document: {0}")]
    MalformedDocument(String),

    /// The document source could not be opened, read or written
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        /// Path of the document
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BoardError {
    /// Build an `EdgeExists` error from two ids
    pub fn edge_exists(u: &str, v: &str) -> Self {
        Self::EdgeExists {
            u: u.to_string(),
            v: v.to_string(),
        }
    }

    /// Build an `EdgeNotFound` error from two ids
    pub fn edge_not_found(u: &str, v: &str) -> Self {
        Self::EdgeNotFound {
            u: u.to_string(),
            v: v.to_string(),
        }
    }

    /// Build a `MalformedDocument` error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDocument(message.into())
    }

    /// Whether this error came from the document source rather than its contents
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;

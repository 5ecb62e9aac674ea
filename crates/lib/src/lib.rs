//!
//! dotpath: path-addressed access to nested trees via dot-delimited paths.
//! This library provides an in-memory tree model and a small engine of pure
//! operations over it.
//!
//! ## Core Concepts
//!
//! * **Maps (`tree::Map`)**: The tree itself — an insertion-ordered map of
//!   string keys to values, nested to any depth.
//! * **Values (`tree::Value`)**: Everything a tree holds: null, booleans,
//!   integers, text, lists, and nested maps.
//! * **Paths (`tree::Path`, `tree::PathBuf`)**: Dot-delimited addresses
//!   such as `"server.host"`. Empty segments are preserved and meaningful:
//!   a trailing dot requests a list append on write and addresses "this
//!   node" on read.
//! * **Engine operations**: `fetch`, `ping`, `extend`, `touch`, `exclude`
//!   and `normalize` — recursive tree-walks with copy-on-write semantics.
//!   Mutating operations return a new root; inputs are never modified, so
//!   the same source tree can be shared across threads freely.
//! * **Normalization**: `normalize` explodes keys containing dots
//!   (`{"a.b.c": 1}`) into nested structure (`{"a": {"b": {"c": 1}}}`),
//!   recursively.
//!
//! ## Usage
//!
//! ```
//! use dotpath::{Map, Value};
//!
//! let tree = Map::new().with("server", Map::new().with("host", "localhost"));
//!
//! assert_eq!(tree.fetch("server.host", Value::Null), "localhost");
//! assert!(tree.ping("server.host"));
//!
//! // Writes return a new tree; the original is untouched
//! let tree = tree.extend("server.port", 8080);
//! assert_eq!(tree.fetch("server.port", 0), 8080);
//!
//! let tree = tree.exclude("server.host");
//! assert!(!tree.ping("server.host"));
//! ```

pub mod constants;
pub mod tree;

/// Re-export the core tree types for easier access.
pub use tree::{List, Map, Value};

/// Result type used throughout the dotpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dotpath library.
///
/// The engine operations themselves never fail (absence and type conflicts
/// are resolved by policy); errors come from the typed-access and JSON
/// layers around them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured tree access errors from the tree module
    #[error(transparent)]
    Tree(tree::TreeError),

    /// Structured path errors from the tree module
    #[error(transparent)]
    Path(tree::PathError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::Tree(_) => "tree",
            Error::Path(_) => "path",
        }
    }

    /// Check if this error is a type mismatch from typed access.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if this error is serialization-related.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Serialize(_) => true,
            Error::Tree(tree_err) => tree_err.is_unsupported_json(),
            _ => false,
        }
    }

    /// Check if this error is path-related.
    pub fn is_path_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }
}

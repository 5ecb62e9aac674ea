//! The path-addressable tree: value types, dot paths, and the engine
//! operations.
//!
//! A tree is a [`Map`] whose values are scalars, [`List`]s, or further
//! maps. Locations inside it are addressed by dot-delimited [`Path`]s, and
//! the engine methods on `Map` ([`Map::fetch`], [`Map::ping`],
//! [`Map::extend`], [`Map::touch`], [`Map::exclude`], [`Map::normalize`])
//! walk those paths with copy-on-write semantics: the mutating operations
//! return a new root and never touch their input.
//!
//! # Core Types
//!
//! - [`Value`] - Everything a tree can hold
//! - [`Map`] - Insertion-ordered string-keyed container, the tree root
//! - [`List`] - Ordered collection, the target of trailing-dot appends
//! - [`Path`] / [`PathBuf`] - Borrowed/owned dot-delimited paths

// The value module first: list and map both store Value
pub mod value;

pub mod errors;
pub mod list;
pub mod map;
pub mod path;

mod engine;

// Re-export core types
pub use errors::TreeError;
pub use list::List;
pub use map::Map;
pub use path::{Path, PathBuf, PathError, Segment};
pub use value::Value;

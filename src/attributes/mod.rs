//! `.gitattributes` content handling.
//!
//! The merge pass is a pure text transform; the writer owns the file I/O
//! around it, including the staged replacement used for appends.

pub mod merge;
pub mod writer;

pub use merge::merge_duplicate_directives;
pub use writer::{Operation, OperationKind};

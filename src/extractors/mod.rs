//! Tree-sitter based extractors.
//!
//! - `base` - source text ownership and byte-accurate node slicing
//! - `go` - locating the target interface and building the generation model

pub mod base;
pub mod go;

pub use base::BaseExtractor;
pub use go::GoInterfaceExtractor;

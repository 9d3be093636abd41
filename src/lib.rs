// gensubstate - tree-sitter powered test-double generator for Go
//
// Reads one Go file, finds a named interface, and writes a companion file with
// a field-backed implementation plus `With<Method>` injectors for test setup.
// Architecture: extract (tree-sitter walk) -> model -> render -> format -> write.

pub mod config;
pub mod errors;
pub mod extractors;
pub mod format;
pub mod generate;
pub mod language;
pub mod model;
pub mod render;
pub mod utils;

pub use config::{GenerateOptions, DEFAULT_DESTINATION, DEFAULT_TYPE_NAME};
pub use errors::{GenerateError, RenderError, Result};
pub use format::{FormatError, GofmtFormatter, SourceFormatter, TreeSitterFormatter};
pub use generate::{extract_model, generate, generate_source};
pub use model::{field_name_for, GenerationModel, Import, MethodDescriptor};
pub use render::{render, render_source};

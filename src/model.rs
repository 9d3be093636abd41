//! Intermediate model handed from the extractor to the renderer.
//!
//! Type expressions are kept as the exact source text they were written as,
//! never re-printed from a parsed form.

/// Import path every generated file needs for its constructor signature.
pub const TESTING_IMPORT: &str = "\"testing\"";

/// A single method of the target interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Method name as declared in the interface
    pub method_name: String,
    /// Backing struct field and builder parameter name, see [`field_name_for`]
    pub field_name: String,
    /// Raw source text of each parameter type, one entry per parameter
    pub param_types: Vec<String>,
    /// Raw source text of the single result type, if the method has one
    pub return_type: Option<String>,
}

impl MethodDescriptor {
    pub fn new(method_name: String, param_types: Vec<String>, return_type: Option<String>) -> Self {
        Self {
            field_name: field_name_for(&method_name),
            method_name,
            param_types,
            return_type,
        }
    }
}

/// An import declaration carried over into the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Alias identifier (`foo`, `_` or `.`) when the import declares one
    pub alias: Option<String>,
    /// The path literal exactly as written, delimiters included
    pub path: String,
}

impl Import {
    pub fn new(alias: Option<String>, path: impl Into<String>) -> Self {
        Self {
            alias,
            path: path.into(),
        }
    }

    /// The implicit `testing` import added to every generated file.
    pub fn testing() -> Self {
        Self::new(None, TESTING_IMPORT)
    }
}

/// Everything the renderer needs, built once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationModel {
    /// Path of the source file, used for the provenance header
    pub source_path: String,
    pub package_name: String,
    /// Declared name of the located interface (original casing)
    pub interface_name: String,
    /// Implicit testing import first, then source imports in declaration order
    pub imports: Vec<Import>,
    /// One descriptor per interface method, in declaration order
    pub methods: Vec<MethodDescriptor>,
}

/// Derive a field name: first character lowercased, remainder unchanged.
///
/// `Foo` and `foo` both map to `foo`; the collision is left for the Go
/// compiler to report.
pub fn field_name_for(method_name: &str) -> String {
    let mut chars = method_name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

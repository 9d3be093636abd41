//! Error taxonomy shared by the extractor, the renderer and the write path.

use std::path::PathBuf;
use thiserror::Error;

use crate::format::FormatError;

/// Every way a single generation run can fail.
///
/// A run is all-or-nothing: any of these means no output was produced and the
/// destination file was not touched.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No type declaration with the requested name resolves to an interface.
    #[error("no interface named '{type_name}' found in {source_path}")]
    NotFound {
        type_name: String,
        source_path: String,
    },

    /// An interface method declares two or more results.
    #[error("method {method}: multiple return args are not supported")]
    UnsupportedMultipleReturns { method: String },

    /// An interface method's single result is itself a function type.
    #[error("method {method}: function return args are not supported")]
    UnsupportedFunctionReturn { method: String },

    /// The located interface declares type parameters, which the generated
    /// non-generic struct cannot carry.
    #[error("interface {type_name}: type parameters are not supported")]
    UnsupportedTypeParameters { type_name: String },

    #[error("render output: {0}")]
    Render(#[from] RenderError),

    /// The input file does not parse as Go.
    #[error("{path}:{line}:{column}: source does not parse as Go")]
    InvalidSource {
        path: String,
        line: usize,
        column: usize,
    },

    #[error("output file must be a .go file: {}", path.display())]
    InvalidDestination { path: PathBuf },

    #[error("load Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures turning a model into valid output text.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The method has nothing to return, so there is no type for its backing field.
    #[error("method {method} has no return value to back a field")]
    MissingReturnType { method: String },

    /// The derived field name is a Go keyword or an identifier the generated
    /// code already uses, so the output would not compile.
    #[error("method {method}: field name '{field}' is reserved in generated code")]
    ReservedFieldName { method: String, field: String },

    #[error("format generated source: {0}")]
    Format(#[from] FormatError),
}

pub type Result<T> = std::result::Result<T, GenerateError>;

//! Source reformatting collaborators.
//!
//! The renderer hands its substituted text to a [`SourceFormatter`] before
//! anything is written; a formatter failure means the text is not valid Go.

mod builtin;
mod gofmt;

pub use builtin::TreeSitterFormatter;
pub use gofmt::GofmtFormatter;

use thiserror::Error;

/// Reformat Go source text, rejecting text that does not parse
pub trait SourceFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

impl<F: SourceFormatter + ?Sized> SourceFormatter for &F {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        (**self).format(source)
    }
}

impl<F: SourceFormatter + ?Sized> SourceFormatter for Box<F> {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        (**self).format(source)
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("{line}:{column}: syntax error near '{snippet}'")]
    Syntax {
        line: usize,
        column: usize,
        snippet: String,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Command {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("{program} produced non-UTF-8 output")]
    InvalidOutput { program: String },

    #[error("load Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("run formatter: {0}")]
    Io(#[from] std::io::Error),
}

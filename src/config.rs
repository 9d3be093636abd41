//! Explicit parameters for one generation run.
//!
//! Everything the pipeline needs is passed in here; nothing is read from the
//! environment or process-wide flags below the CLI.

use crate::errors::{GenerateError, Result};
use crate::language::is_go_file;
use std::path::PathBuf;

/// Interface name looked up when none is given
pub const DEFAULT_TYPE_NAME: &str = "Substate";

/// Output file written when none is given
pub const DEFAULT_DESTINATION: &str = "substate_gen.go";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Go file containing the interface
    pub source: PathBuf,
    /// Generated file, overwritten on success
    pub destination: PathBuf,
    /// Interface to implement, matched case-insensitively
    pub type_name: String,
}

impl GenerateOptions {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            type_name: DEFAULT_TYPE_NAME.to_string(),
        }
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// Reject destinations the generator must not write to
    pub fn validate(&self) -> Result<()> {
        if !is_go_file(&self.destination) {
            return Err(GenerateError::InvalidDestination {
                path: self.destination.clone(),
            });
        }
        Ok(())
    }
}

//! Generation pipeline: read, extract, render, write.
//!
//! Each entry point either completes or fails with a single [`GenerateError`];
//! nothing is written unless the whole run succeeded.

use crate::config::GenerateOptions;
use crate::errors::{GenerateError, Result};
use crate::extractors::GoInterfaceExtractor;
use crate::format::SourceFormatter;
use crate::language::{first_syntax_error, one_based_position, parse_go};
use crate::model::GenerationModel;
use crate::render::render;
use crate::utils::paths::{destination_dir, to_unix_style};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Build the model for `type_name` from Go source text
///
/// `source_path` is only recorded for the provenance header and error messages.
pub fn extract_model(source_path: &str, content: &str, type_name: &str) -> Result<GenerationModel> {
    let invalid_source = |line: usize, column: usize| GenerateError::InvalidSource {
        path: source_path.to_string(),
        line,
        column,
    };

    let tree = parse_go(content)?.ok_or_else(|| invalid_source(1, 1))?;

    if let Some(error) = first_syntax_error(tree.root_node()) {
        let (line, column) = one_based_position(error);
        return Err(invalid_source(line, column));
    }

    GoInterfaceExtractor::new(source_path.to_string(), content.to_string()).extract(&tree, type_name)
}

/// Read the source file and return the formatted generated text
pub fn generate_source<F: SourceFormatter + ?Sized>(
    options: &GenerateOptions,
    formatter: &F,
) -> Result<String> {
    let content = fs::read_to_string(&options.source)
        .map_err(|e| GenerateError::io(&options.source, e))?;

    let model = extract_model(
        &to_unix_style(&options.source),
        &content,
        &options.type_name,
    )?;

    Ok(render(&model, formatter)?)
}

/// Run the whole pipeline and replace the destination file with the result
pub fn generate<F: SourceFormatter + ?Sized>(options: &GenerateOptions, formatter: &F) -> Result<()> {
    options.validate()?;

    let output = generate_source(options, formatter)?;
    write_atomically(&options.destination, output.as_bytes())?;

    debug!(
        "Wrote {} bytes to {}",
        output.len(),
        options.destination.display()
    );
    Ok(())
}

/// Stage the contents next to the destination, then rename over it
fn write_atomically(destination: &Path, contents: &[u8]) -> Result<()> {
    let dir = destination_dir(destination);
    let mut staged = NamedTempFile::new_in(dir).map_err(|e| GenerateError::io(dir, e))?;

    staged
        .write_all(contents)
        .map_err(|e| GenerateError::io(staged.path(), e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        staged
            .as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(|e| GenerateError::io(staged.path(), e))?;
    }

    staged
        .persist(destination)
        .map_err(|e| GenerateError::io(destination, e.error))?;

    Ok(())
}

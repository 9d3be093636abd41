// Path Conversion Utilities
//
// Renders paths for the provenance header and resolves where the atomic
// write stages its temporary file.

use std::path::{Path, MAIN_SEPARATOR};

/// Convert a path to Unix-style (`/` separators) for the generated header
///
/// The path is otherwise kept as supplied, so `go generate` runs (which pass
/// a bare file name) produce the same header on every platform.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use gensubstate::utils::paths::to_unix_style;
///
/// assert_eq!(to_unix_style(Path::new("pkg/substate.go")), "pkg/substate.go");
/// ```
pub fn to_unix_style(path: &Path) -> String {
    let path_str = path.to_string_lossy();

    // On Unix, MAIN_SEPARATOR is already '/', so this is a no-op
    if MAIN_SEPARATOR == '\\' {
        path_str.replace('\\', "/")
    } else {
        path_str.into_owned()
    }
}

/// Directory the destination file lives in
///
/// A bare file name resolves to the current directory, so the temporary file
/// lands on the same filesystem as the destination and the final rename is atomic.
pub fn destination_dir(destination: &Path) -> &Path {
    match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

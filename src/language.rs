//! Language Support - tree-sitter Go configuration
//!
//! All tree-sitter setup lives here so the extractor and the built-in
//! formatter parse Go the same way.

use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// File suffix the generator reads and writes.
pub const GO_EXTENSION: &str = "go";

/// Get the tree-sitter Go grammar
pub fn go_language() -> tree_sitter::Language {
    tree_sitter_go::LANGUAGE.into()
}

/// Create a parser configured for Go
pub fn go_parser() -> Result<Parser, tree_sitter::LanguageError> {
    let mut parser = Parser::new();
    parser.set_language(&go_language())?;
    Ok(parser)
}

/// Parse Go source text into a syntax tree
///
/// Returns `Ok(None)` only when tree-sitter gives up without a tree, which
/// cannot happen without a timeout or cancellation flag set.
pub fn parse_go(content: &str) -> Result<Option<Tree>, tree_sitter::LanguageError> {
    let mut parser = go_parser()?;
    Ok(parser.parse(content, None))
}

/// Whether a path carries the `.go` suffix
pub fn is_go_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == GO_EXTENSION)
}

/// Find the first ERROR or MISSING node in document order
pub fn first_syntax_error(root: Node) -> Option<Node> {
    if !root.has_error() {
        return None;
    }
    if root.is_error() || root.is_missing() {
        return Some(root);
    }

    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        if let Some(found) = first_syntax_error(child) {
            return Some(found);
        }
    }

    // has_error() was set but no child carries it: report the node itself
    Some(root)
}

/// 1-based (line, column) of a node's start, as editors and gofmt report them
pub fn one_based_position(node: Node) -> (usize, usize) {
    let point = node.start_position();
    (point.row + 1, point.column + 1)
}

use super::{FormatError, SourceFormatter};
use crate::language::{first_syntax_error, one_based_position, parse_go};

/// In-process formatter backed by the tree-sitter Go grammar
///
/// Rejects any text containing an ERROR or MISSING node, then canonicalises
/// whitespace: trailing spaces dropped, blank-line runs collapsed to one,
/// no leading blank lines, exactly one final newline. Indentation and
/// alignment are left as rendered.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeSitterFormatter;

impl SourceFormatter for TreeSitterFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let tree = parse_go(source)?.ok_or_else(|| FormatError::Syntax {
            line: 1,
            column: 1,
            snippet: String::new(),
        })?;

        if let Some(error) = first_syntax_error(tree.root_node()) {
            let (line, column) = one_based_position(error);
            let snippet = source
                .lines()
                .nth(line - 1)
                .map(str::trim)
                .unwrap_or_default()
                .to_string();
            return Err(FormatError::Syntax {
                line,
                column,
                snippet,
            });
        }

        Ok(canonical_whitespace(source))
    }
}

fn canonical_whitespace(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut pending_blank = false;

    for line in source.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }
        out.push_str(line);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalises_whitespace() {
        let source = "\n\npackage p   \n\n\n\nfunc f() {\n\treturn \n}\n\n\n";
        let formatted = TreeSitterFormatter.format(source).unwrap();

        assert_eq!(formatted, "package p\n\nfunc f() {\n\treturn\n}\n");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let source = "package p\n\n\ntype T struct {\n\ta   int\n\tbcd string\n}   \n";
        let once = TreeSitterFormatter.format(source).unwrap();
        let twice = TreeSitterFormatter.format(&once).unwrap();

        assert_eq!(once, twice);
        assert!(once.contains("\ta   int\n"), "alignment must be preserved");
    }

    #[test]
    fn test_rejects_invalid_go() {
        let source = "package p\n\nfunc f() {\n\t)\n}\n";
        match TreeSitterFormatter.format(source) {
            Err(FormatError::Syntax { line, .. }) => {
                assert!(line >= 3, "error reported before the stray paren: {line}");
            }
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unbalanced_braces() {
        let source = "package p\n\nfunc f() {\n";
        assert!(matches!(
            TreeSitterFormatter.format(source),
            Err(FormatError::Syntax { .. })
        ));
    }
}

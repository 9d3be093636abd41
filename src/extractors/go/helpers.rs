use tree_sitter::Node;

/// Helper methods for Go-specific utilities and node text extraction
impl super::GoInterfaceExtractor {
    /// Get node text (helper method)
    pub(super) fn get_node_text(&self, node: Node) -> &str {
        self.base.get_node_text(&node)
    }

    /// Case-insensitive identifier comparison under simple case folding, so
    /// `substate`, `Substate` and `SUBSTATE` all name the same target
    pub(super) fn names_match(&self, declared: &str, requested: &str) -> bool {
        declared
            .chars()
            .map(simple_fold)
            .eq(requested.chars().map(simple_fold))
    }

    /// Whether a type node is a function signature (`func(...) ...`)
    pub(super) fn is_function_type(&self, node: Node) -> bool {
        match node.kind() {
            "function_type" => true,
            // (func()) in a type position
            "parenthesized_type" => node
                .named_child(0)
                .is_some_and(|inner| self.is_function_type(inner)),
            _ => false,
        }
    }
}

/// Map a char to a canonical member of its case-folding class
///
/// Goes through upper then lower case, keeping the char whenever a mapping
/// expands to several chars, so `ς`, `σ` and `Σ` all fold to `σ`.
fn simple_fold(c: char) -> char {
    let upper = single_char(c.to_uppercase()).unwrap_or(c);
    single_char(upper.to_lowercase()).unwrap_or(upper)
}

fn single_char(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}

#[cfg(test)]
mod tests {
    use crate::extractors::go::GoInterfaceExtractor;

    #[test]
    fn test_names_match_ignores_case() {
        let extractor = GoInterfaceExtractor::new("h.go".to_string(), String::new());

        assert!(extractor.names_match("Substate", "substate"));
        assert!(extractor.names_match("ServiceLocator", "SERVICELOCATOR"));
        assert!(extractor.names_match("Ärger", "ärger"));
        assert!(!extractor.names_match("Substate", "Substates"));
        assert!(!extractor.names_match("Substate", ""));
    }

    #[test]
    fn test_names_match_folds_case_classes() {
        let extractor = GoInterfaceExtractor::new("h.go".to_string(), String::new());

        assert!(extractor.names_match("Σ", "ς"));
        assert!(extractor.names_match("ς", "σ"));
        assert!(extractor.names_match("\u{212A}elvin", "kelvin"));
        assert!(extractor.names_match("Straße", "STRAẞE"));
        assert!(!extractor.names_match("Straße", "STRASSE"));
    }
}

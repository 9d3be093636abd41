// BaseExtractor implementation for gensubstate

use tree_sitter::Node;

/// Source text plus the path it was read from
pub struct BaseExtractor {
    pub file_path: String,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self { file_path, content }
    }

    /// Get the exact source text a node spans
    pub fn get_node_text(&self, node: &Node) -> &str {
        self.get_span_text(node.start_byte(), node.end_byte())
    }

    /// Get the exact source text between two byte offsets
    ///
    /// Out-of-range or non-boundary offsets yield an empty string rather than
    /// panicking; tree-sitter only produces such offsets for a tree that was
    /// parsed from different text.
    pub fn get_span_text(&self, start_byte: usize, end_byte: usize) -> &str {
        self.content.get(start_byte..end_byte).unwrap_or_default()
    }

    /// Find the first direct child of the given kind
    pub fn find_child_by_kind<'a>(&self, node: &Node<'a>, kind: &str) -> Option<Node<'a>> {
        let mut cursor = node.walk();
        let found = node.children(&mut cursor).find(|child| child.kind() == kind);
        found
    }
}

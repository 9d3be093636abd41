use crate::model::Import;
use tree_sitter::Node;

/// Extraction of the package clause and import specifications
impl super::GoInterfaceExtractor {
    pub(super) fn extract_package_name(&self, node: Node) -> String {
        self.base
            .find_child_by_kind(&node, "package_identifier")
            .map(|name| self.get_node_text(name).to_string())
            .unwrap_or_default()
    }

    /// Record an import spec as alias (if any) plus the path literal verbatim
    pub(super) fn extract_import_spec(&self, node: Node) -> Option<Import> {
        let path = node.child_by_field_name("path")?;

        // package_identifier, dot or blank_identifier
        let alias = node
            .child_by_field_name("name")
            .map(|name| self.get_node_text(name).to_string());

        Some(Import::new(alias, self.get_node_text(path)))
    }
}

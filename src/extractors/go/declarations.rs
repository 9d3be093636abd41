use tree_sitter::Node;

/// A top-level declaration the walk cares about, flattened out of its
/// grouping (`import (...)`, `type (...)`).
#[derive(Debug, Clone, Copy)]
pub(super) enum Declaration<'tree> {
    PackageClause(Node<'tree>),
    ImportSpec(Node<'tree>),
    TypeSpec {
        name: Node<'tree>,
        /// `[T any]` list of a generic declaration
        type_parameters: Option<Node<'tree>>,
        body: TypeBody<'tree>,
    },
    Other,
}

/// What a type declaration's underlying type is, as far as the walk is concerned.
#[derive(Debug, Clone, Copy)]
pub(super) enum TypeBody<'tree> {
    Interface(Node<'tree>),
    Other,
}

/// Classification of top-level declarations for Go
impl super::GoInterfaceExtractor {
    /// Flatten the file's top-level declarations in source order
    pub(super) fn declarations<'tree>(&self, root: Node<'tree>) -> Vec<Declaration<'tree>> {
        let mut declarations = Vec::new();
        let mut cursor = root.walk();

        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "package_clause" => declarations.push(Declaration::PackageClause(child)),
                "import_declaration" => self.push_import_specs(child, &mut declarations),
                "type_declaration" => self.push_type_specs(child, &mut declarations),
                _ => declarations.push(Declaration::Other),
            }
        }

        declarations
    }

    fn push_import_specs<'tree>(&self, node: Node<'tree>, out: &mut Vec<Declaration<'tree>>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "import_spec" => out.push(Declaration::ImportSpec(child)),
                "import_spec_list" => {
                    let mut nested_cursor = child.walk();
                    for nested_child in child.named_children(&mut nested_cursor) {
                        if nested_child.kind() == "import_spec" {
                            out.push(Declaration::ImportSpec(nested_child));
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn push_type_specs<'tree>(&self, node: Node<'tree>, out: &mut Vec<Declaration<'tree>>) {
        // `type X ...`, `type X = ...` and grouped `type ( ... )` all put their
        // specs directly under the declaration
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if !matches!(child.kind(), "type_spec" | "type_alias") {
                continue;
            }

            let (Some(name), Some(ty)) = (
                child.child_by_field_name("name"),
                child.child_by_field_name("type"),
            ) else {
                continue;
            };

            let body = match ty.kind() {
                "interface_type" => TypeBody::Interface(ty),
                _ => TypeBody::Other,
            };
            out.push(Declaration::TypeSpec {
                name,
                type_parameters: child.child_by_field_name("type_parameters"),
                body,
            });
        }
    }
}

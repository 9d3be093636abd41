use crate::errors::{GenerateError, Result};
use crate::model::MethodDescriptor;
use tracing::{debug, trace};
use tree_sitter::Node;

/// Interface method extraction for Go
impl super::GoInterfaceExtractor {
    /// Extract every method of an `interface_type` node, in declaration order
    ///
    /// Violations do not stop the scan; once every method has been looked at,
    /// the earliest recorded violation is returned.
    pub(super) fn extract_methods(&self, interface: Node) -> Result<Vec<MethodDescriptor>> {
        let mut methods = Vec::new();
        let mut violations = Vec::new();
        let mut cursor = interface.walk();

        for child in interface.named_children(&mut cursor) {
            match child.kind() {
                "method_elem" => match self.extract_method(child) {
                    Ok(method) => methods.push(method),
                    Err(violation) => violations.push(violation),
                },
                "type_elem" => {
                    debug!(
                        "Skipping embedded element '{}' at line {}",
                        self.get_node_text(child),
                        child.start_position().row + 1
                    );
                }
                _ => {}
            }
        }

        if violations.is_empty() {
            Ok(methods)
        } else {
            trace!("{} unsupported methods found", violations.len());
            Err(violations.swap_remove(0))
        }
    }

    fn extract_method(&self, node: Node) -> Result<MethodDescriptor> {
        let method_name = node
            .child_by_field_name("name")
            .map(|name| self.get_node_text(name).to_string())
            .unwrap_or_default();

        let param_types = node
            .child_by_field_name("parameters")
            .map(|params| self.extract_parameter_types(params))
            .unwrap_or_default();

        let return_type = match node.child_by_field_name("result") {
            Some(result) => self.extract_return_type(&method_name, result)?,
            None => None,
        };

        Ok(MethodDescriptor::new(method_name, param_types, return_type))
    }

    /// Raw type text per parameter; `a, b int` yields `int` twice
    pub(super) fn extract_parameter_types(&self, node: Node) -> Vec<String> {
        self.expand_parameter_list(node)
            .into_iter()
            .map(|param| param.to_string())
            .collect()
    }

    /// Validate a method's result and recover its type text
    fn extract_return_type(&self, method_name: &str, result: Node) -> Result<Option<String>> {
        let type_node = if result.kind() == "parameter_list" {
            let mut cursor = result.walk();
            let declarations: Vec<Node> = result
                .named_children(&mut cursor)
                .filter(|child| child.kind() != "comment")
                .collect();

            match declarations.as_slice() {
                // `()` declares nothing
                [] => return Ok(None),
                [declaration] if self.declared_name_count(*declaration) == 1 => {
                    match declaration.child_by_field_name("type") {
                        Some(type_node) => type_node,
                        None => return Ok(None),
                    }
                }
                _ => {
                    return Err(GenerateError::UnsupportedMultipleReturns {
                        method: method_name.to_string(),
                    })
                }
            }
        } else {
            result
        };

        if self.is_function_type(type_node) {
            return Err(GenerateError::UnsupportedFunctionReturn {
                method: method_name.to_string(),
            });
        }

        Ok(Some(self.get_node_text(type_node).to_string()))
    }

    /// One text slice per declared parameter, in order
    fn expand_parameter_list(&self, node: Node) -> Vec<&str> {
        let mut params = Vec::new();
        let mut cursor = node.walk();

        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "parameter_declaration" => {
                    if let Some(type_node) = child.child_by_field_name("type") {
                        let text = self.get_node_text(type_node);
                        for _ in 0..self.declared_name_count(child) {
                            params.push(text);
                        }
                    }
                }
                "variadic_parameter_declaration" => {
                    if let Some(text) = self.variadic_type_text(child) {
                        params.push(text);
                    }
                }
                _ => {}
            }
        }

        params
    }

    /// Number of values a parameter declaration introduces: one per name,
    /// or one for an anonymous parameter
    fn declared_name_count(&self, declaration: Node) -> usize {
        let mut cursor = declaration.walk();
        let names = declaration
            .children_by_field_name("name", &mut cursor)
            .count();
        names.max(1)
    }

    /// `...T` exactly as written, from the ellipsis to the end of the type
    fn variadic_type_text(&self, declaration: Node) -> Option<&str> {
        let type_node = declaration.child_by_field_name("type")?;
        let ellipsis = self.base.find_child_by_kind(&declaration, "...")?;
        Some(
            self.base
                .get_span_text(ellipsis.start_byte(), type_node.end_byte()),
        )
    }
}

mod declarations;
mod helpers;
mod methods;
mod specs;

use crate::errors::{GenerateError, Result};
use crate::extractors::base::BaseExtractor;
use crate::model::{GenerationModel, Import};
use declarations::{Declaration, TypeBody};
use tracing::debug;
use tree_sitter::{Node, Tree};

/// Go interface extractor that builds a [`GenerationModel`] from:
/// - the package clause
/// - every import spec, after the implicit `testing` import
/// - the method list of the first interface whose name matches the target
pub struct GoInterfaceExtractor {
    base: BaseExtractor,
}

/// Where the top-level walk stands with respect to the target interface.
enum Scan<'tree> {
    Searching,
    Located {
        name: Node<'tree>,
        type_parameters: Option<Node<'tree>>,
        interface: Node<'tree>,
    },
}

impl GoInterfaceExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(file_path, content),
        }
    }

    /// Extract the model for `type_name` (matched case-insensitively)
    ///
    /// `tree` must have been parsed from the same text this extractor holds.
    pub fn extract(&self, tree: &Tree, type_name: &str) -> Result<GenerationModel> {
        let mut package_name = String::new();
        let mut imports = vec![Import::testing()];
        let mut scan = Scan::Searching;

        for declaration in self.declarations(tree.root_node()) {
            match declaration {
                Declaration::PackageClause(node) => {
                    package_name = self.extract_package_name(node);
                }
                Declaration::ImportSpec(node) => {
                    if let Some(import) = self.extract_import_spec(node) {
                        imports.push(import);
                    }
                }
                Declaration::TypeSpec {
                    name,
                    type_parameters,
                    body: TypeBody::Interface(interface),
                } => {
                    // First match wins; later declarations are never inspected
                    if matches!(scan, Scan::Searching)
                        && self.names_match(self.get_node_text(name), type_name)
                    {
                        scan = Scan::Located {
                            name,
                            type_parameters,
                            interface,
                        };
                    }
                }
                Declaration::TypeSpec {
                    body: TypeBody::Other,
                    ..
                }
                | Declaration::Other => {}
            }
        }

        let Scan::Located {
            name,
            type_parameters,
            interface,
        } = scan
        else {
            return Err(GenerateError::NotFound {
                type_name: type_name.to_string(),
                source_path: self.base.file_path.clone(),
            });
        };

        let interface_name = self.get_node_text(name).to_string();
        if type_parameters.is_some() {
            return Err(GenerateError::UnsupportedTypeParameters {
                type_name: interface_name,
            });
        }

        debug!(
            "Located interface {} at line {} of {}",
            interface_name,
            name.start_position().row + 1,
            self.base.file_path
        );

        let methods = self.extract_methods(interface)?;

        debug!(
            "Extracted {} methods and {} imports from {}",
            methods.len(),
            imports.len(),
            self.base.file_path
        );

        Ok(GenerationModel {
            source_path: self.base.file_path.clone(),
            package_name,
            interface_name,
            imports,
            methods,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::parse_go;

    fn extract(source: &str, type_name: &str) -> Result<GenerationModel> {
        let tree = parse_go(source).unwrap().unwrap();
        GoInterfaceExtractor::new("test.go".to_string(), source.to_string()).extract(&tree, type_name)
    }

    fn method_summary(model: &GenerationModel) -> Vec<(String, String, Vec<String>, Option<String>)> {
        model
            .methods
            .iter()
            .map(|m| {
                (
                    m.method_name.clone(),
                    m.field_name.clone(),
                    m.param_types.clone(),
                    m.return_type.clone(),
                )
            })
            .collect()
    }

    #[test]
    fn test_extracts_simple_interface() {
        let model = extract(include_str!("../../../test_samples/simple.go"), "Substate").unwrap();

        assert_eq!(model.package_name, "testdata");
        assert_eq!(model.interface_name, "Substate");
        assert_eq!(model.source_path, "test.go");
        assert_eq!(model.imports, vec![Import::testing()]);
        assert_eq!(
            method_summary(&model),
            vec![
                (
                    "FooClient".to_string(),
                    "fooClient".to_string(),
                    vec![],
                    Some("FooClient".to_string())
                ),
                (
                    "BarClient".to_string(),
                    "barClient".to_string(),
                    vec![],
                    Some("BarClient".to_string())
                ),
            ]
        );
    }

    #[test]
    fn test_target_name_is_case_insensitive() {
        let source = include_str!("../../../test_samples/custom_type.go");

        let exact = extract(source, "ServiceLocator").unwrap();
        let lower = extract(source, "servicelocator").unwrap();
        let upper = extract(source, "SERVICELOCATOR").unwrap();

        assert_eq!(exact, lower);
        assert_eq!(exact, upper);
        assert_eq!(lower.interface_name, "ServiceLocator");
    }

    #[test]
    fn test_missing_interface_is_not_found() {
        let err = extract(include_str!("../../../test_samples/simple.go"), "Nope").unwrap_err();

        match err {
            GenerateError::NotFound {
                type_name,
                source_path,
            } => {
                assert_eq!(type_name, "Nope");
                assert_eq!(source_path, "test.go");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_matching_name_that_is_not_an_interface_is_not_found() {
        let source = "package p\n\ntype Substate struct {\n\tFoo int\n}\n";
        assert!(matches!(
            extract(source, "Substate"),
            Err(GenerateError::NotFound { .. })
        ));
    }

    #[test]
    fn test_struct_with_matching_name_is_skipped_for_later_interface() {
        let source = r#"package p

type substate struct{}

type Substate interface {
	Name() string
}
"#;
        let model = extract(source, "Substate").unwrap();
        assert_eq!(model.interface_name, "Substate");
        assert_eq!(model.methods.len(), 1);
    }

    #[test]
    fn test_first_matching_interface_wins() {
        let source = r#"package p

type Substate interface {
	First() int
}

type SUBSTATE interface {
	Second() (int, error)
}
"#;
        let model = extract(source, "substate").unwrap();
        assert_eq!(model.interface_name, "Substate");
        assert_eq!(model.methods[0].method_name, "First");
    }

    #[test]
    fn test_interface_inside_function_body_is_ignored() {
        let source = r#"package p

func build() {
	type Substate interface {
		Hidden() int
	}
}
"#;
        assert!(matches!(
            extract(source, "Substate"),
            Err(GenerateError::NotFound { .. })
        ));
    }

    #[test]
    fn test_grouped_type_declaration_and_alias() {
        let source = r#"package p

type (
	Other interface {
		Skip() int
	}
	Substate = interface {
		Count() int
	}
)
"#;
        let model = extract(source, "Substate").unwrap();
        assert_eq!(model.methods.len(), 1);
        assert_eq!(model.methods[0].method_name, "Count");
    }

    #[test]
    fn test_imports_keep_declaration_order_after_testing() {
        let model = extract(include_str!("../../../test_samples/external_types.go"), "Services").unwrap();

        assert_eq!(
            model.imports,
            vec![
                Import::testing(),
                Import::new(None, "\"net/http\""),
                Import::new(Some("billing".to_string()), "\"github.com/example/billing/v2\""),
            ]
        );
    }

    #[test]
    fn test_single_and_special_alias_imports() {
        let source = r#"package p

import "context"
import . "strings"
import _ "embed"
import raw `os`

type Substate interface {
	Ctx() context.Context
}
"#;
        let model = extract(source, "Substate").unwrap();

        assert_eq!(
            model.imports,
            vec![
                Import::testing(),
                Import::new(None, "\"context\""),
                Import::new(Some(".".to_string()), "\"strings\""),
                Import::new(Some("_".to_string()), "\"embed\""),
                Import::new(Some("raw".to_string()), "`os`"),
            ]
        );
    }

    #[test]
    fn test_testing_import_is_added_even_when_already_imported() {
        let source = r#"package p

import "testing"

type Substate interface {
	T() *testing.T
}
"#;
        let model = extract(source, "Substate").unwrap();
        assert_eq!(
            model.imports,
            vec![Import::testing(), Import::new(None, "\"testing\"")]
        );
    }

    #[test]
    fn test_raw_type_text_is_preserved() {
        let model = extract(include_str!("../../../test_samples/external_types.go"), "Services").unwrap();

        assert_eq!(
            method_summary(&model),
            vec![
                (
                    "HTTPClient".to_string(),
                    "hTTPClient".to_string(),
                    vec![],
                    Some("*http.Client".to_string())
                ),
                (
                    "Payments".to_string(),
                    "payments".to_string(),
                    vec!["string".to_string(), "...billing.Option".to_string()],
                    Some("billing.Client".to_string())
                ),
                (
                    "Logger".to_string(),
                    "logger".to_string(),
                    vec![],
                    Some("Logger".to_string())
                ),
            ]
        );
    }

    #[test]
    fn test_exotic_types_are_sliced_verbatim() {
        let source = r#"package p

type Substate interface {
	Cache(keys []string, byID map[int]*Entry) Store[string,  *Entry]
	Events(done <-chan struct{}) chan<- Event
	Grid() [4][4]float64
	Any() interface{ Close() error }
}
"#;
        let model = extract(source, "Substate").unwrap();

        assert_eq!(
            model.methods[0].param_types,
            vec!["[]string".to_string(), "map[int]*Entry".to_string()]
        );
        assert_eq!(
            model.methods[0].return_type.as_deref(),
            Some("Store[string,  *Entry]")
        );
        assert_eq!(model.methods[1].param_types, vec!["<-chan struct{}".to_string()]);
        assert_eq!(model.methods[1].return_type.as_deref(), Some("chan<- Event"));
        assert_eq!(model.methods[2].return_type.as_deref(), Some("[4][4]float64"));
        assert_eq!(
            model.methods[3].return_type.as_deref(),
            Some("interface{ Close() error }")
        );
    }

    #[test]
    fn test_shared_type_parameters_expand_per_name() {
        let source = r#"package p

type Substate interface {
	Sum(a, b int, label string) int
	Named(ctx context.Context) (n int)
	Paren() (string)
}
"#;
        let model = extract(source, "Substate").unwrap();

        assert_eq!(
            model.methods[0].param_types,
            vec!["int".to_string(), "int".to_string(), "string".to_string()]
        );
        assert_eq!(model.methods[1].param_types, vec!["context.Context".to_string()]);
        assert_eq!(model.methods[1].return_type.as_deref(), Some("int"));
        assert_eq!(model.methods[2].return_type.as_deref(), Some("string"));
    }

    #[test]
    fn test_method_without_result_has_no_return_type() {
        let source = "package p\n\ntype Substate interface {\n\tClose()\n}\n";
        let model = extract(source, "Substate").unwrap();

        assert_eq!(model.methods[0].return_type, None);
    }

    #[test]
    fn test_multiple_returns_are_rejected() {
        let source = include_str!("../../../test_samples/multiple_returns.go");
        match extract(source, "Substate") {
            Err(GenerateError::UnsupportedMultipleReturns { method }) => {
                assert_eq!(method, "Lookup");
            }
            other => panic!("expected UnsupportedMultipleReturns, got {other:?}"),
        }
    }

    #[test]
    fn test_named_result_list_counts_each_name() {
        let source = "package p\n\ntype Substate interface {\n\tPair() (a, b int)\n}\n";
        assert!(matches!(
            extract(source, "Substate"),
            Err(GenerateError::UnsupportedMultipleReturns { .. })
        ));
    }

    #[test]
    fn test_function_return_is_rejected() {
        let source = r#"package p

type Substate interface {
	Name() string
	Handler() func(int) error
}
"#;
        match extract(source, "Substate") {
            Err(GenerateError::UnsupportedFunctionReturn { method }) => {
                assert_eq!(method, "Handler");
            }
            other => panic!("expected UnsupportedFunctionReturn, got {other:?}"),
        }
    }

    #[test]
    fn test_parenthesised_function_return_is_rejected() {
        let source = "package p\n\ntype Substate interface {\n\tHook() (func())\n}\n";
        assert!(matches!(
            extract(source, "Substate"),
            Err(GenerateError::UnsupportedFunctionReturn { .. })
        ));
    }

    #[test]
    fn test_earliest_violation_wins() {
        let function_first = r#"package p

type Substate interface {
	Ok() int
	Handler() func()
	Pair() (int, error)
}
"#;
        assert!(matches!(
            extract(function_first, "Substate"),
            Err(GenerateError::UnsupportedFunctionReturn { .. })
        ));

        let multiple_first = r#"package p

type Substate interface {
	Pair() (int, error)
	Handler() func()
	Ok() int
}
"#;
        assert!(matches!(
            extract(multiple_first, "Substate"),
            Err(GenerateError::UnsupportedMultipleReturns { .. })
        ));
    }

    #[test]
    fn test_not_found_takes_precedence_over_violations_elsewhere() {
        let source = r#"package p

type Other interface {
	Pair() (int, error)
}
"#;
        assert!(matches!(
            extract(source, "Substate"),
            Err(GenerateError::NotFound { .. })
        ));
    }

    #[test]
    fn test_embedded_interfaces_are_skipped() {
        let source = r#"package p

type Substate interface {
	io.Closer
	Name() string
	fmt.Stringer
	Age() int
}
"#;
        let model = extract(source, "Substate").unwrap();
        let names: Vec<_> = model.methods.iter().map(|m| m.method_name.as_str()).collect();
        assert_eq!(names, vec!["Name", "Age"]);
    }

    #[test]
    fn test_methods_keep_declaration_order() {
        let source = r#"package p

type Substate interface {
	Zeta() int
	// comments between methods are ignored
	Alpha() int
	Mid() int
}
"#;
        let model = extract(source, "Substate").unwrap();
        let names: Vec<_> = model.methods.iter().map(|m| m.method_name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_generic_interface_is_rejected() {
        let source = r#"package p

type Substate[T any] interface {
	Get() T
}
"#;
        match extract(source, "substate") {
            Err(GenerateError::UnsupportedTypeParameters { type_name }) => {
                assert_eq!(type_name, "Substate");
            }
            other => panic!("expected UnsupportedTypeParameters, got {other:?}"),
        }
    }

    #[test]
    fn test_generic_interface_elsewhere_does_not_matter() {
        let source = r#"package p

type Store[K comparable, V any] interface {
	Get(K) V
}

type Substate interface {
	Name() string
}
"#;
        let model = extract(source, "Substate").unwrap();
        assert_eq!(model.methods[0].method_name, "Name");
    }

    #[test]
    fn test_empty_interface_extracts_no_methods() {
        let model = extract("package p\n\ntype Substate interface{}\n", "Substate").unwrap();
        assert!(model.methods.is_empty());
    }
}

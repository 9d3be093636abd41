// Fixed text of the generated file, one function per section.
//
// Every section ends with a newline; the renderer separates sections with a
// single blank line, which is what gofmt leaves between declarations.

/// Generated concrete type
pub const CONCRETE: &str = "substate";
/// Generated constructor
pub const CONSTRUCTOR: &str = "NewSubstateForTesting";
pub const INJECTOR: &str = "Injector";
pub const INJECTOR_FUNC: &str = "InjectorFunc";
/// Prefix of every builder function
pub const BUILDER_PREFIX: &str = "With";
/// Receiver of the accessors and parameter of the builder closures
pub const RECEIVER: &str = "s";

/// Go's reserved keywords
pub const GO_KEYWORDS: [&str; 25] = [
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Whether a field name cannot be used as a builder parameter
///
/// Besides keywords, the builder closure's receiver and the concrete type name
/// would be shadowed by a parameter of the same name.
pub fn is_reserved_field_name(field_name: &str) -> bool {
    GO_KEYWORDS.contains(&field_name) || field_name == RECEIVER || field_name == CONCRETE
}

pub fn header(source_path: &str) -> String {
    format!("// Code generated by gensubstate from {source_path}; DO NOT EDIT.\n")
}

pub fn package_clause(package_name: &str) -> String {
    format!("package {package_name}\n")
}

pub fn import_block(specs: &[String]) -> String {
    let mut block = String::from("import (\n");
    for spec in specs {
        block.push('\t');
        block.push_str(spec);
        block.push('\n');
    }
    block.push_str(")\n");
    block
}

pub fn constructor(interface_name: &str) -> String {
    format!(
        "// {CONSTRUCTOR} returns an implementation of {interface_name} which can be used\n\
         // for testing.\n\
         func {CONSTRUCTOR}(_ testing.TB, injectors ...{INJECTOR}) *{CONCRETE} {{\n\
         \tvar s {CONCRETE}\n\
         \n\
         \tfor _, injector := range injectors {{\n\
         \t\tinjector.Inject(&s)\n\
         \t}}\n\
         \n\
         \treturn &s\n\
         }}\n"
    )
}

pub fn injector_interface() -> String {
    format!(
        "// {INJECTOR} alters a {CONCRETE} while it is being constructed.\n\
         type {INJECTOR} interface {{\n\
         \tInject(*{CONCRETE})\n\
         }}\n"
    )
}

pub fn injector_func() -> String {
    format!(
        "// {INJECTOR_FUNC} defines a convenience type making it easy to implement\n\
         // {INJECTOR}s.\n\
         type {INJECTOR_FUNC} func(*{CONCRETE})\n"
    )
}

pub fn inject_method() -> String {
    format!(
        "// Inject implements the {INJECTOR} interface.\n\
         func (fn {INJECTOR_FUNC}) Inject(s *{CONCRETE}) {{\n\
         \tfn(s)\n\
         }}\n"
    )
}

pub fn builder(method_name: &str, field_name: &str, field_type: &str) -> String {
    format!(
        "// {BUILDER_PREFIX}{method_name} returns an {INJECTOR} which sets {field_name} on {CONCRETE}.\n\
         func {BUILDER_PREFIX}{method_name}({field_name} {field_type}) {INJECTOR_FUNC} {{\n\
         \treturn func({RECEIVER} *{CONCRETE}) {{\n\
         \t\t{RECEIVER}.{field_name} = {field_name}\n\
         \t}}\n\
         }}\n"
    )
}

pub fn concrete_struct(interface_name: &str, field_lines: &[String]) -> String {
    let mut def = format!(
        "// {CONCRETE} implements {interface_name} with one field backing each method.\n\
         type {CONCRETE} struct {{\n"
    );
    for line in field_lines {
        def.push('\t');
        def.push_str(line);
        def.push('\n');
    }
    def.push_str("}\n");
    def
}

pub fn accessor(interface_name: &str, method_name: &str, signature: &str, field_name: &str) -> String {
    format!(
        "// {method_name} implements the {interface_name} interface.\n\
         func ({RECEIVER} *{CONCRETE}) {signature} {{\n\
         \treturn {RECEIVER}.{field_name}\n\
         }}\n"
    )
}

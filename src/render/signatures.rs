//! Signature and declaration building utilities

use crate::model::{Import, MethodDescriptor};

/// `Name(arg0 T0, arg1 T1) R`, the accessor's signature after its receiver
pub fn build_accessor_signature(method_name: &str, param_types: &[String], return_type: &str) -> String {
    let params: Vec<String> = param_types
        .iter()
        .enumerate()
        .map(|(i, param_type)| format!("arg{} {}", i, param_type))
        .collect();

    format!("{}({}) {}", method_name, params.join(", "), return_type)
}

/// `alias "path"` or `"path"`
pub fn build_import_spec(import: &Import) -> String {
    match &import.alias {
        Some(alias) => format!("{} {}", alias, import.path),
        None => import.path.clone(),
    }
}

/// Struct field lines with types aligned in one column, as gofmt lays them out
pub fn build_field_lines(fields: &[(&MethodDescriptor, &str)]) -> Vec<String> {
    let width = fields
        .iter()
        .map(|(method, _)| method.field_name.chars().count())
        .max()
        .unwrap_or(0);

    fields
        .iter()
        .map(|(method, field_type)| format!("{:<width$} {}", method.field_name, field_type))
        .collect()
}

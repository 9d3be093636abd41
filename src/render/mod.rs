//! Renders a [`GenerationModel`] into the generated Go file.
//!
//! [`render_source`] is a pure function of the model; [`render`] adds the
//! formatting pass through a [`SourceFormatter`].

mod signatures;
pub mod template;

use crate::errors::RenderError;
use crate::format::SourceFormatter;
use crate::model::{GenerationModel, MethodDescriptor};
use signatures::{build_accessor_signature, build_field_lines, build_import_spec};

/// Substitute the model into the template, without formatting
pub fn render_source(model: &GenerationModel) -> Result<String, RenderError> {
    let fields = backed_fields(model)?;
    let interface_name = model.interface_name.as_str();

    let imports: Vec<String> = model.imports.iter().map(build_import_spec).collect();

    let mut sections = vec![
        template::header(&model.source_path),
        template::package_clause(&model.package_name),
        template::import_block(&imports),
        template::constructor(interface_name),
        template::injector_interface(),
        template::injector_func(),
        template::inject_method(),
    ];

    sections.extend(fields.iter().map(|(method, field_type)| {
        template::builder(&method.method_name, &method.field_name, field_type)
    }));

    sections.push(template::concrete_struct(
        interface_name,
        &build_field_lines(&fields),
    ));

    sections.extend(fields.iter().map(|(method, field_type)| {
        let signature =
            build_accessor_signature(&method.method_name, &method.param_types, field_type);
        template::accessor(interface_name, &method.method_name, &signature, &method.field_name)
    }));

    Ok(sections.join("\n"))
}

/// Render the model and pass the text through `formatter`
pub fn render<F: SourceFormatter + ?Sized>(
    model: &GenerationModel,
    formatter: &F,
) -> Result<String, RenderError> {
    let source = render_source(model)?;
    Ok(formatter.format(&source)?)
}

/// Pair each method with the type of its backing field
///
/// Fails on the earliest method whose field cannot be emitted.
fn backed_fields(model: &GenerationModel) -> Result<Vec<(&MethodDescriptor, &str)>, RenderError> {
    model
        .methods
        .iter()
        .map(|method| {
            if template::is_reserved_field_name(&method.field_name) {
                return Err(RenderError::ReservedFieldName {
                    method: method.method_name.clone(),
                    field: method.field_name.clone(),
                });
            }

            match &method.return_type {
                Some(return_type) => Ok((method, return_type.as_str())),
                None => Err(RenderError::MissingReturnType {
                    method: method.method_name.clone(),
                }),
            }
        })
        .collect()
}

//! Re-emit resolved annotations as source text.
//!
//! Each annotation becomes one bracketed line: the fully qualified annotation type followed, when it has any
//! arguments, by a single parenthesized argument list. Positional arguments come first in declaration order, then
//! named arguments as `name = value`.
//!
//! ## Notes
//!
//! - Array arguments are rendered shallowly: elements are joined with `, ` and a nested array contributes its
//!   own elements the same way, without braces.

use cmdshim_syntax::{Annotation, ArgValue};

use crate::emit::CodeWriter;

/// Emit one line per annotation into `writer`.
pub fn emit_annotations(writer: &mut CodeWriter<'_>, annotations: &[Annotation]) {
    for annotation in annotations {
        writer.append_line(&render_annotation(annotation));
    }
}

/// Render one annotation, brackets included.
pub fn render_annotation(annotation: &Annotation) -> String {
    let name = annotation.ty.fully_qualified();
    if !annotation.has_arguments() {
        return format!("[{}]", name);
    }

    let mut arguments: Vec<String> = annotation.positional.iter().map(render_value).collect();
    arguments.extend(
        annotation
            .named
            .iter()
            .map(|arg| format!("{} = {}", arg.name, render_value(&arg.value))),
    );

    format!("[{}({})]", name, arguments.join(", "))
}

/// Render one argument value.
pub fn render_value(value: &ArgValue) -> String {
    match value {
        ArgValue::Enum { ty, member } => format!("{}.{}", ty.fully_qualified(), member),
        ArgValue::Array(elements) => elements.iter().map(render_value).collect::<Vec<_>>().join(", "),
        ArgValue::Scalar(literal) => literal.to_string(),
    }
}

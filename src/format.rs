//! In-place rewriting of docstring line sequences.
//!
//! Line 0 of a sequence is the short description; the formatters prefix it
//! with the rendered type and append bullet fact lines after it, each
//! followed by a blank line. The caller owns the sequence throughout.

use crate::model::{DefaultValue, FieldDescriptor, TypeHandle};
use crate::render::TypeRenderer;

/// Rewrite the lines for a resolved stored field.
pub fn format_field(
    field: &FieldDescriptor,
    renderer: &dyn TypeRenderer,
    lines: &mut Vec<String>,
) {
    prefix_summary(lines, &renderer.render(&field.field_type));

    if !field.init {
        push_fact(lines, "* **field-only**".to_string());
    }
    if let Some(default) = &field.default {
        push_fact(lines, default_fact(default));
    }
    if let Some(factory) = &field.default_factory {
        push_fact(
            lines,
            format!("* **default factory:** ``{}``", factory.qualified_name()),
        );
    }
}

/// Rewrite the lines for a resolved init-only parameter.
///
/// The header type is the default value's own runtime type when a default is
/// present; the marker annotation carries no useful display information in
/// that case.
pub fn format_init_only(
    marker: &TypeHandle,
    default: Option<&DefaultValue>,
    renderer: &dyn TypeRenderer,
    lines: &mut Vec<String>,
) {
    push_fact(lines, "* **init-only**".to_string());

    let header_type = if let Some(default) = default {
        push_fact(lines, default_fact(default));
        &default.value_type
    } else {
        marker
    };
    prefix_summary(lines, &renderer.render(header_type));
}

fn default_fact(default: &DefaultValue) -> String {
    format!("* **default:** ``{}``", default.repr)
}

fn push_fact(lines: &mut Vec<String>, fact: String) {
    lines.push(fact);
    lines.push(String::new());
}

fn prefix_summary(lines: &mut Vec<String>, rendered: &str) {
    if let Some(first) = lines.first_mut() {
        *first = format!("{rendered}: {first}");
    } else {
        lines.push(format!("{rendered}: "));
    }
}

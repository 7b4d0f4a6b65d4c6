use crate::model::TypeHandle;

/// Renders a type handle into the markup placed before a docstring summary.
pub trait TypeRenderer: Send + Sync {
    fn render(&self, ty: &TypeHandle) -> String;
}

/// Default renderer: a cross-reference link when the handle carries a
/// fully-qualified name, a bare code span otherwise.
#[derive(Debug, Default)]
pub struct CrossRefRenderer;

impl TypeRenderer for CrossRefRenderer {
    fn render(&self, ty: &TypeHandle) -> String {
        match &ty.full_name {
            Some(full_name) => format!("[`{}`](#{})", ty.name, anchor_for_type(full_name)),
            None => format!("`{}`", ty.name),
        }
    }
}

/// Renderer producing bare code spans only.
#[derive(Debug, Default)]
pub struct CodeSpanRenderer;

impl TypeRenderer for CodeSpanRenderer {
    fn render(&self, ty: &TypeHandle) -> String {
        format!("`{}`", ty.name)
    }
}

fn anchor_for_type(full_name: &str) -> String {
    let mut anchor = String::with_capacity(full_name.len());
    for ch in full_name.chars() {
        if ch.is_alphanumeric() {
            anchor.push(ch.to_ascii_lowercase());
        } else if matches!(ch, '.' | ':' | '_' | '{' | '}' | '<' | '>' | '`') {
            anchor.push('-');
        } else if ch.is_whitespace() {
            anchor.push('-');
        }
    }
    while anchor.ends_with('-') {
        anchor.pop();
    }
    anchor
}

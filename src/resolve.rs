use crate::model::{DefaultValue, FieldDescriptor, RecordDescriptor, TargetKind, TypeHandle};
use crate::registry::DeclarationRegistry;

/// Outcome of a successful field resolution.
#[derive(Debug)]
pub enum ResolvedTarget<'a> {
    /// A stored field of the owning record.
    Field(&'a FieldDescriptor),
    /// A construction-time-only parameter, with its class-level default.
    InitOnly {
        marker: &'a TypeHandle,
        default: Option<&'a DefaultValue>,
    },
}

/// Split a fully-qualified dotted name into `(owner-path, leaf)`.
///
/// A name with no dot yields an empty owner-path.
#[must_use]
pub fn split_qualified_name(name: &str) -> (&str, &str) {
    match name.rsplit_once('.') {
        Some((owner, leaf)) => (owner, leaf),
        None => ("", name),
    }
}

/// Classify a documented object and locate the descriptor behind it.
///
/// A present record handle is registered under `name` as a side effect and
/// never resolves to a field itself. `None` throughout means "leave the
/// docstring untouched": non-attribute targets, attributes whose owner was
/// never observed, and leaf names matching neither an init-only parameter nor
/// a stored field all end up there. Init-only resolution is attempted before
/// the stored-field search, so an overlapping name resolves as init-only.
pub fn resolve_target<'a>(
    registry: &'a mut DeclarationRegistry,
    kind: TargetKind,
    name: &str,
    object: Option<&RecordDescriptor>,
) -> Option<ResolvedTarget<'a>> {
    if let Some(record) = object {
        registry.register(name, record.clone());
        return None;
    }

    if kind != TargetKind::Attribute {
        return None;
    }

    let (owner, leaf) = split_qualified_name(name);
    let Some(record) = registry.get(owner) else {
        tracing::trace!(attribute = %name, "owner not registered, skipping");
        return None;
    };

    if let Some((marker, default)) = record.resolve_init_only(leaf) {
        return Some(ResolvedTarget::InitOnly { marker, default });
    }

    record.field(leaf).map(ResolvedTarget::Field)
}

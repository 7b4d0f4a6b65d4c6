#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic, clippy::perf, clippy::suspicious)]
#![deny(clippy::unwrap_used, clippy::expect_used)]

//! Docstring enrichment for structured-record declarations.
//!
//! `datadoc` plugs into a documentation pipeline that visits documented
//! objects one at a time. When the visited object is a record declaration,
//! its reflected metadata is collected; when it is an attribute of a record
//! observed earlier, the attribute's docstring lines are rewritten in place:
//! the summary line gains a rendered type prefix, and bullet facts describing
//! defaults, default factories, and init-only/field-only participation are
//! appended. Everything else is left untouched.

pub mod format;
pub mod model;
pub mod process;
pub mod registry;
pub mod render;
pub mod resolve;

pub use model::{
    Annotation, AnnotationEntry, ClassDefault, DefaultValue, FactoryRef, FieldDescriptor,
    RecordDescriptor, TargetKind, TypeHandle, deserialize_record_descriptor,
    serialize_record_descriptor,
};
pub use process::DocstringEnricher;
pub use registry::DeclarationRegistry;
pub use render::{CodeSpanRenderer, CrossRefRenderer, TypeRenderer};
pub use resolve::{ResolvedTarget, resolve_target, split_qualified_name};

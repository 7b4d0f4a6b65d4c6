//! Descriptor model for record declarations observed during a documentation run.
//!
//! These types mirror what a host pipeline's reflection facility exposes for a
//! structured-record declaration: the stored fields, the raw annotation
//! entries, and any class-level defaults. They carry no behaviour beyond name
//! lookups and can be serialised into metadata sidecars by hosts that reflect
//! out of process.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle referencing a displayable type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeHandle {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl TypeHandle {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: None,
        }
    }

    #[must_use]
    pub fn qualified(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: Some(full_name.into()),
        }
    }
}

/// A concrete default recorded for a field or init-only parameter.
///
/// `repr` is rendered verbatim into the default bullet. `value_type` is the
/// runtime type of the value; the init-only formatter prefers it over the
/// generic marker annotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultValue {
    pub repr: String,
    pub value_type: TypeHandle,
}

impl DefaultValue {
    #[must_use]
    pub fn new(repr: impl Into<String>, value_type: TypeHandle) -> Self {
        Self {
            repr: repr.into(),
            value_type,
        }
    }
}

/// Reference to a default-producing factory function.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FactoryRef {
    pub module: String,
    pub name: String,
}

impl FactoryRef {
    #[must_use]
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }

    /// Fully-qualified identity of the factory, `module.name`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.module, self.name)
    }
}

/// Descriptor for one stored field of a record declaration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: TypeHandle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_factory: Option<FactoryRef>,
    #[serde(default = "field_init_default")]
    pub init: bool,
}

const fn field_init_default() -> bool {
    true
}

/// Raw annotation recorded against a leaf name in a declaration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Annotation {
    /// Ordinary declared type.
    Plain(TypeHandle),
    /// Construction-time-only marker; the handle names the marker type itself.
    InitOnly(TypeHandle),
}

/// One entry of a declaration's raw annotation mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotationEntry {
    pub name: String,
    pub annotation: Annotation,
}

/// Class-level default recorded against an attribute name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassDefault {
    pub name: String,
    pub value: DefaultValue,
}

/// Reflected metadata for one structured-record declaration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordDescriptor {
    pub name: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class_defaults: Vec<ClassDefault>,
}

impl RecordDescriptor {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    #[must_use]
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.annotation)
    }

    #[must_use]
    pub fn class_default(&self, name: &str) -> Option<&DefaultValue> {
        self.class_defaults
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.value)
    }

    /// Resolve `name` as an init-only parameter of this declaration.
    ///
    /// Returns the marker type together with the class-level default, if one
    /// is recorded. `None` is the expected outcome for every stored field and
    /// for names that carry no annotation at all.
    #[must_use]
    pub fn resolve_init_only(&self, name: &str) -> Option<(&TypeHandle, Option<&DefaultValue>)> {
        match self.annotation(name)? {
            Annotation::Plain(_) => None,
            Annotation::InitOnly(marker) => Some((marker, self.class_default(name))),
        }
    }
}

/// Category of a documented object as reported by the host pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Module,
    Class,
    Function,
    Method,
    Attribute,
    Other,
}

impl TargetKind {
    /// Parse the host's category label. Unknown labels fold into `Other`.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "module" => Self::Module,
            "class" | "exception" => Self::Class,
            "function" => Self::Function,
            "method" => Self::Method,
            "attribute" => Self::Attribute,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TargetKind::Module => "module",
            TargetKind::Class => "class",
            TargetKind::Function => "function",
            TargetKind::Method => "method",
            TargetKind::Attribute => "attribute",
            TargetKind::Other => "other",
        };
        f.write_str(text)
    }
}

/// Serialize one record descriptor into a stable, pretty-printed JSON string.
///
/// Fields are sorted by name before emission so repeated runs produce
/// byte-identical sidecars.
///
/// # Errors
/// Passes any underlying serialization failure through unchanged.
pub fn serialize_record_descriptor(record: &RecordDescriptor) -> Result<String, serde_json::Error> {
    let mut clone = record.clone();
    clone.fields.sort_by(|a, b| a.name.cmp(&b.name));
    serde_json::to_string_pretty(&clone)
}

/// Parse a record descriptor from a serialized JSON string.
///
/// # Errors
/// Passes any underlying deserialization failure through unchanged.
pub fn deserialize_record_descriptor(input: &str) -> Result<RecordDescriptor, serde_json::Error> {
    serde_json::from_str(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> RecordDescriptor {
        RecordDescriptor {
            name: "Widget".to_string(),
            full_name: "widgets.Widget".to_string(),
            fields: vec![
                FieldDescriptor {
                    name: "retries".to_string(),
                    field_type: TypeHandle::named("int"),
                    default: Some(DefaultValue::new("10", TypeHandle::named("int"))),
                    default_factory: None,
                    init: true,
                },
                FieldDescriptor {
                    name: "label".to_string(),
                    field_type: TypeHandle::named("str"),
                    default: None,
                    default_factory: None,
                    init: true,
                },
            ],
            annotations: vec![
                AnnotationEntry {
                    name: "retries".to_string(),
                    annotation: Annotation::Plain(TypeHandle::named("int")),
                },
                AnnotationEntry {
                    name: "seed".to_string(),
                    annotation: Annotation::InitOnly(TypeHandle::named("InitOnly")),
                },
            ],
            class_defaults: vec![ClassDefault {
                name: "seed".to_string(),
                value: DefaultValue::new("7", TypeHandle::named("int")),
            }],
        }
    }

    #[test]
    fn json_round_trip_preserves_descriptor() {
        let record = widget();
        let json = serialize_record_descriptor(&record).unwrap();
        let mut parsed = deserialize_record_descriptor(&json).unwrap();
        // Serialization sorts fields by name; restore declaration order before comparing.
        parsed.fields.sort_by(|a, b| b.name.cmp(&a.name));
        assert_eq!(parsed, record);
    }

    #[test]
    fn missing_init_key_defaults_to_participating() {
        let json = r#"
        {
            "name": "Widget",
            "full_name": "widgets.Widget",
            "fields": [
                { "name": "label", "field_type": { "name": "str" } }
            ]
        }"#;
        let record = deserialize_record_descriptor(json).unwrap();
        assert!(record.fields[0].init);
        assert!(record.fields[0].default.is_none());
        assert!(record.fields[0].default_factory.is_none());
    }

    #[test]
    fn init_only_resolution_requires_marker_annotation() {
        let record = widget();
        let (marker, default) = record.resolve_init_only("seed").unwrap();
        assert_eq!(marker.name, "InitOnly");
        assert_eq!(default.map(|value| value.repr.as_str()), Some("7"));

        assert!(record.resolve_init_only("retries").is_none(), "plain annotation");
        assert!(record.resolve_init_only("missing").is_none(), "no annotation");
    }

    #[test]
    fn target_kind_parse_and_display_round_trip() {
        for label in ["module", "class", "function", "method", "attribute"] {
            assert_eq!(TargetKind::parse(label).to_string(), label);
        }
        assert_eq!(TargetKind::parse("exception"), TargetKind::Class);
        assert_eq!(TargetKind::parse("property"), TargetKind::Other);
        assert_eq!(TargetKind::parse("ATTRIBUTE"), TargetKind::Attribute);
    }

    #[test]
    fn factory_qualified_name_joins_module_and_function() {
        let factory = FactoryRef::new("collections", "empty_list");
        assert_eq!(factory.qualified_name(), "collections.empty_list");
    }
}

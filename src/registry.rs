use std::collections::HashMap;

use crate::model::RecordDescriptor;

/// Record declarations observed during one documentation-generation run.
///
/// The registry is owned by the enricher driving the run: created with it,
/// populated as declarations are observed, and discarded with it. A later
/// observation of an already-registered name replaces the earlier entry;
/// entries are never removed.
#[derive(Debug, Default)]
pub struct DeclarationRegistry {
    records: HashMap<String, RecordDescriptor>,
}

impl DeclarationRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, full_name: impl Into<String>, record: RecordDescriptor) {
        let full_name = full_name.into();
        tracing::debug!(record = %full_name, "registered record declaration");
        self.records.insert(full_name, record);
    }

    #[must_use]
    pub fn get(&self, full_name: &str) -> Option<&RecordDescriptor> {
        self.records.get(full_name)
    }

    #[must_use]
    pub fn contains(&self, full_name: &str) -> bool {
        self.records.contains_key(full_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, full_name: &str) -> RecordDescriptor {
        RecordDescriptor {
            name: name.to_string(),
            full_name: full_name.to_string(),
            fields: Vec::new(),
            annotations: Vec::new(),
            class_defaults: Vec::new(),
        }
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = DeclarationRegistry::new();
        assert!(registry.is_empty());

        registry.register("widgets.Widget", record("Widget", "widgets.Widget"));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("widgets.Widget"));
        assert!(registry.get("widgets.Gadget").is_none());
    }

    #[test]
    fn registrations_are_isolated_by_name() {
        let mut registry = DeclarationRegistry::new();
        registry.register("widgets.Widget", record("Widget", "widgets.Widget"));
        registry.register("widgets.Gadget", record("Gadget", "widgets.Gadget"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("widgets.Widget").unwrap().name, "Widget");
        assert_eq!(registry.get("widgets.Gadget").unwrap().name, "Gadget");
    }

    #[test]
    fn later_registration_wins() {
        let mut registry = DeclarationRegistry::new();
        registry.register("widgets.Widget", record("Widget", "widgets.Widget"));
        registry.register("widgets.Widget", record("WidgetV2", "widgets.Widget"));

        assert_eq!(registry.len(), 1);
        let stored = registry.get("widgets.Widget").unwrap();
        assert_eq!(stored.name, "WidgetV2");
    }
}

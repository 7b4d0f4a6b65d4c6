use std::fmt;
use std::sync::Arc;

use crate::format::{format_field, format_init_only};
use crate::model::{RecordDescriptor, TargetKind};
use crate::registry::DeclarationRegistry;
use crate::render::{CrossRefRenderer, TypeRenderer};
use crate::resolve::{ResolvedTarget, resolve_target};

/// Per-run docstring enrichment context.
///
/// Create one enricher per documentation-generation run, feed it every
/// documented object in the order the host pipeline visits them, and drop it
/// with the run. Record declarations it observes are collected in its
/// registry; attribute docstrings whose owner was observed earlier get the
/// type, default, and construction markers injected.
pub struct DocstringEnricher {
    registry: DeclarationRegistry,
    renderer: Arc<dyn TypeRenderer>,
}

impl Default for DocstringEnricher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DocstringEnricher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocstringEnricher")
            .field("registry", &self.registry)
            .field("renderer", &"<custom>")
            .finish()
    }
}

impl DocstringEnricher {
    #[must_use]
    pub fn new() -> Self {
        Self::with_renderer(Arc::new(CrossRefRenderer))
    }

    #[must_use]
    pub fn with_renderer(renderer: Arc<dyn TypeRenderer>) -> Self {
        Self {
            registry: DeclarationRegistry::new(),
            renderer,
        }
    }

    /// Declarations observed so far in this run.
    #[must_use]
    pub fn registry(&self) -> &DeclarationRegistry {
        &self.registry
    }

    /// Hook invoked by the host pipeline once per documented object.
    ///
    /// `object` is the record handle for declaration targets and `None` for
    /// member targets. Either mutates `lines` in place or leaves the sequence
    /// untouched; nothing is written before resolution succeeds.
    pub fn process(
        &mut self,
        kind: TargetKind,
        name: &str,
        object: Option<&RecordDescriptor>,
        lines: &mut Vec<String>,
    ) {
        match resolve_target(&mut self.registry, kind, name, object) {
            Some(ResolvedTarget::Field(field)) => {
                format_field(field, self.renderer.as_ref(), lines);
            }
            Some(ResolvedTarget::InitOnly { marker, default }) => {
                format_init_only(marker, default, self.renderer.as_ref(), lines);
            }
            None => {}
        }
    }
}

//! Type entries: one parsed definition plus its derived generation metadata.

use crate::directive::resolve_namespace;
use crate::error::SchemaError;
use crate::types::{Definition, SourceLocator};
use std::sync::Arc;

/// Whether an entry is generated by the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Owned by an already-built dependency; used for resolution only.
    Reference,
    /// Owned by the current build; an artifact must be emitted.
    Generation,
}

impl Origin {
    /// Returns a lowercase label for logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Generation => "generation",
        }
    }
}

/// Immutable wrapper around one type definition.
#[derive(Debug, Clone)]
pub struct TypeEntry {
    name: String,
    locator: SourceLocator,
    namespace: String,
    has_identity_field: bool,
    origin: Origin,
    definition: Arc<Definition>,
}

impl TypeEntry {
    /// Builds an entry for `definition` read from `source`.
    ///
    /// Non-type definitions produce an entry with an empty name; callers must
    /// not insert those into a registry.
    ///
    /// # Errors
    /// Returns `SchemaError::DirectiveValue` if the namespace override is malformed.
    pub fn new(
        definition: Definition,
        source: &SourceLocator,
        default_namespace: &str,
        origin: Origin,
    ) -> Result<Self, SchemaError> {
        let locator = source.at(definition.position());
        let namespace = resolve_namespace(definition.directives(), default_namespace, &locator)?;

        Ok(Self {
            name: definition.type_name().unwrap_or_default().to_string(),
            has_identity_field: definition.has_identity_field(),
            locator,
            namespace,
            origin,
            definition: Arc::new(definition),
        })
    }

    /// Type name; empty for non-type definitions.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the definition came from.
    #[must_use]
    pub fn locator(&self) -> &SourceLocator {
        &self.locator
    }

    /// Resolved namespace (package).
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// True for object types having a field named exactly `id`.
    #[must_use]
    pub const fn has_identity_field(&self) -> bool {
        self.has_identity_field
    }

    /// Reference or generation.
    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    /// True if the current run must emit an artifact for this entry.
    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.origin == Origin::Generation
    }

    /// The wrapped definition.
    #[must_use]
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Fully qualified name, `namespace.Name`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

//! Type registry.
//!
//! Entries are collected through a [`RegistryBuilder`], which may be shared by
//! several producers, then frozen into a read-only [`TypeRegistry`]. Freezing
//! consumes the builder, so no insertion can happen once generation starts.

use crate::entry::{Origin, TypeEntry};
use crate::error::SchemaError;
use crate::types::{Definition, SourceLocator};
use parking_lot::Mutex;
use std::collections::BTreeMap;

/// Result of adding one batch of definitions.
#[derive(Debug, Default)]
#[must_use]
pub struct BatchOutcome {
    /// Names inserted by this batch.
    pub inserted: Vec<String>,
    /// Errors raised by this batch; the offending entries were not inserted.
    pub errors: Vec<SchemaError>,
}

impl BatchOutcome {
    /// Returns true if no error was raised.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Mutable collection stage of the registry.
#[derive(Debug)]
pub struct RegistryBuilder {
    default_namespace: String,
    entries: Mutex<BTreeMap<String, TypeEntry>>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    ///
    /// # Arguments
    /// * `default_namespace` - Namespace for definitions without an override
    #[must_use]
    pub fn new(default_namespace: impl Into<String>) -> Self {
        Self {
            default_namespace: default_namespace.into(),
            entries: Mutex::new(BTreeMap::new()),
        }
    }

    /// Default namespace applied to new entries.
    #[must_use]
    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    /// Adds definitions owned by already-built dependencies.
    ///
    /// These are available for resolution and are never generated.
    pub fn add_reference(
        &self,
        locator: &SourceLocator,
        definitions: Vec<Definition>,
    ) -> BatchOutcome {
        self.add(locator, definitions, Origin::Reference)
    }

    /// Adds definitions owned by the current build.
    pub fn add_generation(
        &self,
        locator: &SourceLocator,
        definitions: Vec<Definition>,
    ) -> BatchOutcome {
        self.add(locator, definitions, Origin::Generation)
    }

    fn add(
        &self,
        locator: &SourceLocator,
        definitions: Vec<Definition>,
        origin: Origin,
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for definition in definitions {
            if !definition.is_type() {
                tracing::debug!(
                    "Ignoring {} definition at {}",
                    definition.kind_name(),
                    locator.at(definition.position())
                );
                if let Definition::Extension(ext) = &definition {
                    tracing::warn!(
                        "Type extensions are not merged; ignoring 'extend {} {}' at {}",
                        ext.kind,
                        ext.name,
                        locator.at(ext.position)
                    );
                }
                continue;
            }

            let entry =
                match TypeEntry::new(definition, locator, &self.default_namespace, origin) {
                    Ok(entry) => entry,
                    Err(e) => {
                        tracing::error!("{}", e);
                        outcome.errors.push(e);
                        continue;
                    }
                };

            match self.insert(entry) {
                Ok(name) => outcome.inserted.push(name),
                Err(e) => outcome.errors.push(e),
            }
        }

        outcome
    }

    /// Inserts a prebuilt entry; the first entry for a name wins.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateTypeName` if the name is already taken.
    pub fn insert(&self, entry: TypeEntry) -> Result<String, SchemaError> {
        let name = entry.name().to_string();
        let mut entries = self.entries.lock();

        if let Some(existing) = entries.get(&name) {
            let err = SchemaError::DuplicateTypeName {
                name,
                first: existing.locator().clone(),
                second: entry.locator().clone(),
            };
            tracing::warn!("{}", err);
            return Err(err);
        }

        tracing::debug!(
            "Registered {} type '{}' in '{}'",
            entry.origin().as_str(),
            name,
            entry.namespace()
        );
        entries.insert(name.clone(), entry);
        Ok(name)
    }

    /// Number of entries collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if nothing was collected yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Ends the collection stage.
    #[must_use]
    pub fn freeze(self) -> TypeRegistry {
        TypeRegistry {
            entries: self.entries.into_inner(),
        }
    }
}

/// Frozen, read-only registry consumed by the code generator.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: BTreeMap<String, TypeEntry>,
}

impl TypeRegistry {
    /// Looks up an entry by name, regardless of origin.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&TypeEntry> {
        self.entries.get(name)
    }

    /// Entries the current run must generate, ordered by name.
    pub fn generation_entries(&self) -> impl Iterator<Item = &TypeEntry> {
        self.entries.values().filter(|entry| entry.is_generated())
    }

    /// Entries known for resolution only, ordered by name.
    pub fn reference_entries(&self) -> impl Iterator<Item = &TypeEntry> {
        self.entries.values().filter(|entry| !entry.is_generated())
    }

    /// Union entries, of any origin, listing `member` among their members.
    pub fn unions_containing<'a>(
        &'a self,
        member: &'a str,
    ) -> impl Iterator<Item = &'a TypeEntry> {
        self.entries.values().filter(move |entry| match entry.definition() {
            Definition::Union(def) => def.members.iter().any(|m| m == member),
            _ => false,
        })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry holds no entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Directive, DirectiveDef, ExtensionDef, FieldDef, ObjectDef, Position, TypeRef, UnionDef,
        Value,
    };

    fn object(name: &str) -> Definition {
        Definition::Object(ObjectDef::new(name).with_field(FieldDef::new("id", TypeRef::named("ID"))))
    }

    #[test]
    fn test_add_reference_and_generation() {
        let builder = RegistryBuilder::new("com.x");
        let a = builder.add_reference(&SourceLocator::new("dep.graphql"), vec![object("User")]);
        let b = builder.add_generation(&SourceLocator::new("own.graphql"), vec![object("Post")]);
        assert!(a.is_ok());
        assert!(b.is_ok());

        let registry = builder.freeze();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.resolve("User").map(TypeEntry::origin),
            Some(Origin::Reference)
        );
        let generated: Vec<&str> = registry.generation_entries().map(TypeEntry::name).collect();
        assert_eq!(generated, ["Post"]);
        let referenced: Vec<&str> = registry.reference_entries().map(TypeEntry::name).collect();
        assert_eq!(referenced, ["User"]);
    }

    #[test]
    fn test_duplicate_name_keeps_first() {
        let builder = RegistryBuilder::new("com.x");
        let first = Definition::Object(ObjectDef::new("User").with_directive(
            Directive::new("java").with_argument("package", Value::String("com.first".into())),
        ));
        let _ = builder.add_generation(&SourceLocator::new("a.graphql"), vec![first]);
        let outcome = builder.add_generation(&SourceLocator::new("b.graphql"), vec![object("User")]);

        assert!(outcome.inserted.is_empty());
        assert_eq!(outcome.errors.len(), 1);
        match &outcome.errors[0] {
            SchemaError::DuplicateTypeName {
                name,
                first,
                second,
            } => {
                assert_eq!(name, "User");
                assert_eq!(first.source, "a.graphql");
                assert_eq!(second.source, "b.graphql");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let registry = builder.freeze();
        assert_eq!(registry.resolve("User").map(TypeEntry::namespace), Some("com.first"));
    }

    #[test]
    fn test_duplicate_across_origins_is_conflict() {
        let builder = RegistryBuilder::new("com.x");
        let _ = builder.add_reference(&SourceLocator::new("dep.graphql"), vec![object("User")]);
        let outcome = builder.add_generation(&SourceLocator::new("own.graphql"), vec![object("User")]);

        assert!(matches!(
            outcome.errors.as_slice(),
            [SchemaError::DuplicateTypeName { .. }]
        ));
        let registry = builder.freeze();
        assert_eq!(registry.generation_entries().count(), 0);
    }

    #[test]
    fn test_non_type_definitions_are_skipped() {
        let builder = RegistryBuilder::new("com.x");
        let defs = vec![
            Definition::Directive(DirectiveDef {
                name: "java".to_string(),
                arguments: Vec::new(),
                position: Position::new(1, 1),
            }),
            Definition::Extension(ExtensionDef {
                name: "User".to_string(),
                kind: "type",
                position: Position::new(3, 1),
            }),
            object("User"),
        ];
        let outcome = builder.add_generation(&SourceLocator::new("a.graphql"), defs);

        assert!(outcome.is_ok());
        assert_eq!(outcome.inserted, ["User"]);
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_directive_error_skips_entry_only() {
        let builder = RegistryBuilder::new("com.x");
        let bad = Definition::Object(
            ObjectDef::new("Bad")
                .with_directive(Directive::new("java").with_argument("package", Value::Int(1))),
        );
        let outcome =
            builder.add_generation(&SourceLocator::new("a.graphql"), vec![bad, object("Good")]);

        assert_eq!(outcome.inserted, ["Good"]);
        assert!(matches!(
            outcome.errors.as_slice(),
            [SchemaError::DirectiveValue { .. }]
        ));
    }

    #[test]
    fn test_concurrent_producers() {
        let builder = RegistryBuilder::new("com.x");

        std::thread::scope(|scope| {
            for i in 0..8 {
                let builder = &builder;
                scope.spawn(move || {
                    let locator = SourceLocator::new(format!("file{i}.graphql"));
                    let defs = (0..16).map(|j| object(&format!("Type{i}x{j}"))).collect();
                    let outcome = builder.add_generation(&locator, defs);
                    assert!(outcome.is_ok());
                });
            }
        });

        let registry = builder.freeze();
        assert_eq!(registry.len(), 128);
        let names: Vec<&str> = registry.generation_entries().map(TypeEntry::name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_unions_containing() {
        let builder = RegistryBuilder::new("com.x");
        let locator = SourceLocator::new("a.graphql");
        let union = |name: &str, members: &[&str]| {
            Definition::Union(UnionDef {
                name: name.to_string(),
                description: None,
                directives: Vec::new(),
                members: members.iter().map(|m| m.to_string()).collect(),
                position: Position::new(1, 1),
            })
        };
        let outcome = builder.add_generation(
            &locator,
            vec![
                object("User"),
                object("Post"),
                union("Actor", &["User"]),
                union("SearchResult", &["User", "Post"]),
            ],
        );
        assert!(outcome.is_ok());
        let registry = builder.freeze();

        let names: Vec<&str> = registry.unions_containing("User").map(|e| e.name()).collect();
        assert_eq!(names, ["Actor", "SearchResult"]);
        assert_eq!(registry.unions_containing("Post").count(), 1);
        assert_eq!(registry.unions_containing("Actor").count(), 0);
    }

    #[test]
    fn test_resolve_missing() {
        let registry = RegistryBuilder::new("com.x").freeze();
        assert!(registry.is_empty());
        assert!(registry.resolve("User").is_none());
    }
}

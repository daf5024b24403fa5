//! Resolved view of a generation entry.
//!
//! Resolution looks every mentioned type name up in the frozen registry. It
//! never descends into the referenced entries, so self references and mutual
//! references between generated types terminate without any cycle tracking.

use crate::entry::{Origin, TypeEntry};
use crate::error::SchemaError;
use crate::registry::TypeRegistry;
use crate::types::{Definition, is_builtin_scalar};
use std::collections::BTreeMap;

/// Edge from a generated entry to another registry entry it mentions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    /// Referenced type name.
    pub name: String,
    /// Namespace of the referenced type.
    pub namespace: String,
    /// Origin of the referenced entry.
    pub origin: Origin,
}

impl DependencyEdge {
    /// Fully qualified name of the target.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

/// An entry whose type references all resolved.
#[derive(Debug, Clone)]
pub struct ResolvedEntry<'r> {
    /// The entry itself.
    pub entry: &'r TypeEntry,
    /// Dependencies keyed by type name (self references excluded).
    pub dependencies: BTreeMap<String, DependencyEdge>,
    /// Unions listing this object among their members, ordered by name.
    pub unions: Vec<String>,
}

impl<'r> ResolvedEntry<'r> {
    /// Looks up the dependency edge for a type name.
    #[must_use]
    pub fn dependency(&self, name: &str) -> Option<&DependencyEdge> {
        self.dependencies.get(name)
    }

    /// Namespace of a referenced non-builtin type, or of the entry itself for self references.
    #[must_use]
    pub fn namespace_of(&self, name: &str) -> Option<&str> {
        if name == self.entry.name() {
            return Some(self.entry.namespace());
        }
        self.dependencies.get(name).map(|d| d.namespace.as_str())
    }

    /// Dependencies living in a different namespace than the entry, which need imports.
    pub fn foreign_dependencies(&self) -> impl Iterator<Item = &DependencyEdge> {
        let namespace = self.entry.namespace();
        self.dependencies
            .values()
            .filter(move |d| d.namespace != namespace)
    }
}

/// Resolves every type reference of `entry` against `registry`.
///
/// # Errors
/// Returns one `SchemaError::UnresolvedTypeReference` per missing name.
pub fn resolve_entry<'r>(
    entry: &'r TypeEntry,
    registry: &'r TypeRegistry,
) -> Result<ResolvedEntry<'r>, Vec<SchemaError>> {
    let mut dependencies = BTreeMap::new();
    let mut errors = Vec::new();

    for reference in entry.definition().type_references() {
        if is_builtin_scalar(&reference.name) || reference.name == entry.name() {
            continue;
        }
        if dependencies.contains_key(&reference.name) {
            continue;
        }

        match registry.resolve(&reference.name) {
            Some(target) => {
                dependencies.insert(
                    reference.name.clone(),
                    DependencyEdge {
                        name: reference.name,
                        namespace: target.namespace().to_string(),
                        origin: target.origin(),
                    },
                );
            }
            None => {
                let already_reported = errors.iter().any(|e| {
                    matches!(e, SchemaError::UnresolvedTypeReference { missing, .. } if *missing == reference.name)
                });
                if !already_reported {
                    errors.push(SchemaError::unresolved(
                        entry.name(),
                        reference.name,
                        reference.site,
                        entry.locator().clone(),
                    ));
                }
            }
        }
    }

    // An object implements the marker interface of every union containing it.
    let mut unions = Vec::new();
    if matches!(entry.definition(), Definition::Object(_)) {
        for union in registry.unions_containing(entry.name()) {
            dependencies
                .entry(union.name().to_string())
                .or_insert_with(|| DependencyEdge {
                    name: union.name().to_string(),
                    namespace: union.namespace().to_string(),
                    origin: union.origin(),
                });
            unions.push(union.name().to_string());
        }
    }

    if errors.is_empty() {
        Ok(ResolvedEntry {
            entry,
            dependencies,
            unions,
        })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;
    use crate::registry::RegistryBuilder;
    use crate::types::SourceLocator;

    fn registry(reference: &str, generation: &str) -> TypeRegistry {
        let builder = RegistryBuilder::new("com.x");
        let dep = SourceLocator::new("dep.graphql");
        let own = SourceLocator::new("own.graphql");
        let outcome = builder.add_reference(&dep, parse_schema(&dep, reference).expect("parse"));
        assert!(outcome.is_ok());
        let outcome = builder.add_generation(&own, parse_schema(&own, generation).expect("parse"));
        assert!(outcome.is_ok());
        builder.freeze()
    }

    #[test]
    fn test_resolve_reference_entry() {
        let registry = registry(
            r#"type User @java(package: "com.dep") { id: ID }"#,
            "type Post { id: ID, author: User }",
        );
        let post = registry.resolve("Post").expect("Post");
        let resolved = resolve_entry(post, &registry).expect("resolve");

        let user = resolved.dependency("User").expect("edge to User");
        assert_eq!(user.origin, Origin::Reference);
        assert_eq!(user.qualified_name(), "com.dep.User");
        assert_eq!(resolved.foreign_dependencies().count(), 1);
    }

    #[test]
    fn test_unresolved_reference() {
        let registry = registry("", "type Post { id: ID, author: User, editor: User, tag: Tag }");
        let post = registry.resolve("Post").expect("Post");
        let errors = resolve_entry(post, &registry).expect_err("should fail");

        let missing: Vec<&str> = errors
            .iter()
            .map(|e| match e {
                SchemaError::UnresolvedTypeReference { entry, missing, .. } => {
                    assert_eq!(entry, "Post");
                    missing.as_str()
                }
                other => panic!("unexpected error: {other:?}"),
            })
            .collect();
        assert_eq!(missing, ["User", "Tag"]);
    }

    #[test]
    fn test_mutual_and_self_references() {
        let registry = registry(
            "",
            "type A { id: ID, b: B, parent: A }\ntype B { id: ID, a: [A!]! }",
        );
        for name in ["A", "B"] {
            let entry = registry.resolve(name).expect("entry");
            let resolved = resolve_entry(entry, &registry).expect("resolve");
            assert_eq!(resolved.dependencies.len(), 1);
            assert_eq!(resolved.namespace_of(name), Some("com.x"));
        }
        let a = registry.resolve("A").expect("A");
        let resolved = resolve_entry(a, &registry).expect("resolve");
        assert_eq!(
            resolved.dependency("B").map(|d| d.origin),
            Some(Origin::Generation)
        );
        assert_eq!(resolved.foreign_dependencies().count(), 0);
    }

    #[test]
    fn test_argument_and_member_references() {
        let registry = registry(
            "input Filter { q: String }",
            "type Q { id: ID, find(filter: Filter): [R] }\ntype R { id: ID }\nunion U = Q | R",
        );
        let q = registry.resolve("Q").expect("Q");
        let resolved = resolve_entry(q, &registry).expect("resolve");
        assert!(resolved.dependency("Filter").is_some());
        assert!(resolved.dependency("R").is_some());

        let u = registry.resolve("U").expect("U");
        let resolved = resolve_entry(u, &registry).expect("resolve");
        assert_eq!(resolved.dependencies.len(), 2);
        assert!(resolved.unions.is_empty());
    }

    #[test]
    fn test_union_membership() {
        let registry = registry(
            r#"union Actor @java(package: "com.dep") = User"#,
            "type User { id: ID }
type Post { id: ID }
union SearchResult = User | Post",
        );
        let user = registry.resolve("User").expect("User");
        let resolved = resolve_entry(user, &registry).expect("resolve");
        assert_eq!(resolved.unions, ["Actor", "SearchResult"]);
        assert_eq!(
            resolved.dependency("Actor").map(DependencyEdge::qualified_name),
            Some("com.dep.Actor".to_string())
        );
        assert_eq!(
            resolved.dependency("SearchResult").map(|d| d.origin),
            Some(Origin::Generation)
        );

        let post = registry.resolve("Post").expect("Post");
        let resolved = resolve_entry(post, &registry).expect("resolve");
        assert_eq!(resolved.unions, ["SearchResult"]);
    }
}

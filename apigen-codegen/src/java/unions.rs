//! Union type generation.

use super::{banner_source, dependency_imports, render_file};
use apigen_schema::{ResolvedEntry, UnionDef};

/// Generator for union types.
pub struct UnionGenerator<'a> {
    resolved: &'a ResolvedEntry<'a>,
}

impl<'a> UnionGenerator<'a> {
    /// Creates a new union generator.
    #[must_use]
    pub fn new(resolved: &'a ResolvedEntry<'a>) -> Self {
        Self { resolved }
    }

    /// Generates a marker interface listing its members in the Javadoc.
    #[must_use]
    pub fn generate(&self, def: &UnionDef) -> String {
        // Members are only mentioned in Javadoc, which resolves imports too.
        let imports = dependency_imports(self.resolved);

        let mut body = String::new();
        body.push_str("/**\n");
        if let Some(description) = def.description.as_deref() {
            for line in description.lines() {
                let line = line.trim_end().replace("*/", "*&#47;");
                if line.is_empty() {
                    body.push_str(" *\n");
                } else {
                    body.push_str(&format!(" * {line}\n"));
                }
            }
            body.push_str(" *\n");
        }
        body.push_str(" * Members:\n");
        body.push_str(" * <ul>\n");
        for member in &def.members {
            body.push_str(&format!(" *   <li>{{@link {member}}}</li>\n"));
        }
        body.push_str(" * </ul>\n");
        body.push_str(" */\n");
        body.push_str(&format!("public interface {} {{\n}}\n", def.name));

        render_file(
            self.resolved.entry.namespace(),
            &banner_source(self.resolved),
            &imports,
            &body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigen_schema::{Definition, RegistryBuilder, SourceLocator, parse_schema, resolve_entry};

    #[test]
    fn test_generate_union() {
        let builder = RegistryBuilder::new("com.x");
        let dep = SourceLocator::new("dep.graphql");
        let own = SourceLocator::new("own.graphql");
        let defs = parse_schema(&dep, r#"type Image @java(package: "com.media") { url: String }"#)
            .expect("Failed to parse");
        assert!(builder.add_reference(&dep, defs).is_ok());
        let defs = parse_schema(&own, "type Post { id: ID }\nunion SearchResult = Post | Image")
            .expect("Failed to parse");
        assert!(builder.add_generation(&own, defs).is_ok());
        let registry = builder.freeze();

        let entry = registry.resolve("SearchResult").expect("entry");
        let resolved = resolve_entry(entry, &registry).expect("resolve");
        let Definition::Union(def) = entry.definition() else {
            panic!("expected union");
        };
        let code = UnionGenerator::new(&resolved).generate(def);

        assert!(code.contains("import com.media.Image;"));
        assert!(code.contains(" *   <li>{@link Post}</li>\n *   <li>{@link Image}</li>\n"));
        assert!(code.contains("public interface SearchResult {\n}\n"));
    }
}

//! Custom scalar generation.
//!
//! A custom scalar carries no structure in the schema, so it becomes an
//! immutable wrapper around its serialized string form.

use super::{banner_source, push_javadoc, render_file};
use apigen_schema::{ResolvedEntry, ScalarDef};
use std::collections::BTreeSet;

/// Generator for custom scalars.
pub struct ScalarGenerator<'a> {
    resolved: &'a ResolvedEntry<'a>,
}

impl<'a> ScalarGenerator<'a> {
    /// Creates a new scalar generator.
    #[must_use]
    pub fn new(resolved: &'a ResolvedEntry<'a>) -> Self {
        Self { resolved }
    }

    /// Generates the wrapper class for `def`.
    #[must_use]
    pub fn generate(&self, def: &ScalarDef) -> String {
        let mut imports = BTreeSet::new();
        imports.insert("java.util.Objects".to_string());

        let mut body = String::new();
        push_javadoc(&mut body, "", def.description.as_deref());
        body.push_str(&format!("public final class {} {{\n", def.name));
        body.push_str("    private final String _value;\n\n");

        body.push_str(&format!("    public {}(String _value) {{\n", def.name));
        body.push_str("        this._value = _value;\n");
        body.push_str("    }\n\n");

        body.push_str("    public String getValue() {\n");
        body.push_str("        return _value;\n");
        body.push_str("    }\n\n");

        body.push_str("    @Override\n");
        body.push_str("    public String toString() {\n");
        body.push_str("        return _value;\n");
        body.push_str("    }\n\n");

        body.push_str("    @Override\n");
        body.push_str("    public boolean equals(Object obj) {\n");
        body.push_str("        if (this == obj) return true;\n");
        body.push_str(&format!(
            "        if (!(obj instanceof {})) return false;\n",
            def.name
        ));
        body.push_str(&format!(
            "        return Objects.equals(_value, (({}) obj)._value);\n",
            def.name
        ));
        body.push_str("    }\n\n");

        body.push_str("    @Override\n");
        body.push_str("    public int hashCode() {\n");
        body.push_str("        return Objects.hashCode(_value);\n");
        body.push_str("    }\n");
        body.push_str("}\n");

        render_file(
            self.resolved.entry.namespace(),
            &banner_source(self.resolved),
            &imports,
            &body,
        )
    }
}

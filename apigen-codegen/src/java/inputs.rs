//! Input object generation.
//!
//! Input objects are plain values: an immutable class with getters and a
//! nested `Builder`.

use super::types::{java_type, needs_list_import};
use super::{banner_source, dependency_imports, push_javadoc, render_file};
use crate::naming::{builder_method_name, getter_name, member_name};
use apigen_schema::{InputObjectDef, ResolvedEntry};

/// Generator for input object types.
pub struct InputGenerator<'a> {
    resolved: &'a ResolvedEntry<'a>,
}

impl<'a> InputGenerator<'a> {
    /// Creates a new input generator.
    #[must_use]
    pub fn new(resolved: &'a ResolvedEntry<'a>) -> Self {
        Self { resolved }
    }

    /// Generates the compilation unit for `def`.
    #[must_use]
    pub fn generate(&self, def: &InputObjectDef) -> String {
        let mut imports = dependency_imports(self.resolved);
        if def.fields.iter().any(|f| needs_list_import(&f.value_type)) {
            imports.insert("java.util.List".to_string());
        }

        let mut body = String::new();
        push_javadoc(&mut body, "", def.description.as_deref());
        body.push_str(&format!("public class {} {{\n", def.name));

        for field in &def.fields {
            body.push_str(&format!(
                "    private {} {};\n",
                java_type(&field.value_type),
                member_name(&field.name)
            ));
        }
        if !def.fields.is_empty() {
            body.push('\n');
        }

        body.push_str(&format!("    protected {}(Builder builder) {{\n", def.name));
        for field in &def.fields {
            let member = member_name(&field.name);
            body.push_str(&format!("        this.{member} = builder.{member};\n"));
        }
        body.push_str("    }\n\n");

        // Builder
        body.push_str("    public static class Builder {\n");
        for field in &def.fields {
            body.push_str(&format!(
                "        private {} {};\n",
                java_type(&field.value_type),
                member_name(&field.name)
            ));
        }
        body.push('\n');
        for field in &def.fields {
            let member = member_name(&field.name);
            body.push_str(&format!(
                "        public Builder {}({} {member}) {{\n",
                builder_method_name(&field.name),
                java_type(&field.value_type)
            ));
            body.push_str(&format!("            this.{member} = {member};\n"));
            body.push_str("            return this;\n");
            body.push_str("        }\n\n");
        }
        body.push_str(&format!("        public {} build() {{\n", def.name));
        body.push_str(&format!("            return new {}(this);\n", def.name));
        body.push_str("        }\n");
        body.push_str("    }\n\n");

        for field in &def.fields {
            push_javadoc(&mut body, "    ", field.description.as_deref());
            body.push_str(&format!(
                "    public {} {}() {{\n",
                java_type(&field.value_type),
                getter_name(&field.name)
            ));
            body.push_str(&format!("        return {};\n", member_name(&field.name)));
            body.push_str("    }\n\n");
        }

        let parts: Vec<String> = def
            .fields
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let sep = if i == 0 { "" } else { ", " };
                format!(" + \"{sep}{}=\" + {}", f.name, member_name(&f.name))
            })
            .collect();
        body.push_str("    @Override\n");
        body.push_str("    public String toString() {\n");
        body.push_str(&format!(
            "        return \"{}{{\"{} + \"}}\";\n",
            def.name,
            parts.concat()
        ));
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
